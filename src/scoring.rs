//! Faan (point) scoring of a finished hand decomposition.

use std::collections::BTreeSet;

use crate::meld::Meld;
use crate::tile::{Suit, Wind};

/// Win-circumstance tags — the externally observed conditions under which a
/// hand was completed. Structural/suit/dragon/wind/flower bonuses are never
/// threaded in this way; [`Scorer`] derives those itself from the
/// decomposition.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WinTag {
    SelfPick,
    ConcealedHand,
    RobKong,
    LastDraw,
    WinByKong,
    WinByDoubleKong,
    WinByDiscard,
    HeavenlyHand,
    EarthlyHand,
}

impl WinTag {
    /// Faan contributed by this tag alone, per the canonical table.
    /// `WinByDiscard` is a descriptive marker only and carries no faan of its
    /// own — the discard-claim itself doesn't score, only what accompanies it.
    pub const fn faan(self) -> u8 {
        match self {
            WinTag::SelfPick => 1,
            WinTag::ConcealedHand => 1,
            WinTag::RobKong => 1,
            WinTag::LastDraw => 1,
            WinTag::WinByKong => 1,
            WinTag::WinByDoubleKong => 8,
            WinTag::WinByDiscard => 0,
            WinTag::HeavenlyHand => 13,
            WinTag::EarthlyHand => 13,
        }
    }
}

/// Context a decomposition is scored against.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandContext {
    pub win_condition: BTreeSet<WinTag>,
    pub thirteen_orphans: bool,
    pub nine_gates: bool,
    pub seat_wind: Wind,
    pub round_wind: Wind,
}

impl HandContext {
    pub fn new(seat_wind: Wind, round_wind: Wind) -> Self {
        Self { seat_wind, round_wind, ..Default::default() }
    }
}

/// Stateless faan calculator.
pub struct Scorer;

impl Scorer {
    /// Scores a complete decomposition (pair, structural sets, and any
    /// flower singletons) against `context`, applying the additive
    /// accumulation rules in full, including the dragon-pung bonus being
    /// counted twice (see the reconciliation note on
    /// `half_flush_all_pung_hand_with_dragon` below).
    pub fn score(melds: &[Meld], context: &HandContext) -> u8 {
        if context.thirteen_orphans {
            return 13;
        }
        if context.nine_gates {
            return 10;
        }

        let mut total: u32 = 0;
        let mut dragon_pungs = 0u32;
        let mut wind_pungs = 0u32;
        let mut chows = 0u32;
        let mut pungs = 0u32;
        let mut kongs = 0u32;

        for meld in melds {
            match meld {
                Meld::Chow(..) => chows += 1,
                Meld::Pung(t) | Meld::Kong(t) => {
                    if matches!(meld, Meld::Pung(_)) { pungs += 1 } else { kongs += 1 }
                    if t.as_dragon().is_some() {
                        dragon_pungs += 1;
                        total += 1;
                    }
                    if let Some(wind) = t.as_wind() {
                        wind_pungs += 1;
                        if wind == context.seat_wind { total += 1 }
                        if wind == context.round_wind { total += 1 }
                    }
                }
                Meld::Pair(_) | Meld::Flower(_) => {}
            }
        }

        // Flowers.
        let flower_values: Vec<u8> = melds.iter().filter_map(|m| match m {
            Meld::Flower(t) => Some(t.value()),
            _ => None,
        }).collect();
        if flower_values.is_empty() {
            total += 1; // no_flowers
        }
        for &value in &flower_values {
            let ordinal = ((value - 1) % 4) + 1;
            let owning_wind = match ordinal {
                1 => Wind::East,
                2 => Wind::South,
                3 => Wind::West,
                _ => Wind::North,
            };
            if owning_wind == context.seat_wind {
                total += 1; // own_flower
            }
        }
        if [1, 2, 3, 4].iter().all(|v| flower_values.contains(v)) {
            total += 2; // set_of_flowers (flowers)
        }
        if [5, 6, 7, 8].iter().all(|v| flower_values.contains(v)) {
            total += 2; // set_of_flowers (seasons)
        }

        for &tag in &context.win_condition {
            total += tag.faan() as u32;
        }

        // Structural: no pungs and no kongs at all.
        if pungs == 0 && kongs == 0 {
            total += 1; // common_hand
        } else if chows == 0 {
            total += if kongs == 4 { 10 } else { 3 }; // eighteen_arhats / all_pung_kong
        }

        // Suit composition over every non-flower meld, including the pair.
        let non_flower: Vec<&Meld> = melds.iter().filter(|m| !m.is_flower()).collect();
        let mut simple_suits = BTreeSet::new();
        let mut dragon_present = false;
        let mut wind_present = false;
        for meld in &non_flower {
            let suit = meld.representative().suit();
            match suit {
                Suit::Dot | Suit::Bamboo | Suit::Character => { simple_suits.insert(suit as u8); }
                Suit::Dragon => dragon_present = true,
                Suit::Wind => wind_present = true,
                Suit::Flower => {}
            }
        }
        let honors_present = dragon_present || wind_present;
        if honors_present && simple_suits.len() == 1 {
            total += 3; // half_flush
        } else if honors_present && simple_suits.is_empty() && dragon_present && wind_present {
            total += 7; // all_honors
        } else if !honors_present && simple_suits.len() == 1 {
            total += 7; // full_flush
        }

        // Great/small dragons and winds.
        let pair_is_dragon = non_flower.iter().any(|m| matches!(m, Meld::Pair(t) if t.as_dragon().is_some()));
        let pair_is_wind = non_flower.iter().any(|m| matches!(m, Meld::Pair(t) if t.as_wind().is_some()));
        if dragon_pungs == 3 {
            total += 8; // great_dragons
        } else if dragon_pungs == 2 && pair_is_dragon {
            total += 5; // small_dragons
        }
        if wind_pungs == 4 {
            total += 10; // great_winds
        } else if wind_pungs == 3 && pair_is_wind {
            total += 6; // small_winds
        }

        // Orphan condition: every non-flower meld and the pair is 1s/9s/honors only.
        let all_orphans = non_flower.iter().all(|m| m.tiles().iter().all(|t| t.is_orphan_candidate()));
        if all_orphans {
            total += if honors_present { 1 } else { 10 }; // mixed_orphans / orphans
        }

        // The dragon bonus is awarded a second time; see the reconciliation
        // note on half_flush_all_pung_hand_with_dragon below.
        total += dragon_pungs;

        total.min(13) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::{Dragon, Tile};
    use pretty_assertions::assert_eq;

    fn melds_of(tiles: Vec<Meld>) -> Vec<Meld> { tiles }

    /// Three each of 1b/2b/3b/red-dragon + pair of west-wind, seat=east,
    /// round=east, win_condition={self_pick}.
    ///
    /// Applying every accumulation rule consistently gives 10: half_flush=3
    /// + self_pick=1 + dragon=1 (counted again at the end, x2=2) +
    /// no_flowers=1 + all_pung_kong=3 (four pungs, no chows).
    #[test]
    fn half_flush_all_pung_hand_with_dragon() {
        let melds = melds_of(vec![
            Meld::Pung(Tile::bamboo(1)),
            Meld::Pung(Tile::bamboo(2)),
            Meld::Pung(Tile::bamboo(3)),
            Meld::Pung(Tile::dragon(Dragon::Red)),
            Meld::Pair(Tile::wind(Wind::West)),
        ]);
        let mut context = HandContext::new(Wind::East, Wind::East);
        context.win_condition.insert(WinTag::SelfPick);
        assert_eq!(Scorer::score(&melds, &context), 10);
    }

    /// Pungs of 1b/2b, kongs of 3b/4b, pair of 5b; self_pick + last_draw.
    /// Capped at 13.
    #[test]
    fn all_pung_kong_hand_caps_at_thirteen() {
        let melds = melds_of(vec![
            Meld::Pung(Tile::bamboo(1)),
            Meld::Pung(Tile::bamboo(2)),
            Meld::Kong(Tile::bamboo(3)),
            Meld::Kong(Tile::bamboo(4)),
            Meld::Pair(Tile::bamboo(5)),
        ]);
        let mut context = HandContext::new(Wind::East, Wind::East);
        context.win_condition.insert(WinTag::SelfPick);
        context.win_condition.insert(WinTag::LastDraw);
        assert_eq!(Scorer::score(&melds, &context), 13);
    }

    /// Pung of 1d, chow 2b3b4b twice, pung of east-wind, pair of 4b,
    /// a flower singleton; seat=east, round=east, no win_condition tags.
    #[test]
    fn mixed_hand_with_one_wind_pung_and_a_flower() {
        let melds = melds_of(vec![
            Meld::Pung(Tile::dot(1)),
            Meld::Chow(Tile::bamboo(2), Tile::bamboo(3), Tile::bamboo(4)),
            Meld::Chow(Tile::bamboo(2), Tile::bamboo(3), Tile::bamboo(4)),
            Meld::Pung(Tile::wind(Wind::East)),
            Meld::Pair(Tile::bamboo(4)),
            Meld::Flower(Tile::flower(6)),
        ]);
        let context = HandContext::new(Wind::East, Wind::East);
        assert_eq!(Scorer::score(&melds, &context), 2);
    }

    /// All pungs of orphan bamboo/dot/character tiles, pair of 1c, no honors.
    #[test]
    fn all_orphan_pungs_without_honors() {
        let melds = melds_of(vec![
            Meld::Pung(Tile::bamboo(1)),
            Meld::Pung(Tile::dot(9)),
            Meld::Pung(Tile::character(9)),
            Meld::Pung(Tile::bamboo(9)),
            Meld::Pair(Tile::character(1)),
        ]);
        let context = HandContext::new(Wind::East, Wind::East);
        assert_eq!(Scorer::score(&melds, &context), 13);
    }

    #[test]
    fn thirteen_orphans_and_nine_gates_return_fixed_values() {
        let mut orphans_ctx = HandContext::new(Wind::East, Wind::East);
        orphans_ctx.thirteen_orphans = true;
        assert_eq!(Scorer::score(&[], &orphans_ctx), 13);

        let mut gates_ctx = HandContext::new(Wind::East, Wind::East);
        gates_ctx.nine_gates = true;
        assert_eq!(Scorer::score(&[], &gates_ctx), 10);
    }
}
