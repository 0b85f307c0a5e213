//! Tile 牌
//!
//! See [`Tile`].

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// One of the three dragon tiles.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dragon {
    Red,
    White,
    Green,
}

/// One of the four wind tiles.
///
/// Declaration order (`East < South < West < North`) is the total order used
/// for [`Tile`]'s `Ord` impl; the 0..33 identifier space uses a different,
/// deliberately preserved order and is computed separately in [`Tile::id34`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Wind {
    East,
    South,
    West,
    North,
}

impl Default for Wind {
    fn default() -> Self { Wind::East }
}

impl Wind {
    pub const ALL: [Wind; 4] = [Wind::East, Wind::South, Wind::West, Wind::North];

    /// The wind seated `offset` seats after this one (0 = self), wrapping mod 4.
    pub fn offset(self, offset: u8) -> Wind {
        Self::ALL[(self as u8 as usize + offset as usize) % 4]
    }
}

impl Display for Wind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Wind::East => "east",
            Wind::South => "south",
            Wind::West => "west",
            Wind::North => "north",
        };
        write!(f, "{s}")
    }
}

/// Suit of a [`Tile`]. Declaration order is the suit precedence used by
/// `Tile`'s total order: dot < bamboo < character < dragon < wind < flower.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    Dot,
    Bamboo,
    Character,
    Dragon,
    Wind,
    Flower,
}

/// A single mahjong tile, immutable and structurally comparable.
///
/// Encodes suit and value together; the value's meaning depends on the suit:
/// - `Dot` / `Bamboo` / `Character`: 1..=9
/// - `Dragon`: 0 = red, 1 = white, 2 = green (matches [`Dragon`]'s declaration order)
/// - `Wind`: 0 = east, 1 = south, 2 = west, 3 = north (matches [`Wind`]'s declaration order)
/// - `Flower`: 1..=8 (1..=4 are flowers, 5..=8 are seasons)
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    suit: Suit,
    value: u8,
}

impl Tile {
    pub const fn dot(value: u8) -> Self {
        debug_assert!(1 <= value && value <= 9);
        Self { suit: Suit::Dot, value }
    }
    pub const fn bamboo(value: u8) -> Self {
        debug_assert!(1 <= value && value <= 9);
        Self { suit: Suit::Bamboo, value }
    }
    pub const fn character(value: u8) -> Self {
        debug_assert!(1 <= value && value <= 9);
        Self { suit: Suit::Character, value }
    }
    pub const fn dragon(dragon: Dragon) -> Self {
        Self { suit: Suit::Dragon, value: dragon as u8 }
    }
    pub const fn wind(wind: Wind) -> Self {
        Self { suit: Suit::Wind, value: wind as u8 }
    }
    pub const fn flower(value: u8) -> Self {
        debug_assert!(1 <= value && value <= 8);
        Self { suit: Suit::Flower, value }
    }

    pub const fn suit(self) -> Suit { self.suit }
    pub const fn value(self) -> u8 { self.value }

    pub const fn is_simple(self) -> bool {
        matches!(self.suit, Suit::Dot | Suit::Bamboo | Suit::Character)
    }
    pub const fn is_honor(self) -> bool {
        matches!(self.suit, Suit::Dragon | Suit::Wind)
    }
    pub const fn is_flower(self) -> bool {
        matches!(self.suit, Suit::Flower)
    }
    pub const fn is_terminal(self) -> bool {
        self.is_simple() && (self.value == 1 || self.value == 9)
    }
    /// True for 1/9/honors — the tiles that may appear in an orphan hand.
    pub const fn is_orphan_candidate(self) -> bool {
        self.is_terminal() || self.is_honor()
    }

    pub fn as_dragon(self) -> Option<Dragon> {
        match self.suit {
            Suit::Dragon => Some(match self.value {
                0 => Dragon::Red,
                1 => Dragon::White,
                _ => Dragon::Green,
            }),
            _ => None,
        }
    }
    pub fn as_wind(self) -> Option<Wind> {
        match self.suit {
            Suit::Wind => Some(Wind::ALL[self.value as usize]),
            _ => None,
        }
    }

    /// The next tile up in the same simple suit, if any (for chow construction).
    pub fn succ(self) -> Option<Tile> {
        if self.is_simple() && self.value < 9 {
            Some(Self { suit: self.suit, value: self.value + 1 })
        } else {
            None
        }
    }
    /// Two tiles up in the same simple suit, if any.
    pub fn succ2(self) -> Option<Tile> {
        self.succ().and_then(Tile::succ)
    }

    /// Dense identifier in `0..34`, used to index [`crate::tile_set::TileCounts`].
    /// `None` for flowers, which are never melded and so never need a dense index.
    ///
    /// Note the wind sub-order here (`east, south, north, west`) differs from the
    /// suit-internal order used by [`Wind`]'s `Ord` impl and by this type's own
    /// total order — this identifier space is deliberately preserved from the
    /// source material even though it disagrees with the total order.
    pub const fn id34(self) -> Option<u8> {
        match self.suit {
            Suit::Dot => Some(self.value - 1),
            Suit::Bamboo => Some(9 + self.value - 1),
            Suit::Character => Some(18 + self.value - 1),
            Suit::Dragon => Some(27 + self.value),
            Suit::Wind => Some(30 + match self.value {
                0 => 0, // east
                1 => 1, // south
                3 => 2, // north
                _ => 3, // west (value == 2)
            }),
            Suit::Flower => None,
        }
    }

    fn order_key(self) -> (u8, u8) {
        (self.suit as u8, self.value)
    }
}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}
impl Ord for Tile {
    fn cmp(&self, other: &Self) -> Ordering { self.order_key().cmp(&other.order_key()) }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.suit {
            Suit::Dot => write!(f, "{}d", self.value),
            Suit::Bamboo => write!(f, "{}b", self.value),
            Suit::Character => write!(f, "{}c", self.value),
            Suit::Dragon => write!(f, "{}", self.as_dragon().unwrap()),
            Suit::Wind => write!(f, "{}", self.as_wind().unwrap()),
            Suit::Flower => write!(f, "flower{}", self.value),
        }
    }
}

impl Display for Dragon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Dragon::Red => "red",
            Dragon::White => "white",
            Dragon::Green => "green",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_order_matches_suit_then_value() {
        assert!(Tile::dot(9) < Tile::bamboo(1));
        assert!(Tile::character(9) < Tile::dragon(Dragon::Red));
        assert!(Tile::dragon(Dragon::Green) < Tile::wind(Wind::East));
        assert!(Tile::wind(Wind::North) < Tile::flower(1));
        assert!(Tile::wind(Wind::East) < Tile::wind(Wind::South));
        assert!(Tile::wind(Wind::South) < Tile::wind(Wind::West));
        assert!(Tile::wind(Wind::West) < Tile::wind(Wind::North));
    }

    #[test]
    fn id34_covers_34_distinct_values_in_source_order() {
        let mut ids: Vec<u8> = Vec::new();
        for v in 1..=9 { ids.push(Tile::dot(v).id34().unwrap()); }
        for v in 1..=9 { ids.push(Tile::bamboo(v).id34().unwrap()); }
        for v in 1..=9 { ids.push(Tile::character(v).id34().unwrap()); }
        for d in [Dragon::Red, Dragon::White, Dragon::Green] {
            ids.push(Tile::dragon(d).id34().unwrap());
        }
        for w in [Wind::East, Wind::South, Wind::North, Wind::West] {
            ids.push(Tile::wind(w).id34().unwrap());
        }
        assert_eq!(ids, (0u8..34).collect::<Vec<_>>());
        assert!(Tile::flower(3).id34().is_none());
    }

    #[test]
    fn succ_chains_stop_at_suit_boundary() {
        assert_eq!(Tile::dot(8).succ(), Some(Tile::dot(9)));
        assert_eq!(Tile::dot(9).succ(), None);
        assert_eq!(Tile::dot(7).succ2(), Some(Tile::dot(9)));
        assert_eq!(Tile::wind(Wind::East).succ(), None);
    }
}
