//! Chow/pung/kong opportunity detection.

use crate::hand::PlayerState;
use crate::meld::Meld;
use crate::tile::Tile;

/// Every chow that can be formed using `tile` plus two tiles already in
/// `player.hand`. Up to three candidates (tile in the left/middle/right
/// position), each returned as an ascending triple.
///
/// Only the three neighbor tiles' presence in hand matters here, so whether
/// `tile` itself is already counted in `player.hand` (current player, who
/// drew it) or only hypothetically added (claiming another's discard) makes
/// no difference to the search — `is_current_player` is accepted for
/// interface symmetry with [`check_pung`]/[`check_kong`], which do need it.
pub fn check_chow(player: &PlayerState, tile: Tile, _is_current_player: bool) -> Vec<Meld> {
    if !tile.is_simple() {
        return Vec::new();
    }
    let counts = player.hand_counts();
    let has = |t: Option<Tile>| t.map_or(false, |t| counts.count(t) > 0);

    let mut candidates = Vec::with_capacity(3);
    // tile as the rightmost: (tile-2, tile-1, tile)
    if let (Some(low), Some(mid)) = (pred2(tile), pred(tile)) {
        if has(Some(low)) && has(Some(mid)) {
            candidates.push(Meld::Chow(low, mid, tile));
        }
    }
    // tile as the middle: (tile-1, tile, tile+1)
    if let (Some(low), Some(high)) = (pred(tile), tile.succ()) {
        if has(Some(low)) && has(Some(high)) {
            candidates.push(Meld::Chow(low, tile, high));
        }
    }
    // tile as the leftmost: (tile, tile+1, tile+2)
    if let (Some(mid), Some(high)) = (tile.succ(), tile.succ2()) {
        if has(Some(mid)) && has(Some(high)) {
            candidates.push(Meld::Chow(tile, mid, high));
        }
    }
    candidates
}

fn pred(tile: Tile) -> Option<Tile> {
    if tile.is_simple() && tile.value() >= 2 {
        Some(shift(tile, -1))
    } else {
        None
    }
}
fn pred2(tile: Tile) -> Option<Tile> {
    if tile.is_simple() && tile.value() >= 3 {
        Some(shift(tile, -2))
    } else {
        None
    }
}
fn shift(tile: Tile, delta: i8) -> Tile {
    let value = (tile.value() as i8 + delta) as u8;
    match tile.suit() {
        crate::tile::Suit::Dot => Tile::dot(value),
        crate::tile::Suit::Bamboo => Tile::bamboo(value),
        crate::tile::Suit::Character => Tile::character(value),
        _ => unreachable!("shift only called on simple suits"),
    }
}

/// At most one pung of `tile`. The current-player variant succeeds when the
/// (already-inclusive-of-the-draw) hand holds three copies; the reacting
/// variant succeeds with two, the third supplied by the claimed discard.
pub fn check_pung(player: &PlayerState, tile: Tile, is_current_player: bool) -> Vec<Meld> {
    let count = player.hand_counts().count(tile);
    let needed = if is_current_player { 3 } else { 2 };
    if count >= needed {
        vec![Meld::Pung(tile)]
    } else {
        Vec::new()
    }
}

/// At most one kong of `tile`.
///
/// - Current player: either an already-exposed pung of `tile` is upgraded
///   (the drawn tile is its fourth), or the concealed hand itself holds all
///   four copies (self-drawn concealed kong).
/// - Reacting player: the concealed hand holds three copies, claiming the
///   discard as the fourth (an exposed kong formed directly from a discard).
pub fn check_kong(player: &PlayerState, tile: Tile, is_current_player: bool) -> Vec<Meld> {
    let found = if is_current_player {
        player.melds.iter().any(|m| matches!(m, Meld::Pung(t) if *t == tile))
            || player.hand_counts().count(tile) == 4
    } else {
        player.hand_counts().count(tile) == 3
    };
    if found { vec![Meld::Kong(tile)] } else { Vec::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::P0;

    fn hand_with(tiles: &[Tile]) -> PlayerState {
        let mut state = PlayerState::new(P0);
        state.hand = tiles.to_vec();
        state
    }

    /// `{1d,2d,3d,4d,5d}` against claimable 1d/3d/5d covers every chow position.
    #[test]
    fn chow_position_coverage() {
        let player = hand_with(&[Tile::dot(1), Tile::dot(2), Tile::dot(3), Tile::dot(4), Tile::dot(5)]);

        let on_1d = check_chow(&player, Tile::dot(1), false);
        assert_eq!(on_1d, vec![Meld::chow(Tile::dot(1), Tile::dot(2), Tile::dot(3)).unwrap()]);

        let mut on_3d = check_chow(&player, Tile::dot(3), false);
        on_3d.sort_by_key(Meld::representative);
        assert_eq!(on_3d, vec![
            Meld::chow(Tile::dot(1), Tile::dot(2), Tile::dot(3)).unwrap(),
            Meld::chow(Tile::dot(2), Tile::dot(3), Tile::dot(4)).unwrap(),
            Meld::chow(Tile::dot(3), Tile::dot(4), Tile::dot(5)).unwrap(),
        ]);

        let on_5d = check_chow(&player, Tile::dot(5), false);
        assert_eq!(on_5d, vec![Meld::chow(Tile::dot(3), Tile::dot(4), Tile::dot(5)).unwrap()]);
    }

    #[test]
    fn chow_ignores_honors() {
        let player = hand_with(&[]);
        assert!(check_chow(&player, Tile::wind(crate::tile::Wind::East), false).is_empty());
    }

    #[test]
    fn pung_needs_three_when_current_two_when_reacting() {
        let player = hand_with(&[Tile::bamboo(3), Tile::bamboo(3), Tile::bamboo(3)]);
        assert_eq!(check_pung(&player, Tile::bamboo(3), true), vec![Meld::Pung(Tile::bamboo(3))]);

        let player = hand_with(&[Tile::bamboo(3), Tile::bamboo(3)]);
        assert!(check_pung(&player, Tile::bamboo(3), true).is_empty());
        assert_eq!(check_pung(&player, Tile::bamboo(3), false), vec![Meld::Pung(Tile::bamboo(3))]);
    }

    #[test]
    fn kong_supports_exposed_upgrade_and_concealed_self_draw() {
        let mut player = hand_with(&[]);
        player.melds.push(Meld::Pung(Tile::character(7)));
        assert_eq!(check_kong(&player, Tile::character(7), true), vec![Meld::Kong(Tile::character(7))]);

        let player = hand_with(&[Tile::character(7); 4]);
        assert_eq!(check_kong(&player, Tile::character(7), true), vec![Meld::Kong(Tile::character(7))]);

        let player = hand_with(&[Tile::character(7); 3]);
        assert_eq!(check_kong(&player, Tile::character(7), false), vec![Meld::Kong(Tile::character(7))]);
        assert!(check_kong(&player, Tile::character(7), true).is_empty());
    }
}
