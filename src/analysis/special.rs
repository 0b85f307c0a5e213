//! Detection of the two special hands that bypass structural decomposition
//! entirely: thirteen orphans and nine gates.

use crate::tile::{Dragon, Tile, Wind};
use crate::tile_set::TileCounts;

/// The 13 distinct terminal-and-honor tile kinds: 1 and 9 of each simple
/// suit, the three dragons, and the four winds.
fn orphan_tile_kinds() -> [Tile; 13] {
    [
        Tile::dot(1), Tile::dot(9),
        Tile::bamboo(1), Tile::bamboo(9),
        Tile::character(1), Tile::character(9),
        Tile::dragon(Dragon::Red), Tile::dragon(Dragon::White), Tile::dragon(Dragon::Green),
        Tile::wind(Wind::East), Tile::wind(Wind::South), Tile::wind(Wind::West), Tile::wind(Wind::North),
    ]
}

/// Thirteen orphans (國士無雙): `H` holds at least one of each of the 13
/// terminal-and-honor kinds, with nothing else.
pub fn is_thirteen_orphans(hand: &TileCounts) -> bool {
    let kinds = orphan_tile_kinds();
    if kinds.iter().any(|&t| hand.count(t) == 0) {
        return false;
    }
    let covered: u32 = kinds.iter().map(|&t| hand.count(t) as u32).sum();
    covered == hand.total()
}

/// Nine gates (九蓮寶燈): only considered for a concealed hand. All 14 tiles
/// in one simple suit, every value 1..=9 present, with exactly three 1s and
/// three 9s.
pub fn is_nine_gates(hand: &TileCounts, is_concealed: bool) -> bool {
    if !is_concealed {
        return false;
    }
    for ctor in [Tile::dot as fn(u8) -> Tile, Tile::bamboo, Tile::character] {
        if is_nine_gates_in_suit(hand, ctor) {
            return true;
        }
    }
    false
}

fn is_nine_gates_in_suit(hand: &TileCounts, ctor: fn(u8) -> Tile) -> bool {
    let counts: Vec<u8> = (1..=9).map(|v| hand.count(ctor(v))).collect();
    let suit_total: u32 = counts.iter().map(|&c| c as u32).sum();
    if suit_total != hand.total() {
        return false; // tiles outside this suit present
    }
    counts[0] == 3 && counts[8] == 3 && counts[1..8].iter().all(|&c| c >= 1)
}
