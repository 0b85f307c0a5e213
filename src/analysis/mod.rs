//! Hand analysis: opportunity detection, special-hand short-circuits, and
//! the structural decomposition that backs winning-hand checks.

mod decompose;
mod melds;
mod special;

pub use decompose::check_win;
pub use melds::{check_chow, check_kong, check_pung};
pub use special::{is_nine_gates, is_thirteen_orphans};

/// Namespaced entry point mirroring the four opportunity checks and the
/// win check as a single unit, for callers that prefer a type over loose
/// functions.
pub struct HandAnalyzer;

impl HandAnalyzer {
    pub fn check_chow(
        player: &crate::hand::PlayerState,
        tile: crate::tile::Tile,
        is_current_player: bool,
    ) -> Vec<crate::meld::Meld> {
        check_chow(player, tile, is_current_player)
    }

    pub fn check_pung(
        player: &crate::hand::PlayerState,
        tile: crate::tile::Tile,
        is_current_player: bool,
    ) -> Vec<crate::meld::Meld> {
        check_pung(player, tile, is_current_player)
    }

    pub fn check_kong(
        player: &crate::hand::PlayerState,
        tile: crate::tile::Tile,
        is_current_player: bool,
    ) -> Vec<crate::meld::Meld> {
        check_kong(player, tile, is_current_player)
    }

    pub fn check_win(
        player: &crate::hand::PlayerState,
        tile: crate::tile::Tile,
        is_current_player: bool,
        round_wind: crate::tile::Wind,
    ) -> (Vec<crate::meld::Meld>, crate::scoring::HandContext) {
        check_win(player, tile, is_current_player, round_wind)
    }
}
