//! Rules engine for four-player Hong Kong style Mahjong.
//!
//! Three subsystems do the real work: [`analysis`] enumerates meld
//! decompositions and detects special hands, [`scoring`] turns a
//! decomposition into a faan count, and [`engine`] drives the turn state
//! machine that ties them together. [`tile`], [`tile_set`], [`meld`],
//! [`player`], [`hand`], and [`wall`] are the value types everything else is
//! built from.

pub mod analysis;
pub mod config;
pub mod engine;
pub mod hand;
pub mod meld;
pub mod player;
pub mod scoring;
pub mod tile;
pub mod tile_set;
pub mod wall;

/// Commonly used items, re-exported for a single `use hkmahjong::prelude::*;`.
pub mod prelude {
    pub use crate::analysis::{check_chow, check_kong, check_pung, check_win, HandAnalyzer};
    pub use crate::config::EngineConfig;
    pub use crate::engine::{Choice, GameEngine, GameResult, MeldOptions, PlayerPort, StepOutcome};
    pub use crate::hand::PlayerState;
    pub use crate::meld::Meld;
    pub use crate::player::Seat;
    pub use crate::scoring::{HandContext, Scorer, WinTag};
    pub use crate::tile::{Dragon, Suit, Tile, Wind};
    pub use crate::wall::Wall;
}
