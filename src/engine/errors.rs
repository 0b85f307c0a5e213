//! Error taxonomy for the engine.

use thiserror::Error;

/// Raised while building a game: bad table shape, not engine-internal state.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigurationError {
    #[error("a Hong Kong mahjong table requires exactly 4 players, got {0}")]
    WrongPlayerCount(usize),
    #[error("seat {seat} was assigned wind {wind:?}, which does not match its fixed seat-order wind")]
    InvalidSeatWind { seat: u8, wind: crate::tile::Wind },
}

/// A [`crate::engine::PlayerPort`] returned something the engine didn't
/// offer. Non-fatal: the engine degrades this to a pass (for a contended
/// reaction) or forces the first hand tile (for a mandatory discard).
#[derive(Debug, Error, Eq, PartialEq)]
pub enum InvalidActionError {
    #[error("discard index {index} is out of range for a hand of {hand_len} tiles")]
    DiscardIndexOutOfRange { index: usize, hand_len: usize },
    #[error("chosen meld was not among the offered options")]
    MeldNotOffered,
}

/// A broken core invariant — tile conservation or meld-count bookkeeping.
/// Always a programmer error; the engine halts rather than continuing on
/// corrupted state.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum StateViolation {
    #[error("tile conservation broken: wall={wall} + hands/melds={accounted} != 144")]
    TileConservation { wall: usize, accounted: usize },
    #[error("player {seat} has {hand_len} hand tiles and {meld_tiles} melded tiles, violating the at-rest invariant")]
    MeldCountInvariant { seat: u8, hand_len: usize, meld_tiles: usize },
}
