//! Meld
//!
//! See [`Meld`].

use std::fmt::{Display, Formatter};

use crate::tile::Tile;

/// A completed group of tiles, carrying its kind implicitly through the
/// variant.
///
/// `Flower` is record-only: it is never produced by [`crate::analysis`]'s
/// structural decomposition and never counts toward a hand's four sets. It
/// exists purely so a player's `melds` collection can carry flower draws as
/// they're set aside.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Meld {
    /// A single flower or season tile, set aside on draw. Never structural.
    Flower(Tile),
    /// The unique pair of a winning hand.
    Pair(Tile),
    /// Three consecutive tiles in one simple suit, strictly ascending.
    Chow(Tile, Tile, Tile),
    /// Three identical tiles.
    Pung(Tile),
    /// Four identical tiles.
    Kong(Tile),
}

impl Meld {
    /// Builds a chow from its three ascending tiles, checking the invariant
    /// that they are consecutive values in one simple suit.
    pub fn chow(low: Tile, mid: Tile, high: Tile) -> Option<Self> {
        if low.succ() == Some(mid) && mid.succ() == Some(high) && low.is_simple() {
            Some(Self::Chow(low, mid, high))
        } else {
            None
        }
    }

    pub const fn is_pung(&self) -> bool { matches!(self, Meld::Pung(_)) }
    pub const fn is_kong(&self) -> bool { matches!(self, Meld::Kong(_)) }
    pub const fn is_chow(&self) -> bool { matches!(self, Meld::Chow(..)) }
    pub const fn is_pung_or_kong(&self) -> bool { self.is_pung() || self.is_kong() }
    pub const fn is_flower(&self) -> bool { matches!(self, Meld::Flower(_)) }
    /// Whether this meld counts toward a hand's four structural sets (i.e.
    /// everything except the pair and flower singletons).
    pub const fn is_structural_set(&self) -> bool {
        matches!(self, Meld::Chow(..) | Meld::Pung(_) | Meld::Kong(_))
    }

    /// A representative tile: the repeated tile for pair/pung/kong, the
    /// lowest tile for a chow, the flower itself for a flower singleton.
    pub const fn representative(&self) -> Tile {
        match *self {
            Meld::Flower(t) | Meld::Pair(t) | Meld::Pung(t) | Meld::Kong(t) => t,
            Meld::Chow(low, _, _) => low,
        }
    }

    /// All tiles in the meld, in order.
    pub fn tiles(&self) -> Vec<Tile> {
        match *self {
            Meld::Flower(t) | Meld::Pair(t) => vec![t],
            Meld::Chow(a, b, c) => vec![a, b, c],
            Meld::Pung(t) => vec![t; 3],
            Meld::Kong(t) => vec![t; 4],
        }
    }
}

impl Display for Meld {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Meld::Flower(t) => write!(f, "[{t}]"),
            Meld::Pair(t) => write!(f, "{t}{t}"),
            Meld::Chow(a, b, c) => write!(f, "{a}{b}{c}"),
            Meld::Pung(t) => write!(f, "{t}{t}{t}"),
            Meld::Kong(t) => write!(f, "{t}{t}{t}{t}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chow_rejects_non_consecutive_tiles() {
        assert!(Meld::chow(Tile::dot(1), Tile::dot(2), Tile::dot(3)).is_some());
        assert!(Meld::chow(Tile::dot(1), Tile::dot(3), Tile::dot(5)).is_none());
    }

    #[test]
    fn representative_picks_the_defining_tile() {
        let chow = Meld::chow(Tile::bamboo(4), Tile::bamboo(5), Tile::bamboo(6)).unwrap();
        assert_eq!(chow.representative(), Tile::bamboo(4));
        assert_eq!(Meld::Pung(Tile::dot(7)).representative(), Tile::dot(7));
    }
}
