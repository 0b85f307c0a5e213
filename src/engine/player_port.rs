//! The external decision-agent contract.

use crate::meld::Meld;

use super::state::GameState;

/// The meld-forming options on offer to a reacting (or self-acting) player.
#[derive(Clone, Debug, Default)]
pub struct MeldOptions {
    /// `Some(decomposition)` when a win is available; the decomposition is
    /// the full meld list that would be scored.
    pub win: Option<Vec<Meld>>,
    pub kong: Vec<Meld>,
    pub pung: Vec<Meld>,
    pub chow: Vec<Meld>,
}

impl MeldOptions {
    pub fn is_empty(&self) -> bool {
        self.win.is_none() && self.kong.is_empty() && self.pung.is_empty() && self.chow.is_empty()
    }
}

/// What a [`PlayerPort`] chose from a [`MeldOptions`] offer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Choice {
    Pass,
    Win(Vec<Meld>),
    Kong(Meld),
    Pung(Meld),
    Chow(Meld),
}

/// The reaction kind alone, used to resolve contention by priority. Variant
/// declaration order is ascending priority, so `Ord` directly encodes the
/// `win > kong > pung > chow` rule.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum ClaimKind {
    Pass,
    Chow,
    Pung,
    Kong,
    Win,
}

impl Choice {
    pub fn kind(&self) -> ClaimKind {
        match self {
            Choice::Pass => ClaimKind::Pass,
            Choice::Win(_) => ClaimKind::Win,
            Choice::Kong(_) => ClaimKind::Kong,
            Choice::Pung(_) => ClaimKind::Pung,
            Choice::Chow(_) => ClaimKind::Chow,
        }
    }
}

/// An external decision agent — human, scripted, or learned policy. The
/// engine depends only on this contract and never inspects the
/// implementation, so any policy can sit behind it interchangeably.
pub trait PlayerPort {
    /// Offered a `MeldOptions`, choose one (or pass).
    fn query_meld(&mut self, state: &GameState, options: &MeldOptions) -> Choice;

    /// Choose a tile to discard. If `sorted_view` is true, the returned
    /// index is interpreted against the sorted view of the hand and the
    /// engine translates it back to the unsorted position.
    fn query_discard(&mut self, state: &GameState, sorted_view: bool) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Tile;

    #[test]
    fn claim_kind_ordering_matches_the_priority_rule() {
        use itertools::Itertools;
        let ordered = [ClaimKind::Pass, ClaimKind::Chow, ClaimKind::Pung, ClaimKind::Kong, ClaimKind::Win];
        for (low, high) in ordered.into_iter().tuple_windows() {
            assert!(low < high);
        }
    }

    #[test]
    fn choice_kind_matches_the_claim_kind_variant() {
        assert_eq!(Choice::Win(vec![]).kind(), ClaimKind::Win);
        assert_eq!(Choice::Kong(Meld::Kong(Tile::dot(1))).kind(), ClaimKind::Kong);
        assert_eq!(Choice::Pass.kind(), ClaimKind::Pass);
    }
}
