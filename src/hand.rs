//! Per-player state: hand, melds, and discard history.

use crate::meld::Meld;
use crate::player::Seat;
use crate::tile::{Tile, Wind};
use crate::tile_set::TileCounts;

/// One player's view of the game: their concealed hand, melds (including
/// flower singletons), and discard history.
#[derive(Clone, Debug, Eq, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub id: Seat,
    pub seat_wind: Wind,
    /// Concealed tiles, kept in insertion/draw order; sort on demand for
    /// presentation.
    pub hand: Vec<Tile>,
    /// Completed melds, in the order they were formed, including flower
    /// singletons.
    pub melds: Vec<Meld>,
    /// Discards, oldest first, so the most recent is `discards.last()`.
    pub discards: Vec<Tile>,
}

impl PlayerState {
    pub fn new(id: Seat) -> Self {
        Self { id, seat_wind: id.seat_wind(), hand: Vec::new(), melds: Vec::new(), discards: Vec::new() }
    }

    /// Non-flower melds only — the ones that count toward the four required sets.
    pub fn structural_melds(&self) -> impl Iterator<Item = &Meld> {
        self.melds.iter().filter(|m| m.is_structural_set())
    }

    pub fn is_concealed(&self) -> bool {
        self.melds.iter().all(Meld::is_flower)
    }

    pub fn hand_counts(&self) -> TileCounts {
        TileCounts::from_tiles(self.hand.iter().copied())
    }

    pub fn sorted_hand(&self) -> Vec<Tile> {
        let mut sorted = self.hand.clone();
        sorted.sort();
        sorted
    }

    /// Removes and returns the tile at `index` in the unsorted hand.
    pub fn take_hand_tile(&mut self, index: usize) -> Option<Tile> {
        (index < self.hand.len()).then(|| self.hand.remove(index))
    }

    /// Translates an index into the *sorted* view of the hand back to the
    /// matching unsorted index.
    pub fn unsort_index(&self, sorted_index: usize) -> Option<usize> {
        let sorted = self.sorted_hand();
        let tile = *sorted.get(sorted_index)?;
        // First matching tile in hand order; duplicates are interchangeable.
        self.hand.iter().position(|&t| t == tile)
    }

    /// `len(hand) + 3 * non-flower triples + 4 * kongs == 13`, the at-rest
    /// invariant checked between the owner's turns (i.e. not while a 14th
    /// tile is pending discard).
    pub fn is_at_rest(&self) -> bool {
        let mut total = self.hand.len();
        for meld in self.structural_melds() {
            total += meld.tiles().len();
        }
        total == 13
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::P0;

    #[test]
    fn unsort_index_maps_back_to_hand_position() {
        let mut state = PlayerState::new(P0);
        state.hand = vec![Tile::bamboo(9), Tile::dot(1), Tile::character(5)];
        // sorted: dot(1), bamboo(9), character(5)  (suit order: dot < bamboo < character)
        assert_eq!(state.unsort_index(0), Some(1));
        assert_eq!(state.unsort_index(1), Some(0));
        assert_eq!(state.unsort_index(2), Some(2));
    }

    #[test]
    fn is_at_rest_counts_structural_melds_but_not_flowers() {
        let mut state = PlayerState::new(P0);
        state.hand = vec![Tile::dot(1); 10];
        state.melds.push(Meld::Pung(Tile::dot(2)));
        state.melds.push(Meld::Flower(Tile::flower(1)));
        assert!(state.is_at_rest());
    }
}
