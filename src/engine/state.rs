//! Observable game state.

use std::collections::BTreeMap;

use crate::hand::PlayerState;
use crate::player::Seat;
use crate::scoring::HandContext;
use crate::tile::Wind;
use crate::wall::Wall;

/// Which half of a turn is in progress.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Meld,
    Discard,
}

/// The flags threaded through a turn's sub-steps.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags {
    /// Set for exactly the first trip around the table.
    pub first: bool,
    /// The current player acquired their tile via a claimed discard or a
    /// kong replacement and must not draw this turn.
    pub discard: bool,
    /// A kong has been formed this turn and a replacement draw is pending.
    pub kong: bool,
    /// A second kong has landed on top of the first, unresolved.
    pub double_kong: bool,
    /// The game ended with no winner (wall exhausted).
    pub draw: bool,
    /// Terminal: no further transitions.
    pub done: bool,
}

/// The full observable state of one game.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub wall: Wall,
    pub round_wind: Wind,
    pub current_player_id: Seat,
    pub flags: Flags,
    pub phase: Phase,
    pub winning_hand_state: Option<HandContext>,
    pub players: BTreeMap<u8, PlayerState>,
    /// Every discard made this game, in the true chronological order it
    /// happened at the table (not grouped by player).
    pub table: Vec<(Seat, crate::tile::Tile)>,
}

impl GameState {
    pub fn new(wall: Wall, round_wind: Wind) -> Self {
        let mut players = BTreeMap::new();
        for seat in crate::player::ALL_SEATS {
            players.insert(seat.to_u8(), PlayerState::new(seat));
        }
        Self {
            wall,
            round_wind,
            current_player_id: crate::player::P0,
            flags: Flags { first: true, ..Default::default() },
            phase: Phase::Meld,
            winning_hand_state: None,
            players,
            table: Vec::new(),
        }
    }

    pub fn player(&self, seat: Seat) -> &PlayerState {
        self.players.get(&seat.to_u8()).expect("all 4 seats are always present")
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut PlayerState {
        self.players.get_mut(&seat.to_u8()).expect("all 4 seats are always present")
    }

    pub fn current_player(&self) -> &PlayerState {
        self.player(self.current_player_id)
    }

    /// Flat, oldest-first view of every discard made this game in the order
    /// it actually happened at the table — the per-player `discards` fields
    /// remain authoritative for what's still exposed to a claim.
    pub fn discard_pile(&self) -> Vec<crate::tile::Tile> {
        self.table.iter().map(|&(_, tile)| tile).collect()
    }

    /// Conservation invariant: `|wall| + Σ(|hand| + Σ|meld|) == 144`.
    pub fn accounted_tiles(&self) -> usize {
        self.players.values().map(|p| p.hand.len() + p.melds.iter().map(|m| m.tiles().len()).sum::<usize>()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_game_conserves_144_tiles() {
        let state = GameState::new(Wall::shuffled(Some(1)), Wind::East);
        assert_eq!(state.wall.len() + state.accounted_tiles(), 144);
    }

    #[test]
    fn new_game_starts_at_seat_zero_with_first_flag_set() {
        let state = GameState::new(Wall::shuffled(Some(1)), Wind::East);
        assert_eq!(state.current_player_id, crate::player::P0);
        assert!(state.flags.first);
        assert_eq!(state.phase, Phase::Meld);
    }

    #[test]
    fn discard_pile_preserves_table_order_even_when_not_grouped_by_seat() {
        use crate::player::{P0, P1, P2};
        let mut state = GameState::new(Wall::shuffled(Some(1)), Wind::East);
        state.table.push((P1, crate::tile::Tile::dot(1)));
        state.table.push((P0, crate::tile::Tile::dot(2)));
        state.table.push((P2, crate::tile::Tile::dot(3)));
        state.table.push((P1, crate::tile::Tile::dot(4)));
        assert_eq!(
            state.discard_pile(),
            vec![crate::tile::Tile::dot(1), crate::tile::Tile::dot(2), crate::tile::Tile::dot(3), crate::tile::Tile::dot(4)]
        );
    }
}
