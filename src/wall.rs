//! The wall of tiles.
//!
//! See [`Wall`]. 144 tiles total: 4 copies each of the 34 non-flower kinds
//! (136) plus one copy each of the 8 flower/season tiles.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::tile::{Dragon, Tile, Wind};

/// Total tiles in a standard Hong Kong mahjong set.
pub const WALL_SIZE: usize = 144;

/// The wall, an ordered sequence of tiles. Dealing and drawing both pop from
/// the tail: `wall.pop()` is "the next tile drawn."
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wall(Vec<Tile>);

impl Wall {
    /// Builds every tile of the set, unshuffled, in ascending order.
    pub fn sorted() -> Self {
        let mut tiles = Vec::with_capacity(WALL_SIZE);
        for suit_ctor in [Tile::dot as fn(u8) -> Tile, Tile::bamboo, Tile::character] {
            for value in 1..=9 {
                for _ in 0..4 {
                    tiles.push(suit_ctor(value));
                }
            }
        }
        for dragon in [Dragon::Red, Dragon::White, Dragon::Green] {
            for _ in 0..4 {
                tiles.push(Tile::dragon(dragon));
            }
        }
        for wind in Wind::ALL {
            for _ in 0..4 {
                tiles.push(Tile::wind(wind));
            }
        }
        for value in 1..=8 {
            tiles.push(Tile::flower(value));
        }
        debug_assert_eq!(tiles.len(), WALL_SIZE);
        Self(tiles)
    }

    /// Builds a freshly shuffled wall. Identical `seed`s reproduce identical
    /// orderings within this implementation; `None` seeds from OS entropy.
    pub fn shuffled(seed: Option<u64>) -> Self {
        let mut wall = Self::sorted();
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        wall.0.shuffle(&mut rng);
        wall
    }

    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Pops the next tile from the tail, or `None` if the wall is exhausted.
    pub fn draw(&mut self) -> Option<Tile> { self.0.pop() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_wall_has_144_tiles_with_correct_multiplicities() {
        let wall = Wall::sorted();
        assert_eq!(wall.len(), WALL_SIZE);
        let mut counts = crate::tile_set::TileCounts::new();
        let mut flowers = 0;
        for &tile in &wall.0 {
            if tile.is_flower() {
                flowers += 1;
            } else {
                counts.add(tile);
            }
        }
        assert_eq!(flowers, 8);
        for (_, count) in counts.iter_nonzero() {
            assert_eq!(count, 4);
        }
        assert_eq!(counts.total(), 136);
    }

    #[test]
    fn same_seed_shuffles_identically() {
        let a = Wall::shuffled(Some(42));
        let b = Wall::shuffled(Some(42));
        assert_eq!(a, b);
        let c = Wall::shuffled(Some(43));
        assert_ne!(a, c);
    }

    #[test]
    fn draw_pops_from_the_tail() {
        let mut wall = Wall::sorted();
        let last = *wall.0.last().unwrap();
        assert_eq!(wall.draw(), Some(last));
        assert_eq!(wall.len(), WALL_SIZE - 1);
    }
}
