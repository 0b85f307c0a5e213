//! Fixed-size histogram over the 34 non-flower tile kinds.
//!
//! See [`TileCounts`]. Flowers never enter a [`TileCounts`] — they are pulled
//! out as singleton melds the moment they're drawn and never participate in
//! meld decomposition.

use std::ops::{Index, IndexMut};

use crate::tile::Tile;

/// Histogram over the 34 kinds of non-flower tiles, indexed by [`Tile::id34`].
///
/// Using a flat array instead of a `HashMap<Tile, u8>` keeps the hot
/// recursive decomposition path allocation-free.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct TileCounts([u8; 34]);

impl TileCounts {
    pub fn new() -> Self { Self([0; 34]) }

    pub fn from_tiles<I: IntoIterator<Item = Tile>>(tiles: I) -> Self {
        let mut counts = Self::new();
        for tile in tiles {
            counts.add(tile);
        }
        counts
    }

    pub fn add(&mut self, tile: Tile) {
        let id = tile.id34().expect("flower tiles never enter a TileCounts");
        self.0[id as usize] += 1;
    }

    pub fn remove(&mut self, tile: Tile) {
        let id = tile.id34().expect("flower tiles never enter a TileCounts");
        self.0[id as usize] -= 1;
    }

    pub fn count(&self, tile: Tile) -> u8 { self[tile] }

    pub fn total(&self) -> u32 { self.0.iter().map(|&c| c as u32).sum() }

    pub fn is_empty(&self) -> bool { self.0.iter().all(|&c| c == 0) }

    /// The lowest-`id34`-ordered tile with non-zero count, if any. Used by the
    /// recursive decomposer to make its branch choice deterministic.
    pub fn lowest_nonzero(&self) -> Option<Tile> {
        self.0.iter().position(|&c| c > 0).map(|id| tile_from_id34(id as u8))
    }

    pub fn iter_nonzero(&self) -> impl Iterator<Item = (Tile, u8)> + '_ {
        self.0.iter().enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(id, &c)| (tile_from_id34(id as u8), c))
    }
}

impl Index<Tile> for TileCounts {
    type Output = u8;
    fn index(&self, tile: Tile) -> &u8 {
        &self.0[tile.id34().expect("flower tiles never enter a TileCounts") as usize]
    }
}

impl IndexMut<Tile> for TileCounts {
    fn index_mut(&mut self, tile: Tile) -> &mut u8 {
        &mut self.0[tile.id34().expect("flower tiles never enter a TileCounts") as usize]
    }
}

/// Inverse of [`Tile::id34`].
pub fn tile_from_id34(id: u8) -> Tile {
    use crate::tile::{Dragon, Wind};
    match id {
        0..=8 => Tile::dot(id + 1),
        9..=17 => Tile::bamboo(id - 9 + 1),
        18..=26 => Tile::character(id - 18 + 1),
        27 => Tile::dragon(Dragon::Red),
        28 => Tile::dragon(Dragon::White),
        29 => Tile::dragon(Dragon::Green),
        30 => Tile::wind(Wind::East),
        31 => Tile::wind(Wind::South),
        32 => Tile::wind(Wind::North),
        33 => Tile::wind(Wind::West),
        _ => panic!("id34 out of range: {id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id34_roundtrips_through_tile_from_id34() {
        for id in 0u8..34 {
            assert_eq!(tile_from_id34(id).id34(), Some(id));
        }
    }

    #[test]
    fn add_and_remove_are_inverses() {
        let mut counts = TileCounts::new();
        let tile = Tile::bamboo(5);
        counts.add(tile);
        counts.add(tile);
        assert_eq!(counts.count(tile), 2);
        counts.remove(tile);
        assert_eq!(counts.count(tile), 1);
        assert_eq!(counts.total(), 1);
    }

    #[test]
    fn lowest_nonzero_is_id34_ordered() {
        let mut counts = TileCounts::new();
        counts.add(Tile::character(3));
        counts.add(Tile::dot(9));
        assert_eq!(counts.lowest_nonzero(), Some(Tile::dot(9)));
    }
}
