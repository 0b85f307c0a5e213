//! Engine configuration: wall seeding plus round setup.

use crate::tile::Wind;

/// Settings for constructing a [`crate::engine::GameEngine`].
///
/// `Default` is an OS-entropy-seeded wall and an east round.
#[derive(Copy, Clone, Debug)]
pub struct EngineConfig {
    /// `None` seeds the wall from OS entropy; `Some(seed)` is reproducible.
    pub seed: Option<u64>,
    pub round_wind: Wind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { seed: None, round_wind: Wind::East }
    }
}
