//! Run configuration.
//!
//! Configuration is passed as plain values at construction.  Applications may
//! deserialize these structs from a JSON/TOML file with the `serde` feature.

use crate::{GridPos, PfError, PfResult, Tick};

/// Default utility of one Crystal.
pub const DEFAULT_CRYSTAL_UTILITY: u32 = 10;

/// Default utility of one Metal.
pub const DEFAULT_METAL_UTILITY: u32 = 20;

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Grid width in cells.
    pub width: u32,

    /// Grid height in cells.
    pub height: u32,

    /// Master RNG seed.  The same seed and placement always produce identical
    /// position sequences.
    pub seed: u64,

    /// Total ticks `Sim::run` executes.
    pub total_ticks: u64,

    /// Call `SimObserver::on_snapshot` every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Utility credited for delivering a Crystal.
    pub crystal_utility: u32,

    /// Utility credited for delivering a Metal.
    pub metal_utility: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width:                 20,
            height:                20,
            seed:                  42,
            total_ticks:           100,
            output_interval_ticks: 1,
            crystal_utility:       DEFAULT_CRYSTAL_UTILITY,
            metal_utility:         DEFAULT_METAL_UTILITY,
        }
    }
}

impl SimConfig {
    /// The tick at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// The base sits at the grid centre.
    #[inline]
    pub fn base_position(&self) -> GridPos {
        GridPos::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Reject configurations the grid cannot represent.
    pub fn validate(&self) -> PfResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PfError::Config(format!(
                "grid dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > i32::MAX as u32 || self.height > i32::MAX as u32 {
            return Err(PfError::Config(format!(
                "grid dimensions {}x{} exceed i32::MAX",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

// ── Population ────────────────────────────────────────────────────────────────

/// How many entities of each kind the placement routine scatters randomly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Population {
    pub crystals:    usize,
    pub metals:      usize,
    pub structures:  usize,
    pub reactive:    usize,
    pub state_based: usize,
    pub goal_based:  usize,
    pub cooperative: usize,
}

impl Population {
    /// Total number of entities to place.
    pub fn total(&self) -> usize {
        self.crystals
            + self.metals
            + self.structures
            + self.reactive
            + self.state_based
            + self.goal_based
            + self.cooperative
    }
}
