//! Solvers turning a wishlist into positioned volumes.
//!
//! [beam::BeamSolver] places anchor fixtures along one straight span;
//! [dual::DualSpanSolver] splits an L-shaped room into two straight spans
//! joined by a corner unit and runs one beam solver per arm.
use crate::error::{Error, Result};

pub mod beam;
pub mod dual;
pub mod fillers;
pub mod volume;

pub use beam::BeamSolver;
pub use dual::DualSpanSolver;
pub use volume::{SolveResult, Volume};

pub const DEFAULT_BEAM_WIDTH: usize = 50;
pub const DEFAULT_CANDIDATES_PER_ITEM: usize = 3;

/// Configuration for a placement solve.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Max partial solutions kept after each pruning step.
    pub beam_width: usize,
    /// Top-k candidate positions considered per item and branch.
    pub candidates_per_item: usize,
    /// Skips gap filling after anchor placement.
    pub skip_fillers: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            beam_width: DEFAULT_BEAM_WIDTH,
            candidates_per_item: DEFAULT_CANDIDATES_PER_ITEM,
            skip_fillers: false,
        }
    }
}

impl SolverConfig {
    /// Creates a new [`SolverConfig`] with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the beam width.
    pub fn with_beam_width(mut self, beam_width: usize) -> Self {
        self.beam_width = beam_width;
        self
    }

    /// Sets the candidate count per item.
    pub fn with_candidates_per_item(mut self, candidates_per_item: usize) -> Self {
        self.candidates_per_item = candidates_per_item;
        self
    }

    /// Sets whether gap filling is skipped.
    pub fn with_skip_fillers(mut self, skip_fillers: bool) -> Self {
        self.skip_fillers = skip_fillers;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.beam_width == 0 {
            return Err(Error::InvalidConfig("beam_width must be > 0".into()));
        }
        if self.candidates_per_item == 0 {
            return Err(Error::InvalidConfig(
                "candidates_per_item must be > 0".into(),
            ));
        }

        Ok(())
    }
}
