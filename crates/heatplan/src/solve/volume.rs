//! Placed volumes and solve results.
use glam::IVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fixture::FixtureKind;

/// One arm of an L-shaped layout.
///
/// Arm A runs along the global X axis, arm B along the global Z axis.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Arm {
    A,
    B,
}

/// Metadata attached to a placed volume.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VolumeMeta {
    pub height_cm: u32,
    pub is_monolith: bool,
    /// Combined field score at the chosen window, absent for fillers.
    pub heatmap_score: Option<f32>,
    /// Which arm placed the volume, absent for straight runs.
    pub arm: Option<Arm>,
}

/// A fixture placed along a wall span.
///
/// Straight runs place along X with `z == 0`. After an L-shape solve,
/// arm B volumes sit at `x == 0` with their position carried in `z`.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Volume {
    pub x: i32,
    pub z: i32,
    pub width_cm: u32,
    pub function: FixtureKind,
    pub meta: VolumeMeta,
}

impl Volume {
    /// Creates a volume on the X axis, deriving height and monolith
    /// status from the fixture kind.
    pub fn new(x: i32, width_cm: u32, function: FixtureKind) -> Self {
        Self {
            x,
            z: 0,
            width_cm,
            function,
            meta: VolumeMeta {
                height_cm: function.default_height_cm(),
                is_monolith: function.is_monolith(),
                heatmap_score: None,
                arm: None,
            },
        }
    }

    /// Attaches the score of the window the solver chose.
    pub fn with_score(mut self, score: f32) -> Self {
        self.meta.heatmap_score = Some(score);
        self
    }

    pub fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.z)
    }

    /// Right edge in cm along the arm's placement axis.
    pub fn end(&self) -> i32 {
        match self.meta.arm {
            Some(Arm::B) => self.z + self.width_cm as i32,
            _ => self.x + self.width_cm as i32,
        }
    }
}

/// Diagnostics from a single-span solve.
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveDebug {
    /// Partial solutions alive after the last pruning step.
    pub beam_final_size: usize,
    /// Accumulated score of the winning branch.
    pub best_score: f32,
    /// Set when an item had no valid placement; the wall stays empty.
    pub infeasible: Option<String>,
}

/// Output of a single-span solve.
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveResult {
    /// Placed volumes sorted by position.
    pub volumes: Vec<Volume>,
    pub debug: SolveDebug,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_derives_meta_from_kind() {
        let fridge = Volume::new(40, 60, FixtureKind::Fridge);
        assert_eq!(fridge.meta.height_cm, 215);
        assert!(fridge.meta.is_monolith);
        assert_eq!(fridge.meta.heatmap_score, None);
        assert_eq!(fridge.meta.arm, None);

        let drawer = Volume::new(0, 45, FixtureKind::DrawerCabinet);
        assert_eq!(drawer.meta.height_cm, 85);
        assert!(!drawer.meta.is_monolith);
    }

    #[test]
    fn with_score_sets_meta() {
        let volume = Volume::new(0, 60, FixtureKind::SinkCabinet).with_score(12.5);
        assert_eq!(volume.meta.heatmap_score, Some(12.5));
    }

    #[test]
    fn end_follows_the_placement_axis() {
        let straight = Volume::new(40, 60, FixtureKind::SinkCabinet);
        assert_eq!(straight.end(), 100);
        assert_eq!(straight.position(), IVec2::new(40, 0));

        let mut leg = Volume::new(40, 60, FixtureKind::SinkCabinet);
        leg.z = leg.x + 65;
        leg.x = 0;
        leg.meta.arm = Some(Arm::B);
        assert_eq!(leg.end(), 165);
        assert_eq!(leg.position(), IVec2::new(0, 105));
    }
}
