#![forbid(unsafe_code)]
//! heatplan: Heatmap-driven placement of kitchen fixtures along wall spans.
//!
//! Modules:
//! - field: scalar desirability fields, collision masks, and attraction/repulsion emitters
//! - layers: static per-room scoring layers and per-fixture combination weights
//! - solve: beam-search anchor placement, deterministic gap filling, and L-shape decomposition
//!
//! For examples and docs, see README and docs.rs.
pub mod error;
pub mod field;
pub mod fixture;
pub mod layers;
pub mod room;
pub mod solve;

/// Convenient re-exports for common types. Import with `use heatplan::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::field::emitter::{
        attraction_between, compute_dynamic_fields, repulsion_between, Coupling, FieldEmitter,
    };
    pub use crate::field::mask::{CollisionMask, SwingClearance};
    pub use crate::field::scalar::ScalarField;
    pub use crate::fixture::{FixtureKind, WishItem};
    pub use crate::layers::weights::LayerWeights;
    pub use crate::layers::StaticLayers;
    pub use crate::room::{Opening, Room, Utility, UtilityKind, Wall};
    pub use crate::solve::beam::BeamSolver;
    pub use crate::solve::dual::{
        ArmResult, CornerInfo, CornerUnit, DualDebug, DualSolveResult, DualSpanSolver,
    };
    pub use crate::solve::volume::{Arm, SolveDebug, SolveResult, Volume, VolumeMeta};
    pub use crate::solve::SolverConfig;
}
