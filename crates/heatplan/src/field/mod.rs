//! Field subsystem for scoring and constraining placements over a wall span.
//!
//! This module groups the scalar desirability field, the hard/soft collision
//! mask over the same domain, and the emitters that broadcast attraction and
//! repulsion from committed placements.
pub mod emitter;
pub mod mask;
pub mod scalar;

pub use emitter::{compute_dynamic_fields, FieldEmitter};
pub use mask::{CollisionMask, SwingClearance};
pub use scalar::ScalarField;
