//! Static scoring layers derived from room geometry.
//!
//! Each layer is a pure function of the room, independent of placement
//! history. [StaticLayers] precomputes all of them once per room so solvers
//! only pay the weighted combination per candidate field.
pub mod weights;

pub use weights::LayerWeights;

use crate::field::scalar::ScalarField;
use crate::fixture::FixtureKind;
use crate::room::{Room, UtilityKind, Wall};

/// Baseline desirability along free wall, doors cancelled well below zero,
/// windows penalized.
pub fn architecture_layer(room: &Room) -> ScalarField {
    let mut field = ScalarField::filled(room.width_cm, 100.0);
    for door in room.doors.iter().filter(|d| d.wall == Wall::Back) {
        field.apply_penalty_range(door.x, door.x + door.width_cm as i32, -1100.0);
    }
    for window in room.windows.iter().filter(|w| w.wall == Wall::Back) {
        field.apply_penalty_range(window.x, window.x + window.width_cm as i32, -500.0);
    }
    field
}

/// Gaussian bonus around each utility of the given kind; flat neutral `50`
/// when the room has none (no preference rather than none).
pub fn installation_layer(room: &Room, utility: UtilityKind) -> ScalarField {
    let mut field = ScalarField::zeros(room.width_cm);
    for point in room.utilities.iter().filter(|u| u.kind == utility) {
        field.add_gaussian(point.x(), 50.0, 100.0);
    }
    if !field.data.iter().any(|v| *v > 0.0) {
        return ScalarField::filled(room.width_cm, 50.0);
    }
    field
}

/// Access pattern for counter-height items: bump at the span center, penalty
/// in the outer 30 cm.
pub fn ergonomics_standard_layer(room: &Room) -> ScalarField {
    let width = room.width_cm as i32;
    let mut field = ScalarField::zeros(room.width_cm);
    field.add_gaussian(width / 2, 150.0, 50.0);
    field.apply_penalty_range(0, 30, -50.0);
    field.apply_penalty_range(width - 30, width, -50.0);
    field
}

/// Access pattern for monoliths: bonus in the first/last 120 cm, dip at the
/// span center (tall units belong at the ends of a run).
pub fn ergonomics_monolith_layer(room: &Room) -> ScalarField {
    let width = room.width_cm as i32;
    let mut field = ScalarField::zeros(room.width_cm);
    field.apply_penalty_range(0, 120, 80.0);
    field.apply_penalty_range(width - 120, width, 80.0);
    field.add_gaussian(width / 2, 100.0, -30.0);
    field
}

/// Penalty bands around walking paths into the room. Back-wall doors center
/// the band on the door; side-wall doors assume traffic passes 50 cm from
/// that end of the span.
pub fn traffic_layer(room: &Room) -> ScalarField {
    let width = room.width_cm as i32;
    let mut field = ScalarField::zeros(room.width_cm);
    for door in &room.doors {
        let path_center = match door.wall {
            Wall::Back => door.center_x(),
            Wall::Right => width - 50,
            Wall::Left => 50,
            Wall::Front => continue,
        };
        field.apply_penalty_range(path_center - 60, path_center + 60, -200.0);
    }
    field
}

/// Natural light spreading from each back-wall window's midpoint.
pub fn light_layer(room: &Room) -> ScalarField {
    let mut field = ScalarField::zeros(room.width_cm);
    for window in room.windows.iter().filter(|w| w.wall == Wall::Back) {
        field.add_gaussian(window.center_x(), 100.0, 80.0);
    }
    field
}

/// All static layers of one room, computed once and reused across every
/// candidate evaluation of a solve.
#[derive(Clone, Debug)]
pub struct StaticLayers {
    pub architecture: ScalarField,
    pub installation_water: ScalarField,
    pub installation_gas: ScalarField,
    pub ergonomics_standard: ScalarField,
    pub ergonomics_monolith: ScalarField,
    pub traffic: ScalarField,
    pub light: ScalarField,
}

impl StaticLayers {
    /// Builds every layer for the given room.
    pub fn build(room: &Room) -> Self {
        Self {
            architecture: architecture_layer(room),
            installation_water: installation_layer(room, UtilityKind::Water),
            installation_gas: installation_layer(room, UtilityKind::Gas),
            ergonomics_standard: ergonomics_standard_layer(room),
            ergonomics_monolith: ergonomics_monolith_layer(room),
            traffic: traffic_layer(room),
            light: light_layer(room),
        }
    }

    /// The ergonomics flavor that applies to the given kind.
    pub fn ergonomics_for(&self, kind: FixtureKind) -> &ScalarField {
        if kind.is_monolith() {
            &self.ergonomics_monolith
        } else {
            &self.ergonomics_standard
        }
    }

    /// Weighted combination of all layers for one kind: architecture at
    /// weight `1.0`, every other layer at its row weight, non-positive
    /// weights skipped.
    pub fn combined_for(&self, kind: FixtureKind) -> ScalarField {
        let weights = LayerWeights::for_kind(kind);
        let mut combined = self.architecture.clone();
        if weights.installation_water > 0.0 {
            combined.add_scaled(&self.installation_water.data, weights.installation_water);
        }
        if weights.installation_gas > 0.0 {
            combined.add_scaled(&self.installation_gas.data, weights.installation_gas);
        }
        if weights.ergonomics > 0.0 {
            combined.add_scaled(&self.ergonomics_for(kind).data, weights.ergonomics);
        }
        if weights.traffic > 0.0 {
            combined.add_scaled(&self.traffic.data, weights.traffic);
        }
        if weights.light > 0.0 {
            combined.add_scaled(&self.light.data, weights.light);
        }
        combined
    }
}
