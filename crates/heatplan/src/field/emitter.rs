//! Attraction/repulsion fields broadcast by committed placements.
//!
//! Each placed item becomes a [FieldEmitter] that biases where related items
//! land afterwards: attractions pull (sink pulls the dishwasher close),
//! repulsions push (stove heat pushes the fridge away). Couplings live in two
//! fixed tables keyed by `(source, target)` kind; a miss contributes nothing.
use crate::field::scalar::ScalarField;
use crate::fixture::FixtureKind;

/// Shape of one attraction or repulsion field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coupling {
    /// Spread of the field in cm.
    pub sigma_cm: f32,
    /// Peak value; positive attracts, negative repels.
    pub amplitude: f32,
}

const ATTRACTIONS: &[(FixtureKind, FixtureKind, Coupling)] = &[
    // Short plumbing runs between sink and dishwasher.
    (
        FixtureKind::SinkCabinet,
        FixtureKind::Dishwasher,
        Coupling {
            sigma_cm: 60.0,
            amplitude: 150.0,
        },
    ),
    (
        FixtureKind::Sink,
        FixtureKind::Dishwasher,
        Coupling {
            sigma_cm: 60.0,
            amplitude: 150.0,
        },
    ),
    // The hood must sit above the stove.
    (
        FixtureKind::StoveCabinet,
        FixtureKind::Hood,
        Coupling {
            sigma_cm: 30.0,
            amplitude: 200.0,
        },
    ),
    (
        FixtureKind::Stove,
        FixtureKind::Hood,
        Coupling {
            sigma_cm: 30.0,
            amplitude: 200.0,
        },
    ),
    (
        FixtureKind::SinkCabinet,
        FixtureKind::DrawerCabinet,
        Coupling {
            sigma_cm: 80.0,
            amplitude: 50.0,
        },
    ),
    (
        FixtureKind::SinkCabinet,
        FixtureKind::Prep,
        Coupling {
            sigma_cm: 80.0,
            amplitude: 50.0,
        },
    ),
    (
        FixtureKind::StoveCabinet,
        FixtureKind::OvenTower,
        Coupling {
            sigma_cm: 100.0,
            amplitude: 40.0,
        },
    ),
];

const REPULSIONS: &[(FixtureKind, FixtureKind, Coupling)] = &[
    // Stove heat damages the fridge compressor; symmetric.
    (
        FixtureKind::StoveCabinet,
        FixtureKind::Fridge,
        Coupling {
            sigma_cm: 80.0,
            amplitude: -100.0,
        },
    ),
    (
        FixtureKind::Stove,
        FixtureKind::Fridge,
        Coupling {
            sigma_cm: 80.0,
            amplitude: -100.0,
        },
    ),
    // Open flame near curtains.
    (
        FixtureKind::StoveCabinet,
        FixtureKind::Window,
        Coupling {
            sigma_cm: 50.0,
            amplitude: -300.0,
        },
    ),
    (
        FixtureKind::Stove,
        FixtureKind::Window,
        Coupling {
            sigma_cm: 50.0,
            amplitude: -300.0,
        },
    ),
    (
        FixtureKind::Fridge,
        FixtureKind::StoveCabinet,
        Coupling {
            sigma_cm: 80.0,
            amplitude: -100.0,
        },
    ),
    (
        FixtureKind::Fridge,
        FixtureKind::Stove,
        Coupling {
            sigma_cm: 80.0,
            amplitude: -100.0,
        },
    ),
    // Tall units spread out for visual balance.
    (
        FixtureKind::Fridge,
        FixtureKind::Pantry,
        Coupling {
            sigma_cm: 60.0,
            amplitude: -30.0,
        },
    ),
    (
        FixtureKind::Fridge,
        FixtureKind::OvenTower,
        Coupling {
            sigma_cm: 60.0,
            amplitude: -30.0,
        },
    ),
];

fn lookup(
    table: &[(FixtureKind, FixtureKind, Coupling)],
    source: FixtureKind,
    target: FixtureKind,
) -> Option<Coupling> {
    let raw = table
        .iter()
        .find(|(s, t, _)| *s == source && *t == target)
        .map(|(_, _, c)| *c);
    if raw.is_some() {
        return raw;
    }
    let (source, target) = (source.normalized(), target.normalized());
    table
        .iter()
        .find(|(s, t, _)| *s == source && *t == target)
        .map(|(_, _, c)| *c)
}

/// Attraction coupling between two kinds, trying the raw pair first and the
/// normalized pair second.
pub fn attraction_between(source: FixtureKind, target: FixtureKind) -> Option<Coupling> {
    lookup(ATTRACTIONS, source, target)
}

/// Repulsion coupling between two kinds, trying the raw pair first and the
/// normalized pair second.
pub fn repulsion_between(source: FixtureKind, target: FixtureKind) -> Option<Coupling> {
    lookup(REPULSIONS, source, target)
}

/// A committed placement broadcasting influence to future placements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldEmitter {
    /// Left edge in cm.
    pub position: i32,
    pub width_cm: u32,
    pub kind: FixtureKind,
}

impl FieldEmitter {
    /// Creates a new [`FieldEmitter`].
    pub fn new(position: i32, width_cm: u32, kind: FixtureKind) -> Self {
        Self {
            position,
            width_cm,
            kind,
        }
    }

    /// Left edge in cm.
    pub fn start(&self) -> i32 {
        self.position
    }

    /// Right edge in cm.
    pub fn end(&self) -> i32 {
        self.position + self.width_cm as i32
    }

    /// Center in cm; fields are emitted from here.
    pub fn center(&self) -> i32 {
        self.position + (self.width_cm / 2) as i32
    }

    /// Attraction field toward the target kind, or `None` without a coupling.
    pub fn attraction_for(&self, target: FixtureKind, span_cm: u32) -> Option<ScalarField> {
        attraction_between(self.kind, target).map(|coupling| {
            ScalarField::gaussian_bump(span_cm, self.center(), coupling.sigma_cm, coupling.amplitude)
        })
    }

    /// Repulsion field toward the target kind, or `None` without a coupling.
    pub fn repulsion_for(&self, target: FixtureKind, span_cm: u32) -> Option<ScalarField> {
        repulsion_between(self.kind, target).map(|coupling| {
            ScalarField::gaussian_bump(span_cm, self.center(), coupling.sigma_cm, coupling.amplitude)
        })
    }

    /// Sum of attraction and repulsion toward the target kind; zero when no
    /// coupling exists in either table.
    pub fn combined_field_for(&self, target: FixtureKind, span_cm: u32) -> ScalarField {
        let mut field = ScalarField::zeros(span_cm);
        if let Some(attraction) = self.attraction_for(target, span_cm) {
            field += &attraction;
        }
        if let Some(repulsion) = self.repulsion_for(target, span_cm) {
            field += &repulsion;
        }
        field
    }
}

/// Superposition of every emitter's combined field toward the target kind.
pub fn compute_dynamic_fields(
    emitters: &[FieldEmitter],
    target: FixtureKind,
    span_cm: u32,
) -> ScalarField {
    let mut field = ScalarField::zeros(span_cm);
    for emitter in emitters {
        field += &emitter.combined_field_for(target, span_cm);
    }
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_pulls_dishwasher_toward_its_center() {
        let sink = FieldEmitter::new(100, 60, FixtureKind::SinkCabinet);
        let field = sink
            .attraction_for(FixtureKind::Dishwasher, 400)
            .expect("coupling exists");
        assert!((field.get(130) - 150.0).abs() < 1e-3);
        assert!(field.get(130) > field.get(300));
    }

    #[test]
    fn stove_pushes_fridge_away() {
        let stove = FieldEmitter::new(200, 60, FixtureKind::StoveCabinet);
        let field = stove.combined_field_for(FixtureKind::Fridge, 400);
        assert!(field.get(230) < -99.0);
        assert!(field.get(0) > field.get(230));
    }

    #[test]
    fn unknown_pairs_contribute_zero() {
        let landing = FieldEmitter::new(0, 60, FixtureKind::Landing);
        assert!(landing.attraction_for(FixtureKind::Fridge, 100).is_none());
        let field = landing.combined_field_for(FixtureKind::Fridge, 100);
        assert!(field.data.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn cabinet_alias_matches_bare_kind() {
        let cabinet = FieldEmitter::new(50, 60, FixtureKind::SinkCabinet);
        let bare = FieldEmitter::new(50, 60, FixtureKind::Sink);
        let a = cabinet.combined_field_for(FixtureKind::Dishwasher, 200);
        let b = bare.combined_field_for(FixtureKind::Dishwasher, 200);
        assert_eq!(a, b);
    }

    #[test]
    fn raw_pairs_win_over_normalized_lookups() {
        // Only the cabinet row exists for prep attraction; the bare sink
        // normalizes to a pair that is absent from the table.
        assert!(attraction_between(FixtureKind::SinkCabinet, FixtureKind::Prep).is_some());
        assert!(attraction_between(FixtureKind::Sink, FixtureKind::Prep).is_none());
    }

    #[test]
    fn stove_window_repulsion_is_strong() {
        let coupling = repulsion_between(FixtureKind::Stove, FixtureKind::Window)
            .expect("coupling exists");
        assert_eq!(coupling.amplitude, -300.0);
        assert_eq!(coupling.sigma_cm, 50.0);
    }

    #[test]
    fn dynamic_fields_superpose_linearly() {
        let emitters = vec![
            FieldEmitter::new(0, 60, FixtureKind::SinkCabinet),
            FieldEmitter::new(150, 60, FixtureKind::StoveCabinet),
            FieldEmitter::new(300, 60, FixtureKind::Fridge),
        ];
        let whole = compute_dynamic_fields(&emitters, FixtureKind::Dishwasher, 400);
        let left = compute_dynamic_fields(&emitters[..1], FixtureKind::Dishwasher, 400);
        let right = compute_dynamic_fields(&emitters[1..], FixtureKind::Dishwasher, 400);
        let recombined = &left + &right;
        for x in 0..400 {
            assert!((whole.get(x) - recombined.get(x)).abs() < 1e-4);
        }
    }
}
