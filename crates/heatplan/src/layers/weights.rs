//! Per-fixture weight rows for combining static layers.
use crate::fixture::FixtureKind;

/// Weights applied to the static layers when scoring one fixture kind.
///
/// The architecture layer always combines at weight `1.0` and is not listed
/// here. Rows exist for the cabinet variants; bare kinds and anything
/// unrecognized use [LayerWeights::DEFAULT].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerWeights {
    pub installation_water: f32,
    pub installation_gas: f32,
    pub ergonomics: f32,
    pub traffic: f32,
    pub light: f32,
}

impl LayerWeights {
    /// Fallback row for kinds without a dedicated entry.
    pub const DEFAULT: Self = Self {
        installation_water: 0.3,
        installation_gas: 0.0,
        ergonomics: 0.5,
        traffic: 0.3,
        light: 0.3,
    };

    /// The weight row for the given kind.
    pub fn for_kind(kind: FixtureKind) -> Self {
        match kind {
            FixtureKind::SinkCabinet => Self {
                installation_water: 1.0,
                installation_gas: 0.0,
                ergonomics: 0.5,
                traffic: 0.3,
                light: 0.8,
            },
            FixtureKind::StoveCabinet => Self {
                installation_water: 0.0,
                installation_gas: 0.8,
                ergonomics: 0.6,
                traffic: 0.4,
                light: 0.2,
            },
            FixtureKind::Fridge => Self {
                installation_water: 0.0,
                installation_gas: 0.0,
                ergonomics: 0.8,
                traffic: 0.3,
                light: 0.0,
            },
            FixtureKind::Dishwasher => Self {
                installation_water: 0.9,
                installation_gas: 0.0,
                ergonomics: 0.4,
                traffic: 0.5,
                light: 0.0,
            },
            FixtureKind::Pantry => Self {
                installation_water: 0.0,
                installation_gas: 0.0,
                ergonomics: 0.7,
                traffic: 0.2,
                light: 0.0,
            },
            _ => Self::DEFAULT,
        }
    }
}
