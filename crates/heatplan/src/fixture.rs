//! Fixture kinds, their placement roles, and wishlist items.
//!
//! Every string the engine can meet maps onto [FixtureKind]; unknown strings
//! fall back to [FixtureKind::Other], which places with default weights and
//! no relationship couplings.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Height of full-height monolith units in cm.
pub const MONOLITH_HEIGHT_CM: u32 = 215;
/// Height of counter-height cabinets in cm.
pub const COUNTER_HEIGHT_CM: u32 = 85;

/// Priority rank assigned to kinds outside the anchor ordering.
const UNRANKED_PRIORITY: usize = 99;

/// A category of kitchen fixture known to the placement engine.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FixtureKind {
    Sink,
    SinkCabinet,
    Stove,
    StoveCabinet,
    Fridge,
    Pantry,
    OvenTower,
    Dishwasher,
    DrawerCabinet,
    BaseCabinet,
    Prep,
    Landing,
    Hood,
    Window,
    FillerPanel,
    Other,
}

impl FixtureKind {
    /// Parses a fixture type string. Unknown strings map to [FixtureKind::Other].
    pub fn parse(value: &str) -> Self {
        match value {
            "sink" => Self::Sink,
            "sink_cabinet" => Self::SinkCabinet,
            "stove" => Self::Stove,
            "stove_cabinet" => Self::StoveCabinet,
            "fridge" => Self::Fridge,
            "pantry" => Self::Pantry,
            "oven_tower" => Self::OvenTower,
            "dishwasher" => Self::Dishwasher,
            "drawer_cabinet" => Self::DrawerCabinet,
            "base_cabinet" => Self::BaseCabinet,
            "prep" => Self::Prep,
            "landing" => Self::Landing,
            "hood" => Self::Hood,
            "window" => Self::Window,
            "filler" => Self::FillerPanel,
            _ => Self::Other,
        }
    }

    /// The canonical type string, as carried in produced volumes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sink => "sink",
            Self::SinkCabinet => "sink_cabinet",
            Self::Stove => "stove",
            Self::StoveCabinet => "stove_cabinet",
            Self::Fridge => "fridge",
            Self::Pantry => "pantry",
            Self::OvenTower => "oven_tower",
            Self::Dishwasher => "dishwasher",
            Self::DrawerCabinet => "drawer_cabinet",
            Self::BaseCabinet => "base_cabinet",
            Self::Prep => "prep",
            Self::Landing => "landing",
            Self::Hood => "hood",
            Self::Window => "window",
            Self::FillerPanel => "filler",
            Self::Other => "other",
        }
    }

    /// Collapses cabinet variants onto the base kind used by relationship lookups.
    pub fn normalized(&self) -> Self {
        match self {
            Self::SinkCabinet => Self::Sink,
            Self::StoveCabinet => Self::Stove,
            Self::DrawerCabinet | Self::BaseCabinet => Self::Prep,
            other => *other,
        }
    }

    /// Whether this kind is placed by beam search.
    pub fn is_anchor(&self) -> bool {
        matches!(
            self,
            Self::Sink
                | Self::SinkCabinet
                | Self::Stove
                | Self::StoveCabinet
                | Self::Fridge
                | Self::Pantry
                | Self::OvenTower
        )
    }

    /// Whether this kind fills gaps between anchors.
    pub fn is_filler(&self) -> bool {
        matches!(
            self,
            Self::Dishwasher
                | Self::DrawerCabinet
                | Self::BaseCabinet
                | Self::Prep
                | Self::Landing
        )
    }

    /// Whether this kind is a full-height unit with edge-anchoring placement rules.
    pub fn is_monolith(&self) -> bool {
        matches!(self, Self::Fridge | Self::Pantry | Self::OvenTower)
    }

    /// Placement order rank for anchors. Strongly coupled kinds come first so
    /// later anchors can react to their fields; non-anchors rank last.
    pub fn anchor_priority(&self) -> usize {
        match self {
            Self::SinkCabinet => 0,
            Self::Sink => 1,
            Self::StoveCabinet => 2,
            Self::Stove => 3,
            Self::Fridge => 4,
            Self::Pantry => 5,
            Self::OvenTower => 6,
            _ => UNRANKED_PRIORITY,
        }
    }

    /// Height assigned to produced volumes of this kind.
    pub fn default_height_cm(&self) -> u32 {
        if self.is_monolith() {
            MONOLITH_HEIGHT_CM
        } else {
            COUNTER_HEIGHT_CM
        }
    }
}

impl std::fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A requested fixture to place.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WishItem {
    pub kind: FixtureKind,
    /// Footprint width along the wall in cm.
    pub width_cm: u32,
    /// Requested height in cm. Carried through but not used for placement;
    /// produced volume heights derive from the kind.
    pub height_cm: Option<u32>,
}

impl WishItem {
    /// Creates a new [`WishItem`] of the given kind and width.
    pub fn new(kind: FixtureKind, width_cm: u32) -> Self {
        Self {
            kind,
            width_cm,
            height_cm: None,
        }
    }

    /// Creates a new [`WishItem`] from a fixture type string.
    pub fn parse(kind: &str, width_cm: u32) -> Self {
        Self::new(FixtureKind::parse(kind), width_cm)
    }

    /// Sets the requested height.
    pub fn with_height(mut self, height_cm: u32) -> Self {
        self.height_cm = Some(height_cm);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_known_kinds() {
        let kinds = [
            FixtureKind::Sink,
            FixtureKind::SinkCabinet,
            FixtureKind::Stove,
            FixtureKind::StoveCabinet,
            FixtureKind::Fridge,
            FixtureKind::Pantry,
            FixtureKind::OvenTower,
            FixtureKind::Dishwasher,
            FixtureKind::DrawerCabinet,
            FixtureKind::BaseCabinet,
            FixtureKind::Prep,
            FixtureKind::Landing,
            FixtureKind::Hood,
            FixtureKind::Window,
            FixtureKind::FillerPanel,
        ];
        for kind in kinds {
            assert_eq!(FixtureKind::parse(kind.as_str()), kind);
        }
    }

    #[test]
    fn parse_falls_back_to_other() {
        assert_eq!(FixtureKind::parse("wine_rack"), FixtureKind::Other);
        assert_eq!(FixtureKind::parse(""), FixtureKind::Other);
    }

    #[test]
    fn normalized_collapses_cabinet_variants() {
        assert_eq!(FixtureKind::SinkCabinet.normalized(), FixtureKind::Sink);
        assert_eq!(FixtureKind::StoveCabinet.normalized(), FixtureKind::Stove);
        assert_eq!(FixtureKind::DrawerCabinet.normalized(), FixtureKind::Prep);
        assert_eq!(FixtureKind::BaseCabinet.normalized(), FixtureKind::Prep);
        assert_eq!(FixtureKind::Fridge.normalized(), FixtureKind::Fridge);
    }

    #[test]
    fn roles_are_disjoint() {
        let all = [
            FixtureKind::Sink,
            FixtureKind::SinkCabinet,
            FixtureKind::Stove,
            FixtureKind::StoveCabinet,
            FixtureKind::Fridge,
            FixtureKind::Pantry,
            FixtureKind::OvenTower,
            FixtureKind::Dishwasher,
            FixtureKind::DrawerCabinet,
            FixtureKind::BaseCabinet,
            FixtureKind::Prep,
            FixtureKind::Landing,
            FixtureKind::Hood,
            FixtureKind::Window,
            FixtureKind::FillerPanel,
            FixtureKind::Other,
        ];
        for kind in all {
            assert!(!(kind.is_anchor() && kind.is_filler()), "{kind} overlaps");
        }
    }

    #[test]
    fn anchors_sort_sink_before_stove_before_monoliths() {
        let mut anchors = vec![
            FixtureKind::OvenTower,
            FixtureKind::Fridge,
            FixtureKind::StoveCabinet,
            FixtureKind::SinkCabinet,
        ];
        anchors.sort_by_key(|k| k.anchor_priority());
        assert_eq!(
            anchors,
            vec![
                FixtureKind::SinkCabinet,
                FixtureKind::StoveCabinet,
                FixtureKind::Fridge,
                FixtureKind::OvenTower,
            ]
        );
    }

    #[test]
    fn monoliths_are_tall() {
        assert_eq!(FixtureKind::Fridge.default_height_cm(), MONOLITH_HEIGHT_CM);
        assert_eq!(
            FixtureKind::Dishwasher.default_height_cm(),
            COUNTER_HEIGHT_CM
        );
    }

    #[test]
    fn wish_item_builder_sets_height() {
        let item = WishItem::parse("fridge", 60).with_height(215);
        assert_eq!(item.kind, FixtureKind::Fridge);
        assert_eq!(item.width_cm, 60);
        assert_eq!(item.height_cm, Some(215));
    }
}
