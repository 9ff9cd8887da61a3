//! L-shape placement over two straight spans joined by a corner unit.
//!
//! The corner unit claims the origin of both walls. Arm A covers the rest
//! of wall A along the global X axis, arm B the rest of wall B along the
//! global Z axis. Items are routed to an arm by zone rules, then each arm
//! runs its own beam solve in local coordinates and the results are mapped
//! back into the global frame. Windows and doors keep their wall A
//! coordinates on both arms; only utilities are re-based per arm.
use glam::IVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::fixture::{FixtureKind, WishItem};
use crate::room::{Room, Utility, UtilityKind};
use crate::solve::beam::BeamSolver;
use crate::solve::volume::{Arm, SolveDebug, Volume};
use crate::solve::SolverConfig;

/// Corner cabinet style joining the two arms.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CornerUnit {
    #[default]
    Blind,
    Diagonal,
    Carousel,
}

impl CornerUnit {
    /// Footprint the unit claims at the origin of both walls.
    pub fn size_cm(&self) -> u32 {
        match self {
            Self::Blind => 65,
            Self::Diagonal => 87,
            Self::Carousel => 90,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blind => "blind",
            Self::Diagonal => "diagonal",
            Self::Carousel => "carousel",
        }
    }
}

impl std::fmt::Display for CornerUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The corner unit as placed.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CornerInfo {
    pub unit: CornerUnit,
    pub size_cm: u32,
}

/// Placements of one arm, in global coordinates.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArmResult {
    /// Where the arm begins along its wall, past the corner unit.
    pub start_cm: u32,
    /// Total wall length the arm runs to.
    pub end_cm: u32,
    pub volumes: Vec<Volume>,
}

/// Per-arm diagnostics of an L-shape solve.
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DualDebug {
    pub arm_a: SolveDebug,
    pub arm_b: SolveDebug,
}

/// Output of an L-shape solve.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DualSolveResult {
    /// All placed volumes from both arms, in global coordinates.
    pub volumes: Vec<Volume>,
    pub corner: CornerInfo,
    pub arm_a: ArmResult,
    pub arm_b: ArmResult,
    pub debug: DualDebug,
}

/// Which arm an item gravitates to before any space accounting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ArmPreference {
    /// Tall units stack at the end of arm B.
    MonolithEnd,
    /// Wet work follows the water line.
    Water,
    /// Hot work follows the gas line.
    Gas,
    /// Whichever arm has more room left.
    Balance,
}

impl ArmPreference {
    fn for_kind(kind: FixtureKind) -> Self {
        match kind {
            FixtureKind::Fridge | FixtureKind::Pantry | FixtureKind::OvenTower => {
                Self::MonolithEnd
            }
            FixtureKind::Sink | FixtureKind::SinkCabinet | FixtureKind::Dishwasher => Self::Water,
            FixtureKind::Stove | FixtureKind::StoveCabinet => Self::Gas,
            _ => Self::Balance,
        }
    }
}

/// Places a wishlist along the two arms of an L-shaped room.
///
/// Wall A is the room width; wall B defaults to the room length when
/// [`Room::wall_b_length_cm`] is unset. Arm A keeps gap filling on; arm B
/// holds the tall units and skips fillers regardless of the caller's
/// configuration.
#[derive(Clone, Debug)]
pub struct DualSpanSolver {
    room: Room,
    corner: CornerUnit,
    arm_a: BeamSolver,
    arm_b: BeamSolver,
}

impl DualSpanSolver {
    /// Creates a solver, splitting `room` into per-arm sub-rooms.
    ///
    /// Returns an error if either wall does not extend past the corner
    /// unit, or if the room or configuration fails validation.
    pub fn try_new(room: Room, corner: CornerUnit, config: SolverConfig) -> Result<Self> {
        room.validate()?;
        config.validate()?;

        let corner_size = corner.size_cm();
        if room.width_cm <= corner_size {
            return Err(Error::InvalidRoom(format!(
                "wall A ({}cm) must extend past the {corner} corner unit ({corner_size}cm)",
                room.width_cm
            )));
        }
        let wall_b = room.wall_b_length_cm.unwrap_or(room.length_cm);
        if wall_b <= corner_size {
            return Err(Error::InvalidRoom(format!(
                "wall B ({wall_b}cm) must extend past the {corner} corner unit ({corner_size}cm)"
            )));
        }

        let arm_a = BeamSolver::try_new(
            arm_room(&room, Arm::A, corner_size),
            config.clone().with_skip_fillers(false),
        )?;
        let arm_b = BeamSolver::try_new(
            arm_room(&room, Arm::B, corner_size),
            config.with_skip_fillers(true),
        )?;

        Ok(Self {
            room,
            corner,
            arm_a,
            arm_b,
        })
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn corner(&self) -> CornerUnit {
        self.corner
    }

    /// Usable span of each arm in cm, past the corner unit.
    pub fn arm_lengths(&self) -> (u32, u32) {
        (self.arm_a.room().width_cm, self.arm_b.room().width_cm)
    }

    /// The single-span solver running one arm, for inspection.
    pub fn arm_solver(&self, arm: Arm) -> &BeamSolver {
        match arm {
            Arm::A => &self.arm_a,
            Arm::B => &self.arm_b,
        }
    }

    /// Places the wishlist across both arms.
    ///
    /// Items are routed by [`ArmPreference`] zone rules, each arm solves
    /// its share independently, and the local placements are transformed
    /// into the global frame.
    pub fn solve(&self, wishlist: &[WishItem]) -> DualSolveResult {
        let corner_size = self.corner.size_cm();
        let (arm_a_length, arm_b_length) = self.arm_lengths();
        info!(
            "L-shape solve: {} corner ({}cm), arm A {}cm, arm B {}cm.",
            self.corner, corner_size, arm_a_length, arm_b_length
        );

        let (arm_a_items, arm_b_items) = self.distribute(wishlist);
        info!(
            "Routed {} items to arm A, {} to arm B.",
            arm_a_items.len(),
            arm_b_items.len()
        );

        let arm_a_result = self.arm_a.solve(&arm_a_items);
        let arm_b_result = self.arm_b.solve(&arm_b_items);
        let arm_a_volumes = self.transform_arm_a(arm_a_result.volumes);
        let arm_b_volumes = self.transform_arm_b(arm_b_result.volumes);

        let mut volumes = arm_a_volumes.clone();
        volumes.extend(arm_b_volumes.clone());

        DualSolveResult {
            volumes,
            corner: CornerInfo {
                unit: self.corner,
                size_cm: corner_size,
            },
            arm_a: ArmResult {
                start_cm: corner_size,
                end_cm: self.room.width_cm,
                volumes: arm_a_volumes,
            },
            arm_b: ArmResult {
                start_cm: corner_size,
                end_cm: self.room.wall_b_length_cm.unwrap_or(self.room.length_cm),
                volumes: arm_b_volumes,
            },
            debug: DualDebug {
                arm_a: arm_a_result.debug,
                arm_b: arm_b_result.debug,
            },
        }
    }

    /// Maps a global volume position back to its arm and local offset.
    ///
    /// Returns [`None`] for positions inside the corner footprint or off
    /// both walls.
    pub fn arm_position_of(&self, position: IVec2) -> Option<(Arm, i32)> {
        let corner = self.corner.size_cm() as i32;
        if position.y == 0 && position.x >= corner {
            return Some((Arm::A, position.x - corner));
        }
        if position.x == 0 && position.y >= corner {
            return Some((Arm::B, position.y - corner));
        }

        None
    }

    fn distribute(&self, wishlist: &[WishItem]) -> (Vec<WishItem>, Vec<WishItem>) {
        let corner = self.corner.size_cm() as i32;
        let utilities = &self.room.utilities;
        let water_on_a = utilities
            .iter()
            .any(|u| u.kind == UtilityKind::Water && u.x() >= corner);
        let gas_on_a = utilities
            .iter()
            .any(|u| u.kind == UtilityKind::Gas && u.x() >= corner);
        let gas_on_b = utilities
            .iter()
            .any(|u| u.kind == UtilityKind::Gas && u.x() < corner);
        let no_gas_defined = !gas_on_a && !gas_on_b;

        let (arm_a_length, arm_b_length) = self.arm_lengths();
        let mut arm_a: Vec<WishItem> = Vec::new();
        let mut arm_b: Vec<WishItem> = Vec::new();
        for item in wishlist {
            match ArmPreference::for_kind(item.kind) {
                ArmPreference::MonolithEnd => arm_b.push(*item),
                ArmPreference::Water => {
                    if water_on_a {
                        arm_a.push(*item);
                    } else {
                        arm_b.push(*item);
                    }
                }
                ArmPreference::Gas => {
                    // Without any gas line the stove stays in the arm A
                    // work zone.
                    if gas_on_a || no_gas_defined {
                        arm_a.push(*item);
                    } else {
                        arm_b.push(*item);
                    }
                }
                ArmPreference::Balance => {
                    let used_a: i64 = arm_a.iter().map(|i| i64::from(i.width_cm)).sum();
                    let used_b: i64 = arm_b.iter().map(|i| i64::from(i.width_cm)).sum();
                    if i64::from(arm_a_length) - used_a > i64::from(arm_b_length) - used_b {
                        arm_a.push(*item);
                    } else {
                        arm_b.push(*item);
                    }
                }
            }
        }

        (arm_a, arm_b)
    }

    fn transform_arm_a(&self, volumes: Vec<Volume>) -> Vec<Volume> {
        let corner = self.corner.size_cm() as i32;
        volumes
            .into_iter()
            .map(|mut v| {
                v.x += corner;
                v.z = 0;
                v.meta.arm = Some(Arm::A);
                v
            })
            .collect()
    }

    fn transform_arm_b(&self, volumes: Vec<Volume>) -> Vec<Volume> {
        let corner = self.corner.size_cm() as i32;
        volumes
            .into_iter()
            .map(|mut v| {
                v.z = v.x + corner;
                v.x = 0;
                v.meta.arm = Some(Arm::B);
                v
            })
            .collect()
    }
}

fn arm_room(room: &Room, arm: Arm, corner_size: u32) -> Room {
    let (width, utilities) = match arm {
        Arm::A => {
            let width = room.width_cm - corner_size;
            let utilities = room
                .utilities
                .iter()
                .filter(|u| u.x() >= corner_size as i32)
                .map(|u| {
                    let mut position = u.position;
                    position.x -= corner_size as i32;
                    Utility::new(u.kind, position)
                })
                .collect();
            (width, utilities)
        }
        Arm::B => {
            let wall_b = room.wall_b_length_cm.unwrap_or(room.length_cm);
            let width = wall_b - corner_size;
            let utilities = room
                .utilities
                .iter()
                .filter(|u| u.x() < corner_size as i32)
                .cloned()
                .collect();
            (width, utilities)
        }
    };

    let mut sub = Room::new(width, room.length_cm, room.height_cm).with_utilities(utilities);
    sub.windows = room.windows.clone();
    sub.doors = room.doors.clone();
    sub
}
