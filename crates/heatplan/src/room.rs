//! Room geometry consumed by the solvers.
//!
//! A [Room] describes one wall span (or two spans meeting at a corner for
//! L-shaped rooms) together with utility points and wall openings. Positions
//! are integer centimeters; the placement axis runs left to right along the
//! back wall.
use glam::IVec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Wall a window or door sits on.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wall {
    Back,
    Left,
    Right,
    Front,
}

/// Supply line category of a utility point.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UtilityKind {
    Water,
    Gas,
    Electric,
    Other,
}

/// A fixed supply point (water, gas, electric) in the room.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Utility {
    pub kind: UtilityKind,
    /// Position in cm; only `x` matters for placement along the back wall.
    pub position: IVec3,
}

impl Utility {
    /// Creates a new [`Utility`] at the given position.
    pub fn new(kind: UtilityKind, position: IVec3) -> Self {
        Self { kind, position }
    }

    /// Creates a new [`Utility`] on the back wall at the given x offset.
    pub fn at_x(kind: UtilityKind, x: i32) -> Self {
        Self::new(kind, IVec3::new(x, 0, 0))
    }

    /// Offset along the back wall in cm.
    pub fn x(&self) -> i32 {
        self.position.x
    }
}

/// A window or door opening in a wall.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opening {
    pub wall: Wall,
    /// Left edge along the wall in cm.
    pub x: i32,
    pub width_cm: u32,
    pub height_cm: u32,
}

impl Opening {
    /// Creates a new [`Opening`].
    pub fn new(wall: Wall, x: i32, width_cm: u32, height_cm: u32) -> Self {
        Self {
            wall,
            x,
            width_cm,
            height_cm,
        }
    }

    /// Midpoint of the opening along its wall.
    pub fn center_x(&self) -> i32 {
        self.x + (self.width_cm / 2) as i32
    }
}

/// Room geometry for one placement run.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    /// Back wall span in cm; the placement domain.
    pub width_cm: u32,
    /// Room depth in cm.
    pub length_cm: u32,
    /// Room height in cm.
    pub height_cm: u32,
    pub utilities: Vec<Utility>,
    pub windows: Vec<Opening>,
    pub doors: Vec<Opening>,
    /// Side wall span in cm; set for L-shaped rooms, falls back to `length_cm`.
    pub wall_b_length_cm: Option<u32>,
}

impl Room {
    /// Creates a new empty [`Room`] with the given dimensions.
    pub fn new(width_cm: u32, length_cm: u32, height_cm: u32) -> Self {
        Self {
            width_cm,
            length_cm,
            height_cm,
            utilities: Vec::new(),
            windows: Vec::new(),
            doors: Vec::new(),
            wall_b_length_cm: None,
        }
    }

    /// Adds a utility point.
    pub fn with_utility(mut self, utility: Utility) -> Self {
        self.utilities.push(utility);
        self
    }

    /// Replaces the utility points.
    pub fn with_utilities(mut self, utilities: Vec<Utility>) -> Self {
        self.utilities = utilities;
        self
    }

    /// Adds a window opening.
    pub fn with_window(mut self, window: Opening) -> Self {
        self.windows.push(window);
        self
    }

    /// Adds a door opening.
    pub fn with_door(mut self, door: Opening) -> Self {
        self.doors.push(door);
        self
    }

    /// Sets the side wall span for L-shaped rooms.
    pub fn with_wall_b_length(mut self, wall_b_length_cm: u32) -> Self {
        self.wall_b_length_cm = Some(wall_b_length_cm);
        self
    }

    /// Validates the geometry, returning an error if unusable for placement.
    pub fn validate(&self) -> Result<()> {
        if self.width_cm == 0 {
            return Err(Error::InvalidRoom("width_cm must be > 0".into()));
        }
        if let Some(wall_b) = self.wall_b_length_cm {
            if wall_b == 0 {
                return Err(Error::InvalidRoom("wall_b_length_cm must be > 0".into()));
            }
        }

        Ok(())
    }

    /// Whether any utility of the given kind exists.
    pub fn has_utility(&self, kind: UtilityKind) -> bool {
        self.utilities.iter().any(|u| u.kind == kind)
    }
}
