//! Compass orientations and rotation directions.

use crate::robot::RobotError;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The way the robot is facing.
///
/// Discriminants index the rotation tables below, so the variant order is
/// clockwise starting from north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Orientation {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

use Orientation::{East, North, South, West};

/// Result of a quarter turn to the left, indexed by the current orientation.
const TURN_LEFT: [Orientation; 4] = [West, North, East, South];

/// Result of a quarter turn to the right, indexed by the current orientation.
const TURN_RIGHT: [Orientation; 4] = [East, South, West, North];

impl Orientation {
    /// All orientations in clockwise order.
    pub const ALL: [Orientation; 4] = [North, East, South, West];

    /// Orientation after a 90 degree turn to the left.
    pub fn left(self) -> Self {
        TURN_LEFT[self as usize]
    }

    /// Orientation after a 90 degree turn to the right.
    pub fn right(self) -> Self {
        TURN_RIGHT[self as usize]
    }

    /// Applies a single quarter turn in `direction`.
    pub fn rotate(self, direction: Direction) -> Self {
        match direction {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    /// Unit offset of one step forward. North is `+y`, east is `+x`.
    pub fn step(self) -> IVec2 {
        match self {
            North => IVec2::Y,
            East => IVec2::X,
            South => IVec2::NEG_Y,
            West => IVec2::NEG_X,
        }
    }

    /// Canonical uppercase name, as used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            North => "NORTH",
            East => "EAST",
            South => "SOUTH",
            West => "WEST",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = RobotError;

    /// Parses an orientation name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|o| o.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| RobotError::InvalidOrientation(name.to_string()))
    }
}

/// Which way to rotate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Left, Direction::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = RobotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| RobotError::InvalidDirection(name.to_string()))
    }
}
