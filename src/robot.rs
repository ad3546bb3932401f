//! Robot state machine.
//!
//! A [`Robot`] starts off the table. Once a valid `place` lands it on the table
//! it stays there for the rest of its life: every further move, rotation or
//! re-placement keeps it within the bounds of the [`Table`] it was built with.

use crate::heading::{Direction, Orientation};
use crate::table::Table;
use glam::IVec2;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised by robot operations.
///
/// All of them describe caller input that is invalid for the current state;
/// a failed operation never changes the robot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RobotError {
    #[error("coordinates ({x}, {y}) must be integers within range {min}..{max}")]
    InvalidCoordinates {
        x: String,
        y: String,
        min: i32,
        max: i32,
    },
    #[error("orientation `{0}` should be one of NORTH, EAST, SOUTH, WEST")]
    InvalidOrientation(String),
    #[error("direction `{0}` should be LEFT or RIGHT")]
    InvalidDirection(String),
    #[error("robot has not been placed yet")]
    NotPlaced,
}

/// Position and facing of a placed robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    pub position: IVec2,
    pub orientation: Orientation,
}

impl Pose {
    pub fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self {
            position: IVec2::new(x, y),
            orientation,
        }
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// The cell one step ahead. Saturates instead of overflowing at the
    /// edges of `i32`.
    pub fn ahead(&self) -> IVec2 {
        self.position.saturating_add(self.orientation.step())
    }
}

impl fmt::Display for Pose {
    /// Renders as `x,y,ORIENTATION`, the report format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x(), self.y(), self.orientation)
    }
}

/// Whether the robot is on the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RobotState {
    #[default]
    Unplaced,
    Placed(Pose),
}

/// A robot on a borrowed [`Table`].
#[derive(Clone, Debug)]
pub struct Robot<'t> {
    table: &'t Table,
    state: RobotState,
}

impl<'t> Robot<'t> {
    /// Creates an unplaced robot bound to `table`.
    pub fn new(table: &'t Table) -> Self {
        Self {
            table,
            state: RobotState::Unplaced,
        }
    }

    pub fn table(&self) -> &'t Table {
        self.table
    }

    pub fn state(&self) -> RobotState {
        self.state
    }

    /// Current pose, or `None` while unplaced.
    pub fn pose(&self) -> Option<Pose> {
        match self.state {
            RobotState::Placed(pose) => Some(pose),
            RobotState::Unplaced => None,
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self.state, RobotState::Placed(_))
    }

    /// Puts the robot at `(x, y)` facing `orientation`, replacing any previous pose.
    ///
    /// # Errors
    /// [`RobotError::InvalidCoordinates`] if either coordinate is off the table.
    pub fn place(&mut self, x: i32, y: i32, orientation: Orientation) -> Result<(), RobotError> {
        self.check_coordinates(x, y)?;
        self.commit_place(Pose::new(x, y, orientation));
        Ok(())
    }

    /// Textual form of [`place`](Self::place).
    ///
    /// Coordinates are validated before the orientation, so a bad coordinate
    /// is reported even when the orientation is also bad.
    ///
    /// # Errors
    /// - [`RobotError::InvalidCoordinates`] if `x` or `y` is not an integer or is off the table.
    /// - [`RobotError::InvalidOrientation`] if `orientation` is not a compass point.
    pub fn place_from_str(&mut self, x: &str, y: &str, orientation: &str) -> Result<(), RobotError> {
        let (x, y) = match (x.trim().parse::<i32>(), y.trim().parse::<i32>()) {
            (Ok(px), Ok(py)) => (px, py),
            _ => return Err(self.invalid_coordinates(x.trim(), y.trim())),
        };
        self.check_coordinates(x, y)?;
        let orientation = orientation.parse::<Orientation>()?;
        self.commit_place(Pose::new(x, y, orientation));
        Ok(())
    }

    /// Moves one cell forward.
    ///
    /// A move that would leave the table is ignored. Returns whether the
    /// robot changed cell.
    ///
    /// # Errors
    /// [`RobotError::NotPlaced`] while unplaced.
    pub fn move_forward(&mut self) -> Result<bool, RobotError> {
        let pose = self.placed_pose()?;
        let target = pose.ahead();
        if target == pose.position || !self.table.contains(target) {
            trace!(
                "event=move status=blocked x={} y={} facing={}",
                pose.x(),
                pose.y(),
                pose.orientation
            );
            return Ok(false);
        }

        self.state = RobotState::Placed(Pose {
            position: target,
            ..pose
        });
        debug!(
            "event=move status=ok x={} y={} facing={}",
            target.x, target.y, pose.orientation
        );
        Ok(true)
    }

    /// Turns 90 degrees in `direction`. The position is left alone.
    ///
    /// # Errors
    /// [`RobotError::NotPlaced`] while unplaced.
    pub fn rotate(&mut self, direction: Direction) -> Result<(), RobotError> {
        let pose = self.placed_pose()?;
        let orientation = pose.orientation.rotate(direction);
        self.state = RobotState::Placed(Pose {
            orientation,
            ..pose
        });
        debug!(
            "event=rotate direction={} from={} to={}",
            direction, pose.orientation, orientation
        );
        Ok(())
    }

    /// Textual form of [`rotate`](Self::rotate).
    ///
    /// # Errors
    /// - [`RobotError::NotPlaced`] while unplaced, checked first.
    /// - [`RobotError::InvalidDirection`] if `direction` is not LEFT or RIGHT.
    pub fn rotate_from_str(&mut self, direction: &str) -> Result<(), RobotError> {
        self.placed_pose()?;
        self.rotate(direction.parse()?)
    }

    /// Returns the current pose as `x,y,ORIENTATION`.
    ///
    /// # Errors
    /// [`RobotError::NotPlaced`] while unplaced.
    pub fn report(&self) -> Result<String, RobotError> {
        self.placed_pose().map(|pose| pose.to_string())
    }

    fn placed_pose(&self) -> Result<Pose, RobotError> {
        self.pose().ok_or(RobotError::NotPlaced)
    }

    fn commit_place(&mut self, pose: Pose) {
        self.state = RobotState::Placed(pose);
        debug!(
            "event=place x={} y={} facing={}",
            pose.x(),
            pose.y(),
            pose.orientation
        );
    }

    fn check_coordinates(&self, x: i32, y: i32) -> Result<(), RobotError> {
        if self.table.contains(IVec2::new(x, y)) {
            Ok(())
        } else {
            Err(self.invalid_coordinates(&x.to_string(), &y.to_string()))
        }
    }

    fn invalid_coordinates(&self, x: &str, y: &str) -> RobotError {
        RobotError::InvalidCoordinates {
            x: x.to_string(),
            y: y.to_string(),
            min: self.table.min_coordinate(),
            max: self.table.max_coordinate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_robot_is_unplaced() {
        let table = Table::default();
        let robot = Robot::new(&table);
        assert!(!robot.is_placed());
        assert_eq!(robot.state(), RobotState::Unplaced);
        assert_eq!(robot.pose(), None);
    }

    #[test]
    fn place_sets_the_whole_pose() {
        let table = Table::default();
        let mut robot = Robot::new(&table);
        robot.place(2, 3, Orientation::South).unwrap();
        assert_eq!(robot.pose(), Some(Pose::new(2, 3, Orientation::South)));
        assert_eq!(robot.report().unwrap(), "2,3,SOUTH");
    }

    #[test]
    fn textual_place_checks_coordinates_before_orientation() {
        let table = Table::default();
        let mut robot = Robot::new(&table);

        let err = robot.place_from_str("9", "0", "SIDEWAYS").unwrap_err();
        assert!(matches!(err, RobotError::InvalidCoordinates { .. }));

        let err = robot.place_from_str("1", "1", "SIDEWAYS").unwrap_err();
        assert_eq!(err, RobotError::InvalidOrientation("SIDEWAYS".to_string()));
        assert!(!robot.is_placed());
    }

    #[test]
    fn textual_place_rejects_non_integers_as_coordinates() {
        let table = Table::default();
        let mut robot = Robot::new(&table);
        let err = robot.place_from_str("1.5", "2", "NORTH").unwrap_err();
        assert_eq!(
            err,
            RobotError::InvalidCoordinates {
                x: "1.5".to_string(),
                y: "2".to_string(),
                min: 0,
                max: 4,
            }
        );
    }

    #[test]
    fn textual_place_accepts_lowercase_orientation() {
        let table = Table::default();
        let mut robot = Robot::new(&table);
        robot.place_from_str(" 0", "4 ", "east").unwrap();
        assert_eq!(robot.report().unwrap(), "0,4,EAST");
    }

    #[test]
    fn rotate_checks_placement_before_direction() {
        let table = Table::default();
        let mut robot = Robot::new(&table);
        assert_eq!(robot.rotate_from_str("UP"), Err(RobotError::NotPlaced));

        robot.place(0, 0, Orientation::North).unwrap();
        assert_eq!(
            robot.rotate_from_str("UP"),
            Err(RobotError::InvalidDirection("UP".to_string()))
        );
        assert_eq!(robot.pose().unwrap().orientation, Orientation::North);

        robot.rotate_from_str("left").unwrap();
        assert_eq!(robot.pose().unwrap().orientation, Orientation::West);
    }

    #[test]
    fn move_reports_whether_it_moved() {
        let table = Table::default();
        let mut robot = Robot::new(&table);
        robot.place(0, 0, Orientation::South).unwrap();
        assert!(!robot.move_forward().unwrap());

        robot.rotate(Direction::Left).unwrap();
        assert!(robot.move_forward().unwrap());
        assert_eq!(robot.report().unwrap(), "1,0,EAST");
    }

    #[test]
    fn move_at_extreme_coordinates_does_not_overflow() {
        let table = Table::new(i32::MAX - 1, i32::MAX).unwrap();
        let mut robot = Robot::new(&table);
        robot.place(i32::MAX, i32::MAX, Orientation::North).unwrap();
        assert!(!robot.move_forward().unwrap());
        assert_eq!(robot.pose().unwrap().y(), i32::MAX);
    }

    #[test]
    fn robot_snapshot_serializes_with_uppercase_orientation() {
        let table = Table::default();
        let mut robot = Robot::new(&table);
        assert_eq!(serde_json::to_value(robot.state()).unwrap(), "Unplaced");

        robot.place(1, 2, Orientation::West).unwrap();
        let json = serde_json::to_value(robot.state()).unwrap();
        assert_eq!(json["Placed"]["position"], serde_json::json!([1, 2]));
        assert_eq!(json["Placed"]["orientation"], "WEST");
    }
}
