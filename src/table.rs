//! The square table the robot moves on.

use glam::IVec2;
use thiserror::Error;

/// Errors raised when building a [`Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("table bounds are inverted: min coordinate {min} is greater than max coordinate {max}")]
    InvalidBounds { min: i32, max: i32 },
}

/// A square grid with inclusive bounds shared by both axes.
///
/// The table never changes after construction. Robots borrow it to validate
/// placements and moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Table {
    min_coordinate: i32,
    max_coordinate: i32,
}

impl Table {
    pub const DEFAULT_MIN_COORDINATE: i32 = 0;
    pub const DEFAULT_MAX_COORDINATE: i32 = 4;

    /// Creates a table covering `min_coordinate..=max_coordinate` on both axes.
    ///
    /// # Errors
    /// Returns [`TableError::InvalidBounds`] when `min_coordinate > max_coordinate`.
    pub fn new(min_coordinate: i32, max_coordinate: i32) -> Result<Self, TableError> {
        if min_coordinate > max_coordinate {
            return Err(TableError::InvalidBounds {
                min: min_coordinate,
                max: max_coordinate,
            });
        }
        Ok(Self {
            min_coordinate,
            max_coordinate,
        })
    }

    pub fn min_coordinate(&self) -> i32 {
        self.min_coordinate
    }

    pub fn max_coordinate(&self) -> i32 {
        self.max_coordinate
    }

    /// Number of cells along one side.
    pub fn side_length(&self) -> u64 {
        u64::from(self.max_coordinate.abs_diff(self.min_coordinate)) + 1
    }

    /// Returns true if `c` lies within the bounds on either axis.
    pub fn contains_coordinate(&self, c: i32) -> bool {
        (self.min_coordinate..=self.max_coordinate).contains(&c)
    }

    /// Returns true if both components of `position` lie on the table.
    pub fn contains(&self, position: IVec2) -> bool {
        self.contains_coordinate(position.x) && self.contains_coordinate(position.y)
    }
}

impl Default for Table {
    /// The conventional 5x5 table.
    fn default() -> Self {
        Self {
            min_coordinate: Self::DEFAULT_MIN_COORDINATE,
            max_coordinate: Self::DEFAULT_MAX_COORDINATE,
        }
    }
}
