//! Agent orientation and turn directions on the 4-way compass.

use std::fmt;

/// Which way the agent rotates when a rule fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum TurnDirection {
    /// Rotate 90° counter-clockwise.
    Left = -1,
    /// Keep the current orientation.
    Straight = 0,
    /// Rotate 90° clockwise.
    Right = 1,
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "L"),
            Self::Straight => write!(f, "N"),
            Self::Right => write!(f, "R"),
        }
    }
}

impl TryFrom<i8> for TurnDirection {
    type Error = i8;

    /// Decode a persisted raw value; the offending value is returned on failure.
    fn try_from(v: i8) -> Result<Self, i8> {
        match v {
            -1 => Ok(Self::Left),
            0 => Ok(Self::Straight),
            1 => Ok(Self::Right),
            other => Err(other),
        }
    }
}

/// Compass orientation of the agent.
///
/// Cyclically ordered `North → East → South → West → North` under
/// clockwise rotation; counter-clockwise is the reverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Orientation {
    /// Facing up the grid (row − 1).
    North = 0,
    /// Facing right (col + 1).
    East = 1,
    /// Facing down the grid (row + 1).
    South = 2,
    /// Facing left (col − 1).
    West = 3,
}

impl Orientation {
    /// Apply a turn, wrapping around the compass.
    ///
    /// Wrap-around is branch-based rather than modulo arithmetic: one turn
    /// moves at most one position past either end of the cycle, so a single
    /// check per side suffices.
    pub fn turned(self, turn: TurnDirection) -> Self {
        let raw = self as i8 + turn as i8;
        if raw < Self::North as i8 {
            Self::West
        } else if raw > Self::West as i8 {
            Self::North
        } else {
            // raw is in 0..=3 here.
            match raw {
                0 => Self::North,
                1 => Self::East,
                2 => Self::South,
                _ => Self::West,
            }
        }
    }

    /// Returns the `(col_offset, row_offset)` of one step in this direction.
    ///
    /// Rows grow southward, so north is `row − 1`.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::North => write!(f, "N"),
            Self::East => write!(f, "E"),
            Self::South => write!(f, "S"),
            Self::West => write!(f, "W"),
        }
    }
}

impl TryFrom<i8> for Orientation {
    type Error = i8;

    /// Decode a persisted raw value; the offending value is returned on failure.
    fn try_from(v: i8) -> Result<Self, i8> {
        match v {
            0 => Ok(Self::North),
            1 => Ok(Self::East),
            2 => Ok(Self::South),
            3 => Ok(Self::West),
            other => Err(other),
        }
    }
}
