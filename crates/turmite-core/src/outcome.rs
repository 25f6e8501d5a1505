//! The outcome of a single simulation step.

use std::fmt;

/// Outcome of the most recent call to `step_forward`.
///
/// Values are ordered: any outcome ranked above [`Success`](Self::Success)
/// is terminal. [`Nil`](Self::Nil) is the pre-run sentinel — a freshly
/// constructed simulation has not stepped yet and is not terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum StepResult {
    /// No step has been performed yet.
    Nil = 0,
    /// The agent turned, recolored its cell, and moved to an in-bounds cell.
    Success = 1,
    /// The agent's next position fell outside the grid; the simulation is
    /// finished and the agent did not move.
    FailedAtBoundary = 2,
}

impl StepResult {
    /// Returns `true` if this outcome ends the simulation.
    ///
    /// Terminal outcomes are exactly those ranked above [`Success`](Self::Success).
    pub fn is_terminal(self) -> bool {
        self > Self::Success
    }
}

impl fmt::Display for StepResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Success => write!(f, "success"),
            Self::FailedAtBoundary => write!(f, "hit boundary"),
        }
    }
}

impl TryFrom<u8> for StepResult {
    type Error = u8;

    /// Decode a persisted raw value; the offending value is returned on failure.
    fn try_from(v: u8) -> Result<Self, u8> {
        match v {
            0 => Ok(Self::Nil),
            1 => Ok(Self::Success),
            2 => Ok(Self::FailedAtBoundary),
            other => Err(other),
        }
    }
}
