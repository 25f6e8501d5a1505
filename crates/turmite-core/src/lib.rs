//! Core types for the Turmite simulation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary of a generalized Langton's Ant: step
//! outcomes, agent orientation, turn directions, and the 256-slot rule
//! table with its closed-chain validation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod orientation;
pub mod outcome;
pub mod rule;

pub use orientation::{Orientation, TurnDirection};
pub use outcome::StepResult;
pub use rule::{Rule, RuleTable, RuleTableError};
