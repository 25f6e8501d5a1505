//! Benchmark profiles for the Turmite simulation engine.
//!
//! Provides pre-built [`SimulationConfig`] profiles:
//!
//! - [`langton_profile`]: the classic two-shade left/right ant
//! - [`shade_cycle_profile`]: an n-shade cycle with alternating turns

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use turmite_core::{Orientation, Rule, RuleTable, TurnDirection};
use turmite_engine::SimulationConfig;

/// The classic Langton's Ant on a `size × size` grid, agent centered,
/// facing north.
///
/// Rule table: shade 0 → 1 turning right, shade 1 → 0 turning left.
pub fn langton_profile(size: u16) -> SimulationConfig {
    let rules = RuleTable::from_pairs([
        (
            0,
            Rule {
                replacement_shade: 1,
                turn: TurnDirection::Right,
            },
        ),
        (
            1,
            Rule {
                replacement_shade: 0,
                turn: TurnDirection::Left,
            },
        ),
    ]);
    centered(size, rules)
}

/// An `n`-shade cycle (`0 → 1 → … → n−1 → 0`) with turns alternating
/// left/right by shade parity, on a `size × size` grid.
///
/// Exercises the full rule-table lookup range rather than just two slots.
pub fn shade_cycle_profile(size: u16, n: u8) -> SimulationConfig {
    assert!(n >= 2, "a closed chain needs at least two shades");
    let rules = RuleTable::from_pairs((0..n).map(|shade| {
        let turn = if shade % 2 == 0 {
            TurnDirection::Right
        } else {
            TurnDirection::Left
        };
        (
            shade,
            Rule {
                replacement_shade: (shade + 1) % n,
                turn,
            },
        )
    }));
    centered(size, rules)
}

fn centered(size: u16, rules: RuleTable) -> SimulationConfig {
    SimulationConfig {
        name: "bench".to_string(),
        iterations_completed: 0,
        grid_width: size,
        grid_height: size,
        initial_shade: 0,
        ant_col: size / 2,
        ant_row: size / 2,
        ant_orientation: Orientation::North,
        rules,
        singular_snapshots: vec![],
        periodic_snapshots: vec![],
    }
}
