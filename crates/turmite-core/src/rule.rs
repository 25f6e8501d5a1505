//! The shade-indexed rule table and its closed-chain validation.

use crate::orientation::TurnDirection;
use std::error::Error;
use std::fmt;

/// Number of slots in a [`RuleTable`] — one per possible cell shade.
pub const SHADE_COUNT: usize = 256;

/// The transition applied when the agent visits a cell of a given shade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    /// Shade written to the cell when this rule fires.
    pub replacement_shade: u8,
    /// How the agent rotates before moving on.
    pub turn: TurnDirection,
}

/// Validation failures for a [`RuleTable`].
///
/// At most one failure is reported per table: a table with too few rules
/// skips the chain analysis entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleTableError {
    /// Fewer than two slots are defined.
    TooFewDefined {
        /// Number of slots that were defined.
        defined: usize,
    },
    /// The defined rules do not form closed cycles over the shade space.
    BrokenChain {
        /// Number of touched shades whose touch count is not exactly 2.
        open_shades: usize,
    },
}

impl fmt::Display for RuleTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewDefined { defined } => {
                write!(f, "fewer than 2 rules defined (got {defined})")
            }
            Self::BrokenChain { open_shades } => {
                write!(
                    f,
                    "rules don't form a closed chain ({open_shades} open shades)"
                )
            }
        }
    }
}

impl Error for RuleTableError {}

/// A fixed table of 256 rule slots indexed by cell shade.
///
/// Slots are `Option<Rule>`: `None` means the shade is not configured and
/// must never be reached by a running simulation. [`validate`](Self::validate)
/// proves that at construction time; the step function does not re-check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable {
    slots: [Option<Rule>; SHADE_COUNT],
}

impl RuleTable {
    /// Create a table with every slot undefined.
    pub fn empty() -> Self {
        Self {
            slots: [None; SHADE_COUNT],
        }
    }

    /// Build a table from `(shade, rule)` pairs. Later pairs overwrite
    /// earlier ones for the same shade.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u8, Rule)>) -> Self {
        let mut table = Self::empty();
        for (shade, rule) in pairs {
            table.set(shade, rule);
        }
        table
    }

    /// Define the rule for a shade.
    pub fn set(&mut self, shade: u8, rule: Rule) {
        self.slots[shade as usize] = Some(rule);
    }

    /// Look up the rule for a shade, or `None` if the slot is undefined.
    pub fn get(&self, shade: u8) -> Option<Rule> {
        self.slots[shade as usize]
    }

    /// Number of defined slots.
    pub fn defined_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check the closed-chain invariant.
    ///
    /// Each defined rule touches two shades: its own index and its
    /// replacement shade. A rule whose replacement equals its own index
    /// touches that shade twice. The table is valid when at least two
    /// shades are touched and every touched shade is touched exactly
    /// twice — i.e. the defined rules decompose into closed cycles, so a
    /// simulation that starts on a defined shade can only ever reach
    /// defined shades.
    pub fn validate(&self) -> Result<(), RuleTableError> {
        let defined = self.defined_count();
        if defined < 2 {
            return Err(RuleTableError::TooFewDefined { defined });
        }

        let mut touches = [0u32; SHADE_COUNT];
        for (shade, slot) in self.slots.iter().enumerate() {
            if let Some(rule) = slot {
                touches[shade] += 1;
                touches[rule.replacement_shade as usize] += 1;
            }
        }

        let touched = touches.iter().filter(|&&t| t > 0).count();
        let open_shades = touches.iter().filter(|&&t| t > 0 && t != 2).count();
        if touched < 2 || open_shades != 0 {
            return Err(RuleTableError::BrokenChain { open_shades });
        }
        Ok(())
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rule(replacement_shade: u8, turn: TurnDirection) -> Rule {
        Rule {
            replacement_shade,
            turn,
        }
    }

    /// The classic two-shade Langton table: 0 → 1 (right), 1 → 0 (left).
    fn langton_table() -> RuleTable {
        RuleTable::from_pairs([
            (0, rule(1, TurnDirection::Right)),
            (1, rule(0, TurnDirection::Left)),
        ])
    }

    #[test]
    fn empty_table_has_too_few_rules() {
        assert_eq!(
            RuleTable::empty().validate(),
            Err(RuleTableError::TooFewDefined { defined: 0 })
        );
    }

    #[test]
    fn single_rule_has_too_few_rules() {
        let table = RuleTable::from_pairs([(0, rule(0, TurnDirection::Right))]);
        assert_eq!(
            table.validate(),
            Err(RuleTableError::TooFewDefined { defined: 1 })
        );
    }

    #[test]
    fn langton_pair_is_a_closed_chain() {
        assert_eq!(langton_table().validate(), Ok(()));
    }

    #[test]
    fn two_self_loops_are_closed_chains() {
        // Each rule touches its own shade twice: 2 touched shades, all at 2.
        let table = RuleTable::from_pairs([
            (3, rule(3, TurnDirection::Left)),
            (7, rule(7, TurnDirection::Right)),
        ]);
        assert_eq!(table.validate(), Ok(()));
    }

    #[test]
    fn dangling_replacement_breaks_the_chain() {
        // 0 → 1, 1 → 2, but shade 2 has no rule: shades 0 and 2 are
        // touched once each.
        let table = RuleTable::from_pairs([
            (0, rule(1, TurnDirection::Right)),
            (1, rule(2, TurnDirection::Left)),
        ]);
        assert_eq!(
            table.validate(),
            Err(RuleTableError::BrokenChain { open_shades: 2 })
        );
    }

    #[test]
    fn converging_replacements_break_the_chain() {
        // Both 0 and 1 replace with 2: shade 2 is touched three times.
        let table = RuleTable::from_pairs([
            (0, rule(2, TurnDirection::Right)),
            (1, rule(2, TurnDirection::Left)),
            (2, rule(0, TurnDirection::Straight)),
        ]);
        assert!(matches!(
            table.validate(),
            Err(RuleTableError::BrokenChain { .. })
        ));
    }

    #[test]
    fn two_disjoint_cycles_are_valid() {
        let table = RuleTable::from_pairs([
            (0, rule(1, TurnDirection::Right)),
            (1, rule(0, TurnDirection::Left)),
            (10, rule(20, TurnDirection::Straight)),
            (20, rule(10, TurnDirection::Right)),
        ]);
        assert_eq!(table.validate(), Ok(()));
    }

    #[test]
    fn set_overwrites_previous_rule() {
        let mut table = langton_table();
        table.set(0, rule(0, TurnDirection::Straight));
        assert_eq!(table.get(0), Some(rule(0, TurnDirection::Straight)));
    }

    /// Distinct shades arranged into one cycle of length 2..=16.
    fn arb_cycle() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::hash_set(any::<u8>(), 2..=16)
            .prop_map(|set| set.into_iter().collect::<Vec<u8>>())
    }

    proptest! {
        /// Any permutation cycle over distinct shades validates; turn
        /// directions play no part in the chain analysis.
        #[test]
        fn permutation_cycles_validate(shades in arb_cycle(), turn_seed in any::<u8>()) {
            let n = shades.len();
            let turns = [
                TurnDirection::Left,
                TurnDirection::Straight,
                TurnDirection::Right,
            ];
            let pairs: Vec<(u8, Rule)> = (0..n)
                .map(|i| {
                    (
                        shades[i],
                        rule(
                            shades[(i + 1) % n],
                            turns[(i + turn_seed as usize) % turns.len()],
                        ),
                    )
                })
                .collect();
            prop_assert_eq!(RuleTable::from_pairs(pairs).validate(), Ok(()));
        }

        /// Removing one link from a cycle of length >= 3 always breaks it.
        #[test]
        fn broken_cycles_fail(shades in arb_cycle()) {
            prop_assume!(shades.len() >= 3);
            let n = shades.len();
            let pairs: Vec<(u8, Rule)> = (0..n - 1)
                .map(|i| {
                    (
                        shades[i],
                        rule(shades[(i + 1) % n], TurnDirection::Left),
                    )
                })
                .collect();
            prop_assert!(
                matches!(
                    RuleTable::from_pairs(pairs).validate(),
                    Err(RuleTableError::BrokenChain { .. })
                ),
                "expected Err(RuleTableError::BrokenChain)"
            );
        }
    }
}
