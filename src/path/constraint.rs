use std::collections::BTreeSet;

use crate::tree::Operator;

//─────────────────────────────────────────────────────────────────────────────
// Per-path constraint accumulator.  One store exists per DFS path; every
// branching decision derives an independent copy, so sibling branches never
// observe each other's additions.
//─────────────────────────────────────────────────────────────────────────────

/// Accumulated knowledge about one variable along a path: an optional
/// required-equals value and a set of forbidden values.  The two never
/// overlap in a store handed back to a caller; the overlapping case is
/// reported as `Extension::Contradiction` instead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct VarConstraint {
    equals: Option<String>,
    forbidden: BTreeSet<String>,
}

/// Outcome of extending a store with one new fact.  Contradiction is not an
/// error: it marks the owning branch as logically impossible, and the caller
/// prunes it from the traversal.
#[derive(Debug, Clone)]
pub enum Extension {
    Consistent(ConstraintStore),
    Contradiction,
}

/// Insertion-ordered mapping from variable name to its accumulated
/// constraint.  A variable absent from the store is unconstrained.
///
/// Entries are kept in the order each variable was first constrained; that
/// order is observable through `render` and part of the output contract.
/// Stores are small (one entry per distinct variable on a path), so a
/// linear-scan vector beats a hash map here and preserves order for free.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstraintStore {
    entries: Vec<(String, VarConstraint)>,
}

impl ConstraintStore {
    /// Creates an empty store, as used at the root of a traversal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new store extended with `variable <operator> value`, or
    /// `Contradiction` if the fact is inconsistent with what the store
    /// already holds.  `self` is never mutated; sibling DFS branches keep
    /// extending the same parent store independently.
    pub fn assume(&self, variable: &str, operator: Operator, value: &str) -> Extension {
        let mut extended = self.clone();
        match extended
            .entries
            .iter_mut()
            .find(|(name, _)| name == variable)
        {
            Some((_, constraint)) => match (operator, constraint.equals.as_deref()) {
                (Operator::Eq, Some(required)) => {
                    // Conflicting equality requirements; identical ones are a no-op.
                    if required != value {
                        return Extension::Contradiction;
                    }
                }
                (Operator::Eq, None) => {
                    if constraint.forbidden.contains(value) {
                        // Cannot equal a value the path already excluded.
                        return Extension::Contradiction;
                    }
                    constraint.equals = Some(value.to_string());
                }
                (Operator::Ne, Some(required)) => {
                    // Forbidding the required value is impossible; forbidding
                    // any other value is redundant and leaves the store as is.
                    if required == value {
                        return Extension::Contradiction;
                    }
                }
                (Operator::Ne, None) => {
                    constraint.forbidden.insert(value.to_string());
                }
            },
            None => {
                let constraint = match operator {
                    Operator::Eq => VarConstraint {
                        equals: Some(value.to_string()),
                        forbidden: BTreeSet::new(),
                    },
                    Operator::Ne => VarConstraint {
                        equals: None,
                        forbidden: BTreeSet::from([value.to_string()]),
                    },
                };
                extended.entries.push((variable.to_string(), constraint));
            }
        }
        Extension::Consistent(extended)
    }

    /// Renders the store into constraint terms: variables in the order they
    /// were first constrained; one `var=value` per equality, otherwise one
    /// `var!=v` per forbidden value in ascending order.
    pub fn render(&self) -> Vec<String> {
        let mut terms = Vec::new();
        for (variable, constraint) in &self.entries {
            if let Some(required) = &constraint.equals {
                terms.push(format!("{}={}", variable, required));
            } else {
                for forbidden in &constraint.forbidden {
                    terms.push(format!("{}!={}", variable, forbidden));
                }
            }
        }
        terms
    }
}
