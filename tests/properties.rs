//! Randomized properties over generated trees: every emitted rule is
//! grammatically well formed, free of literal "OR", and internally
//! consistent as a conjunction of equality/inequality facts.

use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

use flatten_tree::path::Flattener;
use flatten_tree::tree::{Condition, Operator, OrCondition, TreeNode, TreeTable};

const VARIABLES: [&str; 3] = ["browser", "device_type", "os_family"];
const VALUES: [&str; 3] = ["1", "2", "3"];

fn condition_strategy() -> impl Strategy<Value = Condition> {
    (0..VARIABLES.len(), any::<bool>(), 0..VALUES.len()).prop_map(|(var, eq, val)| {
        let operator = if eq { Operator::Eq } else { Operator::Ne };
        Condition::new(VARIABLES[var], operator, VALUES[val])
    })
}

/// One internal node: a condition, optionally paired into a disjunction.
fn node_spec_strategy() -> impl Strategy<Value = (Condition, Option<Condition>)> {
    (condition_strategy(), proptest::option::of(condition_strategy()))
}

/// Lays out `specs.len()` internal nodes heap-style (children of node `i`
/// are `2i+1` and `2i+2`) and fills the remaining ids with leaves, so any
/// list length produces a complete, closed tree rooted at 0.
fn build_tree(specs: Vec<(Condition, Option<Condition>)>) -> TreeTable {
    let internal = specs.len();
    let mut nodes = TreeTable::new();
    for (i, (left, right)) in specs.into_iter().enumerate() {
        let yes = Some(2 * i + 1);
        let no = Some(2 * i + 2);
        let node = match right {
            Some(right) => TreeNode::Or {
                condition: OrCondition { left, right },
                yes,
                no,
            },
            None => TreeNode::Condition {
                condition: left,
                yes,
                no,
            },
        };
        nodes.insert(i, node);
    }
    for i in internal..(2 * internal + 1) {
        nodes.insert(i, TreeNode::Leaf { value: i as f64 + 0.5 });
    }
    nodes
}

fn tree_strategy() -> impl Strategy<Value = TreeTable> {
    proptest::collection::vec(node_spec_strategy(), 0..12).prop_map(build_tree)
}

/// Splits a rule back into its terms and leaf value, panicking on any
/// grammar violation.
fn parse_rule(rule: &str) -> (Vec<(String, bool, String)>, f64) {
    let (conjunction, value) = if let Some(value) = rule.strip_prefix(": ") {
        ("", value)
    } else {
        rule.split_once(" : ").expect("rule must contain ' : '")
    };
    let value: f64 = value.parse().expect("leaf value must be numeric");
    let mut terms = Vec::new();
    if !conjunction.is_empty() {
        for term in conjunction.split(" & ") {
            if let Some((var, val)) = term.split_once("!=") {
                terms.push((var.to_string(), false, val.to_string()));
            } else {
                let (var, val) = term.split_once('=').expect("term must contain an operator");
                terms.push((var.to_string(), true, val.to_string()));
            }
        }
    }
    (terms, value)
}

proptest! {
    #[test]
    fn rules_are_well_formed_and_consistent(nodes in tree_strategy()) {
        let rules: Vec<String> = Flattener::new(&nodes)
            .flatten(0)
            .collect::<Result<_, _>>()
            .expect("generated trees have no dangling ids");

        // Every node with both children present keeps at least one branch
        // satisfiable, so some rule always survives.
        prop_assert!(!rules.is_empty());

        for rule in &rules {
            prop_assert!(!rule.contains("OR"), "literal OR in '{}'", rule);
            let (terms, _value) = parse_rule(rule);

            let mut equalities: BTreeMap<&str, &str> = BTreeMap::new();
            let mut inequalities: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
            for (var, is_eq, val) in &terms {
                if *is_eq {
                    let previous = equalities.insert(var.as_str(), val.as_str());
                    prop_assert!(
                        previous.is_none(),
                        "two equality terms for '{}' in '{}'", var, rule
                    );
                } else {
                    let fresh = inequalities
                        .entry(var.as_str())
                        .or_default()
                        .insert(val.as_str());
                    prop_assert!(
                        fresh,
                        "duplicate inequality term for '{}' in '{}'", var, rule
                    );
                }
            }
            // A variable is rendered either as one equality or as
            // inequalities, never both; and never both requires and
            // forbids a value.
            for var in equalities.keys() {
                prop_assert!(
                    !inequalities.contains_key(*var),
                    "'{}' both required and forbidden in '{}'", var, rule
                );
            }
        }
    }

    #[test]
    fn inequality_terms_render_sorted_per_variable(nodes in tree_strategy()) {
        let rules: Vec<String> = Flattener::new(&nodes)
            .flatten(0)
            .collect::<Result<_, _>>()
            .unwrap();
        for rule in &rules {
            let (terms, _) = parse_rule(rule);
            // Consecutive inequality terms of one variable appear in
            // ascending value order.
            for pair in terms.windows(2) {
                let (ref var_a, eq_a, ref val_a) = pair[0];
                let (ref var_b, eq_b, ref val_b) = pair[1];
                if var_a == var_b && !eq_a && !eq_b {
                    prop_assert!(val_a < val_b, "unsorted inequalities in '{}'", rule);
                }
            }
        }
    }

    #[test]
    fn first_rule_streams_without_full_traversal(nodes in tree_strategy()) {
        // Pulling a single rule must succeed on its own; the rest of the
        // iterator is deliberately abandoned.
        let first = Flattener::new(&nodes).flatten(0).next();
        prop_assert!(matches!(first, Some(Ok(_))));
    }
}
