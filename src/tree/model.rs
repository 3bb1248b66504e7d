// model.rs
// ──────────────────────────────────────────────────────────────────────────────
// Data model for a *binary* categorical decision tree.  Every internal node
// tests either a single equality/inequality condition or a disjunction of
// exactly two such conditions; every leaf carries a numeric value.  Nodes
// reference their children by id through a tree-wide lookup table, so the
// table — not the nodes — owns the tree structure.
// ──────────────────────────────────────────────────────────────────────────────

use std::collections::HashMap;
use std::fmt;

/// Represents a unique identifier for a node in the decision tree.
pub type NodeId = usize;

/// Lookup table mapping node ids to nodes; the tree is rooted at a
/// caller-designated id (0 by convention).
pub type TreeTable = HashMap<NodeId, TreeNode>;

/// Comparison operator of an atomic condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    /// `variable = value`
    Eq,
    /// `variable != value`
    Ne,
}

impl Operator {
    /// Returns the logical negation: taking the NO branch of a node testing
    /// `var = v` accumulates `var != v`, and vice versa.
    pub fn negated(self) -> Self {
        match self {
            Operator::Eq => Operator::Ne,
            Operator::Ne => Operator::Eq,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Eq => f.write_str("="),
            Operator::Ne => f.write_str("!="),
        }
    }
}

/// A single atomic test on a categorical variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Condition {
    pub variable: String,
    pub operator: Operator,
    pub value: String,
}

impl Condition {
    pub fn new(
        variable: impl Into<String>,
        operator: Operator,
        value: impl Into<String>,
    ) -> Self {
        Condition {
            variable: variable.into(),
            operator,
            value: value.into(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.variable, self.operator, self.value)
    }
}

/// A disjunction of exactly two atomic conditions, used as the branching
/// test of an OR node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrCondition {
    pub left: Condition,
    pub right: Condition,
}

/// Represents a node in the decision tree.  The three variants are mutually
/// exclusive by construction; the parser rejects input that would claim more
/// than one role for a node.
#[derive(Clone, Debug, PartialEq)]
pub enum TreeNode {
    /// Terminal node holding the value emitted for every path reaching it.
    Leaf { value: f64 },
    /// Decision node testing one atomic condition.
    Condition {
        condition: Condition,
        yes: Option<NodeId>,
        no: Option<NodeId>,
    },
    /// Decision node testing a two-way disjunction.
    Or {
        condition: OrCondition,
        yes: Option<NodeId>,
        no: Option<NodeId>,
    },
}
