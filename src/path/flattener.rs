use crate::tree::{Condition, NodeId, TreeNode, TreeTable};

use super::constraint::{ConstraintStore, Extension};
use super::error::FlattenError;

//─────────────────────────────────────────────────────────────────────────────
// Depth-first flattening of a decision tree into independent rules.  The
// traversal is an explicit-stack pre-order walk that suspends between
// emitted rules, so the consumer can stop pulling at any point without
// running the rest of the tree.
//─────────────────────────────────────────────────────────────────────────────

/// `Flattener` turns a decision tree into a lazy sequence of rule strings,
/// one per reachable leaf path.  Each rule is a conjunction of the
/// constraints accumulated along the path, mapped to the leaf value:
///
/// ```text
/// condition1 & condition2 & ... : leaf_value
/// ```
///
/// A path with zero constraints yields simply `: leaf_value`.
pub struct Flattener<'a> {
    nodes: &'a TreeTable,
}

impl<'a> Flattener<'a> {
    pub fn new(nodes: &'a TreeTable) -> Self {
        Flattener { nodes }
    }

    /// Returns the lazy rule sequence rooted at `root_id`.
    pub fn flatten(&self, root_id: NodeId) -> Rules<'a> {
        Rules {
            nodes: self.nodes,
            stack: vec![Frame {
                node_id: root_id,
                store: ConstraintStore::new(),
                extra_terms: Vec::new(),
            }],
        }
    }
}

/// Suspended traversal state for one pending subtree: the node to visit,
/// the constraints accumulated on the way there, and any pre-rendered terms
/// to append after the store-derived ones at a leaf.
struct Frame {
    node_id: NodeId,
    store: ConstraintStore,
    extra_terms: Vec<String>,
}

/// Iterator over the rules of one tree.  Yields rules in a fixed pre-order:
/// the whole YES subtree of a node precedes its NO subtree, and for an OR
/// node the left-disjunct expansion precedes the right-disjunct one.
///
/// A child id missing from the table yields one `Err` and ends the
/// iteration; contradictory branches are pruned silently and yield nothing.
pub struct Rules<'a> {
    nodes: &'a TreeTable,
    stack: Vec<Frame>,
}

impl Rules<'_> {
    /// Schedules a branch unless extending the store with `condition`
    /// (negated or not) proves the branch impossible.
    fn push_branch(
        &mut self,
        branch: Option<NodeId>,
        store: &ConstraintStore,
        condition: &Condition,
        negate: bool,
        extra_terms: &[String],
    ) {
        let Some(node_id) = branch else {
            return;
        };
        let operator = if negate {
            condition.operator.negated()
        } else {
            condition.operator
        };
        if let Extension::Consistent(extended) =
            store.assume(&condition.variable, operator, &condition.value)
        {
            self.stack.push(Frame {
                node_id,
                store: extended,
                extra_terms: extra_terms.to_vec(),
            });
        }
    }

    /// Renders one emitted rule from a leaf's accumulated state.
    fn render_rule(store: &ConstraintStore, extra_terms: &[String], value: f64) -> String {
        let mut terms = store.render();
        terms.extend_from_slice(extra_terms);
        if terms.is_empty() {
            format!(": {}", value)
        } else {
            format!("{} : {}", terms.join(" & "), value)
        }
    }
}

impl Iterator for Rules<'_> {
    type Item = Result<String, FlattenError>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            let Frame {
                node_id,
                store,
                extra_terms,
            } = frame;
            let Some(node) = self.nodes.get(&node_id) else {
                // Malformed table: report once and abandon the traversal.
                self.stack.clear();
                return Some(Err(FlattenError::NodeNotFound(node_id)));
            };
            match node {
                TreeNode::Leaf { value } => {
                    return Some(Ok(Self::render_rule(&store, &extra_terms, *value)));
                }
                TreeNode::Condition { condition, yes, no } => {
                    // Both branches extend the same pre-branch store; NO is
                    // pushed first so the YES subtree is walked first.
                    self.push_branch(*no, &store, condition, true, &extra_terms);
                    self.push_branch(*yes, &store, condition, false, &extra_terms);
                }
                TreeNode::Or { condition, yes, no } => {
                    // NO branch: the disjunction is false, so both disjuncts
                    // are false.  The second negation extends the first; a
                    // contradiction at either step kills the whole branch.
                    if let Some(no_id) = *no {
                        let negated_left = store.assume(
                            &condition.left.variable,
                            condition.left.operator.negated(),
                            &condition.left.value,
                        );
                        if let Extension::Consistent(left_store) = negated_left {
                            self.push_branch(
                                Some(no_id),
                                &left_store,
                                &condition.right,
                                true,
                                &extra_terms,
                            );
                        }
                    }
                    // YES branch: the truth of `left OR right` fixes neither
                    // disjunct, so each consistent disjunct spawns its own
                    // full sub-traversal attributing a single cause.  No
                    // literal OR ever reaches the output.  Right is pushed
                    // first so the left-disjunct subtree is walked first.
                    self.push_branch(*yes, &store, &condition.right, false, &extra_terms);
                    self.push_branch(*yes, &store, &condition.left, false, &extra_terms);
                }
            }
        }
        None
    }
}
