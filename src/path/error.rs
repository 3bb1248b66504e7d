use crate::tree::NodeId;
use thiserror::Error;

// Error type for path flattening operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlattenError {
    /// Error when a referenced child id is absent from the node table.
    /// The table is trusted to be closed over ids; hitting this means the
    /// input was malformed, and the traversal stops rather than recover.
    #[error("Node id {0} referenced but not present in the tree table")]
    NodeNotFound(NodeId),
}
