// error module
mod error;
// parser module
mod parser;

// data model module
pub mod model;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the tree module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::ParseError;
pub use model::{Condition, NodeId, Operator, OrCondition, TreeNode, TreeTable};
pub use parser::{parse_file, parse_str};
