// error module
mod error;
// flattener module
mod flattener;

// constraint module
pub mod constraint;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the path module.
//─────────────────────────────────────────────────────────────────────────────
pub use constraint::{ConstraintStore, Extension};
pub use error::FlattenError;
pub use flattener::{Flattener, Rules};
