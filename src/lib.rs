//! Flattens binary categorical decision trees into an equivalent list of
//! mutually independent conjunction rules, one per reachable leaf path.

pub mod app;
pub mod path;
pub mod tree;
