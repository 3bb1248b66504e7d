use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for decision-tree parsing operations.
/// Any grammar violation in the input text is fatal to the whole parse;
/// the parser never attempts recovery or partial output.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Error when reading the input file.
    #[error("Failed to read tree file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when a line lacks the `<id>:<body>` separator.
    #[error("Line {0}: missing ':' separator in '{1}'")]
    MissingSeparator(usize, String),

    /// Error when the node id is not a valid integer.
    #[error("Line {0}: invalid node id '{1}'")]
    InvalidNodeId(usize, String),

    /// Error when a leaf body carries a non-numeric value.
    #[error("Node {0}: invalid leaf value '{1}'")]
    InvalidLeafValue(usize, String),

    /// Error when a decision body does not match `[cond] yes=<id>,no=<id>`.
    #[error("Node {0}: unexpected format '{1}'")]
    UnexpectedFormat(usize, String),

    /// Error when a branch reference is not a valid integer.
    #[error("Node {0}: invalid branch reference '{1}'")]
    InvalidBranch(usize, String),

    /// Error when a condition is neither `var=value` nor `var!=value`.
    #[error("Unexpected condition format: '{0}'")]
    MalformedCondition(String),
}
