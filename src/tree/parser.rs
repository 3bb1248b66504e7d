use std::fs;
use std::path::Path;

use super::error::ParseError;
use super::model::{Condition, NodeId, Operator, OrCondition, TreeNode, TreeTable};

//─────────────────────────────────────────────────────────────────────────────
// Text encoding: one node per line, `<id>:<body>`.  A leaf body is
// `leaf=<number>`; a decision body is `[<condition>] yes=<id>,no=<id>`,
// where `<condition>` is `var=value`, `var!=value`, or two such conditions
// joined by the literal separator `||or||`.  Blank lines are skipped.
//─────────────────────────────────────────────────────────────────────────────

const OR_SEPARATOR: &str = "||or||";

/// Reads a tree file and parses it into a node table.
pub fn parse_file(path: &Path) -> Result<TreeTable, ParseError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ParseError::ReadFile(path.display().to_string(), e))?;
    parse_str(&content)
}

/// Parses the text encoding of a tree into a table mapping node ids to nodes.
pub fn parse_str(content: &str) -> Result<TreeTable, ParseError> {
    let mut nodes = TreeTable::new();
    for (line_no, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let (id_str, body) = line
            .split_once(':')
            .ok_or_else(|| ParseError::MissingSeparator(line_no + 1, line.to_string()))?;
        let node_id: NodeId = id_str
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidNodeId(line_no + 1, id_str.to_string()))?;
        let node = parse_body(node_id, body.trim())?;
        nodes.insert(node_id, node);
    }
    Ok(nodes)
}

/// Parses a single node body, dispatching on the leaf/decision shape.
fn parse_body(node_id: NodeId, body: &str) -> Result<TreeNode, ParseError> {
    if let Some(value_str) = body.strip_prefix("leaf=") {
        let value: f64 = value_str
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidLeafValue(node_id, value_str.to_string()))?;
        return Ok(TreeNode::Leaf { value });
    }

    // Expecting a decision line like: [condition] yes=...,no=...
    let condition_part = body
        .strip_prefix('[')
        .and_then(|rest| rest.split_once(']'))
        .ok_or_else(|| ParseError::UnexpectedFormat(node_id, body.to_string()))?;
    let (condition_str, branches) = condition_part;

    let (yes_str, no_str) = branches
        .trim()
        .split_once(',')
        .ok_or_else(|| ParseError::UnexpectedFormat(node_id, body.to_string()))?;
    let yes = parse_branch(node_id, yes_str, "yes=")?;
    let no = parse_branch(node_id, no_str, "no=")?;

    if let Some((left_str, right_str)) = condition_str.split_once(OR_SEPARATOR) {
        let condition = OrCondition {
            left: parse_condition(left_str.trim())?,
            right: parse_condition(right_str.trim())?,
        };
        Ok(TreeNode::Or {
            condition,
            yes: Some(yes),
            no: Some(no),
        })
    } else {
        let condition = parse_condition(condition_str.trim())?;
        Ok(TreeNode::Condition {
            condition,
            yes: Some(yes),
            no: Some(no),
        })
    }
}

/// Parses one `yes=<id>` / `no=<id>` branch reference.
fn parse_branch(node_id: NodeId, spec: &str, prefix: &str) -> Result<NodeId, ParseError> {
    spec.trim()
        .strip_prefix(prefix)
        .and_then(|id| id.trim().parse().ok())
        .ok_or_else(|| ParseError::InvalidBranch(node_id, spec.to_string()))
}

/// Parses a string such as `browser=8` or `os_family!=5` into a Condition.
/// `!=` must be checked first: a `!=` condition also contains `=`.
fn parse_condition(cond_str: &str) -> Result<Condition, ParseError> {
    if let Some((variable, value)) = cond_str.split_once("!=") {
        Ok(Condition::new(variable.trim(), Operator::Ne, value.trim()))
    } else if let Some((variable, value)) = cond_str.split_once('=') {
        Ok(Condition::new(variable.trim(), Operator::Eq, value.trim()))
    } else {
        Err(ParseError::MalformedCondition(cond_str.to_string()))
    }
}
