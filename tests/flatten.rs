//! End-to-end tests: parse the documented text encoding, flatten, and check
//! the emitted rules against the exact expected strings.

use flatten_tree::path::{FlattenError, Flattener};
use flatten_tree::tree::parse_str;

fn flatten_text(content: &str, root_id: usize) -> Vec<String> {
    let nodes = parse_str(content).expect("tree should parse");
    Flattener::new(&nodes)
        .flatten(root_id)
        .collect::<Result<Vec<_>, _>>()
        .expect("tree should flatten")
}

#[test]
fn single_condition_tree() {
    let rules = flatten_text(
        "0:[browser=8] yes=1,no=2\n\
         1:leaf=0.1\n\
         2:leaf=0.2\n",
        0,
    );
    assert_eq!(rules, vec!["browser=8 : 0.1", "browser!=8 : 0.2"]);
}

#[test]
fn contradictory_subtree_is_pruned() {
    let rules = flatten_text(
        "0:[x=4] yes=1,no=2\n\
         1:leaf=0.1\n\
         2:[x=4] yes=3,no=4\n\
         3:leaf=0.111\n\
         4:leaf=0.9\n",
        0,
    );
    assert_eq!(rules, vec!["x=4 : 0.1", "x!=4 : 0.9"]);
}

#[test]
fn or_condition_tree_expands_without_literal_or() {
    let rules = flatten_text(
        "0:[device_type=pc||or||browser=7] yes=1,no=2\n\
         1:leaf=0.111\n\
         2:leaf=0.222\n",
        0,
    );
    assert_eq!(
        rules,
        vec![
            "device_type=pc : 0.111",
            "browser=7 : 0.111",
            "device_type!=pc & browser!=7 : 0.222",
        ]
    );
    for rule in &rules {
        assert!(!rule.contains("OR"), "literal OR leaked into '{}'", rule);
    }
}

#[test]
fn inequality_splits_accumulate_sorted() {
    // The doubly-no path forbids "b" then "a"; the rendered terms come out
    // in ascending value order regardless of the order the tree tested
    // them.  An equality established later subsumes earlier inequalities.
    let rules = flatten_text(
        "0:[var=b] yes=1,no=2\n\
         1:leaf=0.1\n\
         2:[var=a] yes=3,no=4\n\
         3:leaf=0.2\n\
         4:leaf=0.3\n",
        0,
    );
    assert_eq!(
        rules,
        vec!["var=b : 0.1", "var=a : 0.2", "var!=a & var!=b : 0.3"]
    );
}

#[test]
fn leaf_root_emits_bare_value_rule() {
    assert_eq!(flatten_text("0:leaf=0.42\n", 0), vec![": 0.42"]);
}

#[test]
fn alternate_root_id_is_respected() {
    let rules = flatten_text(
        "0:leaf=0.1\n\
         5:[a=1] yes=6,no=7\n\
         6:leaf=0.2\n\
         7:leaf=0.3\n",
        5,
    );
    assert_eq!(rules, vec!["a=1 : 0.2", "a!=1 : 0.3"]);
}

#[test]
fn dangling_reference_is_reported_after_reachable_rules() {
    let nodes = parse_str(
        "0:[a=1] yes=1,no=9\n\
         1:leaf=0.1\n",
    )
    .unwrap();
    let mut rules = Flattener::new(&nodes).flatten(0);
    // The reachable YES leaf streams out before the malformed NO branch is
    // ever resolved.
    assert_eq!(rules.next(), Some(Ok("a=1 : 0.1".to_string())));
    assert_eq!(rules.next(), Some(Err(FlattenError::NodeNotFound(9))));
    assert_eq!(rules.next(), None);
}

#[test]
fn consumer_may_stop_after_first_rule() {
    let nodes = parse_str(
        "0:[a=1] yes=1,no=9\n\
         1:leaf=0.1\n",
    )
    .unwrap();
    let first = Flattener::new(&nodes).flatten(0).next();
    assert_eq!(first, Some(Ok("a=1 : 0.1".to_string())));
}
