use yit::document::{parse_yaml, NodeKind, TreeNode, YamlNode};
use yit::iter::{from_node, from_nodes, NodeIterator};
use yit::predicate::{all, none, with_kind, with_value, Predicate};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_any_match() {
    let doc = YamlNode::new(NodeKind::Document);
    assert!(from_node(&doc).any_match(&all()));
    assert!(!from_node(&doc).any_match(&none()));
}

#[test]
fn test_any_match_on_empty_iterator() {
    assert!(!std::iter::empty::<&YamlNode>().any_match(&all()));
}

#[test]
fn test_all_match() {
    let same = [YamlNode::scalar("a"), YamlNode::scalar("a")];
    let mixed = [YamlNode::scalar("a"), YamlNode::scalar("b")];
    assert!(from_nodes(&same).all_match(&with_value("a")));
    assert!(!from_nodes(&mixed).all_match(&with_value("a")));
}

#[test]
fn test_all_match_on_empty_iterator() {
    assert!(std::iter::empty::<&YamlNode>().all_match(&none()));
}

#[test]
fn test_to_vec_keeps_order_and_identity() {
    let nodes = [
        YamlNode::scalar("a"),
        YamlNode::scalar("b"),
        YamlNode::scalar("c"),
    ];
    let result = from_nodes(&nodes).to_vec();
    assert_eq!(result.len(), nodes.len());
    for (got, want) in result.iter().zip(&nodes) {
        assert!(std::ptr::eq(*got, want));
    }
}

#[test]
fn test_any_match_short_circuits_the_pipeline() {
    let doc = parse_yaml("- a\n- b\n- c\n").unwrap();
    let pulled = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pulled);
    let counting = Predicate::new(move |_: &YamlNode| {
        counter.set(counter.get() + 1);
        true
    });

    let mut it = from_node(&doc)
        .recurse_nodes()
        .filter_nodes(counting)
        .filter_nodes(with_kind(NodeKind::Scalar));
    assert!(it.any_match(&with_value("a")));
    // document, sequence, then "a"
    assert_eq!(pulled.get(), 3);

    let rest: Vec<&str> = it.to_vec().into_iter().map(|n| n.value()).collect();
    assert_eq!(rest, ["b", "c"]);
}

#[test]
fn test_all_match_over_parsed_mapping_keys() {
    let doc = parse_yaml("x-one: 1\nx-two: 2\n").unwrap();
    let keys = || {
        from_node(&doc)
            .recurse_nodes()
            .filter_nodes(with_kind(NodeKind::Mapping))
            .map_keys()
    };
    assert!(keys().all_match(&yit::predicate::with_prefix("x-")));
    assert!(!keys().all_match(&with_value("x-one")));
}
