use proptest::prelude::*;
use yit::document::{NodeKind, TreeNode, YamlNode};
use yit::iter::{from_node, from_nodes, NodeIterator};
use yit::predicate::{all, intersect, negate, none, union, with_kind, with_prefix, Predicate};

fn leaf() -> impl Strategy<Value = YamlNode> {
    prop_oneof![
        4 => "[a-z0-9]{0,4}".prop_map(YamlNode::scalar),
        1 => "[a-z]{1,4}".prop_map(YamlNode::alias),
    ]
}

fn tree() -> impl Strategy<Value = YamlNode> {
    leaf().prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(YamlNode::sequence),
            prop::collection::vec((inner.clone(), inner), 0..4).prop_map(YamlNode::mapping),
        ]
    })
}

fn count_nodes(node: &YamlNode) -> usize {
    1 + node.children().iter().map(count_nodes).sum::<usize>()
}

fn document() -> impl Strategy<Value = YamlNode> {
    tree().prop_map(YamlNode::document)
}

proptest! {
    #[test]
    fn prop_recurse_visits_every_node_once(doc in document()) {
        prop_assert_eq!(from_node(&doc).recurse_nodes().count(), count_nodes(&doc));
    }

    #[test]
    fn prop_recurse_starts_at_root(doc in document()) {
        let first = from_node(&doc).recurse_nodes().next();
        prop_assert!(first.is_some_and(|node| std::ptr::eq(node, &doc)));
    }

    #[test]
    fn prop_values_yields_direct_children(node in tree()) {
        let children = from_node(&node).values().to_vec();
        prop_assert_eq!(children.len(), node.children().len());
        for (got, want) in children.iter().zip(node.children()) {
            prop_assert!(std::ptr::eq(*got, want));
        }
    }

    #[test]
    fn prop_keys_and_values_split_mappings(doc in document()) {
        let maps = || from_node(&doc).recurse_nodes().filter_nodes(with_kind(NodeKind::Mapping));
        let entries: usize = maps().map(|m| m.children().len()).sum();
        prop_assert_eq!(maps().map_keys().count() + maps().map_values().count(), entries);
        prop_assert_eq!(maps().map_keys().count(), maps().map_values().count());
    }

    #[test]
    fn prop_from_nodes_to_vec_preserves_order(nodes in prop::collection::vec(leaf(), 0..16)) {
        let collected = from_nodes(&nodes).to_vec();
        prop_assert_eq!(collected.len(), nodes.len());
        for (got, want) in collected.iter().zip(&nodes) {
            prop_assert!(std::ptr::eq(*got, want));
        }
    }

    #[test]
    fn prop_filter_partitions(doc in document(), prefix in "[a-z0-9]{0,2}") {
        let total = from_node(&doc).recurse_nodes().count();
        let kept = from_node(&doc)
            .recurse_nodes()
            .filter_nodes(with_prefix(prefix.as_str()))
            .count();
        let dropped = from_node(&doc)
            .recurse_nodes()
            .filter_nodes(negate(with_prefix(prefix.as_str())))
            .count();
        prop_assert_eq!(kept + dropped, total);
    }

    #[test]
    fn prop_combinator_identities(doc in document(), prefix in "[a-z0-9]{0,2}") {
        let p: Predicate<YamlNode> = with_prefix(prefix.as_str());
        for node in from_node(&doc).recurse_nodes() {
            let expected = p.test(node);
            prop_assert_eq!(union([p.clone(), none()]).test(node), expected);
            prop_assert_eq!(intersect([p.clone(), all()]).test(node), expected);
            prop_assert_eq!(negate(negate(p.clone())).test(node), expected);
            prop_assert!(union([p.clone(), negate(p.clone())]).test(node));
            prop_assert!(!intersect([p.clone(), negate(p.clone())]).test(node));
        }
    }

    #[test]
    fn prop_any_match_is_dual_of_all_match(doc in document(), prefix in "[a-z0-9]{0,2}") {
        let p: Predicate<YamlNode> = with_prefix(prefix.as_str());
        let any = from_node(&doc).recurse_nodes().any_match(&p);
        let all_fail = from_node(&doc).recurse_nodes().all_match(&negate(p));
        prop_assert_eq!(any, !all_fail);
    }
}
