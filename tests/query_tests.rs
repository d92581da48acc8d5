use yit::document::{parse_yaml_documents, NodeKind, TreeNode};
use yit::query::{Query, Select};

const MANIFEST: &str = "\
apiVersion: apps/v1
kind: Deployment
metadata:
  name: web
spec:
  replicas: 3
  template:
    spec:
      containers:
        - name: app
          image: example/app:1.4
          env:
            - name: LOG_LEVEL
              value: debug
        - name: sidecar
          image: example/proxy:2.0
---
apiVersion: v1
kind: Service
metadata:
  name: web-svc
";

fn values(query: &Query) -> Vec<String> {
    let documents = parse_yaml_documents(MANIFEST).unwrap();
    query
        .run(&documents)
        .into_iter()
        .map(|n| n.value().to_string())
        .collect()
}

#[test]
fn test_field_across_documents() {
    let query = Query {
        select: Select::Field("kind".to_string()),
        ..Query::default()
    };
    assert_eq!(values(&query), ["Deployment", "Service"]);
}

#[test]
fn test_images_by_key_filter() {
    let query = Query {
        kind: Some(NodeKind::Mapping),
        key: Some("image".to_string()),
        select: Select::Field("name".to_string()),
        ..Query::default()
    };
    assert_eq!(values(&query), ["app", "sidecar"]);
}

#[test]
fn test_suffix_filter() {
    let query = Query {
        kind: Some(NodeKind::Scalar),
        suffix: Some("-svc".to_string()),
        ..Query::default()
    };
    assert_eq!(values(&query), ["web-svc"]);
}

#[test]
fn test_shallow_keys() {
    let query = Query {
        roots_only: true,
        select: Select::Keys,
        ..Query::default()
    };
    assert_eq!(
        values(&query),
        ["apiVersion", "kind", "metadata", "spec", "apiVersion", "kind", "metadata"]
    );
}

#[test]
fn test_value_filter_with_limit() {
    let query = Query {
        value: Some("name".to_string()),
        limit: Some(2),
        ..Query::default()
    };
    assert_eq!(values(&query), ["name", "name"]);
}

#[test]
fn test_predicate_is_reusable() {
    let documents = parse_yaml_documents(MANIFEST).unwrap();
    let query = Query {
        tag: Some("!!int".to_string()),
        ..Query::default()
    };
    let results = query.run(&documents);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].value(), "3");
    assert!(query.predicate().test(results[0]));
}

#[test]
fn test_no_match() {
    let documents = parse_yaml_documents(MANIFEST).unwrap();
    let query = Query {
        key: Some("missing".to_string()),
        ..Query::default()
    };
    assert!(query.run(&documents).is_empty());
    assert!(!query.matches_any(&documents));
}
