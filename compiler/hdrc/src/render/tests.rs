#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use hdr_ir::Value;
use pretty_assertions::assert_eq;

fn axis() -> Enum {
    let mut axis = Enum::new("Axis");
    axis.insert("X", 0).unwrap();
    axis.insert("Y", 1).unwrap();
    axis
}

fn sample() -> Scope {
    let mut scope = Scope::new();
    scope.set("LIMIT", Value::Int(10)).unwrap();
    scope.set("geo::Axis", axis()).unwrap();
    scope
        .set("geo::Point", Record::new("geo::Point", "x, y"))
        .unwrap();
    scope.set("geo::Point::DIMENSIONS", Value::Int(2)).unwrap();
    scope.set("geo::NAME", Value::from("plane")).unwrap();
    scope
}

// Tree

#[test]
fn test_tree_empty_scope() {
    assert_eq!(tree_string(&Scope::new()), "(global scope)\n");
}

#[test]
fn test_tree_layout() {
    let expected = "\
(global scope)
+--- LIMIT = 10
`--- geo
     +--- Axis (enum)
     |    +--- X = 0
     |    `--- Y = 1
     +--- Point (record x, y)
     |    `--- DIMENSIONS = 2
     `--- NAME = \"plane\"
";
    assert_eq!(tree_string(&sample()), expected);
}

#[test]
fn test_tree_skips_empty_scopes() {
    let mut scope = Scope::new();
    scope.set("a", Value::Int(1)).unwrap();
    scope.set("empty", Scope::new()).unwrap();

    // `a` is the last visible row.
    assert_eq!(tree_string(&scope), "(global scope)\n`--- a = 1\n");
}

// Pretty

#[test]
fn test_pretty_layout() {
    let expected = "\
LIMIT = 10
geo {
    enum Axis {
        X = 0
        Y = 1
    }
    record Point(x, y) {
        DIMENSIONS = 2
    }
    NAME = \"plane\"
}
";
    assert_eq!(pretty_string(&sample(), RenderConfig::default()), expected);
}

#[test]
fn test_pretty_indent_width() {
    let mut scope = Scope::new();
    scope.set("ns::X", Value::Int(1)).unwrap();
    scope.set("ns::P", Record::new("ns::P", "a")).unwrap();

    let config = RenderConfig::default().with_indent_width(2);
    assert_eq!(
        pretty_string(&scope, config),
        "ns {\n  X = 1\n  record P(a)\n}\n"
    );
}

#[test]
fn test_pretty_skips_empty_scopes() {
    let mut scope = Scope::new();
    scope.set("empty", Scope::new()).unwrap();
    assert_eq!(pretty_string(&scope, RenderConfig::default()), "");
}

// Enum listing

#[test]
fn test_enums_full_names() {
    let mut scope = sample();
    scope.set("Top", Enum::new("Top")).unwrap();
    scope.set("geo::Point::Kind", Enum::new("Kind")).unwrap();

    let names: Vec<String> = enums(&scope).into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["geo::Axis", "geo::Point::Kind", "Top"]);
}

#[test]
fn test_enums_yields_enum_contents() {
    let scope = sample();
    let found = enums(&scope);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].1.value_of("Y"), Some(1));
}
