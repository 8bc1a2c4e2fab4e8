#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_set_then_get_nested() {
    let mut scope = Scope::new();
    scope.set("a::b::c", Value::Int(5)).unwrap();

    assert_eq!(scope.get_value("a::b::c"), Some(&Value::Int(5)));
    assert!(scope.contains("a::b"));
    assert!(scope.get_scope("a::b").is_some());
    assert_eq!(scope.get_scope("a").map(Scope::len), Some(1));
}

#[test]
fn test_get_missing_reports_name() {
    let scope = Scope::new();
    assert_eq!(
        scope.get("x::y"),
        Err(ScopeError::NotFound {
            name: "x::y".to_owned()
        })
    );
    assert!(!scope.contains("x"));
}

#[test]
fn test_leading_separator_and_anonymous_namespace() {
    let mut scope = Scope::new();
    scope
        .set("::ns::(anonymous namespace)::LIMIT", Value::Int(3))
        .unwrap();

    assert_eq!(scope.get_value("ns::LIMIT"), Some(&Value::Int(3)));
    assert_eq!(scope.get_value("::ns::LIMIT"), Some(&Value::Int(3)));
    assert_eq!(scope.names().collect::<Vec<_>>(), vec!["ns"]);
}

#[test]
fn test_template_arguments_stay_in_one_component() {
    let mut scope = Scope::new();
    scope
        .set("Box<std::string>::size", Value::Int(24))
        .unwrap();

    assert_eq!(scope.names().collect::<Vec<_>>(), vec!["Box<std::string>"]);
    assert_eq!(scope.get_value("Box<std::string>::size"), Some(&Value::Int(24)));
}

#[test]
fn test_insertion_order_preserved() {
    let mut scope = Scope::new();
    for name in ["zeta", "alpha", "mid"] {
        scope.set(name, Value::Bool(true)).unwrap();
    }
    scope.set("alpha", Value::Bool(false)).unwrap();

    assert_eq!(scope.names().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    assert_eq!(scope.get_value("alpha"), Some(&Value::Bool(false)));
}

#[test]
fn test_enumerator_through_enum() {
    let mut scope = Scope::new();
    scope.set("foo::Color", Enum::new("Color")).unwrap();
    scope.set("foo::Color::RED", Value::Int(0)).unwrap();

    let color = scope.get_enum("foo::Color").unwrap();
    assert_eq!(color.value_of("RED"), Some(0));
    assert_eq!(scope.get("foo::Color::RED"), Ok(Lookup::Enumerator(0)));
    assert_eq!(scope.get("foo::Color::RED").unwrap().as_int(), Some(0));
    assert!(!scope.contains("foo::Color::BLUE"));
}

#[test]
fn test_enumerator_must_be_integral() {
    let mut scope = Scope::new();
    scope.set("Color", Enum::new("Color")).unwrap();
    assert_eq!(
        scope.set("Color::RED", Value::Str("red".to_owned())),
        Err(ScopeError::NonIntegralEnumerator {
            name: "Color::RED".to_owned(),
            kind: "string",
        })
    );
}

#[test]
fn test_assign_through_value_is_type_error() {
    let mut scope = Scope::new();
    scope.set("x", Value::Int(1)).unwrap();
    assert_eq!(
        scope.set("x::y", Value::Int(2)),
        Err(ScopeError::NotAScope {
            name: "x::y".to_owned(),
            component: "x".to_owned(),
            kind: "int",
        })
    );
}

#[test]
fn test_record_members() {
    let mut scope = Scope::new();
    scope.set("geo::Point", Record::new("geo::Point", "x, y")).unwrap();
    scope.set("geo::Point::ORIGIN_X", Value::Int(0)).unwrap();

    let point = scope.get_record("geo::Point").unwrap();
    assert_eq!(point.scope().get_value("ORIGIN_X"), Some(&Value::Int(0)));
    assert_eq!(scope.get_value("geo::Point::ORIGIN_X"), Some(&Value::Int(0)));
}

#[test]
fn test_get_mut() {
    let mut scope = Scope::new();
    scope.set("a::e", Enum::new("e")).unwrap();
    if let Entry::Enum(e) = scope.get_mut("a::e").unwrap() {
        e.insert("ONE", 1).unwrap();
    }
    assert_eq!(scope.get("a::e::ONE").unwrap().as_int(), Some(1));
    assert!(scope.get_mut("a::missing").is_err());
}

#[test]
fn test_update_replaces_top_level() {
    let mut base = Scope::new();
    base.set("a::x", Value::Int(1)).unwrap();
    base.set("b", Value::Int(2)).unwrap();

    let mut other = Scope::new();
    other.set("a::y", Value::Int(3)).unwrap();
    other.set("c", Value::Int(4)).unwrap();

    base.update(other);
    assert_eq!(base.names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert!(!base.contains("a::x"));
    assert!(base.contains("a::y"));
}

#[test]
fn test_remove_and_iterate() {
    let scope: Scope = [
        ("a".to_owned(), Entry::from(Value::Int(1))),
        ("b".to_owned(), Entry::from(Value::Int(2))),
    ]
    .into_iter()
    .collect();
    let mut scope = scope;
    assert_eq!(scope.remove("a"), Some(Entry::Value(Value::Int(1))));
    let names: Vec<_> = (&scope).into_iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["b"]);
}
