#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use hdr_ir::Value;
use pretty_assertions::assert_eq;

fn apply(scope: &mut Scope, line: &str) -> Result<bool, ParseError> {
    let lines = [line];
    let mut ctx = Context::new(&lines, 0, scope);
    RecordsParser::new().try_parse_line(line, &mut ctx)
}

#[test]
fn test_split_record_lines() {
    assert_eq!(split_record("geo::Point{x,y}"), Some(("geo::Point", "x,y")));
    assert_eq!(split_record("Empty{}"), Some(("Empty", "")));
    assert_eq!(split_record("Box<int> {value}"), Some(("Box<int>", "value")));
    assert_eq!(split_record("a = B{1}"), None);
    assert_eq!(split_record("enum X {"), None);
    assert_eq!(split_record("}"), None);
}

#[test]
fn test_register_record() {
    let mut scope = Scope::new();
    assert_eq!(apply(&mut scope, "geo::Point{x,y}"), Ok(true));

    let point = scope.get_record("geo::Point").unwrap();
    assert_eq!(point.name(), "geo::Point");
    assert_eq!(point.type_name(), "Point");
    assert_eq!(point.fields(), ["x", "y"]);
}

#[test]
fn test_members_seen_earlier_are_kept() {
    let mut scope = Scope::new();
    scope.set("geo::Point::DIMENSIONS", Value::Int(2)).unwrap();
    apply(&mut scope, "geo::Point{x,y}").unwrap();

    let point = scope.get_record("geo::Point").unwrap();
    assert_eq!(point.scope().get_value("DIMENSIONS"), Some(&Value::Int(2)));
}

#[test]
fn test_reregistration_keeps_record_members() {
    let mut scope = Scope::new();
    apply(&mut scope, "Limits{lo,hi}").unwrap();
    scope.set("Limits::MAX", Value::Int(9)).unwrap();
    apply(&mut scope, "Limits{lo,hi,step}").unwrap();

    let limits = scope.get_record("Limits").unwrap();
    assert_eq!(limits.fields(), ["lo", "hi", "step"]);
    assert_eq!(scope.get_value("Limits::MAX"), Some(&Value::Int(9)));
}

#[test]
fn test_constant_lines_are_not_records() {
    let mut scope = Scope::new();
    assert_eq!(apply(&mut scope, "x = 1"), Ok(false));
    assert!(scope.is_empty());
}

#[test]
fn test_single_line() {
    let (name, entry) = RecordsParser::new()
        .parse_single_line("ns::Pair{first, second}")
        .unwrap();
    assert_eq!(name, "ns::Pair");
    assert_eq!(entry.as_record().unwrap().fields(), ["first", "second"]);
}
