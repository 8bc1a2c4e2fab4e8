#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use hdr_ir::{Scope, Value};
use pretty_assertions::assert_eq;

fn apply(parser: &mut LiteralsParser, scope: &mut Scope, line: &str) -> Result<bool, ParseError> {
    let lines = [line];
    let mut ctx = Context::new(&lines, 0, scope);
    parser.try_parse_line(line, &mut ctx)
}

fn string(s: &str) -> Value {
    Value::Str(s.to_owned())
}

#[test]
fn test_literals_numbered_per_scope() {
    let mut scope = Scope::new();
    let mut parser = LiteralsParser::new();
    for line in [
        "#literal ns::(literal):=\"first\"",
        "# literal ns::(literal) = \"second\"",
        "#literal other::(literal):=\"third\"",
    ] {
        assert_eq!(apply(&mut parser, &mut scope, line), Ok(true));
    }

    assert_eq!(scope.get_value("ns::(literal)`0"), Some(&string("first")));
    assert_eq!(scope.get_value("ns::(literal)`1"), Some(&string("second")));
    assert_eq!(scope.get_value("other::(literal)`0"), Some(&string("third")));
}

#[test]
fn test_function_scoped_literal() {
    let mut scope = Scope::new();
    let mut parser = LiteralsParser::new();
    apply(&mut parser, &mut scope, "#literal ns::greet(int, char)::(literal):=\"hi\"").unwrap();

    assert_eq!(
        scope.get_value("ns::greet(int, char)::(literal)`0"),
        Some(&string("hi"))
    );
}

#[test]
fn test_global_literal() {
    let mut scope = Scope::new();
    let mut parser = LiteralsParser::new();
    apply(&mut parser, &mut scope, "#literal ::(literal):=\"g\"").unwrap();
    assert_eq!(scope.get_value("(literal)`0"), Some(&string("g")));
}

#[test]
fn test_other_lines_ignored() {
    let mut scope = Scope::new();
    let mut parser = LiteralsParser::new();
    assert_eq!(apply(&mut parser, &mut scope, "#literal ns::name:=1"), Ok(false));
    assert_eq!(apply(&mut parser, &mut scope, "ns::(literal):=1"), Ok(false));
    assert_eq!(apply(&mut parser, &mut scope, "#pragma once"), Ok(false));
    assert!(scope.is_empty());
}

#[test]
fn test_reset_restarts_numbering() {
    let mut parser = LiteralsParser::new();
    let (first, _) = parser.parse_single_line("#literal (literal):=1").unwrap();
    let (second, _) = parser.parse_single_line("#literal (literal):=2").unwrap();
    parser.reset();
    let (again, value) = parser.parse_single_line("#literal (literal):=3").unwrap();

    assert_eq!(first, "(literal)`0");
    assert_eq!(second, "(literal)`1");
    assert_eq!(again, "(literal)`0");
    assert_eq!(value, Entry::Value(Value::Int(3)));
}

#[test]
fn test_numbering_follows_storage_scope() {
    let mut scope = Scope::new();
    let mut parser = LiteralsParser::new();
    for line in [
        "#literal ::(literal):=\"global\"",
        "#literal (anonymous namespace)::(literal):=\"anon\"",
        "#literal ns::(anonymous namespace)::(literal):=\"inner\"",
        "#literal ::ns::(literal):=\"outer\"",
    ] {
        assert_eq!(apply(&mut parser, &mut scope, line), Ok(true));
    }

    assert_eq!(scope.get_value("(literal)`0"), Some(&string("global")));
    assert_eq!(scope.get_value("(literal)`1"), Some(&string("anon")));
    assert_eq!(scope.get_value("ns::(literal)`0"), Some(&string("inner")));
    assert_eq!(scope.get_value("ns::(literal)`1"), Some(&string("outer")));
}
