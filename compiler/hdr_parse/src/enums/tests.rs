#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use hdr_ir::{EnumItem, Scope};
use pretty_assertions::assert_eq;

fn apply_all(parser: &mut EnumsParser, scope: &mut Scope, text: &str) -> Result<Vec<bool>, ParseError> {
    let lines: Vec<&str> = text.lines().collect();
    let mut recognized = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        let mut ctx = Context::new(&lines, index, scope);
        recognized.push(parser.try_parse_line(line, &mut ctx)?);
    }
    Ok(recognized)
}

#[test]
fn test_color_enum() {
    let mut scope = Scope::new();
    let mut parser = EnumsParser::new();
    let recognized = apply_all(
        &mut parser,
        &mut scope,
        "enum foo::Color {\nfoo::Color::RED = 0,\nfoo::Color::GREEN = 1,\n}",
    )
    .unwrap();
    assert_eq!(recognized, vec![true; 4]);
    assert!(!parser.is_open());

    let color = scope.get_enum("foo::Color").unwrap();
    assert_eq!(color.name(), "Color");
    assert_eq!(color.get("RED"), Ok(EnumItem::Value(0)));
    assert_eq!(color.get(1), Ok(EnumItem::Name("GREEN")));
    assert!(color.contains("GREEN"));
    assert!(color.contains(1));
}

#[test]
fn test_plugin_separator_and_char_values() {
    let mut scope = Scope::new();
    apply_all(
        &mut EnumsParser::new(),
        &mut scope,
        "enum Letter {\nA:='a',\nB:=char16_t(66),\n}",
    )
    .unwrap();

    let letter = scope.get_enum("Letter").unwrap();
    assert_eq!(letter.iter().collect::<Vec<_>>(), vec![("A", 97), ("B", 66)]);
}

#[test]
fn test_anonymous_enums_numbered_per_scope() {
    let mut scope = Scope::new();
    apply_all(
        &mut EnumsParser::new(),
        &mut scope,
        "enum ns::(anonymous enum at a.h:1:1) {\n\
         ns::A:=0,\n\
         }\n\
         enum ns::(unnamed enum at a.h:5:1) {\n\
         ns::B:=1,\n\
         }\n\
         enum (anonymous enum at a.h:9:1) {\n\
         C:=2,\n\
         }",
    )
    .unwrap();

    let ns = scope.get_scope("ns").unwrap();
    assert_eq!(
        ns.names().collect::<Vec<_>>(),
        vec!["(anonymous enum at a.h:1:1)`0", "(unnamed enum at a.h:5:1)`1"]
    );
    assert_eq!(
        scope.get("ns::(unnamed enum at a.h:5:1)`1::B").unwrap().as_int(),
        Some(1)
    );
    assert!(scope.contains("(anonymous enum at a.h:9:1)`0"));
}

#[test]
fn test_anonymous_numbering_follows_storage_scope() {
    let mut scope = Scope::new();
    apply_all(
        &mut EnumsParser::new(),
        &mut scope,
        "enum ::(anonymous) {\n\
         A:=0,\n\
         }\n\
         enum (anonymous namespace)::(anonymous) {\n\
         B:=1,\n\
         }",
    )
    .unwrap();

    assert_eq!(
        scope.names().collect::<Vec<_>>(),
        vec!["(anonymous)`0", "(anonymous)`1"]
    );
    assert_eq!(scope.get("(anonymous)`1::B").unwrap().as_int(), Some(1));
}

#[test]
fn test_anonymous_name_detection() {
    assert!(is_anonymous_name("(anonymous enum at x.h:3:1)"));
    assert!(is_anonymous_name("(Unnamed enum at x.h:3:1)"));
    assert!(is_anonymous_name("(anonymous)"));
    assert!(!is_anonymous_name("Anonymous"));
    assert!(!is_anonymous_name("(anonymously)"));
}

#[test]
fn test_nested_enum_rejected() {
    let mut scope = Scope::new();
    let recognized = apply_all(&mut EnumsParser::new(), &mut scope, "enum A {\nenum B {").unwrap();
    assert_eq!(recognized, vec![true, false]);
    assert!(!scope.contains("B"));
}

#[test]
fn test_lines_outside_enum_ignored() {
    let mut scope = Scope::new();
    let recognized = apply_all(&mut EnumsParser::new(), &mut scope, "x = 1\n}").unwrap();
    assert_eq!(recognized, vec![false, false]);
    assert!(scope.is_empty());
}

#[test]
fn test_blank_line_inside_enum_left_to_caller() {
    let mut scope = Scope::new();
    let mut parser = EnumsParser::new();
    let recognized = apply_all(&mut parser, &mut scope, "enum E {\n   \nE::X = 3,").unwrap();
    assert_eq!(recognized, vec![true, false, true]);
    assert!(parser.is_open());
    assert_eq!(scope.get_enum("E").unwrap().value_of("X"), Some(3));
}

#[test]
fn test_malformed_member() {
    let mut scope = Scope::new();
    let err = apply_all(&mut EnumsParser::new(), &mut scope, "enum E {\nnot a member").unwrap_err();
    assert_eq!(
        err,
        ParseError::MalformedEnumMember {
            line: "not a member".to_owned(),
            line_number: 2,
        }
    );

    let err = apply_all(&mut EnumsParser::new(), &mut scope, "enum F {\nF::X = \"text\",")
        .unwrap_err();
    assert!(matches!(err, ParseError::MalformedEnumMember { line_number: 2, .. }));
}

#[test]
fn test_reset_forgets_state() {
    let mut scope = Scope::new();
    let mut parser = EnumsParser::new();
    apply_all(&mut parser, &mut scope, "enum (anonymous) {").unwrap();
    assert!(parser.is_open());

    parser.reset();
    assert!(!parser.is_open());
    let mut fresh = Scope::new();
    apply_all(&mut parser, &mut fresh, "enum (anonymous) {\n}").unwrap();
    assert!(fresh.contains("(anonymous)`0"));
}

#[test]
fn test_no_single_line_form() {
    assert_eq!(
        EnumsParser::new().parse_single_line("enum E {"),
        Err(ParseError::Unsupported {
            parser: "EnumsParser"
        })
    );
}
