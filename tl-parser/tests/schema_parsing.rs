//! Document-level parsing tests
//!
//! Each test feeds a small TL document through the parser and checks the
//! resulting schema with the fluent assertions from `tl::testing`.

use rstest::rstest;
use tl_parser::tl::ast::{Category, ScopeTypeEnum};
use tl_parser::tl::parsing::{parse_str, ParseError};
use tl_parser::tl::testing::{assert_schema, samples};

#[test]
fn test_ping_function() {
    let schema = parse_str("---functions---\nping#7abe77ec ping_id:long = Pong;").unwrap();

    assert_schema(&schema).definition_count(1).definition(0, |d| {
        d.name("ping")
            .id(0x7abe77ec)
            .category(Category::Function)
            .param_count(1)
            .param(0, "ping_id", "long")
            .result("Pong");
    });
}

#[rstest]
#[case(samples::TYPES_ONLY)]
#[case("boolFalse#bc799737 = Bool;\n---types---\nboolTrue#997275b5 = Bool;")]
#[case("// ---functions---\nboolTrue#997275b5 = Bool;")]
fn test_without_functions_token_everything_is_a_type(#[case] source: &str) {
    let schema = parse_str(source).unwrap();
    assert!(!schema.definitions.is_empty());
    assert_schema(&schema).all_categories(Category::Type);
}

#[test]
fn test_sections_switch_back_and_forth() {
    let source = "\
a#1 = A;
---functions---
b#2 = B;
c#3 = C;
---types---
d#4 = D;
";
    let schema = parse_str(source).unwrap();
    let categories: Vec<_> = schema.definitions.iter().map(|d| d.category).collect();
    assert_eq!(
        categories,
        vec![
            Category::Type,
            Category::Function,
            Category::Function,
            Category::Type
        ]
    );
}

#[rstest]
#[case("// Authorization key creation", ScopeTypeEnum::Handshake)]
#[case("// System messages", ScopeTypeEnum::Transport)]
#[case("// Main application API", ScopeTypeEnum::Sync)]
#[case("// Base Type Definitions", ScopeTypeEnum::CoreTypes)]
#[case("/// //  ///Base Type Definitions", ScopeTypeEnum::CoreTypes)]
fn test_scope_end_resets_any_scope(#[case] marker: &str, #[case] scope: ScopeTypeEnum) {
    let source = format!("{marker}\na#1 = A;\n// ---- Scope End\nb#2 = B;\n");
    let schema = parse_str(&source).unwrap();

    assert_schema(&schema)
        .definition(0, |d| {
            d.scope(scope);
        })
        .definition(1, |d| {
            d.scope(ScopeTypeEnum::Empty);
        });
}

#[test]
fn test_class_pair_is_not_attached_to_definition() {
    let source = "\
//@class Pong @description Reply to a ping
pong#347773c5 msg_id:long ping_id:long = Pong;
";
    let schema = parse_str(source).unwrap();

    assert_schema(&schema)
        .class_count(1)
        .class(0, "Pong", "Reply to a ping")
        .definition_count(1)
        .definition(0, |d| {
            d.result("Pong").annotation_count(0);
        });
}

#[test]
fn test_annotations_attach_to_next_definition_only() {
    let source = "\
//@description First
//@ping_id Id
ping#7abe77ec ping_id:long = Pong;
boolTrue#997275b5 = Bool;
";
    let schema = parse_str(source).unwrap();

    assert_schema(&schema)
        .definition(0, |d| {
            d.annotation_count(2)
                .annotation(0, "description", "First")
                .annotation(1, "ping_id", "Id");
        })
        .definition(1, |d| {
            d.annotation_count(0);
        });
}

#[test]
fn test_unknown_annotation_fails_with_name_and_line() {
    let source = "\
boolTrue#997275b5 = Bool;

//@description Ping
//@pong_id Not a parameter
ping#7abe77ec ping_id:long = Pong;
";
    let err = parse_str(source).unwrap_err();

    assert_eq!(err.line(), Some(5));
    match &err {
        ParseError::UnknownAnnotation { name, .. } => assert_eq!(name, "pong_id"),
        other => panic!("Expected unknown annotation error, got {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains("pong_id"));
    assert!(message.contains("line 5"));
}

#[test]
fn test_description_aliases_are_always_accepted() {
    let source = "\
//@description Ping
//@param_description Text of the description parameter
ping#7abe77ec ping_id:long = Pong;
";
    let schema = parse_str(source).unwrap();
    assert_schema(&schema).definition(0, |d| {
        d.annotation_count(2);
    });
}

#[rstest]
#[case("vector {t:Type} # [ t ] = Vector t;")]
#[case("vector#1cb5c415 {t:Type} # [ t ] = Vector t;")]
#[case("  vector#1cb5c415 {t:Type} # [ t ] = Vector t;  ")]
fn test_builtin_vector_is_never_a_definition(#[case] line: &str) {
    for source in [
        format!("{line}\nboolTrue#997275b5 = Bool;"),
        format!("---functions---\n{line}\nping#7abe77ec ping_id:long = Pong;"),
    ] {
        let schema = parse_str(&source).unwrap();
        assert_eq!(schema.definitions.len(), 1);
        assert!(schema
            .definitions
            .iter()
            .all(|d| d.definition.name != "vector"));
    }
}

#[rstest]
#[case("// LAYER x1", 1)]
#[case("a#1 = A;\n\n// LAYER 1.5", 3)]
fn test_malformed_layer(#[case] source: &str, #[case] line: usize) {
    let err = parse_str(source).unwrap_err();
    assert!(matches!(err, ParseError::Layer { .. }));
    assert_eq!(err.line(), Some(line));
}

#[rstest]
#[case("//@", 1)]
#[case("a#1 = A;\n//@description", 2)]
fn test_malformed_annotation(#[case] source: &str, #[case] line: usize) {
    let err = parse_str(source).unwrap_err();
    assert!(matches!(err, ParseError::Annotation { .. }));
    assert_eq!(err.line(), Some(line));
}

#[rstest]
#[case("int128 4*[ int ] = Int128;", 1)]
#[case("a#1 = A;\nthis is not a definition", 2)]
#[case("ping#7abe77ec ping_id:long = Pong;;;", 1)]
fn test_malformed_definition(#[case] source: &str, #[case] line: usize) {
    let err = parse_str(source).unwrap_err();
    assert!(matches!(err, ParseError::Definition { .. }));
    assert_eq!(err.line(), Some(line));
}

#[test]
fn test_functions_sample() {
    let schema = samples::parse(samples::FUNCTIONS_ONLY);
    assert_schema(&schema)
        .definition_count(2)
        .all_categories(Category::Function)
        .definition(1, |d| {
            d.name("invokeWithLayer")
                .param(1, "query", "!X")
                .result("X")
                .renders_as("invokeWithLayer#da9b0d0d {X:Type} layer:int query:!X = X");
        });
}
