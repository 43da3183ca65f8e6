//! End-to-end compilation scenarios
//!
//! Each scenario feeds lisc source through the full pipeline and checks the
//! generated code exactly. Error scenarios assert the precise error variant
//! and its display text, since the CLI surfaces that text verbatim.

use lisc::lisc::compiler::{compile, CompileError};
use lisc::lisc::lexer::LexError;
use lisc::lisc::parser::ParseError;
use lisc::lisc::processor::sample_sources::LiscSources;
use lisc::lisc::processor::{process, ProcessingSpec};
use rstest::rstest;

#[rstest]
#[case::simple_call("(add 1 2)", "add(1, 2);")]
#[case::nested_calls(
    "(add (multiply 1 2) (subtraction 3 (division 4 (sqrt 5))))",
    "add(multiply(1, 2), subtraction(3, division(4, sqrt(5))));"
)]
#[case::string_argument("(greet \"hi\")", "greet(\"hi\");")]
#[case::bare_number("42", "42")]
#[case::bare_string("\"hello\"", "\"hello\"")]
#[case::call_without_arguments("(ping)", "ping();")]
#[case::multiple_forms("(add 1 2) (sub 3 4)", "add(1, 2);\nsub(3, 4);")]
#[case::forms_on_separate_lines("(print \"ready\")\n(add 1 (inc 2))", "print(\"ready\");\nadd(1, inc(2));")]
#[case::empty_input("", "")]
#[case::whitespace_only(" \t\n ", "")]
#[case::extra_whitespace("(add\n  1\n  2)", "add(1, 2);")]
#[case::vertical_tab_whitespace("(add\u{000B}1 2)", "add(1, 2);")]
#[case::unicode_whitespace("(add\u{00A0}1\u{2003}2)", "add(1, 2);")]
fn test_compile_scenarios(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(compile(source).unwrap(), expected);
}

#[rstest]
#[case::unterminated_call("(add 1", CompileError::Parse(ParseError::UnterminatedCall))]
#[case::unterminated_string(
    "\"unterminated",
    CompileError::Lex(LexError::UnterminatedString)
)]
#[case::unexpected_character("(add 1]", CompileError::Lex(LexError::UnexpectedCharacter(']')))]
fn test_compile_error_scenarios(#[case] source: &str, #[case] expected: CompileError) {
    assert_eq!(compile(source).unwrap_err(), expected);
}

#[test]
fn test_call_requires_a_name() {
    assert!(matches!(
        compile("()").unwrap_err(),
        CompileError::Parse(ParseError::ExpectedCallName(_))
    ));
    assert!(matches!(
        compile("(1 2)").unwrap_err(),
        CompileError::Parse(ParseError::ExpectedCallName(_))
    ));
}

#[test]
fn test_stray_close_paren_is_rejected() {
    assert!(matches!(
        compile(")").unwrap_err(),
        CompileError::Parse(ParseError::UnexpectedToken(_))
    ));
    assert!(matches!(
        compile("(add 1 2))").unwrap_err(),
        CompileError::Parse(ParseError::UnexpectedToken(_))
    ));
}

#[test]
fn test_error_messages_name_the_failing_stage() {
    assert_eq!(
        compile("(add 1").unwrap_err().to_string(),
        "Parsing failed: Unterminated call: missing ')'"
    );
    assert_eq!(
        compile("\"unterminated").unwrap_err().to_string(),
        "Lexing failed: Unterminated string literal"
    );
    assert_eq!(
        compile("(add 1 2]").unwrap_err().to_string(),
        "Lexing failed: Unexpected character: ']'"
    );
}

/// Snapshots of generated code and serialized trees for the bundled samples
#[cfg(test)]
mod snapshot_tests {
    use super::*;

    #[test]
    fn test_nested_calls_code_snapshot() {
        let code = LiscSources::get_compiled("010-nested-calls").unwrap();
        insta::assert_snapshot!(code, @"add(multiply(1, 2), subtraction(3, division(4, sqrt(5))));");
    }

    #[test]
    fn test_multiple_forms_code_snapshot() {
        let code = LiscSources::get_compiled("040-multiple-forms").unwrap();
        insta::assert_snapshot!(code, @r#"
        print("ready");
        add(1, inc(2));
        "#);
    }

    #[test]
    fn test_source_ast_json_snapshot() {
        let spec = ProcessingSpec::from_string("source-ast-json").unwrap();
        let json = process("(add 1 2)", &spec).unwrap();
        insta::assert_snapshot!(json, @r#"
        {
          "children": [
            {
              "CallExpression": {
                "name": "add",
                "params": [
                  {
                    "NumberLiteral": {
                      "value": "1"
                    }
                  },
                  {
                    "NumberLiteral": {
                      "value": "2"
                    }
                  }
                ]
              }
            }
          ]
        }
        "#);
    }

    #[test]
    fn test_output_ast_json_snapshot() {
        let spec = ProcessingSpec::from_string("output-ast-json").unwrap();
        let json = process("(add 1 2)", &spec).unwrap();
        insta::assert_snapshot!(json, @r#"
        {
          "body": [
            {
              "ExpressionStatement": {
                "expression": {
                  "CallExpression": {
                    "callee": {
                      "Identifier": {
                        "name": "add"
                      }
                    },
                    "arguments": [
                      {
                        "NumberLiteral": {
                          "value": "1"
                        }
                      },
                      {
                        "NumberLiteral": {
                          "value": "2"
                        }
                      }
                    ]
                  }
                }
              }
            }
          ]
        }
        "#);
    }

    #[test]
    fn test_tokens_display_snapshot() {
        let spec = ProcessingSpec::from_string("tokens-display").unwrap();
        let rendered = process("(greet \"hi\")", &spec).unwrap();
        insta::assert_snapshot!(rendered, @"<open-paren><name:greet><string:hi><close-paren>");
    }
}
