//! Tree factories for concise test assertions
//!
//! Building expected trees straight from the ast constructors buries the
//! shape under `Node::` wrappers and `.to_string()` calls. These helpers
//! keep a test's expected tree close to the shape of the source text:
//!
//! ```rust,ignore
//! use crate::lisc::testing::{call, num, program};
//!
//! let expected = program(vec![call("add", vec![num("1"), num("2")])]);
//! ```
//!
//! The top-level functions build source trees; the [out] module builds
//! output trees.

use crate::lisc::ast::source;

/// Build a source program from its top-level forms
pub fn program(children: Vec<source::Node>) -> source::Program {
    source::Program::with_children(children)
}

/// Build a source call node
pub fn call(name: &str, params: Vec<source::Node>) -> source::Node {
    source::Node::CallExpression(source::CallExpression::new(name.to_string(), params))
}

/// Build a source number literal node
pub fn num(value: &str) -> source::Node {
    source::Node::NumberLiteral(source::NumberLiteral::new(value.to_string()))
}

/// Build a source string literal node
pub fn strlit(value: &str) -> source::Node {
    source::Node::StringLiteral(source::StringLiteral::new(value.to_string()))
}

/// Factories for the output vocabulary
pub mod out {
    use crate::lisc::ast::output;

    /// Build an output program from its statements
    pub fn program(body: Vec<output::Node>) -> output::Program {
        output::Program::with_body(body)
    }

    /// Wrap an expression in statement position
    pub fn stmt(expression: output::Node) -> output::Node {
        output::Node::ExpressionStatement(output::ExpressionStatement::new(expression))
    }

    /// Build an output call with an identifier callee
    pub fn call(name: &str, arguments: Vec<output::Node>) -> output::Node {
        output::Node::CallExpression(output::CallExpression::new(ident(name), arguments))
    }

    /// Build an identifier node
    pub fn ident(name: &str) -> output::Node {
        output::Node::Identifier(output::Identifier::new(name.to_string()))
    }

    /// Build an output number literal node
    pub fn num(value: &str) -> output::Node {
        output::Node::NumberLiteral(output::NumberLiteral::new(value.to_string()))
    }

    /// Build an output string literal node
    pub fn strlit(value: &str) -> output::Node {
        output::Node::StringLiteral(output::StringLiteral::new(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lisc::lexer::lex;
    use crate::lisc::parser::parse;
    use crate::lisc::transformer::transform;

    #[test]
    fn test_source_factories_match_parser_output() {
        let tokens = lex("(add 1 \"x\")").unwrap();
        let parsed = parse(&tokens).unwrap();

        let expected = program(vec![call("add", vec![num("1"), strlit("x")])]);
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_output_factories_match_transformer_output() {
        let tokens = lex("(add 1 (inc 2))").unwrap();
        let parsed = parse(&tokens).unwrap();
        let transformed = transform(parsed).unwrap();

        let expected = out::program(vec![out::stmt(out::call(
            "add",
            vec![out::num("1"), out::call("inc", vec![out::num("2")])],
        ))]);
        assert_eq!(transformed, expected);
    }
}
