//! Code generation from the output tree
//!
//! Renders the output tree as target-language text: statements end in `;`,
//! call arguments join with `", "`, and top-level statements join with a
//! newline. Generation is purely syntax-directed, one node at a time.

use std::fmt;

use crate::lisc::ast::output::{Node, Program};

/// Errors that can occur during code generation
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// A node kind that cannot be rendered in expression position
    UnsupportedNode(String),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::UnsupportedNode(kind) => {
                write!(f, "Cannot generate an expression from node kind: {}", kind)
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// Generate target code for a complete program
///
/// Each body entry becomes one line of output. An empty program produces
/// the empty string.
pub fn generate(program: &Program) -> Result<String, GenerateError> {
    let mut lines = Vec::new();
    for node in &program.body {
        lines.push(generate_statement(node)?);
    }

    Ok(lines.join("\n"))
}

/// Render a node in statement position
fn generate_statement(node: &Node) -> Result<String, GenerateError> {
    match node {
        Node::ExpressionStatement(statement) => {
            Ok(format!("{};", generate_expression(&statement.expression)?))
        }
        other => generate_expression(other),
    }
}

/// Render a node in expression position
fn generate_expression(node: &Node) -> Result<String, GenerateError> {
    match node {
        Node::CallExpression(call) => {
            let callee = generate_expression(&call.callee)?;

            let mut arguments = Vec::new();
            for argument in &call.arguments {
                arguments.push(generate_expression(argument)?);
            }

            Ok(format!("{}({})", callee, arguments.join(", ")))
        }
        Node::Identifier(identifier) => Ok(identifier.name.clone()),
        Node::NumberLiteral(number) => Ok(number.value.clone()),
        // Contents are re-quoted verbatim; embedded quotes are not escaped
        Node::StringLiteral(string) => Ok(format!("\"{}\"", string.value)),
        Node::ExpressionStatement(_) => {
            Err(GenerateError::UnsupportedNode(node.node_type().to_string()))
        }
    }
}
