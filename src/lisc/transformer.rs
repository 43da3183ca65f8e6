//! Transformation from the source tree to the output tree
//!
//! Walks the source tree once, by value, and builds the output tree on the
//! way back up. Call names become [Identifier](crate::lisc::ast::output::Identifier)
//! callees, parameters become arguments, and a call sitting directly under
//! the program root gains an ExpressionStatement wrapper so the generator
//! can terminate it with `;`. Literals cross over unchanged.

use std::fmt;

use crate::lisc::ast::{output, source};

/// Errors that can occur during transformation
///
/// The source node set is closed, so transforming a tree built by the
/// parser never produces this. The variant exists so the stage keeps the
/// same fallible shape as its neighbors.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// A node kind with no output rendition
    UnsupportedNode(String),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::UnsupportedNode(kind) => {
                write!(f, "Unsupported node kind: {}", kind)
            }
        }
    }
}

impl std::error::Error for TransformError {}

/// The node kind that requested a child transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParentKind {
    Program,
    CallExpression,
}

/// Transform a source tree into an output tree
pub fn transform(program: source::Program) -> Result<output::Program, TransformError> {
    let mut body = Vec::new();
    for child in program.children {
        body.push(transform_node(child, ParentKind::Program)?);
    }

    Ok(output::Program::with_body(body))
}

fn transform_node(
    node: source::Node,
    parent: ParentKind,
) -> Result<output::Node, TransformError> {
    match node {
        source::Node::CallExpression(call) => {
            let callee = output::Node::Identifier(output::Identifier::new(call.name));

            let mut arguments = Vec::new();
            for param in call.params {
                arguments.push(transform_node(param, ParentKind::CallExpression)?);
            }

            let expression =
                output::Node::CallExpression(output::CallExpression::new(callee, arguments));

            // A call that is itself an argument stays bare; anywhere else
            // it becomes a statement
            if parent == ParentKind::CallExpression {
                Ok(expression)
            } else {
                Ok(output::Node::ExpressionStatement(
                    output::ExpressionStatement::new(expression),
                ))
            }
        }
        source::Node::NumberLiteral(number) => Ok(output::Node::NumberLiteral(
            output::NumberLiteral::new(number.value),
        )),
        source::Node::StringLiteral(string) => Ok(output::Node::StringLiteral(
            output::StringLiteral::new(string.value),
        )),
    }
}
