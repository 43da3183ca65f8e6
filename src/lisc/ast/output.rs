//! Output tree consumed by the code generator
//!
//! The output tree speaks the target language's vocabulary: calls carry a
//! callee node plus an argument list, and each top-level expression is
//! wrapped in an [ExpressionStatement] so the generator knows where a
//! terminating `;` belongs. Nested nodes are boxed to keep the enum sized.

use std::fmt;

/// A complete program in the target language
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Program {
    /// Top-level statements in source order
    pub body: Vec<Node>,
}

/// A node of the output tree
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum Node {
    ExpressionStatement(ExpressionStatement),
    CallExpression(CallExpression),
    Identifier(Identifier),
    NumberLiteral(NumberLiteral),
    StringLiteral(StringLiteral),
}

/// An expression used in statement position; rendered with a trailing `;`
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ExpressionStatement {
    pub expression: Box<Node>,
}

/// A call of the form `callee(arguments...)`
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CallExpression {
    /// The expression in call position; an [Identifier] for lisc programs
    pub callee: Box<Node>,
    /// Arguments in source order; may be empty
    pub arguments: Vec<Node>,
}

/// A bare name, used as a callee
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Identifier {
    pub name: String,
}

/// A run of digits, kept as raw text
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NumberLiteral {
    pub value: String,
}

/// Quoted text, stored without the quote delimiters
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StringLiteral {
    pub value: String,
}

impl Program {
    /// Create a new empty program
    pub fn new() -> Self {
        Self { body: Vec::new() }
    }

    /// Create a program with the given statements
    pub fn with_body(body: Vec<Node>) -> Self {
        Self { body }
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionStatement {
    /// Wrap an expression in statement position
    pub fn new(expression: Node) -> Self {
        Self {
            expression: Box::new(expression),
        }
    }
}

impl CallExpression {
    /// Create a new call with the given callee and arguments
    pub fn new(callee: Node, arguments: Vec<Node>) -> Self {
        Self {
            callee: Box::new(callee),
            arguments,
        }
    }
}

impl Identifier {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl NumberLiteral {
    pub fn new(value: String) -> Self {
        Self { value }
    }
}

impl StringLiteral {
    pub fn new(value: String) -> Self {
        Self { value }
    }
}

impl Node {
    /// Get the node type name for display/debugging
    pub fn node_type(&self) -> &'static str {
        match self {
            Node::ExpressionStatement(_) => "ExpressionStatement",
            Node::CallExpression(_) => "CallExpression",
            Node::Identifier(_) => "Identifier",
            Node::NumberLiteral(_) => "NumberLiteral",
            Node::StringLiteral(_) => "StringLiteral",
        }
    }

    /// Check if this node is an expression statement
    pub fn is_statement(&self) -> bool {
        matches!(self, Node::ExpressionStatement(_))
    }

    /// Get a reference to the call if this is a CallExpression variant
    pub fn as_call(&self) -> Option<&CallExpression> {
        if let Node::CallExpression(call) = self {
            Some(call)
        } else {
            None
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Program({} statements)", self.body.len())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::ExpressionStatement(statement) => {
                write!(f, "ExpressionStatement({})", statement.expression)
            }
            Node::CallExpression(call) => {
                write!(
                    f,
                    "CallExpression({}, {} arguments)",
                    call.callee,
                    call.arguments.len()
                )
            }
            Node::Identifier(identifier) => write!(f, "Identifier('{}')", identifier.name),
            Node::NumberLiteral(number) => write!(f, "NumberLiteral({})", number.value),
            Node::StringLiteral(string) => write!(f, "StringLiteral('{}')", string.value),
        }
    }
}
