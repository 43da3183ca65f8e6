//! Source tree produced by the parser
//!
//! The source tree reflects call nesting exactly as written: a root
//! [Program] holding the top-level forms, [CallExpression] nodes branching
//! into their parameters, and literals at the leaves. Literal values are
//! kept as raw text; no numeric parsing happens here.

use std::fmt;

/// A complete parsed lisc program
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Program {
    /// Top-level forms in source order
    pub children: Vec<Node>,
}

/// A node of the source tree
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum Node {
    CallExpression(CallExpression),
    NumberLiteral(NumberLiteral),
    StringLiteral(StringLiteral),
}

/// A parenthesized call: `(name param ...)`
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CallExpression {
    /// The name following the opening parenthesis; never empty
    pub name: String,
    /// Parameters in source order; may be empty
    pub params: Vec<Node>,
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
        Self {
            children: Vec::new(),
        }
    }

    /// Create a program with the given top-level forms
    pub fn with_children(children: Vec<Node>) -> Self {
        Self { children }
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

impl CallExpression {
    /// Create a new call with the given name and parameters
    pub fn new(name: String, params: Vec<Node>) -> Self {
        Self { name, params }
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
            Node::CallExpression(_) => "CallExpression",
            Node::NumberLiteral(_) => "NumberLiteral",
            Node::StringLiteral(_) => "StringLiteral",
        }
    }

    /// Check if this node is a call expression
    pub fn is_call(&self) -> bool {
        matches!(self, Node::CallExpression(_))
    }

    /// Check if this node is a literal leaf
    pub fn is_literal(&self) -> bool {
        matches!(self, Node::NumberLiteral(_) | Node::StringLiteral(_))
    }

    /// Get a reference to the call if this is a CallExpression variant
    pub fn as_call(&self) -> Option<&CallExpression> {
        if let Node::CallExpression(call) = self {
            Some(call)
        } else {
            None
        }
    }

    /// Get the literal text if this is a leaf node
    pub fn literal_value(&self) -> Option<&str> {
        match self {
            Node::NumberLiteral(number) => Some(&number.value),
            Node::StringLiteral(string) => Some(&string.value),
            Node::CallExpression(_) => None,
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Program({} children)", self.children.len())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::CallExpression(call) => {
                write!(
                    f,
                    "CallExpression('{}', {} params)",
                    call.name,
                    call.params.len()
                )
            }
            Node::NumberLiteral(number) => write!(f, "NumberLiteral({})", number.value),
            Node::StringLiteral(string) => write!(f, "StringLiteral('{}')", string.value),
        }
    }
}
