//! Token definitions for the lisc language
//!
//! This module defines all the tokens that can be produced by the lisc lexer.
//! The tokens are defined using the logos derive macro for efficient tokenization.

use std::fmt;

use logos::Logos;

/// All possible tokens in the lisc language
#[derive(Logos, Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[logos(skip r"\s+")]
pub enum Token {
    // Call delimiters
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    // Number literals: a maximal digit run kept as raw text
    // (no sign, no decimal point, no exponent)
    #[regex("[0-9]+", |lex| lex.slice().to_string())]
    Number(String),

    // String literals: the payload excludes the quotes and no escape
    // sequences are processed
    #[regex(r#""[^"]*""#, |lex| {
        let text = lex.slice();
        text[1..text.len() - 1].to_string()
    })]
    String(String),

    // Call names: a maximal run of ASCII lowercase letters
    #[regex("[a-z]+", |lex| lex.slice().to_string())]
    Name(String),
}

impl Token {
    /// Check if this token opens a call
    pub fn is_open_paren(&self) -> bool {
        matches!(self, Token::OpenParen)
    }

    /// Check if this token closes a call
    pub fn is_close_paren(&self) -> bool {
        matches!(self, Token::CloseParen)
    }

    /// Check if this token is an atom (anything that is not a delimiter)
    pub fn is_atom(&self) -> bool {
        matches!(self, Token::Number(_) | Token::String(_) | Token::Name(_))
    }

    /// Get the payload text of a number, string, or name token
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::Number(value) | Token::String(value) | Token::Name(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenParen => write!(f, "<open-paren>"),
            Token::CloseParen => write!(f, "<close-paren>"),
            Token::Number(value) => write!(f, "<number:{}>", value),
            Token::String(text) => write!(f, "<string:{}>", text),
            Token::Name(name) => write!(f, "<name:{}>", name),
        }
    }
}
