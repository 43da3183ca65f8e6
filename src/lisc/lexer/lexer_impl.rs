//! Implementation of the lisc lexer
//!
//! This module provides the lexing entry point for lisc source text.
//! The actual scanning is handled entirely by logos; the code here
//! collects tokens and classifies unmatched input into lex errors.

use std::fmt;

use logos::Logos;

use crate::lisc::lexer::tokens::Token;

/// Errors that can occur during lexing
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// A double quote opened a string literal that never closed
    UnterminatedString,
    /// A character that belongs to no token
    UnexpectedCharacter(char),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnterminatedString => write!(f, "Unterminated string literal"),
            LexError::UnexpectedCharacter(character) => {
                write!(f, "Unexpected character: '{}'", character)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Tokenize lisc source text, failing on the first unrecognized construct
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
            Err(()) => return Err(classify_failure(lexer.slice())),
        }
    }

    Ok(tokens)
}

/// Classify an unmatched region of input.
///
/// A region starting with a double quote can only be a string literal that
/// never closed; a terminated one would have matched the string pattern.
fn classify_failure(unmatched: &str) -> LexError {
    // An error token from logos always covers at least one character
    match unmatched.chars().next() {
        Some('"') => LexError::UnterminatedString,
        Some(character) => LexError::UnexpectedCharacter(character),
        None => LexError::UnexpectedCharacter(char::REPLACEMENT_CHARACTER),
    }
}
