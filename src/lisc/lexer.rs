//! Lexer module for the lisc language
//!
//! This module contains the tokenization logic for lisc source text,
//! including token definitions, the lexing entry point, and the
//! detokenizer that rebuilds source text from a token stream.
//!
//! Scanning is handled entirely by logos in one left-to-right pass with
//! maximal munch and no backtracking. The only logic layered on top is
//! error classification: an unmatched region that starts with a double
//! quote can only be a string literal that never closed, while anything
//! else is a stray character.

pub mod formatting;
pub mod lexer_impl;
pub mod tokens;

pub use formatting::detokenize;
pub use lexer_impl::{lex, LexError};
pub use tokens::Token;
