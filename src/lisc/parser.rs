//! Parsing for lisc
//!
//! Recursive descent over the token stream. lisc is designed to be
//! parseable in one left-to-right pass with a single token of lookahead,
//! so the parser simply tracks a cursor position as it goes and keeps
//! incrementing it.

pub mod parser_impl;

pub use parser_impl::{parse, ParseError};
