//! The complete source-to-source pipeline
//!
//! [compile] chains the four stages: lex, parse, transform, generate.
//! Each stage's error converts into [CompileError], so the whole pipeline
//! reads as four `?` lines.

use std::fmt;

use crate::lisc::generator::{generate, GenerateError};
use crate::lisc::lexer::{lex, LexError};
use crate::lisc::parser::{parse, ParseError};
use crate::lisc::transformer::{transform, TransformError};

/// An error from any stage of the pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    Lex(LexError),
    Parse(ParseError),
    Transform(TransformError),
    Generate(GenerateError),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Lex(e) => write!(f, "Lexing failed: {}", e),
            CompileError::Parse(e) => write!(f, "Parsing failed: {}", e),
            CompileError::Transform(e) => write!(f, "Transformation failed: {}", e),
            CompileError::Generate(e) => write!(f, "Generation failed: {}", e),
        }
    }
}

impl std::error::Error for CompileError {}

impl From<LexError> for CompileError {
    fn from(e: LexError) -> Self {
        CompileError::Lex(e)
    }
}

impl From<ParseError> for CompileError {
    fn from(e: ParseError) -> Self {
        CompileError::Parse(e)
    }
}

impl From<TransformError> for CompileError {
    fn from(e: TransformError) -> Self {
        CompileError::Transform(e)
    }
}

impl From<GenerateError> for CompileError {
    fn from(e: GenerateError) -> Self {
        CompileError::Generate(e)
    }
}

/// Compile lisc source text to target code
pub fn compile(source: &str) -> Result<String, CompileError> {
    let tokens = lex(source)?;
    let program = parse(&tokens)?;
    let output = transform(program)?;
    let code = generate(&output)?;

    Ok(code)
}
