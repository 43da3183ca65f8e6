//! Pre-built pipelines for common processing paths
//!
//! Each static is a prefix of the full compilation pipeline, built once on
//! first use. They all take owned source text, so intermediate results can
//! be requested without re-assembling the stage chain:
//!
//! ```rust,ignore
//! let tokens = TOKENS.run("(add 1 2)".to_string())?;
//! let code = COMPILE.run("(add 1 2)".to_string())?;
//! ```

use once_cell::sync::Lazy;

use crate::lisc::ast::{output, source};
use crate::lisc::lexer::Token;
use crate::lisc::transforms::stages::{Emit, Parse, Rewrite, Tokenize};
use crate::lisc::transforms::Transform;

/// Source text to tokens
pub static TOKENS: Lazy<Transform<String, Vec<Token>>> =
    Lazy::new(|| Transform::from_fn(Ok).then(Tokenize::new()));

/// Source text to the source tree
pub static SOURCE_AST: Lazy<Transform<String, source::Program>> =
    Lazy::new(|| Transform::from_fn(Ok).then(Tokenize::new()).then(Parse::new()));

/// Source text to the output tree
pub static OUTPUT_AST: Lazy<Transform<String, output::Program>> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(Tokenize::new())
        .then(Parse::new())
        .then(Rewrite::new())
});

/// Source text to target code
pub static COMPILE: Lazy<Transform<String, String>> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(Tokenize::new())
        .then(Parse::new())
        .then(Rewrite::new())
        .then(Emit::new())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_pipeline() {
        let tokens = TOKENS.run("(add 1 2)".to_string()).unwrap();
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn test_source_ast_pipeline() {
        let program = SOURCE_AST.run("(add 1 2)".to_string()).unwrap();
        assert_eq!(program.children.len(), 1);
    }

    #[test]
    fn test_output_ast_pipeline() {
        let program = OUTPUT_AST.run("(add 1 2)".to_string()).unwrap();
        assert!(program.body[0].is_statement());
    }

    #[test]
    fn test_compile_pipeline() {
        let code = COMPILE.run("(add 1 (inc 2))".to_string()).unwrap();
        assert_eq!(code, "add(1, inc(2));");
    }

    #[test]
    fn test_pipeline_error_names_the_stage() {
        let result = COMPILE.run("(add 1".to_string());
        let message = result.unwrap_err().to_string();
        assert_eq!(message, "Stage 'Parse' failed: Unterminated call: missing ')'");
    }
}
