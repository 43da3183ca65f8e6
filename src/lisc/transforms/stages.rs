//! Individual pipeline stages
//!
//! Each stage wraps one compiler phase behind the
//! [Runnable](crate::lisc::transforms::Runnable) interface, converting the
//! phase's typed error into a
//! [PipelineError::StageFailed](crate::lisc::transforms::PipelineError)
//! carrying the stage name.

use crate::lisc::ast::{output, source};
use crate::lisc::generator;
use crate::lisc::lexer::{self, Token};
use crate::lisc::parser;
use crate::lisc::transformer;
use crate::lisc::transforms::{PipelineError, Runnable};

/// Scan source text into tokens
///
/// # Input
/// Raw lisc source text
///
/// # Output
/// The token sequence, whitespace already discarded
pub struct Tokenize;

impl Tokenize {
    pub fn new() -> Self {
        Tokenize
    }
}

impl Default for Tokenize {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, Vec<Token>> for Tokenize {
    fn run(&self, input: String) -> Result<Vec<Token>, PipelineError> {
        lexer::lex(&input).map_err(|e| PipelineError::StageFailed {
            stage: "Tokenize".to_string(),
            message: e.to_string(),
        })
    }
}

// Accept borrowed source too, for callers that haven't allocated
impl Runnable<&str, Vec<Token>> for Tokenize {
    fn run(&self, input: &str) -> Result<Vec<Token>, PipelineError> {
        lexer::lex(input).map_err(|e| PipelineError::StageFailed {
            stage: "Tokenize".to_string(),
            message: e.to_string(),
        })
    }
}

/// Build the source tree from tokens
///
/// # Input
/// The token sequence produced by [Tokenize]
///
/// # Output
/// The source tree, one child per top-level form
pub struct Parse;

impl Parse {
    pub fn new() -> Self {
        Parse
    }
}

impl Default for Parse {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Vec<Token>, source::Program> for Parse {
    fn run(&self, input: Vec<Token>) -> Result<source::Program, PipelineError> {
        parser::parse(&input).map_err(|e| PipelineError::StageFailed {
            stage: "Parse".to_string(),
            message: e.to_string(),
        })
    }
}

/// Rewrite the source tree into the output tree
///
/// # Input
/// The source tree produced by [Parse]
///
/// # Output
/// The output tree, top-level calls wrapped as statements
pub struct Rewrite;

impl Rewrite {
    pub fn new() -> Self {
        Rewrite
    }
}

impl Default for Rewrite {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<source::Program, output::Program> for Rewrite {
    fn run(&self, input: source::Program) -> Result<output::Program, PipelineError> {
        transformer::transform(input).map_err(|e| PipelineError::StageFailed {
            stage: "Rewrite".to_string(),
            message: e.to_string(),
        })
    }
}

/// Render the output tree as target code
///
/// # Input
/// The output tree produced by [Rewrite]
///
/// # Output
/// Target code, one line per top-level statement
pub struct Emit;

impl Emit {
    pub fn new() -> Self {
        Emit
    }
}

impl Default for Emit {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<output::Program, String> for Emit {
    fn run(&self, input: output::Program) -> Result<String, PipelineError> {
        generator::generate(&input).map_err(|e| PipelineError::StageFailed {
            stage: "Emit".to_string(),
            message: e.to_string(),
        })
    }
}
