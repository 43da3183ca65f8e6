//! Inspection API for lisc programs
//!
//! This module provides an extensible API for processing lisc source with
//! different stages (tokens, source-ast, output-ast, code) and formats
//! (display, json).
//!
//! # Sample Sources
//!
//! The `sample_sources` module provides access to small canonical lisc
//! programs for testing and demos. These samples should be used instead of
//! copying source snippets around, so every consumer exercises the same
//! programs.
//!
//! ## Example Usage
//!
//! ```rust
//! use lisc::lisc::processor::sample_sources::LiscSources;
//!
//! // Get raw source text
//! let source = LiscSources::get_source("000-simple-call").unwrap();
//!
//! // Get tokenized content as JSON
//! let tokens = LiscSources::get_tokens("010-nested-calls").unwrap();
//!
//! // Get compiled target code
//! let code = LiscSources::get_compiled("000-simple-call").unwrap();
//! ```

use std::fmt;

use crate::lisc::lexer::Token;
use crate::lisc::transforms::standard;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingStage {
    Tokens,
    SourceAst,
    OutputAst,
    Code,
}

/// Represents the output format
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Display,
    Json,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "tokens-display" or "source-ast-json"
    ///
    /// The format suffix follows the last hyphen; the plain string "code"
    /// stands alone because compiled output has only one rendition.
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        if format_str == "code" {
            return Ok(ProcessingSpec {
                stage: ProcessingStage::Code,
                format: OutputFormat::Display,
            });
        }

        let (stage_str, format_part) = match format_str.rsplit_once('-') {
            Some(parts) => parts,
            None => return Err(ProcessingError::InvalidFormat(format_str.to_string())),
        };

        let stage = match stage_str {
            "tokens" => ProcessingStage::Tokens,
            "source-ast" => ProcessingStage::SourceAst,
            "output-ast" => ProcessingStage::OutputAst,
            "code" => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{}' not supported for stage 'code' (use plain 'code')",
                    format_part
                )))
            }
            _ => return Err(ProcessingError::InvalidStage(stage_str.to_string())),
        };

        let format = match format_part {
            "display" => OutputFormat::Display,
            "json" => OutputFormat::Json,
            _ => return Err(ProcessingError::InvalidFormatType(format_part.to_string())),
        };

        // Validate stage/format compatibility
        match (&stage, &format) {
            (ProcessingStage::SourceAst, OutputFormat::Display) => {
                return Err(ProcessingError::InvalidFormatType(
                    "Format 'display' not supported for stage 'source-ast' (only 'json')"
                        .to_string(),
                ))
            }
            (ProcessingStage::OutputAst, OutputFormat::Display) => {
                return Err(ProcessingError::InvalidFormatType(
                    "Format 'display' not supported for stage 'output-ast' (only 'json')"
                        .to_string(),
                ))
            }
            _ => {}
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Tokens,
                format: OutputFormat::Display,
            },
            ProcessingSpec {
                stage: ProcessingStage::Tokens,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::SourceAst,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::OutputAst,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Code,
                format: OutputFormat::Display,
            },
        ]
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self.stage {
            ProcessingStage::Tokens => "tokens",
            ProcessingStage::SourceAst => "source-ast",
            ProcessingStage::OutputAst => "output-ast",
            ProcessingStage::Code => return write!(f, "code"),
        };
        let format = match self.format {
            OutputFormat::Display => "display",
            OutputFormat::Json => "json",
        };
        write!(f, "{}-{}", stage, format)
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    SampleNotFound(String),
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    CompilationFailed(String),
    SerializationFailed(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::SampleNotFound(msg) => write!(f, "Sample not found: {}", msg),
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::CompilationFailed(msg) => write!(f, "Compilation failed: {}", msg),
            ProcessingError::SerializationFailed(msg) => {
                write!(f, "Serialization failed: {}", msg)
            }
        }
    }
}

/// Process lisc source according to the given specification
pub fn process(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Tokens => {
            let tokens = standard::TOKENS
                .run(source.to_string())
                .map_err(|e| ProcessingError::CompilationFailed(e.to_string()))?;
            format_tokens(&tokens, &spec.format)
        }
        ProcessingStage::SourceAst => {
            let program = standard::SOURCE_AST
                .run(source.to_string())
                .map_err(|e| ProcessingError::CompilationFailed(e.to_string()))?;
            to_json(&program)
        }
        ProcessingStage::OutputAst => {
            let program = standard::OUTPUT_AST
                .run(source.to_string())
                .map_err(|e| ProcessingError::CompilationFailed(e.to_string()))?;
            to_json(&program)
        }
        ProcessingStage::Code => standard::COMPILE
            .run(source.to_string())
            .map_err(|e| ProcessingError::CompilationFailed(e.to_string())),
    }
}

/// Format tokens according to the specified format
fn format_tokens(tokens: &[Token], format: &OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Display => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&token.to_string());
            }
            Ok(result)
        }
        OutputFormat::Json => to_json(&tokens),
    }
}

/// Serialize a value as pretty-printed JSON
fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ProcessingError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ProcessingError::SerializationFailed(e.to_string()))
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .into_iter()
        .map(|spec| spec.to_string())
        .collect()
}

/// Sample sources module for accessing canonical lisc programs
pub mod sample_sources {
    use super::*;

    /// Available sample programs (canonical sources)
    pub const AVAILABLE_SAMPLES: &[(&str, &str)] = &[
        ("000-simple-call", "(add 1 2)"),
        (
            "010-nested-calls",
            "(add (multiply 1 2) (subtraction 3 (division 4 (sqrt 5))))",
        ),
        ("020-string-argument", "(greet \"hi\")"),
        ("030-bare-literal", "42"),
        ("040-multiple-forms", "(print \"ready\")\n(add 1 (inc 2))"),
    ];

    /// Main interface for accessing lisc sample programs
    pub struct LiscSources;

    impl LiscSources {
        /// Get the source text of a sample program
        pub fn get_source(name: &str) -> Result<&'static str, ProcessingError> {
            AVAILABLE_SAMPLES
                .iter()
                .find(|(sample_name, _)| *sample_name == name)
                .map(|(_, source)| *source)
                .ok_or_else(|| {
                    ProcessingError::SampleNotFound(format!(
                        "Sample '{}' is not available. Available samples: {:?}",
                        name,
                        Self::list_samples()
                    ))
                })
        }

        /// Get sample content as tokens (JSON format)
        pub fn get_tokens(name: &str) -> Result<String, ProcessingError> {
            Self::get_processed(name, "tokens-json")
        }

        /// Get sample content processed with the specified format
        pub fn get_processed(name: &str, format: &str) -> Result<String, ProcessingError> {
            let source = Self::get_source(name)?;
            let spec = ProcessingSpec::from_string(format)?;
            process(source, &spec)
        }

        /// Get sample content compiled to target code
        pub fn get_compiled(name: &str) -> Result<String, ProcessingError> {
            Self::get_processed(name, "code")
        }

        /// List all available sample names
        pub fn list_samples() -> Vec<&'static str> {
            AVAILABLE_SAMPLES.iter().map(|(name, _)| *name).collect()
        }
    }

}
