//! Composable stage pipeline
//!
//! The compiler's four stages are exposed a second way here: as values that
//! can be chained. Any type implementing [Runnable]`<I, O>` turns input of
//! type `I` into output of type `O`, and a [Transform] wraps such a stage so
//! further stages can be attached with `.then()`:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(Tokenize::new())   // String → Vec<Token>
//!     .then(Parse::new());     // Vec<Token> → source::Program
//! // Result: Transform<String, source::Program>
//! ```
//!
//! The compiler checks that each stage's input type matches the previous
//! stage's output type, so an ill-ordered pipeline does not build.
//!
//! The common prefixes of the full pipeline are pre-built as
//! `once_cell::sync::Lazy` statics in [standard]; the individual stages
//! live in [stages]. Callers who just want source-to-source compilation
//! should prefer [compile](crate::lisc::compiler::compile), which reports
//! typed errors instead of the stringly [PipelineError] used here.

pub mod stages;
pub mod standard;

use std::fmt;

/// Error produced by a pipeline run
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// Generic error with message
    Error(String),
    /// A named stage failed
    StageFailed { stage: String, message: String },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Error(msg) => write!(f, "{}", msg),
            PipelineError::StageFailed { stage, message } => {
                write!(f, "Stage '{}' failed: {}", stage, message)
            }
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<String> for PipelineError {
    fn from(s: String) -> Self {
        PipelineError::Error(s)
    }
}

impl From<&str> for PipelineError {
    fn from(s: &str) -> Self {
        PipelineError::Error(s.to_string())
    }
}

/// Trait for anything that can transform an input into an output
///
/// Implemented by the individual pipeline stages; the [Transform] struct
/// composes multiple `Runnable` implementations.
pub trait Runnable<I, O> {
    /// Execute this stage on the input
    fn run(&self, input: I) -> Result<O, PipelineError>;
}

/// A composed pipeline from type `I` to type `O`
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, PipelineError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, PipelineError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Attach a stage, returning a new transform with the stage's output type
    ///
    /// Chains this transform's output into the next stage's input. The
    /// stage's input type must match this transform's output type.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, PipelineError> {
        (self.run_fn)(input)
    }
}

// Transforms can themselves be used as stages
impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, PipelineError> {
        Transform::run(self, input)
    }
}
