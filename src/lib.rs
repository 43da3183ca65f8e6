//! # lisc
//!
//! A compiler for a minimal S-expression call language.
//!
//! The pipeline has four stages: the lexer turns source text into tokens,
//! the parser builds a source tree, the transformer rewrites it into an
//! output tree, and the generator renders that tree as call-expression
//! code. The [compiler module](lisc::compiler) chains all four behind a
//! single entry point.
//!
//! ```rust,ignore
//! use lisc::lisc::compiler::compile;
//!
//! let code = compile("(add 1 2)")?;
//! assert_eq!(code, "add(1, 2);");
//! ```

pub mod lisc;
