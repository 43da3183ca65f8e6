//! Abstract syntax tree definitions for the lisc compiler
//!
//! Two tree vocabularies live here. The [source] tree mirrors the shape of
//! the input text: nested calls over number and string literals. The
//! [output] tree is oriented toward code generation: top-level calls are
//! wrapped in expression statements and every call carries a distinct
//! identifier node for its callee.

pub mod output;
pub mod source;
