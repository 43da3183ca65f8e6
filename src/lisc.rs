//! Main module for the lisc compiler library

pub mod ast;
pub mod compiler;
pub mod generator;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod transformer;
pub mod transforms;

#[cfg(test)]
pub mod testing;
