#![allow(clippy::module_inception)]

//! Front end of a small expression language: a pull-based lexer and a Pratt
//! parser producing an AST with a canonical, fully parenthesized rendering.

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;
