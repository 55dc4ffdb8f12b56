//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Pull-based tokenization, one token per `next_token` call
//! - Recognition of keywords, identifiers, integer literals and operators
//! - Whitespace skipping
//! - Unrecognised characters, surfaced as `Illegal` tokens

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
