use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::{Token, TokenKind};

/// A syntax error recorded by the parser.
///
/// Carries the token the parser was looking at when it gave up, which is the
/// only location information the front end tracks.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    token: Token,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, token: Token) -> Self {
        Error {
            internal_error: error_impl,
            token,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_token(&self) -> &Token {
        &self.token
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MissingPrefixHandler { .. } => "MissingPrefixHandler",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Semicolon,
                ..
            } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                self.token.value
            )),
            ErrorImpl::UnexpectedToken { expected, .. } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected {}",
                self.token.value, expected
            )),
            ErrorImpl::MissingPrefixHandler {
                kind: TokenKind::Illegal,
            } => ErrorTip::Suggestion(format!(
                "`{}` is not a recognised character",
                self.token.value
            )),
            ErrorImpl::MissingPrefixHandler {
                kind: TokenKind::EOF,
            } => ErrorTip::Suggestion(String::from("Input ended in the middle of an expression")),
            ErrorImpl::MissingPrefixHandler { .. } => ErrorTip::None,
            ErrorImpl::IntegerParseError { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                literal
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expressions may nest at most {} levels, try splitting this one with `let`",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    MissingPrefixHandler { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParseError { literal: String },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
