//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program-level entry
//! points. The parser pulls tokens from a [`Lexer`] and keeps two of them in
//! view: the current token and the one after it (the peek token).
//!
//! It maintains lookup tables for:
//! - NUD (null denotation) handlers for tokens that start an expression
//! - LED (left denotation) handlers for infix operators
//!
//! Syntax errors are collected rather than returned, so one bad statement
//! never stops the rest of the program from being parsed.

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        binding_power, create_token_lookups, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup,
    },
    stmt::parse_stmt,
};

/// Deepest chain of nested expressions `parse_expr` will descend into.
///
/// Each level costs native stack, so deeper input is reported as an error
/// instead of overflowing.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens
    lexer: Lexer,
    /// The token under examination
    current_token: Token,
    /// The token after `current_token`
    peek_token: Token,
    /// Syntax errors, in the order they were found
    errors: Vec<Error>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Number of `parse_expr` calls currently on the stack
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// Registers the expression handlers and reads two tokens so that both
    /// `current_token` and `peek_token` are populated before parsing begins.
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            current_token: Token::new(TokenKind::EOF, ""),
            peek_token: Token::new(TokenKind::EOF, ""),
            errors: vec![],
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            depth: 0,
        };

        create_token_lookups(&mut parser);

        parser.advance();
        parser.advance();
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Shifts the peek token into the current slot and pulls a new peek token.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = std::mem::replace(&mut self.peek_token, next);
    }

    /// Advances if the peek token has the expected kind.
    ///
    /// Otherwise records an `UnexpectedToken` error and leaves the cursor
    /// where it is.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> bool {
        if self.peek_is(expected_kind) {
            self.advance();
            true
        } else {
            self.push_error(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.peek_token.kind,
                },
                self.peek_token.clone(),
            ));
            false
        }
    }

    /// Enters one level of expression nesting.
    ///
    /// Past [`MAX_NESTING_DEPTH`] records a `NestingTooDeep` error and returns
    /// false without entering. Every successful call must be paired with
    /// [`Parser::leave_nesting`].
    pub fn enter_nesting(&mut self) -> bool {
        if self.depth >= MAX_NESTING_DEPTH {
            self.push_error(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.current_token.clone(),
            ));
            return false;
        }

        self.depth += 1;
        true
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn push_error(&mut self, error: Error) {
        log::debug!("syntax error at {}: {}", error.get_token(), error);
        self.errors.push(error);
    }

    /// Syntax errors found so far, oldest first.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn current_binding_power(&self) -> BindingPower {
        binding_power(self.current_token.kind)
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        binding_power(self.peek_token.kind)
    }

    pub fn nud_handler(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn led_handler(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, led_fn: LEDHandler) {
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Parses statements until the end of input.
    ///
    /// Always returns a program. Statements that fail to parse are left out
    /// and their errors are available through [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.advance();
        }

        log::trace!(
            "parsed {} statements with {} errors",
            program.statements.len(),
            self.errors.len()
        );
        program
    }
}

/// Parses `source` into a program.
///
/// # Returns
///
/// A tuple containing:
/// - The root Program (possibly missing statements that failed to parse)
/// - Every syntax error that was recorded, in order
pub fn parse(source: impl Into<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.errors)
}
