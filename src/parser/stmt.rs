use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Parses the statement starting at the current token.
///
/// On success the current token is the last token of the statement. On
/// failure the error has been recorded and `None` is returned.
pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Stmt> {
    let start_token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }

    let name_token = parser.current_token().clone();
    let name = Identifier {
        value: name_token.value.clone(),
        token: name_token,
    };

    if !parser.expect_peek(TokenKind::Assignment) {
        return None;
    }

    parser.advance();
    let value = parse_expr(parser, BindingPower::Lowest)?;

    if !parser.expect_peek(TokenKind::Semicolon) {
        return None;
    }

    Some(Stmt::Let(LetStmt {
        token: start_token,
        name,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Stmt> {
    let start_token = parser.current_token().clone();

    parser.advance();
    let return_value = parse_expr(parser, BindingPower::Lowest)?;

    if !parser.expect_peek(TokenKind::Semicolon) {
        return None;
    }

    Some(Stmt::Return(ReturnStmt {
        token: start_token,
        return_value,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Stmt> {
    let start_token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    // Trailing semicolons are optional here
    while parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Stmt::Expression(ExpressionStmt {
        token: start_token,
        expression,
    }))
}
