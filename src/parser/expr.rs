use crate::{
    ast::{
        ast::Expr,
        expressions::{BooleanLiteral, Identifier, InfixExpr, IntegerLiteral, PrefixExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Precedence climbing over the parser's NUD/LED tables.
///
/// Keeps folding infix operators into `left` while the peek token binds
/// tighter than `bp`. Equal binding power stops the loop, which makes every
/// infix operator left associative.
///
/// Nesting is bounded by `MAX_NESTING_DEPTH`; deeper input records an error
/// and yields no expression.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    if !parser.enter_nesting() {
        return None;
    }

    let expr = parse_nested_expr(parser, bp);
    parser.leave_nesting();
    expr
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.nud_handler(token_kind) else {
        parser.push_error(Error::new(
            ErrorImpl::MissingPrefixHandler { kind: token_kind },
            parser.current_token().clone(),
        ));
        return None;
    };

    log::trace!("nud {} at {:?}", token_kind, bp);
    let mut left = nud(parser)?;

    while !parser.peek_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let Some(led) = parser.led_handler(parser.peek_token_kind()) else {
            return Some(left);
        };

        parser.advance();
        log::trace!("led {} at {:?}", parser.current_token_kind(), bp);
        left = led(parser, left)?;
    }

    Some(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    Some(Expr::Identifier(Identifier {
        value: token.value.clone(),
        token,
    }))
}

/// Integer literals are read as plain decimal `i64`. A leading zero carries
/// no radix meaning, so `010` is ten and `09` is nine; only overflow is an
/// error.
pub fn parse_integer_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    match token.value.parse::<i64>() {
        Ok(value) => Some(Expr::Integer(IntegerLiteral { token, value })),
        Err(_) => {
            parser.push_error(Error::new(
                ErrorImpl::IntegerParseError {
                    literal: token.value.clone(),
                },
                token,
            ));
            None
        }
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    Some(Expr::Boolean(BooleanLiteral {
        value: token.kind == TokenKind::True,
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Some(Expr::Prefix(PrefixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    // Captured before advancing past the operator
    let bp = parser.current_binding_power();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Some(Expr::Infix(InfixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expr> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(expr)
}
