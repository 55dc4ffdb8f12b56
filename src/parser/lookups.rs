use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::Expr, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

#[derive(PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,
}

lazy_static! {
    pub static ref BINDING_POWER_LOOKUP: BPLookup = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Equals, BindingPower::Equals);
        map.insert(TokenKind::NotEquals, BindingPower::Equals);
        map.insert(TokenKind::Less, BindingPower::LessGreater);
        map.insert(TokenKind::Greater, BindingPower::LessGreater);
        map.insert(TokenKind::Plus, BindingPower::Sum);
        map.insert(TokenKind::Dash, BindingPower::Sum);
        map.insert(TokenKind::Slash, BindingPower::Product);
        map.insert(TokenKind::Star, BindingPower::Product);
        map
    };
}

/// Binding power of `kind` when it appears in infix position.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    BINDING_POWER_LOOKUP
        .get(&kind)
        .copied()
        .unwrap_or(BindingPower::Lowest)
}

pub type NUDHandler = fn(&mut Parser) -> Option<Expr>;
pub type LEDHandler = fn(&mut Parser, Expr) -> Option<Expr>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Relational
    parser.led(TokenKind::Equals, parse_infix_expr);
    parser.led(TokenKind::NotEquals, parse_infix_expr);
    parser.led(TokenKind::Less, parse_infix_expr);
    parser.led(TokenKind::Greater, parse_infix_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, parse_infix_expr);
    parser.led(TokenKind::Dash, parse_infix_expr);
    parser.led(TokenKind::Star, parse_infix_expr);
    parser.led(TokenKind::Slash, parse_infix_expr);

    // Literals and symbols
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::Integer, parse_integer_expr);
    parser.nud(TokenKind::True, parse_boolean_expr);
    parser.nud(TokenKind::False, parse_boolean_expr);
    parser.nud(TokenKind::Not, parse_prefix_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
}

// Handler tables live on the parser, binding powers are shared
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
