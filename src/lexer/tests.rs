//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and punctuation
//! - Illegal characters
//! - End of input handling

use super::{
    lexer::{tokenize, Lexer},
    tokens::{Token, TokenKind},
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_tokenize_delimiters() {
    init_logger();
    let tokens = tokenize("=+(){},;");

    let expected = vec![
        Token::new(TokenKind::Assignment, "="),
        Token::new(TokenKind::Plus, "+"),
        Token::new(TokenKind::OpenParen, "("),
        Token::new(TokenKind::CloseParen, ")"),
        Token::new(TokenKind::OpenCurly, "{"),
        Token::new(TokenKind::CloseCurly, "}"),
        Token::new(TokenKind::Comma, ","),
        Token::new(TokenKind::Semicolon, ";"),
        Token::new(TokenKind::EOF, ""),
    ];

    assert_eq!(tokens, expected);
}

#[test]
fn test_tokenize_program() {
    init_logger();
    let source = "let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
    return true;
} else {
    return false;
}

10 == 10;
10 != 9;";

    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "five"),
        (TokenKind::Assignment, "="),
        (TokenKind::Integer, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "ten"),
        (TokenKind::Assignment, "="),
        (TokenKind::Integer, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "add"),
        (TokenKind::Assignment, "="),
        (TokenKind::Fn, "fn"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "y"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "result"),
        (TokenKind::Assignment, "="),
        (TokenKind::Identifier, "add"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "ten"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Not, "!"),
        (TokenKind::Dash, "-"),
        (TokenKind::Slash, "/"),
        (TokenKind::Star, "*"),
        (TokenKind::Integer, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Integer, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Integer, "10"),
        (TokenKind::Greater, ">"),
        (TokenKind::Integer, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::If, "if"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Integer, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Integer, "10"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::True, "true"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Else, "else"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::False, "false"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Integer, "10"),
        (TokenKind::Equals, "=="),
        (TokenKind::Integer, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Integer, "10"),
        (TokenKind::NotEquals, "!="),
        (TokenKind::Integer, "9"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    let mut lexer = Lexer::new(source);
    for (kind, value) in expected {
        let token = lexer.next_token();
        assert_eq!(token.kind, kind, "unexpected kind for {:?}", value);
        assert_eq!(token.value, value);
    }
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("fn let true false if else return");

    assert_eq!(tokens[0].kind, TokenKind::Fn);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo _underscore CamelCase letter");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "_underscore");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "CamelCase");
    // Keyword prefixes do not split identifiers
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "letter");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_identifiers_stop_at_digits() {
    let tokens = tokenize("abc123");

    assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "abc"));
    assert_eq!(tokens[1], Token::new(TokenKind::Integer, "123"));
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("42 0 1234567890");

    assert_eq!(tokens[0], Token::new(TokenKind::Integer, "42"));
    assert_eq!(tokens[1], Token::new(TokenKind::Integer, "0"));
    assert_eq!(tokens[2], Token::new(TokenKind::Integer, "1234567890"));
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_negative_numbers_are_prefixed() {
    let tokens = tokenize("-5");

    assert_eq!(tokens[0], Token::new(TokenKind::Dash, "-"));
    assert_eq!(tokens[1], Token::new(TokenKind::Integer, "5"));
}

#[test]
fn test_two_char_operators_without_spaces() {
    let tokens = tokenize("a==b!=c=!d");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Not,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[1].value, "==");
    assert_eq!(tokens[3].value, "!=");
}

#[test]
fn test_operator_at_end_of_input() {
    let tokens = tokenize("!");

    assert_eq!(tokens, vec![Token::new(TokenKind::Not, "!"), Token::new(TokenKind::EOF, "")]);
}

#[test]
fn test_illegal_characters() {
    let tokens = tokenize("@ 5 # é");

    assert_eq!(tokens[0], Token::new(TokenKind::Illegal, "@"));
    assert_eq!(tokens[1], Token::new(TokenKind::Integer, "5"));
    assert_eq!(tokens[2], Token::new(TokenKind::Illegal, "#"));
    assert_eq!(tokens[3], Token::new(TokenKind::Illegal, "é"));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_empty_source() {
    let mut lexer = Lexer::new("");

    assert_eq!(lexer.next_token(), Token::new(TokenKind::EOF, ""));
}

#[test]
fn test_whitespace_only_source() {
    let tokens = tokenize(" \t\r\n  \n");

    assert_eq!(tokens, vec![Token::new(TokenKind::EOF, "")]);
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..5 {
        assert_eq!(lexer.next_token(), Token::new(TokenKind::EOF, ""));
        assert!(lexer.at_eof());
    }
}

#[test]
fn test_token_display() {
    assert_eq!(Token::new(TokenKind::Identifier, "foo").to_string(), "Identifier (foo)");
    assert_eq!(Token::new(TokenKind::Plus, "+").to_string(), "Plus");
}
