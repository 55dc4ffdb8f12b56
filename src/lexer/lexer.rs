use lazy_static::lazy_static;
use regex::Regex;

use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind};

lazy_static! {
    static ref SYMBOL_PATTERN: Regex = Regex::new("^[a-zA-Z_]+").unwrap();
    static ref INTEGER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// Pull-based scanner over a fully buffered source string.
///
/// `pos` indexes the byte held in `ch`, `read_pos` the byte after it. Once the
/// source is exhausted `ch` holds the `0` sentinel and `pos` stays at the
/// source length.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    read_pos: usize,
    ch: u8,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        let mut lexer = Lexer {
            source: source.into(),
            pos: 0,
            read_pos: 0,
            ch: 0,
        };

        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        self.ch = self.source.as_bytes().get(self.read_pos).copied().unwrap_or(0);
        self.pos = self.read_pos;
        self.read_pos += 1;
    }

    fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.read_char();
        }
    }

    fn peek_char(&self) -> u8 {
        self.source.as_bytes().get(self.read_pos).copied().unwrap_or(0)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn remainder(&self) -> &str {
        self.source.get(self.pos..).unwrap_or("")
    }

    fn skip_whitespace(&mut self) {
        while !self.at_eof() && matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    /// Returns the next token and advances past it.
    ///
    /// Never fails: unknown characters come back as `Illegal` tokens, and once
    /// the source is exhausted every call yields `EOF`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, "");
        }

        let token = match self.ch {
            b'=' => self.two_char_token(b'=', TokenKind::Equals, TokenKind::Assignment),
            b'!' => self.two_char_token(b'=', TokenKind::NotEquals, TokenKind::Not),
            b'+' => self.single_char_token(TokenKind::Plus),
            b'-' => self.single_char_token(TokenKind::Dash),
            b'*' => self.single_char_token(TokenKind::Star),
            b'/' => self.single_char_token(TokenKind::Slash),
            b'<' => self.single_char_token(TokenKind::Less),
            b'>' => self.single_char_token(TokenKind::Greater),
            b',' => self.single_char_token(TokenKind::Comma),
            b';' => self.single_char_token(TokenKind::Semicolon),
            b'(' => self.single_char_token(TokenKind::OpenParen),
            b')' => self.single_char_token(TokenKind::CloseParen),
            b'{' => self.single_char_token(TokenKind::OpenCurly),
            b'}' => self.single_char_token(TokenKind::CloseCurly),
            // These paths already leave the cursor past the token.
            ch if ch.is_ascii_alphabetic() || ch == b'_' => return self.read_symbol(),
            ch if ch.is_ascii_digit() => return self.read_integer(),
            _ => return self.read_illegal(),
        };

        self.read_char();

        log::trace!("lexed {}", token);
        token
    }

    fn single_char_token(&self, kind: TokenKind) -> Token {
        MK_TOKEN!(kind, (self.ch as char).to_string())
    }

    /// Emits `double` when the next byte is `second`, consuming it, otherwise
    /// `single`. The caller still advances past the final byte.
    fn two_char_token(&mut self, second: u8, double: TokenKind, single: TokenKind) -> Token {
        if self.peek_char() == second {
            let first = self.ch as char;
            self.read_char();
            MK_TOKEN!(double, format!("{}{}", first, self.ch as char))
        } else {
            self.single_char_token(single)
        }
    }

    fn read_symbol(&mut self) -> Token {
        let value = self.match_at_cursor(&SYMBOL_PATTERN);
        self.advance_n(value.len());

        let token = MK_TOKEN!(TokenKind::lookup_symbol(&value), value);
        log::trace!("lexed {}", token);
        token
    }

    fn read_integer(&mut self) -> Token {
        let value = self.match_at_cursor(&INTEGER_PATTERN);
        self.advance_n(value.len());

        let token = MK_TOKEN!(TokenKind::Integer, value);
        log::trace!("lexed {}", token);
        token
    }

    fn read_illegal(&mut self) -> Token {
        let value = self
            .remainder()
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_else(|| (self.ch as char).to_string());
        self.advance_n(value.len().max(1));

        log::trace!("lexed illegal character {:?}", value);
        MK_TOKEN!(TokenKind::Illegal, value)
    }

    fn match_at_cursor(&self, pattern: &Regex) -> String {
        pattern
            .find(self.remainder())
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| (self.ch as char).to_string())
    }
}

/// Drains a fresh lexer over `source`, including the trailing `EOF` token.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
