//! Tokenizer for DIY Lisp, built on `logos`.
//!
//! Whitespace and `;` line comments are skipped. Every other run of input
//! becomes a [`Token`] with its byte [`Span`]; input that matches nothing
//! becomes a [`TokenKind::Error`] token so the parser can report it with a
//! position instead of the lexer stopping early.

use logos::Logos;
use std::fmt;

/// Byte range of a token in the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        Span {
            start: range.start,
            end: range.end,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Why a run of input could not be tokenized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LexError {
    /// Digits that do not fit in an `i64`.
    IntegerOutOfRange,
    #[default]
    UnexpectedInput,
}

/// Raw token from logos, before errors are folded into [`TokenKind`].
#[derive(Logos, Clone, Debug, PartialEq, Eq)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r";[^\n]*")]
enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("'")]
    Quote,

    #[token("#t", |_| true)]
    #[token("#f", |_| false)]
    Bool(bool),

    #[regex(r"-?[0-9]+", |lex| lex.slice().parse::<i64>().map_err(|_| LexError::IntegerOutOfRange), priority = 3)]
    Int(i64),

    #[regex(r#""([^"\\]|\\(.|\n))*""#, |lex| unescape(lex.slice()))]
    Str(String),

    // Opening quote with no closing one before end of input.
    #[regex(r#""([^"\\]|\\(.|\n))*"#)]
    UnterminatedStr,

    #[regex(r#"[^\s()'";]+"#, |lex| lex.slice().to_owned(), priority = 1)]
    Symbol(String),
}

/// Kind of a lexed token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    LParen,
    RParen,
    /// `'`, shorthand for `(quote ...)`.
    Quote,
    Bool(bool),
    Int(i64),
    /// String literal with escapes already resolved.
    Str(String),
    /// A string literal that reaches end of input without its closing quote.
    UnterminatedStr,
    Symbol(String),
    /// Input no rule accepts.
    Error(LexError),
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::Quote => TokenKind::Quote,
            RawToken::Bool(b) => TokenKind::Bool(b),
            RawToken::Int(n) => TokenKind::Int(n),
            RawToken::Str(s) => TokenKind::Str(s),
            RawToken::UnterminatedStr => TokenKind::UnterminatedStr,
            RawToken::Symbol(name) => TokenKind::Symbol(name),
        }
    }
}

/// A token and where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Strip the surrounding quotes and resolve backslash escapes.
///
/// `\n` and `\t` become control characters; any other escaped character
/// (including `"` and `\`) stands for itself.
fn unescape(literal: &str) -> String {
    let body = &literal[1..literal.len() - 1];
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

/// Tokenize the whole source.
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let kind = result.map_or_else(TokenKind::Error, TokenKind::from);
        tokens.push(Token { kind, span });
    }
    tokens
}
