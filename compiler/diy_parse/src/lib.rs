//! Reader for DIY Lisp.
//!
//! Turns source text into [`Value`] trees: atoms for literals and symbols,
//! lists for parenthesized forms, and `(quote x)` for `'x`. Reader errors
//! are ordinary [`LispError`]s so the REPL and the evaluator report them the
//! same way.

use diy_lexer::{lex, LexError, Token, TokenKind};
use diy_stack::ensure_sufficient_stack;
use diy_value::errors::{
    empty_input, expected_eof, incomplete_expression, invalid_integer, unexpected_input,
    unterminated_string,
};
use diy_value::{LispResult, Value};

/// Parse exactly one expression.
///
/// Anything but whitespace and comments after it is an error.
pub fn parse(source: &str) -> LispResult<Value> {
    let mut parser = Parser::new(source);
    if parser.at_end() {
        return Err(empty_input());
    }
    let expr = parser.parse_expr()?;
    match parser.peek() {
        Some(token) => Err(expected_eof(token.span.start)),
        None => Ok(expr),
    }
}

/// Parse every top-level expression in `source`, in order.
pub fn parse_multiple(source: &str) -> LispResult<Vec<Value>> {
    let mut parser = Parser::new(source);
    let mut exprs = Vec::new();
    while !parser.at_end() {
        exprs.push(parser.parse_expr()?);
    }
    Ok(exprs)
}

/// Whether every `(` in `source` has been closed and no string literal is
/// left open.
///
/// Extra `)` count as complete: feeding them to [`parse`] reports the error.
pub fn is_complete(source: &str) -> bool {
    let mut depth = 0usize;
    for token in lex(source) {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => depth = depth.saturating_sub(1),
            TokenKind::UnterminatedStr => return false,
            _ => {}
        }
    }
    depth == 0
}

struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str) -> Self {
        Parser {
            source,
            tokens: lex(source),
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_expr(&mut self) -> LispResult<Value> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> LispResult<Value> {
        let Some(token) = self.advance() else {
            return Err(incomplete_expression());
        };
        let start = token.span.start;
        match token.kind {
            TokenKind::LParen => self.parse_list(),
            TokenKind::RParen => Err(expected_eof(start)),
            TokenKind::Quote => {
                let quoted = self.parse_expr()?;
                Ok(Value::list(vec![Value::symbol("quote"), quoted]))
            }
            TokenKind::Bool(b) => Ok(Value::Bool(b)),
            TokenKind::Int(n) => Ok(Value::int(n)),
            TokenKind::Str(s) => Ok(Value::string(s)),
            TokenKind::Symbol(name) => Ok(Value::symbol(&name)),
            TokenKind::UnterminatedStr => Err(unterminated_string(start)),
            TokenKind::Error(LexError::IntegerOutOfRange) => {
                Err(invalid_integer(self.slice(&token), start))
            }
            TokenKind::Error(LexError::UnexpectedInput) => {
                Err(unexpected_input(self.slice(&token), start))
            }
        }
    }

    /// Parse list elements up to and including the closing `)`.
    fn parse_list(&mut self) -> LispResult<Value> {
        let mut items = Vec::new();
        loop {
            match self.peek().map(|token| &token.kind) {
                None => return Err(incomplete_expression()),
                Some(TokenKind::RParen) => {
                    self.pos += 1;
                    return Ok(Value::list(items));
                }
                Some(_) => items.push(self.parse_expr()?),
            }
        }
    }

    fn slice(&self, token: &Token) -> &'src str {
        &self.source[token.span.start..token.span.end]
    }
}
