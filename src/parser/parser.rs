//! Parser entry point and per-parse state.
//!
//! [`ExprParser`] owns the parselet registry and is the public entry point.
//! Every call to [`ExprParser::parse_expr`] opens a fresh [`Parser`] session
//! that borrows the registry and owns its own lexer, so the registry is never
//! mutated while parsing and one `ExprParser` can serve many threads.

use tracing::debug;

use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    expr::parse_expr,
    lookups::{create_token_lookups, BindingPower, Lookups},
};

/// Reusable expression parser.
#[derive(Clone)]
pub struct ExprParser {
    lookups: Lookups,
}

impl ExprParser {
    /// Creates a parser driven by the given operator table.
    pub fn new(lookups: Lookups) -> Self {
        ExprParser { lookups }
    }

    /// Parses `source` as a single expression.
    ///
    /// Stops at the first error; no partial tree is returned. Input left
    /// over after a complete expression is not consumed.
    pub fn parse_expr(&self, source: &[u8]) -> Result<Expr, Error> {
        debug!(len = source.len(), "parsing expression");

        let mut parser = Parser::new(&self.lookups, source);
        let result = parse_expr(&mut parser, BindingPower::DEFAULT);

        match &result {
            Ok(expr) => debug!(%expr, "parsed expression"),
            Err(error) => debug!(%error, position = error.get_position().0, "parse failed"),
        }

        result
    }
}

impl Default for ExprParser {
    fn default() -> Self {
        ExprParser::new(create_token_lookups())
    }
}

/// State of a single parse: the registry it reads and the lexer it drains.
pub struct Parser<'a> {
    /// Operator table for this parse
    lookups: &'a Lookups,
    /// Token source with one token of lookahead
    lexer: Lexer,
}

impl<'a> Parser<'a> {
    pub fn new(lookups: &'a Lookups, source: &[u8]) -> Self {
        Parser {
            lookups,
            lexer: Lexer::new(source),
        }
    }

    pub fn lookups(&self) -> &'a Lookups {
        self.lookups
    }

    /// Returns the next token without advancing.
    pub fn current_token(&mut self) -> &Token {
        self.lexer.peek()
    }

    /// Returns the kind of the next token without advancing.
    pub fn current_token_kind(&mut self) -> TokenKind {
        self.lexer.peek().kind
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> Token {
        self.lexer.consume()
    }

    /// Consumes the next token if it is `expected_kind`.
    ///
    /// Otherwise fails with `ExpectedToken` at the offending token and leaves
    /// it unconsumed.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::ExpectedToken {
                    want: expected_kind,
                    have: token.kind,
                },
                token.span.start,
            ));
        }

        Ok(self.advance())
    }
}
