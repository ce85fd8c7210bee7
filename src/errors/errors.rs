use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A parse failure together with the position of the token that caused it.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            // Unrecognised input has nothing more useful to say than its name.
            ErrorImpl::UnexpectedToken {
                kind: TokenKind::Illegal,
            } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { kind: TokenKind::EOF } => ErrorTip::Suggestion(
                String::from("Input ended where an operand was expected"),
            ),
            ErrorImpl::UnexpectedToken { kind } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, an expression cannot start here",
                kind
            )),
            ErrorImpl::ExpectedToken { want, have } => ErrorTip::Suggestion(format!(
                "Expected `{}`, found `{}`, is a delimiter missing?",
                want, have
            )),
        }
    }
}

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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    /// No prefix rule is registered for a token in operand position.
    #[error("unexpected token: {kind}")]
    UnexpectedToken { kind: TokenKind },
    /// A required delimiter is missing.
    #[error("expected {want}, found {have}")]
    ExpectedToken { want: TokenKind, have: TokenKind },
}
