//! Parser module for building expression trees.
//!
//! This module contains a Pratt parser that turns a token stream into an
//! [`Expr`](crate::ast::expressions::Expr). It is made of:
//!
//! - A parselet registry mapping token kinds to NUD (null denotation) and
//!   LED (left denotation) handlers, each with a binding power
//! - A builder for that registry and the reference operator table
//! - The precedence-climbing loop and the parselets it dispatches to
//!
//! The first syntax error ends the parse; there is no recovery.

pub mod expr;
pub mod lookups;
pub mod parser;
