//! Lexical analysis module.
//!
//! This module contains the token source the parser pulls from. It handles:
//!
//! - On-demand tokenization of source bytes using regex patterns
//! - Recognition of identifiers, literals, operators and punctuation
//! - One token of lookahead (`peek`/`consume`)
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
