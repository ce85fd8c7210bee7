#![allow(clippy::module_inception)]

//! Precedence-climbing (Pratt) expression parser.
//!
//! Operators are registered in a table of prefix and infix parselets, each
//! with a binding power; a single loop in [`parser::expr::parse_expr`] drives
//! that table against a [`lexer::lexer::Lexer`] to build an [`ast::expressions::Expr`].
//!
//! ```ignore
//! let parser = ExprParser::default();
//! let expr = parser.parse_expr(b"x*y+z")?;
//! assert_eq!(expr.to_string(), "(+ (* x y) z)");
//! ```

use std::fmt::Write;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

pub use ast::expressions::Expr;
pub use errors::errors::ErrorImpl;
pub use parser::parser::ExprParser;

/// Byte offset into the parsed source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing byte `position`.
///
/// Returns the 1-based line number, the line text (with its newline, if any)
/// and the offset of `position` within that line. A position at or past the
/// end of the source maps to just after the last character.
pub fn get_line_at_position(source: &str, position: usize) -> (usize, &str, usize) {
    let pos = position.min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line, pos - start);
        }

        start = end;
        line_number += 1;
    }

    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => (line_number - 1, line, line.len()),
        _ => (line_number, "", 0),
    }
}

/// Renders a caret diagnostic for `error` against the source it came from.
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: ExpectedToken (Expected `)`, found `;`, is a delimiter missing?)
        -> <expr>
          |
        1 | (x;
          | --^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    let mut out = String::new();

    // Writing into a String cannot fail.
    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", file);
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let _ = writeln!(out, "{} | {}", line_str, line_text_removed.trim_end());

    // The marker is padded in characters, so count characters, not bytes.
    let arrows = line_text
        .get(removed_whitespace..line_pos)
        .map_or(0, |prefix| prefix.chars().count())
        + 1;

    let _ = write!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.len() - trimmed.len())
}
