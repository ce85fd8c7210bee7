//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::{format_error, get_line_at_position, Position};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            kind: TokenKind::Semicolon,
        },
        Position(10),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            kind: TokenKind::EOF,
        },
        Position(2),
    );

    assert_eq!(error.to_string(), "unexpected token: EOF");
}

#[test]
fn test_expected_token_message() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            want: TokenKind::CloseParen,
            have: TokenKind::Semicolon,
        },
        Position(2),
    );

    assert_eq!(error.get_error_name(), "ExpectedToken");
    assert_eq!(error.to_string(), "expected ), found ;");
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::ExpectedToken {
            want: TokenKind::CloseParen,
            have: TokenKind::Semicolon,
        }
    );
}

#[test]
fn test_error_tips() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            kind: TokenKind::Less,
        },
        Position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`<`")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_illegal_token_has_no_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            kind: TokenKind::Illegal,
        },
        Position(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

#[test]
fn test_get_line_at_position() {
    let source = "Hello, world!\nsecond\n\nTesting { }\n";

    let (line_number, line, line_pos) = get_line_at_position(source, 10);
    assert_eq!(line_number, 1);
    assert_eq!(line, "Hello, world!\n");
    assert_eq!(line_pos, 10);

    let (line_number, line, line_pos) = get_line_at_position(source, 30);
    assert_eq!(line_number, 4);
    assert_eq!(line, "Testing { }\n");
    assert_eq!(line_pos, 8);
}

#[test]
fn test_get_line_at_end_of_input() {
    assert_eq!(get_line_at_position("x+", 2), (1, "x+", 2));
    assert_eq!(get_line_at_position("x+\n", 3), (2, "", 0));
    assert_eq!(get_line_at_position("", 0), (1, "", 0));
}

#[test]
fn test_format_error() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            want: TokenKind::CloseParen,
            have: TokenKind::Semicolon,
        },
        Position(4),
    );

    let rendered = format_error(&error, "  (x;", "<expr>");
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(
        lines[0],
        "Error: ExpectedToken (Expected `)`, found `;`, is a delimiter missing?)"
    );
    assert_eq!(lines[1], "-> <expr>");
    assert_eq!(lines[2], "  |");
    assert_eq!(lines[3], "1 | (x;");
    assert_eq!(lines[4], "  | --^");
}

#[test]
fn test_format_error_without_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            kind: TokenKind::Illegal,
        },
        Position(0),
    );

    let rendered = format_error(&error, "@x", "<expr>");
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "Error: UnexpectedToken");
    assert_eq!(lines[3], "1 | @x");
    assert_eq!(lines[4], "  | ^");
}

#[test]
fn test_format_error_counts_characters_not_bytes() {
    // `é` is two bytes; the `;` sits at byte 9 but column 8.
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            want: TokenKind::CloseParen,
            have: TokenKind::Semicolon,
        },
        Position(9),
    );

    let rendered = format_error(&error, "/*é*/ (x;", "<expr>");
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[3], "1 | /*é*/ (x;");
    assert_eq!(lines[4], "  | --------^");
}
