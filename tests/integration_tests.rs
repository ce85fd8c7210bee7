//! Integration tests for end-to-end parsing.
//!
//! These tests drive the public API from source bytes to the canonical
//! rendering or the reported error.

use exprparse::{
    ast::expressions::{Expr, ExprType},
    errors::errors::ErrorImpl,
    format_error,
    lexer::tokens::TokenKind,
    parser::lookups::{BindingPower, Lookups},
    ExprParser,
};

fn parse(source: &str) -> Result<Expr, exprparse::errors::errors::Error> {
    ExprParser::default().parse_expr(source.as_bytes())
}

#[test]
fn test_multiplicative_binds_tighter_than_additive() {
    assert_eq!(parse("x*y+z").unwrap().to_string(), "(+ (* x y) z)");
}

#[test]
fn test_shift_is_right_associative() {
    assert_eq!(
        parse("x << y << z").unwrap().to_string(),
        "(<< x (<< y z))"
    );
}

#[test]
fn test_nested_calls() {
    assert_eq!(
        parse("f(g(x, y), z)").unwrap().to_string(),
        "(call f (call g x y) z)"
    );
}

#[test]
fn test_postfix_operands_of_binary() {
    let expr = parse("x++ + y++").unwrap();

    assert_eq!(expr.to_string(), "(+ (postfix ++ x) (postfix ++ y))");
    assert_eq!(expr.get_expr_type(), ExprType::Binary);
}

#[test]
fn test_missing_close_paren() {
    let error = parse("(x;").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::ExpectedToken {
            want: TokenKind::CloseParen,
            have: TokenKind::Semicolon,
        }
    );
    assert_eq!(error.to_string(), "expected ), found ;");
}

#[test]
fn test_missing_operand() {
    let error = parse("x+").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            kind: TokenKind::EOF
        }
    );
    assert_eq!(error.to_string(), "unexpected token: EOF");
}

#[test]
fn test_multiline_source_with_comments() {
    let source = "f(a, // first\n   b /* second */ * c)";
    assert_eq!(parse(source).unwrap().to_string(), "(call f a (* b c))");
}

#[test]
fn test_non_utf8_input_is_illegal() {
    let error = ExprParser::default()
        .parse_expr(&[0xff, b'x'])
        .unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            kind: TokenKind::Illegal
        }
    );
}

#[test]
fn test_error_position_after_invalid_utf8_comment() {
    let error = ExprParser::default()
        .parse_expr(b"/*\xff*/ (x;")
        .unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::ExpectedToken {
            want: TokenKind::CloseParen,
            have: TokenKind::Semicolon,
        }
    );
    assert_eq!(error.get_position().0, 8);
}

#[test]
fn test_error_rendering_points_at_token() {
    let source = "f(x,\n  y;";
    let error = parse(source).unwrap_err();
    let rendered = format_error(&error, source, "input.expr");

    assert!(rendered.starts_with("Error: ExpectedToken"));
    assert!(rendered.contains("-> input.expr"));
    assert!(rendered.contains("2 | y;"));
    assert!(rendered.ends_with("  | -^"));
}

#[test]
fn test_deeply_nested_grouping() {
    let depth = 64;
    let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse(&source).unwrap(), Expr::name("x"));
}

#[test]
fn test_custom_operator_table() {
    let lookups = Lookups::builder()
        .grouping(TokenKind::OpenParen)
        .atom(TokenKind::Identifier)
        .left_assoc(BindingPower(1), &[TokenKind::Or])
        .left_assoc(BindingPower(2), &[TokenKind::And])
        .left_assoc(
            BindingPower(3),
            &[TokenKind::Equals, TokenKind::NotEquals],
        )
        .prefix(BindingPower(4), &[TokenKind::Not])
        .build();
    let parser = ExprParser::new(lookups);

    let expr = parser.parse_expr(b"a || !b && c == d").unwrap();
    assert_eq!(expr.to_string(), "(|| a (&& (prefix ! b) (== c d)))");

    let expr = parser.parse_expr(b"(a || b) && c").unwrap();
    assert_eq!(expr.to_string(), "(&& (|| a b) c)");
}
