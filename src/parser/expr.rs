use tracing::trace;

use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses one expression, extending it with infix operators for as long as
/// the next token binds tighter than `bp`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token = parser.advance();
    let Some(nud_fn) = parser.lookups().get_nud(token.kind) else {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken { kind: token.kind },
            token.span.start,
        ));
    };

    trace!(kind = %token.kind, bp = bp.0, "prefix");
    let mut left = nud_fn(parser, token)?;

    // While the next token binds tighter than bp, keep extending the lhs
    while parser
        .lookups()
        .infix_binding_power(parser.current_token_kind())
        > bp
    {
        let token = parser.advance();
        let Some(led_fn) = parser.lookups().get_led(token.kind) else {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken { kind: token.kind },
                token.span.start,
            ));
        };

        trace!(kind = %token.kind, bp = bp.0, "infix");
        left = led_fn(parser, left, token)?;
    }

    Ok(left)
}

pub fn parse_name_expr(_parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    Ok(Expr::Name {
        identifier: token.value,
    })
}

/// `( expr )`; the parentheses leave no trace in the tree.
pub fn parse_grouping_expr(parser: &mut Parser, _token: Token) -> Result<Expr, Error> {
    let expr = parse_expr(parser, BindingPower::DEFAULT)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_prefix_expr(parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    let bp = parser.lookups().prefix_binding_power(token.kind);
    let operand = parse_expr(parser, bp)?;

    Ok(Expr::Prefix {
        operator: token.kind,
        operand: Box::new(operand),
    })
}

pub fn parse_postfix_expr(_parser: &mut Parser, left: Expr, token: Token) -> Result<Expr, Error> {
    Ok(Expr::Postfix {
        operator: token.kind,
        operand: Box::new(left),
    })
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, token: Token) -> Result<Expr, Error> {
    let bp = parser.lookups().infix_binding_power(token.kind);
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary {
        operator: token.kind,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn parse_right_assoc_binary_expr(
    parser: &mut Parser,
    left: Expr,
    token: Token,
) -> Result<Expr, Error> {
    let bp = parser.lookups().infix_binding_power(token.kind).weaker();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary {
        operator: token.kind,
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// `callee ( [arg {, arg}] )`
pub fn parse_call_expr(parser: &mut Parser, left: Expr, _token: Token) -> Result<Expr, Error> {
    let mut arguments = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            arguments.push(parse_expr(parser, BindingPower::DEFAULT)?);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Call {
        callee: Box::new(left),
        arguments,
    })
}
