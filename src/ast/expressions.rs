use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

/// Expression Types
///
/// Fieldless mirror of the [`Expr`] variants.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Name,
    Prefix,
    Postfix,
    Binary,
    Call,
}

/// Expression node.
///
/// Every node owns its children. Grouping parentheses never produce a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A bare identifier.
    Name { identifier: String },
    /// A unary operator in front of its operand, e.g. `-x`.
    Prefix {
        operator: TokenKind,
        operand: Box<Expr>,
    },
    /// A unary operator after its operand, e.g. `x++`.
    Postfix {
        operator: TokenKind,
        operand: Box<Expr>,
    },
    Binary {
        operator: TokenKind,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
}

impl Expr {
    pub fn name(identifier: impl Into<String>) -> Self {
        Expr::Name {
            identifier: identifier.into(),
        }
    }

    pub fn prefix(operator: TokenKind, operand: Expr) -> Self {
        Expr::Prefix {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn postfix(operator: TokenKind, operand: Expr) -> Self {
        Expr::Postfix {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn binary(operator: TokenKind, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(callee: Expr, arguments: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            arguments,
        }
    }

    /// Returns the expression type of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Name { .. } => ExprType::Name,
            Expr::Prefix { .. } => ExprType::Prefix,
            Expr::Postfix { .. } => ExprType::Postfix,
            Expr::Binary { .. } => ExprType::Binary,
            Expr::Call { .. } => ExprType::Call,
        }
    }
}

/// Canonical S-expression rendering: `(prefix - x)`, `(postfix ++ x)`,
/// `(+ x y)`, `(call f x y)`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Name { identifier } => write!(f, "{}", identifier),
            Expr::Prefix { operator, operand } => write!(f, "(prefix {} {})", operator, operand),
            Expr::Postfix { operator, operand } => write!(f, "(postfix {} {})", operator, operand),
            Expr::Binary {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", operator, left, right),
            Expr::Call { callee, arguments } => {
                write!(f, "(call {}", callee)?;
                for argument in arguments {
                    write!(f, " {}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_name() {
        assert_eq!(Expr::name("x").to_string(), "x");
    }

    #[test]
    fn test_render_unary() {
        let expr = Expr::prefix(TokenKind::Dash, Expr::postfix(TokenKind::PlusPlus, Expr::name("x")));
        assert_eq!(expr.to_string(), "(prefix - (postfix ++ x))");
    }

    #[test]
    fn test_render_binary() {
        let expr = Expr::binary(
            TokenKind::Plus,
            Expr::binary(TokenKind::Star, Expr::name("x"), Expr::name("y")),
            Expr::name("z"),
        );
        assert_eq!(expr.to_string(), "(+ (* x y) z)");
    }

    #[test]
    fn test_render_call() {
        assert_eq!(Expr::call(Expr::name("f"), vec![]).to_string(), "(call f)");

        let expr = Expr::call(
            Expr::call(Expr::name("f"), vec![Expr::name("x")]),
            vec![Expr::name("y"), Expr::name("z")],
        );
        assert_eq!(expr.to_string(), "(call (call f x) y z)");
    }

    #[test]
    fn test_expr_type() {
        assert_eq!(Expr::name("x").get_expr_type(), ExprType::Name);
        assert_eq!(
            Expr::call(Expr::name("f"), vec![]).get_expr_type(),
            ExprType::Call
        );
        assert_eq!(
            Expr::binary(TokenKind::ShiftLeft, Expr::name("a"), Expr::name("b")).get_expr_type(),
            ExprType::Binary
        );
    }
}
