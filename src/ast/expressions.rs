use std::fmt::Display;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// A TinyC expression.
///
/// Array indexing is encoded as a `Binary` node whose operator token is
/// the `[`. A `Conditional` retains all three parts.
#[derive(Debug, Clone)]
pub enum Expression {
    Primary {
        token: Token,
    },
    Unary {
        operator: Token,
        postfix: bool,
        operand: Box<Expression>,
    },
    Binary {
        operator: Token,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Call {
        token: Token,
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
    Conditional {
        token: Token,
        condition: Box<Expression>,
        consequence: Box<Expression>,
        alternative: Box<Expression>,
    },
}

impl Expression {
    /// Location of the node's leading token, for diagnostics.
    pub fn position(&self) -> &Position {
        match self {
            Expression::Primary { token } => &token.span.start,
            Expression::Unary { operator, .. } => &operator.span.start,
            Expression::Binary { operator, .. } => &operator.span.start,
            Expression::Call { token, .. } => &token.span.start,
            Expression::Conditional { token, .. } => &token.span.start,
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Primary { token } => {
                if token.kind == TokenKind::Identifier {
                    write!(f, "Var_{}", token.value)
                } else {
                    write!(f, "Const_{}", token.value)
                }
            }
            Expression::Unary {
                operator, operand, ..
            } => write!(f, "Unary_{}[{}]", operator.value, operand),
            Expression::Binary {
                operator,
                left,
                right,
            } => write!(f, "Binary_{}[{},{}]", operator.value, left, right),
            Expression::Call {
                token,
                callee,
                arguments,
            } => {
                write!(f, "Call_[{},{}", token.value, callee)?;
                for argument in arguments {
                    write!(f, ",{}", argument)?;
                }
                write!(f, "]")
            }
            Expression::Conditional {
                condition,
                consequence,
                alternative,
                ..
            } => write!(
                f,
                "Conditional[{},{},{}]",
                condition, consequence, alternative
            ),
        }
    }
}
