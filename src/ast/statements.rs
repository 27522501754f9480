use std::fmt::Display;

use crate::{lexer::tokens::Token, Position};

use super::{expressions::Expression, types::Type};

/// A TinyC statement.
///
/// `AnnotatedWhile` is a while-loop carrying verification annotations:
/// the loop invariant, an optional ranking expression (`term`) and an
/// optional bound identifier. The term and bound can only be present
/// when an invariant is.
#[derive(Debug, Clone)]
pub enum Statement {
    Block {
        position: Position,
        statements: Vec<Statement>,
    },
    Declaration {
        ty: Type,
        name: Token,
        init: Option<Expression>,
    },
    Expression {
        position: Position,
        expression: Expression,
    },
    If {
        position: Position,
        condition: Expression,
        consequence: Box<Statement>,
        alternative: Option<Box<Statement>>,
    },
    Return {
        position: Position,
        expression: Option<Expression>,
    },
    While {
        position: Position,
        condition: Expression,
        body: Box<Statement>,
    },
    AnnotatedWhile {
        position: Position,
        condition: Expression,
        body: Box<Statement>,
        invariant: Expression,
        term: Option<Expression>,
        bound: Option<Token>,
    },
    Break {
        position: Position,
    },
    Continue {
        position: Position,
    },
    Assume {
        keyword: Token,
        condition: Expression,
    },
    Assert {
        keyword: Token,
        condition: Expression,
    },
}

impl Statement {
    pub fn position(&self) -> &Position {
        match self {
            Statement::Block { position, .. } => position,
            Statement::Declaration { name, .. } => &name.span.start,
            Statement::Expression { position, .. } => position,
            Statement::If { position, .. } => position,
            Statement::Return { position, .. } => position,
            Statement::While { position, .. } => position,
            Statement::AnnotatedWhile { position, .. } => position,
            Statement::Break { position } => position,
            Statement::Continue { position } => position,
            Statement::Assume { keyword, .. } => &keyword.span.start,
            Statement::Assert { keyword, .. } => &keyword.span.start,
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Block { statements, .. } => {
                write!(f, "Block[")?;
                for (i, statement) in statements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", statement)?;
                }
                write!(f, "]")
            }
            Statement::Declaration { ty, name, init } => match init {
                Some(init) => write!(f, "Declaration_{}[{},{}]", name.value, ty, init),
                None => write!(f, "Declaration_{}[{}]", name.value, ty),
            },
            Statement::Expression { expression, .. } => write!(f, "Expression[{}]", expression),
            Statement::If {
                condition,
                consequence,
                alternative,
                ..
            } => match alternative {
                Some(alternative) => {
                    write!(f, "If[{},{},{}]", condition, consequence, alternative)
                }
                None => write!(f, "If[{},{}]", condition, consequence),
            },
            Statement::Return { expression, .. } => match expression {
                Some(expression) => write!(f, "Return[{}]", expression),
                None => write!(f, "Return[]"),
            },
            Statement::While {
                condition, body, ..
            } => write!(f, "While[{},{}]", condition, body),
            Statement::AnnotatedWhile {
                condition,
                body,
                invariant,
                term,
                bound,
                ..
            } => {
                write!(f, "AnnotatedWhile[{},{},{}", condition, body, invariant)?;
                if let Some(term) = term {
                    write!(f, ",{}", term)?;
                }
                if let Some(bound) = bound {
                    write!(f, ",{}", bound.value)?;
                }
                write!(f, "]")
            }
            Statement::Break { .. } => write!(f, "Break[]"),
            Statement::Continue { .. } => write!(f, "Continue[]"),
            Statement::Assume { condition, .. } => write!(f, "Assume[{}]", condition),
            Statement::Assert { condition, .. } => write!(f, "Assert[{}]", condition),
        }
    }
}
