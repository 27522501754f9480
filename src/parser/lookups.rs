//! Token classification tables for the parser.
//!
//! The expression grammar is entirely table-driven: [`binding_power`]
//! maps an operator token to its pair of binding strengths, and the
//! FIRST-set predicates below drive single-token statement and type
//! dispatch.

use crate::lexer::tokens::TokenKind;

/// Binding strengths, weakest first.
///
/// The climb loop keeps consuming while the current operator's
/// left-binding power is at least the minimum it was entered with. A
/// left-associative operator therefore recurses one level tighter than
/// its own strength; a right-associative one recurses at its own
/// strength.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Expression,
    Assignment,
    Conditional,
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Cast,
    Unary,
    Postfix,
}

/// Left- and right-binding power of an operator token.
///
/// Returns `None` for tokens that are not infix/postfix operators. A
/// `None` right-binding power marks a strictly postfix operator; `[`,
/// `(` and `?` carry one too since their right side is bracketed rather
/// than climbed into directly.
pub fn binding_power(kind: TokenKind) -> Option<(BindingPower, Option<BindingPower>)> {
    match kind {
        TokenKind::Assignment => Some((BindingPower::Assignment, Some(BindingPower::Assignment))),
        TokenKind::Question => Some((BindingPower::Conditional, None)),
        TokenKind::Or => Some((BindingPower::LogicalOr, Some(BindingPower::LogicalAnd))),
        TokenKind::And => Some((BindingPower::LogicalAnd, Some(BindingPower::Equality))),
        TokenKind::Equals | TokenKind::NotEquals => {
            Some((BindingPower::Equality, Some(BindingPower::Relational)))
        }
        TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals => {
            Some((BindingPower::Relational, Some(BindingPower::Additive)))
        }
        TokenKind::Plus | TokenKind::Dash => {
            Some((BindingPower::Additive, Some(BindingPower::Multiplicative)))
        }
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => {
            Some((BindingPower::Multiplicative, Some(BindingPower::Cast)))
        }
        TokenKind::OpenBracket | TokenKind::OpenParen => Some((BindingPower::Postfix, None)),
        TokenKind::PlusPlus | TokenKind::MinusMinus => Some((BindingPower::Postfix, None)),
        _ => None,
    }
}

/// Tokens that may begin an operand as a prefix operator.
pub fn is_prefix_operator(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Ampersand
            | TokenKind::Star
            | TokenKind::Not
            | TokenKind::Plus
            | TokenKind::Dash
            | TokenKind::PlusPlus
            | TokenKind::MinusMinus
            | TokenKind::Sizeof
            | TokenKind::Tilde
    )
}

/// Tokens that may begin a type.
pub fn is_type_token(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Char | TokenKind::Int | TokenKind::Void)
}

/// Tokens that may begin an expression.
pub fn starts_expression(kind: TokenKind) -> bool {
    is_prefix_operator(kind)
        || matches!(
            kind,
            TokenKind::OpenParen
                | TokenKind::Identifier
                | TokenKind::Number
                | TokenKind::Character
                | TokenKind::String
        )
}

/// Tokens that may begin a statement inside a block.
pub fn starts_statement(kind: TokenKind) -> bool {
    starts_expression(kind)
        || is_type_token(kind)
        || matches!(
            kind,
            TokenKind::Break
                | TokenKind::Continue
                | TokenKind::If
                | TokenKind::OpenCurly
                | TokenKind::Return
                | TokenKind::Semicolon
                | TokenKind::While
                | TokenKind::Assume
                | TokenKind::Assert
        )
}
