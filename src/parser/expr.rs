use crate::{
    ast::ast::AstFactory,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, TokenSource},
};

use super::{
    lookups::{binding_power, is_type_token, BindingPower},
    parser::Parser,
    types::parse_type,
};

/// Precedence-climbing expression parser.
///
/// Parses an operand, then keeps consuming operators whose left-binding
/// power is at least `min_bp`, dispatching on the consumed token:
/// bracketed forms (`[`, `(`, `?`) get their own sub-parsers, operators
/// without a right-binding power become postfix unary nodes, everything
/// else recurses into its right operand at the operator's right-binding
/// power and becomes a binary node.
pub fn parse_expr<S: TokenSource, F: AstFactory>(
    parser: &mut Parser<'_, S, F>,
    min_bp: BindingPower,
) -> Result<F::Expr, Error> {
    let mut expr = parse_operand(parser)?;

    loop {
        let token = parser.current_token().clone();
        let Some((left_bp, right_bp)) = binding_power(token.kind) else {
            return Ok(expr);
        };
        if left_bp < min_bp {
            return Ok(expr);
        }

        parser.advance();
        expr = match token.kind {
            TokenKind::OpenBracket => parse_array_access(parser, expr, token)?,
            TokenKind::OpenParen => parse_call_expr(parser, expr, token)?,
            TokenKind::Question => parse_conditional_expr(parser, expr, token)?,
            _ => match right_bp {
                None => parser.factory().create_unary_expression(token, true, expr),
                Some(bp) => {
                    let right = parse_expr(parser, bp)?;
                    parser.factory().create_binary_expression(token, expr, right)
                }
            },
        };
    }
}

fn parse_operand<S: TokenSource, F: AstFactory>(
    parser: &mut Parser<'_, S, F>,
) -> Result<F::Expr, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Ampersand
        | TokenKind::Star
        | TokenKind::Not
        | TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::PlusPlus
        | TokenKind::MinusMinus
        | TokenKind::Sizeof
        | TokenKind::Tilde => {
            parser.advance();
            let operand = parse_expr(parser, BindingPower::Unary)?;
            Ok(parser.factory().create_unary_expression(token, false, operand))
        }

        TokenKind::OpenParen => {
            parser.expect(TokenKind::OpenParen)?;
            if is_type_token(parser.current_token_kind()) {
                // A cast. The type is still parsed to keep the token
                // stream consistent, but casts cannot be constructed:
                // report and hand back the inner operand so parsing
                // continues.
                let _ty = parse_type(parser)?;
                parser.expect(TokenKind::CloseParen)?;
                let operand = parse_expr(parser, BindingPower::Cast)?;
                parser.report(&token.span.start, &ErrorImpl::CastUnsupported);
                Ok(operand)
            } else {
                let expr = parse_expr(parser, BindingPower::Expression)?;
                parser.expect(TokenKind::CloseParen)?;
                Ok(expr)
            }
        }

        TokenKind::Identifier
        | TokenKind::Number
        | TokenKind::Character
        | TokenKind::String => {
            parser.advance();
            Ok(parser.factory().create_primary_expression(token))
        }

        _ => Err(parser.fail(
            ErrorImpl::ExpectedExpression {
                got: token.value.clone(),
            },
            token.span.start.clone(),
        )),
    }
}

/// `expr [ index ]` — encoded as a binary node whose operator token is
/// the `[`.
fn parse_array_access<S: TokenSource, F: AstFactory>(
    parser: &mut Parser<'_, S, F>,
    expr: F::Expr,
    token: Token,
) -> Result<F::Expr, Error> {
    let index = parse_expr(parser, BindingPower::Expression)?;
    parser.expect(TokenKind::CloseBracket)?;
    Ok(parser.factory().create_binary_expression(token, expr, index))
}

/// `callee ( arg , arg , ... )` — each argument is parsed at assignment
/// precedence so that `,` separates arguments.
fn parse_call_expr<S: TokenSource, F: AstFactory>(
    parser: &mut Parser<'_, S, F>,
    callee: F::Expr,
    token: Token,
) -> Result<F::Expr, Error> {
    let mut arguments = vec![];

    if !parser.peek(TokenKind::CloseParen) {
        loop {
            arguments.push(parse_expr(parser, BindingPower::Assignment)?);
            if !parser.accept(TokenKind::Comma) {
                break;
            }
        }
    }
    parser.expect(TokenKind::CloseParen)?;

    Ok(parser.factory().create_call_expression(token, callee, arguments))
}

/// `cond ? consequence : alternative` — the alternative is parsed at
/// conditional precedence, making the operator right-associative.
fn parse_conditional_expr<S: TokenSource, F: AstFactory>(
    parser: &mut Parser<'_, S, F>,
    condition: F::Expr,
    token: Token,
) -> Result<F::Expr, Error> {
    let consequence = parse_expr(parser, BindingPower::Expression)?;
    parser.expect(TokenKind::Colon)?;
    let alternative = parse_expr(parser, BindingPower::Conditional)?;

    Ok(parser
        .factory()
        .create_conditional_expression(token, condition, consequence, alternative))
}
