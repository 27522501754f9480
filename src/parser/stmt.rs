use crate::{
    ast::ast::AstFactory,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{TokenKind, TokenSource},
};

use super::{
    expr::parse_expr,
    lookups::{starts_expression, starts_statement, BindingPower},
    parser::Parser,
    types::parse_type,
};

/// Statement dispatch over the current token's FIRST set.
///
/// `inner` marks statements appearing as the direct body of `if`/`else`
/// or a loop, without enclosing braces. A declaration there is
/// tolerated with a diagnostic but still parsed and returned.
pub fn parse_stmt<S: TokenSource, F: AstFactory>(
    parser: &mut Parser<'_, S, F>,
    inner: bool,
) -> Result<F::Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::Break => parse_break_stmt(parser),
        TokenKind::Continue => parse_continue_stmt(parser),
        TokenKind::If => parse_if_stmt(parser),
        TokenKind::OpenCurly => parse_block_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        TokenKind::While => parse_while_stmt(parser),

        TokenKind::Char | TokenKind::Int | TokenKind::Void => {
            if inner {
                let position = parser.current_token().span.start.clone();
                parser.report(&position, &ErrorImpl::DeclarationAsInnerStatement);
            }
            parse_declaration_stmt(parser)
        }

        TokenKind::Assume => {
            let keyword = parser.current_token().clone();
            let condition = parse_annotated_expr(parser, TokenKind::Assume)?;
            Ok(parser.factory().create_assume_statement(keyword, condition))
        }
        TokenKind::Assert => {
            let keyword = parser.current_token().clone();
            let condition = parse_annotated_expr(parser, TokenKind::Assert)?;
            Ok(parser.factory().create_assert_statement(keyword, condition))
        }

        kind if starts_expression(kind) => parse_expression_stmt(parser),

        _ => {
            let token = parser.current_token().clone();
            Err(parser.fail(
                ErrorImpl::ExpectedStatement {
                    got: token.value.clone(),
                },
                token.span.start,
            ))
        }
    }
}

fn parse_inner_stmt<S: TokenSource, F: AstFactory>(
    parser: &mut Parser<'_, S, F>,
) -> Result<F::Stmt, Error> {
    parse_stmt(parser, true)
}

/// `{ stmt* }`.
///
/// This is the grammar's only multi-statement recovery point: on EOF or
/// an unrecognized token the diagnostic is emitted, scanning stops, and
/// the statements accumulated so far still become a valid block. Errors
/// raised *inside* a statement are not caught here; they unwind to the
/// translation-unit driver.
pub fn parse_block_stmt<S: TokenSource, F: AstFactory>(
    parser: &mut Parser<'_, S, F>,
) -> Result<F::Stmt, Error> {
    let loc = parser.current_token().span.start.clone();
    parser.expect(TokenKind::OpenCurly)?;

    let mut statements = Vec::new();
    loop {
        match parser.current_token_kind() {
            kind if starts_statement(kind) => {
                statements.push(parse_stmt(parser, false)?);
            }
            TokenKind::CloseCurly => {
                parser.expect(TokenKind::CloseCurly)?;
                break;
            }
            TokenKind::EOF => {
                parser.report(&loc, &ErrorImpl::EndOfFileInBlock);
                break;
            }
            _ => {
                let position = parser.current_token().span.start.clone();
                let got = parser.current_token().value.clone();
                parser.report(&position, &ErrorImpl::ExpectedStatementOrBrace { got });
                break;
            }
        }
    }

    Ok(parser.factory().create_block_statement(loc, statements))
}

fn parse_break_stmt<S: TokenSource, F: AstFactory>(
    parser: &mut Parser<'_, S, F>,
) -> Result<F::Stmt, Error> {
    let loc = parser.current_token().span.start.clone();
    parser.expect(TokenKind::Break)?;
    parser.expect(TokenKind::Semicolon)?;
    Ok(parser.factory().create_break_statement(loc))
}

fn parse_continue_stmt<S: TokenSource, F: AstFactory>(
    parser: &mut Parser<'_, S, F>,
) -> Result<F::Stmt, Error> {
    let loc = parser.current_token().span.start.clone();
    parser.expect(TokenKind::Continue)?;
    parser.expect(TokenKind::Semicolon)?;
    Ok(parser.factory().create_continue_statement(loc))
}

fn parse_if_stmt<S: TokenSource, F: AstFactory>(
    parser: &mut Parser<'_, S, F>,
) -> Result<F::Stmt, Error> {
    let loc = parser.current_token().span.start.clone();
    parser.expect(TokenKind::If)?;
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Expression)?;
    parser.expect(TokenKind::CloseParen)?;

    let consequence = parse_inner_stmt(parser)?;
    let alternative = if parser.accept(TokenKind::Else) {
        Some(parse_inner_stmt(parser)?)
    } else {
        None
    };

    Ok(parser
        .factory()
        .create_if_statement(loc, condition, consequence, alternative))
}

fn parse_return_stmt<S: TokenSource, F: AstFactory>(
    parser: &mut Parser<'_, S, F>,
) -> Result<F::Stmt, Error> {
    let loc = parser.current_token().span.start.clone();
    parser.expect(TokenKind::Return)?;

    let expression = if parser.peek(TokenKind::Semicolon) {
        None
    } else {
        Some(parse_expr(parser, BindingPower::Expression)?)
    };
    parser.expect(TokenKind::Semicolon)?;

    Ok(parser.factory().create_return_statement(loc, expression))
}

/// `while (cond) body`, optionally annotated:
///
/// ```text
/// while (cond) invariant (inv) body
/// while (cond) invariant (inv) term (rank) body
/// while (cond) invariant (inv) term (rank; bound) body
/// ```
///
/// Without `invariant` a plain while node is built. With it, an
/// annotated node is built even when `term` is absent; a bound
/// identifier can only follow a ranking expression.
fn parse_while_stmt<S: TokenSource, F: AstFactory>(
    parser: &mut Parser<'_, S, F>,
) -> Result<F::Stmt, Error> {
    let loc = parser.current_token().span.start.clone();
    parser.expect(TokenKind::While)?;
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Expression)?;
    parser.expect(TokenKind::CloseParen)?;

    if !parser.accept(TokenKind::Invariant) {
        let body = parse_inner_stmt(parser)?;
        return Ok(parser.factory().create_while_statement(loc, condition, body));
    }

    parser.expect(TokenKind::OpenParen)?;
    let invariant = parse_expr(parser, BindingPower::Expression)?;
    parser.expect(TokenKind::CloseParen)?;

    let mut term = None;
    let mut bound = None;
    if parser.accept(TokenKind::Term) {
        parser.expect(TokenKind::OpenParen)?;
        term = Some(parse_expr(parser, BindingPower::Expression)?);
        if parser.accept(TokenKind::Semicolon) {
            bound = Some(parser.parse_identifier());
        }
        parser.expect(TokenKind::CloseParen)?;
    }

    let body = parse_inner_stmt(parser)?;
    Ok(parser
        .factory()
        .create_annotated_while_statement(loc, condition, body, invariant, term, bound))
}

/// `type name [= init] ;`
pub fn parse_declaration_stmt<S: TokenSource, F: AstFactory>(
    parser: &mut Parser<'_, S, F>,
) -> Result<F::Stmt, Error> {
    let ty = parse_type(parser)?;
    let name = parser.parse_identifier();

    let init = if parser.accept(TokenKind::Assignment) {
        Some(parse_expr(parser, BindingPower::Expression)?)
    } else {
        None
    };
    parser.expect(TokenKind::Semicolon)?;

    Ok(parser.factory().create_declaration_statement(ty, name, init))
}

fn parse_expression_stmt<S: TokenSource, F: AstFactory>(
    parser: &mut Parser<'_, S, F>,
) -> Result<F::Stmt, Error> {
    let loc = parser.current_token().span.start.clone();
    let expression = parse_expr(parser, BindingPower::Expression)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(parser.factory().create_expression_statement(loc, expression))
}

/// Shared grammar of `assume` and `assert`:
/// `keyword ( expression ) ;`
fn parse_annotated_expr<S: TokenSource, F: AstFactory>(
    parser: &mut Parser<'_, S, F>,
    kind: TokenKind,
) -> Result<F::Expr, Error> {
    parser.expect(kind)?;
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Expression)?;
    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::Semicolon)?;
    Ok(condition)
}
