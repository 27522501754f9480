use crate::{
    ast::{ast::AstFactory, types::BaseKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{TokenKind, TokenSource},
};

use super::parser::Parser;

/// `base-type '*'*`
///
/// Exactly one base-type keyword, then greedily consumed stars, each
/// wrapping the type built so far in a pointer. No arrays, no
/// user-defined types, no qualifiers.
pub fn parse_type<S: TokenSource, F: AstFactory>(
    parser: &mut Parser<'_, S, F>,
) -> Result<F::Ty, Error> {
    let kind = match parser.current_token_kind() {
        TokenKind::Char => BaseKind::Char,
        TokenKind::Int => BaseKind::Int,
        TokenKind::Void => BaseKind::Void,
        _ => {
            let token = parser.current_token().clone();
            return Err(parser.fail(
                ErrorImpl::ExpectedType {
                    got: token.value.clone(),
                },
                token.span.start,
            ));
        }
    };
    parser.advance();

    let mut ty = parser.factory().create_base_type(kind);
    while parser.accept(TokenKind::Star) {
        ty = parser.factory().create_pointer_type(ty);
    }

    Ok(ty)
}
