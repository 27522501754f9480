use crate::{
    ast::ast::AstFactory,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{TokenKind, TokenSource},
};

use super::{parser::Parser, stmt::parse_block_stmt, types::parse_type};

/// One top-level item: a variable declaration, a function prototype or
/// a function definition.
///
/// After `type name`, a `(` opens a parameter list. The single sequence
/// `( void )` means zero parameters — telling it apart from a `void`
/// *parameter* (`f(void x)`) is the grammar's one use of the second
/// lookahead token. Parameter names are optional; a definition body
/// (`{`) turns the item into a function definition, a `;` into a
/// prototype registered as an external declaration carrying the
/// function type. Malformed endings are diagnosed but still register
/// the external declaration.
pub fn parse_external_declaration<S: TokenSource, F: AstFactory>(
    parser: &mut Parser<'_, S, F>,
) -> Result<(), Error> {
    let mut ty = parse_type(parser)?;
    let name = parser.parse_identifier();

    match parser.current_token_kind() {
        TokenKind::OpenParen => {
            parser.expect(TokenKind::OpenParen)?;

            let mut parameter_types = Vec::new();
            let mut parameter_names = Vec::new();

            if parser.peek(TokenKind::Void) && parser.look_ahead_kind() == TokenKind::CloseParen {
                // No parameters.
                parser.expect(TokenKind::Void)?;
            } else if !parser.peek(TokenKind::CloseParen) {
                loop {
                    let parameter_type = parse_type(parser)?;
                    let parameter_name = if parser.peek(TokenKind::Identifier) {
                        Some(parser.parse_identifier())
                    } else {
                        None
                    };
                    parameter_types.push(parameter_type);
                    parameter_names.push(parameter_name);

                    if !parser.accept(TokenKind::Comma) {
                        break;
                    }
                }
            }
            parser.expect(TokenKind::CloseParen)?;

            ty = parser.factory().create_function_type(ty, parameter_types);

            match parser.current_token_kind() {
                TokenKind::OpenCurly => {
                    let body = parse_block_stmt(parser)?;
                    parser
                        .factory()
                        .create_function_definition(ty, name, parameter_names, body);
                    return Ok(());
                }
                TokenKind::Semicolon => {
                    parser.expect(TokenKind::Semicolon)?;
                }
                _ => {
                    let position = parser.current_token().span.start.clone();
                    let got = parser.current_token().value.clone();
                    parser.report(&position, &ErrorImpl::ExpectedFunctionBody { got });
                }
            }
        }

        TokenKind::Semicolon => {
            parser.expect(TokenKind::Semicolon)?;
        }

        _ => {
            let position = parser.current_token().span.start.clone();
            let got = parser.current_token().value.clone();
            parser.report(&position, &ErrorImpl::MalformedExternalDeclaration { got });
        }
    }

    parser.factory().create_external_declaration(ty, name);
    Ok(())
}
