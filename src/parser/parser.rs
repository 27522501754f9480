//! The TinyC parser.
//!
//! This module contains the main Parser struct and the translation-unit
//! driver. The parser is a recursive-descent recognizer with a
//! precedence-climbing expression core; it holds exactly two live
//! tokens ("current" and one token of lookahead) over a pull-based
//! token source and emits every AST node through the tree-builder
//! contract, never constructing nodes itself.

use crate::{
    ast::ast::{Ast, AstFactory, TranslationUnit},
    errors::{
        diagnostics::Diagnostic,
        errors::{Error, ErrorImpl},
    },
    lexer::tokens::{Token, TokenKind, TokenSource, TokenStream},
    Position,
};

use super::declarations::parse_external_declaration;

/// The main parser structure.
///
/// Generic over the token source and the tree builder, so that any
/// backend implementing [`AstFactory`] can reuse the grammar. The
/// diagnostic sink receives one rendered message per error; the parser
/// never queries it to decide control flow.
pub struct Parser<'d, S: TokenSource, F: AstFactory> {
    source: S,
    factory: F,
    diagnostic: &'d mut dyn Diagnostic,
    /// The token all FIRST-set decisions dispatch on
    token: Token,
    /// One token of lookahead beyond `token`
    look_ahead: Token,
}

impl<'d, S: TokenSource, F: AstFactory> Parser<'d, S, F> {
    pub fn new(mut source: S, factory: F, diagnostic: &'d mut dyn Diagnostic) -> Self {
        let token = source.next_token();
        let look_ahead = source.next_token();

        Parser {
            source,
            factory,
            diagnostic,
            token,
            look_ahead,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.token.kind
    }

    /// Returns the kind of the single lookahead token.
    pub fn look_ahead_kind(&self) -> TokenKind {
        self.look_ahead.kind
    }

    /// Shifts the lookahead into the current slot, pulls a fresh token
    /// from the source and returns the token that was current.
    pub fn advance(&mut self) -> Token {
        let pulled = self.source.next_token();
        std::mem::replace(
            &mut self.token,
            std::mem::replace(&mut self.look_ahead, pulled),
        )
    }

    /// Checks the current token's kind without consuming it.
    pub fn peek(&self, kind: TokenKind) -> bool {
        self.token.kind == kind
    }

    /// Consumes the current token if it has the given kind.
    pub fn accept(&mut self, kind: TokenKind) -> bool {
        if self.peek(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Requires a token of the given kind; reports and fails otherwise.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek(expected_kind) {
            Ok(self.advance())
        } else {
            Err(self.fail(
                ErrorImpl::ExpectedToken {
                    expected: expected_kind,
                    got: self.token.value.clone(),
                },
                self.token.span.start.clone(),
            ))
        }
    }

    /// Requires an identifier. On mismatch a diagnostic is reported and
    /// a placeholder identifier is returned instead of failing, so the
    /// enclosing declaration can still be built.
    pub fn parse_identifier(&mut self) -> Token {
        if self.peek(TokenKind::Identifier) {
            self.advance()
        } else {
            let error = ErrorImpl::ExpectedIdentifier {
                got: self.token.value.clone(),
            };
            let position = self.token.span.start.clone();
            self.report(&position, &error);
            Token::missing_identifier()
        }
    }

    /// Emits a diagnostic without unwinding; used at the block-local
    /// recovery point and for soft placement errors.
    pub fn report(&mut self, position: &Position, error: &ErrorImpl) {
        self.diagnostic.print_error(position, &error.to_string());
    }

    /// Emits a diagnostic and returns the error that unwinds to the
    /// translation-unit driver.
    pub fn fail(&mut self, error: ErrorImpl, position: Position) -> Error {
        self.report(&position, &error);
        Error::new(error, position)
    }

    pub fn factory(&mut self) -> &mut F {
        &mut self.factory
    }

    pub fn into_factory(self) -> F {
        self.factory
    }

    /// Parses external declarations until end of input. An
    /// unrecoverable error stops the whole unit immediately; whatever
    /// was registered with the builder before the stop is retained.
    pub fn parse_translation_unit(&mut self) -> Result<(), Error> {
        while !self.peek(TokenKind::EOF) {
            parse_external_declaration(self)?;
        }
        Ok(())
    }
}

/// Parses a tokenized translation unit into an AST.
///
/// This is the main entry point for parsing. It wires the token vector
/// to the default [`Ast`] builder and returns the translation unit the
/// builder accumulated, together with the outcome of the parse: on a
/// hard stop the unit holds the items registered before the error.
pub fn parse(
    tokens: Vec<Token>,
    diagnostic: &mut dyn Diagnostic,
) -> (TranslationUnit, Result<(), Error>) {
    let mut parser = Parser::new(TokenStream::new(tokens), Ast::new(), diagnostic);
    let result = parser.parse_translation_unit();

    (parser.into_factory().into_unit(), result)
}
