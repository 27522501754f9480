use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A lexical or syntactic error, tagged with the position it was
/// detected at.
///
/// Only unrecoverable errors are wrapped into this type and propagated;
/// block-local recovery and soft placement diagnostics go straight to
/// the diagnostic sink without unwinding the parser.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::ExpectedIdentifier { .. } => "ExpectedIdentifier",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::ExpectedType { .. } => "ExpectedType",
            ErrorImpl::ExpectedStatement { .. } => "ExpectedStatement",
            ErrorImpl::EndOfFileInBlock => "EndOfFileInBlock",
            ErrorImpl::ExpectedStatementOrBrace { .. } => "ExpectedStatementOrBrace",
            ErrorImpl::DeclarationAsInnerStatement => "DeclarationAsInnerStatement",
            ErrorImpl::CastUnsupported => "CastUnsupported",
            ErrorImpl::ExpectedFunctionBody { .. } => "ExpectedFunctionBody",
            ErrorImpl::MalformedExternalDeclaration { .. } => "MalformedExternalDeclaration",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::ExpectedToken { expected, .. } => {
                if *expected == TokenKind::Semicolon {
                    ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
                } else {
                    ErrorTip::None
                }
            }
            ErrorImpl::ExpectedIdentifier { .. } => ErrorTip::None,
            ErrorImpl::ExpectedExpression { .. } => ErrorTip::None,
            ErrorImpl::ExpectedType { .. } => {
                ErrorTip::Suggestion(String::from("types are `char`, `int` or `void`"))
            }
            ErrorImpl::ExpectedStatement { .. } => ErrorTip::None,
            ErrorImpl::EndOfFileInBlock => {
                ErrorTip::Suggestion(String::from("is a closing '}' missing?"))
            }
            ErrorImpl::ExpectedStatementOrBrace { .. } => ErrorTip::None,
            ErrorImpl::DeclarationAsInnerStatement => {
                ErrorTip::Suggestion(String::from("wrap the declaration in a block"))
            }
            ErrorImpl::CastUnsupported => ErrorTip::None,
            ErrorImpl::ExpectedFunctionBody { .. } => ErrorTip::None,
            ErrorImpl::MalformedExternalDeclaration { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl std::fmt::Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("expected '{expected}', but got '{got}'")]
    ExpectedToken { expected: TokenKind, got: String },
    #[error("expected identifier, but got '{got}'")]
    ExpectedIdentifier { got: String },
    #[error("expected expression, but got '{got}'")]
    ExpectedExpression { got: String },
    #[error("expected type, but got '{got}'")]
    ExpectedType { got: String },
    #[error("expected statement, but got '{got}'")]
    ExpectedStatement { got: String },
    #[error("reached end of file while parsing block")]
    EndOfFileInBlock,
    #[error("expected statement or '}}' while parsing block, but got '{got}'")]
    ExpectedStatementOrBrace { got: String },
    #[error("declaration cannot be an inner statement, use {{}}")]
    DeclarationAsInnerStatement,
    #[error("cast not supported")]
    CastUnsupported,
    #[error("expected '{{' or ';' while parsing function, but got '{got}'")]
    ExpectedFunctionBody { got: String },
    #[error("expected '(' or ';' while parsing external declaration, but got '{got}'")]
    MalformedExternalDeclaration { got: String },
}
