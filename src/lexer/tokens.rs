use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{Position, Span};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("char", TokenKind::Char);
        map.insert("int", TokenKind::Int);
        map.insert("void", TokenKind::Void);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("return", TokenKind::Return);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("sizeof", TokenKind::Sizeof);
        map.insert("invariant", TokenKind::Invariant);
        map.insert("term", TokenKind::Term);
        map.insert("assume", TokenKind::Assume);
        map.insert("assert", TokenKind::Assert);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Character,
    String,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,
    Ampersand,

    Semicolon,
    Colon,
    Question,
    Comma,

    PlusPlus,
    MinusMinus,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,
    Tilde,

    // Reserved
    Char,
    Int,
    Void,
    If,
    Else,
    While,
    Return,
    Break,
    Continue,
    Sizeof,
    Invariant,
    Term,
    Assume,
    Assert,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            TokenKind::EOF => "end of file",
            TokenKind::Number => "number",
            TokenKind::Character => "character constant",
            TokenKind::String => "string literal",
            TokenKind::Identifier => "identifier",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::Not => "!",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Or => "||",
            TokenKind::And => "&&",
            TokenKind::Ampersand => "&",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Question => "?",
            TokenKind::Comma => ",",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Percent => "%",
            TokenKind::Tilde => "~",
            TokenKind::Char => "char",
            TokenKind::Int => "int",
            TokenKind::Void => "void",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Return => "return",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Sizeof => "sizeof",
            TokenKind::Invariant => "invariant",
            TokenKind::Term => "term",
            TokenKind::Assume => "assume",
            TokenKind::Assert => "assert",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    /// Placeholder identifier emitted when the parser expected an
    /// identifier but found something else.
    pub fn missing_identifier() -> Token {
        Token {
            kind: TokenKind::Identifier,
            value: String::from("<missing>"),
            span: Span {
                start: Position::error(),
                end: Position::error(),
            },
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Pull interface the parser consumes tokens through.
///
/// Implementations must keep yielding the end-of-file sentinel once the
/// input is exhausted; the parser's lookahead window reads one token
/// past whatever it has consumed.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// Adapts a tokenized vector (as produced by `tokenize`) to the
/// `TokenSource` contract.
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream { tokens, pos: 0 }
    }

    fn end_of_file(&self) -> Token {
        match self.tokens.last() {
            Some(token) if token.kind == TokenKind::EOF => token.clone(),
            _ => Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span {
                    start: Position::error(),
                    end: Position::error(),
                },
            },
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        match self.tokens.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                token.clone()
            }
            None => self.end_of_file(),
        }
    }
}
