//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric, character and string literals with escape sequences
//! - Operators and punctuation
//! - Comments
//! - Error cases

use super::{
    lexer::tokenize,
    tokens::{TokenKind, TokenSource, TokenStream},
};

#[test]
fn test_tokenize_keywords() {
    let source = "char int void if else while return break continue sizeof".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Char);
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[2].kind, TokenKind::Void);
    assert_eq!(tokens[3].kind, TokenKind::If);
    assert_eq!(tokens[4].kind, TokenKind::Else);
    assert_eq!(tokens[5].kind, TokenKind::While);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::Break);
    assert_eq!(tokens[8].kind, TokenKind::Continue);
    assert_eq!(tokens[9].kind, TokenKind::Sizeof);
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_annotation_keywords() {
    let source = "invariant term assume assert".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Invariant);
    assert_eq!(tokens[1].kind, TokenKind::Term);
    assert_eq!(tokens[2].kind, TokenKind::Assume);
    assert_eq!(tokens[3].kind, TokenKind::Assert);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "CamelCase");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 0 100".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "100");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "multiple words" """#.to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "multiple words");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""hello\nworld" "tab\there" "backslash\\" "quote\"end""#.to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].value, "hello\nworld");
    assert_eq!(tokens[1].value, "tab\there");
    assert_eq!(tokens[2].value, "backslash\\");
    assert_eq!(tokens[3].value, "quote\"end");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_character_literals() {
    let source = r"'a' '\n' '\0' '\''".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Character);
    assert_eq!(tokens[0].value, "a");
    assert_eq!(tokens[1].kind, TokenKind::Character);
    assert_eq!(tokens[1].value, "\n");
    assert_eq!(tokens[2].kind, TokenKind::Character);
    assert_eq!(tokens[2].value, "\0");
    assert_eq!(tokens[3].kind, TokenKind::Character);
    assert_eq!(tokens[3].value, "'");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / % == != < > <= >= = && || & ! ~".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Dash);
    assert_eq!(tokens[2].kind, TokenKind::Star);
    assert_eq!(tokens[3].kind, TokenKind::Slash);
    assert_eq!(tokens[4].kind, TokenKind::Percent);
    assert_eq!(tokens[5].kind, TokenKind::Equals);
    assert_eq!(tokens[6].kind, TokenKind::NotEquals);
    assert_eq!(tokens[7].kind, TokenKind::Less);
    assert_eq!(tokens[8].kind, TokenKind::Greater);
    assert_eq!(tokens[9].kind, TokenKind::LessEquals);
    assert_eq!(tokens[10].kind, TokenKind::GreaterEquals);
    assert_eq!(tokens[11].kind, TokenKind::Assignment);
    assert_eq!(tokens[12].kind, TokenKind::And);
    assert_eq!(tokens[13].kind, TokenKind::Or);
    assert_eq!(tokens[14].kind, TokenKind::Ampersand);
    assert_eq!(tokens[15].kind, TokenKind::Not);
    assert_eq!(tokens[16].kind, TokenKind::Tilde);
    assert_eq!(tokens[17].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_punctuation() {
    let source = "( ) { } [ ] , ; : ?".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::OpenBracket);
    assert_eq!(tokens[5].kind, TokenKind::CloseBracket);
    assert_eq!(tokens[6].kind, TokenKind::Comma);
    assert_eq!(tokens[7].kind, TokenKind::Semicolon);
    assert_eq!(tokens[8].kind, TokenKind::Colon);
    assert_eq!(tokens[9].kind, TokenKind::Question);
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_increment_decrement() {
    let source = "++ -- + -".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::PlusPlus);
    assert_eq!(tokens[1].kind, TokenKind::MinusMinus);
    assert_eq!(tokens[2].kind, TokenKind::Plus);
    assert_eq!(tokens[3].kind, TokenKind::Dash);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_ampersand_vs_logical_and() {
    let source = "&p && q".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Ampersand);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::And);
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_line_comments() {
    let source = "int x; // this is a comment\nint y;".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::Semicolon);
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[4].value, "y");
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_block_comments() {
    let source = "int /* inline\ncomment */ x;".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::Semicolon);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_simple_declaration() {
    let source = "int x = 42;".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens.len(), 6); // int, x, =, 42, ;, EOF
    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "42");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_pointer_declaration() {
    let source = "char** argv;".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Char);
    assert_eq!(tokens[1].kind, TokenKind::Star);
    assert_eq!(tokens[2].kind, TokenKind::Star);
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "argv");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
}

#[test]
fn test_tokenize_positions() {
    let source = "int x;".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[2].span.start.0, 5);
    assert_eq!(*tokens[0].span.start.1, "test.c");
}

#[test]
fn test_tokenize_unrecognized_token() {
    let source = "int x = @".to_string();
    let result = tokenize(source, Some("test.c".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_position().0, 8);
}

#[test]
fn test_tokenize_empty_source() {
    let source = "".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_token_stream_repeats_eof() {
    let tokens = tokenize("int".to_string(), Some("test.c".to_string())).unwrap();
    let mut stream = TokenStream::new(tokens);

    assert_eq!(stream.next_token().kind, TokenKind::Int);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}
