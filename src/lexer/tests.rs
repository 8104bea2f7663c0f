//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and floats)
//! - String literals with escape sequences
//! - Operators and punctuation
//! - Comments
//! - Error cases
//! - Token sources at the end of input

use super::{
    lexer::{tokenize, Lexer},
    source::{TokenSource, TokenStream},
    tokens::TokenKind,
};

#[test]
fn test_tokenize_keywords() {
    let source = "let fn return if else true false".to_string();
    let tokens = tokenize(source, Some("test.mk".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Fn);
    assert_eq!(tokens[2].kind, TokenKind::Return);
    assert_eq!(tokens[3].kind, TokenKind::If);
    assert_eq!(tokens[4].kind, TokenKind::Else);
    assert_eq!(tokens[5].kind, TokenKind::True);
    assert_eq!(tokens[6].kind, TokenKind::False);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase letter".to_string();
    let tokens = tokenize(source, Some("test.mk".to_string())).unwrap();

    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(
        values,
        vec!["foo", "bar", "baz_123", "_underscore", "CamelCase", "letter", "EOF"]
    );
    assert!(tokens[..6].iter().all(|token| token.kind == TokenKind::Identifier));
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 100.5".to_string();
    let tokens = tokenize(source, Some("test.mk".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings_with_escapes() {
    let source = r#""hello" "a\tb\n" "\x41\\""#.to_string();
    let tokens = tokenize(source, Some("test.mk".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "a\tb\n");
    assert_eq!(tokens[2].value, "A\\");
}

#[test]
fn test_tokenize_string_with_escaped_quote() {
    let tokens = tokenize(r#""a\"b" x"#, None).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "a\"b");
    assert_eq!(tokens[0].span.end.0, 6);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
}

#[test]
fn test_string_span_covers_quotes() {
    let tokens = tokenize("x \"abc\"", None).unwrap();

    assert_eq!(tokens[1].span.start.0, 2);
    assert_eq!(tokens[1].span.end.0, 7);
}

#[test]
fn test_tokenize_operators() {
    let source = "= == ! != < <= > >= + - * / % , ; : ( ) { } [ ]".to_string();
    let tokens = tokenize(source, Some("test.mk".to_string())).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Assignment,
            TokenKind::Equals,
            TokenKind::Not,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_without_spaces() {
    let tokens = tokenize("let five=5;five==5", None).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_skips_comments() {
    let source = "let x = 1; // trailing comment\n// whole line\nx".to_string();
    let tokens = tokenize(source, None).unwrap();

    assert_eq!(tokens.len(), 7);
    assert_eq!(tokens[5].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].span.start.0, 45);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let foobar = 838383;", Some("test.mk".to_string())).unwrap();

    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[1].span.end.0, 10);
    assert_eq!(tokens[1].span.start.1.as_str(), "test.mk");
    assert_eq!(tokens[4].span.start.0, 19);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let result = tokenize("let x = @;", Some("test.mk".to_string()));

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 8);
}

#[test]
fn test_streaming_lexer_yields_illegal_tokens() {
    let mut lexer = Lexer::new("a # b", None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    let illegal = lexer.next_token();
    assert_eq!(illegal.kind, TokenKind::Illegal);
    assert_eq!(illegal.value, "#");
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
}

#[test]
fn test_illegal_multibyte_character() {
    let mut lexer = Lexer::new("é1", None);

    let illegal = lexer.next_token();
    assert_eq!(illegal.kind, TokenKind::Illegal);
    assert_eq!(illegal.value, "é");
    assert_eq!(lexer.next_token().value, "1");
}

#[test]
fn test_lexer_keeps_returning_eof() {
    let mut lexer = Lexer::new("x", None);

    assert_eq!(TokenSource::next_token(&mut lexer).kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(TokenSource::next_token(&mut lexer).kind, TokenKind::EOF);
    }
}

#[test]
fn test_token_stream_replays_tokens_then_eof() {
    let tokens = tokenize("let x", None).unwrap();
    let mut stream = TokenStream::from(tokens);

    assert_eq!(stream.next_token().kind, TokenKind::Let);
    assert_eq!(stream.next_token().kind, TokenKind::Identifier);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_token_stream_synthesises_missing_eof() {
    let mut tokens = tokenize("foo", None).unwrap();
    tokens.pop();
    let mut stream = TokenStream::from(tokens);

    assert_eq!(stream.next_token().kind, TokenKind::Identifier);
    let eof = stream.next_token();
    assert_eq!(eof.kind, TokenKind::EOF);
    assert_eq!(eof.span.start.0, 3);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_empty_token_stream() {
    let mut stream = TokenStream::from(vec![]);

    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}
