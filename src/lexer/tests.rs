//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals
//! - String and format string literals
//! - Operators and punctuation
//! - Comments and whitespace
//! - Line/column tracking
//! - Error cases

use crate::{errors::errors::ErrorImpl, Position};

use super::{
    lexer::{is_alpha, is_digit, tokenize},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source, Some("test.zl".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_character_classes() {
    assert!(is_alpha('a'));
    assert!(is_alpha('Z'));
    assert!(is_alpha('_'));
    assert!(!is_alpha('1'));
    assert!(!is_alpha('é'));
    assert!(is_digit('0'));
    assert!(is_digit('9'));
    assert!(!is_digit('a'));
}

#[test]
fn test_tokenize_walrus_declaration() {
    let tokens = tokenize("var x := 5 + 2;", Some("test.zl".to_string())).unwrap();

    let expected = [
        (TokenKind::Var, "var", 1, 3),
        (TokenKind::Identifier, "x", 5, 5),
        (TokenKind::Walrus, ":=", 7, 8),
        (TokenKind::Integer, "5", 10, 10),
        (TokenKind::Plus, "+", 12, 12),
        (TokenKind::Integer, "2", 14, 14),
        (TokenKind::Semicolon, ";", 15, 15),
        (TokenKind::EOF, "", 16, 16),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, value, col, end_col)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.value, value);
        assert_eq!(token.span.start, Position::new(1, col));
        assert_eq!(token.span.end, Position::new(1, end_col));
    }
}

#[test]
fn test_tokenize_keywords() {
    let source = "var const fn struct enum pub import if elif else for while break continue and or catch true false nil udef";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Var,
            TokenKind::Const,
            TokenKind::Fn,
            TokenKind::Struct,
            TokenKind::Enum,
            TokenKind::Pub,
            TokenKind::Import,
            TokenKind::If,
            TokenKind::Elif,
            TokenKind::Else,
            TokenKind::For,
            TokenKind::While,
            TokenKind::Break,
            TokenKind::Continue,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Catch,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Nil,
            TokenKind::Udef,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo baz_123 _under variable iffy", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "baz_123");
    assert_eq!(tokens[2].value, "_under");
    // Keywords only match whole words.
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "variable");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers_are_integers() {
    let tokens = tokenize("42 3.14 0", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[1].span.end, Position::new(1, 7));
    assert_eq!(tokens[2].value, "0");
}

#[test]
fn test_tokenize_number_range() {
    assert_eq!(
        kinds("1..5"),
        vec![
            TokenKind::Integer,
            TokenKind::DoubleDot,
            TokenKind::Integer,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" 'single' `fmt {x}` "a\nb""#, None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[0].span.start, Position::new(1, 1));
    assert_eq!(tokens[0].span.end, Position::new(1, 7));
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "single");
    assert_eq!(tokens[2].kind, TokenKind::FormatString);
    assert_eq!(tokens[2].value, "fmt {x}");
    // Escapes are left as written.
    assert_eq!(tokens[3].value, "a\\nb");
}

#[test]
fn test_tokenize_string_with_other_quotes() {
    let tokens = tokenize(r#""it's" 'say "hi"'"#, None).unwrap();

    assert_eq!(tokens[0].value, "it's");
    assert_eq!(tokens[1].value, "say \"hi\"");
}

#[test]
fn test_tokenize_multiline_string_tracks_lines() {
    let tokens = tokenize("\"a\nb\" x", None).unwrap();

    assert_eq!(tokens[0].span.start, Position::new(1, 1));
    assert_eq!(tokens[0].span.end, Position::new(2, 2));
    assert_eq!(tokens[1].span.start, Position::new(2, 4));
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = tokenize("var a := \"abc", None).unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnterminatedString { delimiter: '"' }
    );
    assert_eq!(error.get_position(), &Position::new(1, 10));
}

#[test]
fn test_tokenize_unrecognised_character() {
    let error = tokenize("a @ b", None).unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnrecognisedCharacter { character: '@' }
    );
    assert_eq!(error.get_position(), &Position::new(1, 3));
}

#[test]
fn test_tokenize_single_operators() {
    assert_eq!(
        kinds("+ - * / % ^ & | ~ = ! > < , : ; . ? ( ) { } [ ]"),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Caret,
            TokenKind::Ampersand,
            TokenKind::Pipe,
            TokenKind::Tilde,
            TokenKind::Equal,
            TokenKind::Exclamation,
            TokenKind::Greater,
            TokenKind::Less,
            TokenKind::Comma,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::Dot,
            TokenKind::Question,
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
fn test_tokenize_double_operators() {
    assert_eq!(
        kinds("== .. !! >> << || ++ -- ** && != += -= /= *= %= <= >= := ->"),
        vec![
            TokenKind::DoubleEqual,
            TokenKind::DoubleDot,
            TokenKind::DoubleExclamation,
            TokenKind::DoubleGreater,
            TokenKind::DoubleLess,
            TokenKind::DoublePipe,
            TokenKind::DoublePlus,
            TokenKind::DoubleMinus,
            TokenKind::DoubleStar,
            TokenKind::And,
            TokenKind::ExclamationEqual,
            TokenKind::PlusEqual,
            TokenKind::MinusEqual,
            TokenKind::SlashEqual,
            TokenKind::StarEqual,
            TokenKind::PercentEqual,
            TokenKind::LessEqual,
            TokenKind::GreaterEqual,
            TokenKind::Walrus,
            TokenKind::Arrow,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_double_operator_span() {
    let tokens = tokenize("a += 1", None).unwrap();

    assert_eq!(tokens[1].span.start, Position::new(1, 3));
    assert_eq!(tokens[1].span.end, Position::new(1, 4));
}

#[test]
fn test_comments_are_skipped() {
    let tokens = tokenize("a // comment + - \"\nb / c", None).unwrap();

    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::EOF
        ]
    );
    assert_eq!(tokens[1].span.start, Position::new(2, 1));
}

#[test]
fn test_line_and_column_tracking() {
    let tokens = tokenize("a\n  bb\r\n\tc", None).unwrap();

    assert_eq!(tokens[0].span.start, Position::new(1, 1));
    assert_eq!(tokens[1].span.start, Position::new(2, 3));
    assert_eq!(tokens[1].span.end, Position::new(2, 4));
    // Tabs and carriage returns do not move the column.
    assert_eq!(tokens[2].span.start, Position::new(3, 1));

    for pair in tokens.windows(2) {
        assert!(pair[0].span.start.line <= pair[1].span.start.line);
    }
}

#[test]
fn test_empty_source_has_only_eof() {
    let tokens = tokenize("", None).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].span.start, Position::new(1, 1));
}

#[test]
fn test_eof_is_at_final_cursor() {
    let tokens = tokenize("x;\n", None).unwrap();
    let eof = tokens.last().unwrap();

    assert_eq!(eof.kind, TokenKind::EOF);
    assert_eq!(eof.span.start, Position::new(2, 1));
    assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::EOF).count(), 1);
}

#[test]
fn test_tokenize_is_deterministic() {
    let source = "fn add(int a, int b) -> int { a + b; }";

    assert_eq!(tokenize(source, None).unwrap(), tokenize(source, None).unwrap());
}

#[test]
fn test_token_display() {
    let tokens = tokenize("name 12 ==", None).unwrap();

    assert_eq!(tokens[0].to_string(), "IDENTIFIER(\"name\")");
    assert_eq!(tokens[1].to_string(), "INTEGER(\"12\")");
    assert_eq!(tokens[2].to_string(), "DOUBLE_EQUAL");
}
