use pretty_assertions::assert_eq;
use zeek::{
    ast::ast::{Expr, Stmt},
    lexer::{lexer::tokenize, tokens::TokenKind},
    run_source,
};

const PROGRAM: &str = r#"import "std";

// A point in the plane.
pub struct Point {
    int x,
    int y,
    fn norm() -> int { x * x + y * y; },
}

enum Direction { North, East, South, West }

pub fn main() {
    var origin := Point { x: 0, y: 0 };
    const limit: int = 10;
    var steps: [4]int = [1, 2, 3, 4];

    for (0..limit) |i| {
        if i % 2 == 0 {
            continue;
        } elif i > 7 {
            break;
        } else {
            origin.x += steps[i % 4];
        }
    }

    while (origin.y < limit) {
        origin.y++;
    }

    var text := std:read("data.txt") catch `missing {origin}`;
    std:print(text);
}
"#;

#[test]
fn test_run_full_program() {
    let program = run_source("main.zl", PROGRAM).unwrap();

    assert_eq!(program.tag, "main.zl");
    assert_eq!(program.body.len(), 4);
    assert!(matches!(&program.body[0], Stmt::Import(_)));
    assert!(matches!(&program.body[1], Stmt::Public(_)));
    assert!(matches!(&program.body[2], Stmt::EnumDecl(_)));

    let Stmt::Public(main) = &program.body[3] else {
        panic!("expected `pub fn main`");
    };
    let Stmt::FnDecl(main) = &*main.exported else {
        panic!("expected a function declaration");
    };
    assert_eq!(main.body.body.len(), 7);
    assert!(matches!(
        &main.body.body[5],
        Stmt::VarDecl(decl) if matches!(decl.assigned_value, Some(Expr::Catch(_)))
    ));
}

#[test]
fn test_run_is_deterministic() {
    assert_eq!(
        run_source("main.zl", PROGRAM).unwrap(),
        run_source("main.zl", PROGRAM).unwrap()
    );
}

#[test]
fn test_tokens_end_with_single_eof() {
    let tokens = tokenize(PROGRAM, Some("main.zl".to_string())).unwrap();

    assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));
    assert_eq!(
        tokens
            .iter()
            .filter(|token| token.kind == TokenKind::EOF)
            .count(),
        1
    );
}

#[test]
fn test_missing_semicolon_diagnostic() {
    let diagnostic = run_source("console", "x = 1").unwrap_err();

    assert_eq!(diagnostic.tag, "console");
    assert_eq!(diagnostic.line, 1);
    assert_eq!(diagnostic.col, 5);
    assert_eq!(diagnostic.line_text, "x = 1");
    assert_eq!(diagnostic.title, "Missing Semicolon");
}

#[test]
fn test_unterminated_string_diagnostic() {
    let diagnostic = run_source("console", "var a := 1;\nvar s := \"abc").unwrap_err();

    assert_eq!(diagnostic.line, 2);
    assert_eq!(diagnostic.col, 10);
    assert_eq!(diagnostic.title, "Unterminated String");
    assert_eq!(diagnostic.line_text, "var s := \"abc");
}

#[test]
fn test_unrecognised_character_diagnostic() {
    let diagnostic = run_source("console", "var a := 1 $ 2;").unwrap_err();

    assert_eq!(diagnostic.title, "Unrecognised Character");
    assert_eq!(diagnostic.col, 12);
}

#[test]
fn test_first_error_only() {
    let diagnostic = run_source("console", "var a = 1;\nvar b = 2;").unwrap_err();

    assert_eq!(diagnostic.line, 1);
    assert_eq!(
        diagnostic.explanation,
        "found `EQUAL` in a variable declaration, either `:`, `:=` or `;` was expected"
    );
}

#[test]
fn test_diagnostic_rendering() {
    let diagnostic = run_source("main.zl", "var a := (1 + 2;").unwrap_err();
    let rendered = diagnostic.to_string();

    assert!(rendered.contains("(main.zl) [1:16] Unexpected Token"));
    assert!(rendered.contains("1 | var a := (1 + 2;"));
    assert!(rendered.ends_with("expected `RPAREN` but found `SEMICOLON`"));
}
