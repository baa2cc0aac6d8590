use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("var", TokenKind::Var);
        map.insert("const", TokenKind::Const);
        map.insert("fn", TokenKind::Fn);
        map.insert("struct", TokenKind::Struct);
        map.insert("enum", TokenKind::Enum);
        map.insert("pub", TokenKind::Pub);
        map.insert("import", TokenKind::Import);
        map.insert("if", TokenKind::If);
        map.insert("elif", TokenKind::Elif);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("catch", TokenKind::Catch);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("nil", TokenKind::Nil);
        map.insert("udef", TokenKind::Udef);
        map
    };

    pub static ref SINGLE_OPERATOR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Minus);
        map.insert('*', TokenKind::Star);
        map.insert('/', TokenKind::Slash);
        map.insert('%', TokenKind::Percent);
        map.insert('^', TokenKind::Caret);
        map.insert('&', TokenKind::Ampersand);
        map.insert('|', TokenKind::Pipe);
        map.insert('~', TokenKind::Tilde);
        map.insert('=', TokenKind::Equal);
        map.insert('!', TokenKind::Exclamation);
        map.insert('>', TokenKind::Greater);
        map.insert('<', TokenKind::Less);
        map.insert(',', TokenKind::Comma);
        map.insert(':', TokenKind::Colon);
        map.insert(';', TokenKind::Semicolon);
        map.insert('.', TokenKind::Dot);
        map.insert('?', TokenKind::Question);

        map.insert('(', TokenKind::OpenParen);
        map.insert(')', TokenKind::CloseParen);
        map.insert('{', TokenKind::OpenCurly);
        map.insert('}', TokenKind::CloseCurly);
        map.insert('[', TokenKind::OpenBracket);
        map.insert(']', TokenKind::CloseBracket);
        map
    };

    pub static ref DOUBLE_OPERATOR_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("==", TokenKind::DoubleEqual);
        map.insert("..", TokenKind::DoubleDot);
        map.insert("!!", TokenKind::DoubleExclamation);
        map.insert(">>", TokenKind::DoubleGreater);
        map.insert("<<", TokenKind::DoubleLess);
        map.insert("||", TokenKind::DoublePipe);
        map.insert("++", TokenKind::DoublePlus);
        map.insert("--", TokenKind::DoubleMinus);
        map.insert("**", TokenKind::DoubleStar);
        // `&&` shares the `and` keyword's kind, `||` keeps its own.
        map.insert("&&", TokenKind::And);
        map.insert("!=", TokenKind::ExclamationEqual);
        map.insert("+=", TokenKind::PlusEqual);
        map.insert("-=", TokenKind::MinusEqual);
        map.insert("/=", TokenKind::SlashEqual);
        map.insert("*=", TokenKind::StarEqual);
        map.insert("%=", TokenKind::PercentEqual);
        map.insert("<=", TokenKind::LessEqual);
        map.insert(">=", TokenKind::GreaterEqual);
        map.insert(":=", TokenKind::Walrus);
        map.insert("->", TokenKind::Arrow);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    // Never produced by the lexer; kept for consumers matching on it.
    Unknown,

    Identifier,
    String,
    FormatString,
    Integer,
    // Never produced either, numbers with a fraction are still `Integer`.
    Float,
    Bool,
    Nil,
    Udef,

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Ampersand,
    Pipe,
    Tilde,
    Equal,
    Exclamation,
    Greater,
    Less,
    Comma,
    Colon,
    Semicolon,
    Dot,
    Question,

    DoubleDot,
    DoubleEqual,
    DoubleExclamation,
    DoubleGreater,
    DoubleLess,
    DoublePipe,
    DoublePlus,
    DoubleMinus,
    DoubleStar,
    ExclamationEqual,
    PlusEqual,
    MinusEqual,
    SlashEqual,
    StarEqual,
    PercentEqual,
    LessEqual,
    GreaterEqual,
    Walrus,
    Arrow,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,

    // Reserved
    Var,
    Const,
    Fn,
    Struct,
    Enum,
    Pub,
    Import,
    If,
    Elif,
    Else,
    For,
    While,
    Break,
    Continue,
    And,
    Or,
    Catch,
    True,
    False,
}

impl TokenKind {
    /// The upper-case name used in diagnostics, e.g. `DOUBLE_EQUAL`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::FormatString => "FORMAT_STRING",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::Bool => "BOOL",
            TokenKind::Nil => "NIL",
            TokenKind::Udef => "UDEF",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Percent => "PERCENT",
            TokenKind::Caret => "CARET",
            TokenKind::Ampersand => "AMPERSAND",
            TokenKind::Pipe => "PIPE",
            TokenKind::Tilde => "TILDE",
            TokenKind::Equal => "EQUAL",
            TokenKind::Exclamation => "EXCLAMATION",
            TokenKind::Greater => "GREATER",
            TokenKind::Less => "LESS",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Dot => "DOT",
            TokenKind::Question => "QUESTION",
            TokenKind::DoubleDot => "DOUBLE_DOT",
            TokenKind::DoubleEqual => "DOUBLE_EQUAL",
            TokenKind::DoubleExclamation => "DOUBLE_EXCLAMATION",
            TokenKind::DoubleGreater => "DOUBLE_GREATER",
            TokenKind::DoubleLess => "DOUBLE_LESS",
            TokenKind::DoublePipe => "DOUBLE_PIPE",
            TokenKind::DoublePlus => "DOUBLE_PLUS",
            TokenKind::DoubleMinus => "DOUBLE_MINUS",
            TokenKind::DoubleStar => "DOUBLE_STAR",
            TokenKind::ExclamationEqual => "EXCLAMATION_EQUAL",
            TokenKind::PlusEqual => "PLUS_EQUAL",
            TokenKind::MinusEqual => "MINUS_EQUAL",
            TokenKind::SlashEqual => "SLASH_EQUAL",
            TokenKind::StarEqual => "STAR_EQUAL",
            TokenKind::PercentEqual => "PERCENT_EQUAL",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Walrus => "WALRUS",
            TokenKind::Arrow => "RIGHT_ARROW",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::OpenCurly => "LBRACE",
            TokenKind::CloseCurly => "RBRACE",
            TokenKind::OpenBracket => "LBRACKET",
            TokenKind::CloseBracket => "RBRACKET",
            TokenKind::Var => "VAR",
            TokenKind::Const => "CONST",
            TokenKind::Fn => "FN",
            TokenKind::Struct => "STRUCT",
            TokenKind::Enum => "ENUM",
            TokenKind::Pub => "PUB",
            TokenKind::Import => "IMPORT",
            TokenKind::If => "IF",
            TokenKind::Elif => "ELIF",
            TokenKind::Else => "ELSE",
            TokenKind::For => "FOR",
            TokenKind::While => "WHILE",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Catch => "CATCH",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of_many(&[
            TokenKind::Identifier,
            TokenKind::String,
            TokenKind::FormatString,
            TokenKind::Integer,
            TokenKind::Float,
        ]) {
            write!(f, "{}({:?})", self.kind, self.value)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
