use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt, Type},
    errors::errors::{Error, GrammarKind},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*, types::create_token_type_lookups};

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Comma,
    Assignment,
    Logical,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Call,
    Member,
    StructLiteral,
    Primary,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler<N> = fn(&mut Parser) -> Result<N, Error>;
pub type LEDHandler<N> = fn(&mut Parser, N, BindingPower) -> Result<N, Error>;

// Lookup tables for one precedence grammar
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup<N> = HashMap<TokenKind, NUDHandler<N>>;
pub type LEDLookup<N> = HashMap<TokenKind, LEDHandler<N>>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

/// The primary/continuation tables of one grammar, plus the binding power of
/// every token kind the grammar knows about.
pub struct GrammarTable<N> {
    nud_lookup: NUDLookup<N>,
    led_lookup: LEDLookup<N>,
    binding_power_lookup: BPLookup,
}

impl<N> GrammarTable<N> {
    pub fn new() -> Self {
        GrammarTable {
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Registers a left denotation (continuation) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler<N>) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (primary) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<N>) {
        self.binding_power_lookup.insert(kind, BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }

    pub fn get_nud(&self, kind: TokenKind) -> Option<NUDHandler<N>> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led(&self, kind: TokenKind) -> Option<LEDHandler<N>> {
        self.led_lookup.get(&kind).copied()
    }

    /// Unregistered kinds bind at `Default`, which ends any continuation loop.
    pub fn get_bp(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }
}

impl<N> Default for GrammarTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Every table the parser dispatches through.
///
/// A `Grammar` is assembled once and then shared read-only by the parsers
/// that use it; nothing registers handlers while a parse is running.
pub struct Grammar {
    stmt_lookup: StmtLookup,
    pub expr: GrammarTable<Expr>,
    pub types: GrammarTable<Type>,
}

impl Grammar {
    /// An empty grammar, for callers assembling their own tables.
    pub fn empty() -> Self {
        Grammar {
            stmt_lookup: HashMap::new(),
            expr: GrammarTable::new(),
            types: GrammarTable::new(),
        }
    }

    /// The language's full statement, expression and type grammar.
    pub fn new() -> Self {
        let mut grammar = Grammar::empty();
        create_token_lookups(&mut grammar);
        create_token_type_lookups(&mut grammar.types);
        grammar
    }

    /// Registers a statement handler for a token.
    ///
    /// Statement keywords bind at `Default` in the expression grammar so an
    /// expression never continues into the next statement.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.expr.binding_power_lookup.insert(kind, BindingPower::Default);
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn get_stmt(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

/// A node kind produced by one of the precedence grammars.
pub trait Production: Sized {
    const GRAMMAR: GrammarKind;

    /// Selects this production's table out of a grammar.
    fn table(grammar: &Grammar) -> &GrammarTable<Self>;

    /// True when the continuation on `kind` must not run in the parser's
    /// current context, ending the production there.
    fn halts(_parser: &Parser, _kind: TokenKind) -> bool {
        false
    }
}

impl Production for Expr {
    const GRAMMAR: GrammarKind = GrammarKind::Expression;

    fn table(grammar: &Grammar) -> &GrammarTable<Self> {
        &grammar.expr
    }

    fn halts(parser: &Parser, kind: TokenKind) -> bool {
        kind == TokenKind::OpenCurly && !parser.struct_literals_allowed()
    }
}

impl Production for Type {
    const GRAMMAR: GrammarKind = GrammarKind::Type;

    fn table(grammar: &Grammar) -> &GrammarTable<Self> {
        &grammar.types
    }
}

pub fn create_token_lookups(grammar: &mut Grammar) {
    let expr = &mut grammar.expr;

    // Literals and symbols
    expr.nud(TokenKind::Fn, parse_function_expr);
    expr.nud(TokenKind::Identifier, parse_primary_expr);
    expr.nud(TokenKind::Nil, parse_primary_expr);
    expr.nud(TokenKind::Udef, parse_primary_expr);
    expr.nud(TokenKind::String, parse_primary_expr);
    expr.nud(TokenKind::FormatString, parse_primary_expr);
    expr.nud(TokenKind::Integer, parse_primary_expr);
    expr.nud(TokenKind::Float, parse_primary_expr);
    expr.nud(TokenKind::True, parse_primary_expr);
    expr.nud(TokenKind::False, parse_primary_expr);

    expr.nud(TokenKind::Plus, parse_prefix_expr);
    expr.nud(TokenKind::Minus, parse_prefix_expr);
    expr.nud(TokenKind::Exclamation, parse_prefix_expr);

    expr.nud(TokenKind::OpenParen, parse_grouping_expr);
    expr.nud(TokenKind::OpenBracket, parse_array_init_expr);

    // Attaches to the nearest operand; `if` conditions switch it off
    expr.led(TokenKind::OpenCurly, BindingPower::StructLiteral, parse_struct_init_expr);

    // Member and call
    expr.led(TokenKind::Dot, BindingPower::Member, parse_member_expr);
    expr.led(TokenKind::OpenBracket, BindingPower::Member, parse_member_expr);
    expr.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);
    expr.led(TokenKind::Colon, BindingPower::Member, parse_package_access_expr);

    // Logical
    expr.led(TokenKind::And, BindingPower::Logical, parse_binary_expr);
    expr.led(TokenKind::Or, BindingPower::Logical, parse_binary_expr);
    expr.led(TokenKind::DoublePipe, BindingPower::Logical, parse_binary_expr);
    expr.led(TokenKind::DoubleDot, BindingPower::Logical, parse_range_expr);
    expr.led(TokenKind::Catch, BindingPower::Logical, parse_catch_expr);

    // Additive and multiplicative
    expr.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    expr.led(TokenKind::Minus, BindingPower::Additive, parse_binary_expr);
    expr.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    expr.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);
    expr.led(TokenKind::Percent, BindingPower::Multiplicative, parse_binary_expr);

    // Relational
    expr.led(TokenKind::DoubleEqual, BindingPower::Relational, parse_binary_expr);
    expr.led(TokenKind::ExclamationEqual, BindingPower::Relational, parse_binary_expr);
    expr.led(TokenKind::Greater, BindingPower::Relational, parse_binary_expr);
    expr.led(TokenKind::GreaterEqual, BindingPower::Relational, parse_binary_expr);
    expr.led(TokenKind::Less, BindingPower::Relational, parse_binary_expr);
    expr.led(TokenKind::LessEqual, BindingPower::Relational, parse_binary_expr);

    // Assignment
    expr.led(TokenKind::PlusEqual, BindingPower::Assignment, parse_compound_assignment_expr);
    expr.led(TokenKind::MinusEqual, BindingPower::Assignment, parse_compound_assignment_expr);
    expr.led(TokenKind::StarEqual, BindingPower::Assignment, parse_compound_assignment_expr);
    expr.led(TokenKind::SlashEqual, BindingPower::Assignment, parse_compound_assignment_expr);
    expr.led(TokenKind::PercentEqual, BindingPower::Assignment, parse_compound_assignment_expr);
    expr.led(TokenKind::Equal, BindingPower::Assignment, parse_assignment_expr);

    expr.led(TokenKind::DoublePlus, BindingPower::Unary, parse_postfix_expr);
    expr.led(TokenKind::DoubleMinus, BindingPower::Unary, parse_postfix_expr);

    // Statements
    grammar.stmt(TokenKind::Var, parse_var_decl_stmt);
    grammar.stmt(TokenKind::Const, parse_var_decl_stmt);
    grammar.stmt(TokenKind::While, parse_while_stmt);
    grammar.stmt(TokenKind::For, parse_for_stmt);
    grammar.stmt(TokenKind::Fn, parse_fn_decl_stmt);
    grammar.stmt(TokenKind::Pub, parse_public_stmt);
    grammar.stmt(TokenKind::Import, parse_import_stmt);
    grammar.stmt(TokenKind::If, parse_if_stmt);
    grammar.stmt(TokenKind::Struct, parse_struct_decl_stmt);
    grammar.stmt(TokenKind::Enum, parse_enum_decl_stmt);
    grammar.stmt(TokenKind::Break, parse_break_stmt);
    grammar.stmt(TokenKind::Continue, parse_continue_stmt);
}
