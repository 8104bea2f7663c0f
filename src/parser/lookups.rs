use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{ExprWrapper, Stmt},
    lexer::tokens::TokenKind,
};

use super::{
    expr::*,
    parser::{ParseResult, Parser},
    stmt::*,
};

/// Precedence levels, lowest to highest. Only ever compared.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    Comparison,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser<'_>) -> ParseResult<Stmt>;
pub type NUDHandler = fn(&mut Parser<'_>) -> ParseResult<ExprWrapper>;
pub type LEDHandler = fn(&mut Parser<'_>, ExprWrapper, BindingPower) -> ParseResult<ExprWrapper>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

lazy_static! {
    /// The grammar's tables, built once and shared by every parser.
    pub static ref DEFAULT_LOOKUPS: Lookups = {
        let mut lookups = Lookups::new();
        create_token_lookups(&mut lookups);
        lookups
    };
}

/// Dispatch tables consulted by the statement and expression parsers.
///
/// Holds only function pointers, so a finished table can be shared between
/// parsers (and threads) freely. It is never modified while parsing.
#[derive(Clone, Default)]
pub struct Lookups {
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for operator binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Lookups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn get_stmt(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_nud(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }

    /// Binding power of `kind`; kinds that are not operators bind at `Lowest`.
    pub fn get_binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }
}

pub fn create_token_lookups(lookups: &mut Lookups) {
    // Equality
    lookups.led(TokenKind::Equals, BindingPower::Equals, parse_binary_expr);
    lookups.led(TokenKind::NotEquals, BindingPower::Equals, parse_binary_expr);

    // Comparison
    lookups.led(TokenKind::Less, BindingPower::Comparison, parse_binary_expr);
    lookups.led(TokenKind::LessEquals, BindingPower::Comparison, parse_binary_expr);
    lookups.led(TokenKind::Greater, BindingPower::Comparison, parse_binary_expr);
    lookups.led(TokenKind::GreaterEquals, BindingPower::Comparison, parse_binary_expr);

    // Additive and multiplicative
    lookups.led(TokenKind::Plus, BindingPower::Sum, parse_binary_expr);
    lookups.led(TokenKind::Dash, BindingPower::Sum, parse_binary_expr);
    lookups.led(TokenKind::Star, BindingPower::Product, parse_binary_expr);
    lookups.led(TokenKind::Slash, BindingPower::Product, parse_binary_expr);
    lookups.led(TokenKind::Percent, BindingPower::Product, parse_binary_expr);

    lookups.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);

    // Literals and symbols
    lookups.nud(TokenKind::Identifier, parse_identifier_expr);
    lookups.nud(TokenKind::Number, parse_number_expr);
    lookups.nud(TokenKind::String, parse_string_expr);
    lookups.nud(TokenKind::True, parse_boolean_expr);
    lookups.nud(TokenKind::False, parse_boolean_expr);
    lookups.nud(TokenKind::Not, parse_prefix_expr);
    lookups.nud(TokenKind::Dash, parse_prefix_expr);
    lookups.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Statements
    lookups.stmt(TokenKind::Let, parse_let_stmt);
    lookups.stmt(TokenKind::Return, parse_return_stmt);
}
