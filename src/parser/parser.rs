//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and parsing entry points.
//! The parser reads from a `TokenSource` through a two-token window
//! (`current` and `peek`) and dispatches through the lookup tables in
//! `lookups` for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::mem;

use tracing::{debug, info, trace};

use crate::{
    ast::ast::Program,
    errors::{
        diagnostics::Diagnostics,
        errors::{Error, ErrorImpl},
    },
    lexer::{
        lexer::Lexer,
        source::{TokenSource, TokenStream},
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{BindingPower, Lookups, DEFAULT_LOOKUPS},
    stmt::parse_stmt,
};

pub type ParseResult<T> = Result<T, Error>;

/// The main parser structure that maintains parsing state.
///
/// Holds exactly two tokens of lookahead. Advancing the cursor is the only
/// way either token changes.
pub struct Parser<'a> {
    /// Where tokens come from, one per advance
    source: Box<dyn TokenSource + 'a>,
    /// The token being acted on
    current: Token,
    /// The token after `current`
    peek: Token,
    /// Dispatch tables for statements and expressions
    lookups: &'a Lookups,
    /// Errors collected so far
    errors: Diagnostics,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `source` using the default grammar tables.
    pub fn new(source: impl TokenSource + 'a) -> Self {
        Self::with_lookups(source, &DEFAULT_LOOKUPS)
    }

    /// Creates a parser over `source` using caller supplied grammar tables.
    pub fn with_lookups(source: impl TokenSource + 'a, lookups: &'a Lookups) -> Self {
        let mut source: Box<dyn TokenSource + 'a> = Box::new(source);
        let current = source.next_token();
        let peek = source.next_token();

        Parser {
            source,
            current,
            peek,
            lookups,
            errors: Diagnostics::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the token after the current one.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Returns the kind of the token after the current one.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shifts the window one token forward and returns the discarded current token.
    pub fn advance(&mut self) -> Token {
        let next = self.source.next_token();
        let peek = mem::replace(&mut self.peek, next);
        let previous = mem::replace(&mut self.current, peek);
        trace!(kind = %self.current.kind, value = %self.current.value, "advance");
        previous
    }

    /// Advances onto the peek token if it has the expected kind.
    ///
    /// Otherwise the cursor stays put and an `ExpectedToken` error naming the
    /// expected and the actual kind is returned.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> ParseResult<Token> {
        if self.peek_is(expected_kind) {
            self.advance();
            return Ok(self.current.clone());
        }

        Err(Error::new(
            ErrorImpl::ExpectedToken {
                expected: expected_kind,
                received: self.peek.kind,
            },
            self.peek.span.start.clone(),
        ))
    }

    /// Binding power of the peek token.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.lookups.get_binding_power(self.peek.kind)
    }

    /// Binding power of the current token.
    pub fn current_binding_power(&self) -> BindingPower {
        self.lookups.get_binding_power(self.current.kind)
    }

    /// Returns the grammar tables this parser dispatches through.
    pub fn lookups(&self) -> &'a Lookups {
        self.lookups
    }

    /// Returns the errors collected so far.
    pub fn errors(&self) -> &Diagnostics {
        &self.errors
    }

    /// Returns the position of the current token in the source.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Skips to the end of the statement that just failed.
    ///
    /// Stops on the terminating `;` (or EOF) so that the program loop's own
    /// advance moves past it.
    fn synchronize(&mut self) {
        while !self.current_is(TokenKind::Semicolon) && !self.current_is(TokenKind::EOF) {
            self.advance();
        }
    }

    /// Parses statements until the source reports end of input.
    ///
    /// A statement that fails to parse contributes nothing to the program;
    /// its error is recorded and parsing resumes after the next `;`.
    pub fn parse_program(mut self) -> (Program, Diagnostics) {
        let mut program = Program::default();

        while !self.current_is(TokenKind::EOF) {
            match parse_stmt(&mut self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    debug!(
                        error = %error,
                        offset = error.get_position().0,
                        "discarding malformed statement"
                    );
                    self.errors.push(error);
                    self.synchronize();
                }
            }

            self.advance();
        }

        (program, self.errors)
    }
}

/// Parses a stream of already scanned tokens into a program.
///
/// # Returns
///
/// A tuple containing the program and every diagnostic found. Callers must
/// check the diagnostics before trusting the program.
pub fn parse(tokens: Vec<Token>) -> (Program, Diagnostics) {
    Parser::new(TokenStream::from(tokens)).parse_program()
}

/// Scans and parses `source` in a single pass.
pub fn parse_source(source: &str, file: Option<String>) -> (Program, Diagnostics) {
    let (program, diagnostics) = Parser::new(Lexer::new(source, file)).parse_program();

    info!(
        statements = program.len(),
        errors = diagnostics.len(),
        "parsed source"
    );

    (program, diagnostics)
}
