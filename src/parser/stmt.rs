use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::IdentifierExpr,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::{ParseResult, Parser};

/// Parses one statement starting at the current token.
///
/// Tokens with a registered statement handler introduce that statement; any
/// other token starts an expression statement.
pub fn parse_stmt(parser: &mut Parser<'_>) -> ParseResult<Stmt> {
    if let Some(handler) = parser.lookups().get_stmt(parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser<'_>) -> ParseResult<Stmt> {
    let start = parser.current_token().span.start.clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = IdentifierExpr {
        value: name_token.value,
        span: name_token.span,
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    skip_terminator(parser);

    Ok(Stmt::Let(LetStmt {
        span: Span {
            start,
            end: parser.current_token().span.end.clone(),
        },
        name,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser<'_>) -> ParseResult<Stmt> {
    let start = parser.advance().span.start;

    let value = parse_expr(parser, BindingPower::Lowest)?;
    skip_terminator(parser);

    Ok(Stmt::Return(ReturnStmt {
        span: Span {
            start,
            end: parser.current_token().span.end.clone(),
        },
        value,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser<'_>) -> ParseResult<Stmt> {
    let expression = parse_expr(parser, BindingPower::Lowest)?;
    skip_terminator(parser);

    Ok(Stmt::Expression(ExpressionStmt {
        span: Span {
            start: expression.get_span().start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        expression,
    }))
}

// The `;` is optional; when present it becomes the current token and the
// program loop steps over it.
fn skip_terminator(parser: &mut Parser<'_>) {
    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }
}
