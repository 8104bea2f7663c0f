use crate::{
    ast::{
        ast::{Expr, ExprWrapper},
        expressions::{
            BinaryExpr, BooleanExpr, CallExpr, IdentifierExpr, NumberExpr, PrefixExpr, StringExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    lookups::BindingPower,
    parser::{ParseResult, Parser},
};

/// Parses an expression whose operators all bind tighter than `bp`.
///
/// On entry the current token starts the expression; on return it is the
/// expression's last token.
pub fn parse_expr(parser: &mut Parser<'_>, bp: BindingPower) -> ParseResult<ExprWrapper> {
    let lookups = parser.lookups();

    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = lookups.get_nud(token_kind) else {
        return Err(Error::new(
            ErrorImpl::NoPrefixHandler { kind: token_kind },
            parser.get_position(),
        ));
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than bp, fold it into lhs
    while !parser.peek_is(TokenKind::Semicolon) && parser.peek_binding_power() > bp {
        let Some(led) = lookups.get_led(parser.peek_token_kind()) else {
            return Ok(left);
        };

        parser.advance();
        let operator_bp = parser.current_binding_power();
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser<'_>) -> ParseResult<ExprWrapper> {
    let token = parser.current_token();

    Ok(ExprWrapper::new(IdentifierExpr {
        value: token.value.clone(),
        span: token.span.clone(),
    }))
}

pub fn parse_number_expr(parser: &mut Parser<'_>) -> ParseResult<ExprWrapper> {
    let token = parser.current_token();

    // Literals too large for an f64 come back as infinity
    match token.value.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(ExprWrapper::new(NumberExpr {
            value,
            literal: token.value.clone(),
            span: token.span.clone(),
        })),
        _ => Err(Error::new(
            ErrorImpl::NumberParseError {
                token: token.value.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_string_expr(parser: &mut Parser<'_>) -> ParseResult<ExprWrapper> {
    let token = parser.current_token();

    Ok(ExprWrapper::new(StringExpr {
        value: token.value.clone(),
        span: token.span.clone(),
    }))
}

pub fn parse_boolean_expr(parser: &mut Parser<'_>) -> ParseResult<ExprWrapper> {
    let token = parser.current_token();

    Ok(ExprWrapper::new(BooleanExpr {
        value: token.kind == TokenKind::True,
        span: token.span.clone(),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser<'_>) -> ParseResult<ExprWrapper> {
    let operator_token = parser.advance();
    let rhs = parse_expr(parser, BindingPower::Prefix)?;

    Ok(ExprWrapper::new(PrefixExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: rhs.get_span().end.clone(),
        },
        operator: operator_token,
        right_expr: rhs,
    }))
}

pub fn parse_binary_expr(
    parser: &mut Parser<'_>,
    left: ExprWrapper,
    bp: BindingPower,
) -> ParseResult<ExprWrapper> {
    let operator_token = parser.advance();

    // Same binding power on the right keeps the operator left associative
    let right = parse_expr(parser, bp)?;

    Ok(ExprWrapper::new(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left,
        operator: operator_token,
        right,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser<'_>) -> ParseResult<ExprWrapper> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_call_expr(
    parser: &mut Parser<'_>,
    left: ExprWrapper,
    _bp: BindingPower,
) -> ParseResult<ExprWrapper> {
    let mut arguments = vec![];

    if parser.peek_is(TokenKind::CloseParen) {
        parser.advance();
    } else {
        parser.advance();
        arguments.push(parse_expr(parser, BindingPower::Lowest)?);

        while parser.peek_is(TokenKind::Comma) {
            parser.advance();
            parser.advance();
            arguments.push(parse_expr(parser, BindingPower::Lowest)?);
        }

        parser.expect_peek(TokenKind::CloseParen)?;
    }

    Ok(ExprWrapper::new(CallExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        callee: left,
        arguments,
    }))
}
