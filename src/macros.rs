//! Token construction shorthands shared by the lexer's pattern table.

/// Builds a `Token` from its kind, text and span.
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), lexer.span_of(2));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Expands to a lexer handler for a punctuation or operator token.
///
/// The produced token carries `$value` as its text and spans exactly that
/// many bytes from the lexer's current offset, which then moves past it.
///
/// ```ignore
/// pattern("!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!="))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:expr) => {
        |lexer: &mut Lexer, _matched: &str| -> Option<Token> {
            let token = MK_TOKEN!($kind, String::from($value), lexer.span_of($value.len()));
            lexer.advance_n($value.len());
            Some(token)
        }
    };
}
