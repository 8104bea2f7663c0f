use std::vec::IntoIter;

use crate::Position;

use super::{
    lexer::Lexer,
    tokens::{Token, TokenKind},
};

/// Pull-based producer of tokens, read strictly in order with no push-back.
///
/// Once the end of input is reached a source must keep returning an EOF
/// token on every further call.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        Lexer::next_token(self)
    }
}

/// Replays tokens that were scanned ahead of time.
pub struct TokenStream {
    tokens: IntoIter<Token>,
    last_position: Position,
    eof: Option<Token>,
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream {
            tokens: tokens.into_iter(),
            last_position: Position::null(),
            eof: None,
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        if let Some(eof) = &self.eof {
            return eof.clone();
        }

        match self.tokens.next() {
            Some(token) if token.kind == TokenKind::EOF => {
                self.eof = Some(token.clone());
                token
            }
            Some(token) => {
                self.last_position = token.span.end.clone();
                token
            }
            None => {
                // Vector had no trailing EOF
                let eof = Token::eof(self.last_position.clone());
                self.eof = Some(eof.clone());
                eof
            }
        }
    }
}
