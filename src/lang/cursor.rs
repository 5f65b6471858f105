use super::{lex::Scanner, token::*, Error, Position};

type Result<T> = std::result::Result<T, Error>;

/// One token of lookahead over a `Scanner`.
pub struct Cursor<'a> {
    scanner: Scanner<'a>,
    la: Token,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Result<Cursor<'a>> {
        let mut scanner = Scanner::new(source);
        let la = scanner.next_token()?;
        Ok(Cursor { scanner, la })
    }

    /// Rebuilds a cursor whose lookahead is `la`, a token previously read
    /// from the same `source`.
    pub fn resume(source: &'a str, la: Token) -> Cursor<'a> {
        Cursor {
            scanner: Scanner::resume(source, la.after()),
            la,
        }
    }

    pub fn la(&self) -> &Token {
        &self.la
    }

    pub fn kind(&self) -> Kind {
        self.la.kind
    }

    /// Where a failure detected now is reported: the start of the lookahead.
    pub fn position(&self) -> Position {
        self.la.position
    }

    pub fn into_lookahead(self) -> Token {
        self.la
    }

    pub fn advance(&mut self) -> Result<Token> {
        let next = self.scanner.next_token()?;
        Ok(std::mem::replace(&mut self.la, next))
    }

    pub fn expect(&mut self, kind: Kind) -> Result<Token> {
        if self.la.kind == kind {
            return self.advance();
        }
        Err(self.unexpected(&kind.to_string()))
    }

    /// A parse error naming what was `expected` and the text actually found.
    pub fn unexpected(&self, expected: &str) -> Error {
        error!(ParseError, self.position();
            format!("Expected {}, got {}", expected, self.la))
    }
}
