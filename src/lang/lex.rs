use super::{token::*, Error, Position};
use log::trace;

type Result<T> = std::result::Result<T, Error>;

fn is_bitwise_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n'
}

fn is_bitwise_binary(c: char) -> bool {
    c == '0' || c == '1'
}

fn is_bitwise_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_bitwise_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Lazily turns source text into tokens, one per call to `next_token`.
pub struct Scanner<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    position: Position,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner::resume(source, Position::start())
    }

    /// Continues scanning `source` from a token boundary previously
    /// reported by this scanner.
    pub fn resume(source: &'a str, position: Position) -> Scanner<'a> {
        let rest = source.get(position.offset..).unwrap_or("");
        Scanner {
            chars: rest.chars().peekable(),
            position,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn next_token(&mut self) -> Result<Token> {
        self.whitespace();
        let start = self.position;
        let pk = match self.chars.peek() {
            Some(pk) => *pk,
            None => {
                trace!("scanned end of input at {}", start);
                return Ok(Token::end(start));
            }
        };
        let token = if is_bitwise_alphabetic(pk) {
            self.alphabetic(start)
        } else if is_bitwise_binary(pk) {
            self.binary(start)
        } else {
            self.minutia(start)?
        };
        trace!("scanned {:?} {} at {}", token.kind, token, start);
        Ok(token)
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.position.offset += ch.len_utf8();
        if ch == '\n' {
            self.position.line += 1;
            self.position.column = 0;
        } else {
            self.position.column += 1;
        }
        Some(ch)
    }

    fn whitespace(&mut self) {
        while let Some(pk) = self.chars.peek() {
            if !is_bitwise_whitespace(*pk) {
                break;
            }
            self.bump();
        }
    }

    fn take_while(&mut self, f: fn(char) -> bool) -> String {
        let mut s = String::new();
        while let Some(pk) = self.chars.peek() {
            if !f(*pk) {
                break;
            }
            if let Some(ch) = self.bump() {
                s.push(ch);
            }
        }
        s
    }

    fn alphabetic(&mut self, start: Position) -> Token {
        let s = self.take_while(is_bitwise_alphanumeric);
        Token::new(Kind::from_word(&s), s, start)
    }

    fn binary(&mut self, start: Position) -> Token {
        let s = self.take_while(is_bitwise_binary);
        Token::new(Kind::Binary, s, start)
    }

    fn minutia(&mut self, start: Position) -> Result<Token> {
        let kind = match self.chars.peek().copied() {
            Some('=') => Kind::Assign,
            Some('(') => Kind::LParen,
            Some(')') => Kind::RParen,
            Some(ch) => {
                return Err(error!(LexicalError, start;
                    format!("Unrecognized input {:?}", ch)));
            }
            None => return Ok(Token::end(start)),
        };
        let mut s = String::new();
        if let Some(ch) = self.bump() {
            s.push(ch);
        }
        Ok(Token::new(kind, s, start))
    }
}
