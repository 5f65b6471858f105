/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the bitwise language.

*/

#[macro_use]
mod error;
mod cursor;
mod lex;
mod parse;

pub use cursor::Cursor;
pub use error::Error;
pub use error::ErrorCode;
pub use lex::Scanner;
pub use parse::parse;
pub use parse::Parser;
pub use parse::MAX_DEPTH;

pub mod ast;
pub mod token;

/// Location of a token or failure in the source text.
///
/// `line` is 1-based, `column` is the raw 0-based character column and
/// `offset` is the byte offset used to resume scanning.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn start() -> Position {
        Position {
            line: 1,
            column: 0,
            offset: 0,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "line {} char {}", self.line, self.column + 1)
    }
}
