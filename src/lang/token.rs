use super::Position;

/// The closed set of token classes produced by the scanner.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Kind {
    And,
    Or,
    Xor,
    Assign,
    LParen,
    RParen,
    Print,
    Binary,
    Ident,
    End,
}

impl Kind {
    /// Classifies a complete letter/digit run. Keywords win over identifiers
    /// only when the whole run spells the keyword.
    pub fn from_word(s: &str) -> Kind {
        match s {
            "and" => Kind::And,
            "or" => Kind::Or,
            "xor" => Kind::Xor,
            _ if s.eq_ignore_ascii_case("print") => Kind::Print,
            _ => Kind::Ident,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Kind::*;
        match self {
            And => write!(f, "'and'"),
            Or => write!(f, "'or'"),
            Xor => write!(f, "'xor'"),
            Assign => write!(f, "'='"),
            LParen => write!(f, "'('"),
            RParen => write!(f, "')'"),
            Print => write!(f, "'print'"),
            Binary => write!(f, "binary literal"),
            Ident => write!(f, "identifier"),
            End => write!(f, "end of input"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: Kind,
    pub text: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: Kind, text: String, position: Position) -> Token {
        Token {
            kind,
            text,
            position,
        }
    }

    pub fn end(position: Position) -> Token {
        Token::new(Kind::End, String::new(), position)
    }

    /// Position just past the token. Lexemes never span lines and are ASCII.
    pub fn after(&self) -> Position {
        Position {
            line: self.position.line,
            column: self.position.column + self.text.len(),
            offset: self.position.offset + self.text.len(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            Kind::End => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.text),
        }
    }
}
