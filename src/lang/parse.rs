use super::{ast::*, cursor::Cursor, token::*, Error};
use log::debug;
use num_bigint::BigUint;
use num_traits::Num;

type Result<T> = std::result::Result<T, Error>;

/// Deepest parenthesis nesting accepted before parsing gives up.
///
/// Each group costs seven parser frames plus one level of `evaluate`.
/// The limit keeps the deepest accepted program inside the 2 MiB stack
/// of a spawned thread in an unoptimised build. Operator chains do not
/// count against it.
pub const MAX_DEPTH: usize = 256;

/// Parses a complete program, stopping at the first error.
pub fn parse(source: &str) -> Result<Vec<Statement>> {
    let mut parser = Parser::new(source)?;
    let mut r: Vec<Statement> = vec![];
    while let Some(statement) = parser.statement()? {
        r.push(statement);
    }
    Ok(r)
}

pub struct Parser<'a> {
    cursor: Cursor<'a>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Result<Parser<'a>> {
        Ok(Parser {
            cursor: Cursor::new(source)?,
            depth: 0,
        })
    }

    /// Continues parsing at a statement boundary whose lookahead was saved
    /// with `into_lookahead`.
    pub fn resume(source: &'a str, la: Token) -> Parser<'a> {
        Parser {
            cursor: Cursor::resume(source, la),
            depth: 0,
        }
    }

    pub fn into_lookahead(self) -> Token {
        self.cursor.into_lookahead()
    }

    /// Parses the next statement, or returns `None` at end of input.
    pub fn statement(&mut self) -> Result<Option<Statement>> {
        let position = self.cursor.position();
        let statement = match self.cursor.kind() {
            Kind::Ident => {
                let ident = self.cursor.advance()?;
                self.cursor.expect(Kind::Assign)?;
                Statement::Assign(position, ident.text.into(), self.expression()?)
            }
            Kind::Print => {
                self.cursor.advance()?;
                Statement::Print(position, self.expression()?)
            }
            Kind::End => return Ok(None),
            _ => return Err(self.cursor.unexpected("statement")),
        };
        debug!("parsed `{}` at {}", statement, position);
        Ok(Some(statement))
    }

    fn expression(&mut self) -> Result<Expression> {
        self.fold(Kind::Or, Operator::Or, Self::term)
    }

    fn term(&mut self) -> Result<Expression> {
        self.fold(Kind::Xor, Operator::Xor, Self::factor)
    }

    fn factor(&mut self) -> Result<Expression> {
        self.fold(Kind::And, Operator::And, Self::atom)
    }

    /// `operand (kind operand)*`, collected into one chain.
    fn fold(
        &mut self,
        kind: Kind,
        op: Operator,
        operand: fn(&mut Self) -> Result<Expression>,
    ) -> Result<Expression> {
        let first = operand(self)?;
        if self.cursor.kind() != kind {
            return Ok(first);
        }
        let position = self.cursor.position();
        let mut rest = vec![];
        while self.cursor.kind() == kind {
            self.cursor.advance()?;
            rest.push(operand(self)?);
        }
        Ok(Expression::chain(position, op, first, rest))
    }

    fn atom(&mut self) -> Result<Expression> {
        match self.cursor.kind() {
            Kind::LParen => {
                if self.depth >= MAX_DEPTH {
                    return Err(error!(ParseError, self.cursor.position();
                        format!("Groups nested deeper than {}", MAX_DEPTH)));
                }
                self.cursor.advance()?;
                self.depth += 1;
                let expr = self.expression()?;
                self.depth -= 1;
                self.cursor.expect(Kind::RParen)?;
                Ok(expr)
            }
            Kind::Ident => {
                let ident = self.cursor.advance()?;
                Ok(Expression::Var(self.cursor.position(), ident.text.into()))
            }
            Kind::Binary => {
                let binary = self.cursor.advance()?;
                match BigUint::from_str_radix(&binary.text, 2) {
                    Ok(n) => Ok(Expression::Literal(binary.position, n)),
                    Err(e) => Err(error!(InternalError, binary.position;
                        format!("Invalid binary literal {}: {}", binary, e))),
                }
            }
            _ => Err(self.cursor.unexpected("atom")),
        }
    }
}
