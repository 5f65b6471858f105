use super::Position;
use num_bigint::BigUint;
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Assign(Position, Rc<str>, Expression),
    Print(Position, Expression),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    And,
    Or,
    Xor,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Literal(Position, BigUint),
    /// The position is the lookahead that followed the name when it was
    /// read, which is where an undefined-variable failure is reported.
    Var(Position, Rc<str>),
    /// `first op rest[0] op rest[1] ...`, applied left to right. The
    /// position is that of the first operator. Keeping a whole chain in
    /// one node bounds the tree depth by grouping, not by chain length.
    Chain(Position, Operator, Box<Expression>, Vec<Expression>),
}

impl Expression {
    pub fn chain(
        pos: Position,
        op: Operator,
        first: Expression,
        rest: Vec<Expression>,
    ) -> Expression {
        Expression::Chain(pos, op, Box::new(first), rest)
    }

    pub fn position(&self) -> Position {
        use Expression::*;
        match self {
            Literal(pos, _) | Var(pos, _) | Chain(pos, _, _, _) => *pos,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            And => write!(f, "and"),
            Or => write!(f, "or"),
            Xor => write!(f, "xor"),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Expression::*;
        match self {
            Literal(_, n) => write!(f, "{:b}", n),
            Var(_, name) => write!(f, "{}", name),
            Chain(_, op, first, rest) => {
                write!(f, "({}", first)?;
                for operand in rest {
                    write!(f, " {} {}", op, operand)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            Assign(_, name, expr) => write!(f, "{} = {}", name, expr),
            Print(_, expr) => write!(f, "print {}", expr),
        }
    }
}
