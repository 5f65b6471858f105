use super::{Val, Var};
use crate::lang::ast::{Expression, Statement};
use crate::lang::token::Token;
use crate::lang::{Error, Parser};
use log::debug;

type Result<T> = std::result::Result<T, Error>;

/// Printed once a recognize-only run reaches the end of its input.
pub const ACCEPTED: &str = "Parsed successfully";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    /// Parse and run every statement.
    Evaluate,
    /// Parse only. The environment is never touched.
    Recognize,
}

impl Default for Mode {
    fn default() -> Mode {
        Mode::Evaluate
    }
}

#[derive(Debug)]
pub enum Event {
    Stopped,
    Print(String),
    Error(Error),
}

enum State {
    Stopped,
    Start,
    Resume(Token),
}

/// ## Runtime
///
/// Source is parsed one statement at a time and each statement runs
/// before the next is read, so output printed ahead of a failure is
/// delivered before the failure is seen. The environment survives
/// `enter` so an interactive session can build on earlier lines.

pub struct Runtime {
    mode: Mode,
    source: String,
    state: State,
    var: Var,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Mode::default())
    }
}

impl Runtime {
    pub fn new(mode: Mode) -> Runtime {
        Runtime {
            mode,
            source: String::new(),
            state: State::Stopped,
            var: Var::new(),
        }
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    /// Replaces any unfinished program with `source`.
    pub fn enter(&mut self, source: &str) {
        self.source = source.to_string();
        self.state = State::Start;
    }

    /// Runs until something observable happens.
    pub fn execute(&mut self) -> Event {
        match self.step() {
            Ok(event) => event,
            Err(error) => {
                debug!("stopped on {}", error);
                self.state = State::Stopped;
                Event::Error(error)
            }
        }
    }

    fn step(&mut self) -> Result<Event> {
        let mut parser = match std::mem::replace(&mut self.state, State::Stopped) {
            State::Stopped => return Ok(Event::Stopped),
            State::Start => Parser::new(&self.source)?,
            State::Resume(la) => Parser::resume(&self.source, la),
        };
        loop {
            let statement = match parser.statement()? {
                Some(statement) => statement,
                None => {
                    return Ok(match self.mode {
                        Mode::Recognize => Event::Print(format!("{}\n", ACCEPTED)),
                        Mode::Evaluate => Event::Stopped,
                    });
                }
            };
            if let Some(s) = run(&mut self.var, self.mode, &statement)? {
                self.state = State::Resume(parser.into_lookahead());
                return Ok(Event::Print(s));
            }
        }
    }
}

fn run(var: &mut Var, mode: Mode, statement: &Statement) -> Result<Option<String>> {
    if mode == Mode::Recognize {
        return Ok(None);
    }
    match statement {
        Statement::Assign(_, name, expr) => {
            let val = evaluate(var, expr)?;
            debug!("{} = {}", name, val);
            var.store(name, val);
            Ok(None)
        }
        Statement::Print(_, expr) => Ok(Some(format!("{}\n", evaluate(var, expr)?))),
    }
}

/// Chains fold left to right in a loop, so the stack only grows with
/// parenthesis nesting.
pub fn evaluate(var: &Var, expr: &Expression) -> Result<Val> {
    match expr {
        Expression::Literal(_, n) => Ok(Val::from(n.clone())),
        Expression::Var(position, name) => var.fetch(name, *position),
        Expression::Chain(_, op, first, rest) => {
            let mut val = evaluate(var, first)?;
            for operand in rest {
                val = val.apply(*op, &evaluate(var, operand)?);
            }
            Ok(val)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ast::Operator;
    use crate::lang::Position;
    use num_bigint::BigUint;

    fn lit(n: u64) -> Expression {
        Expression::Literal(Position::start(), BigUint::from(n))
    }

    fn bin(op: Operator, lhs: Expression, rhs: Expression) -> Expression {
        Expression::chain(Position::start(), op, lhs, vec![rhs])
    }

    #[test]
    fn test_left_and_right_grouping_agree() {
        let var = Var::new();
        for op in [Operator::And, Operator::Or, Operator::Xor].iter() {
            let flat = Expression::chain(
                Position::start(),
                *op,
                lit(0b1100),
                vec![lit(0b1010), lit(0b0110)],
            );
            let left = bin(*op, bin(*op, lit(0b1100), lit(0b1010)), lit(0b0110));
            let right = bin(*op, lit(0b1100), bin(*op, lit(0b1010), lit(0b0110)));
            let flat = evaluate(&var, &flat).unwrap();
            assert_eq!(evaluate(&var, &left).unwrap(), flat);
            assert_eq!(evaluate(&var, &right).unwrap(), flat);
        }
    }

    #[test]
    fn test_long_chain() {
        let var = Var::new();
        let rest = (0..200_000).map(|_| lit(1)).collect();
        let e = Expression::chain(Position::start(), Operator::Xor, lit(1), rest);
        assert_eq!(evaluate(&var, &e).unwrap(), Val::from(1));
    }

    #[test]
    fn test_recognize_ignores_environment() {
        let mut r = Runtime::new(Mode::Recognize);
        r.enter("print undefined");
        match r.execute() {
            Event::Print(s) => assert_eq!(s, "Parsed successfully\n"),
            e => panic!("{:?}", e),
        }
        assert!(matches!(r.execute(), Event::Stopped));
        assert!(r.var().is_empty());
    }

    #[test]
    fn test_stopped_before_enter() {
        let mut r = Runtime::default();
        assert!(matches!(r.execute(), Event::Stopped));
    }
}
