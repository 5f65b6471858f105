use super::Val;
use crate::error;
use crate::lang::{Error, Position};
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Bindings live for one runtime. Names are never removed.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: Val) {
        self.vars.insert(var_name.clone(), value);
    }

    pub fn fetch(&self, var_name: &Rc<str>, position: Position) -> Result<Val> {
        match self.vars.get(var_name) {
            Some(val) => Ok(val.clone()),
            None => Err(error!(RuntimeError, position;
                format!("Variable {} doesn't exist", var_name))),
        }
    }
}
