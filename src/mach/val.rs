use crate::lang::ast::Operator;
use num_bigint::BigUint;

/// ## Bit-vector value
///
/// Unsigned and unbounded. Displays as its minimal binary digit string.

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Val(BigUint);

impl Val {
    pub fn apply(&self, op: Operator, rhs: &Val) -> Val {
        match op {
            Operator::And => Val(&self.0 & &rhs.0),
            Operator::Or => Val(&self.0 | &rhs.0),
            Operator::Xor => Val(&self.0 ^ &rhs.0),
        }
    }
}

impl From<BigUint> for Val {
    fn from(n: BigUint) -> Val {
        Val(n)
    }
}

impl From<u64> for Val {
    fn from(n: u64) -> Val {
        Val(BigUint::from(n))
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:b}", self.0)
    }
}
