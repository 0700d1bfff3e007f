use std::fmt::Display;

use crate::calc_error::CalcError;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    // Like the parsing helpers elsewhere, this returns Option rather than
    // implementing TryFrom, since the caller decides what error to raise.
    pub fn from_token<T: AsRef<str>>(token: T) -> Option<Self> {
        match token.as_ref() {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Applies the operator using integer arithmetic. Division truncates
    /// toward zero.
    pub fn evaluate(&self, left_side: i64, right_side: i64) -> Result<i64, CalcError> {
        let result = match self {
            Operator::Add => left_side.checked_add(right_side),
            Operator::Subtract => left_side.checked_sub(right_side),
            Operator::Multiply => left_side.checked_mul(right_side),
            Operator::Divide => {
                if right_side == 0 {
                    return Err(CalcError::DivisionByZero);
                }
                left_side.checked_div(right_side)
            }
        };
        result.ok_or(CalcError::Overflow)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::Add => write!(f, "+"),
            Operator::Subtract => write!(f, "-"),
            Operator::Multiply => write!(f, "*"),
            Operator::Divide => write!(f, "/"),
        }
    }
}
