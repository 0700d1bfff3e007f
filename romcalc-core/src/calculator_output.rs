use std::fmt::Display;

use crate::{numeral::NumeralSystem, operators::Operator};

/// Trace events recorded by a `Calculator` while tracing is enabled.
#[derive(Debug, PartialEq)]
pub enum CalculatorOutput {
    Classified(NumeralSystem),
    Operands(i64, i64),
    Computed(i64, Operator, i64, i64),
}

impl Display for CalculatorOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalculatorOutput::Classified(system) => write!(f, "#system {}", system),
            CalculatorOutput::Operands(left, right) => write!(f, "#operands {} {}", left, right),
            CalculatorOutput::Computed(left, op, right, result) => {
                write!(f, "#computed {} {} {} = {}", left, op, right, result)
            }
        }
    }
}
