use std::fmt::Display;

use crate::{numeral::NumeralSystem, roman::int_to_roman};

/// The outcome of a successful evaluation, along with the numeral system
/// it should be rendered in.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct EvaluationResult {
    pub value: i64,
    pub system: NumeralSystem,
}

impl Display for EvaluationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.system {
            NumeralSystem::Roman => write!(f, "{}", int_to_roman(self.value)),
            NumeralSystem::Arabic => write!(f, "{}", self.value),
        }
    }
}
