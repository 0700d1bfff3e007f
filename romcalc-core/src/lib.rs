mod calc_error;
mod calculator;
mod calculator_output;
mod expression;
mod numeral;
mod operators;
mod roman;
mod tokenizer;
mod value;

pub use calc_error::{CalcError, TracedCalcError};
pub use calculator::{evaluate, Calculator};
pub use calculator_output::CalculatorOutput;
pub use expression::Expression;
pub use numeral::{classify, is_roman_numeral, NumeralSystem, RomanDigit};
pub use operators::Operator;
pub use roman::{int_to_roman, roman_to_int};
pub use tokenizer::{TokenWithRange, Tokenizer};
pub use value::EvaluationResult;
