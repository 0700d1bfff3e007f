use std::{
    backtrace::{Backtrace, BacktraceStatus},
    error::Error,
    fmt::Display,
    ops::Range,
};

#[derive(Debug, PartialEq)]
pub enum CalcError {
    /// The line didn't split into exactly `<operand> <operator> <operand>`.
    MalformedInput { token_count: usize },
    MixedNumeralSystems,
    /// The argument is the Arabic operand that failed to parse.
    InvalidNumberFormat(String),
    /// The argument is the offending operand's converted value.
    OperandOutOfRange(i64),
    UnknownOperator(String),
    DivisionByZero,
    /// Only reachable when operators are applied outside the operand range.
    Overflow,
    /// Roman numerals can't express zero or negative results. The argument
    /// is the result that was computed.
    ResultBelowRomanRange(i64),
}

impl Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::MalformedInput { token_count } => write!(
                f,
                "MALFORMED INPUT: expected '<operand> <operator> <operand>' but got {} token(s)",
                token_count
            ),
            CalcError::MixedNumeralSystems => write!(
                f,
                "MIXED NUMERAL SYSTEMS: operands must both be roman or both be arabic"
            ),
            CalcError::InvalidNumberFormat(token) => {
                write!(f, "INVALID NUMBER FORMAT: '{}'", token)
            }
            CalcError::OperandOutOfRange(value) => {
                write!(f, "OPERAND OUT OF RANGE: {} is not between 1 and 10", value)
            }
            CalcError::UnknownOperator(token) => write!(f, "UNKNOWN OPERATOR: '{}'", token),
            CalcError::DivisionByZero => write!(f, "DIVISION BY ZERO"),
            CalcError::Overflow => write!(f, "OVERFLOW"),
            CalcError::ResultBelowRomanRange(value) => write!(
                f,
                "RESULT BELOW ROMAN RANGE: {} can't be written as a roman numeral",
                value
            ),
        }
    }
}

#[derive(Debug)]
pub struct TracedCalcError {
    pub error: CalcError,
    /// The byte range of the token in the input line responsible for the
    /// error, if any single token is.
    pub span: Option<Range<usize>>,
    backtrace: Backtrace,
}

impl TracedCalcError {
    pub fn with_span(error: CalcError, span: Range<usize>) -> Self {
        TracedCalcError {
            error,
            span: Some(span),
            backtrace: Backtrace::capture(),
        }
    }

    /// Returns the given input line along with a second line containing one
    /// or more carets that, when printed below the first in a monospaced
    /// font, "point" at the token that caused the error.
    ///
    /// Returns an empty vector if the error isn't attributable to a token.
    pub fn get_line_with_pointer_caret<T: AsRef<str>>(&self, line: T) -> Vec<String> {
        let line = line.as_ref();
        let Some(span) = &self.span else {
            return vec![];
        };
        if span.start > span.end
            || !line.is_char_boundary(span.start)
            || !line.is_char_boundary(span.end)
        {
            return vec![];
        }
        let width = line[span.clone()].chars().count().max(1);
        let indent = line[..span.start].chars().count();
        vec![
            line.to_owned(),
            format!("{}{}", " ".repeat(indent), "^".repeat(width)),
        ]
    }
}

impl From<CalcError> for TracedCalcError {
    fn from(value: CalcError) -> Self {
        TracedCalcError {
            error: value,
            span: None,
            backtrace: Backtrace::capture(),
        }
    }
}

impl Error for CalcError {}

impl Error for TracedCalcError {}

impl Display for TracedCalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)?;
        if self.backtrace.status() == BacktraceStatus::Captured {
            write!(f, "\nBacktrace:\n{}", self.backtrace)?;
        }
        Ok(())
    }
}
