use crate::{
    calc_error::{CalcError, TracedCalcError},
    tokenizer::{TokenWithRange, Tokenizer},
};

/// A single binary expression of the form `<operand> <operator> <operand>`,
/// borrowed from the line it was parsed from.
#[derive(Debug, PartialEq)]
pub struct Expression<'a> {
    pub left: TokenWithRange<'a>,
    pub operator: TokenWithRange<'a>,
    pub right: TokenWithRange<'a>,
}

impl<'a> Expression<'a> {
    pub fn parse(line: &'a str) -> Result<Self, TracedCalcError> {
        let tokens = Tokenizer::new(line).collect::<Vec<_>>();
        match <[TokenWithRange<'a>; 3]>::try_from(tokens) {
            Ok([left, operator, right]) => Ok(Expression {
                left,
                operator,
                right,
            }),
            Err(tokens) => {
                let error = CalcError::MalformedInput {
                    token_count: tokens.len(),
                };
                // Point at the surplus tokens, if there are any.
                Err(match (tokens.get(3), tokens.last()) {
                    (Some((_, first)), Some((_, last))) => {
                        TracedCalcError::with_span(error, first.start..last.end)
                    }
                    _ => error.into(),
                })
            }
        }
    }

    pub fn operands(&self) -> [&TokenWithRange<'a>; 2] {
        [&self.left, &self.right]
    }
}
