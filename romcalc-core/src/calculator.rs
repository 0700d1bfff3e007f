use crate::{
    calc_error::{CalcError, TracedCalcError},
    calculator_output::CalculatorOutput,
    expression::Expression,
    numeral::{classify, NumeralSystem},
    operators::Operator,
    roman::roman_to_int,
    tokenizer::TokenWithRange,
    value::EvaluationResult,
};

const MIN_OPERAND: i64 = 1;
const MAX_OPERAND: i64 = 10;

/// Evaluates single-operation expressions like `7 + 5` or `X * VI`.
///
/// Each call to `evaluate` is independent; the only state kept between
/// calls is trace output that hasn't been taken yet.
#[derive(Default, Debug)]
pub struct Calculator {
    output: Vec<CalculatorOutput>,
    pub enable_tracing: bool,
}

impl Calculator {
    pub fn take_output(&mut self) -> Vec<CalculatorOutput> {
        std::mem::take(&mut self.output)
    }

    fn trace(&mut self, output: CalculatorOutput) {
        if self.enable_tracing {
            self.output.push(output);
        }
    }

    pub fn evaluate<T: AsRef<str>>(
        &mut self,
        line: T,
    ) -> Result<EvaluationResult, TracedCalcError> {
        let expr = Expression::parse(line.as_ref())?;

        let system = match (classify(expr.left.0), classify(expr.right.0)) {
            (NumeralSystem::Roman, NumeralSystem::Roman) => NumeralSystem::Roman,
            (NumeralSystem::Arabic, NumeralSystem::Arabic) => NumeralSystem::Arabic,
            _ => return Err(CalcError::MixedNumeralSystems.into()),
        };
        self.trace(CalculatorOutput::Classified(system));

        let left = parse_operand(&expr.left, system)?;
        let right = parse_operand(&expr.right, system)?;
        self.trace(CalculatorOutput::Operands(left, right));

        for ((_, range), value) in expr.operands().into_iter().zip([left, right]) {
            if !(MIN_OPERAND..=MAX_OPERAND).contains(&value) {
                return Err(TracedCalcError::with_span(
                    CalcError::OperandOutOfRange(value),
                    range.clone(),
                ));
            }
        }

        let (op_token, op_range) = &expr.operator;
        let Some(op) = Operator::from_token(op_token) else {
            return Err(TracedCalcError::with_span(
                CalcError::UnknownOperator(op_token.to_string()),
                op_range.clone(),
            ));
        };
        let value = op
            .evaluate(left, right)
            .map_err(|err| TracedCalcError::with_span(err, expr.right.1.clone()))?;
        self.trace(CalculatorOutput::Computed(left, op, right, value));

        if system == NumeralSystem::Roman && value < MIN_OPERAND {
            return Err(CalcError::ResultBelowRomanRange(value).into());
        }

        Ok(EvaluationResult { value, system })
    }
}

fn parse_operand(
    (token, range): &TokenWithRange,
    system: NumeralSystem,
) -> Result<i64, TracedCalcError> {
    let value = match system {
        NumeralSystem::Roman => roman_to_int(token),
        NumeralSystem::Arabic => token.parse::<i64>().ok(),
    };
    value.ok_or_else(|| {
        TracedCalcError::with_span(
            CalcError::InvalidNumberFormat(token.to_string()),
            range.clone(),
        )
    })
}

/// Evaluates the given line and renders the result in the numeral system
/// its operands were written in.
pub fn evaluate<T: AsRef<str>>(line: T) -> Result<String, TracedCalcError> {
    Calculator::default()
        .evaluate(line)
        .map(|result| result.to_string())
}

#[cfg(test)]
mod tests {
    use crate::{
        calculator::Calculator, calculator_output::CalculatorOutput, numeral::NumeralSystem,
        operators::Operator,
    };

    #[test]
    fn tracing_is_off_by_default() {
        let mut calc = Calculator::default();
        calc.evaluate("7 + 5").unwrap();
        assert!(calc.take_output().is_empty());
    }

    #[test]
    fn tracing_records_each_stage() {
        let mut calc = Calculator::default();
        calc.enable_tracing = true;
        calc.evaluate("VII / III").unwrap();
        assert_eq!(
            calc.take_output(),
            vec![
                CalculatorOutput::Classified(NumeralSystem::Roman),
                CalculatorOutput::Operands(7, 3),
                CalculatorOutput::Computed(7, Operator::Divide, 3, 2),
            ]
        );
        assert!(calc.take_output().is_empty());
    }

    #[test]
    fn tracing_stops_at_first_failure() {
        let mut calc = Calculator::default();
        calc.enable_tracing = true;
        assert!(calc.evaluate("11 + 2").is_err());
        assert_eq!(
            calc.take_output(),
            vec![
                CalculatorOutput::Classified(NumeralSystem::Arabic),
                CalculatorOutput::Operands(11, 2),
            ]
        );
    }
}
