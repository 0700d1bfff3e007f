use romcalc_core::Calculator;
use clap::Parser;

/// Evaluates a single expression like `7 + 5` or `X * VI`, where both
/// operands are between 1 and 10 and written in the same numeral system.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Expression to evaluate. If omitted, a single line is read from stdin.
    pub expression: Option<String>,

    /// Don't show a prompt when reading from a terminal.
    #[arg(short, long)]
    pub quiet: bool,

    /// Print each stage of evaluation to stderr.
    #[arg(short, long)]
    pub tracing: bool,
}

impl CliArgs {
    pub fn create_calculator(&self) -> Calculator {
        let mut calculator = Calculator::default();
        calculator.enable_tracing = self.tracing;
        calculator
    }
}
