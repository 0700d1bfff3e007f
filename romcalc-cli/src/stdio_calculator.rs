use std::io::{stdin, IsTerminal};
use std::path::PathBuf;

use crate::cli_args::CliArgs;
use colored::*;
use romcalc_core::{Calculator, TracedCalcError};
use rustyline::{error::ReadlineError, DefaultEditor};

const HISTORY_FILENAME: &'static str = ".romcalc-history.txt";

const PROMPT_MESSAGE: &'static str = "Enter an expression (e.g. 7 + 5 or X * VI):";

fn get_history_path() -> Option<PathBuf> {
    // std::env::home_dir() is deprecated because it's wrong on a few
    // platforms like Cygwin, which we don't support anyways.
    #[allow(deprecated)]
    if let Some(path) = std::env::home_dir() {
        if path.exists() {
            Some(path.join(HISTORY_FILENAME))
        } else {
            None
        }
    } else {
        None
    }
}

pub struct StdioCalculator {
    args: CliArgs,
    calculator: Calculator,
}

impl StdioCalculator {
    pub fn new(args: CliArgs) -> Self {
        let calculator = args.create_calculator();
        StdioCalculator { args, calculator }
    }

    fn show_calculator_output(&mut self) {
        for output in self.calculator.take_output() {
            eprintln!("{}", output.to_string().blue());
        }
    }

    fn show_error(&self, err: TracedCalcError, line: &str) {
        eprintln!("{}", err.to_string().red());
        for line in err.get_line_with_pointer_caret(line) {
            eprintln!("{}", format!("| {line}").dimmed());
        }
    }

    fn read_line_interactively(&self) -> Result<String, i32> {
        let Ok(mut rl) = DefaultEditor::new() else {
            eprintln!("Initializing DefaultEditor failed!");
            return Err(1);
        };

        let history_path = get_history_path();

        // If loading fails it's most likely because the file doesn't exist
        // yet, and history is optional anyways.
        history_path.clone().map(|path| rl.load_history(&path));

        if !self.args.quiet {
            println!("{}", PROMPT_MESSAGE);
        }

        let result = match rl.readline("> ") {
            Ok(line) => {
                if let Err(err) = rl.add_history_entry(line.as_str()) {
                    eprintln!("WARNING: Failed to add history entry ({:?}).", err);
                }
                Ok(line)
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("CTRL-C pressed, exiting.");
                Err(1)
            }
            Err(ReadlineError::Eof) => {
                eprintln!("{}", "NO INPUT".red());
                Err(1)
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                Err(1)
            }
        };

        // Same as loading, failing to save history isn't worth reporting.
        history_path.map(|path| rl.save_history(&path));

        result
    }

    fn read_line_from_pipe(&self) -> Result<String, i32> {
        let mut line = String::new();
        match stdin().read_line(&mut line) {
            Ok(0) => {
                eprintln!("{}", "NO INPUT".red());
                Err(1)
            }
            Ok(_) => Ok(line),
            Err(err) => {
                eprintln!("Error reading stdin: {}", err);
                Err(1)
            }
        }
    }

    fn read_line(&self) -> Result<String, i32> {
        if let Some(expression) = &self.args.expression {
            Ok(expression.clone())
        } else if stdin().is_terminal() {
            self.read_line_interactively()
        } else {
            self.read_line_from_pipe()
        }
    }

    pub fn run(&mut self) -> i32 {
        match self.run_impl() {
            Ok(_) => 0,
            Err(exit_code) => exit_code,
        }
    }

    fn run_impl(&mut self) -> Result<(), i32> {
        let line = self.read_line()?;
        let result = self.calculator.evaluate(&line);

        // Regardless of whether an error occurred, show any trace output.
        self.show_calculator_output();

        match result {
            Ok(result) => {
                println!("{}", result);
                Ok(())
            }
            Err(err) => {
                self.show_error(err, line.trim_end_matches(['\r', '\n']));
                Err(1)
            }
        }
    }
}
