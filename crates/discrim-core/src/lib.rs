//! Core components for the discriminant calculator
//!
//! This crate defines the value object and the two components that make up
//! the program: [`CoefficientReader`] acquires the coefficients from an
//! input stream, [`DiscriminantEngine`] computes and reports the result.

pub mod coefficients;
pub mod engine;
pub mod error;
pub mod reader;

pub use coefficients::Coefficients;
pub use engine::{DiscriminantEngine, RootClass};
pub use error::{Error, Result};
pub use reader::CoefficientReader;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Drive the full read -> compute -> report chain over in-memory
    /// buffers and return everything written to the output stream.
    fn run(input: &str) -> Result<String> {
        let mut output = Vec::new();
        let coefficients = {
            let mut reader = CoefficientReader::new(Cursor::new(input), &mut output);
            reader.read_all()?
        };
        DiscriminantEngine::new(coefficients).report(&mut output)?;
        Ok(String::from_utf8(output).expect("output is valid UTF-8"))
    }

    #[test]
    fn two_real_roots_scenario() {
        let transcript = run("1 -3 2\n").unwrap();
        assert!(transcript.contains("Equation: 1x² + -3x + 2\n"));
        assert!(transcript.contains("Discriminant = 1\n"));
        assert!(transcript.ends_with("Two real roots\n"));
    }

    #[test]
    fn one_real_root_scenario() {
        let transcript = run("1 2 1\n").unwrap();
        assert!(transcript.contains("Discriminant = 0\n"));
        assert!(transcript.ends_with("One real root\n"));
    }

    #[test]
    fn no_real_roots_scenario() {
        let transcript = run("1 0 1\n").unwrap();
        assert!(transcript.contains("Discriminant = -4\n"));
        assert!(transcript.ends_with("No real roots\n"));
    }

    #[test]
    fn invalid_token_retries_then_proceeds() {
        let transcript = run("abc 1 -3 2\n").unwrap();
        let retries = transcript
            .matches("Error: please enter a valid number! Try again: ")
            .count();
        assert_eq!(retries, 1);
        assert!(transcript.ends_with("Two real roots\n"));
    }

    #[test]
    fn exhausted_input_is_fatal() {
        assert!(matches!(run("1 2\n"), Err(Error::EndOfInput)));
    }

    #[test]
    fn clean_run_transcript_order() {
        let transcript = run("1 -3 2\n").unwrap();
        assert_eq!(
            transcript,
            "Enter coefficients for quadratic equation ax² + bx + c = 0\n\
             Enter coefficient a: Enter coefficient b: Enter coefficient c: \n\
             === Results ===\n\
             Equation: 1x² + -3x + 2\n\
             Discriminant = 1\n\
             Two real roots\n"
        );
    }
}
