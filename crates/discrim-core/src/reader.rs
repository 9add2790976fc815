//! Interactive coefficient input with per-token validation

use crate::{Coefficients, Error, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::debug;

const HEADER: &str = "Enter coefficients for quadratic equation ax² + bx + c = 0";
const RETRY_PROMPT: &str = "Error: please enter a valid number! Try again: ";

/// Reads three coefficients from a token stream, prompting on a sink
///
/// Generic over the input and output streams so tests can drive it with
/// in-memory buffers while the binary wires up stdin and stdout. Tokens
/// are whitespace delimited; several may arrive on one line, and
/// leftovers are buffered for the next prompt.
///
/// # Example
///
/// ```
/// use discrim_core::CoefficientReader;
/// use std::io::Cursor;
///
/// let mut prompts = Vec::new();
/// let mut reader = CoefficientReader::new(Cursor::new("1 -3 2\n"), &mut prompts);
/// let coefficients = reader.read_all()?;
/// assert_eq!(coefficients.b, -3.0);
/// # Ok::<(), discrim_core::Error>(())
/// ```
pub struct CoefficientReader<R, W> {
    source: R,
    sink: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> CoefficientReader<R, W> {
    /// Create a reader over an input stream and a prompt sink
    pub fn new(source: R, sink: W) -> Self {
        Self {
            source,
            sink,
            pending: VecDeque::new(),
        }
    }

    /// Print the header and read `a`, `b`, `c` in that fixed order
    pub fn read_all(&mut self) -> Result<Coefficients> {
        writeln!(self.sink, "{HEADER}")?;

        let a = self.read_coefficient("Enter coefficient a: ")?;
        let b = self.read_coefficient("Enter coefficient b: ")?;
        let c = self.read_coefficient("Enter coefficient c: ")?;

        Ok(Coefficients::new(a, b, c))
    }

    /// Prompt once, then loop until a token parses as a finite double
    ///
    /// Invalid tokens are consumed and answered with a retry prompt. The
    /// loop is unbounded; it ends only with a valid value or
    /// [`Error::EndOfInput`] when the stream closes.
    pub fn read_coefficient(&mut self, prompt: &str) -> Result<f64> {
        write!(self.sink, "{prompt}")?;
        self.sink.flush()?;

        loop {
            let token = self.next_token()?.ok_or(Error::EndOfInput)?;
            match token.parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    debug!(token = %token, value, "accepted coefficient");
                    return Ok(value);
                }
                _ => {
                    debug!(token = %token, "rejected token");
                    write!(self.sink, "{RETRY_PROMPT}")?;
                    self.sink.flush()?;
                }
            }
        }
    }

    /// Next whitespace-delimited token, or `None` at end of input
    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.source.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}
