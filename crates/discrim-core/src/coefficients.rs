//! The quadratic coefficient triple

use std::fmt;

/// Coefficients of a quadratic equation `ax² + bx + c = 0`
///
/// Constructed once per run by
/// [`CoefficientReader::read_all`](crate::CoefficientReader::read_all) and
/// immutable from then on. All three fields are guaranteed populated:
/// the struct cannot exist partially filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Quadratic coefficient
    pub a: f64,
    /// Linear coefficient
    pub b: f64,
    /// Constant term
    pub c: f64,
}

impl Coefficients {
    /// Create a new coefficient triple
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
}

impl fmt::Display for Coefficients {
    /// Renders the equation with the actual values substituted in,
    /// e.g. `1x² + -3x + 2`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x² + {}x + {}", self.a, self.b, self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_substitutes_values() {
        let coefficients = Coefficients::new(1.0, -3.0, 2.0);
        assert_eq!(coefficients.to_string(), "1x² + -3x + 2");
    }

    #[test]
    fn display_keeps_fractional_parts() {
        let coefficients = Coefficients::new(0.5, 2.25, -1.75);
        assert_eq!(coefficients.to_string(), "0.5x² + 2.25x + -1.75");
    }
}
