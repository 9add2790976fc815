//! Discriminant computation and result reporting

use crate::{Coefficients, Result};
use std::fmt;
use std::io::Write;
use tracing::debug;

/// Root-count classification of a quadratic by its discriminant sign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootClass {
    /// Discriminant strictly positive
    TwoReal,
    /// Discriminant exactly zero
    OneReal,
    /// Discriminant negative (or NaN, which fails both sign tests)
    NoReal,
}

impl RootClass {
    /// Classify a discriminant value
    ///
    /// Zero is matched by exact equality, no epsilon tolerance. This is
    /// numerically fragile for computed (rather than typed-in) inputs,
    /// and kept that way on purpose. NaN falls through to [`NoReal`]
    /// because it fails both comparisons.
    ///
    /// [`NoReal`]: RootClass::NoReal
    pub fn from_discriminant(discriminant: f64) -> Self {
        if discriminant > 0.0 {
            Self::TwoReal
        } else if discriminant == 0.0 {
            Self::OneReal
        } else {
            Self::NoReal
        }
    }
}

impl fmt::Display for RootClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::TwoReal => "Two real roots",
            Self::OneReal => "One real root",
            Self::NoReal => "No real roots",
        };
        f.write_str(text)
    }
}

/// Computes the discriminant of a coefficient triple and reports it
///
/// # Example
///
/// ```
/// use discrim_core::{Coefficients, DiscriminantEngine, RootClass};
///
/// let engine = DiscriminantEngine::new(Coefficients::new(1.0, -3.0, 2.0));
/// assert_eq!(engine.calculate(), 1.0);
/// assert_eq!(engine.classify(), RootClass::TwoReal);
/// ```
pub struct DiscriminantEngine {
    coefficients: Coefficients,
}

impl DiscriminantEngine {
    /// Create an engine for one coefficient triple
    pub fn new(coefficients: Coefficients) -> Self {
        Self { coefficients }
    }

    /// `b*b - 4*a*c` in plain IEEE-754 double precision
    ///
    /// Overflow saturates to infinity and degenerate inputs produce NaN,
    /// per native float semantics; nothing here ever errors.
    pub fn calculate(&self) -> f64 {
        let Coefficients { a, b, c } = self.coefficients;
        b * b - 4.0 * a * c
    }

    /// Classification of this equation's root count
    pub fn classify(&self) -> RootClass {
        RootClass::from_discriminant(self.calculate())
    }

    /// Compute the discriminant and write the results block to `sink`
    pub fn report<W: Write>(&self, sink: &mut W) -> Result<()> {
        let discriminant = self.calculate();
        debug!(discriminant, "computed discriminant");

        writeln!(sink)?;
        writeln!(sink, "=== Results ===")?;
        writeln!(sink, "Equation: {}", self.coefficients)?;
        writeln!(sink, "Discriminant = {discriminant}")?;
        writeln!(sink, "{}", RootClass::from_discriminant(discriminant))?;
        sink.flush()?;

        Ok(())
    }
}
