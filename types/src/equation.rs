//! Near-double equations and the text validator that produces them.
//!
//! An [`Equation`] can only be obtained through [`Equation::new`] or
//! [`parse_equation_text`], so existence of a value is proof that both
//! addends are positive, the total is at most [`MAX_TOTAL`], and the addends
//! differ by exactly one.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Largest total the game accepts from typed input.
pub const MAX_TOTAL: u32 = 20;

// ASCII digits only: `\d` would also accept non-ASCII numerals.
static EQUATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2})\+([0-9]{1,2})$").expect("valid equation regex"));

/// Why a typed equation was rejected.
///
/// `Display` yields the message shown to the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input is not of the form `NN+NN`.
    #[error("Type an equation like 6+7")]
    MalformedInput,
    /// An addend is zero or the total is too large.
    #[error("Try numbers between 1 and 20, with a friendly total.")]
    OutOfRange,
    /// The addends do not differ by exactly one.
    #[error("This game focuses on near doubles. Please enter numbers that differ by 1 (e.g., 6+7).")]
    NotNearDouble,
}

impl ValidationError {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ValidationError::MalformedInput => "malformed_input",
            ValidationError::OutOfRange => "out_of_range",
            ValidationError::NotNearDouble => "not_near_double",
        }
    }
}

/// A near-double addition problem.
///
/// `a` and `b` keep the order they were listed in; goals only ever use
/// [`Equation::smaller`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Equation {
    a: u32,
    b: u32,
}

impl Equation {
    /// Validate a pair of addends.
    ///
    /// Range is checked before the near-double property, so `0+1` reports
    /// [`ValidationError::OutOfRange`].
    pub fn new(a: u32, b: u32) -> Result<Self, ValidationError> {
        if a < 1 || b < 1 || a.saturating_add(b) > MAX_TOTAL {
            return Err(ValidationError::OutOfRange);
        }
        if a.abs_diff(b) != 1 {
            return Err(ValidationError::NotNearDouble);
        }
        Ok(Self { a, b })
    }

    /// Build the near double around `smaller`, listing it first or second.
    pub fn from_smaller(smaller: u32, smaller_first: bool) -> Result<Self, ValidationError> {
        let larger = smaller.saturating_add(1);
        if smaller_first {
            Self::new(smaller, larger)
        } else {
            Self::new(larger, smaller)
        }
    }

    #[must_use]
    pub const fn a(&self) -> u32 {
        self.a
    }

    #[must_use]
    pub const fn b(&self) -> u32 {
        self.b
    }

    #[must_use]
    pub fn smaller(&self) -> u32 {
        self.a.min(self.b)
    }

    #[must_use]
    pub fn larger(&self) -> u32 {
        self.a.max(self.b)
    }

    #[must_use]
    pub const fn target(&self) -> u32 {
        self.a + self.b
    }

    /// The problem as posed to the learner, e.g. `6 + 7 = ?`.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{} + {} = ?", self.a, self.b)
    }
}

/// `6+7`, the example the input box suggests.
impl Default for Equation {
    fn default() -> Self {
        Self { a: 6, b: 7 }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.a, self.b)
    }
}

impl std::str::FromStr for Equation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_equation_text(s)
    }
}

/// Parse free-form equation text such as `" 9 + 10 "`.
///
/// All whitespace is removed first. Anything other than one or two digits,
/// `+`, one or two digits is [`ValidationError::MalformedInput`]; the numbers
/// are then checked with [`Equation::new`].
pub fn parse_equation_text(raw: &str) -> Result<Equation, ValidationError> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let captures = EQUATION_PATTERN
        .captures(&cleaned)
        .ok_or(ValidationError::MalformedInput)?;

    let x = captures[1]
        .parse::<u32>()
        .map_err(|_| ValidationError::MalformedInput)?;
    let y = captures[2]
        .parse::<u32>()
        .map_err(|_| ValidationError::MalformedInput)?;

    Equation::new(x, y)
}
