//! Resolved game settings shared across crates.
//!
//! Raw TOML deserialization structs (with `Option` fields and strings) stay
//! private in `neardouble-config`. The config loader resolves them into this
//! type at the parse boundary, so a `GameSettings` always holds a valid
//! starting equation if it holds one at all.

use crate::equation::Equation;
use crate::{FocusSet, Mode};

/// Starting configuration for a controller session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameSettings {
    focus_set: FocusSet,
    mode: Mode,
    start_equation: Option<Equation>,
}

impl GameSettings {
    #[must_use]
    pub const fn new(focus_set: FocusSet, mode: Mode) -> Self {
        Self {
            focus_set,
            mode,
            start_equation: None,
        }
    }

    /// Open the session on `equation` instead of a random draw.
    #[must_use]
    pub const fn with_start_equation(mut self, equation: Equation) -> Self {
        self.start_equation = Some(equation);
        self
    }

    #[must_use]
    pub const fn focus_set(&self) -> FocusSet {
        self.focus_set
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn start_equation(&self) -> Option<Equation> {
        self.start_equation
    }
}
