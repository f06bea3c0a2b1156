//! Core domain types for the near doubles game.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod equation;
mod round;
mod settings;
mod zone;

pub use equation::{Equation, MAX_TOTAL, ValidationError, parse_equation_text};
pub use round::{Counts, MOUSE_CAP, MOUSE_GOAL, OVERSHOOT, Round};
pub use settings::GameSettings;
pub use zone::{Intent, Zone};

use serde::Deserialize;

// ============================================================================
// Focus Set & Mode
// ============================================================================

/// Difficulty tier constraining which near-double pairs may be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusSet {
    #[default]
    Normal,
    Advanced,
}

impl FocusSet {
    pub const ALL: [FocusSet; 2] = [FocusSet::Normal, FocusSet::Advanced];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FocusSet::Normal => "normal",
            FocusSet::Advanced => "advanced",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            FocusSet::Normal => "Normal",
            FocusSet::Advanced => "Advanced",
        }
    }

    /// Candidate values for the smaller addend.
    #[must_use]
    pub const fn smaller_pool(self) -> &'static [u32] {
        match self {
            FocusSet::Normal => &[2, 3, 4, 5, 6, 7],
            FocusSet::Advanced => &[6, 7, 8, 9],
        }
    }
}

/// Selection policy for the type of each new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Build or fix, chosen at random for every round.
    #[default]
    Mixed,
    Build,
    Fix,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Mixed, Mode::Build, Mode::Fix];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Mixed => "mixed",
            Mode::Build => "build",
            Mode::Fix => "fix",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Mode::Mixed => "Mixed",
            Mode::Build => "Build It",
            Mode::Fix => "Fix It",
        }
    }

    /// The round type this mode forces, or `None` when it leaves the choice to chance.
    #[must_use]
    pub const fn fixed_round_type(self) -> Option<RoundType> {
        match self {
            Mode::Mixed => None,
            Mode::Build => Some(RoundType::Build),
            Mode::Fix => Some(RoundType::Fix),
        }
    }
}

/// Concrete type of the round currently in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundType {
    /// Learner starts from empty zones.
    #[default]
    Build,
    /// Learner starts from the "bigger double plus one" mistake.
    Fix,
}

impl RoundType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RoundType::Build => "build",
            RoundType::Fix => "fix",
        }
    }
}

impl std::fmt::Display for RoundType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_set_pools() {
        assert_eq!(FocusSet::Normal.smaller_pool(), &[2, 3, 4, 5, 6, 7]);
        assert_eq!(FocusSet::Advanced.smaller_pool(), &[6, 7, 8, 9]);
    }

    #[test]
    fn mode_fixed_round_type() {
        assert_eq!(Mode::Mixed.fixed_round_type(), None);
        assert_eq!(Mode::Build.fixed_round_type(), Some(RoundType::Build));
        assert_eq!(Mode::Fix.fixed_round_type(), Some(RoundType::Fix));
    }

    #[test]
    fn defaults_match_first_load() {
        assert_eq!(FocusSet::default(), FocusSet::Normal);
        assert_eq!(Mode::default(), Mode::Mixed);
        assert_eq!(RoundType::default(), RoundType::Build);
    }
}
