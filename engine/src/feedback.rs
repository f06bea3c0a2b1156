//! Learner-facing text derived from a round.
//!
//! The rendering collaborator decides layout and styling; the words come
//! from here so every shell phrases the game the same way.

use neardouble_types::{MOUSE_GOAL, Round, RoundType, Zone};

/// Headline and strategy line shown once a round is solved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Celebration {
    pub headline: String,
    pub strategy: String,
}

/// Banner above the zones, e.g. `Solve: 6 + 7 = ?`. Hidden once solved.
#[must_use]
pub fn equation_prompt(round: &Round) -> Option<String> {
    (!round.solved()).then(|| format!("Solve: {}", round.equation().prompt()))
}

/// Question posed in unsolved fix rounds.
#[must_use]
pub fn fix_banner(round: &Round) -> Option<&'static str> {
    (round.round_type() == RoundType::Fix && !round.solved()).then_some("Is this correct?")
}

/// Instruction printed inside a zone.
#[must_use]
pub fn zone_label(round: &Round, zone: Zone) -> String {
    match zone {
        Zone::Cat | Zone::Dog => format!(
            "{} gets {} {}",
            zone.display_name(),
            round.goal(zone),
            zone.treat()
        ),
        Zone::Mouse => format!("Mouse gets +{MOUSE_GOAL} {}", zone.treat()),
    }
}

/// `count/goal` under a zone.
#[must_use]
pub fn progress_label(round: &Round, zone: Zone) -> String {
    format!("{}/{}", round.count(zone), round.goal(zone))
}

/// Reminder shown under the mouse while its button is disabled.
#[must_use]
pub fn mouse_hint(round: &Round) -> Option<&'static str> {
    (!round.mouse_enabled()).then_some("The Mouse will get the last snack!")
}

#[must_use]
pub fn celebration(round: &Round) -> Option<Celebration> {
    if !round.solved() {
        return None;
    }
    let equation = round.equation();
    let smaller = equation.smaller();
    Some(Celebration {
        headline: format!("Nice! {equation} = {}", equation.target()),
        strategy: format!("You built it with {smaller} + {smaller} + {MOUSE_GOAL}."),
    })
}

/// Footer comparing the running total to the target.
#[must_use]
pub fn status_line(round: &Round) -> String {
    format!("Target: {} · Result: {}", round.target(), round.total())
}
