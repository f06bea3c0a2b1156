//! Notifications emitted by the round controller to its rendering collaborator.
//!
//! The controller never calls into the UI. Instead it accumulates
//! [`ControllerEvent`]s here, and the collaborator drains them after each
//! operation to play a chime, show a checkmark, or start the celebration.

use neardouble_types::{Equation, RoundType, ValidationError, Zone};

/// Something the rendering collaborator may want to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    /// A new round began (equation or mode changed).
    RoundStarted {
        equation: Equation,
        round_type: RoundType,
    },
    /// A zone count just arrived at its goal. Fires once per crossing.
    GoalReached(Zone),
    /// The round became solved. Fires once per crossing.
    Solved { equation: Equation },
    /// Typed equation text was rejected; the previous equation stays active.
    ValidationFailed(ValidationError),
}

impl ControllerEvent {
    /// Short description for logs.
    #[must_use]
    pub fn format(&self) -> String {
        match self {
            Self::RoundStarted {
                equation,
                round_type,
            } => format!("round started: {equation} ({round_type})"),
            Self::GoalReached(zone) => format!("{zone} reached goal"),
            Self::Solved { equation } => format!("solved {equation} = {}", equation.target()),
            Self::ValidationFailed(err) => format!("rejected input: {}", err.as_str()),
        }
    }
}

/// Most events held for a collaborator that never drains. Older ones are
/// dropped first.
pub const MAX_PENDING_EVENTS: usize = 64;

/// Queue for pending controller events.
///
/// Unlike a set, repeated events are kept: a cat that reaches its goal,
/// overshoots and comes back reaches it twice.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<ControllerEvent>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: ControllerEvent) {
        tracing::trace!(event = %event.format(), "controller event");
        if self.pending.len() >= MAX_PENDING_EVENTS {
            let dropped = self.pending.remove(0);
            tracing::trace!(event = %dropped.format(), "dropped undrained event");
        }
        self.pending.push(event);
    }

    /// Take all pending events, clearing the queue.
    ///
    /// Returns the events in the order they were emitted.
    pub fn take(&mut self) -> Vec<ControllerEvent> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn pending(&self) -> &[ControllerEvent] {
        &self.pending
    }
}
