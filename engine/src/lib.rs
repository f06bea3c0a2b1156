//! Core engine for the near doubles game - the round controller.
//!
//! This crate owns the session state machine without any rendering
//! dependencies. A UI shell constructs one [`RoundController`], forwards
//! button presses and text submissions to it, reads back the derived state,
//! and drains [`ControllerEvent`]s to drive sounds and animations.

mod chooser;
pub mod feedback;
mod generator;
mod goals;
mod notifications;

pub use chooser::{Chooser, ScriptedChooser, ThreadChooser};
pub use generator::generate;
pub use notifications::{ControllerEvent, EventQueue, MAX_PENDING_EVENTS};

// Re-export from crates for public API
pub use neardouble_config::{self, ConfigError};
pub use neardouble_types::{
    Counts, Equation, FocusSet, GameSettings, Intent, Mode, Round, RoundType, ValidationError,
    Zone, parse_equation_text,
};

use goals::GoalLatches;

/// The near doubles session: current equation, round and pending events.
///
/// Exclusively owned by the UI shell; every operation runs to completion
/// synchronously.
pub struct RoundController {
    focus_set: FocusSet,
    mode: Mode,
    round: Round,
    /// Rounds started so far. The first one is always a build round.
    round_number: u64,
    last_error: Option<ValidationError>,
    latches: GoalLatches,
    events: EventQueue,
    chooser: Box<dyn Chooser>,
}

impl std::fmt::Debug for RoundController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundController")
            .field("focus_set", &self.focus_set)
            .field("mode", &self.mode)
            .field("round", &self.round)
            .field("round_number", &self.round_number)
            .field("last_error", &self.last_error)
            .field("pending_events", &self.events.len())
            .finish_non_exhaustive()
    }
}

impl Default for RoundController {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}

impl RoundController {
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        Self::with_chooser(settings, Box::new(ThreadChooser))
    }

    /// Build a controller whose random draws come from `chooser`.
    #[must_use]
    pub fn with_chooser(settings: GameSettings, mut chooser: Box<dyn Chooser>) -> Self {
        let equation = settings
            .start_equation()
            .unwrap_or_else(|| generate(settings.focus_set(), chooser.as_mut()));

        let mut controller = Self {
            focus_set: settings.focus_set(),
            mode: settings.mode(),
            round: Round::new(equation, RoundType::Build),
            round_number: 0,
            last_error: None,
            latches: GoalLatches::default(),
            events: EventQueue::new(),
            chooser,
        };
        controller.start_round(equation);
        controller
    }

    /// Build a controller from the user's config file.
    ///
    /// A missing file means defaults. A broken file is logged and also falls
    /// back to defaults; the error is returned alongside so the shell can
    /// surface it.
    #[must_use]
    pub fn from_config() -> (Self, Option<ConfigError>) {
        match neardouble_config::load_settings() {
            Ok(settings) => (Self::new(settings), None),
            Err(err) => {
                tracing::warn!("Ignoring config: {err}");
                (Self::default(), Some(err))
            }
        }
    }

    // ========================================================================
    // Read accessors
    // ========================================================================

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn equation(&self) -> &Equation {
        self.round.equation()
    }

    #[must_use]
    pub fn focus_set(&self) -> FocusSet {
        self.focus_set
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn round_type(&self) -> RoundType {
        self.round.round_type()
    }

    #[must_use]
    pub fn round_number(&self) -> u64 {
        self.round_number
    }

    #[must_use]
    pub fn counts(&self) -> Counts {
        self.round.counts()
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.round.total()
    }

    #[must_use]
    pub fn solved(&self) -> bool {
        self.round.solved()
    }

    #[must_use]
    pub fn mouse_enabled(&self) -> bool {
        self.round.mouse_enabled()
    }

    #[must_use]
    pub fn intent(&self, zone: Zone) -> Intent {
        self.round.intent(zone)
    }

    #[must_use]
    pub fn result_intent(&self) -> Intent {
        self.round.result_intent()
    }

    #[must_use]
    pub fn goal(&self, zone: Zone) -> u32 {
        self.round.goal(zone)
    }

    #[must_use]
    pub fn cap(&self, zone: Zone) -> u32 {
        self.round.cap(zone)
    }

    /// The most recent rejected submission, until the next equation change.
    #[must_use]
    pub fn last_error(&self) -> Option<ValidationError> {
        self.last_error
    }

    /// Events emitted since the last [`RoundController::take_events`], at
    /// most [`MAX_PENDING_EVENTS`] of the newest.
    #[must_use]
    pub fn pending_events(&self) -> &[ControllerEvent] {
        self.events.pending()
    }

    /// Drain pending events in emission order.
    pub fn take_events(&mut self) -> Vec<ControllerEvent> {
        self.events.take()
    }

    // ========================================================================
    // Equation & mode changes
    // ========================================================================

    /// Switch difficulty tier and draw a fresh equation from it.
    /// Re-selecting the active tier does nothing.
    pub fn set_focus_set(&mut self, focus_set: FocusSet) {
        if focus_set == self.focus_set {
            return;
        }
        self.focus_set = focus_set;
        self.request_random_equation();
    }

    /// Change the round type policy. A real change starts a new round on the
    /// current equation; re-selecting the active mode does nothing.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.start_round(*self.round.equation());
    }

    /// Make `equation` active and start a new round, even if it is the same
    /// pair as before.
    pub fn set_equation(&mut self, equation: Equation) {
        self.start_round(equation);
    }

    pub fn request_random_equation(&mut self) -> Equation {
        let equation = generate(self.focus_set, self.chooser.as_mut());
        self.start_round(equation);
        equation
    }

    /// Parse and apply typed equation text.
    ///
    /// On failure the current equation and round are untouched; the error is
    /// remembered in [`RoundController::last_error`] and emitted as
    /// [`ControllerEvent::ValidationFailed`].
    pub fn submit_equation_text(&mut self, raw: &str) -> Result<Equation, ValidationError> {
        match parse_equation_text(raw) {
            Ok(equation) => {
                self.start_round(equation);
                Ok(equation)
            }
            Err(err) => {
                tracing::debug!(input = raw, error = err.as_str(), "Rejected equation text");
                self.last_error = Some(err);
                self.events.push(ControllerEvent::ValidationFailed(err));
                Err(err)
            }
        }
    }

    /// Forget the last validation error (the input text was edited).
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    fn next_round_type(&mut self) -> RoundType {
        if self.round_number == 0 {
            return RoundType::Build;
        }
        match self.mode.fixed_round_type() {
            Some(round_type) => round_type,
            None => {
                if self.chooser.coin() {
                    RoundType::Fix
                } else {
                    RoundType::Build
                }
            }
        }
    }

    fn start_round(&mut self, equation: Equation) {
        let round_type = self.next_round_type();
        self.round_number += 1;
        self.round = Round::new(equation, round_type);
        self.last_error = None;

        tracing::debug!(
            equation = %equation,
            round_type = round_type.as_str(),
            mode = self.mode.as_str(),
            round = self.round_number,
            "Started round"
        );

        self.events.push(ControllerEvent::RoundStarted {
            equation,
            round_type,
        });
        self.latches.observe(&self.round, &mut self.events);
    }

    // ========================================================================
    // Count mutations
    // ========================================================================

    /// Add a treat to `zone`. Returns whether the count changed.
    pub fn increment(&mut self, zone: Zone) -> bool {
        let changed = self.round.increment(zone);
        if changed {
            self.latches.observe(&self.round, &mut self.events);
        }
        changed
    }

    /// Remove a treat from `zone`. Returns whether the count changed.
    pub fn decrement(&mut self, zone: Zone) -> bool {
        let changed = self.round.decrement(zone);
        if changed {
            self.latches.observe(&self.round, &mut self.events);
        }
        changed
    }

    pub fn increment_cat(&mut self) -> bool {
        self.increment(Zone::Cat)
    }

    pub fn decrement_cat(&mut self) -> bool {
        self.decrement(Zone::Cat)
    }

    pub fn increment_dog(&mut self) -> bool {
        self.increment(Zone::Dog)
    }

    pub fn decrement_dog(&mut self) -> bool {
        self.decrement(Zone::Dog)
    }

    /// No-op until cat and dog both hold the smaller addend.
    pub fn increment_mouse(&mut self) -> bool {
        self.increment(Zone::Mouse)
    }

    pub fn decrement_mouse(&mut self) -> bool {
        self.decrement(Zone::Mouse)
    }
}
