//! Round state: the counts a learner has placed and everything derived from them.
//!
//! All mutators clamp instead of failing. Derived predicates are computed on
//! every read; only the three counts are stored.

use crate::equation::Equation;
use crate::zone::{Intent, Zone};
use crate::RoundType;

/// How far past the goal the cat and dog zones may be filled.
pub const OVERSHOOT: u32 = 2;
/// Treats the mouse must receive.
pub const MOUSE_GOAL: u32 = 1;
/// Upper bound for the mouse zone.
pub const MOUSE_CAP: u32 = MOUSE_GOAL + 1;

/// Treats placed in each zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Counts {
    pub cat: u32,
    pub dog: u32,
    pub mouse: u32,
}

impl Counts {
    #[must_use]
    pub const fn new(cat: u32, dog: u32, mouse: u32) -> Self {
        Self { cat, dog, mouse }
    }

    #[must_use]
    pub const fn get(&self, zone: Zone) -> u32 {
        match zone {
            Zone::Cat => self.cat,
            Zone::Dog => self.dog,
            Zone::Mouse => self.mouse,
        }
    }

    fn slot_mut(&mut self, zone: Zone) -> &mut u32 {
        match zone {
            Zone::Cat => &mut self.cat,
            Zone::Dog => &mut self.dog,
            Zone::Mouse => &mut self.mouse,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.cat + self.dog + self.mouse
    }
}

/// A single round for one equation.
///
/// Created fresh whenever the equation or mode changes; the controller never
/// reuses a round across equations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    equation: Equation,
    round_type: RoundType,
    counts: Counts,
}

impl Round {
    /// Start a round with counts initialized for `round_type`.
    ///
    /// Fix rounds are prefilled with the "bigger double plus one" mistake:
    /// both animals get the larger addend and the mouse already has its treat.
    #[must_use]
    pub fn new(equation: Equation, round_type: RoundType) -> Self {
        let counts = match round_type {
            RoundType::Build => Counts::default(),
            RoundType::Fix => {
                let big = equation.larger();
                Counts::new(big, big, MOUSE_GOAL)
            }
        };
        Self {
            equation,
            round_type,
            counts,
        }
    }

    #[must_use]
    pub const fn equation(&self) -> &Equation {
        &self.equation
    }

    #[must_use]
    pub const fn round_type(&self) -> RoundType {
        self.round_type
    }

    #[must_use]
    pub const fn counts(&self) -> Counts {
        self.counts
    }

    #[must_use]
    pub const fn count(&self, zone: Zone) -> u32 {
        self.counts.get(zone)
    }

    #[must_use]
    pub fn goal(&self, zone: Zone) -> u32 {
        match zone {
            Zone::Cat | Zone::Dog => self.equation.smaller(),
            Zone::Mouse => MOUSE_GOAL,
        }
    }

    #[must_use]
    pub fn cap(&self, zone: Zone) -> u32 {
        match zone {
            Zone::Cat | Zone::Dog => self.equation.smaller() + OVERSHOOT,
            Zone::Mouse => MOUSE_CAP,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.counts.total()
    }

    #[must_use]
    pub const fn target(&self) -> u32 {
        self.equation.target()
    }

    fn doubles_in_place(&self) -> bool {
        let smaller = self.equation.smaller();
        self.counts.cat == smaller && self.counts.dog == smaller
    }

    /// Scaffold gate: the mouse only takes a treat once cat and dog are right.
    #[must_use]
    pub fn mouse_enabled(&self) -> bool {
        self.doubles_in_place() && self.counts.mouse < MOUSE_GOAL
    }

    #[must_use]
    pub fn solved(&self) -> bool {
        self.doubles_in_place() && self.counts.mouse == MOUSE_GOAL
    }

    #[must_use]
    pub fn intent(&self, zone: Zone) -> Intent {
        Intent::classify(self.count(zone), self.goal(zone))
    }

    /// Classification of the running total against the target.
    #[must_use]
    pub fn result_intent(&self) -> Intent {
        Intent::classify(self.total(), self.target())
    }

    #[must_use]
    pub const fn can_decrement(&self, zone: Zone) -> bool {
        self.count(zone) > 0
    }

    /// Add one treat to `zone`, clamped to its cap.
    ///
    /// The mouse ignores the request while the scaffold gate is closed.
    /// Returns whether the count changed.
    pub fn increment(&mut self, zone: Zone) -> bool {
        if zone == Zone::Mouse && !self.mouse_enabled() {
            return false;
        }
        let cap = self.cap(zone);
        let slot = self.counts.slot_mut(zone);
        let next = slot.saturating_add(1).min(cap);
        let changed = next != *slot;
        *slot = next;
        changed
    }

    /// Remove one treat from `zone`, never going below zero.
    ///
    /// Returns whether the count changed.
    pub fn decrement(&mut self, zone: Zone) -> bool {
        let cap = self.cap(zone);
        let slot = self.counts.slot_mut(zone);
        let next = slot.saturating_sub(1).min(cap);
        let changed = next != *slot;
        *slot = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq(a: u32, b: u32) -> Equation {
        Equation::new(a, b).unwrap()
    }

    fn fill(round: &mut Round, zone: Zone, n: u32) {
        for _ in 0..n {
            round.increment(zone);
        }
    }

    #[test]
    fn build_round_starts_empty() {
        let round = Round::new(eq(6, 7), RoundType::Build);
        assert_eq!(round.counts(), Counts::default());
        assert_eq!(round.total(), 0);
        assert!(!round.solved());
        assert!(!round.mouse_enabled());
    }

    #[test]
    fn fix_round_prefills_bigger_double_plus_one() {
        let round = Round::new(eq(6, 7), RoundType::Fix);
        assert_eq!(round.counts(), Counts::new(7, 7, 1));
        assert!(!round.solved());
        assert_eq!(round.intent(Zone::Cat), Intent::Bad);
        assert_eq!(round.intent(Zone::Mouse), Intent::Good);
        assert_eq!(round.result_intent(), Intent::Bad);
    }

    #[test]
    fn fix_round_uses_larger_regardless_of_order() {
        let round = Round::new(eq(9, 8), RoundType::Fix);
        assert_eq!(round.counts(), Counts::new(9, 9, 1));
    }

    #[test]
    fn goals_and_caps() {
        let round = Round::new(eq(4, 5), RoundType::Build);
        assert_eq!(round.goal(Zone::Cat), 4);
        assert_eq!(round.goal(Zone::Dog), 4);
        assert_eq!(round.goal(Zone::Mouse), 1);
        assert_eq!(round.cap(Zone::Cat), 6);
        assert_eq!(round.cap(Zone::Dog), 6);
        assert_eq!(round.cap(Zone::Mouse), 2);
    }

    #[test]
    fn decrement_at_zero_is_idempotent() {
        let mut round = Round::new(eq(6, 7), RoundType::Build);
        assert!(!round.decrement(Zone::Cat));
        assert!(!round.decrement(Zone::Cat));
        assert_eq!(round.count(Zone::Cat), 0);
        assert!(!round.can_decrement(Zone::Cat));
    }

    #[test]
    fn increments_clamp_at_cap() {
        let mut round = Round::new(eq(2, 3), RoundType::Build);
        fill(&mut round, Zone::Cat, 50);
        fill(&mut round, Zone::Dog, 50);
        assert_eq!(round.count(Zone::Cat), 4);
        assert_eq!(round.count(Zone::Dog), 4);
        assert!(!round.increment(Zone::Cat));
        assert_eq!(round.intent(Zone::Dog), Intent::Bad);
    }

    #[test]
    fn mouse_gated_until_cat_and_dog_match() {
        let mut round = Round::new(eq(3, 4), RoundType::Build);
        assert!(!round.increment(Zone::Mouse));

        fill(&mut round, Zone::Cat, 3);
        assert!(!round.increment(Zone::Mouse));
        assert_eq!(round.count(Zone::Mouse), 0);

        fill(&mut round, Zone::Dog, 4);
        assert!(!round.mouse_enabled());
        assert!(!round.increment(Zone::Mouse));

        round.decrement(Zone::Dog);
        assert!(round.mouse_enabled());
        assert!(round.increment(Zone::Mouse));
        assert_eq!(round.count(Zone::Mouse), 1);
        assert!(round.solved());
    }

    #[test]
    fn mouse_never_exceeds_one_via_increment() {
        let mut round = Round::new(eq(3, 4), RoundType::Build);
        fill(&mut round, Zone::Cat, 3);
        fill(&mut round, Zone::Dog, 3);
        fill(&mut round, Zone::Mouse, 5);
        assert_eq!(round.count(Zone::Mouse), 1);
        assert!(!round.mouse_enabled());
    }

    #[test]
    fn solved_requires_exact_counts() {
        let mut round = Round::new(eq(5, 6), RoundType::Build);
        fill(&mut round, Zone::Cat, 5);
        fill(&mut round, Zone::Dog, 5);
        round.increment(Zone::Mouse);
        assert!(round.solved());
        assert_eq!(round.total(), 11);
        assert_eq!(round.result_intent(), Intent::Good);

        round.increment(Zone::Cat);
        assert!(!round.solved());
        assert_eq!(round.result_intent(), Intent::Bad);
    }

    #[test]
    fn fix_round_can_be_corrected() {
        let mut round = Round::new(eq(6, 7), RoundType::Fix);
        assert!(round.decrement(Zone::Cat));
        assert!(!round.solved());
        assert!(round.decrement(Zone::Dog));
        assert!(round.solved());
    }

    #[test]
    fn fix_mouse_overshoot_can_be_removed() {
        let mut round = Round::new(eq(6, 7), RoundType::Fix);
        assert!(round.decrement(Zone::Mouse));
        assert!(!round.decrement(Zone::Mouse));
        assert_eq!(round.count(Zone::Mouse), 0);
    }
}
