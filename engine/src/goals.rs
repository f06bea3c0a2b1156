//! Edge-triggered goal tracking.
//!
//! Each zone has a latch that is set while its count sits at the goal. An
//! event fires only when the latch goes from clear to set, and the latch
//! clears as soon as the count moves away. Latches survive round resets, so
//! a fix round that opens with `mouse == 1` right after a round that ended
//! with `mouse == 1` does not chime again.

use neardouble_types::{Round, Zone};

use crate::notifications::{ControllerEvent, EventQueue};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GoalLatches {
    zones: [bool; 3],
    solved: bool,
}

impl GoalLatches {
    /// Compare `round` against the latches and emit events for new arrivals.
    pub(crate) fn observe(&mut self, round: &Round, events: &mut EventQueue) {
        for zone in Zone::ALL {
            let at_goal = round.count(zone) == round.goal(zone);
            let latch = &mut self.zones[zone.index()];
            if at_goal && !*latch {
                events.push(ControllerEvent::GoalReached(zone));
            }
            *latch = at_goal;
        }

        let solved = round.solved();
        if solved && !self.solved {
            events.push(ControllerEvent::Solved {
                equation: *round.equation(),
            });
        }
        self.solved = solved;
    }

    #[cfg(test)]
    pub(crate) fn is_set(&self, zone: Zone) -> bool {
        self.zones[zone.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neardouble_types::{Equation, RoundType};

    fn round(round_type: RoundType) -> Round {
        Round::new(Equation::new(2, 3).unwrap(), round_type)
    }

    #[test]
    fn fires_once_per_crossing() {
        let mut latches = GoalLatches::default();
        let mut events = EventQueue::new();
        let mut round = round(RoundType::Build);

        latches.observe(&round, &mut events);
        assert!(events.is_empty());

        round.increment(Zone::Cat);
        latches.observe(&round, &mut events);
        round.increment(Zone::Cat);
        latches.observe(&round, &mut events);
        assert_eq!(events.take(), vec![ControllerEvent::GoalReached(Zone::Cat)]);

        // Still at goal: no repeat.
        round.increment(Zone::Dog);
        latches.observe(&round, &mut events);
        assert!(events.is_empty());
        assert!(latches.is_set(Zone::Cat));
    }

    #[test]
    fn rearms_after_leaving_goal() {
        let mut latches = GoalLatches::default();
        let mut events = EventQueue::new();
        let mut round = round(RoundType::Build);
        round.increment(Zone::Dog);
        round.increment(Zone::Dog);
        latches.observe(&round, &mut events);

        round.increment(Zone::Dog);
        latches.observe(&round, &mut events);
        assert!(!latches.is_set(Zone::Dog));

        round.decrement(Zone::Dog);
        latches.observe(&round, &mut events);
        assert_eq!(
            events.take(),
            vec![
                ControllerEvent::GoalReached(Zone::Dog),
                ControllerEvent::GoalReached(Zone::Dog),
            ]
        );
    }

    #[test]
    fn fix_round_mouse_fires_on_fresh_latch() {
        let mut latches = GoalLatches::default();
        let mut events = EventQueue::new();
        latches.observe(&round(RoundType::Fix), &mut events);
        assert_eq!(events.take(), vec![ControllerEvent::GoalReached(Zone::Mouse)]);
    }

    #[test]
    fn solved_fires_after_last_goal() {
        let mut latches = GoalLatches::default();
        let mut events = EventQueue::new();
        let mut round = round(RoundType::Fix);
        latches.observe(&round, &mut events);
        events.take();

        round.decrement(Zone::Cat);
        latches.observe(&round, &mut events);
        round.decrement(Zone::Dog);
        latches.observe(&round, &mut events);

        assert_eq!(
            events.take(),
            vec![
                ControllerEvent::GoalReached(Zone::Cat),
                ControllerEvent::GoalReached(Zone::Dog),
                ControllerEvent::Solved {
                    equation: Equation::new(2, 3).unwrap()
                },
            ]
        );
    }
}
