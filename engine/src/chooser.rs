//! Source of randomness for equation draws and mixed-mode round types.
//!
//! The controller only ever asks for a uniform index or a coin flip, so tests
//! can substitute a [`ScriptedChooser`] and get fully deterministic sessions.

use std::collections::VecDeque;

pub trait Chooser {
    /// Uniform index in `0..len`. Callers never pass zero.
    fn index(&mut self, len: usize) -> usize;

    /// Fair coin.
    fn coin(&mut self) -> bool {
        self.index(2) == 1
    }
}

/// Production chooser backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadChooser;

impl Chooser for ThreadChooser {
    fn index(&mut self, len: usize) -> usize {
        rand::random_range(0..len.max(1))
    }

    fn coin(&mut self) -> bool {
        rand::random_bool(0.5)
    }
}

/// Replays a fixed list of picks, then falls back to `0`.
///
/// Each pick is reduced modulo the requested length, so a script written for
/// one pool size stays in range for another.
#[derive(Debug, Default, Clone)]
pub struct ScriptedChooser {
    picks: VecDeque<usize>,
}

impl ScriptedChooser {
    #[must_use]
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    pub fn push(&mut self, pick: usize) {
        self.picks.push_back(pick);
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl Chooser for ScriptedChooser {
    fn index(&mut self, len: usize) -> usize {
        let len = len.max(1);
        self.picks.pop_front().unwrap_or(0) % len
    }
}
