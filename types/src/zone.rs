//! Drop zones and the feedback classification shown on them.

use std::cmp::Ordering;

/// One of the three animals receiving treats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Cat,
    Dog,
    Mouse,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Cat, Zone::Dog, Zone::Mouse];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Zone::Cat => "cat",
            Zone::Dog => "dog",
            Zone::Mouse => "mouse",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Zone::Cat => "Cat",
            Zone::Dog => "Dog",
            Zone::Mouse => "Mouse",
        }
    }

    /// Plural name of the treat this animal collects.
    #[must_use]
    pub const fn treat(self) -> &'static str {
        match self {
            Zone::Cat => "cookies",
            Zone::Dog => "cupcakes",
            Zone::Mouse => "cheese",
        }
    }

    /// Position in [`Zone::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Zone::Cat => 0,
            Zone::Dog => 1,
            Zone::Mouse => 2,
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Feedback colour for a count measured against its goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Intent {
    /// Below the goal.
    #[default]
    Neutral,
    /// Exactly at the goal.
    Good,
    /// Too many.
    Bad,
}

impl Intent {
    #[must_use]
    pub fn classify(count: u32, goal: u32) -> Self {
        match count.cmp(&goal) {
            Ordering::Less => Intent::Neutral,
            Ordering::Equal => Intent::Good,
            Ordering::Greater => Intent::Bad,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Intent::Neutral => "neutral",
            Intent::Good => "good",
            Intent::Bad => "bad",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_against_goal() {
        assert_eq!(Intent::classify(0, 6), Intent::Neutral);
        assert_eq!(Intent::classify(6, 6), Intent::Good);
        assert_eq!(Intent::classify(7, 6), Intent::Bad);
    }

    #[test]
    fn zone_names() {
        assert_eq!(Zone::Cat.treat(), "cookies");
        assert_eq!(Zone::Dog.to_string(), "Dog");
        assert_eq!(Zone::Mouse.as_str(), "mouse");
    }

    #[test]
    fn zone_indices_are_distinct() {
        let indices: Vec<usize> = Zone::ALL.iter().map(|z| z.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
