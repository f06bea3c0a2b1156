//! Random near-double equations.

use neardouble_types::{Equation, FocusSet};

use crate::chooser::Chooser;

/// Draw a near double from `focus_set`.
///
/// The smaller addend is uniform over the focus set's pool and the pair is
/// listed in either order with equal probability. Every pool member passes
/// [`Equation::new`], so the default is never reached.
pub fn generate(focus_set: FocusSet, chooser: &mut dyn Chooser) -> Equation {
    let pool = focus_set.smaller_pool();
    let smaller = pool[chooser.index(pool.len()) % pool.len()];
    let smaller_first = chooser.coin();
    Equation::from_smaller(smaller, smaller_first).unwrap_or_default()
}
