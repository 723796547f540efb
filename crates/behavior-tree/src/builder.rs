//! Shorthands for assembling behavior trees.
//!
//! Instead of writing `Box::new(Sequence::new(vec![...]))`, policies call
//! `sequence(vec![...])`, and leaf nodes are boxed with [`node`].

use crate::{Behavior, Selector, Sequence};

/// Boxes a leaf node.
#[inline]
pub fn node<C, B>(behavior: B) -> Box<dyn Behavior<C>>
where
    B: Behavior<C> + 'static,
{
    Box::new(behavior)
}

/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}
