//! Core behavior trait.
//!
//! The [`Behavior`] trait is generic over a context type `C`, which carries
//! whatever the nodes read (knowledge, agent snapshot) and whatever they
//! produce (the chosen plan).

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this node against the given context.
    ///
    /// Nodes may write intermediate results into `ctx`. A node returning
    /// `Status::Failure` should leave its output slots untouched so that the
    /// next branch of a selector starts from a clean context.
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
