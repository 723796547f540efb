//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// Conditions report whether they hold; actions report whether they produced
/// something (for a planner, a plan written into the context).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The condition held, or the action committed its result.
    Success,

    /// The condition did not hold, or the action had nothing to offer.
    Failure,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Success when `condition` holds.
    #[inline]
    pub fn from_bool(condition: bool) -> Self {
        if condition {
            Status::Success
        } else {
            Status::Failure
        }
    }
}
