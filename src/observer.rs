//! Claim observer trait for monitoring per-body priority ownership.

use crate::tracker::BodyId;

/// Trait for observing priority claim changes.
///
/// Implement this trait to monitor which priority level owns each body
/// (e.g., for debugging or visualization). All methods have default
/// no-op implementations.
pub trait ClaimObserver {
    /// Called when an untracked body is first claimed at a priority.
    fn on_claim(&mut self, _body: BodyId, _priority: i32) {}

    /// Called when a body's claim is upgraded to a higher priority.
    fn on_upgrade(&mut self, _body: BodyId, _priority: i32) {}

    /// Called when a lapsed claim is recomputed to a new priority.
    fn on_recompute(&mut self, _body: BodyId, _priority: i32) {}

    /// Called when a body falls back to untracked.
    fn on_release(&mut self, _body: BodyId) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpClaimObserver;

impl ClaimObserver for NoOpClaimObserver {}
