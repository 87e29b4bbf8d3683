//! Per-body priority state machine driven by trigger transitions.

use crate::observer::ClaimObserver;
use crate::registry::{FieldId, FieldRegistry};
use alloc::collections::BTreeMap;
use glam::Vec3;

/// Stable identity of a dynamic body, supplied by the host's collision layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub u64);

/// The three trigger-event kinds the external collision layer reports for a
/// (field, body) pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    Enter,
    Stay,
    Exit,
}

/// Tracks which priority level currently owns each body.
///
/// A body inside overlapping fields is governed by a single priority: the
/// one it was claimed at when it entered, upgraded only when a strictly
/// higher-priority field actually exerts force on it. The claim is sticky —
/// a governing field that momentarily fades to zero does not release the
/// body until a Stay or Exit event triggers a rescan. This is what keeps the
/// force continuous across the boundary between two overlapping fields of
/// different priority: the claim, not distance, decides influence.
///
/// Untracked bodies have no entry; there is no other state.
pub struct PriorityTracker {
    claims: BTreeMap<BodyId, i32>,
}

impl PriorityTracker {
    pub fn new() -> Self {
        PriorityTracker {
            claims: BTreeMap::new(),
        }
    }

    /// The priority currently governing a body, or `None` if untracked.
    pub fn current_priority(&self, body: BodyId) -> Option<i32> {
        self.claims.get(&body).copied()
    }

    pub fn is_tracked(&self, body: BodyId) -> bool {
        self.claims.contains_key(&body)
    }

    pub fn tracked_count(&self) -> usize {
        self.claims.len()
    }

    /// Drop a body's claim outright (e.g., the body was despawned).
    pub fn release(&mut self, body: BodyId) {
        self.claims.remove(&body);
    }

    pub fn clear(&mut self) {
        self.claims.clear();
    }

    /// Advance the state machine for one trigger event and return the force
    /// the external stepper should integrate (`velocity += force * dt`).
    ///
    /// Only Stay events produce a non-zero force. Bodies that do not use
    /// gravity are ignored entirely — no state is created for them. An
    /// unknown field handle is ignored and yields zero force.
    pub fn transition<O: ClaimObserver>(
        &mut self,
        registry: &FieldRegistry,
        field_id: FieldId,
        body: BodyId,
        kind: Transition,
        position: Vec3,
        uses_gravity: bool,
        observer: &mut O,
    ) -> Vec3 {
        if !uses_gravity {
            return Vec3::ZERO;
        }
        let Some(field) = registry.field(field_id) else {
            return Vec3::ZERO;
        };
        let priority = field.priority();

        match kind {
            Transition::Enter => {
                if !self.claims.contains_key(&body) {
                    self.claims.insert(body, priority);
                    observer.on_claim(body, priority);
                }
                Vec3::ZERO
            }
            Transition::Stay => {
                // A Stay without a preceding Enter self-heals by claiming.
                let current = match self.claims.get(&body) {
                    Some(current) => *current,
                    None => {
                        self.claims.insert(body, priority);
                        observer.on_claim(body, priority);
                        priority
                    }
                };

                // Lower-priority fields are masked while the claim holds,
                // even if the claiming field's force is momentarily zero.
                if priority < current {
                    return Vec3::ZERO;
                }

                let force = if field.enabled() {
                    field.evaluate(position)
                } else {
                    Vec3::ZERO
                };

                if priority > current && force != Vec3::ZERO {
                    self.claims.insert(body, priority);
                    observer.on_upgrade(body, priority);
                } else if priority == current && force == Vec3::ZERO {
                    // The governing field's influence lapsed: find the next
                    // dominant layer on this same step.
                    self.recompute(registry, body, position, observer);
                }

                force
            }
            Transition::Exit => {
                if self.claims.get(&body) == Some(&priority) {
                    self.recompute(registry, body, position, observer);
                }
                Vec3::ZERO
            }
        }
    }

    fn recompute<O: ClaimObserver>(
        &mut self,
        registry: &FieldRegistry,
        body: BodyId,
        position: Vec3,
        observer: &mut O,
    ) {
        match registry.dominant_priority(position) {
            Some(priority) => {
                self.claims.insert(body, priority);
                observer.on_recompute(body, priority);
            }
            None => {
                self.claims.remove(&body);
                observer.on_release(body);
            }
        }
    }
}

impl Default for PriorityTracker {
    fn default() -> Self {
        Self::new()
    }
}
