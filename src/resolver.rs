//! The query surface: net gravity for tracked bodies and bare points.

use crate::error::GravityError;
use crate::field::GravityField;
use crate::observer::ClaimObserver;
use crate::registry::{FieldId, FieldRegistry};
use crate::tracker::{BodyId, PriorityTracker, Transition};
use alloc::vec::Vec as AllocVec;
use glam::Vec3;

/// One independent gravity simulation: a field registry plus the per-body
/// priority tracker, with the full query and mutation surface.
///
/// The host's collision layer feeds [`GravityResolver::transition`] with
/// enter/stay/exit events; the physics stepper calls
/// [`GravityResolver::resolve`] each fixed step and integrates the result
/// into velocity.
pub struct GravityResolver {
    registry: FieldRegistry,
    tracker: PriorityTracker,
}

impl GravityResolver {
    pub fn new() -> Self {
        GravityResolver {
            registry: FieldRegistry::new(),
            tracker: PriorityTracker::new(),
        }
    }

    pub fn registry(&self) -> &FieldRegistry { &self.registry }
    pub fn registry_mut(&mut self) -> &mut FieldRegistry { &mut self.registry }
    pub fn tracker(&self) -> &PriorityTracker { &self.tracker }

    /// Register a field on activation.
    pub fn register_field(&mut self, field: GravityField) -> FieldId {
        self.registry.register(field)
    }

    /// Unregister a field on deactivation.
    ///
    /// Claims held at the field's priority are not purged here; they resolve
    /// through the normal recompute path on the body's next Stay or Exit.
    pub fn unregister_field(&mut self, id: FieldId) -> Result<GravityField, GravityError> {
        self.registry.unregister(id)
    }

    /// Net gravity on a tracked body: the sum of every enabled field at the
    /// body's claimed priority.
    ///
    /// Fields at any other priority are fully masked — even a claiming field
    /// that momentarily outputs zero force keeps lower priorities silent,
    /// because the claim only transfers on transition events. Untracked or
    /// gravity-exempt bodies get the zero vector.
    pub fn resolve(&self, body: BodyId, position: Vec3, uses_gravity: bool) -> Vec3 {
        if !uses_gravity {
            return Vec3::ZERO;
        }
        let Some(target) = self.tracker.current_priority(body) else {
            return Vec3::ZERO;
        };

        let mut total = Vec3::ZERO;
        for (_, field) in self.registry.iter() {
            if field.enabled() && field.priority() == target {
                total += field.evaluate(position);
            }
        }
        total
    }

    /// Net gravity at a bare point with no tracked state.
    ///
    /// The sum of all fields tied for the highest priority actually exerting
    /// force here. A one-shot query has no identity for a claim to stick to,
    /// so the dominant layer is inferred from the field alone: scanning in
    /// registration order, a field with strictly higher priority and
    /// non-zero force discards everything accumulated so far.
    pub fn resolve_point(&self, position: Vec3) -> Vec3 {
        let mut best = i32::MIN;
        let mut total = Vec3::ZERO;

        for (_, field) in self.registry.iter() {
            if !field.enabled() || field.priority() < best {
                continue;
            }

            let force = field.evaluate(position);
            total += force;

            if force != Vec3::ZERO && field.priority() > best {
                best = field.priority();
                total = force;
            }
        }

        total
    }

    /// Fields at the body's claimed priority currently exerting non-zero
    /// force on it, in registration order. Diagnostic use.
    pub fn active_fields(
        &self,
        body: BodyId,
        position: Vec3,
        uses_gravity: bool,
    ) -> AllocVec<FieldId> {
        let mut active = AllocVec::new();
        if !uses_gravity {
            return active;
        }
        let Some(target) = self.tracker.current_priority(body) else {
            return active;
        };

        for (id, field) in self.registry.iter() {
            if field.enabled()
                && field.priority() == target
                && field.evaluate(position) != Vec3::ZERO
            {
                active.push(id);
            }
        }
        active
    }

    /// Feed one trigger event through the priority state machine, returning
    /// the force to integrate for a Stay event (zero for Enter/Exit).
    pub fn transition<O: ClaimObserver>(
        &mut self,
        field: FieldId,
        body: BodyId,
        kind: Transition,
        position: Vec3,
        uses_gravity: bool,
        observer: &mut O,
    ) -> Vec3 {
        self.tracker
            .transition(&self.registry, field, body, kind, position, uses_gravity, observer)
    }
}

impl Default for GravityResolver {
    fn default() -> Self {
        Self::new()
    }
}
