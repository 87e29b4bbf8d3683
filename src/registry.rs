//! Registry of live gravity fields.

use crate::error::GravityError;
use crate::field::GravityField;
use alloc::vec::Vec as AllocVec;
use glam::Vec3;

/// Handle to a field owned by a [`FieldRegistry`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(u32);

/// Insertion-ordered collection of the gravity fields live in a simulation.
///
/// Fields are registered on activation and unregistered on deactivation.
/// Registration order is preserved and is the scan order for every query,
/// which keeps point-query tie-breaking deterministic.
pub struct FieldRegistry {
    fields: AllocVec<(FieldId, GravityField)>,
    next_id: u32,
}

impl FieldRegistry {
    pub fn new() -> Self {
        FieldRegistry {
            fields: AllocVec::new(),
            next_id: 0,
        }
    }

    /// Add a field, returning its handle.
    pub fn register(&mut self, field: GravityField) -> FieldId {
        let id = FieldId(self.next_id);
        self.next_id += 1;
        self.fields.push((id, field));
        id
    }

    /// Remove a field, returning it. Later fields keep their scan order.
    pub fn unregister(&mut self, id: FieldId) -> Result<GravityField, GravityError> {
        match self.fields.iter().position(|(fid, _)| *fid == id) {
            Some(index) => Ok(self.fields.remove(index).1),
            None => Err(GravityError::UnknownField { id }),
        }
    }

    pub fn field(&self, id: FieldId) -> Option<&GravityField> {
        self.fields.iter().find(|(fid, _)| *fid == id).map(|(_, f)| f)
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut GravityField> {
        self.fields.iter_mut().find(|(fid, _)| *fid == id).map(|(_, f)| f)
    }

    /// Fields in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &GravityField)> {
        self.fields.iter().map(|(id, f)| (*id, f))
    }

    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Highest priority among enabled fields exerting non-zero force at a
    /// point, or `None` if no field claims it.
    ///
    /// This is the rescan primitive the tracker runs when a governing
    /// field's influence lapses.
    pub fn dominant_priority(&self, position: Vec3) -> Option<i32> {
        let mut best: Option<i32> = None;

        for (_, field) in self.iter() {
            if !field.enabled() {
                continue;
            }
            if best.is_some_and(|b| field.priority() <= b) {
                continue;
            }
            if field.evaluate(position) != Vec3::ZERO {
                best = Some(field.priority());
            }
        }

        best
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}
