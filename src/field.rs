//! A gravity field: shape, placement, falloff, strength and priority.

use crate::fade::Falloff;
use crate::shape::{FieldShape, FieldTransform};
use glam::Vec3;

/// A volume-shaped source of gravitational acceleration.
///
/// The force a field exerts on a point is directed from the point toward the
/// shape's influence source, with magnitude `strength` scaled by the
/// [`Falloff`] multiplier at the shape's local distance.
///
/// # Builder Pattern
/// ```
/// use gravwell::{GravityField, FieldShape, Falloff};
/// use glam::Vec3;
///
/// let planet = GravityField::new(FieldShape::Sphere)
///     .with_strength(9.81)
///     .with_priority(1)
///     .with_falloff(Falloff::new(0.0, 0.0, 50.0, 10.0))
///     .with_position(Vec3::new(100.0, 0.0, 0.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GravityField {
    shape: FieldShape,
    transform: FieldTransform,
    falloff: Falloff,
    strength: f32,
    priority: i32,
    enabled: bool,
}

impl GravityField {
    /// Create a field with default strength (9.81), priority 0, default
    /// falloff, identity transform, enabled.
    pub fn new(shape: FieldShape) -> Self {
        GravityField {
            shape,
            transform: FieldTransform::IDENTITY,
            falloff: Falloff::default(),
            strength: 9.81,
            priority: 0,
            enabled: true,
        }
    }

    /// Set the acceleration magnitude in units per second squared.
    pub fn with_strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }

    /// Set the priority rank. Higher priorities mask lower ones for bodies
    /// they have claimed.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set the range and fade parameters.
    pub fn with_falloff(mut self, falloff: Falloff) -> Self {
        self.falloff = falloff;
        self
    }

    /// Set the world transform.
    pub fn with_transform(mut self, transform: FieldTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Place the field at a position with no rotation and unit scale.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform = FieldTransform::from_position(position);
        self
    }

    /// Create the field disabled.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn shape(&self) -> &FieldShape { &self.shape }
    pub fn transform(&self) -> &FieldTransform { &self.transform }
    pub fn falloff(&self) -> &Falloff { &self.falloff }
    pub fn strength(&self) -> f32 { self.strength }
    pub fn priority(&self) -> i32 { self.priority }
    pub fn enabled(&self) -> bool { self.enabled }

    // Every parameter is mutable at runtime; nothing derived is cached.
    pub fn set_shape(&mut self, shape: FieldShape) { self.shape = shape; }
    pub fn set_strength(&mut self, strength: f32) { self.strength = strength; }
    pub fn set_priority(&mut self, priority: i32) { self.priority = priority; }
    pub fn set_falloff(&mut self, falloff: Falloff) { self.falloff = falloff; }
    pub fn set_enabled(&mut self, enabled: bool) { self.enabled = enabled; }

    pub fn transform_mut(&mut self) -> &mut FieldTransform {
        &mut self.transform
    }

    pub fn falloff_mut(&mut self) -> &mut Falloff {
        &mut self.falloff
    }

    /// The gravitational force this field exerts at a world point.
    ///
    /// Zero outside the shape's influence; does not consider `enabled`
    /// (callers scanning the registry check that flag).
    pub fn evaluate(&self, point: Vec3) -> Vec3 {
        match self.shape.local_geometry(&self.transform, point, self.falloff.max_range()) {
            Some((distance, direction)) => {
                direction * (-self.strength * self.falloff.multiplier(distance))
            }
            None => Vec3::ZERO,
        }
    }
}
