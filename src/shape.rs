//! Field shapes and their local-space geometry.

use glam::{Quat, Vec2, Vec3};

/// Scales below this are treated as degenerate (no influence).
const MIN_SCALE: f32 = 1e-6;

/// World placement of a field: position, rotation and per-axis scale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl FieldTransform {
    pub const IDENTITY: FieldTransform = FieldTransform {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        FieldTransform { position, rotation, scale }
    }

    /// Transform placed at a position with no rotation and unit scale.
    pub fn from_position(position: Vec3) -> Self {
        FieldTransform { position, ..FieldTransform::IDENTITY }
    }

    /// World point into full local space (rotation and scale removed).
    /// `None` if any scale axis is degenerate.
    fn point_to_local(&self, point: Vec3) -> Option<Vec3> {
        if self.scale.abs().min_element() < MIN_SCALE {
            return None;
        }
        Some(self.rotation.inverse() * (point - self.position) / self.scale)
    }

    /// World point into rotated local space, leaving scale untouched.
    fn point_to_rotated(&self, point: Vec3) -> Vec3 {
        self.rotation.inverse() * (point - self.position)
    }
}

impl Default for FieldTransform {
    fn default() -> Self {
        FieldTransform::IDENTITY
    }
}

/// The geometric variants a gravity field can take.
///
/// Each variant maps a world point to a scalar distance (fed to
/// [`Falloff`](crate::Falloff)) and a unit world-space direction from the
/// influence source toward the point. Shapes with a bounded extent
/// (plane, cylinder) yield no influence at all outside it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FieldShape {
    /// Radial pull toward a center point.
    Sphere,
    /// Pull toward the nearest face of an axis-scaled cube.
    Cube { aspect: Vec3 },
    /// Uniform pull toward a bounded rectangle in the local XZ plane.
    Plane { aspect: Vec2 },
    /// Radial pull toward a line segment along the local Z axis, flat ends.
    Cylinder { length: f32 },
    /// Radial pull toward a line segment along the local Z axis, rounded ends.
    Capsule { length: f32 },
    /// Pull toward a ring of the given radius in the local XZ plane.
    Torus { radius: f32 },
}

impl FieldShape {
    /// Distance and unit force direction for a world point.
    ///
    /// `max_range` is the field's outer influence range; the capsule needs it
    /// to shrink its segment so the end caps stay spherical. Returns `None`
    /// when the point is outside a bounded shape or the transform is
    /// degenerate. At zero distance the direction is the zero vector, never
    /// NaN.
    pub fn local_geometry(
        &self,
        transform: &FieldTransform,
        point: Vec3,
        max_range: f32,
    ) -> Option<(f32, Vec3)> {
        match *self {
            FieldShape::Sphere => sphere_geometry(transform, point),
            FieldShape::Cube { aspect } => cube_geometry(transform, point, aspect),
            FieldShape::Plane { aspect } => plane_geometry(transform, point, aspect),
            FieldShape::Cylinder { length } => cylinder_geometry(transform, point, length),
            FieldShape::Capsule { length } => {
                capsule_geometry(transform, point, length, max_range)
            }
            FieldShape::Torus { radius } => torus_geometry(transform, point, radius),
        }
    }
}

fn sphere_geometry(transform: &FieldTransform, point: Vec3) -> Option<(f32, Vec3)> {
    let offset = point - transform.position;

    // Normalizing by the largest axis keeps the influence spherical even
    // under non-uniform scale.
    let max_axis = transform.scale.abs().max_element();
    if max_axis < MIN_SCALE {
        return None;
    }

    Some((offset.length() / max_axis, offset.normalize_or_zero()))
}

fn cube_geometry(transform: &FieldTransform, point: Vec3, aspect: Vec3) -> Option<(f32, Vec3)> {
    if aspect.abs().min_element() < MIN_SCALE {
        return None;
    }
    let local = transform.point_to_local(point)? / aspect;

    // Chebyshev distance: the dominant axis decides how deep the point is.
    let distance = local.abs().max_element();
    if distance < MIN_SCALE {
        return Some((0.0, Vec3::ZERO));
    }

    // Quantize to the face/edge/corner the point is nearest: any axis tied
    // with the dominant one truncates to ±1, the rest to 0.
    let quantized = Vec3::new(
        (local.x / distance) as i32 as f32,
        (local.y / distance) as i32 as f32,
        (local.z / distance) as i32 as f32,
    );

    Some((distance, transform.rotation * quantized.normalize_or_zero()))
}

fn plane_geometry(transform: &FieldTransform, point: Vec3, aspect: Vec2) -> Option<(f32, Vec3)> {
    let local = transform.point_to_local(point)?;

    // Outside the rectangle the plane exerts nothing.
    if libm::fabsf(local.x) > aspect.x || libm::fabsf(local.z) > aspect.y {
        return None;
    }

    Some((local.y, transform.rotation * Vec3::Y))
}

fn cylinder_geometry(
    transform: &FieldTransform,
    point: Vec3,
    length: f32,
) -> Option<(f32, Vec3)> {
    let local = transform.point_to_local(point)?;

    // Beyond the flat ends the cylinder exerts nothing.
    if libm::fabsf(local.z) > length {
        return None;
    }

    let radial = Vec3::new(local.x, local.y, 0.0);
    Some((radial.length(), transform.rotation * radial.normalize_or_zero()))
}

fn capsule_geometry(
    transform: &FieldTransform,
    point: Vec3,
    length: f32,
    max_range: f32,
) -> Option<(f32, Vec3)> {
    // Scale is applied by hand so the caps stay spherical: the planar axes
    // share one radius, the Z scale stretches the segment.
    let mut local = transform.point_to_rotated(point);

    let max_axis = libm::fabsf(transform.scale.x).max(libm::fabsf(transform.scale.y));
    if max_axis < MIN_SCALE {
        return None;
    }

    // The segment is shortened by the influence diameter so the rounded caps
    // fit inside the nominal length.
    let segment = (length * transform.scale.z * 2.0 - max_range * 2.0 * max_axis).max(0.0);

    // Pull the point toward the segment; what remains is the offset from the
    // nearest point on it.
    local.z -= libm::fabsf(local.z).min(segment * 0.5) * libm::copysignf(1.0, local.z);

    Some((local.length() / max_axis, transform.rotation * local.normalize_or_zero()))
}

fn torus_geometry(transform: &FieldTransform, point: Vec3, radius: f32) -> Option<(f32, Vec3)> {
    let local = transform.point_to_local(point)?;

    // Nearest point on the ring in the local horizontal plane. A point on
    // the ring axis has no horizontal component; the ring point collapses to
    // the center and the pull is straight toward it.
    let ring = Vec3::new(local.x, 0.0, local.z).normalize_or_zero() * radius;
    let offset = local - ring;

    Some((offset.length(), transform.rotation * offset.normalize_or_zero()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_distance_is_radial() {
        let t = FieldTransform::IDENTITY;
        let (d, dir) = FieldShape::Sphere
            .local_geometry(&t, Vec3::new(3.0, 0.0, 0.0), 5.0)
            .unwrap();
        assert!((d - 3.0).abs() < 1e-6);
        assert!((dir - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn sphere_nonuniform_scale_uses_max_axis() {
        let t = FieldTransform::new(Vec3::ZERO, Quat::IDENTITY, Vec3::new(1.0, 2.0, 1.0));
        let (d, _) = FieldShape::Sphere
            .local_geometry(&t, Vec3::new(4.0, 0.0, 0.0), 5.0)
            .unwrap();
        assert!((d - 2.0).abs() < 1e-6);
    }

    #[test]
    fn sphere_center_has_zero_direction() {
        let t = FieldTransform::IDENTITY;
        let (d, dir) = FieldShape::Sphere.local_geometry(&t, Vec3::ZERO, 5.0).unwrap();
        assert_eq!(d, 0.0);
        assert_eq!(dir, Vec3::ZERO);
    }

    #[test]
    fn cube_face_direction() {
        let t = FieldTransform::IDENTITY;
        let shape = FieldShape::Cube { aspect: Vec3::ONE };
        let (d, dir) = shape.local_geometry(&t, Vec3::new(2.0, 0.5, 0.0), 5.0).unwrap();
        assert!((d - 2.0).abs() < 1e-6);
        assert!((dir - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn cube_corner_direction_is_unit() {
        let t = FieldTransform::IDENTITY;
        let shape = FieldShape::Cube { aspect: Vec3::ONE };
        let (_, dir) = shape.local_geometry(&t, Vec3::new(2.0, 2.0, 2.0), 5.0).unwrap();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!(dir.x > 0.0 && dir.y > 0.0 && dir.z > 0.0);
    }

    #[test]
    fn cube_aspect_scales_distance() {
        let t = FieldTransform::IDENTITY;
        let shape = FieldShape::Cube { aspect: Vec3::new(2.0, 1.0, 1.0) };
        let (d, _) = shape.local_geometry(&t, Vec3::new(4.0, 0.0, 0.0), 5.0).unwrap();
        assert!((d - 2.0).abs() < 1e-6);
    }

    #[test]
    fn plane_outside_rectangle_is_none() {
        let t = FieldTransform::IDENTITY;
        let shape = FieldShape::Plane { aspect: Vec2::ONE };
        assert!(shape.local_geometry(&t, Vec3::new(1.5, 1.0, 0.0), 5.0).is_none());
        assert!(shape.local_geometry(&t, Vec3::new(0.0, 1.0, -1.5), 5.0).is_none());
    }

    #[test]
    fn plane_distance_is_height() {
        let t = FieldTransform::IDENTITY;
        let shape = FieldShape::Plane { aspect: Vec2::ONE };
        let (d, dir) = shape.local_geometry(&t, Vec3::new(0.5, 3.0, 0.5), 5.0).unwrap();
        assert!((d - 3.0).abs() < 1e-6);
        assert!((dir - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn cylinder_outside_length_is_none() {
        let t = FieldTransform::IDENTITY;
        let shape = FieldShape::Cylinder { length: 2.0 };
        assert!(shape.local_geometry(&t, Vec3::new(1.0, 0.0, 3.0), 5.0).is_none());
    }

    #[test]
    fn cylinder_distance_is_planar() {
        let t = FieldTransform::IDENTITY;
        let shape = FieldShape::Cylinder { length: 2.0 };
        let (d, dir) = shape.local_geometry(&t, Vec3::new(3.0, 4.0, 1.0), 5.0).unwrap();
        assert!((d - 5.0).abs() < 1e-6);
        assert!(dir.z.abs() < 1e-6);
    }

    #[test]
    fn capsule_midpoint_is_radial() {
        let t = FieldTransform::IDENTITY;
        let shape = FieldShape::Capsule { length: 10.0 };
        let (d, dir) = shape.local_geometry(&t, Vec3::new(2.0, 0.0, 0.0), 3.0).unwrap();
        assert!((d - 2.0).abs() < 1e-6);
        assert!((dir - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn capsule_cap_is_spherical() {
        let t = FieldTransform::IDENTITY;
        let shape = FieldShape::Capsule { length: 10.0 };
        // Segment half-length: (10 * 2 - 3 * 2) / 2 = 7.
        let (d, _) = shape.local_geometry(&t, Vec3::new(0.0, 0.0, 10.0), 3.0).unwrap();
        assert!((d - 3.0).abs() < 1e-6);
    }

    #[test]
    fn torus_pulls_toward_ring() {
        let t = FieldTransform::IDENTITY;
        let shape = FieldShape::Torus { radius: 5.0 };
        let (d, dir) = shape.local_geometry(&t, Vec3::new(7.0, 0.0, 0.0), 2.0).unwrap();
        assert!((d - 2.0).abs() < 1e-6);
        assert!((dir - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn torus_axis_point_has_no_nan() {
        let t = FieldTransform::IDENTITY;
        let shape = FieldShape::Torus { radius: 5.0 };
        let (d, dir) = shape.local_geometry(&t, Vec3::new(0.0, 3.0, 0.0), 2.0).unwrap();
        assert!(d.is_finite());
        assert!(dir.is_finite());
    }

    #[test]
    fn degenerate_scale_is_none() {
        let t = FieldTransform::new(Vec3::ZERO, Quat::IDENTITY, Vec3::ZERO);
        assert!(FieldShape::Sphere.local_geometry(&t, Vec3::X, 5.0).is_none());
        let shape = FieldShape::Cube { aspect: Vec3::ONE };
        assert!(shape.local_geometry(&t, Vec3::X, 5.0).is_none());
    }

    #[test]
    fn rotation_carries_direction_to_world() {
        let rot = Quat::from_rotation_z(core::f32::consts::FRAC_PI_2);
        let t = FieldTransform::new(Vec3::ZERO, rot, Vec3::ONE);
        let shape = FieldShape::Plane { aspect: Vec2::ONE };
        // Local +Y rotated 90 degrees about Z points along world -X.
        let (_, dir) = shape.local_geometry(&t, rot * Vec3::new(0.0, 1.0, 0.0), 5.0).unwrap();
        assert!((dir - rot * Vec3::Y).length() < 1e-6);
    }
}
