//! Priority-arbitrated gravity volumes for games.
//!
//! `gravwell` computes a directional gravitational force for any point or
//! dynamic body in a scene populated with overlapping gravity-emitting
//! volumes. Each field has a shape, a strength, a radial influence range
//! with smooth fade edges, and a priority; when overlapping fields disagree,
//! a per-body state machine decides which priority level governs the body,
//! keeping the force continuous across field boundaries.
//!
//! # Features
//!
//! - **Six field shapes**: sphere, cube, plane, cylinder, capsule, torus
//! - **Smooth falloff**: linear fade bands at the inner and outer range edges
//! - **Priority arbitration**: higher-priority fields mask lower ones for
//!   bodies they have claimed; claims transfer only on boundary crossings
//! - **Stateless point queries**: dominant-layer inference for bare points
//! - **Event-driven**: consumes enter/stay/exit events from any collision
//!   layer; no engine coupling
//! - **Observable**: monitor claim changes via the [`ClaimObserver`] trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! # Example
//!
//! ```
//! use gravwell::{GravityResolver, GravityField, FieldShape, Falloff,
//!     BodyId, Transition, NoOpClaimObserver};
//! use glam::Vec3;
//!
//! let mut resolver = GravityResolver::new();
//! let planet = resolver.register_field(
//!     GravityField::new(FieldShape::Sphere)
//!         .with_strength(9.81)
//!         .with_falloff(Falloff::new(0.0, 0.0, 50.0, 10.0)),
//! );
//!
//! // The collision layer reports the body entering the field...
//! let body = BodyId(1);
//! let position = Vec3::new(10.0, 0.0, 0.0);
//! resolver.transition(planet, body, Transition::Enter, position, true,
//!     &mut NoOpClaimObserver);
//!
//! // ...and the physics stepper integrates the resolved force each step.
//! let force = resolver.resolve(body, position, true);
//! assert!(force.x < 0.0);
//! ```

#![no_std]

extern crate alloc;

pub mod fade;
pub mod shape;
pub mod field;
pub mod registry;
pub mod tracker;
pub mod resolver;
pub mod observer;
pub mod error;

// Re-export primary API
pub use fade::Falloff;
pub use shape::{FieldShape, FieldTransform};
pub use field::GravityField;
pub use registry::{FieldId, FieldRegistry};
pub use tracker::{BodyId, PriorityTracker, Transition};
pub use resolver::GravityResolver;
pub use observer::{ClaimObserver, NoOpClaimObserver};
pub use error::GravityError;
