//! # gameobject_math
//!
//! Math payload types for game objects. Re-exports [`glam`] for vectors and
//! quaternions and defines the [`Transform`] component kind.

pub mod transform;

pub use glam::{Quat, Vec3};

pub use transform::Transform;
