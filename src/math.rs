//! Rotation generators for the turtle frame.
//!
//! Vectors and matrices are plain [`glam`] types. This module only adds the
//! fixed-axis generators the turtle rotates with.

use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};

/// A principal world axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along this axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// Right-handed rotation of `radians` about a principal `axis`.
///
/// The result is orthonormal, so its transpose is its inverse. Compose with
/// `r2 * r1` to apply `r1` first.
pub fn rotation(axis: Axis, radians: f32) -> Mat3 {
    match axis {
        Axis::X => Mat3::from_rotation_x(radians),
        Axis::Y => Mat3::from_rotation_y(radians),
        Axis::Z => Mat3::from_rotation_z(radians),
    }
}
