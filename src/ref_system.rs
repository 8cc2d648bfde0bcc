//! # Rotations between the perifocal and the heliocentric ecliptic frame
//!
//! Two matrix conventions coexist here and must not be mixed:
//!
//! - **Active rotations** ([`rotate_about_x`], [`rotate_about_z`]) rotate a vector by an
//!   angle inside a fixed frame: `x' = R · x`.
//! - **Frame transformations** ([`frame_transform_x`], [`frame_transform_z`]) express the same
//!   vector in axes rotated by the angle (change of basis).
//!
//! A frame transformation is the transpose of the active rotation of the same angle, and
//! is built that way here so the two never drift apart.
//!
//! The inertial → perifocal transformation composes three frame transformations,
//! applied right to left (node, then inclination, then argument of periapsis):
//!
//! ```text
//! Q = R₃(ω) · R₁(i) · R₃(Ω)
//! ```
//!
//! All factors are orthonormal, so the perifocal → inertial transformation is `Qᵀ`.

use nalgebra::{Rotation3, Unit, Vector3};

use crate::constants::{Mat3, Radian, Vec3};

/// Principal axis of an elementary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn unit(self) -> Unit<Vector3<f64>> {
        match self {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        }
    }
}

/// Active, right-handed rotation of a vector by `alpha` about a principal axis.
///
/// The rotation is counter-clockwise when looking from the positive axis toward the origin.
/// Built with [`nalgebra::Rotation3::from_axis_angle`], so the result is orthonormal.
pub fn rotation(axis: Axis, alpha: Radian) -> Mat3 {
    Rotation3::from_axis_angle(&axis.unit(), alpha).into()
}

/// Change of basis into axes rotated by `alpha` about a principal axis.
pub fn frame_transform(axis: Axis, alpha: Radian) -> Mat3 {
    rotation(axis, alpha).transpose()
}

pub fn rotate_about_x(alpha: Radian) -> Mat3 {
    rotation(Axis::X, alpha)
}

pub fn rotate_about_z(alpha: Radian) -> Mat3 {
    rotation(Axis::Z, alpha)
}

pub fn frame_transform_x(alpha: Radian) -> Mat3 {
    frame_transform(Axis::X, alpha)
}

pub fn frame_transform_z(alpha: Radian) -> Mat3 {
    frame_transform(Axis::Z, alpha)
}

/// Transformation from the inertial frame to the perifocal frame.
///
/// Arguments
/// ---------
/// * `right_ascension`: longitude of the ascending node Ω (rad)
/// * `inclination`: i (rad)
/// * `argument_of_periapsis`: ω (rad)
///
/// Return
/// ------
/// * `Q` such that `x_perifocal = Q · x_inertial`
pub fn inertial_to_perifocal(
    right_ascension: Radian,
    inclination: Radian,
    argument_of_periapsis: Radian,
) -> Mat3 {
    frame_transform_z(argument_of_periapsis)
        * frame_transform_x(inclination)
        * frame_transform_z(right_ascension)
}

/// Transformation from the perifocal frame to the inertial frame, `Qᵀ`.
///
/// See [`inertial_to_perifocal`] for the arguments.
pub fn perifocal_to_inertial(
    right_ascension: Radian,
    inclination: Radian,
    argument_of_periapsis: Radian,
) -> Mat3 {
    inertial_to_perifocal(right_ascension, inclination, argument_of_periapsis).transpose()
}

/// Express a perifocal state (position, velocity) in the inertial frame.
pub fn to_inertial(rotation: &Mat3, position: &Vec3, velocity: &Vec3) -> (Vec3, Vec3) {
    (rotation * position, rotation * velocity)
}
