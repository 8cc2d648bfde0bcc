//! Shape and orientation quantities derived from interpolated elements.

use crate::constants::{Kilometer, Radian};
use crate::elements::InterpolatedElements;
use crate::kepler::principal_angle;

/// Specific angular momentum magnitude `h = √(μ·a·(1 − e²))` in km²/s.
///
/// * `semi_major_axis`: km
/// * `mu`: gravitational parameter of the central body, km³/s²
pub fn angular_momentum(semi_major_axis: Kilometer, eccentricity: f64, mu: f64) -> f64 {
    (mu * semi_major_axis * (1.0 - eccentricity * eccentricity)).sqrt()
}

/// Argument of periapsis `ω = ϖ − Ω`, in `[0, 2π)`.
pub fn argument_of_periapsis(longitude_of_periapsis: Radian, right_ascension: Radian) -> Radian {
    principal_angle(longitude_of_periapsis - right_ascension)
}

/// Mean anomaly `M = L − ϖ`, in `[0, 2π)`.
pub fn mean_anomaly(mean_longitude: Radian, longitude_of_periapsis: Radian) -> Radian {
    principal_angle(mean_longitude - longitude_of_periapsis)
}

/// Quantities needed by the anomaly solver and the perifocal state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitGeometry {
    /// km²/s
    pub angular_momentum: f64,
    pub argument_of_periapsis: Radian,
    pub mean_anomaly: Radian,
}

impl OrbitGeometry {
    pub fn from_elements(elements: &InterpolatedElements, mu: f64) -> Self {
        OrbitGeometry {
            angular_momentum: angular_momentum(
                elements.semi_major_axis,
                elements.eccentricity,
                mu,
            ),
            argument_of_periapsis: argument_of_periapsis(
                elements.longitude_of_periapsis,
                elements.right_ascension,
            ),
            mean_anomaly: mean_anomaly(elements.mean_longitude, elements.longitude_of_periapsis),
        }
    }
}
