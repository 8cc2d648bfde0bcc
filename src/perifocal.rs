//! Position and velocity in the perifocal frame.
//!
//! The perifocal frame has its first axis toward periapsis, its third axis along the
//! angular momentum, and the second completing a right-handed triad in the orbital plane.

use crate::constants::{Radian, Vec3};

/// Perifocal position (km) and velocity (km/s).
///
/// ```text
/// r = (h²/μ) / (1 + e·cos ν) · [cos ν, sin ν, 0]
/// v = (μ/h) · [−sin ν, e + cos ν, 0]
/// ```
///
/// Arguments
/// ---------
/// * `angular_momentum`: `h` in km²/s
/// * `eccentricity`: `e`
/// * `true_anomaly`: `ν` in radians
/// * `mu`: gravitational parameter of the central body in km³/s²
pub fn perifocal_state(
    angular_momentum: f64,
    eccentricity: f64,
    true_anomaly: Radian,
    mu: f64,
) -> (Vec3, Vec3) {
    let (sin_nu, cos_nu) = true_anomaly.sin_cos();

    let radius = angular_momentum.powi(2) / mu / (1.0 + eccentricity * cos_nu);
    let position = radius * Vec3::new(cos_nu, sin_nu, 0.0);

    let velocity = (mu / angular_momentum) * Vec3::new(-sin_nu, eccentricity + cos_nu, 0.0);

    (position, velocity)
}

#[cfg(test)]
mod perifocal_test {
    use super::*;
    use crate::constants::{DPI, MU_EARTH, MU_SUN};
    use crate::orbit_geometry::angular_momentum;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_periapsis_state() {
        let h = angular_momentum(8578.0, 0.2098, MU_EARTH);
        let (r, v) = perifocal_state(h, 0.2098, 0.0, MU_EARTH);

        // periapsis radius a(1 − e)
        assert_relative_eq!(r.x, 8578.0 * (1.0 - 0.2098), max_relative = 1e-12);
        assert_eq!(r.y, 0.0);
        assert_eq!(r.z, 0.0);

        assert_eq!(v.x, 0.0);
        assert_relative_eq!(v.y, MU_EARTH / h * 1.2098, max_relative = 1e-12);
        assert_eq!(v.z, 0.0);
    }

    #[test]
    fn test_position_magnitude() {
        let mut rng = StdRng::seed_from_u64(7_u64);

        for _ in 0..1_000 {
            let e = rng.random_range(0.0..0.99);
            let nu = rng.random_range(0.0..DPI);
            let h = rng.random_range(1e3..1e10);

            let (r, v) = perifocal_state(h, e, nu, MU_SUN);
            let expected = (h * h / MU_SUN) / (1.0 + e * nu.cos());

            assert_relative_eq!(r.norm(), expected, max_relative = 1e-12);
            assert_eq!(r.z, 0.0);
            assert_eq!(v.z, 0.0);
            // angular momentum is conserved in the orbital plane
            assert_relative_eq!(r.cross(&v).z, h, max_relative = 1e-9);
        }
    }
}
