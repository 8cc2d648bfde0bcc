//! # Mean orbital elements with secular rates
//!
//! An [`OrbitalElementSet`] holds six elements referred to the J2000.0 epoch together with
//! their linear drift per Julian century:
//!
//! | element                  | value unit | rate unit          |
//! |--------------------------|------------|--------------------|
//! | semi-major axis `a`      | AU         | AU / century       |
//! | eccentricity `e`         | –          | 1 / century        |
//! | inclination `i`          | degrees    | arcsec / century   |
//! | right ascension `Ω`      | degrees    | arcsec / century   |
//! | longitude of periapsis ϖ | degrees    | arcsec / century   |
//! | mean longitude `L`       | degrees    | arcsec / century   |
//!
//! [`OrbitalElementSet::interpolate`] evaluates the set at `T` Julian centuries past J2000,
//! converting to kilometers and radians and wrapping angles into `[0, 2π)`.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ArcSec, AstronomicalUnit, Degree, JulianCentury, Kilometer, Radian, AU, RADEG, RADSEC,
};
use crate::kepler::principal_angle;
use crate::orbitstate_errors::{OrbitStateError, Result};

/// Linear extrapolation `value0 + rate·t`.
#[inline]
pub fn interpolate(value0: f64, rate: f64, t: f64) -> f64 {
    value0 + rate * t
}

/// An element value at J2000 and its drift per Julian century.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecularElement {
    pub value: f64,
    pub rate: f64,
}

impl SecularElement {
    pub fn new(value: f64, rate: f64) -> Self {
        SecularElement { value, rate }
    }

    pub fn at(&self, t: JulianCentury) -> f64 {
        interpolate(self.value, self.rate, t)
    }

    /// Angle in degrees with a rate in arcseconds per century, evaluated in degrees
    /// without wrapping.
    pub fn degrees_at(&self, t: JulianCentury) -> Degree {
        interpolate(self.value, self.rate / 3600.0, t)
    }

    /// Angle in degrees with a rate in arcseconds per century, evaluated in radians and
    /// wrapped into `[0, 2π)`.
    fn angle_at(&self, t: JulianCentury) -> Radian {
        let value: Degree = self.value;
        let rate: ArcSec = self.rate;
        principal_angle(interpolate(value * RADEG, rate * RADSEC, t))
    }
}

/// Mean orbital elements of a body at J2000 with their secular rates.
///
/// Field names match the JSON element table layout, see
/// [`ElementCatalog`](crate::catalog::ElementCatalog).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElementSet {
    /// AU, AU per century
    pub semi_major_axis: SecularElement,
    pub eccentricity: SecularElement,
    /// degrees, arcseconds per century
    pub inclination: SecularElement,
    /// Right ascension of the ascending node: degrees, arcseconds per century
    pub right_ascension: SecularElement,
    /// degrees, arcseconds per century
    pub longitude_of_periapsis: SecularElement,
    /// degrees, arcseconds per century
    pub mean_longitude: SecularElement,
}

/// Elements evaluated at a given instant, in kilometers and radians.
///
/// All four angles lie in `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolatedElements {
    pub semi_major_axis: Kilometer,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub right_ascension: Radian,
    pub longitude_of_periapsis: Radian,
    pub mean_longitude: Radian,
}

impl OrbitalElementSet {
    /// Evaluate the elements `t` Julian centuries after J2000.
    pub fn interpolate(&self, t: JulianCentury) -> InterpolatedElements {
        let semi_major_axis: AstronomicalUnit = self.semi_major_axis.at(t);

        InterpolatedElements {
            semi_major_axis: semi_major_axis * AU,
            eccentricity: self.eccentricity.at(t),
            inclination: self.inclination.angle_at(t),
            right_ascension: self.right_ascension.angle_at(t),
            longitude_of_periapsis: self.longitude_of_periapsis.angle_at(t),
            mean_longitude: self.mean_longitude.angle_at(t),
        }
    }

    fn named_elements(&self) -> [(&'static str, &SecularElement); 6] {
        [
            ("semi_major_axis", &self.semi_major_axis),
            ("eccentricity", &self.eccentricity),
            ("inclination", &self.inclination),
            ("right_ascension", &self.right_ascension),
            ("longitude_of_periapsis", &self.longitude_of_periapsis),
            ("mean_longitude", &self.mean_longitude),
        ]
    }

    /// Check that the record describes a bound elliptical orbit at J2000.
    ///
    /// Return
    /// ------
    /// * `Err(NonFiniteElement)` if any value or rate is NaN or infinite
    /// * `Err(InvalidSemiMajorAxis)` if `a ≤ 0`
    /// * `Err(InvalidEccentricity)` if `e ∉ [0, 1)`
    pub fn validate(&self) -> Result<()> {
        for (name, element) in self.named_elements() {
            if !element.value.is_finite() || !element.rate.is_finite() {
                return Err(OrbitStateError::NonFiniteElement(name.to_string()));
            }
        }
        check_semi_major_axis(self.semi_major_axis.value)?;
        check_eccentricity(self.eccentricity.value)
    }
}

impl InterpolatedElements {
    /// Same checks as [`OrbitalElementSet::validate`], applied after drift.
    pub fn validate(&self) -> Result<()> {
        check_semi_major_axis(self.semi_major_axis)?;
        check_eccentricity(self.eccentricity)
    }
}

fn check_semi_major_axis(a: f64) -> Result<()> {
    if a > 0.0 {
        Ok(())
    } else {
        Err(OrbitStateError::InvalidSemiMajorAxis(a))
    }
}

fn check_eccentricity(e: f64) -> Result<()> {
    if (0.0..1.0).contains(&e) {
        Ok(())
    } else {
        Err(OrbitStateError::InvalidEccentricity(e))
    }
}

#[cfg(test)]
mod elements_test {
    use super::*;
    use crate::constants::DPI;
    use approx::assert_relative_eq;

    fn earth() -> OrbitalElementSet {
        OrbitalElementSet {
            semi_major_axis: SecularElement::new(1.00000011, -0.00000005),
            eccentricity: SecularElement::new(0.01671022, -0.00003804),
            inclination: SecularElement::new(0.00005, -46.94),
            right_ascension: SecularElement::new(-11.26064, -18228.25),
            longitude_of_periapsis: SecularElement::new(102.94719, 1198.28),
            mean_longitude: SecularElement::new(100.46435, 129597740.63),
        }
    }

    #[test]
    fn test_interpolate() {
        assert_eq!(interpolate(2.0, 0.5, 4.0), 4.0);
        assert_eq!(interpolate(2.0, 0.5, 0.0), 2.0);
        assert_eq!(interpolate(2.0, -0.5, 4.0), 0.0);
    }

    #[test]
    fn test_interpolate_at_j2000() {
        let elements = earth().interpolate(0.0);

        assert_relative_eq!(elements.semi_major_axis, 1.00000011 * AU);
        assert_eq!(elements.eccentricity, 0.01671022);
        assert_relative_eq!(elements.inclination, 0.00005 * RADEG);
        assert_relative_eq!(elements.right_ascension, DPI - 11.26064 * RADEG);
        assert_relative_eq!(elements.longitude_of_periapsis, 102.94719 * RADEG);
        assert_relative_eq!(elements.mean_longitude, 100.46435 * RADEG);
    }

    #[test]
    fn test_interpolated_angles_are_wrapped() {
        for t in [-3.0, -0.5, 0.0365, 0.7, 10.0] {
            let elements = earth().interpolate(t);
            for angle in [
                elements.inclination,
                elements.right_ascension,
                elements.longitude_of_periapsis,
                elements.mean_longitude,
            ] {
                assert!((0.0..DPI).contains(&angle));
            }
        }
    }

    #[test]
    fn test_arcsecond_rates() {
        // 3600 arcsec per century is one degree per century
        let element = SecularElement::new(10.0, 3600.0);
        assert_relative_eq!(element.angle_at(2.0), 12.0 * RADEG, epsilon = 1e-15);
        assert_eq!(element.degrees_at(2.0), 12.0);
        assert_eq!(SecularElement::new(0.00005, -46.94).degrees_at(1.0), 0.00005 - 46.94 / 3600.0);
    }

    #[test]
    fn test_validate() {
        assert_eq!(earth().validate(), Ok(()));

        let mut hyperbolic = earth();
        hyperbolic.eccentricity.value = 1.2;
        assert_eq!(
            hyperbolic.validate(),
            Err(OrbitStateError::InvalidEccentricity(1.2))
        );

        let mut collapsed = earth();
        collapsed.semi_major_axis.value = 0.0;
        assert_eq!(
            collapsed.validate(),
            Err(OrbitStateError::InvalidSemiMajorAxis(0.0))
        );

        let mut broken = earth();
        broken.mean_longitude.rate = f64::NAN;
        assert_eq!(
            broken.validate(),
            Err(OrbitStateError::NonFiniteElement("mean_longitude".into()))
        );
    }
}
