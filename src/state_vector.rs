//! # Element set → heliocentric state vector
//!
//! Evaluates an [`OrbitalElementSet`] at a UTC instant and returns the position (km) and
//! velocity (km/s) of the body in the heliocentric ecliptic frame.
//!
//! Pipeline
//! --------
//! 1. UTC instant → Julian centuries since J2000 ([`crate::time`])
//! 2. Secular drift of the six elements ([`OrbitalElementSet::interpolate`])
//! 3. Angular momentum, argument of periapsis, mean anomaly ([`OrbitGeometry`])
//! 4. Kepler's equation → eccentric anomaly → true anomaly ([`crate::kepler`])
//! 5. Perifocal position and velocity ([`perifocal_state`])
//! 6. Rotation to the inertial frame ([`perifocal_to_inertial`])
//!
//! Every call is independent: nothing is cached or mutated between evaluations.
//!
//! ```rust
//! use orbitstate::catalog::ElementCatalog;
//! use orbitstate::state_vector::compute_state_vector;
//! use orbitstate::time::parse_utc_timestamp;
//!
//! let catalog = ElementCatalog::planets();
//! let mars = catalog.get("Mars").unwrap();
//! let epoch = parse_utc_timestamp("2003-08-27T12:00:00Z").unwrap();
//!
//! let state = compute_state_vector(mars, &epoch).unwrap();
//! println!("{state}");
//! ```

use std::fmt;

use hifitime::Epoch;
use serde::Serialize;
use tracing::debug;

use crate::constants::{JulianCentury, Vec3};
use crate::elements::OrbitalElementSet;
use crate::kepler::{solve_eccentric_anomaly, true_anomaly};
use crate::orbit_geometry::OrbitGeometry;
use crate::orbitstate_errors::Result;
use crate::perifocal::perifocal_state;
use crate::ref_system::{perifocal_to_inertial, to_inertial};
use crate::state_params::StateParams;
use crate::time::julian_centuries_from_epoch;

/// Position and velocity of a body in the heliocentric ecliptic frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StateVector {
    /// km
    pub position: Vec3,
    /// km/s
    pub velocity: Vec3,
}

impl StateVector {
    /// Heliocentric distance (km).
    pub fn distance(&self) -> f64 {
        self.position.norm()
    }

    /// Orbital speed (km/s).
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}

impl From<StateVector> for (Vec3, Vec3) {
    fn from(state: StateVector) -> Self {
        (state.position, state.velocity)
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "r = [{:.6e}, {:.6e}, {:.6e}] km, v = [{:.6}, {:.6}, {:.6}] km/s",
            self.position.x,
            self.position.y,
            self.position.z,
            self.velocity.x,
            self.velocity.y,
            self.velocity.z
        )
    }
}

/// Heliocentric state of a body at a UTC instant, with default [`StateParams`].
///
/// Return
/// ------
/// * `Ok(StateVector)` in km and km/s
/// * `Err(KeplerNonConvergence)` if the anomaly solver exhausts its budget
/// * a validation error if the element record is not a bound elliptical orbit
pub fn compute_state_vector(elements: &OrbitalElementSet, epoch: &Epoch) -> Result<StateVector> {
    compute_state_vector_with(elements, epoch, &StateParams::default())
}

/// Same as [`compute_state_vector`], with caller-provided parameters
/// (central body, solver budget, validation).
pub fn compute_state_vector_with(
    elements: &OrbitalElementSet,
    epoch: &Epoch,
    params: &StateParams,
) -> Result<StateVector> {
    let t = julian_centuries_from_epoch(epoch);
    debug!(%epoch, julian_centuries = t, "evaluating element set");
    compute_state_vector_at_centuries(elements, t, params)
}

/// State of a body `t` Julian centuries after J2000.
pub fn compute_state_vector_at_centuries(
    elements: &OrbitalElementSet,
    t: JulianCentury,
    params: &StateParams,
) -> Result<StateVector> {
    if params.validate_elements {
        elements.validate()?;
    }

    let current = elements.interpolate(t);
    if params.validate_elements {
        current.validate()?;
    }

    let geometry = OrbitGeometry::from_elements(&current, params.mu);

    let ecc_anom = solve_eccentric_anomaly(
        geometry.mean_anomaly,
        current.eccentricity,
        &params.kepler_settings(),
    );
    let iterations = ecc_anom.iterations();
    let ecc_anom = ecc_anom.into_result()?;
    let nu = true_anomaly(ecc_anom, current.eccentricity);

    debug!(
        angular_momentum = geometry.angular_momentum,
        argument_of_periapsis = geometry.argument_of_periapsis,
        mean_anomaly = geometry.mean_anomaly,
        eccentric_anomaly = ecc_anom,
        true_anomaly = nu,
        iterations,
        "orbit geometry"
    );

    let (r_pf, v_pf) = perifocal_state(
        geometry.angular_momentum,
        current.eccentricity,
        nu,
        params.mu,
    );

    let rotation = perifocal_to_inertial(
        current.right_ascension,
        current.inclination,
        geometry.argument_of_periapsis,
    );
    let (position, velocity) = to_inertial(&rotation, &r_pf, &v_pf);

    Ok(StateVector { position, velocity })
}
