//! # Kepler's equation for elliptical orbits
//!
//! Mean anomaly → eccentric anomaly (Newton–Raphson on `E − e·sin E − M = 0`)
//! → true anomaly (closed form).
//!
//! The iteration is bounded: [`solve_eccentric_anomaly`] never loops past
//! [`KeplerSettings::max_iterations`] and reports which way it stopped through
//! [`KeplerOutcome`], so callers can tell a converged anomaly from a best-effort one.

use std::f64::consts::PI;

use tracing::warn;

use crate::constants::{Radian, DPI};
use crate::orbitstate_errors::{OrbitStateError, Result};

/// Default stopping threshold on the magnitude of the Newton correction.
pub const KEPLER_TOLERANCE: f64 = 1e-8;

/// Default iteration budget of the Newton–Raphson solver.
pub const KEPLER_MAX_ITERATIONS: usize = 1000;

/// Positive modulus: `a mod b` mapped into `[0, b)` for any real `a` and `b > 0`.
///
/// Unlike the `%` operator, the result is never negative.
pub fn posmod(a: f64, b: f64) -> f64 {
    let r = a.rem_euclid(b);
    // rem_euclid may round up to exactly `b` for tiny negative `a`
    if r >= b {
        0.0
    } else {
        r
    }
}

/// Principal value of an angle in radians, in `[0, 2π)`.
pub fn principal_angle(a: Radian) -> Radian {
    posmod(a, DPI)
}

/// Stopping rules of the eccentric anomaly solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSettings {
    /// Convergence is declared once `|ΔE|` falls below this value (radians).
    pub tolerance: f64,
    /// Maximum number of Newton updates.
    pub max_iterations: usize,
}

impl Default for KeplerSettings {
    fn default() -> Self {
        KeplerSettings {
            tolerance: KEPLER_TOLERANCE,
            max_iterations: KEPLER_MAX_ITERATIONS,
        }
    }
}

/// How the eccentric anomaly solver stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeplerOutcome {
    /// The last Newton correction was below the tolerance.
    Converged { anomaly: Radian, iterations: usize },
    /// The iteration budget was exhausted; `residual` is `E − e·sin E − M` at `last`.
    IterationLimit {
        last: Radian,
        residual: f64,
        iterations: usize,
    },
}

impl KeplerOutcome {
    /// The eccentric anomaly, converged or best-effort.
    pub fn anomaly(&self) -> Radian {
        match *self {
            KeplerOutcome::Converged { anomaly, .. } => anomaly,
            KeplerOutcome::IterationLimit { last, .. } => last,
        }
    }

    pub fn iterations(&self) -> usize {
        match *self {
            KeplerOutcome::Converged { iterations, .. }
            | KeplerOutcome::IterationLimit { iterations, .. } => iterations,
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, KeplerOutcome::Converged { .. })
    }

    /// Converged anomaly, or [`OrbitStateError::KeplerNonConvergence`].
    pub fn into_result(self) -> Result<Radian> {
        match self {
            KeplerOutcome::Converged { anomaly, .. } => Ok(anomaly),
            KeplerOutcome::IterationLimit {
                last,
                residual,
                iterations,
            } => Err(OrbitStateError::KeplerNonConvergence {
                last,
                residual,
                iterations,
            }),
        }
    }
}

/// Solve Kepler's equation `E − e·sin(E) = M` for the eccentric anomaly.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly `M` in radians (any real value)
/// * `eccentricity`: eccentricity `e` in `[0, 1)`
/// * `settings`: tolerance and iteration budget
///
/// Return
/// ------
/// * a [`KeplerOutcome`] carrying the eccentric anomaly and the number of updates performed
///
/// Details
/// -------
/// Starts from `E₀ = M + e/2` when `M < π`, `E₀ = M − e/2` otherwise, then applies
/// `E ← E − (E − e·sin E − M) / (1 − e·cos E)` until `|ΔE| < tolerance`.
pub fn solve_eccentric_anomaly(
    mean_anomaly: Radian,
    eccentricity: f64,
    settings: &KeplerSettings,
) -> KeplerOutcome {
    let kepler = |ecc_anom: f64| ecc_anom - eccentricity * ecc_anom.sin() - mean_anomaly;
    let kepler_prime = |ecc_anom: f64| 1.0 - eccentricity * ecc_anom.cos();

    let mut ecc_anom = if mean_anomaly < PI {
        mean_anomaly + 0.5 * eccentricity
    } else {
        mean_anomaly - 0.5 * eccentricity
    };

    for iteration in 1..=settings.max_iterations {
        let correction = kepler(ecc_anom) / kepler_prime(ecc_anom);
        ecc_anom -= correction;

        if correction.abs() < settings.tolerance {
            return KeplerOutcome::Converged {
                anomaly: ecc_anom,
                iterations: iteration,
            };
        }
    }

    let residual = kepler(ecc_anom);
    warn!(
        mean_anomaly,
        eccentricity,
        last = ecc_anom,
        residual,
        "Kepler solver reached its iteration limit"
    );

    KeplerOutcome::IterationLimit {
        last: ecc_anom,
        residual,
        iterations: settings.max_iterations,
    }
}

/// True anomaly from the eccentric anomaly, in `[0, 2π)`.
///
/// `ν = 2·atan2(√(1+e)·tan(E/2), √(1−e))`; the two-argument arctangent keeps the quadrant.
pub fn true_anomaly(eccentric_anomaly: Radian, eccentricity: f64) -> Radian {
    let nu = 2.0
        * ((1.0 + eccentricity).sqrt() * (eccentric_anomaly / 2.0).tan())
            .atan2((1.0 - eccentricity).sqrt());
    principal_angle(nu)
}
