//! # State evaluation parameters
//!
//! [`StateParams`] gathers the knobs of the element → state vector pipeline:
//!
//! * `mu` – gravitational parameter of the central body (km³/s²), the Sun by default.
//! * `kepler_eps` – stopping threshold on the Newton correction of the Kepler solver.
//! * `kepler_max_iter` – iteration budget of the Kepler solver.
//! * `validate_elements` – check the element record (finite values, `a > 0`, `0 ≤ e < 1`)
//!   before and after secular drift.
//!
//! Parameters are built with a fluent builder that validates the values:
//!
//! ```rust
//! use orbitstate::constants::MU_EARTH;
//! use orbitstate::state_params::StateParams;
//!
//! let params = StateParams::builder()
//!     .mu(MU_EARTH)
//!     .kepler_eps(1e-12)
//!     .build()
//!     .unwrap();
//! assert_eq!(params.kepler_max_iter, 1000);
//! ```

use std::cmp::Ordering::Greater;
use std::fmt;

use crate::constants::MU_SUN;
use crate::kepler::{KeplerSettings, KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE};
use crate::orbitstate_errors::{OrbitStateError, Result};

/// Parameters of a state vector evaluation.
///
/// Defaults
/// --------
/// * `mu`: 1.32712440018e11 km³/s² (Sun)
/// * `kepler_eps`: 1e-8 rad
/// * `kepler_max_iter`: 1000
/// * `validate_elements`: true
#[derive(Debug, Clone, PartialEq)]
pub struct StateParams {
    /// Gravitational parameter of the central body (km³/s²).
    pub mu: f64,
    /// Newton correction threshold of the Kepler solver (rad).
    pub kepler_eps: f64,
    /// Maximum number of Newton updates in the Kepler solver.
    pub kepler_max_iter: usize,
    /// Validate element records before evaluation.
    pub validate_elements: bool,
}

impl StateParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> StateParamsBuilder {
        StateParamsBuilder::new()
    }

    pub fn kepler_settings(&self) -> KeplerSettings {
        KeplerSettings {
            tolerance: self.kepler_eps,
            max_iterations: self.kepler_max_iter,
        }
    }
}

impl Default for StateParams {
    fn default() -> Self {
        StateParams {
            mu: MU_SUN,
            kepler_eps: KEPLER_TOLERANCE,
            kepler_max_iter: KEPLER_MAX_ITERATIONS,
            validate_elements: true,
        }
    }
}

/// Builder for [`StateParams`], with validation.
#[derive(Debug, Clone)]
pub struct StateParamsBuilder {
    params: StateParams,
}

impl Default for StateParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StateParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: StateParams::default(),
        }
    }

    pub fn mu(mut self, v: f64) -> Self {
        self.params.mu = v;
        self
    }
    pub fn kepler_eps(mut self, v: f64) -> Self {
        self.params.kepler_eps = v;
        self
    }
    pub fn kepler_max_iter(mut self, v: usize) -> Self {
        self.params.kepler_max_iter = v;
        self
    }
    pub fn validate_elements(mut self, v: bool) -> Self {
        self.params.validate_elements = v;
        self
    }

    /// Return true iff x > 0.0 and finite (NaN is rejected).
    #[inline]
    fn positive_finite(x: f64) -> bool {
        x.is_finite() && x.partial_cmp(&0.0) == Some(Greater)
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// ----------------
    /// * `mu > 0` and finite
    /// * `kepler_eps > 0` and finite
    /// * `kepler_max_iter ≥ 1`
    pub fn build(self) -> Result<StateParams> {
        let p = &self.params;

        if !Self::positive_finite(p.mu) {
            return Err(OrbitStateError::InvalidStateParameter(
                "mu must be finite and > 0".into(),
            ));
        }
        if !Self::positive_finite(p.kepler_eps) {
            return Err(OrbitStateError::InvalidStateParameter(
                "kepler_eps must be finite and > 0".into(),
            ));
        }
        if p.kepler_max_iter == 0 {
            return Err(OrbitStateError::InvalidStateParameter(
                "kepler_max_iter must be >= 1".into(),
            ));
        }

        Ok(self.params)
    }
}

impl fmt::Display for StateParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "State Evaluation Parameters")?;
            writeln!(f, "---------------------------")?;
            writeln!(f, "  mu                = {:.6e} km^3/s^2", self.mu)?;
            writeln!(f, "  kepler_eps        = {:.1e} rad", self.kepler_eps)?;
            writeln!(f, "  kepler_max_iter   = {}", self.kepler_max_iter)?;
            write!(f, "  validate_elements = {}", self.validate_elements)
        } else {
            write!(
                f,
                "StateParams(mu={:.6e}, kepler_eps={:.1e}, kepler_max_iter={}, validate={})",
                self.mu, self.kepler_eps, self.kepler_max_iter, self.validate_elements
            )
        }
    }
}
