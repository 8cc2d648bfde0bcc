//! # orbitstate
//!
//! Heliocentric position and velocity of solar-system bodies from mean orbital elements
//! with linear secular rates.
//!
//! Given an [`OrbitalElementSet`](crate::elements::OrbitalElementSet) referred to J2000 and a
//! UTC instant, [`compute_state_vector`](crate::state_vector::compute_state_vector) returns
//! the state in the heliocentric ecliptic frame, in km and km/s.
//!
//! ```rust
//! use orbitstate::catalog::ElementCatalog;
//! use orbitstate::state_vector::compute_state_vector;
//! use orbitstate::time::parse_utc_timestamp;
//!
//! let earth = *ElementCatalog::planets().get("Earth").unwrap();
//! let epoch = parse_utc_timestamp("2003-08-27T12:00:00Z").unwrap();
//! let state = compute_state_vector(&earth, &epoch).unwrap();
//!
//! assert!((state.distance() / 1.5e8 - 1.0).abs() < 0.02);
//! ```

pub mod catalog;
pub mod constants;
pub mod elements;
pub mod kepler;
pub mod orbit_geometry;
pub mod orbitstate_errors;
pub mod perifocal;
pub mod ref_system;
pub mod state_params;
pub mod state_vector;
pub mod time;
