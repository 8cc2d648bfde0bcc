//! # Orbital element catalog
//!
//! Name → [`OrbitalElementSet`] table, as stored in a JSON document:
//!
//! ```json
//! {
//!   "Earth": {
//!     "semi_major_axis":        { "value": 1.00000011, "rate": -0.00000005 },
//!     "eccentricity":           { "value": 0.01671022, "rate": -0.00003804 },
//!     "inclination":            { "value": 0.00005,    "rate": -46.94 },
//!     "right_ascension":        { "value": -11.26064,  "rate": -18228.25 },
//!     "longitude_of_periapsis": { "value": 102.94719,  "rate": 1198.28 },
//!     "mean_longitude":         { "value": 100.46435,  "rate": 129597740.63 }
//!   }
//! }
//! ```
//!
//! Values are in AU and degrees, rates per Julian century with angular rates in arcseconds.
//!
//! [`ElementCatalog::planets`] provides the J2000 mean elements and secular rates of the
//! nine classical planets (heliocentric ecliptic frame).
//!
//! ## Inclination sign convention
//!
//! Some published element tables list a near-zero inclination with a negative secular
//! rate, so the drifted inclination changes sign shortly after J2000 (the Earth is the
//! usual case). Reference results for such bodies are not consistent on which sign they
//! assume. The catalog keeps the published values untouched;
//! [`ElementCatalog::flag_inclination_sign`] reports the affected bodies.

use std::collections::HashMap;

use camino::Utf8Path;
use itertools::Itertools;
use tracing::{info, warn};

use crate::constants::JulianCentury;
use crate::elements::{OrbitalElementSet, SecularElement};
use crate::orbitstate_errors::{OrbitStateError, Result};

/// J2000 mean elements and rates per century:
/// `[a, ȧ, e, ė, i, i̇, Ω, Ω̇, ϖ, ϖ̇, L, L̇]` in AU, degrees and arcseconds.
const PLANET_TABLE: [(&str, [f64; 12]); 9] = [
    (
        "Mercury",
        [
            0.38709893, 0.00000066, 0.20563069, 0.00002527, 7.00487, -23.51, 48.33167,
            -446.30, 77.45645, 573.57, 252.25084, 538101628.29,
        ],
    ),
    (
        "Venus",
        [
            0.72333199, 0.00000092, 0.00677323, -0.00004938, 3.39471, -2.86, 76.68069,
            -996.89, 131.53298, -108.80, 181.97973, 210664136.06,
        ],
    ),
    (
        "Earth",
        [
            1.00000011, -0.00000005, 0.01671022, -0.00003804, 0.00005, -46.94, -11.26064,
            -18228.25, 102.94719, 1198.28, 100.46435, 129597740.63,
        ],
    ),
    (
        "Mars",
        [
            1.52366231, -0.00007221, 0.09341233, 0.00011902, 1.85061, -25.47, 49.57854,
            -1020.19, 336.04084, 1560.78, 355.45332, 68905103.78,
        ],
    ),
    (
        "Jupiter",
        [
            5.20336301, 0.00060737, 0.04839266, -0.00012880, 1.30530, -4.15, 100.55615,
            1217.17, 14.75385, 839.93, 34.40438, 10925078.35,
        ],
    ),
    (
        "Saturn",
        [
            9.53707032, -0.00301530, 0.05415060, -0.00036762, 2.48446, 6.11, 113.71504,
            -1591.05, 92.43194, -1948.89, 49.94432, 4401052.95,
        ],
    ),
    (
        "Uranus",
        [
            19.19126393, 0.00152025, 0.04716771, -0.00019150, 0.76986, -2.09, 74.22988,
            -1681.40, 170.96424, 1312.56, 313.23218, 1542547.79,
        ],
    ),
    (
        "Neptune",
        [
            30.06896348, -0.00125196, 0.00858587, 0.00002514, 1.76917, -3.64, 131.72169,
            -151.25, 44.97135, -844.43, 304.88003, 786449.21,
        ],
    ),
    (
        "Pluto",
        [
            39.48168677, -0.00076912, 0.24880766, 0.00006465, 17.14175, 11.07, 110.30347,
            -37.33, 224.06676, -132.25, 238.92881, 522747.90,
        ],
    ),
];

impl From<[f64; 12]> for OrbitalElementSet {
    fn from(row: [f64; 12]) -> Self {
        OrbitalElementSet {
            semi_major_axis: SecularElement::new(row[0], row[1]),
            eccentricity: SecularElement::new(row[2], row[3]),
            inclination: SecularElement::new(row[4], row[5]),
            right_ascension: SecularElement::new(row[6], row[7]),
            longitude_of_periapsis: SecularElement::new(row[8], row[9]),
            mean_longitude: SecularElement::new(row[10], row[11]),
        }
    }
}

/// Element records indexed by body name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementCatalog {
    bodies: HashMap<String, OrbitalElementSet>,
}

impl ElementCatalog {
    /// Built-in table of the nine classical planets.
    pub fn planets() -> Self {
        PLANET_TABLE
            .iter()
            .map(|(name, row)| (name.to_string(), OrbitalElementSet::from(*row)))
            .collect()
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let bodies: HashMap<String, OrbitalElementSet> = serde_json::from_str(json)?;
        info!(bodies = bodies.len(), "loaded orbital element catalog");
        Ok(ElementCatalog { bodies })
    }

    /// Read and parse a JSON catalog file.
    pub fn from_path(path: &Utf8Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        info!(%path, "reading orbital element catalog");
        Self::from_json_str(&json)
    }

    /// Element record of a body. Exact names are tried first, then a case-insensitive match.
    pub fn get(&self, name: &str) -> Result<&OrbitalElementSet> {
        self.bodies
            .get(name)
            .or_else(|| {
                self.bodies
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, elements)| elements)
            })
            .ok_or_else(|| OrbitStateError::UnknownBody(name.to_string()))
    }

    /// Body names in lexicographic order.
    pub fn names(&self) -> Vec<&str> {
        self.bodies.keys().map(String::as_str).sorted().collect()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OrbitalElementSet)> {
        self.bodies.iter().map(|(name, elements)| (name.as_str(), elements))
    }

    /// Validate every record, see [`OrbitalElementSet::validate`].
    ///
    /// Bodies are checked in name order so the first reported error is deterministic.
    pub fn validate(&self) -> Result<()> {
        for name in self.names() {
            self.bodies[name].validate()?;
        }
        Ok(())
    }

    /// Bodies whose drifted inclination is negative somewhere in `[t_start, t_end]`
    /// (Julian centuries since J2000).
    ///
    /// Each flagged body is reported with a warning. No value is modified.
    pub fn flag_inclination_sign(
        &self,
        t_start: JulianCentury,
        t_end: JulianCentury,
    ) -> Vec<&str> {
        self.names()
            .into_iter()
            .filter(|name| {
                let inclination = &self.bodies[*name].inclination;
                // linear in t: the extremes are reached at the interval bounds
                let lowest = inclination.degrees_at(t_start).min(inclination.degrees_at(t_end));
                if lowest < 0.0 {
                    warn!(
                        body = *name,
                        inclination = inclination.value,
                        rate = inclination.rate,
                        t_start,
                        t_end,
                        "inclination changes sign over the evaluation span, sign convention is ambiguous"
                    );
                    true
                } else {
                    false
                }
            })
            .collect()
    }
}

impl FromIterator<(String, OrbitalElementSet)> for ElementCatalog {
    fn from_iter<I: IntoIterator<Item = (String, OrbitalElementSet)>>(iter: I) -> Self {
        ElementCatalog {
            bodies: iter.into_iter().collect(),
        }
    }
}
