mod common;

use approx::assert_relative_eq;
use camino::Utf8Path;
use hifitime::Epoch;
use orbitstate::catalog::ElementCatalog;
use orbitstate::constants::{Vec3, AU, MU_SUN};
use orbitstate::orbitstate_errors::OrbitStateError;
use orbitstate::state_params::StateParams;
use orbitstate::state_vector::{compute_state_vector, compute_state_vector_with};
use orbitstate::time::{julian_centuries_from_epoch, parse_utc_timestamp};

use crate::common::{assert_vec_close, init_tracing};

const EPOCH: &str = "2003-08-27T12:00:00Z";

fn epoch() -> Epoch {
    parse_utc_timestamp(EPOCH).unwrap()
}

#[test]
fn test_earth_state_vector() {
    init_tracing();
    let catalog = ElementCatalog::planets();
    let state = compute_state_vector(catalog.get("Earth").unwrap(), &epoch()).unwrap();

    assert_vec_close(
        &state.position,
        &Vec3::new(135.59e6, -66.803e6, -2.869e2),
        1e-3,
    );
    assert_vec_close(
        &state.velocity,
        &Vec3::new(12.680, 26.61, -0.00021273),
        1e-3,
    );

    // the published Earth inclination crosses zero a few years after J2000
    assert!(state.position.z.abs() < 1e3);
    assert!(state.velocity.z.abs() < 1e-3);
}

#[test]
fn test_mars_state_vector() {
    init_tracing();
    let catalog = ElementCatalog::planets();
    let state = compute_state_vector(catalog.get("mars").unwrap(), &epoch()).unwrap();

    assert_vec_close(
        &state.position,
        &Vec3::new(185.95e6, -89.916e6, -6.4566e6),
        1e-3,
    );
    assert_vec_close(
        &state.velocity,
        &Vec3::new(11.474, 23.884, 0.21826),
        1e-3,
    );

    // component-wise for the out-of-plane terms, which a norm check would hide
    assert_relative_eq!(state.position.z, -6.4566e6, max_relative = 1e-3);
    assert_relative_eq!(state.velocity.z, 0.21826, max_relative = 1e-3);
}

#[test]
fn test_catalog_file_matches_builtin_table() {
    let path = Utf8Path::new("tests/data/planets.json");
    let from_file = ElementCatalog::from_path(path).unwrap();
    let builtin = ElementCatalog::planets();

    assert_eq!(from_file.names(), vec!["Earth", "Jupiter", "Mars"]);
    from_file.validate().unwrap();

    for name in from_file.names() {
        let a = compute_state_vector(from_file.get(name).unwrap(), &epoch()).unwrap();
        let b = compute_state_vector(builtin.get(name).unwrap(), &epoch()).unwrap();
        assert_vec_close(&a.position, &b.position, 1e-12);
        assert_vec_close(&a.velocity, &b.velocity, 1e-12);
    }
}

#[test]
fn test_missing_catalog_file() {
    let err = ElementCatalog::from_path(Utf8Path::new("tests/data/no_such_file.json"));
    assert!(matches!(err, Err(OrbitStateError::IoError(_))));
}

#[test]
fn test_inclination_sign_flag() {
    init_tracing();
    let t = julian_centuries_from_epoch(&epoch());
    let catalog = ElementCatalog::planets();
    let flagged = catalog.flag_inclination_sign(0.0, t);

    assert_eq!(flagged, vec!["Earth"]);
}

#[test]
fn test_all_planets_are_bound() {
    let params = StateParams::default();
    let catalog = ElementCatalog::planets();
    catalog.validate().unwrap();

    for (name, elements) in catalog.iter() {
        let state = compute_state_vector_with(elements, &epoch(), &params).unwrap();
        let a = elements.semi_major_axis.value * AU;
        let e = elements.eccentricity.value;

        // between perihelion and aphelion, with some slack for the drift since J2000
        assert!(
            state.distance() > 0.99 * a * (1.0 - e) && state.distance() < 1.01 * a * (1.0 + e),
            "{name}: r = {}",
            state.distance()
        );

        // vis-viva
        let energy = state.speed().powi(2) / 2.0 - MU_SUN / state.distance();
        assert!(energy < 0.0, "{name} is not bound");
    }
}

#[test]
fn test_central_body_override_scales_velocity() {
    let earth = ElementCatalog::planets().get("Earth").copied().unwrap();
    let sun = compute_state_vector(&earth, &epoch()).unwrap();

    let heavy = StateParams::builder().mu(4.0 * MU_SUN).build().unwrap();
    let scaled = compute_state_vector_with(&earth, &epoch(), &heavy).unwrap();

    // positions do not depend on μ, velocities scale with √μ
    assert_vec_close(&scaled.position, &sun.position, 1e-12);
    assert_vec_close(&scaled.velocity, &(sun.velocity * 2.0), 1e-12);
}

#[test]
fn test_repeated_evaluation_is_stateless() {
    let mars = ElementCatalog::planets().get("Mars").copied().unwrap();
    let first = compute_state_vector(&mars, &epoch()).unwrap();
    let _other = compute_state_vector(&mars, &parse_utc_timestamp("1990-01-01T00:00:00Z").unwrap());
    let second = compute_state_vector(&mars, &epoch()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_state_vector_serializes() {
    let mars = ElementCatalog::planets().get("Mars").copied().unwrap();
    let state = compute_state_vector(&mars, &epoch()).unwrap();

    let json = serde_json::to_value(state).unwrap();
    assert_eq!(json["position"].as_array().unwrap().len(), 3);
    assert_eq!(json["velocity"].as_array().unwrap().len(), 3);
}
