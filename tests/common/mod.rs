#![allow(dead_code)]

use orbitstate::constants::Vec3;
use tracing_subscriber::EnvFilter;

/// Relative error of a vector, `|actual − expected| / |expected|`.
pub fn relative_error(actual: &Vec3, expected: &Vec3) -> f64 {
    (actual - expected).norm() / expected.norm()
}

pub fn assert_vec_close(actual: &Vec3, expected: &Vec3, max_relative: f64) {
    let err = relative_error(actual, expected);
    assert!(
        err < max_relative,
        "relative error {err:e} >= {max_relative:e}\n  actual:   {actual:?}\n  expected: {expected:?}"
    );
}

/// Route `tracing` output to the test harness, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
