//! Shared helpers for integration tests
#![allow(dead_code)]

pub mod gens;
pub mod logging;

use proptest::prelude::ProptestConfig;

/// Proptest configuration with the case count from `PROPTEST_CASES`
pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
