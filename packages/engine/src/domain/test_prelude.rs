//! Shared proptest configuration.

use proptest::prelude::ProptestConfig;

pub fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}
