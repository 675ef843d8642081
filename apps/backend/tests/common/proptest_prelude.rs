// Shared proptest configuration for integration test binaries.
//
// Env knobs:
// - PROPTEST_CASES: cases per property (default 32).
// - PROPTEST_MAX_SHRINK_MS: cap on shrinking time in milliseconds.
//
// Pull in with `include!("common/proptest_prelude.rs");`. Generators build
// valid inputs directly; avoid prop_assume!.

pub fn proptest_prelude_config() -> proptest::prelude::ProptestConfig {
    let base = proptest::prelude::ProptestConfig::default();

    let env_u32 = |name: &str| std::env::var(name).ok().and_then(|s| s.parse::<u32>().ok());

    proptest::prelude::ProptestConfig {
        failure_persistence: None,
        cases: env_u32("PROPTEST_CASES").unwrap_or(32).max(1),
        max_shrink_time: env_u32("PROPTEST_MAX_SHRINK_MS").unwrap_or(base.max_shrink_time),
        ..base
    }
}
