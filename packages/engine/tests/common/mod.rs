#![allow(dead_code)]

// tests/common/mod.rs

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

pub use engine_test_support::proptest_prelude::proptest_prelude_config;
