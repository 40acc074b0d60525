//! Common test utilities and fixtures for integration tests.

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging once per test binary.
pub fn init() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
