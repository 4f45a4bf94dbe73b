#![allow(dead_code)]

pub mod backend;
pub mod sources;

pub use backend::*;
pub use sources::*;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
