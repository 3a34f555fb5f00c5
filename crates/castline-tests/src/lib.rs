//! Integration test crate for Castline.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on the castline crates to verify they work together.

#[cfg(test)]
mod properties;

#[cfg(test)]
mod store;


/// Route `tracing` output to the test harness. Filter with `RUST_LOG`.
#[cfg(test)]
pub(crate) fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
