//! `log`-based reporting helpers for error chains.
//!
//! Rendering verbs live on [`Error`] itself; this module only routes
//! them through the standard `log` facade and owns the one-time
//! `env_logger` setup.

use std::sync::Once;

use log::{debug, error};

use crate::types::Error;

static INIT_LOGGER: Once = Once::new();

/// Initializes `env_logger` once for application binaries.
///
/// Levels come from `RUST_LOG` as usual, e.g. `RUST_LOG=info` or
/// `RUST_LOG=errkit_gerror=debug`.
pub fn init() {
    INIT_LOGGER.call_once(|| {
        env_logger::Builder::from_default_env()
            .format_timestamp_micros()
            .init();
    });
}

/// Test-friendly logger init; safe to call from every test.
pub fn init_test() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}

/// Logs the full chain at error level, with the stack listing at debug
/// level.
pub fn log_chain(context: &str, err: &Error) {
    let code = err.code();
    if code.is_nil() {
        error!("{context}: {err}");
    } else {
        error!("{context}: {err} (code: {code})");
    }
    let stack = err.stack_string();
    if !stack.is_empty() {
        debug!("stack for {context}:\n{stack}");
    }
}
