//! Shared fixtures for lexcheck integration tests.
//!
//! - [`FakeShellTokenizer`] - word-level shell classifier that consults the
//!   loaded builtins
//! - [`ScriptedTokenizer`] - replays canned token streams
//! - [`init_logging`] - tracing subscriber plus a bridge for library logs

#![allow(clippy::nursery)] // Test fixtures prioritize clarity over pedantry
#![allow(clippy::pedantic)] // Test fixtures prioritize clarity over pedantry
#![allow(dead_code)]

pub mod fake_shell;
pub mod scripted;

use std::sync::Once;

use lexcheck::event::{LogLevel, set_log_callback};
use tracing::Level;

pub use fake_shell::FakeShellTokenizer;
pub use scripted::ScriptedTokenizer;

/// Install a test-writer tracing subscriber and route library logs into it.
pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_test_writer()
            .try_init();
        set_log_callback(|level, message| match level {
            LogLevel::Debug => tracing::debug!(target: "lexcheck", "{message}"),
            LogLevel::Info => tracing::info!(target: "lexcheck", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "lexcheck", "{message}"),
            LogLevel::Error => tracing::error!(target: "lexcheck", "{message}"),
        });
    });
}
