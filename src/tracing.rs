//! Tracing initialization for embedders and tests.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Environment variable selecting JSON log lines instead of the compact format.
pub const LOG_FORMAT_ENV: &str = "DOXYSEARCH_LOG_FORMAT";

/// Initialize tracing. Safe to call multiple times.
///
/// Logs go to stderr so stdout stays free for whatever renders parse and search
/// results. Under a test harness logs go to the test writer at DEBUG level.
pub fn init() {
    INIT.call_once(|| {
        let is_test =
            std::env::var("NEXTEST").is_ok() || std::env::var("CARGO_TARGET_TMPDIR").is_ok();
        let level = if is_test {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        let filter = EnvFilter::from_default_env().add_directive(level.into());
        let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true);

        if is_test {
            if let Err(e) = builder.compact().with_test_writer().try_init() {
                eprintln!("Failed to initialize tracing: {}", e);
            }
        } else if json {
            if let Err(e) = builder.json().with_writer(std::io::stderr).try_init() {
                eprintln!("Failed to initialize tracing: {}", e);
            }
        } else if let Err(e) = builder.compact().with_writer(std::io::stderr).try_init() {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
