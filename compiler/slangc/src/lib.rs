//! Slang driver: the embeddable session API and the `slang` binary's
//! commands.
//!
//! ```text
//! let mut session = Session::buffered();
//! session.eval_source("let add = { a b -> a + b }")?;
//! assert_eq!(session.eval_source("add 3 4")?, Value::number(7.0));
//! ```

pub mod commands;
mod config;
mod session;

use std::sync::Once;

pub use config::{CliConfig, Command};
pub use session::{Session, SessionError};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call more than once. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=slang_eval=debug` to see dispatch decisions.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
