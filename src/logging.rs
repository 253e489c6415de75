use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when `RUST_LOG` is unset. Quiet enough not to disturb the lessons.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr subscriber driven by `RUST_LOG`. Calling it twice is harmless.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
