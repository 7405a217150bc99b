use tracing_subscriber::EnvFilter;

/// Environment variable holding `tracing` filter directives, e.g. `keebtrack=debug`.
pub const LOG_ENV_VAR: &str = "KEEBTRACK_LOG";

pub fn configure_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}
