use anyhow::Result;
use horas::commands::Cli;
use horas::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Message macros route through tracing only in debug mode, so the
    // subscriber is installed only then; normal runs print plain text
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .init();
    }

    Cli::menu()
}
