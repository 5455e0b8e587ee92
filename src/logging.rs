use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Log to a file rather than stderr: the TUI owns the terminal, so anything
/// printed there would be clobbered by the alternate screen.
pub fn init_logging(level: &str) -> Result<()> {
    let log_file = std::sync::Arc::new(std::fs::File::create("./vitrina.log")?);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    info!("logging initialized");
    Ok(())
}
