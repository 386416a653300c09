use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

/// Initialize the logging system
pub fn init() -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(); // RUST_LOG env var takes precedence

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr) // Use stderr for logs, stdout for CLI output
        .with_ansi(true)
        .with_target(false) // Simpler output for console
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();

    tracing::info!("Logging initialized");
    Ok(())
}
