// Main entry point - Wires configuration, series, session and shell together
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::refresh_service::ChartSession;
use crate::infrastructure::config::load_demo_config;
use crate::infrastructure::json_lines::write_from_receiver;
use crate::infrastructure::stdin_toggles::stdin_toggle_source;
use crate::presentation::shell::run_shell;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the render stream
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_demo_config().context("Failed to load configuration")?;

    let generator = config
        .series
        .to_generator()
        .context("Invalid series configuration")?;
    let data = generator.generate()?;
    tracing::info!(
        "Starting chart demo: {} groups, tick_rotation={}, custom_formats={}",
        data.len(),
        config.chart.tick_rotation,
        config.chart.use_custom_formats
    );

    let (mut session, rx) = ChartSession::new(data, config.chart);

    let writer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        write_from_receiver(rx, &mut stdout).await
    });

    let mut source = stdin_toggle_source();
    run_shell(&mut session, &mut source).await?;

    // Closing the session ends the render stream
    drop(session);
    let written = writer.await.context("Render writer task failed")??;
    tracing::debug!("Wrote {} render messages", written);

    Ok(())
}
