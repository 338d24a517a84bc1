//! Doc Factory - Factory Method walkthrough
//!
//! Creates Word, PDF and Excel document stand-ins through their factories and
//! prints what each operation would do.

mod app;
mod core;
mod factory;
mod formats;

use anyhow::Result;
use app::DemoApp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::config::AppConfig;

fn main() -> Result<()> {
    // Initialize logging on stderr so it stays out of the demo output
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting Doc Factory...");

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Using default config: {:#}", e);
        AppConfig::default()
    });

    let app = DemoApp::new(config);
    let stdout = std::io::stdout();
    app.run(&mut stdout.lock())?;

    Ok(())
}
