//! Boot — logging init, config load, classifier construction.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::classify::Classifier;
use crate::conf::CleanseConfig;

/// Initialise the tracing / logging subsystem.
///
/// Diagnostics go to stderr; stdout carries only output records.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cleanse=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load config, validate it, and compile the classifier.
pub fn boot() -> Result<Classifier, Box<dyn std::error::Error>> {
    info!("Starting AP log cleanser v0.0.1");

    let config = CleanseConfig::load()?;
    config.validate()?;
    info!(
        "Permitted user-IP prefixes: {:?}",
        config.permitted_ip_prefixes
    );

    let classifier = Classifier::new(&config)?;
    info!("Compiled event patterns");

    Ok(classifier)
}
