use std::path::Path;

use anyhow::Result;
use chrono::Local;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use adpulse_common::Config;
use adpulse_extractor::export::{export_path, write_csv};
use adpulse_extractor::fetch::collect_ads;
use graph_client::GraphClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("adpulse_extractor=info".parse()?),
        )
        .init();

    info!("AdPulse extractor starting...");

    // Load config
    let config = Config::from_env();
    config.log_redacted();

    let client = GraphClient::new(
        config.access_token.clone(),
        config.app_id.clone(),
        config.app_secret.clone(),
    );

    // An invalid token is fatal to the whole run: no fetches, no partial export.
    match client.validate_token().await {
        Ok(true) => info!("Access token is valid"),
        Ok(false) => {
            error!("Access token is invalid or expired; update the token and try again");
            return Ok(());
        }
        Err(e) => {
            error!(error = %e, "Token validation failed");
            return Ok(());
        }
    }

    let records = collect_ads(&client, &config.account_ids).await;

    // Absence of output is the error signal: no file is written for an
    // empty aggregate.
    if records.is_empty() {
        warn!("No WhatsApp ads retrieved; check account settings and try again");
        return Ok(());
    }

    let path = export_path(Path::new(&config.output_dir), Local::now());
    let file = std::fs::File::create(&path)?;
    let written = write_csv(&records, file)?;
    info!(path = %path.display(), rows = written, "CSV export complete");

    Ok(())
}
