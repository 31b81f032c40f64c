mod ai;
mod app;
mod config;
mod domain;
mod infrastructure;
mod pipeline;
mod text;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use infrastructure::{directories, logging};
use tokio::io::AsyncReadExt;

/// Classify one stored email and reply to its sender.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Trigger event JSON. Read from stdin when omitted.
    #[arg(long, env = "SPAM_REPLY_EVENT")]
    event: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = config::load_config()?;
    let paths = directories::ensure_directories(&config)?;
    logging::init_tracing(&config, &paths)?;

    let raw_event = match &cli.event {
        Some(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read event file {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            tokio::io::stdin().read_to_end(&mut buf).await?;
            buf
        }
    };

    let app = app::SpamReplyApp::initialize(config, paths)?;
    let ack = match app.handle(&raw_event).await {
        Ok(ack) => ack,
        Err(err) => {
            tracing::error!(error = ?err, "invocation aborted");
            return Err(err);
        }
    };

    println!("{}", serde_json::to_string(&ack)?);
    Ok(())
}
