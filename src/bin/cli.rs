// Umii Video Downloader - Rust client core
// Copyright (C) 2025 Umii contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use umii_client::{ClientConfig, Environment, UmiiClient};

#[derive(Parser)]
#[command(name = "umii-cli")]
#[command(about = "Umii CLI - fetch video metadata and download links", long_about = None)]
struct Cli {
    /// Backend base URL (defaults to the local development backend)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch metadata for a video URL and print the download link
    Info {
        /// The video page URL to look up
        url: String,
    },
    /// Check that the backend is alive
    Status,
}

/// Classify the environment from the target base URL's host, so pointing
/// the CLI at a deployment disables the demo-data fallback.
fn build_client(base_url: Option<String>) -> anyhow::Result<UmiiClient> {
    let config = match base_url {
        Some(base) => {
            let host = url::Url::parse(&base)
                .ok()
                .and_then(|u| u.host_str().map(str::to_string))
                .unwrap_or_default();
            ClientConfig::builder()
                .environment(Environment::from_host(&host))
                .base_url(base)
                .build()
        }
        None => ClientConfig::for_environment(Environment::Local),
    };
    Ok(UmiiClient::new(config)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let client = build_client(cli.base_url)?;

    match cli.command {
        Commands::Info { url } => {
            let url = url.trim();
            anyhow::ensure!(!url.is_empty(), "video URL must not be empty");

            let info = client
                .fetch_video_info(url)
                .await
                .context("fetching video info")?;

            println!("Title:     {}", info.title);
            println!("Platform:  {}", info.platform);
            println!("Duration:  {}s", info.duration_seconds);
            println!("Thumbnail: {}", info.thumbnail);
            if info.is_placeholder {
                println!("(backend offline - showing demo data)");
            }
            println!("Download:  {}", client.download_link(&info));
        }
        Commands::Status => {
            let health = client.health().await.context("checking backend status")?;
            println!("{}: {}", health.status, health.message);
        }
    }

    Ok(())
}
