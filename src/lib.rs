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


//! Umii video-download client core.
//!
//! The service layer of the Umii video downloader: fetch metadata for a
//! social-media video URL from the backend, then build the link the user
//! follows for the actual file download. Where the client runs decides the
//! backend address and whether an unreachable backend is an error
//! (deployments) or grounds for demo placeholder data (local development).
//!
//! # Example
//! ```rust,no_run
//! use umii_client::{ClientConfig, Environment, UmiiClient};
//!
//! # async fn example() -> umii_client::Result<()> {
//! let client = UmiiClient::new(ClientConfig::for_environment(Environment::Local))?;
//! let info = client.fetch_video_info("https://www.youtube.com/watch?v=dQw4w9WgXcQ").await?;
//! println!("{} -> {}", info.title, client.download_link(&info));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;

pub use api::client::UmiiClient;
pub use api::models::{ApiHealth, VideoMetadata};
pub use config::{ClientConfig, ClientConfigBuilder, Environment};
pub use error::{Result, UmiiError};
