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


//! HTTP client for the Umii backend.
//!
//! One fetch is one request: no retries, no caching, no cancellation
//! beyond dropping the future. Failures are classified by what the
//! transport observed (see [`crate::error::UmiiError`]), with a single
//! sanctioned substitution: in Local mode an unreachable backend yields
//! demo placeholder data instead of an error, so the rest of the flow can
//! be exercised without a running backend. In Deployed mode the same
//! condition is surfaced as [`UmiiError::NetworkUnreachable`] so routing
//! problems stay visible.

use crate::api::models::{ApiErrorBody, ApiHealth, VideoMetadata};
use crate::config::{ClientConfig, Environment};
use crate::error::{Result, UmiiError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Response, StatusCode};
use tokio::time::sleep;
use tracing::{debug, warn};
use url::form_urlencoded;

/// Shown for a 504: extraction ran past the gateway's patience
pub const GATEWAY_TIMEOUT_MESSAGE: &str =
    "The server took too long to process this video. Please try again later.";

/// Shown for a 403 when the backend gives no detail of its own
pub const ACCESS_DENIED_MESSAGE: &str =
    "Access to this video was denied. It may be private, or the platform blocked the request.";

/// Shown when request construction itself failed with no further detail
pub const REQUEST_SETUP_MESSAGE: &str = "Error setting up request";

/// Client for the Umii backend API.
///
/// Holds the resolved [`ClientConfig`]; the environment and base address
/// are fixed for the client's lifetime. Cloning the inner `reqwest::Client`
/// is cheap, so concurrent calls on a shared instance are independent
/// operations racing over read-only state.
#[derive(Debug)]
pub struct UmiiClient {
    client: Client,
    config: ClientConfig,
}

impl UmiiClient {
    /// Create a client from an explicit configuration.
    ///
    /// # Errors
    /// Returns [`UmiiError::RequestSetup`] if the HTTP client cannot be
    /// built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| UmiiError::setup(format!("{REQUEST_SETUP_MESSAGE}: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn environment(&self) -> Environment {
        self.config.environment
    }

    /// Fetch metadata for a video page URL.
    ///
    /// `raw_url` is forwarded to the backend as-is; trimming and basic
    /// sanity checks are the caller's responsibility.
    ///
    /// # Errors
    /// Exactly one of [`UmiiError::ServerError`],
    /// [`UmiiError::NetworkUnreachable`], [`UmiiError::RequestSetup`] or
    /// [`UmiiError::InvalidResponse`] per failed call. In Local mode an
    /// unreachable backend resolves to placeholder data after the
    /// configured fallback delay instead of failing.
    pub async fn fetch_video_info(&self, raw_url: &str) -> Result<VideoMetadata> {
        let endpoint = format!("{}/info", self.config.base_url);
        debug!(url = raw_url, "fetching video info");

        let sent = self
            .client
            .get(&endpoint)
            .query(&[("url", raw_url)])
            .send()
            .await;

        match sent {
            Ok(response) if response.status().is_success() => parse_body(response).await,
            Ok(response) => {
                let err = server_error(response).await;
                warn!(error = %err, "backend rejected the request");
                Err(err)
            }
            Err(err) if err.is_builder() => Err(setup_error(&err)),
            Err(err) => match self.config.environment {
                Environment::Local => {
                    warn!(error = %err, "backend unavailable, falling back to demo data");
                    sleep(self.config.fallback_delay).await;
                    Ok(VideoMetadata::demo_placeholder(raw_url))
                }
                Environment::Deployed => Err(UmiiError::unreachable(err.to_string())),
            },
        }
    }

    /// Check backend liveness via `GET {base}`.
    ///
    /// A health probe is a diagnostic, so a dead backend is always an
    /// error here; there is no demo fallback in any environment.
    pub async fn health(&self) -> Result<ApiHealth> {
        let sent = self.client.get(&self.config.base_url).send().await;

        match sent {
            Ok(response) if response.status().is_success() => parse_body(response).await,
            Ok(response) => Err(server_error(response).await),
            Err(err) if err.is_builder() => Err(setup_error(&err)),
            Err(err) => Err(UmiiError::unreachable(err.to_string())),
        }
    }

    /// Build the URL the user should be directed to for the file download.
    ///
    /// Placeholder metadata already points at a directly fetchable sample
    /// asset, so it is returned verbatim. Real metadata goes through the
    /// backend's download proxy, which sets attachment headers and shields
    /// the browser from the raw asset URL.
    ///
    /// Total and idempotent: the same metadata always yields a
    /// byte-identical string.
    pub fn download_link(&self, info: &VideoMetadata) -> String {
        if info.is_placeholder {
            return info.download_url.clone();
        }

        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("url", &info.download_url)
            .append_pair("title", &info.title)
            .append_pair("ext", &info.ext)
            .finish();
        format!("{}/download?{}", self.config.base_url, query)
    }
}

/// Read and parse a 2xx body, keeping the text around for the error message
/// when it doesn't decode.
async fn parse_body<T>(response: Response) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let body = response
        .text()
        .await
        .map_err(|e| UmiiError::invalid_response(format!("failed to read response body: {e}")))?;

    serde_json::from_str(&body)
        .map_err(|e| UmiiError::invalid_response(format!("{e} in body: {body:.200}")))
}

/// Map a non-2xx response to a user-facing ServerError, preferring the
/// backend's own `detail` string where the status allows one.
async fn server_error(response: Response) -> UmiiError {
    let status = response.status();
    let detail = response
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail);
    classify_status(status, detail)
}

fn classify_status(status: StatusCode, detail: Option<String>) -> UmiiError {
    let message = match status {
        StatusCode::GATEWAY_TIMEOUT => GATEWAY_TIMEOUT_MESSAGE.to_string(),
        StatusCode::FORBIDDEN => detail.unwrap_or_else(|| ACCESS_DENIED_MESSAGE.to_string()),
        _ => detail
            .unwrap_or_else(|| format!("Server returned an error (status {})", status.as_u16())),
    };
    UmiiError::server(status.as_u16(), message)
}

fn setup_error(err: &reqwest::Error) -> UmiiError {
    let message = err.to_string();
    if message.is_empty() {
        UmiiError::setup(REQUEST_SETUP_MESSAGE)
    } else {
        UmiiError::setup(message)
    }
}

// ===== TESTS =====

#[cfg(test)]
mod tests {
    use super::*;

    fn local_client() -> UmiiClient {
        UmiiClient::new(ClientConfig::for_environment(Environment::Local)).unwrap()
    }

    #[test]
    fn test_classify_504_uses_timeout_message() {
        let err = classify_status(StatusCode::GATEWAY_TIMEOUT, None);
        assert_eq!(err.status_code(), Some(504));
        assert_eq!(err.to_string(), GATEWAY_TIMEOUT_MESSAGE);
    }

    #[test]
    fn test_classify_403_prefers_server_detail() {
        let err = classify_status(StatusCode::FORBIDDEN, Some("blocked".to_string()));
        assert_eq!(err.status_code(), Some(403));
        assert_eq!(err.to_string(), "blocked");
    }

    #[test]
    fn test_classify_403_without_detail_uses_fixed_message() {
        let err = classify_status(StatusCode::FORBIDDEN, None);
        assert_eq!(err.to_string(), ACCESS_DENIED_MESSAGE);
    }

    #[test]
    fn test_classify_other_status_embeds_code() {
        let err = classify_status(StatusCode::IM_A_TEAPOT, None);
        assert_eq!(err.to_string(), "Server returned an error (status 418)");
    }

    #[test]
    fn test_classify_other_status_prefers_detail() {
        let err = classify_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            Some("Server Error: boom".to_string()),
        );
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.to_string(), "Server Error: boom");
    }

    #[test]
    fn test_download_link_placeholder_returned_verbatim() {
        let client = local_client();
        let info = VideoMetadata::demo_placeholder("https://example.com/v/1");

        let link = client.download_link(&info);
        assert_eq!(link, info.download_url);
        assert!(!link.contains('?'));
    }

    #[test]
    fn test_download_link_goes_through_proxy() {
        let client = local_client();
        let info = VideoMetadata {
            id: "abc".to_string(),
            title: "My Video & More".to_string(),
            thumbnail: "https://example.com/t.jpg".to_string(),
            duration_seconds: 10,
            platform: "YouTube".to_string(),
            download_url: "https://cdn.example.com/v.mp4?sig=a+b".to_string(),
            ext: "mp4".to_string(),
            is_placeholder: false,
        };

        let link = client.download_link(&info);
        assert_eq!(
            link,
            "http://localhost:8000/api/download?\
             url=https%3A%2F%2Fcdn.example.com%2Fv.mp4%3Fsig%3Da%2Bb\
             &title=My+Video+%26+More\
             &ext=mp4"
        );
    }

    #[test]
    fn test_download_link_idempotent() {
        let client = local_client();
        let info = VideoMetadata {
            id: "abc".to_string(),
            title: "t".to_string(),
            thumbnail: String::new(),
            duration_seconds: 0,
            platform: "YouTube".to_string(),
            download_url: "https://cdn.example.com/v.mp4".to_string(),
            ext: "mp4".to_string(),
            is_placeholder: false,
        };

        assert_eq!(client.download_link(&info), client.download_link(&info));
    }

    #[test]
    fn test_client_exposes_config() {
        let client = local_client();
        assert_eq!(client.environment(), Environment::Local);
        assert_eq!(client.base_url(), "http://localhost:8000/api");
    }
}
