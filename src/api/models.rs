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


//! Wire models for the Umii backend API.
//!
//! The backend speaks snake_case JSON; field names here match the wire
//! except `duration`, which is renamed to make the unit explicit.

use serde::{Deserialize, Serialize};

/// Platform label that marks synthesized results
pub const DEMO_PLATFORM: &str = "Demo Mode";

// Demo-sample constants for placeholder metadata: a known public sample
// video, reachable without the backend.
const DEMO_ID: &str = "demo-video-1";
const DEMO_THUMBNAIL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/c/c5/Big_buck_bunny_poster_big.jpg/800px-Big_buck_bunny_poster_big.jpg";
const DEMO_DURATION_SECONDS: u64 = 596;
const DEMO_DOWNLOAD_URL: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";
const DEMO_EXT: &str = "mp4";

/// Longest prefix of the requested URL echoed into the demo title
const DEMO_TITLE_URL_CHARS: usize = 30;

/// Metadata for one resolved video, as returned by `GET {base}/info`.
///
/// Created fresh per fetch and immutable afterwards. `is_placeholder` is
/// never sent by the real backend, so deserialized values always carry
/// `false`; only [`VideoMetadata::demo_placeholder`] sets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub id: String,
    pub title: String,
    pub thumbnail: String,

    /// Wire field `duration`, in whole seconds
    #[serde(rename = "duration")]
    pub duration_seconds: u64,

    /// Label naming the source platform (extractor key on the backend)
    pub platform: String,

    /// Resolved media asset URL
    pub download_url: String,

    /// Lowercase file extension, e.g. "mp4"
    pub ext: String,

    #[serde(default)]
    pub is_placeholder: bool,
}

impl VideoMetadata {
    /// Synthesize demo metadata for an unreachable local backend.
    ///
    /// The download URL points at a fixed, publicly reachable sample asset,
    /// so the rest of the flow keeps working without backend support.
    pub fn demo_placeholder(requested_url: &str) -> Self {
        Self {
            id: DEMO_ID.to_string(),
            title: demo_title(requested_url),
            thumbnail: DEMO_THUMBNAIL.to_string(),
            duration_seconds: DEMO_DURATION_SECONDS,
            platform: DEMO_PLATFORM.to_string(),
            download_url: DEMO_DOWNLOAD_URL.to_string(),
            ext: DEMO_EXT.to_string(),
            is_placeholder: true,
        }
    }
}

/// `DEMO RESULT: <url>` with the URL cut at 30 characters and an ellipsis
/// marker appended only when something was cut. Counts characters, not
/// bytes, so multi-byte URLs can't split a code point.
fn demo_title(requested_url: &str) -> String {
    let prefix: String = requested_url.chars().take(DEMO_TITLE_URL_CHARS).collect();
    let marker = if requested_url.chars().count() > DEMO_TITLE_URL_CHARS {
        "..."
    } else {
        ""
    };
    format!("DEMO RESULT: {prefix}{marker}")
}

/// Error payload the backend attaches to non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Liveness payload from `GET {base}`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiHealth {
    pub status: String,
    pub message: String,
}

// ===== TESTS =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_deserializes_from_wire_names() {
        let body = r#"{
            "id": "abc123",
            "title": "Test Video",
            "thumbnail": "https://example.com/t.jpg",
            "duration": 42,
            "platform": "YouTube",
            "download_url": "https://cdn.example.com/v.mp4",
            "ext": "mp4"
        }"#;

        let info: VideoMetadata = serde_json::from_str(body).unwrap();
        assert_eq!(info.id, "abc123");
        assert_eq!(info.title, "Test Video");
        assert_eq!(info.duration_seconds, 42);
        assert_eq!(info.platform, "YouTube");
        assert_eq!(info.download_url, "https://cdn.example.com/v.mp4");
        assert_eq!(info.ext, "mp4");
        // the backend never sends this field
        assert!(!info.is_placeholder);
    }

    #[test]
    fn test_demo_placeholder_fields() {
        let info = VideoMetadata::demo_placeholder("https://example.com/v/1");
        assert_eq!(info.id, "demo-video-1");
        assert_eq!(info.platform, DEMO_PLATFORM);
        assert_eq!(info.ext, "mp4");
        assert_eq!(info.duration_seconds, 596);
        assert!(info.is_placeholder);
        assert!(info.download_url.ends_with("BigBuckBunny.mp4"));
    }

    #[test]
    fn test_demo_title_short_url_kept_whole() {
        let info = VideoMetadata::demo_placeholder("https://yt.be/x");
        assert_eq!(info.title, "DEMO RESULT: https://yt.be/x");
    }

    #[test]
    fn test_demo_title_exactly_thirty_chars_no_marker() {
        let url = "a".repeat(30);
        let info = VideoMetadata::demo_placeholder(&url);
        assert_eq!(info.title, format!("DEMO RESULT: {url}"));
    }

    #[test]
    fn test_demo_title_long_url_truncated_with_marker() {
        let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
        let info = VideoMetadata::demo_placeholder(url);
        let prefix: String = url.chars().take(30).collect();
        assert_eq!(info.title, format!("DEMO RESULT: {prefix}..."));
    }

    #[test]
    fn test_demo_title_multibyte_url_safe() {
        let url = format!("https://example.com/{}", "日本語のビデオタイトル超長い");
        let info = VideoMetadata::demo_placeholder(&url);
        assert!(info.title.starts_with("DEMO RESULT: https://example.com/"));
        assert!(info.title.ends_with("..."));
    }

    #[test]
    fn test_error_body_detail_optional() {
        let with: ApiErrorBody = serde_json::from_str(r#"{"detail": "blocked"}"#).unwrap();
        assert_eq!(with.detail.as_deref(), Some("blocked"));

        let without: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert!(without.detail.is_none());
    }

    #[test]
    fn test_health_payload() {
        let health: ApiHealth = serde_json::from_str(
            r#"{"status": "ok", "message": "Umii Video Downloader Backend is Running"}"#,
        )
        .unwrap();
        assert_eq!(health.status, "ok");
        assert!(health.message.contains("Running"));
    }
}
