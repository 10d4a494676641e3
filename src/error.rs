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


//! Error types for the Umii client core.
//!
//! A fetch fails in exactly one of a closed set of ways, so callers can
//! match exhaustively instead of string-probing a generic error. The split
//! follows what the transport actually observed: the backend answered with
//! a failure, the backend never answered, or the request never went out.

use thiserror::Error;

/// Result type alias using our UmiiError type
pub type Result<T> = std::result::Result<T, UmiiError>;

/// Main error type for the Umii client
#[derive(Error, Debug)]
pub enum UmiiError {
    /// The backend was reachable and answered with a non-2xx status.
    ///
    /// `message` is already user-facing: the server-supplied `detail` when
    /// one was present, otherwise a fixed message for the status class.
    /// This never triggers the demo-data fallback.
    #[error("{message}")]
    ServerError {
        message: String,
        /// HTTP status the backend answered with
        status: u16,
    },

    /// The request went out but no response ever arrived (connection or DNS
    /// failure, timeout expiry). Raised only in Deployed mode; Local mode
    /// substitutes placeholder data instead of failing.
    #[error("Network unreachable: {message}")]
    NetworkUnreachable { message: String },

    /// The request could not even be constructed and sent.
    #[error("{message}")]
    RequestSetup { message: String },

    /// The backend returned 2xx but the body was not valid metadata JSON.
    #[error("Invalid API response: {message}")]
    InvalidResponse { message: String },
}

// Helper methods for creating common errors
impl UmiiError {
    /// Create a ServerError from a status code and user-facing message
    pub fn server<S: Into<String>>(status: u16, message: S) -> Self {
        UmiiError::ServerError {
            message: message.into(),
            status,
        }
    }

    /// Create a NetworkUnreachable error
    pub fn unreachable<S: Into<String>>(message: S) -> Self {
        UmiiError::NetworkUnreachable {
            message: message.into(),
        }
    }

    /// Create a RequestSetup error
    pub fn setup<S: Into<String>>(message: S) -> Self {
        UmiiError::RequestSetup {
            message: message.into(),
        }
    }

    /// Create an InvalidResponse error
    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        UmiiError::InvalidResponse {
            message: message.into(),
        }
    }

    /// HTTP status code, for server-responded errors only
    pub fn status_code(&self) -> Option<u16> {
        match self {
            UmiiError::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the backend answered with a failure status
    pub fn is_server_error(&self) -> bool {
        matches!(self, UmiiError::ServerError { .. })
    }

    /// Check if the backend could not be reached at all
    pub fn is_network_unreachable(&self) -> bool {
        matches!(self, UmiiError::NetworkUnreachable { .. })
    }
}
