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


//! Client configuration and environment resolution.
//!
//! The backend base address depends on where the client runs: a developer
//! machine talks to a locally started backend on a fixed port, while a
//! deployment uses a relative path that the hosting platform routes to the
//! backend. The resolved environment is captured in an immutable
//! [`ClientConfig`] at construction time and never re-evaluated.

use std::time::Duration;

/// Fixed address of the local development backend
pub const LOCAL_API_BASE: &str = "http://localhost:8000/api";

/// Relative base path routed to the backend by the hosting platform
pub const DEPLOYED_API_BASE: &str = "/api";

/// Client-side request timeout.
///
/// Server-side extraction can be slow, so this is generous; past it the
/// user needs feedback more than a result.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Artificial delay before placeholder data is returned in Local mode, so
/// an offline backend doesn't answer with a jarring instant "result".
pub const FALLBACK_DELAY: Duration = Duration::from_millis(1500);

/// Where the client is running, resolved once from a host identity.
///
/// Only `Local` is ever allowed to substitute demo data for an unreachable
/// backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Developer machine, backend expected at [`LOCAL_API_BASE`]
    Local,
    /// Hosted deployment, backend behind [`DEPLOYED_API_BASE`]
    Deployed,
}

impl Environment {
    /// Classify a host identity.
    ///
    /// The loopback name and loopback literals mean a developer machine;
    /// everything else is treated as a deployment.
    pub fn from_host(host: &str) -> Self {
        match host {
            "localhost" | "127.0.0.1" | "::1" => Self::Local,
            _ => Self::Deployed,
        }
    }

    /// Base address all requests are issued against in this environment
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::Local => LOCAL_API_BASE,
            Self::Deployed => DEPLOYED_API_BASE,
        }
    }
}

/// Immutable configuration captured by the client at construction time
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub environment: Environment,
    pub base_url: String,
    pub timeout: Duration,
    pub fallback_delay: Duration,
}

impl ClientConfig {
    /// Configuration with the given environment's default base address
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            base_url: environment.default_base_url().to_string(),
            timeout: REQUEST_TIMEOUT,
            fallback_delay: FALLBACK_DELAY,
        }
    }

    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }
}

impl Default for ClientConfig {
    /// Deployed is the default: it never fabricates data when the backend
    /// is down.
    fn default() -> Self {
        Self::for_environment(Environment::Deployed)
    }
}

/// Builder for ClientConfig
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    /// Select the environment and its default base URL.
    ///
    /// Call [`base_url`](Self::base_url) afterwards to point the client
    /// somewhere other than the environment default.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.config.environment = environment;
        self.config.base_url = environment.default_base_url().to_string();
        self
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn fallback_delay(mut self, fallback_delay: Duration) -> Self {
        self.config.fallback_delay = fallback_delay;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}

// ===== TESTS =====
