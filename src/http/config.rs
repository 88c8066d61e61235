// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Client configuration and per-request overrides

use std::time::Duration;

use reqwest::{Method, StatusCode};

use crate::http::{DEFAULT_CONTENT_TYPE, DEFAULT_TIMEOUT};

/// Client configuration
///
/// Defaults applied to every request the client dispatches. Individual
/// calls can override the per-request fields through [`RequestOverrides`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Prefix prepended to relative request URLs
    pub base_url: String,
    /// Default timeout for requests
    pub timeout: Duration,
    /// Default HTTP method
    pub method: Method,
    /// How request and response bodies are encoded
    pub data_type: DataType,
    /// Default Content-Type header value
    pub content_type: String,
    /// Default Authorization header value (empty = header omitted)
    pub authorization: String,
    /// Which status codes route a completed exchange to the failure path
    pub status_policy: StatusPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: DEFAULT_TIMEOUT,
            method: Method::GET,
            data_type: DataType::Json,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            authorization: String::new(),
            status_policy: StatusPolicy::NotFound,
        }
    }
}

impl ClientConfig {
    /// Create a new client config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set default timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set default HTTP method
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set body encoding
    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    /// Set default Content-Type header
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Set default Authorization header
    pub fn authorization(mut self, authorization: impl Into<String>) -> Self {
        self.authorization = authorization.into();
        self
    }

    /// Set status routing policy
    pub fn status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }
}

/// Per-request overrides
///
/// Every field is optional; `None` means "use the client default".
#[derive(Debug, Clone, Default)]
pub struct RequestOverrides {
    /// Override the HTTP method
    pub method: Option<Method>,
    /// Override the timeout
    pub timeout: Option<Duration>,
    /// Override the body encoding
    pub data_type: Option<DataType>,
    /// Override the Content-Type header
    pub content_type: Option<String>,
    /// Override the Authorization header
    pub authorization: Option<String>,
}

impl RequestOverrides {
    /// Create empty overrides (all client defaults apply)
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the HTTP method
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Override the timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the body encoding
    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    /// Override the Content-Type header
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Override the Authorization header
    pub fn authorization(mut self, authorization: impl Into<String>) -> Self {
        self.authorization = Some(authorization.into());
        self
    }
}

/// Body encoding for requests and responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataType {
    /// JSON-encode request data, parse response bodies as JSON
    #[default]
    Json,
    /// Send request data as raw text, keep response bodies as text
    Text,
}

/// Which completed exchanges count as failures
///
/// Transport errors always fail; this policy only classifies exchanges
/// that produced a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Only 404 routes to the failure path
    #[default]
    NotFound,
    /// Any non-2xx status routes to the failure path
    NonSuccess,
    /// Every completed exchange takes the success path
    Never,
}

impl StatusPolicy {
    /// Check whether a status code routes to the failure path
    pub fn is_failure(self, status: StatusCode) -> bool {
        match self {
            StatusPolicy::NotFound => status == StatusCode::NOT_FOUND,
            StatusPolicy::NonSuccess => !status.is_success(),
            StatusPolicy::Never => false,
        }
    }
}
