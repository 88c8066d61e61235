// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the Remora client
//!
//! One error enum covers the whole request lifecycle: transport failures,
//! status-routed failures, interceptor aborts and rejections. Context (URL,
//! status, response body) rides along on the variant so failure hooks and
//! callers never have to re-fetch it.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for Remora operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Remora client
#[derive(Error, Debug)]
pub enum Error {
    /// Network-level failure surfaced by the transport (timeout, DNS,
    /// connection refused)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A completed exchange routed to the failure path by its status code
    #[error("HTTP status {status} for {url}")]
    Status {
        status: StatusCode,
        url: String,
        body: serde_json::Value,
    },

    /// The request stage declined to dispatch the call
    #[error("request aborted before dispatch: {reason}")]
    Aborted { reason: String },

    /// A response-stage interceptor rejected the exchange with an
    /// application value
    #[error("rejected by interceptor: {0}")]
    Rejected(serde_json::Value),

    /// JSON (de)serialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an abort error for a declined dispatch
    pub fn aborted(reason: impl Into<String>) -> Self {
        Error::Aborted {
            reason: reason.into(),
        }
    }

    /// Create a rejection carrying an application value
    pub fn rejected(value: serde_json::Value) -> Self {
        Error::Rejected(value)
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this is a transport-level failure
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Check if this is a timeout surfaced by the transport
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }

    /// Check if the request stage aborted the call
    pub fn is_abort(&self) -> bool {
        matches!(self, Error::Aborted { .. })
    }

    /// Check if a response interceptor rejected the exchange
    pub fn is_rejection(&self) -> bool {
        matches!(self, Error::Rejected(_))
    }

    /// Check if a completed exchange was routed here by its status
    pub fn is_status(&self) -> bool {
        matches!(self, Error::Status { .. })
    }

    /// Get the HTTP status code if this failure carries one
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Get the target URL if this failure carries one
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Status { url, .. } => Some(url),
            Error::Transport(e) => e.url().map(|u| u.as_str()),
            _ => None,
        }
    }

    /// Get the rejection value if an interceptor produced one
    pub fn rejection_value(&self) -> Option<&serde_json::Value> {
        match self {
            Error::Rejected(value) => Some(value),
            Error::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}
