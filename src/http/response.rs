// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Response and failure descriptors
//!
//! [`ResponseDescriptor`] is what response interceptors see on the success
//! path; [`ErrorDescriptor`] is its counterpart on the failure path. Both
//! carry the originating request so hooks can correlate without extra
//! bookkeeping.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::http::RequestDescriptor;

/// A completed exchange on the success path
#[derive(Debug, Clone)]
pub struct ResponseDescriptor {
    /// Response status code
    pub status: StatusCode,
    /// The request that produced this response (URL still unresolved)
    pub request: RequestDescriptor,
    /// Decoded response body
    pub body: Value,
    /// Response headers
    pub headers: HeaderMap,
    /// Status line reason phrase, when the transport knows one
    pub message: Option<String>,
}

impl ResponseDescriptor {
    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Deserialize the body into a typed value
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.body.clone()).map_err(Error::from)
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A failed exchange, as seen by failure hooks
///
/// Covers both shapes of failure: a completed exchange routed here by the
/// status policy (status and body present) and a transport-level failure
/// that never produced a response (status and body absent).
#[derive(Debug)]
pub struct ErrorDescriptor {
    /// The underlying error
    pub cause: Error,
    /// Status code, when the exchange completed
    pub status: Option<StatusCode>,
    /// The request that failed
    pub request: RequestDescriptor,
    /// Decoded response body, when the exchange completed
    pub body: Option<Value>,
    /// Response headers, empty for transport failures
    pub headers: HeaderMap,
    /// Human-readable failure summary
    pub message: Option<String>,
}

impl ErrorDescriptor {
    /// Build a failure descriptor from a completed exchange the status
    /// policy routed to the failure path
    pub fn from_status(response: ResponseDescriptor, url: String) -> Self {
        let cause = Error::Status {
            status: response.status,
            url,
            body: response.body.clone(),
        };
        Self {
            cause,
            status: Some(response.status),
            request: response.request,
            body: Some(response.body),
            headers: response.headers,
            message: response.message,
        }
    }

    /// Build a failure descriptor from a transport error
    pub fn from_transport(error: Error, request: RequestDescriptor) -> Self {
        let message = Some(error.to_string());
        Self {
            cause: error,
            status: None,
            request,
            body: None,
            headers: HeaderMap::new(),
            message,
        }
    }

    /// Check whether the exchange completed before failing
    pub fn has_response(&self) -> bool {
        self.status.is_some()
    }
}
