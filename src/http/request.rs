// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Outbound request descriptor
//!
//! The descriptor captures everything about a pending call before it is
//! handed to the transport. Request interceptors receive it mutably with
//! the URL still unresolved, so rewrites they make to a relative path
//! happen before the base URL is applied.

use std::time::Duration;

use reqwest::Method;
use serde_json::Value;

use crate::http::{ClientConfig, DataType, RequestOverrides};

/// A fully assembled outbound request
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// Target URL, relative or absolute, as the caller wrote it
    pub url: String,
    /// HTTP method
    pub method: Method,
    /// Request payload, if any
    pub data: Option<Value>,
    /// Timeout for this call
    pub timeout: Duration,
    /// Body encoding
    pub data_type: DataType,
    /// Content-Type header value
    pub content_type: String,
    /// Authorization header value (empty = header omitted)
    pub authorization: String,
}

impl RequestDescriptor {
    /// Assemble a descriptor from client defaults and per-call overrides
    ///
    /// Override fields win where set; everything else comes from the
    /// client configuration.
    pub fn build(
        url: &str,
        data: Option<Value>,
        config: &ClientConfig,
        overrides: RequestOverrides,
    ) -> Self {
        Self {
            url: url.to_string(),
            method: overrides.method.unwrap_or_else(|| config.method.clone()),
            data,
            timeout: overrides.timeout.unwrap_or(config.timeout),
            data_type: overrides.data_type.unwrap_or(config.data_type),
            content_type: overrides
                .content_type
                .unwrap_or_else(|| config.content_type.clone()),
            authorization: overrides
                .authorization
                .unwrap_or_else(|| config.authorization.clone()),
        }
    }

    /// Check whether the URL is absolute (starts with an HTTP scheme)
    ///
    /// Absolute URLs bypass the interceptor stages and are dispatched
    /// without the base URL prefix.
    pub fn is_absolute(&self) -> bool {
        self.url.starts_with("http://") || self.url.starts_with("https://")
    }

    /// Resolve the URL the transport will actually dial
    ///
    /// Relative URLs get the base prepended by plain concatenation; the
    /// base is expected to carry any separating slash.
    pub fn target_url(&self, base_url: &str) -> String {
        if self.is_absolute() {
            self.url.clone()
        } else {
            format!("{}{}", base_url, self.url)
        }
    }
}
