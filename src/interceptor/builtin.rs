// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Ready-made interceptors
//!
//! Covers the common cases: injecting an Authorization value, logging the
//! lifecycle, and unwrapping `{ code, data, msg }` response envelopes.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::http::{ErrorDescriptor, RequestDescriptor, ResponseDescriptor};
use crate::interceptor::{RequestAction, RequestInterceptor, ResponseInterceptor};

/// Fills the descriptor's Authorization value before dispatch
///
/// Only fills when the descriptor carries none, so per-call overrides win.
pub struct AuthInjector {
    value: String,
}

impl AuthInjector {
    /// Inject a bearer token
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            value: format!("Bearer {}", token.into()),
        }
    }

    /// Inject a raw Authorization value
    pub fn raw(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

#[async_trait]
impl RequestInterceptor for AuthInjector {
    async fn before_send(&self, request: &mut RequestDescriptor) -> RequestAction {
        if request.authorization.is_empty() {
            request.authorization = self.value.clone();
        }
        RequestAction::Continue
    }
}

/// Logs the request lifecycle via `tracing`
pub struct RequestLogger {
    /// Log request and response bodies at debug level
    pub log_bodies: bool,
}

impl Default for RequestLogger {
    fn default() -> Self {
        Self { log_bodies: false }
    }
}

impl RequestLogger {
    /// Create a logger that skips bodies
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable body logging
    pub fn with_bodies(mut self) -> Self {
        self.log_bodies = true;
        self
    }
}

#[async_trait]
impl RequestInterceptor for RequestLogger {
    async fn before_send(&self, request: &mut RequestDescriptor) -> RequestAction {
        tracing::info!(
            method = %request.method,
            url = %request.url,
            "Request"
        );

        if self.log_bodies {
            if let Some(ref data) = request.data {
                tracing::debug!(body = %data, "Request body");
            }
        }

        RequestAction::Continue
    }
}

#[async_trait]
impl ResponseInterceptor for RequestLogger {
    async fn on_response(&self, response: ResponseDescriptor) -> Result<Value> {
        tracing::info!(
            url = %response.request.url,
            status = %response.status,
            "Response"
        );

        if self.log_bodies {
            tracing::debug!(body = %response.body, "Response body");
        }

        Ok(response.body)
    }

    async fn on_failure(&self, failure: ErrorDescriptor) -> Error {
        tracing::warn!(
            url = %failure.request.url,
            status = ?failure.status,
            error = %failure.cause,
            "Request failed"
        );
        failure.cause
    }
}

/// Unwraps `{ code, data, msg }` response envelopes
///
/// The common API convention: HTTP 200 with a matching application code
/// fulfils with the envelope's `data`; any other code, status, or an
/// unparseable body rejects with the whole envelope so callers can inspect
/// it.
pub struct EnvelopeInterceptor {
    success_code: i64,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    msg: Option<String>,
}

impl EnvelopeInterceptor {
    /// Create an unwrapper for the given success code
    pub fn new(success_code: i64) -> Self {
        Self { success_code }
    }
}

#[async_trait]
impl ResponseInterceptor for EnvelopeInterceptor {
    async fn on_response(&self, response: ResponseDescriptor) -> Result<Value> {
        if response.status != StatusCode::OK {
            if response.status == StatusCode::UNAUTHORIZED {
                tracing::warn!(url = %response.request.url, "no permission for endpoint");
            }
            return Err(Error::rejected(response.body));
        }

        match serde_json::from_value::<Envelope>(response.body.clone()) {
            Ok(envelope) if envelope.code == Some(self.success_code) => Ok(envelope.data),
            Ok(envelope) => {
                tracing::warn!(
                    url = %response.request.url,
                    code = ?envelope.code,
                    msg = envelope.msg.as_deref().unwrap_or(""),
                    "application code signals failure"
                );
                Err(Error::rejected(response.body))
            }
            Err(_) => Err(Error::rejected(response.body)),
        }
    }

    async fn on_failure(&self, failure: ErrorDescriptor) -> Error {
        if failure.status == Some(StatusCode::NOT_FOUND) {
            tracing::warn!(url = %failure.request.url, "endpoint does not exist");
        }
        failure.cause
    }
}
