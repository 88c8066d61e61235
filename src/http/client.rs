// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Intercepting HTTP client
//!
//! Orchestrates the request lifecycle: build a descriptor from config plus
//! per-call overrides, run the request stage, dispatch through the
//! transport, then run the response stage on whatever came back. Absolute
//! URLs bypass both stages and the base-URL prefix.

use std::sync::Arc;

use parking_lot::RwLock;
use reqwest::Method;
use serde_json::Value;

use super::config::{ClientConfig, RequestOverrides};
use super::request::RequestDescriptor;
use super::response::{ErrorDescriptor, ResponseDescriptor};
use crate::error::{Error, Result};
use crate::interceptor::{
    RequestAction, RequestInterceptor, RequestStage, ResponseInterceptor, ResponseStage,
};
use crate::transport::{HttpTransport, Transport};

/// HTTP client with two-stage interception
///
/// Create once, register interceptors, then reuse for every call. Clones
/// share the transport and the interceptor stages, so a clone handed to
/// another task sees the same hooks.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
    request_stage: Arc<RwLock<RequestStage>>,
    response_stage: Arc<RwLock<ResponseStage>>,
}

impl Client {
    /// Create a client over the default reqwest transport
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new()?);
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client over a custom transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            config,
            request_stage: Arc::new(RwLock::new(RequestStage::new())),
            response_stage: Arc::new(RwLock::new(ResponseStage::new())),
        }
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Register the request-stage interceptor, replacing any previous one
    pub fn on_request<I: RequestInterceptor + 'static>(&self, interceptor: I) {
        self.request_stage.write().install(interceptor);
    }

    /// Register the response-stage interceptor, replacing any previous one
    pub fn on_response<I: ResponseInterceptor + 'static>(&self, interceptor: I) {
        self.response_stage.write().install(interceptor);
    }

    /// Restore the request stage to identity behavior
    pub fn clear_request_interceptors(&self) {
        self.request_stage.write().clear();
    }

    /// Restore the response stage to passthrough behavior
    pub fn clear_response_interceptors(&self) {
        self.response_stage.write().clear();
    }

    /// Dispatch a request through the interceptor lifecycle
    ///
    /// Relative URLs are resolved against the configured base URL by plain
    /// concatenation. Absolute URLs (scheme prefix at the start of the
    /// string) skip both interceptor stages and the base prefix; the
    /// status policy still applies to them.
    pub async fn request(
        &self,
        url: &str,
        data: Option<Value>,
        overrides: RequestOverrides,
    ) -> Result<Value> {
        let mut descriptor = RequestDescriptor::build(url, data, &self.config, overrides);
        tracing::debug!(method = %descriptor.method, url = %descriptor.url, "Descriptor built");

        if descriptor.is_absolute() {
            tracing::debug!(url = %descriptor.url, "Absolute URL, bypassing interceptors");
            let response = self.exchange(&descriptor).await?;
            if self.config.status_policy.is_failure(response.status) {
                return Err(Error::Status {
                    status: response.status,
                    url: descriptor.url,
                    body: response.body,
                });
            }
            return Ok(response.body);
        }

        // Snapshot the stage so the lock is not held across an await
        let request_stage = self.request_stage.read().clone();
        if let RequestAction::Abort(reason) = request_stage.run(&mut descriptor).await {
            let error = Error::aborted(reason);
            request_stage.notify_error(&descriptor, &error).await;
            tracing::warn!(url = %descriptor.url, %error, "Request aborted by interceptor");
            return Err(error);
        }

        let outcome = self.exchange(&descriptor).await;

        // Read after the exchange: re-registering a response interceptor
        // affects only calls that have not yet reached this stage
        let response_stage = self.response_stage.read().clone();

        match outcome {
            Ok(response) => {
                if self.config.status_policy.is_failure(response.status) {
                    let url = descriptor.target_url(&self.config.base_url);
                    tracing::warn!(%url, status = %response.status, "Status routed to failure path");
                    let failure = ErrorDescriptor::from_status(response, url);
                    Err(response_stage.run_failure(failure).await)
                } else {
                    response_stage.run_success(response).await
                }
            }
            Err(error) => {
                tracing::warn!(url = %descriptor.url, %error, "Transport failure");
                let failure = ErrorDescriptor::from_transport(error, descriptor);
                Err(response_stage.run_failure(failure).await)
            }
        }
    }

    /// Dispatch with the method forced to GET
    pub async fn get(
        &self,
        url: &str,
        data: Option<Value>,
        overrides: RequestOverrides,
    ) -> Result<Value> {
        self.request(url, data, overrides.method(Method::GET)).await
    }

    /// Dispatch with the method forced to POST
    pub async fn post(
        &self,
        url: &str,
        data: Option<Value>,
        overrides: RequestOverrides,
    ) -> Result<Value> {
        self.request(url, data, overrides.method(Method::POST))
            .await
    }

    /// Resolve the URL and hand the descriptor to the transport
    ///
    /// The returned descriptor keeps the caller's unresolved URL so hooks
    /// and failure reports correlate with what the call site wrote.
    async fn exchange(&self, descriptor: &RequestDescriptor) -> Result<ResponseDescriptor> {
        let mut outbound = descriptor.clone();
        outbound.url = descriptor.target_url(&self.config.base_url);

        tracing::debug!(method = %outbound.method, url = %outbound.url, "Dispatching");
        let response = self.transport.send(&outbound).await?;

        Ok(ResponseDescriptor {
            status: response.status,
            request: descriptor.clone(),
            body: response.body,
            headers: response.headers,
            message: response.message,
        })
    }
}
