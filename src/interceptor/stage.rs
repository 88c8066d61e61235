// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Interceptor stages for the request lifecycle
//!
//! Two stages wrap every dispatched call: the request stage runs before the
//! transport sees the descriptor, the response stage runs after the exchange
//! settles. Each stage is an ordered list of interceptors; the client's
//! registration API keeps at most one active per stage, replacing on
//! re-registration.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::http::{ErrorDescriptor, RequestDescriptor, ResponseDescriptor};

/// Outcome of the request stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestAction {
    /// Dispatch the (possibly modified) request
    Continue,
    /// Settle the call as rejected without dispatching
    Abort(String),
}

/// Hook invoked before a request is dispatched
///
/// The descriptor arrives with its URL still unresolved, so rewrites apply
/// before the base URL is prepended. Returning [`RequestAction::Abort`]
/// settles the call as rejected with [`Error::Aborted`]; there is no way to
/// leave a call pending.
///
/// # Example
///
/// ```rust,no_run
/// use remora::{RequestAction, RequestDescriptor, RequestInterceptor};
/// use async_trait::async_trait;
///
/// struct TokenGate {
///     token: Option<String>,
/// }
///
/// #[async_trait]
/// impl RequestInterceptor for TokenGate {
///     async fn before_send(&self, request: &mut RequestDescriptor) -> RequestAction {
///         match &self.token {
///             Some(token) => {
///                 request.authorization = format!("Bearer {}", token);
///                 RequestAction::Continue
///             }
///             None => RequestAction::Abort("not signed in".to_string()),
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait RequestInterceptor: Send + Sync {
    /// Called before a request is dispatched
    ///
    /// Can modify the descriptor or abort the call entirely.
    async fn before_send(&self, request: &mut RequestDescriptor) -> RequestAction {
        let _ = request;
        RequestAction::Continue
    }

    /// Called when the stage aborts the request
    async fn on_error(&self, request: &RequestDescriptor, error: &Error) {
        // Default: do nothing
        let _ = (request, error);
    }
}

/// Hook invoked after an exchange settles
///
/// `on_response` sees completed exchanges the status policy accepted; its
/// `Ok` value becomes the call's fulfilment value and its `Err` the call's
/// rejection. `on_failure` sees everything else (transport errors and
/// policy-routed statuses) and has final authority over the error the
/// caller receives.
#[async_trait]
pub trait ResponseInterceptor: Send + Sync {
    /// Called with every completed exchange on the success path
    async fn on_response(&self, response: ResponseDescriptor) -> Result<Value> {
        Ok(response.body)
    }

    /// Called with every failure before it reaches the caller
    async fn on_failure(&self, failure: ErrorDescriptor) -> Error {
        failure.cause
    }
}

/// Ordered list of request-stage interceptors
#[derive(Clone)]
pub struct RequestStage {
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl Default for RequestStage {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RequestStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestStage")
            .field("interceptors", &self.interceptors.len())
            .finish()
    }
}

impl RequestStage {
    /// Create an empty stage (identity behavior)
    pub fn new() -> Self {
        Self {
            interceptors: Vec::new(),
        }
    }

    /// Replace the active interceptor
    pub fn install<I: RequestInterceptor + 'static>(&mut self, interceptor: I) {
        self.interceptors = vec![Arc::new(interceptor)];
    }

    /// Append an interceptor, keeping the existing ones
    pub fn push<I: RequestInterceptor + 'static>(&mut self, interceptor: I) {
        self.interceptors.push(Arc::new(interceptor));
    }

    /// Remove all interceptors
    pub fn clear(&mut self) {
        self.interceptors.clear();
    }

    /// Number of installed interceptors
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Check whether the stage is empty
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Run the stage over a descriptor
    ///
    /// Interceptors run in order; the first abort short-circuits the rest.
    pub async fn run(&self, request: &mut RequestDescriptor) -> RequestAction {
        for interceptor in &self.interceptors {
            match interceptor.before_send(request).await {
                RequestAction::Continue => continue,
                action => return action,
            }
        }
        RequestAction::Continue
    }

    /// Notify interceptors that the stage aborted the request
    pub async fn notify_error(&self, request: &RequestDescriptor, error: &Error) {
        for interceptor in &self.interceptors {
            interceptor.on_error(request, error).await;
        }
    }
}

/// Ordered list of response-stage interceptors
#[derive(Clone)]
pub struct ResponseStage {
    interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl Default for ResponseStage {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ResponseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseStage")
            .field("interceptors", &self.interceptors.len())
            .finish()
    }
}

impl ResponseStage {
    /// Create an empty stage (passthrough behavior)
    pub fn new() -> Self {
        Self {
            interceptors: Vec::new(),
        }
    }

    /// Replace the active interceptor
    pub fn install<I: ResponseInterceptor + 'static>(&mut self, interceptor: I) {
        self.interceptors = vec![Arc::new(interceptor)];
    }

    /// Append an interceptor, keeping the existing ones
    pub fn push<I: ResponseInterceptor + 'static>(&mut self, interceptor: I) {
        self.interceptors.push(Arc::new(interceptor));
    }

    /// Remove all interceptors
    pub fn clear(&mut self) {
        self.interceptors.clear();
    }

    /// Number of installed interceptors
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Check whether the stage is empty
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Run the success path over a completed exchange
    ///
    /// Each interceptor sees the exchange with the previous interceptor's
    /// value as its body; the last value fulfils the call. The first `Err`
    /// short-circuits into the call's rejection. An empty stage passes the
    /// body through.
    pub async fn run_success(&self, response: ResponseDescriptor) -> Result<Value> {
        if self.interceptors.is_empty() {
            return Ok(response.body);
        }

        let mut value = response.body.clone();
        for interceptor in &self.interceptors {
            let mut staged = response.clone();
            staged.body = value;
            value = interceptor.on_response(staged).await?;
        }
        Ok(value)
    }

    /// Run the failure path over a failed exchange
    ///
    /// Each interceptor sees the failure with the previous interceptor's
    /// error as its cause; the last error becomes the call's rejection. An
    /// empty stage passes the cause through.
    pub async fn run_failure(&self, failure: ErrorDescriptor) -> Error {
        let ErrorDescriptor {
            mut cause,
            status,
            request,
            body,
            headers,
            message,
        } = failure;

        for interceptor in &self.interceptors {
            let staged = ErrorDescriptor {
                cause,
                status,
                request: request.clone(),
                body: body.clone(),
                headers: headers.clone(),
                message: message.clone(),
            };
            cause = interceptor.on_failure(staged).await;
        }
        cause
    }
}
