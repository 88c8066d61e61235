// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Remora - Intercepting HTTP Client
//!
//! A lightweight HTTP client that wraps a single transport primitive with a
//! two-stage interceptor chain: hooks run before a request is dispatched and
//! after a response or failure returns, without touching call sites.
//!
//! ## Features
//!
//! - Two-stage interception: mutate requests before dispatch, transform
//!   responses and failures after
//! - Tagged request outcomes: a hook continues or aborts, never leaves a
//!   call hanging
//! - Absolute-URL bypass: `http(s)://` URLs skip hooks and base-URL
//!   prefixing
//! - Configurable status routing: 404-as-error by default, any non-2xx or
//!   nothing on request
//! - Pluggable transport: reqwest out of the box, any `Transport` impl for
//!   tests or exotic backends
//! - Ready-made interceptors: auth injection, lifecycle logging,
//!   `{ code, data, msg }` envelope unwrapping
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use remora::{Client, ClientConfig, EnvelopeInterceptor, RequestOverrides};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new()
//!         .base_url("https://mall.example.com/api-mall")
//!         .timeout(Duration::from_secs(6));
//!     let client = Client::new(config)?;
//!
//!     // Unwrap { code, data, msg } envelopes; code 10000 means success
//!     client.on_response(EnvelopeInterceptor::new(10_000));
//!
//!     let user = client
//!         .post(
//!             "/user/login",
//!             Some(json!({"account": "ada", "password": "secret"})),
//!             RequestOverrides::new(),
//!         )
//!         .await?;
//!     println!("logged in: {}", user);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod http;
pub mod interceptor;
pub mod transport;

// Re-exports for convenience

// Client and configuration
pub use http::{Client, ClientConfig, DataType, RequestOverrides, StatusPolicy};

// Descriptors flowing through the stages
pub use http::{ErrorDescriptor, RequestDescriptor, ResponseDescriptor};

// Interceptor traits and stages
pub use interceptor::{
    RequestAction, RequestInterceptor, RequestStage, ResponseInterceptor, ResponseStage,
};

// Ready-made interceptors
pub use interceptor::{AuthInjector, EnvelopeInterceptor, RequestLogger};

// Transport seam
pub use transport::{HttpTransport, Transport, TransportResponse};

// Errors
pub use error::{Error, Result};

/// Remora version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
