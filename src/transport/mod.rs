// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transport seam
//!
//! The client delegates all network I/O to a [`Transport`]. Any backend
//! that can turn a resolved [`RequestDescriptor`] into a
//! [`TransportResponse`] is interchangeable; the crate ships a
//! reqwest-backed [`HttpTransport`] and tests supply in-memory doubles.

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::Value;

use crate::error::Result;
use crate::http::RequestDescriptor;

/// A completed exchange as the transport saw it
///
/// Any exchange that produced a status code resolves to this shape, error
/// statuses included; routing by status is the client's job, not the
/// transport's.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// Status code of the exchange
    pub status: StatusCode,
    /// Decoded response body
    pub body: Value,
    /// Response headers
    pub headers: HeaderMap,
    /// Status line reason phrase, when known
    pub message: Option<String>,
}

/// Network primitive the client dispatches through
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue the call described by a resolved descriptor
    ///
    /// The descriptor's URL is already absolute by the time it arrives
    /// here. Returns `Err` only for network-level failures (timeout, DNS,
    /// connection refused); completed exchanges resolve regardless of
    /// status.
    async fn send(&self, request: &RequestDescriptor) -> Result<TransportResponse>;
}
