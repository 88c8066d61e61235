// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client layer
//!
//! The client, its configuration, and the descriptors that flow through the
//! interceptor stages.

mod client;
mod config;
mod request;
mod response;

pub use client::Client;
pub use config::{ClientConfig, DataType, RequestOverrides, StatusPolicy};
pub use request::RequestDescriptor;
pub use response::{ErrorDescriptor, ResponseDescriptor};

use std::time::Duration;

/// Default timeout applied when neither config nor overrides set one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Default Content-Type header value
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";
