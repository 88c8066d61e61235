// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! reqwest-backed transport

use async_trait::async_trait;
use reqwest::header::HeaderValue;
use serde_json::Value;
use url::Url;

use super::{Transport, TransportResponse};
use crate::error::{Error, Result};
use crate::http::{DataType, RequestDescriptor};

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("remora/", env!("CARGO_PKG_VERSION"));

/// Default transport over reqwest
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the default reqwest client
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client (custom TLS, proxy, pools)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &RequestDescriptor) -> Result<TransportResponse> {
        let url = Url::parse(&request.url)?;

        let mut builder = self
            .client
            .request(request.method.clone(), url)
            .timeout(request.timeout)
            .header("content-type", header_value(&request.content_type)?);

        // An empty Authorization value means "no header", not an empty one
        if !request.authorization.is_empty() {
            builder = builder.header("authorization", header_value(&request.authorization)?);
        }

        if let Some(ref data) = request.data {
            builder = builder.body(encode_body(data, request.data_type)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let message = status.canonical_reason().map(str::to_string);
        let bytes = response.bytes().await?;

        Ok(TransportResponse {
            status,
            body: decode_body(&bytes, request.data_type),
            headers,
            message,
        })
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::try_from(value)
        .map_err(|_| Error::config(format!("invalid header value: {}", value)))
}

/// Serialize the request payload per the descriptor's data type
fn encode_body(data: &Value, data_type: DataType) -> Result<Vec<u8>> {
    match data_type {
        DataType::Json => Ok(serde_json::to_vec(data)?),
        DataType::Text => match data {
            Value::String(s) => Ok(s.clone().into_bytes()),
            other => Ok(other.to_string().into_bytes()),
        },
    }
}

/// Decode a response body per the descriptor's data type
///
/// JSON mode falls back to a string value when the body does not parse, so
/// a misbehaving endpoint degrades instead of erroring the whole call.
fn decode_body(bytes: &[u8], data_type: DataType) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    match data_type {
        DataType::Json => serde_json::from_slice(bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned())),
        DataType::Text => Value::String(String::from_utf8_lossy(bytes).into_owned()),
    }
}
