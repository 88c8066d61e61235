// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request/response interception
//!
//! Hooks that run before dispatch and after an exchange settles, plus a
//! small set of ready-made interceptors.

mod builtin;
mod stage;

pub use builtin::{AuthInjector, EnvelopeInterceptor, RequestLogger};
pub use stage::{
    RequestAction, RequestInterceptor, RequestStage, ResponseInterceptor, ResponseStage,
};
