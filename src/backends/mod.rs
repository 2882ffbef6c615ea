// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Backend client implementations for the reactor dispatch layer.
//!
//! Each backend implements one of the client traits consumed by the
//! dispatcher and is built through a [`ClientFactory`](crate::traits::ClientFactory)
//! on client-cache miss.
//!
//! # Available Backends
//!
//! ## Caller Backend
//! In-process execution on the node that raised the event:
//! - **FunctionRegistry**: named functions addressable as `"module.function"`
//! - **RegistryCaller**: synchronous execution against the registry
//! - **Use Case**: reactions that must run where the event originated
//!
//! ## Channel Backend
//! Forwards fully-built calls to the embedding application:
//! - **Runner/Wheel**: the `low` call is forwarded as-is
//! - **Local**: a job id is minted at submission time, matching
//!   scheduled-not-complete semantics
//! - **Use Case**: bridging dispatch onto real execution subsystems
//!
//! ## Stub Backend (Test-Only)
//! Recording clients, failing clients, and a recording pool for dispatch
//! tests. NOT available in production builds.

pub mod caller;
pub mod channel;
#[cfg(test)]
pub mod stub;

pub use caller::{FunctionRegistry, RegistryCaller};
pub use channel::{
    ChannelClientFactory, ChannelLocalClient, ChannelRunnerClient, ChannelWheelClient,
    ForwardedCall,
};
