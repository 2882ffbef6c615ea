// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for chunk dispatch and backend client calls.

use crate::reaction::Backend;
use thiserror::Error;

/// Errors raised by backend client implementations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The caller backend has no function registered under this name.
    #[error("Unknown function: '{0}'")]
    UnknownFunction(String),

    /// The forwarding channel to the embedding application is closed.
    #[error("Execution channel closed")]
    ChannelClosed,

    /// The invoked function itself failed.
    #[error("Function execution failed: {0}")]
    Execution(String),
}

/// Errors raised while dispatching a single chunk.
///
/// Dispatch failures are isolated per chunk: the reactor logs them and
/// continues with the remaining chunks of the tag's reaction list.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A chunk targets the local backend but carries no `tgt`.
    #[error("Chunk '{id}' targets the local backend but has no 'tgt'")]
    MissingTarget { id: String },

    /// The client factory produced a client of the wrong kind.
    #[error("Client cache holds a {found} client for the {requested} backend")]
    ClientMismatch {
        requested: Backend,
        found: &'static str,
    },

    /// The backend call itself failed.
    #[error("Client call failed: {0}")]
    Client(#[from] ClientError),
}
