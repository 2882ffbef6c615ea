// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for chunk dispatch and client-cache events.

use std::fmt::{Display, Formatter};

/// A chunk was handed to its backend.
///
/// # Log Level
/// `debug!` - High-volume diagnostic event
pub struct ChunkDispatched<'a> {
    pub id: &'a str,
    pub backend: &'a str,
    pub fun: &'a str,
}

impl Display for ChunkDispatched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dispatching chunk '{}' to {} backend: {}",
            self.id, self.backend, self.fun
        )
    }
}

/// Dispatch of one chunk failed; the remaining chunks continue.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ChunkDispatchFailed<'a> {
    pub id: &'a str,
    pub backend: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ChunkDispatchFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dispatch of chunk '{}' to {} backend failed: {}",
            self.id, self.backend, self.error
        )
    }
}

/// An async-dispatched backend call failed inside the pool worker.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct AsyncCallFailed<'a> {
    pub backend: &'a str,
    pub fun: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for AsyncCallFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Async {} call '{}' failed: {}",
            self.backend, self.fun, self.error
        )
    }
}

/// A backend client was built and cached on first use.
///
/// # Log Level
/// `debug!` - Diagnostic event
pub struct ClientCachePopulated<'a> {
    pub backend: &'a str,
}

impl Display for ClientCachePopulated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Populating client cache for {} backend", self.backend)
    }
}
