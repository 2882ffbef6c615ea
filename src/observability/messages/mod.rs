// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! Messages are organized by subsystem:
//!
//! * `reactor` - Reactor lifecycle and per-event processing
//! * `render` - Reaction-file rendering and normalization findings
//! * `dispatch` - Chunk dispatch and client-cache events
//!
//! # Usage Pattern
//!
//! ```rust
//! use event_reactor::observability::messages::reactor::ReactionTriggered;
//!
//! let msg = ReactionTriggered {
//!     tag: "node/web1/start",
//!     file_count: 2,
//! };
//!
//! tracing::info!("{}", msg);
//! ```

use tracing::Span;

/// Structured emission for lifecycle messages: log at the appropriate level
/// with typed fields, or open a span carrying the same fields.
pub trait StructuredLog {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}

pub mod dispatch;
pub mod reactor;
pub mod render;
