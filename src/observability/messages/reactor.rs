// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for reactor lifecycle and per-event processing.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A tag matched the reaction map and its files are being processed.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use event_reactor::observability::messages::reactor::ReactionTriggered;
///
/// let msg = ReactionTriggered {
///     tag: "node/web1/start",
///     file_count: 2,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ReactionTriggered<'a> {
    pub tag: &'a str,
    pub file_count: usize,
}

impl Display for ReactionTriggered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Tag '{}' triggered {} reaction file(s)",
            self.tag, self.file_count
        )
    }
}

impl StructuredLog for ReactionTriggered<'_> {
    fn log(&self) {
        tracing::info!(
            tag = self.tag,
            file_count = self.file_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "reaction",
            span_name = name,
            tag = self.tag,
            file_count = self.file_count,
        )
    }
}

/// Reaction files for a tag rendered into dispatch-ready chunks.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ChunksRendered<'a> {
    pub tag: &'a str,
    pub chunk_count: usize,
}

impl Display for ChunksRendered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Tag '{}' rendered to {} chunk(s)",
            self.tag, self.chunk_count
        )
    }
}

impl StructuredLog for ChunksRendered<'_> {
    fn log(&self) {
        tracing::info!(
            tag = self.tag,
            chunk_count = self.chunk_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "chunks_rendered",
            span_name = name,
            tag = self.tag,
            chunk_count = self.chunk_count,
        )
    }
}

/// Reactor event loop started.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ReactorStarted {
    pub tag_count: usize,
}

impl Display for ReactorStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Reactor event loop started with {} configured tag(s)",
            self.tag_count
        )
    }
}

impl StructuredLog for ReactorStarted {
    fn log(&self) {
        tracing::info!(tag_count = self.tag_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "reactor",
            span_name = name,
            tag_count = self.tag_count,
        )
    }
}

/// Reactor event loop stopped (shutdown requested or event source closed).
///
/// # Log Level
/// `info!` - Important operational event
pub struct ReactorStopped;

impl Display for ReactorStopped {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Reactor event loop stopped")
    }
}

impl StructuredLog for ReactorStopped {
    fn log(&self) {
        tracing::info!("{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("reactor_stopped", span_name = name)
    }
}
