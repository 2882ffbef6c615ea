// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging in the reactor. Message types follow a struct-based
//! pattern with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Enable future internationalization without code changes
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::reactor` - Reactor lifecycle and per-event processing
//! * `messages::render` - Reaction-file rendering and normalization findings
//! * `messages::dispatch` - Chunk dispatch and client-cache events
//!
//! Lifecycle messages additionally implement [`messages::StructuredLog`] so
//! call sites can emit typed fields or open spans without rebuilding them.

pub mod messages;
