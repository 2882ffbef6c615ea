// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for reaction-file rendering and chunk normalization.
//!
//! These are per-file and per-declaration conditions: the renderer reports
//! them, logs, and moves on to the remaining files or declarations rather
//! than aborting the whole reaction list.

use thiserror::Error;

/// Errors raised while rendering a reaction file or normalizing one of its
/// declarations into a dispatch-ready chunk.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A shebang pipeline names a stage that is not registered.
    #[error("Unknown render stage: '{0}'")]
    UnknownStage(String),

    /// A stage rejected its input.
    #[error("Render stage '{stage}' failed: {reason}")]
    StageFailed { stage: &'static str, reason: String },

    /// The pipeline finished without a structural stage producing a value.
    #[error("Render pipeline for '{path}' ended with text output; the last stage must be structural")]
    UnstructuredOutput { path: String },

    /// The rendered document is not a mapping of declaration ids.
    #[error("Rendered output of '{path}' is not a mapping of declaration ids")]
    NotAMapping { path: String },

    /// A state reference has no function part after the backend name.
    #[error("State reference '{reference}' has no function part")]
    MissingFunction { reference: String },

    /// The leading segment of a state reference names no known backend.
    #[error("Unknown backend '{name}' in state reference '{reference}'")]
    UnknownBackend { name: String, reference: String },

    /// A declaration's parameters are not in either supported schema.
    #[error("Declaration '{id}' has malformed parameters: {reason}")]
    MalformedParams { id: String, reason: String },

    /// File I/O error while reading a reaction file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
