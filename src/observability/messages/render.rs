// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for reaction-file rendering and normalization findings.
//!
//! These are all per-file or per-declaration conditions the renderer recovers
//! from: the offending file or declaration is skipped and the rest of the
//! tag's reaction list continues.

use std::fmt::{Display, Formatter};

/// A configured reaction file was skipped before rendering.
///
/// # Log Level
/// `warn!` - Recoverable, but usually an authoring or deployment mistake
pub struct ReactionFileSkipped<'a> {
    pub path: &'a str,
    pub reason: &'a str,
}

impl Display for ReactionFileSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Skipping reaction file '{}': {}", self.path, self.reason)
    }
}

/// A reaction file failed to render; its declarations are skipped.
///
/// # Log Level
/// `warn!` - Recoverable per-file condition
pub struct RenderFailed<'a> {
    pub path: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for RenderFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to render reaction file '{}': {}",
            self.path, self.error
        )
    }
}

/// A rendered declaration could not be normalized into a chunk.
///
/// # Log Level
/// `warn!` - Recoverable per-declaration condition
pub struct MalformedDeclaration<'a> {
    pub id: &'a str,
    pub path: &'a str,
    pub reason: &'a str,
}

impl Display for MalformedDeclaration<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Skipping declaration '{}' in '{}': {}",
            self.id, self.path, self.reason
        )
    }
}
