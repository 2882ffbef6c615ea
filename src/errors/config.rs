// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Errors that can occur while building the reaction map from configuration.
///
/// Every variant indicates a `reactor` entry that would make subsequent tag
/// lookups unreliable, so construction fails fast instead of limping along
/// with a partial map.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// A `reactor` entry is not a single-key `tag: [files]` mapping
    NotASingleKeyEntry {
        /// Position of the entry in the `reactor` list
        index: usize,
        /// Number of keys the entry actually carries
        key_count: usize,
    },
    /// The value attached to a tag is not a sequence of file-path strings
    InvalidFileList {
        /// The tag whose file list is malformed
        tag: String,
        /// What was found instead
        reason: String,
    },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::NotASingleKeyEntry { index, key_count } => {
                write!(
                    f,
                    "Reactor entry {} is not a single-key mapping: found {} keys",
                    index, key_count
                )
            }
            ConfigurationError::InvalidFileList { tag, reason } => {
                write!(f, "Reactor entry for tag '{}' is invalid: {}", tag, reason)
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Non-fatal findings reported by reactor-config validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationWarning {
    /// A tag appears in more than one `reactor` entry; the file lists are
    /// merged in declaration order
    DuplicateTag {
        /// The tag declared more than once
        tag: String,
    },
    /// A tag is configured with no reaction files and can never fire
    EmptyFileList {
        /// The tag with an empty file list
        tag: String,
    },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::DuplicateTag { tag } => {
                write!(
                    f,
                    "Tag '{}' is declared more than once; its file lists are merged in declaration order",
                    tag
                )
            }
            ValidationWarning::EmptyFileList { tag } => {
                write!(f, "Tag '{}' has no reaction files configured", tag)
            }
        }
    }
}
