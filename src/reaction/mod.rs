// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod chunk;
mod normalize;

pub use chunk::{ArgsEntry, Backend, LowChunk, ReactionParams};
pub use normalize::{normalize_declaration, split_state_ref};
