// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // backend client implementations
pub mod config;     // config + reaction map
pub mod dispatch;   // per-chunk dispatch + client cache
pub mod errors;     // error handling
pub mod observability;
pub mod reaction;   // canonical chunk model + normalization
pub mod reactor;    // resolve/render/dispatch engine
pub mod render;     // default SLS renderer
pub mod traits;     // unified abstractions
pub mod utils;
