// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod dispatch;
mod render;

pub use config::{ConfigurationError, ValidationWarning};
pub use dispatch::{ClientError, DispatchError};
pub use render::RenderError;
