// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod sls;
mod stages;

pub use sls::SlsRenderer;
pub use stages::{JsonStage, RenderStage, StageOutput, YamlStage};
