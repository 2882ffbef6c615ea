// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use crate::errors::RenderError;
use crate::traits::RenderContext;
use crate::utils::yaml_to_json;

/// Output of one render stage.
///
/// Text feeds the next stage of the pipeline; a structured value ends it.
pub enum StageOutput {
    Text(String),
    Structured(Value),
}

/// One stage of a reaction-file render pipeline.
///
/// The built-in stages are structural parsers and ignore the context; a
/// templating stage registered by the embedder receives the event's `tag`
/// and `data` through it.
pub trait RenderStage: Send + Sync {
    fn name(&self) -> &'static str;

    fn render(&self, input: &str, ctx: &RenderContext) -> Result<StageOutput, RenderError>;
}

/// Structural YAML stage.
pub struct YamlStage;

impl RenderStage for YamlStage {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn render(&self, input: &str, _ctx: &RenderContext) -> Result<StageOutput, RenderError> {
        let parsed: serde_yaml::Value =
            serde_yaml::from_str(input).map_err(|e| RenderError::StageFailed {
                stage: self.name(),
                reason: e.to_string(),
            })?;
        let value = yaml_to_json(&parsed).map_err(|reason| RenderError::StageFailed {
            stage: self.name(),
            reason,
        })?;
        Ok(StageOutput::Structured(value))
    }
}

/// Structural JSON stage.
pub struct JsonStage;

impl RenderStage for JsonStage {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&self, input: &str, _ctx: &RenderContext) -> Result<StageOutput, RenderError> {
        let value: Value = serde_json::from_str(input).map_err(|e| RenderError::StageFailed {
            stage: self.name(),
            reason: e.to_string(),
        })?;
        Ok(StageOutput::Structured(value))
    }
}
