// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use super::stages::{JsonStage, RenderStage, StageOutput, YamlStage};
use crate::errors::RenderError;
use crate::traits::{RawDeclaration, RenderContext, Renderer};

/// Default reaction-file renderer.
///
/// A shebang first line selects the stage pipeline (`#!yaml`, `#!json`, or a
/// composed pipeline like `#!mytemplate|yaml`); without one the file is
/// parsed as YAML. Text stages feed the next stage, and the pipeline must end
/// in a structural stage producing the declaration mapping.
///
/// The registry ships the structural stages only. The templating engine stays
/// an external collaborator: the embedder registers its stage under its own
/// name and composes it ahead of a structural one.
pub struct SlsRenderer {
    stages: HashMap<String, Arc<dyn RenderStage>>,
}

impl SlsRenderer {
    pub fn new() -> Self {
        let mut renderer = Self {
            stages: HashMap::new(),
        };
        renderer.register(Arc::new(YamlStage));
        renderer.register(Arc::new(JsonStage));
        renderer
    }

    /// Register a stage under its own name.
    pub fn register(&mut self, stage: Arc<dyn RenderStage>) {
        self.stages.insert(stage.name().to_string(), stage);
    }

    /// List all registered stage names
    pub fn list_available_stages(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.stages.keys().map(|name| name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Split the shebang pipeline off the file body. No shebang selects `yaml`.
    fn parse_shebang(content: &str) -> (Vec<&str>, &str) {
        if let Some(rest) = content.strip_prefix("#!") {
            let (line, body) = match rest.split_once('\n') {
                Some((line, body)) => (line, body),
                None => (rest, ""),
            };
            let names: Vec<&str> = line
                .trim()
                .split('|')
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .collect();
            if names.is_empty() {
                (vec!["yaml"], body)
            } else {
                (names, body)
            }
        } else {
            (vec!["yaml"], content)
        }
    }
}

impl Default for SlsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for SlsRenderer {
    fn render(&self, path: &Path, ctx: &RenderContext) -> Result<RawDeclaration, RenderError> {
        let content = fs::read_to_string(path)?;
        let (pipeline, body) = Self::parse_shebang(&content);

        let mut text = body.to_string();
        let mut structured: Option<Value> = None;
        for (index, name) in pipeline.iter().enumerate() {
            let stage = self
                .stages
                .get(*name)
                .ok_or_else(|| RenderError::UnknownStage(name.to_string()))?;
            match stage.render(&text, ctx)? {
                StageOutput::Text(next) => text = next,
                StageOutput::Structured(value) => {
                    if index + 1 != pipeline.len() {
                        return Err(RenderError::StageFailed {
                            stage: stage.name(),
                            reason: "structural stage must be last in the pipeline".to_string(),
                        });
                    }
                    structured = Some(value);
                }
            }
        }

        let value = structured.ok_or_else(|| RenderError::UnstructuredOutput {
            path: path.display().to_string(),
        })?;

        match value {
            Value::Object(declarations) => Ok(declarations),
            // A file whose body renders to nothing (comments only) is an
            // empty reaction, not an error.
            Value::Null => Ok(RawDeclaration::new()),
            _ => Err(RenderError::NotAMapping {
                path: path.display().to_string(),
            }),
        }
    }
}
