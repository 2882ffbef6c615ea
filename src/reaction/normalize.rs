// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Declaration-to-chunk normalization.
//!
//! Two authoring schemas coexist in reaction files and both must compile to
//! equivalent dispatch behavior:
//!
//! * **Legacy**: explicit `arg` (positional list) and `kwarg` (named mapping)
//!   entries, plus bare keys like `tgt` or `name` that act as keyword
//!   parameters.
//! * **New**: a single `args` entry holding an ordered list of single-key
//!   mappings (or bare scalars, which are positional).
//!
//! Normalization detects the schema, hoists the fields every backend needs
//! (`order`, `tgt`, the `name` override), and leaves the parameters in their
//! original shape for the per-backend wrapper-call builders.

use serde_json::{Map, Value};

use super::chunk::{ArgsEntry, Backend, LowChunk, ReactionParams};
use crate::config::consts::DEFAULT_ORDER;
use crate::errors::RenderError;

/// Split a state reference into its backend and function parts.
///
/// The first dot-delimited segment names the backend; the remainder is the
/// function reference (`"runner.error.error"` → `runner` / `error.error`).
pub fn split_state_ref(reference: &str) -> Result<(Backend, String), RenderError> {
    let (backend_name, fun) =
        reference
            .split_once('.')
            .ok_or_else(|| RenderError::MissingFunction {
                reference: reference.to_string(),
            })?;
    if fun.is_empty() {
        return Err(RenderError::MissingFunction {
            reference: reference.to_string(),
        });
    }
    let backend = Backend::parse(backend_name).ok_or_else(|| RenderError::UnknownBackend {
        name: backend_name.to_string(),
        reference: reference.to_string(),
    })?;
    Ok((backend, fun.to_string()))
}

/// Flatten a declaration's parameter list into one ordered mapping.
///
/// Both schemas author parameters as a list of single-key mappings; the bare
/// mapping form is accepted as well. Later entries win on key collision.
fn flatten_params(id: &str, params: &Value) -> Result<Map<String, Value>, RenderError> {
    match params {
        Value::Null => Ok(Map::new()),
        Value::Object(map) => Ok(map.clone()),
        Value::Array(entries) => {
            let mut flat = Map::new();
            for entry in entries {
                match entry {
                    Value::Object(map) => {
                        for (key, value) in map {
                            flat.insert(key.clone(), value.clone());
                        }
                    }
                    other => {
                        return Err(RenderError::MalformedParams {
                            id: id.to_string(),
                            reason: format!("parameter entry is not a mapping: {}", other),
                        })
                    }
                }
            }
            Ok(flat)
        }
        other => Err(RenderError::MalformedParams {
            id: id.to_string(),
            reason: format!("parameters are not a list or mapping: {}", other),
        }),
    }
}

fn parse_args_entries(id: &str, value: &Value) -> Result<Vec<ArgsEntry>, RenderError> {
    let entries = value
        .as_array()
        .ok_or_else(|| RenderError::MalformedParams {
            id: id.to_string(),
            reason: "'args' is not a list".to_string(),
        })?;

    let mut parsed = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry {
            Value::Object(map) => {
                for (key, value) in map {
                    parsed.push(ArgsEntry::Keyword(key.clone(), value.clone()));
                }
            }
            other => parsed.push(ArgsEntry::Positional(other.clone())),
        }
    }
    Ok(parsed)
}

fn name_override(params: &ReactionParams) -> Option<String> {
    let value = match params {
        ReactionParams::Legacy { kwarg, extra, .. } => {
            extra.get("name").or_else(|| kwarg.get("name"))
        }
        ReactionParams::Args(entries) => entries.iter().rev().find_map(|entry| match entry {
            ArgsEntry::Keyword(key, value) if key == "name" => Some(value),
            _ => None,
        }),
    }?;
    value.as_str().map(|s| s.to_string())
}

/// Build the canonical chunk for one declaration-id / state-reference pair.
pub fn normalize_declaration(
    id: &str,
    reference: &str,
    params: &Value,
    sls: &str,
) -> Result<LowChunk, RenderError> {
    let (backend, fun) = split_state_ref(reference)?;
    let mut flat = flatten_params(id, params)?;

    let order = flat
        .remove("order")
        .unwrap_or_else(|| Value::from(DEFAULT_ORDER));
    let tgt = flat.remove("tgt");

    let params = if let Some(args_value) = flat.remove("args") {
        let mut entries = parse_args_entries(id, &args_value)?;
        // The new schema wins when both shapes are present.
        if flat.remove("arg").is_some() || flat.remove("kwarg").is_some() {
            tracing::warn!(
                declaration = id,
                "declaration mixes 'args' with legacy 'arg'/'kwarg'; the legacy keys are ignored"
            );
        }
        for (key, value) in flat {
            entries.push(ArgsEntry::Keyword(key, value));
        }
        ReactionParams::Args(entries)
    } else {
        let arg = match flat.remove("arg") {
            Some(Value::Array(values)) => values,
            Some(single) => vec![single],
            None => Vec::new(),
        };
        let kwarg = match flat.remove("kwarg") {
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(RenderError::MalformedParams {
                    id: id.to_string(),
                    reason: format!("'kwarg' is not a mapping: {}", other),
                })
            }
            None => Map::new(),
        };
        ReactionParams::Legacy {
            arg,
            kwarg,
            extra: flat,
        }
    };

    let name = name_override(&params).unwrap_or_else(|| id.to_string());

    Ok(LowChunk {
        backend,
        id: id.to_string(),
        name,
        sls: sls.to_string(),
        fun,
        order,
        tgt,
        params,
    })
}
