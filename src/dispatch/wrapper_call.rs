// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Pure wrapper-call builders, one per backend calling convention.
//!
//! Each builder maps a canonical chunk to the fully-resolved invocation for
//! its backend, applying the schema-specific extraction rules. Building is
//! separated from the effect (pool submission or direct client call) so the
//! conversions stay plain functions.

use serde_json::{Map, Value};

use crate::config::consts::REACTOR_USER;
use crate::errors::DispatchError;
use crate::reaction::{ArgsEntry, LowChunk, ReactionParams};

/// Fully-resolved `runner`/`wheel` invocation: `client.low(fun, kwargs)`.
#[derive(Debug, Clone, PartialEq)]
pub struct MasterCall {
    pub fun: String,
    pub kwargs: Map<String, Value>,
}

/// Fully-resolved `local` invocation: `client.cmd_async(tgt, fun, kwargs)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalCall {
    pub tgt: Value,
    pub fun: String,
    pub kwargs: Map<String, Value>,
}

/// Fully-resolved `caller` invocation: `client.cmd(fun, args, kwargs)`.
/// A direct flat call, no wrapping dict.
#[derive(Debug, Clone, PartialEq)]
pub struct CallerCall {
    pub fun: String,
    pub args: Vec<Value>,
    pub kwargs: Map<String, Value>,
}

/// Resolve a chunk's parameters to one positional list and one keyword map.
///
/// Legacy: `arg` passes through and bare keys merge into `kwarg`. New: keyword
/// entries merge into `kwarg` in authored order, positional entries into the
/// list.
fn resolve_params(params: &ReactionParams) -> (Vec<Value>, Map<String, Value>) {
    match params {
        ReactionParams::Legacy { arg, kwarg, extra } => {
            let mut merged = kwarg.clone();
            for (key, value) in extra {
                merged.insert(key.clone(), value.clone());
            }
            (arg.clone(), merged)
        }
        ReactionParams::Args(entries) => {
            let mut arg = Vec::new();
            let mut kwarg = Map::new();
            for entry in entries {
                match entry {
                    ArgsEntry::Positional(value) => arg.push(value.clone()),
                    ArgsEntry::Keyword(key, value) => {
                        kwarg.insert(key.clone(), value.clone());
                    }
                }
            }
            (arg, kwarg)
        }
    }
}

/// Build the `runner`/`wheel` call for a chunk.
pub fn build_master_call(chunk: &LowChunk) -> MasterCall {
    let (arg, kwarg) = resolve_params(&chunk.params);

    let mut kwargs = Map::new();
    kwargs.insert("__state__".to_string(), Value::from(chunk.backend.as_str()));
    kwargs.insert("__id__".to_string(), Value::from(chunk.id.clone()));
    kwargs.insert("name".to_string(), Value::from(chunk.name.clone()));
    kwargs.insert("__sls__".to_string(), Value::from(chunk.sls.clone()));
    kwargs.insert("order".to_string(), chunk.order.clone());
    kwargs.insert("__user__".to_string(), Value::from(REACTOR_USER));
    kwargs.insert("arg".to_string(), Value::Array(arg));
    kwargs.insert("kwarg".to_string(), Value::Object(kwarg));

    MasterCall {
        fun: chunk.fun.clone(),
        kwargs,
    }
}

/// Build the `local` call for a chunk.
///
/// New-schema chunks pull the `fun` and `name` entries out of `args` into the
/// positional pair handed to the state function; everything else stays a
/// keyword argument.
pub fn build_local_call(chunk: &LowChunk) -> Result<LocalCall, DispatchError> {
    let tgt = chunk
        .tgt
        .clone()
        .ok_or_else(|| DispatchError::MissingTarget {
            id: chunk.id.clone(),
        })?;

    let (arg, kwarg) = match &chunk.params {
        ReactionParams::Legacy { .. } => resolve_params(&chunk.params),
        ReactionParams::Args(entries) => {
            let mut fun_value = None;
            let mut name_value = None;
            let mut trailing = Vec::new();
            let mut kwarg = Map::new();
            for entry in entries {
                match entry {
                    ArgsEntry::Keyword(key, value) if key == "fun" => {
                        fun_value = Some(value.clone())
                    }
                    ArgsEntry::Keyword(key, value) if key == "name" => {
                        name_value = Some(value.clone())
                    }
                    ArgsEntry::Keyword(key, value) => {
                        kwarg.insert(key.clone(), value.clone());
                    }
                    ArgsEntry::Positional(value) => trailing.push(value.clone()),
                }
            }
            let mut arg = Vec::new();
            arg.extend(fun_value);
            arg.extend(name_value);
            arg.extend(trailing);
            (arg, kwarg)
        }
    };

    let mut kwargs = Map::new();
    kwargs.insert("state".to_string(), Value::from(chunk.backend.as_str()));
    kwargs.insert("__id__".to_string(), Value::from(chunk.id.clone()));
    kwargs.insert("name".to_string(), Value::from(chunk.name.clone()));
    kwargs.insert("__sls__".to_string(), Value::from(chunk.sls.clone()));
    kwargs.insert("order".to_string(), chunk.order.clone());
    kwargs.insert("arg".to_string(), Value::Array(arg));
    kwargs.insert("kwarg".to_string(), Value::Object(kwarg));

    Ok(LocalCall {
        tgt,
        fun: chunk.fun.clone(),
        kwargs,
    })
}

/// Build the `caller` call for a chunk.
pub fn build_caller_call(chunk: &LowChunk) -> CallerCall {
    let (args, kwargs) = resolve_params(&chunk.params);
    CallerCall {
        fun: chunk.fun.clone(),
        args,
        kwargs,
    }
}
