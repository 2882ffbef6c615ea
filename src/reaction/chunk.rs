// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::{Map, Value};

/// Execution backend a chunk is dispatched to.
///
/// The set is closed: a state reference naming anything else is a malformed
/// declaration, caught at normalization so the dispatcher only ever sees
/// these four kinds.
///
/// # Variants
/// * `Runner` - Master-side administrative function, async via the pool
/// * `Wheel` - Master-side key/config management function, async via the pool
/// * `Local` - Remote execution on targeted minions, returns at submission
/// * `Caller` - In-process execution on the node that raised the event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    Runner,
    Wheel,
    Local,
    Caller,
}

impl Backend {
    /// Parse a backend name from the leading segment of a state reference.
    ///
    /// `cmd` is a historical alias for `local` and folds into it here, so
    /// both spellings share one dispatch path and one client-cache entry.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "runner" => Some(Backend::Runner),
            "wheel" => Some(Backend::Wheel),
            "local" | "cmd" => Some(Backend::Local),
            "caller" => Some(Backend::Caller),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Runner => "runner",
            Backend::Wheel => "wheel",
            Backend::Local => "local",
            Backend::Caller => "caller",
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a new-schema `args` list, in authored order.
///
/// Single-key mappings contribute keyword parameters; bare scalars are
/// positional. Order is preserved because the caller backend walks the list
/// to build a strictly positional invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgsEntry {
    Positional(Value),
    Keyword(String, Value),
}

/// Parameters carried by a chunk, kept in the shape its authoring schema
/// produced.
///
/// Both schemas must resolve to equivalent dispatch behavior, but the
/// extraction rules differ per backend, so unification happens in the
/// per-backend wrapper-call builders rather than here.
#[derive(Debug, Clone, PartialEq)]
pub enum ReactionParams {
    /// Legacy schema: explicit `arg`/`kwarg` plus bare keyword keys.
    Legacy {
        arg: Vec<Value>,
        kwarg: Map<String, Value>,
        extra: Map<String, Value>,
    },
    /// New schema: the ordered `args` list.
    Args(Vec<ArgsEntry>),
}

/// The normalized, dispatch-ready representation of one reaction declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct LowChunk {
    /// Target backend, alias-normalized
    pub backend: Backend,
    /// Declaration id
    pub id: String,
    /// Declaration id unless overridden by an explicit `name` parameter
    pub name: String,
    /// Source reaction file
    pub sls: String,
    /// Function reference within the backend, e.g. `error.error`
    pub fun: String,
    /// Ordering key, preserved verbatim when authored
    pub order: Value,
    /// Target expression, required for the local backend
    pub tgt: Option<Value>,
    /// Parameters in their authoring-schema shape
    pub params: ReactionParams,
}
