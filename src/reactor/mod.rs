// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Tag-to-reaction resolution and dispatch engine.
//!
//! Data flow for one event: tag + data → [`Reactor::list_reactors`] (ordered
//! file list) → [`Reactor::reactions`] (render + normalize into chunks) →
//! per-chunk dispatch through [`ReactWrap`]. Resolution and rendering run
//! synchronously on the thread handling the event; dispatch effects are
//! synchronous or pool-async per backend.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::config::{Config, ReactionMap};
use crate::dispatch::{ClientCache, ReactWrap};
use crate::errors::ConfigurationError;
use crate::observability::messages::dispatch::ChunkDispatchFailed;
use crate::observability::messages::reactor::{
    ChunksRendered, ReactionTriggered, ReactorStarted, ReactorStopped,
};
use crate::observability::messages::render::{
    MalformedDeclaration, ReactionFileSkipped, RenderFailed,
};
use crate::observability::messages::StructuredLog;
use crate::reaction::{normalize_declaration, LowChunk};
use crate::traits::{AsyncPool, ClientFactory, RenderContext, Renderer};


/// An event consumed off the bus: a tag plus its payload.
#[derive(Debug, Clone)]
pub struct Event {
    pub tag: String,
    pub data: Value,
}

/// The reactor: owns the reaction map, the renderer seam, and the dispatcher.
///
/// Constructed once from configuration; the reaction map is immutable
/// afterward, so resolution is safe to run repeatedly and concurrently.
pub struct Reactor {
    map: ReactionMap,
    renderer: Arc<dyn Renderer>,
    wrap: ReactWrap,
}

impl Reactor {
    /// Build a reactor from configuration and injected collaborators.
    ///
    /// Fails fast on malformed `reactor` entries; every later lookup would be
    /// unreliable otherwise.
    pub fn new(
        cfg: &Config,
        renderer: Arc<dyn Renderer>,
        factory: Arc<dyn ClientFactory>,
        pool: Arc<dyn AsyncPool>,
    ) -> Result<Self, ConfigurationError> {
        let map = ReactionMap::from_config(cfg)?;
        Ok(Self::from_parts(map, renderer, ReactWrap::new(factory, pool)))
    }

    /// Assemble a reactor from already-built parts.
    pub fn from_parts(map: ReactionMap, renderer: Arc<dyn Renderer>, wrap: ReactWrap) -> Self {
        Self {
            map,
            renderer,
            wrap,
        }
    }

    /// Ordered reaction files configured for a tag; empty when none match.
    ///
    /// Pure lookup, no side effects.
    pub fn list_reactors(&self, tag: &str) -> &[String] {
        self.map.files_for(tag)
    }

    /// Render the given reaction files for a tag into dispatch-ready chunks.
    ///
    /// Chunks are concatenated in file order, then declaration order within
    /// each file. Missing or empty files, per-file render failures, and
    /// malformed declarations are logged and skipped; chunks from everything
    /// that succeeded are still returned.
    pub fn reactions(&self, tag: &str, data: &Value, reactor_files: &[String]) -> Vec<LowChunk> {
        let ctx = RenderContext { tag, data };
        let mut chunks = Vec::new();

        for path in reactor_files {
            match fs::metadata(path) {
                Ok(metadata) if metadata.len() > 0 => {}
                Ok(_) => {
                    tracing::warn!(
                        "{}",
                        ReactionFileSkipped {
                            path,
                            reason: "file is empty"
                        }
                    );
                    continue;
                }
                Err(_) => {
                    tracing::warn!(
                        "{}",
                        ReactionFileSkipped {
                            path,
                            reason: "file does not exist"
                        }
                    );
                    continue;
                }
            }

            let declarations = match self.renderer.render(Path::new(path), &ctx) {
                Ok(declarations) => declarations,
                Err(error) => {
                    tracing::warn!("{}", RenderFailed { path, error: &error });
                    continue;
                }
            };

            for (id, body) in &declarations {
                let Some(body) = body.as_object() else {
                    tracing::warn!(
                        "{}",
                        MalformedDeclaration {
                            id,
                            path,
                            reason: "declaration body is not a mapping"
                        }
                    );
                    continue;
                };
                for (reference, params) in body {
                    match normalize_declaration(id, reference, params, path) {
                        Ok(chunk) => chunks.push(chunk),
                        Err(error) => {
                            let reason = error.to_string();
                            tracing::warn!(
                                "{}",
                                MalformedDeclaration {
                                    id,
                                    path,
                                    reason: &reason
                                }
                            );
                        }
                    }
                }
            }
        }

        chunks
    }

    /// Resolve, render, and dispatch the reactions for one event.
    ///
    /// Per-chunk dispatch failures are logged and do not block the remaining
    /// chunks. Returns the number of chunks dispatched successfully.
    pub async fn react(&self, event: &Event) -> usize {
        let files = self.list_reactors(&event.tag);
        if files.is_empty() {
            return 0;
        }
        ReactionTriggered {
            tag: &event.tag,
            file_count: files.len(),
        }
        .log();

        let chunks = self.reactions(&event.tag, &event.data, files);
        ChunksRendered {
            tag: &event.tag,
            chunk_count: chunks.len(),
        }
        .log();

        let mut dispatched = 0;
        for chunk in &chunks {
            match self.wrap.run(chunk).await {
                Ok(()) => dispatched += 1,
                Err(error) => {
                    tracing::error!(
                        "{}",
                        ChunkDispatchFailed {
                            id: &chunk.id,
                            backend: chunk.backend.as_str(),
                            error: &error
                        }
                    );
                }
            }
        }
        dispatched
    }

    /// Consume events until the source closes or shutdown is requested.
    ///
    /// Per-event failures never end the loop.
    pub async fn run(&self, mut rx: mpsc::UnboundedReceiver<Event>, shutdown: CancellationToken) {
        ReactorStarted {
            tag_count: self.map.len(),
        }
        .log();

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                event = rx.recv() => {
                    match event {
                        Some(event) => {
                            self.react(&event).await;
                        }
                        None => break,
                    }
                }
            }
        }

        ReactorStopped.log();
    }

    /// The reaction map built from configuration.
    pub fn reaction_map(&self) -> &ReactionMap {
        &self.map
    }

    /// The dispatcher's client cache.
    pub fn client_cache(&self) -> &ClientCache {
        self.wrap.clients()
    }
}
