// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::client_cache::ClientCache;
use super::wrapper_call::{build_caller_call, build_local_call, build_master_call, MasterCall};
use crate::errors::DispatchError;
use crate::observability::messages::dispatch::{AsyncCallFailed, ChunkDispatched};
use crate::reaction::{Backend, LowChunk};
use crate::traits::{AsyncPool, ClientFactory, ClientHandle};

/// Per-chunk dispatcher.
///
/// Each chunk is dispatched exactly once to the backend named by its state:
/// `runner` and `wheel` calls are handed to the async pool and the dispatcher
/// moves on without awaiting them; `local` returns once the job is scheduled;
/// `caller` executes in-process before returning.
///
/// Failures of the synchronous backends propagate out of [`run`](Self::run)
/// for the event loop to log per chunk; failures inside async submissions are
/// logged by the submitted task itself.
pub struct ReactWrap {
    clients: ClientCache,
    pool: Arc<dyn AsyncPool>,
}

impl ReactWrap {
    pub fn new(factory: Arc<dyn ClientFactory>, pool: Arc<dyn AsyncPool>) -> Self {
        Self {
            clients: ClientCache::new(factory),
            pool,
        }
    }

    /// The underlying client cache.
    pub fn clients(&self) -> &ClientCache {
        &self.clients
    }

    /// Dispatch one chunk to its backend.
    pub async fn run(&self, chunk: &LowChunk) -> Result<(), DispatchError> {
        match chunk.backend {
            Backend::Runner => self.runner(chunk).await,
            Backend::Wheel => self.wheel(chunk).await,
            Backend::Local => self.local(chunk).await,
            Backend::Caller => self.caller(chunk).await,
        }
    }

    async fn runner(&self, chunk: &LowChunk) -> Result<(), DispatchError> {
        let call = build_master_call(chunk);
        let client = match self.clients.get(Backend::Runner).await? {
            ClientHandle::Runner(client) => client,
            other => {
                return Err(DispatchError::ClientMismatch {
                    requested: Backend::Runner,
                    found: other.kind(),
                })
            }
        };

        tracing::debug!(
            "{}",
            ChunkDispatched {
                id: &chunk.id,
                backend: "runner",
                fun: &call.fun
            }
        );

        let MasterCall { fun, kwargs } = call;
        self.pool.fire_async(Box::pin(async move {
            if let Err(error) = client.low(&fun, kwargs).await {
                tracing::error!(
                    "{}",
                    AsyncCallFailed {
                        backend: "runner",
                        fun: &fun,
                        error: &error
                    }
                );
            }
        }));
        Ok(())
    }

    async fn wheel(&self, chunk: &LowChunk) -> Result<(), DispatchError> {
        let call = build_master_call(chunk);
        let client = match self.clients.get(Backend::Wheel).await? {
            ClientHandle::Wheel(client) => client,
            other => {
                return Err(DispatchError::ClientMismatch {
                    requested: Backend::Wheel,
                    found: other.kind(),
                })
            }
        };

        tracing::debug!(
            "{}",
            ChunkDispatched {
                id: &chunk.id,
                backend: "wheel",
                fun: &call.fun
            }
        );

        let MasterCall { fun, kwargs } = call;
        self.pool.fire_async(Box::pin(async move {
            if let Err(error) = client.low(&fun, kwargs).await {
                tracing::error!(
                    "{}",
                    AsyncCallFailed {
                        backend: "wheel",
                        fun: &fun,
                        error: &error
                    }
                );
            }
        }));
        Ok(())
    }

    async fn local(&self, chunk: &LowChunk) -> Result<(), DispatchError> {
        let call = build_local_call(chunk)?;
        let client = match self.clients.get(Backend::Local).await? {
            ClientHandle::Local(client) => client,
            other => {
                return Err(DispatchError::ClientMismatch {
                    requested: Backend::Local,
                    found: other.kind(),
                })
            }
        };

        tracing::debug!(
            "{}",
            ChunkDispatched {
                id: &chunk.id,
                backend: "local",
                fun: &call.fun
            }
        );

        client.cmd_async(call.tgt, &call.fun, call.kwargs).await?;
        Ok(())
    }

    async fn caller(&self, chunk: &LowChunk) -> Result<(), DispatchError> {
        let call = build_caller_call(chunk);
        let client = match self.clients.get(Backend::Caller).await? {
            ClientHandle::Caller(client) => client,
            other => {
                return Err(DispatchError::ClientMismatch {
                    requested: Backend::Caller,
                    found: other.kind(),
                })
            }
        };

        tracing::debug!(
            "{}",
            ChunkDispatched {
                id: &chunk.id,
                backend: "caller",
                fun: &call.fun
            }
        );

        client.cmd(&call.fun, call.args, call.kwargs).await?;
        Ok(())
    }
}
