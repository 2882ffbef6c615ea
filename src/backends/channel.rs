// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::errors::{ClientError, DispatchError};
use crate::reaction::Backend;
use crate::traits::{
    CallerClient, ClientFactory, ClientHandle, JobRef, LocalClient, RunnerClient, WheelClient,
};

/// A fully-built backend call forwarded to the embedding application.
///
/// The embedder bridges the receiving end of the channel to its real
/// execution subsystems (job publisher, runner/wheel executors).
#[derive(Debug, Clone, PartialEq)]
pub enum ForwardedCall {
    Runner {
        fun: String,
        kwargs: Map<String, Value>,
    },
    Wheel {
        fun: String,
        kwargs: Map<String, Value>,
    },
    Local {
        jid: JobRef,
        tgt: Value,
        fun: String,
        kwargs: Map<String, Value>,
    },
}

/// Runner client forwarding `low` calls onto the channel.
pub struct ChannelRunnerClient {
    tx: mpsc::UnboundedSender<ForwardedCall>,
}

impl ChannelRunnerClient {
    pub fn new(tx: mpsc::UnboundedSender<ForwardedCall>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl RunnerClient for ChannelRunnerClient {
    async fn low(&self, fun: &str, kwargs: Map<String, Value>) -> Result<Value, ClientError> {
        self.tx
            .send(ForwardedCall::Runner {
                fun: fun.to_string(),
                kwargs,
            })
            .map_err(|_| ClientError::ChannelClosed)?;
        Ok(Value::Null)
    }
}

/// Wheel client forwarding `low` calls onto the channel.
pub struct ChannelWheelClient {
    tx: mpsc::UnboundedSender<ForwardedCall>,
}

impl ChannelWheelClient {
    pub fn new(tx: mpsc::UnboundedSender<ForwardedCall>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl WheelClient for ChannelWheelClient {
    async fn low(&self, fun: &str, kwargs: Map<String, Value>) -> Result<Value, ClientError> {
        self.tx
            .send(ForwardedCall::Wheel {
                fun: fun.to_string(),
                kwargs,
            })
            .map_err(|_| ClientError::ChannelClosed)?;
        Ok(Value::Null)
    }
}

/// Local client forwarding scheduled jobs onto the channel.
///
/// A job id is minted and returned at submission time; completion is the
/// remote execution layer's business.
pub struct ChannelLocalClient {
    tx: mpsc::UnboundedSender<ForwardedCall>,
    next_jid: AtomicU64,
}

impl ChannelLocalClient {
    pub fn new(tx: mpsc::UnboundedSender<ForwardedCall>) -> Self {
        Self {
            tx,
            next_jid: AtomicU64::new(1),
        }
    }
}

#[async_trait]
impl LocalClient for ChannelLocalClient {
    async fn cmd_async(
        &self,
        tgt: Value,
        fun: &str,
        kwargs: Map<String, Value>,
    ) -> Result<JobRef, ClientError> {
        let jid = JobRef(format!(
            "{:016x}",
            self.next_jid.fetch_add(1, Ordering::Relaxed)
        ));
        self.tx
            .send(ForwardedCall::Local {
                jid: jid.clone(),
                tgt,
                fun: fun.to_string(),
                kwargs,
            })
            .map_err(|_| ClientError::ChannelClosed)?;
        Ok(jid)
    }
}

/// Client factory wiring channel-forwarding master/local clients and an
/// in-process caller.
pub struct ChannelClientFactory {
    tx: mpsc::UnboundedSender<ForwardedCall>,
    caller: Arc<dyn CallerClient>,
}

impl ChannelClientFactory {
    pub fn new(tx: mpsc::UnboundedSender<ForwardedCall>, caller: Arc<dyn CallerClient>) -> Self {
        Self { tx, caller }
    }
}

impl ClientFactory for ChannelClientFactory {
    fn build(&self, backend: Backend) -> Result<ClientHandle, DispatchError> {
        let handle = match backend {
            Backend::Runner => {
                ClientHandle::Runner(Arc::new(ChannelRunnerClient::new(self.tx.clone())))
            }
            Backend::Wheel => {
                ClientHandle::Wheel(Arc::new(ChannelWheelClient::new(self.tx.clone())))
            }
            Backend::Local => {
                ClientHandle::Local(Arc::new(ChannelLocalClient::new(self.tx.clone())))
            }
            Backend::Caller => ClientHandle::Caller(self.caller.clone()),
        };
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_runner_call_is_forwarded() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let client = ChannelRunnerClient::new(tx);

        let mut kwargs = Map::new();
        kwargs.insert("__user__".to_string(), json!("Reactor"));
        client.low("error.error", kwargs.clone()).await.unwrap();

        assert_eq!(
            rx.recv().await,
            Some(ForwardedCall::Runner {
                fun: "error.error".to_string(),
                kwargs
            })
        );
    }

    #[tokio::test]
    async fn test_local_mints_monotonic_job_ids() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let client = ChannelLocalClient::new(tx);

        let first = client
            .cmd_async(json!("*"), "state.single", Map::new())
            .await
            .unwrap();
        let second = client
            .cmd_async(json!("*"), "state.single", Map::new())
            .await
            .unwrap();

        assert_ne!(first, second);
        let Some(ForwardedCall::Local { jid, .. }) = rx.recv().await else {
            panic!("expected a local call");
        };
        assert_eq!(jid, first);
    }

    #[tokio::test]
    async fn test_closed_channel_is_a_client_error() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let client = ChannelWheelClient::new(tx);

        let result = client.low("key.delete", Map::new()).await;
        assert!(matches!(result, Err(ClientError::ChannelClosed)));
    }

    #[test]
    fn test_factory_builds_every_backend() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let caller: Arc<dyn CallerClient> = Arc::new(crate::backends::RegistryCaller::new(
            Arc::new(crate::backends::FunctionRegistry::new()),
        ));
        let factory = ChannelClientFactory::new(tx, caller);

        for (backend, kind) in [
            (Backend::Runner, "runner"),
            (Backend::Wheel, "wheel"),
            (Backend::Local, "local"),
            (Backend::Caller, "caller"),
        ] {
            let handle = factory.build(backend).unwrap();
            assert_eq!(handle.kind(), kind);
        }
    }
}
