use async_trait::async_trait;
use serde_json::{Map, Value};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::errors::{ClientError, DispatchError};
use crate::reaction::Backend;

/// Reference to a job scheduled on the remote execution layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRef(pub String);

/// Master-side administrative function execution.
#[async_trait]
pub trait RunnerClient: Send + Sync {
    /// Low-data entry point; the dispatcher hands this to the async pool.
    async fn low(&self, fun: &str, kwargs: Map<String, Value>) -> Result<Value, ClientError>;
}

/// Master-side key/config management function execution.
#[async_trait]
pub trait WheelClient: Send + Sync {
    async fn low(&self, fun: &str, kwargs: Map<String, Value>) -> Result<Value, ClientError>;
}

/// Remote execution dispatched to targeted minions.
#[async_trait]
pub trait LocalClient: Send + Sync {
    /// Returns once the job is scheduled, not once it completes.
    async fn cmd_async(
        &self,
        tgt: Value,
        fun: &str,
        kwargs: Map<String, Value>,
    ) -> Result<JobRef, ClientError>;
}

/// In-process function execution on the node that raised the event.
#[async_trait]
pub trait CallerClient: Send + Sync {
    /// Executes synchronously with respect to the dispatcher.
    async fn cmd(
        &self,
        fun: &str,
        args: Vec<Value>,
        kwargs: Map<String, Value>,
    ) -> Result<Value, ClientError>;
}

/// Boxed unit of work submitted to an [`AsyncPool`].
pub type AsyncTask = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Thread-pool seam for fire-and-forget backend calls.
///
/// The dispatcher fully builds (and logs) the wrapper call before submission,
/// so implementations see only an opaque task and tests can record
/// submissions without executing them.
pub trait AsyncPool: Send + Sync {
    /// Non-blocking submission; completion order is the pool's business.
    fn fire_async(&self, task: AsyncTask);
}

/// A connected backend client, tagged with its kind.
#[derive(Clone)]
pub enum ClientHandle {
    Runner(Arc<dyn RunnerClient>),
    Wheel(Arc<dyn WheelClient>),
    Local(Arc<dyn LocalClient>),
    Caller(Arc<dyn CallerClient>),
}

impl ClientHandle {
    pub fn kind(&self) -> &'static str {
        match self {
            ClientHandle::Runner(_) => "runner",
            ClientHandle::Wheel(_) => "wheel",
            ClientHandle::Local(_) => "local",
            ClientHandle::Caller(_) => "caller",
        }
    }
}

impl std::fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ClientHandle").field(&self.kind()).finish()
    }
}

/// Builds a connected client for a backend on client-cache miss.
pub trait ClientFactory: Send + Sync {
    fn build(&self, backend: Backend) -> Result<ClientHandle, DispatchError>;
}
