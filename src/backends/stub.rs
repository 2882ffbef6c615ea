// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Test-only client and pool stubs for exercising the dispatch layer.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::{ClientError, DispatchError};
use crate::reaction::Backend;
use crate::traits::{
    AsyncPool, AsyncTask, CallerClient, ClientFactory, ClientHandle, JobRef, LocalClient,
    RunnerClient, WheelClient,
};

/// A runner client that records every `low` call.
pub struct RecordingRunnerClient {
    pub calls: Mutex<Vec<(String, Map<String, Value>)>>,
}

impl RecordingRunnerClient {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl RunnerClient for RecordingRunnerClient {
    async fn low(&self, fun: &str, kwargs: Map<String, Value>) -> Result<Value, ClientError> {
        self.calls.lock().unwrap().push((fun.to_string(), kwargs));
        Ok(Value::Null)
    }
}

/// A wheel client that records every `low` call.
pub struct RecordingWheelClient {
    pub calls: Mutex<Vec<(String, Map<String, Value>)>>,
}

impl RecordingWheelClient {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl WheelClient for RecordingWheelClient {
    async fn low(&self, fun: &str, kwargs: Map<String, Value>) -> Result<Value, ClientError> {
        self.calls.lock().unwrap().push((fun.to_string(), kwargs));
        Ok(Value::Null)
    }
}

/// A local client that records every scheduled job.
pub struct RecordingLocalClient {
    pub calls: Mutex<Vec<(Value, String, Map<String, Value>)>>,
}

impl RecordingLocalClient {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LocalClient for RecordingLocalClient {
    async fn cmd_async(
        &self,
        tgt: Value,
        fun: &str,
        kwargs: Map<String, Value>,
    ) -> Result<JobRef, ClientError> {
        self.calls
            .lock()
            .unwrap()
            .push((tgt, fun.to_string(), kwargs));
        Ok(JobRef("stub-jid".to_string()))
    }
}

/// A caller client that records every `cmd` call.
pub struct RecordingCallerClient {
    pub calls: Mutex<Vec<(String, Vec<Value>, Map<String, Value>)>>,
}

impl RecordingCallerClient {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CallerClient for RecordingCallerClient {
    async fn cmd(
        &self,
        fun: &str,
        args: Vec<Value>,
        kwargs: Map<String, Value>,
    ) -> Result<Value, ClientError> {
        self.calls
            .lock()
            .unwrap()
            .push((fun.to_string(), args, kwargs));
        Ok(Value::Null)
    }
}

/// A caller client that always fails, for failure-isolation tests.
pub struct FailingCallerClient;

#[async_trait]
impl CallerClient for FailingCallerClient {
    async fn cmd(
        &self,
        _fun: &str,
        _args: Vec<Value>,
        _kwargs: Map<String, Value>,
    ) -> Result<Value, ClientError> {
        Err(ClientError::Execution(
            "simulated caller failure".to_string(),
        ))
    }
}

/// An async pool that captures submissions without executing them.
///
/// Dispatch tests assert on [`fired`](Self::fired) to prove a call went
/// through the pool, then drive the captured tasks with
/// [`run_all`](Self::run_all) to observe the client side.
pub struct RecordingPool {
    tasks: Mutex<Vec<AsyncTask>>,
    fired: AtomicUsize,
}

impl RecordingPool {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
            fired: AtomicUsize::new(0),
        }
    }

    /// Total number of submissions seen.
    pub fn fired(&self) -> usize {
        self.fired.load(Ordering::SeqCst)
    }

    /// Number of captured tasks not yet driven.
    pub fn pending(&self) -> usize {
        self.tasks.lock().unwrap().len()
    }

    /// Drive every captured submission to completion, in submission order.
    pub async fn run_all(&self) {
        let tasks: Vec<AsyncTask> = self.tasks.lock().unwrap().drain(..).collect();
        for task in tasks {
            task.await;
        }
    }
}

impl AsyncPool for RecordingPool {
    fn fire_async(&self, task: AsyncTask) {
        self.fired.fetch_add(1, Ordering::SeqCst);
        self.tasks.lock().unwrap().push(task);
    }
}

/// Client factory handing out shared recording clients.
///
/// Clone the factory (or the individual client handles) before moving it into
/// the dispatcher so the test can inspect recorded calls afterward.
#[derive(Clone)]
pub struct StubClientFactory {
    pub runner: Arc<RecordingRunnerClient>,
    pub wheel: Arc<RecordingWheelClient>,
    pub local: Arc<RecordingLocalClient>,
    pub caller: Arc<RecordingCallerClient>,
    failing_caller: bool,
}

impl StubClientFactory {
    pub fn new() -> Self {
        Self {
            runner: Arc::new(RecordingRunnerClient::new()),
            wheel: Arc::new(RecordingWheelClient::new()),
            local: Arc::new(RecordingLocalClient::new()),
            caller: Arc::new(RecordingCallerClient::new()),
            failing_caller: false,
        }
    }

    /// A factory whose caller backend always fails.
    pub fn with_failing_caller() -> Self {
        Self {
            failing_caller: true,
            ..Self::new()
        }
    }

    /// A second handle onto the same recording clients.
    pub fn share(&self) -> Self {
        self.clone()
    }
}

impl ClientFactory for StubClientFactory {
    fn build(&self, backend: Backend) -> Result<ClientHandle, DispatchError> {
        let handle = match backend {
            Backend::Runner => ClientHandle::Runner(self.runner.clone()),
            Backend::Wheel => ClientHandle::Wheel(self.wheel.clone()),
            Backend::Local => ClientHandle::Local(self.local.clone()),
            Backend::Caller if self.failing_caller => {
                ClientHandle::Caller(Arc::new(FailingCallerClient))
            }
            Backend::Caller => ClientHandle::Caller(self.caller.clone()),
        };
        Ok(handle)
    }
}
