// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::config::consts::DEFAULT_MAX_CONCURRENCY;
use crate::traits::{AsyncPool, AsyncTask};

/// [`AsyncPool`] implementation over `tokio::spawn`, bounded by a semaphore
/// so a burst of reactions cannot flood the runtime.
///
/// Submission is non-blocking: tasks past the bound queue on the semaphore
/// inside their spawned wrapper, not in the dispatcher.
pub struct TokioPool {
    semaphore: Arc<Semaphore>,
}

impl TokioPool {
    /// Create a pool with the specified concurrency limit
    pub fn new(max_concurrency: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(max_concurrency.max(1))),
        }
    }
}

impl Default for TokioPool {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CONCURRENCY)
    }
}

impl AsyncPool for TokioPool {
    fn fire_async(&self, task: AsyncTask) {
        let semaphore = self.semaphore.clone();
        tokio::spawn(async move {
            // The semaphore only closes at shutdown; the task is dropped with it.
            if let Ok(_permit) = semaphore.acquire_owned().await {
                task.await;
            }
        });
    }
}
