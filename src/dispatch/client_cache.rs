// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::errors::DispatchError;
use crate::observability::messages::dispatch::ClientCachePopulated;
use crate::reaction::Backend;
use crate::traits::{ClientFactory, ClientHandle};

/// Lazily-populated registry of connected backend clients.
///
/// An entry is created on the first dispatch to its backend and reused for
/// the reactor's lifetime; a missing entry is repaired by rebuilding it, not
/// treated as fatal. Check-and-insert runs under one lock so concurrent tag
/// processing cannot race two clients into the same slot.
///
/// The `cmd` alias never reaches the cache: it is folded into
/// [`Backend::Local`] at normalization, so both spellings share one entry.
pub struct ClientCache {
    factory: Arc<dyn ClientFactory>,
    clients: Mutex<HashMap<Backend, ClientHandle>>,
}

impl ClientCache {
    pub fn new(factory: Arc<dyn ClientFactory>) -> Self {
        Self {
            factory,
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch the client for a backend, building and caching it on first use.
    pub async fn get(&self, backend: Backend) -> Result<ClientHandle, DispatchError> {
        let mut clients = self.clients.lock().await;
        if let Some(handle) = clients.get(&backend) {
            return Ok(handle.clone());
        }

        let handle = self.factory.build(backend)?;
        tracing::debug!(
            "{}",
            ClientCachePopulated {
                backend: backend.as_str()
            }
        );
        clients.insert(backend, handle.clone());
        Ok(handle)
    }

    /// Whether a backend already has a cached client.
    pub async fn contains(&self, backend: Backend) -> bool {
        self.clients.lock().await.contains_key(&backend)
    }

    /// Number of populated backends.
    pub async fn len(&self) -> usize {
        self.clients.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.clients.lock().await.is_empty()
    }
}

impl std::fmt::Debug for ClientCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.clients.try_lock() {
            Ok(clients) => f
                .debug_struct("ClientCache")
                .field("client_count", &clients.len())
                .field("backends", &clients.keys().collect::<Vec<_>>())
                .finish(),
            Err(_) => f.debug_struct("ClientCache").finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::stub::StubClientFactory;

    #[tokio::test]
    async fn test_cache_starts_empty() {
        let cache = ClientCache::new(Arc::new(StubClientFactory::new()));

        assert!(cache.is_empty().await);
        for backend in [Backend::Runner, Backend::Wheel, Backend::Local, Backend::Caller] {
            assert!(!cache.contains(backend).await);
        }
    }

    #[tokio::test]
    async fn test_get_populates_lazily() {
        let cache = ClientCache::new(Arc::new(StubClientFactory::new()));

        cache.get(Backend::Wheel).await.unwrap();

        assert!(cache.contains(Backend::Wheel).await);
        assert!(!cache.contains(Backend::Runner).await);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_reuses_the_cached_client() {
        let factory = StubClientFactory::new();
        let runner: Arc<dyn crate::traits::RunnerClient> = factory.runner.clone();
        let cache = ClientCache::new(Arc::new(factory));

        let first = cache.get(Backend::Runner).await.unwrap();
        let second = cache.get(Backend::Runner).await.unwrap();

        let (ClientHandle::Runner(first), ClientHandle::Runner(second)) = (first, second) else {
            panic!("expected runner handles");
        };
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &runner));
    }

    #[tokio::test]
    async fn test_each_backend_gets_its_own_entry() {
        let cache = ClientCache::new(Arc::new(StubClientFactory::new()));

        for backend in [Backend::Runner, Backend::Wheel, Backend::Local, Backend::Caller] {
            cache.get(backend).await.unwrap();
        }

        assert_eq!(cache.len().await, 4);
    }
}
