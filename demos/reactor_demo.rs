// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Self-contained end-to-end demo: a reactor wired with channel-forwarding
//! clients processing a few synthetic events.
//!
//! Run from the repository root so the sample reaction files resolve:
//!
//! ```text
//! cargo run --example reactor_demo
//! ```

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use event_reactor::backends::{
    ChannelClientFactory, ForwardedCall, FunctionRegistry, RegistryCaller,
};
use event_reactor::config::load_and_validate_config;
use event_reactor::dispatch::TokioPool;
use event_reactor::reactor::{Event, Reactor};
use event_reactor::render::SlsRenderer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cfg = load_and_validate_config("demos/configs/reactor.yaml")
        .map_err(|e| anyhow::anyhow!("failed to load demo config: {}", e))?;

    let (tx, mut rx) = mpsc::unbounded_channel::<ForwardedCall>();
    let mut registry = FunctionRegistry::new();
    registry.register("test.ping", |_args, _kwargs| {
        println!("  caller: test.ping -> true");
        Ok(json!(true))
    });
    let caller = Arc::new(RegistryCaller::new(Arc::new(registry)));

    let factory = Arc::new(ChannelClientFactory::new(tx, caller));
    let pool = Arc::new(TokioPool::new(cfg.dispatch.get_max_concurrency()));
    let reactor = Arc::new(Reactor::new(
        &cfg,
        Arc::new(SlsRenderer::new()),
        factory,
        pool,
    )?);

    // Drive the reactor the way an embedding application would: an event
    // channel in, a cancellation token for shutdown.
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();
    let shutdown = CancellationToken::new();
    let loop_handle = tokio::spawn({
        let reactor = reactor.clone();
        let shutdown = shutdown.clone();
        async move { reactor.run(event_rx, shutdown).await }
    });

    let events = [
        ("old_runner", json!({"data": {"message": "This is an error"}})),
        ("new_runner", json!({"data": {"message": "This is an error"}})),
        ("new_wheel", json!({"data": {"id": "foo"}})),
        ("local_ping", json!({"data": {}})),
        ("caller_ping", json!({"data": {}})),
    ];
    for (tag, data) in events {
        event_tx
            .send(Event {
                tag: tag.to_string(),
                data,
            })
            .unwrap();
    }
    drop(event_tx);
    loop_handle.await?;

    tokio::time::sleep(Duration::from_millis(100)).await;
    drop(reactor);

    println!("forwarded calls:");
    while let Ok(call) = rx.try_recv() {
        println!("  {:?}", call);
    }

    Ok(())
}
