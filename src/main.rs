// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::sync::mpsc;

use event_reactor::backends::{ChannelClientFactory, ForwardedCall, FunctionRegistry, RegistryCaller};
use event_reactor::config::load_and_validate_config;
use event_reactor::dispatch::TokioPool;
use event_reactor::reactor::{Event, Reactor};
use event_reactor::render::SlsRenderer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <config.yaml> [tag ...]", args[0]);
        eprintln!("Example: {} demos/configs/reactor.yaml new_wheel", args[0]);
        std::process::exit(1);
    }
    let config_file = &args[1];
    let tags: Vec<String> = if args.len() > 2 {
        args[2..].to_vec()
    } else {
        vec![
            "old_runner".to_string(),
            "new_runner".to_string(),
            "new_wheel".to_string(),
            "local_ping".to_string(),
            "caller_ping".to_string(),
        ]
    };

    let cfg = load_and_validate_config(config_file)
        .map_err(|e| anyhow::anyhow!("failed to load {}: {}", config_file, e))?;

    // Channel clients forward every dispatched call back here for printing;
    // the caller backend runs in-process against the registry.
    let (tx, mut rx) = mpsc::unbounded_channel::<ForwardedCall>();
    let mut registry = FunctionRegistry::new();
    registry.register("test.ping", |_args, _kwargs| Ok(json!(true)));
    let caller = Arc::new(RegistryCaller::new(Arc::new(registry)));

    let factory = Arc::new(ChannelClientFactory::new(tx, caller));
    let pool = Arc::new(TokioPool::new(cfg.dispatch.get_max_concurrency()));
    let reactor = Reactor::new(&cfg, Arc::new(SlsRenderer::new()), factory, pool)?;

    println!("event-reactor demo");
    println!("==================");
    println!("Config: {}", config_file);
    println!();

    for tag in &tags {
        let event = Event {
            tag: tag.clone(),
            data: json!({"data": {"id": "demo", "message": "This is an error"}}),
        };
        let dispatched = reactor.react(&event).await;
        println!("tag '{}': dispatched {} chunk(s)", tag, dispatched);
    }

    // Let the pool flush the runner/wheel submissions before draining.
    tokio::time::sleep(Duration::from_millis(100)).await;
    drop(reactor);

    println!();
    println!("forwarded calls:");
    while let Ok(call) = rx.try_recv() {
        match call {
            ForwardedCall::Runner { fun, kwargs } => {
                println!("  runner.low({}, {})", fun, serde_json::Value::Object(kwargs));
            }
            ForwardedCall::Wheel { fun, kwargs } => {
                println!("  wheel.low({}, {})", fun, serde_json::Value::Object(kwargs));
            }
            ForwardedCall::Local {
                jid,
                tgt,
                fun,
                kwargs,
            } => {
                println!(
                    "  local.cmd_async({}, {}, {}) -> jid {}",
                    tgt,
                    fun,
                    serde_json::Value::Object(kwargs),
                    jid.0
                );
            }
        }
    }

    Ok(())
}
