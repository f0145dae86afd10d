// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A page stack on its own Tokio task, with real timers.
//!
//! Set `RUST_LOG=info,understory_page_stack=debug` to see views and commit decisions.
//!
//! Run:
//! - `cargo run -p understory_demos --example driver_tokio`

use core::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_page_stack::config::TransitionConfig;
use understory_page_stack::driver;
use understory_page_stack::types::StackView;

fn describe(v: &StackView) -> String {
    let pages: Vec<_> = v
        .pages
        .iter()
        .map(|d| format!("{}:{:?}", d.path, d.role))
        .collect();
    format!("displayed={} [{}]", v.displayed, pages.join(", "))
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = TransitionConfig::default().with_delay(Duration::from_millis(200));
    let (handle, mut views) = driver::spawn(config, "/");
    info!(view = %describe(&views.borrow()), "initial");

    let watcher = tokio::spawn(async move {
        while views.changed().await.is_ok() {
            let v = views.borrow_and_update();
            info!(view = %describe(&v), not_found = v.is_not_found(), "view changed");
        }
    });

    handle.navigate("/more").expect("driver running");
    handle.navigate("/more/more").expect("driver running");
    tokio::time::sleep(Duration::from_millis(300)).await;

    handle.navigate("/more").expect("driver running");
    tokio::time::sleep(Duration::from_millis(50)).await;

    handle.shutdown().await;
    let _ = watcher.await;
    info!("driver stopped");
}
