// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Async driver: one scheduler owned by one Tokio task.
//!
//! ## Feature
//!
//! Enable with `tokio`.
//!
//! ## Overview
//!
//! [`spawn`] moves a [`TransitionScheduler`] onto a dedicated task. Navigation
//! requests arrive over a channel through a [`PageStackHandle`]; the task arms a
//! single `sleep_until` for the scheduler's deadline and publishes a fresh
//! [`StackView`] on a `watch` channel after every change.
//!
//! The task ends when [`PageStackHandle::shutdown`] is called or every handle
//! is dropped. The armed sleep is dropped with the task, so no deferred commit
//! lands after teardown.
//!
//! ```no_run
//! # async fn demo() {
//! use understory_page_stack::config::TransitionConfig;
//! use understory_page_stack::driver;
//!
//! let (handle, mut views) = driver::spawn(TransitionConfig::default(), "/more");
//! handle.navigate("/more/more").unwrap();
//! views
//!     .wait_for(|v| v.displayed == "/more/more")
//!     .await
//!     .unwrap();
//! handle.shutdown().await;
//! # }
//! ```

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::pin::Pin;

use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, Sleep, sleep_until};
use tracing::debug;

use crate::config::TransitionConfig;
use crate::scheduler::{NavigateOutcome, TransitionScheduler};
use crate::types::StackView;

/// The driver task has stopped and no longer accepts navigation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("page stack driver has stopped")]
pub struct DriverClosed;

#[derive(Debug)]
enum Command {
    Navigate(String),
    Shutdown,
}

/// Sends navigation requests to a running driver task.
///
/// Cloning is cheap; the task runs until [`shutdown`](Self::shutdown) or until
/// the last clone is dropped.
#[derive(Clone, Debug)]
pub struct PageStackHandle {
    tx: mpsc::UnboundedSender<Command>,
}

impl PageStackHandle {
    /// Queue a navigation request. Requests are handled in call order.
    pub fn navigate(&self, path: &str) -> Result<(), DriverClosed> {
        self.tx
            .send(Command::Navigate(path.to_string()))
            .map_err(|_| DriverClosed)
    }

    /// Stop the task and wait until it has released its timer.
    ///
    /// Requests queued before this call are still handled.
    pub async fn shutdown(&self) {
        // A send error means the task already stopped; `closed` returns at once.
        let _ = self.tx.send(Command::Shutdown);
        self.tx.closed().await;
    }

    /// True once the task has stopped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Spawn a driver task displaying `initial`.
///
/// Returns the request handle and a receiver that always holds the latest
/// [`StackView`], starting with the initial one.
///
/// Must be called from within a Tokio runtime.
pub fn spawn(
    config: TransitionConfig,
    initial: &str,
) -> (PageStackHandle, watch::Receiver<StackView>) {
    let scheduler = TransitionScheduler::<Instant>::new(config, initial);
    let (views_tx, views_rx) = watch::channel(scheduler.view());
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(run(scheduler, rx, views_tx));
    (PageStackHandle { tx }, views_rx)
}

async fn run(
    mut scheduler: TransitionScheduler<Instant>,
    mut rx: mpsc::UnboundedReceiver<Command>,
    views: watch::Sender<StackView>,
) {
    let mut timer: Option<Pin<Box<Sleep>>> = None;
    loop {
        tokio::select! {
            cmd = rx.recv() => {
                let Some(Command::Navigate(path)) = cmd else {
                    break;
                };
                let outcome = scheduler.on_navigate(&path, Instant::now());
                match outcome {
                    NavigateOutcome::Deferred { deadline } => {
                        timer = deadline.map(|d| Box::pin(sleep_until(d)));
                    }
                    NavigateOutcome::Committed => timer = None,
                    NavigateOutcome::Unchanged => {}
                }
                if outcome.view_changed() {
                    views.send_replace(scheduler.view());
                }
            }
            () = async {
                if let Some(t) = &mut timer {
                    t.await;
                }
            }, if timer.is_some() => {
                if scheduler.poll(Instant::now()) {
                    views.send_replace(scheduler.view());
                }
                timer = scheduler.deadline().map(|d| Box::pin(sleep_until(d)));
            }
        }
    }
    drop(timer);
    scheduler.shutdown();
    debug!(displayed = scheduler.displayed(), "page stack driver stopped");
}
