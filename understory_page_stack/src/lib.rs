// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_page_stack --heading-base-level=0

//! Understory Page Stack: a deterministic, `no_std` navigation stack for UI transitions.
//!
//! ## Overview
//!
//! This crate decides *when* a nested page stack may swap its content and
//! *which* pages are on screen while it does.
//! It does not render or animate anything.
//! Instead, feed it navigation requests and the current time, and it reports the
//! pages to draw, their depth, and their transition role.
//!
//! ## Inputs
//!
//! - A [`RouteTable`](crate::route::RouteTable): the root-first nesting levels,
//!   e.g. `["/", "/more", "/more/more"]`. Index = depth = paint order.
//! - A delay: how long a deeper page gets to slide in over its parent.
//!   Both live in a [`TransitionConfig`](crate::config::TransitionConfig).
//! - Navigation requests, one at a time, each superseding the last.
//!
//! ## Displayed vs requested
//!
//! The [`TransitionScheduler`](crate::scheduler::TransitionScheduler) owns the
//! *displayed* location.
//! Moving to the root, to a sibling, or back up commits immediately.
//! Moving strictly deeper into the current branch is deferred by the delay, so
//! the parent stays mounted underneath the page entering above it.
//! At most one deferred commit exists; a later request always replaces it.
//!
//! ## Stack
//!
//! [`build_stack`](crate::stack::build_stack) turns the displayed location into
//! [`PageDescriptor`](crate::types::PageDescriptor)s: one per table entry that is
//! a segment-aligned prefix of the location, ascending by depth.
//! The exact match is `Active`, its ancestors are `Receding`, and while a
//! deferred commit is pending the target is `Entering`.
//!
//! ## Workflow
//!
//! 1) Construct a scheduler from a config and the initial location.
//! 2) Call `on_navigate(path, now)` for every navigation event.
//! 3) If it returns `Deferred { deadline: Some(d) }`, arm a timer for `d` and call `poll(now)` when it elapses.
//! 4) Render `view()` whenever something changed; it carries the pages and the
//!    back-control flag.
//! 5) Call `shutdown()` on teardown.
//!
//! ```
//! use core::time::Duration;
//! use understory_page_stack::config::TransitionConfig;
//! use understory_page_stack::scheduler::TransitionScheduler;
//! use understory_page_stack::types::PageRole;
//!
//! let ms = Duration::from_millis;
//! let mut s = TransitionScheduler::new(TransitionConfig::default(), "/more");
//!
//! let _ = s.on_navigate("/more/more", ms(0));
//! let roles: Vec<_> = s.view().pages.iter().map(|p| p.role).collect();
//! assert_eq!(roles, [PageRole::Receding, PageRole::Receding, PageRole::Entering]);
//!
//! assert!(s.poll(ms(500)));
//! assert_eq!(s.view().top().unwrap().path, "/more/more");
//! ```
//!
//! With the `tokio` feature, the `driver` module runs a scheduler on its own task and
//! publishes views over a `watch` channel.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod config;
#[cfg(feature = "tokio")]
pub mod driver;
pub mod path;
pub mod route;
pub mod scheduler;
pub mod stack;
pub mod types;
