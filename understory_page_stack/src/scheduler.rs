// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition scheduler: decides when the displayed location may change.
//!
//! ## Overview
//!
//! The scheduler separates the *requested* location (what navigation asked
//! for) from the *displayed* location (what the page stack renders). Most
//! requests commit immediately. Moving strictly deeper into the current branch
//! is deferred by the configured delay so the parent stays mounted while the
//! deeper page slides in over it.
//!
//! ## Commit rule
//!
//! A request commits immediately when any of these hold:
//!
//! - the request is `/`;
//! - the displayed location is `/`;
//! - the displayed location is not a strict prefix of the request (sibling,
//!   ancestor, unrelated branch, or the same path).
//!
//! Otherwise the commit is deferred until `now + delay`. Any later request
//! replaces the pending one, so at most one deferred commit exists. When it
//! fires, the displayed location becomes the latest requested path.
//!
//! ## Time
//!
//! The scheduler never reads a clock. Callers pass `now` into
//! [`on_navigate`](TransitionScheduler::on_navigate) and
//! [`poll`](TransitionScheduler::poll), and arm their own timer for
//! [`deadline`](TransitionScheduler::deadline). Any [`Deadline`] type works:
//! `core::time::Duration` since an origin, `std::time::Instant` (feature
//! `std`), or `tokio::time::Instant` (feature `tokio`).
//!
//! A deadline that does not fit in `T` is never due; the commit stays pending
//! until a later request supersedes it.
//!
//! ```
//! use core::time::Duration;
//! use understory_page_stack::config::TransitionConfig;
//! use understory_page_stack::scheduler::{NavigateOutcome, TransitionScheduler};
//!
//! let ms = Duration::from_millis;
//! let mut s = TransitionScheduler::new(TransitionConfig::default(), "/more");
//!
//! // Descending is deferred.
//! let out = s.on_navigate("/more/more", ms(0));
//! assert_eq!(out, NavigateOutcome::Deferred { deadline: Some(ms(500)) });
//! assert_eq!(s.displayed(), "/more");
//!
//! // The host polls once its timer for `deadline()` elapses.
//! assert!(!s.poll(ms(499)));
//! assert!(s.poll(ms(500)));
//! assert_eq!(s.displayed(), "/more/more");
//!
//! // Ascending commits synchronously.
//! assert_eq!(s.on_navigate("/more", ms(600)), NavigateOutcome::Committed);
//! assert_eq!(s.displayed(), "/more");
//! ```

use alloc::string::{String, ToString};
use core::time::Duration;

use tracing::{debug, trace};

use crate::config::TransitionConfig;
use crate::path;
use crate::stack;
use crate::types::StackView;

/// Result of [`TransitionScheduler::on_navigate`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NavigateOutcome<T> {
    /// The displayed location now equals the request. Either it changed or a
    /// pending commit was cancelled.
    Committed,
    /// The commit waits until `deadline`; poll at or after it.
    Deferred {
        /// When the pending commit becomes due; `None` if `now + delay`
        /// overflows `T`, in which case it is never due.
        deadline: Option<T>,
    },
    /// Nothing changed.
    Unchanged,
}

impl<T> NavigateOutcome<T> {
    /// True if the published [`StackView`] may differ from before the call.
    pub fn view_changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// A monotonic instant the scheduler can offset by its delay.
pub trait Deadline: Copy + Ord {
    /// `self + delay`, or `None` on overflow.
    fn checked_after(self, delay: Duration) -> Option<Self>;
}

impl Deadline for Duration {
    fn checked_after(self, delay: Duration) -> Option<Self> {
        self.checked_add(delay)
    }
}

#[cfg(feature = "std")]
impl Deadline for std::time::Instant {
    fn checked_after(self, delay: Duration) -> Option<Self> {
        self.checked_add(delay)
    }
}

#[cfg(feature = "tokio")]
impl Deadline for tokio::time::Instant {
    fn checked_after(self, delay: Duration) -> Option<Self> {
        self.checked_add(delay)
    }
}

/// The single timer slot: a commit of the latest request due at `deadline`.
/// `None` never comes due.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct PendingCommit<T> {
    deadline: Option<T>,
}

/// Owner of the displayed location and its deferred-commit timer slot.
///
/// ## Usage
///
/// - Construct with [`TransitionScheduler::new`] from a [`TransitionConfig`]
///   and the initial location.
/// - Call [`on_navigate`](Self::on_navigate) once per navigation event.
/// - When [`deadline`](Self::deadline) is `Some`, arrange to call
///   [`poll`](Self::poll) at or after it.
/// - Render [`view`](Self::view) whenever an operation reports a change.
/// - Call [`shutdown`](Self::shutdown) on teardown; no commit happens after it.
#[derive(Clone, Debug)]
pub struct TransitionScheduler<T = Duration> {
    config: TransitionConfig,
    displayed: String,
    requested: String,
    pending: Option<PendingCommit<T>>,
    shut_down: bool,
}

impl<T> TransitionScheduler<T>
where
    T: Deadline,
{
    /// Create a scheduler displaying `initial` with no pending commit.
    pub fn new(config: TransitionConfig, initial: &str) -> Self {
        let initial = path::normalize(initial).to_string();
        Self {
            config,
            displayed: initial.clone(),
            requested: initial,
            pending: None,
            shut_down: false,
        }
    }

    /// Handle one navigation request.
    ///
    /// Repeating the currently pending request keeps its deadline, so rapid
    /// duplicate calls neither re-arm the timer nor restart the transition.
    pub fn on_navigate(&mut self, requested: &str, now: T) -> NavigateOutcome<T> {
        if self.shut_down {
            trace!(requested, "navigation ignored after shutdown");
            return NavigateOutcome::Unchanged;
        }
        let requested = path::normalize(requested);

        if !self.should_defer(requested) {
            let cancelled = self.pending.take().is_some();
            let changed = self.displayed != requested;
            if cancelled {
                debug!(requested, "cancelled pending commit");
            }
            self.requested = requested.to_string();
            if !changed && !cancelled {
                trace!(requested, "navigation unchanged");
                return NavigateOutcome::Unchanged;
            }
            debug!(from = %self.displayed, to = requested, "commit");
            self.displayed = requested.to_string();
            return NavigateOutcome::Committed;
        }

        if self.pending.is_some() && self.requested == requested {
            trace!(requested, "navigation already pending");
            return NavigateOutcome::Unchanged;
        }
        let deadline = now.checked_after(self.config.delay);
        if deadline.is_none() {
            debug!(requested, "delay overflows the clock; commit waits for a new request");
        }
        if self.pending.replace(PendingCommit { deadline }).is_some() {
            debug!(requested, superseded = %self.requested, "re-armed pending commit");
        } else {
            debug!(requested, displayed = %self.displayed, "deferred commit");
        }
        self.requested = requested.to_string();
        NavigateOutcome::Deferred { deadline }
    }

    /// Fire the pending commit if it is due at `now`.
    ///
    /// Commits the latest requested location and returns `true`; otherwise
    /// returns `false` and leaves state untouched.
    pub fn poll(&mut self, now: T) -> bool {
        match self.pending {
            Some(PendingCommit { deadline: Some(due) }) if now >= due => {
                self.pending = None;
                debug!(from = %self.displayed, to = %self.requested, "deferred commit fired");
                self.displayed.clone_from(&self.requested);
                true
            }
            _ => false,
        }
    }

    /// Release the timer slot and stop accepting navigation.
    ///
    /// After this returns, neither [`on_navigate`](Self::on_navigate) nor
    /// [`poll`](Self::poll) changes the displayed location.
    pub fn shutdown(&mut self) {
        if self.pending.take().is_some() {
            debug!(requested = %self.requested, "pending commit dropped on shutdown");
        }
        self.requested.clone_from(&self.displayed);
        self.shut_down = true;
    }

    /// When the pending commit becomes due.
    ///
    /// `None` when nothing is pending or the deadline overflowed; see
    /// [`is_pending`](Self::is_pending).
    pub fn deadline(&self) -> Option<T> {
        self.pending.and_then(|p| p.deadline)
    }

    fn should_defer(&self, requested: &str) -> bool {
        !path::is_root(requested)
            && !path::is_root(&self.displayed)
            && path::is_strict_prefix(&self.displayed, requested)
    }
}

impl<T> TransitionScheduler<T> {
    /// The committed location the stack renders.
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    /// The latest requested location.
    pub fn requested(&self) -> &str {
        &self.requested
    }

    /// True while a deferred commit is waiting.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The target of the pending commit, if any.
    pub fn pending_target(&self) -> Option<&str> {
        self.pending.as_ref().map(|_| self.requested.as_str())
    }

    /// True once [`shutdown`](TransitionScheduler::shutdown) has run.
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Configuration supplied at construction.
    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// Current descriptors and back-control visibility.
    pub fn view(&self) -> StackView {
        stack::view(
            &self.config.route_table,
            &self.displayed,
            self.pending_target(),
        )
    }
}
