// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Constructor-injected configuration for a [`TransitionScheduler`](crate::scheduler::TransitionScheduler).

use core::time::Duration;

use crate::route::RouteTable;

/// Exit-animation duration used when none is configured.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Route table and deferred-commit delay for one page stack.
///
/// ```
/// use core::time::Duration;
/// use understory_page_stack::config::TransitionConfig;
/// use understory_page_stack::route::RouteTable;
///
/// let config = TransitionConfig::default()
///     .with_route_table(RouteTable::new(["/", "/settings"]).unwrap())
///     .with_delay(Duration::from_millis(250));
/// assert_eq!(config.route_table.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransitionConfig {
    /// Known nesting levels, root first.
    pub route_table: RouteTable,
    /// How long a deeper page gets to slide in before the displayed location
    /// catches up.
    pub delay: Duration,
}

impl TransitionConfig {
    /// Create a configuration from a table and a delay.
    pub fn new(route_table: RouteTable, delay: Duration) -> Self {
        Self { route_table, delay }
    }

    /// Replace the route table.
    #[must_use]
    pub fn with_route_table(mut self, route_table: RouteTable) -> Self {
        self.route_table = route_table;
        self
    }

    /// Replace the delay.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            route_table: RouteTable::default(),
            delay: DEFAULT_DELAY,
        }
    }
}
