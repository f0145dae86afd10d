// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the page stack: roles, descriptors, and published views.
//!
//! ## Overview
//!
//! These types describe what the presentation layer should render.
//! They are produced by the [`stack`](crate::stack) builders and carried in a
//! [`StackView`] by the [`scheduler`](crate::scheduler).

use alloc::string::String;
use alloc::vec::Vec;

/// Transition role of a page in the stack.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PageRole {
    /// The page sliding in as the new target; the displayed location has not
    /// caught up with it yet.
    Entering,
    /// The page the displayed location points at.
    Active,
    /// A parent kept mounted and pushed back beneath a deeper page.
    Receding,
}

/// One page in the stack.
///
/// `depth` is the page's index in the [`RouteTable`](crate::route::RouteTable)
/// and doubles as its z-order: higher depths paint on top.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PageDescriptor {
    /// Route path this page renders.
    pub path: String,
    /// Table index; lowest paints first.
    pub depth: usize,
    /// Transition role.
    pub role: PageRole,
}

impl PageDescriptor {
    /// Create a descriptor.
    pub fn new(path: impl Into<String>, depth: usize, role: PageRole) -> Self {
        Self {
            path: path.into(),
            depth,
            role,
        }
    }
}

/// Everything the presentation layer needs after a displayed-location change.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StackView {
    /// The committed location.
    pub displayed: String,
    /// Pages to render, ascending by depth.
    pub pages: Vec<PageDescriptor>,
    /// Whether a back control should be shown.
    pub back_visible: bool,
}

impl StackView {
    /// The top-most page, if any.
    pub fn top(&self) -> Option<&PageDescriptor> {
        self.pages.last()
    }

    /// True if no known route matched the displayed location.
    pub fn is_not_found(&self) -> bool {
        self.pages.is_empty()
    }
}
