// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page stack builder: descriptors, depths, and roles from a displayed location.
//!
//! ## Overview
//!
//! [`build_stack`] is a pure function of a [`RouteTable`] and the displayed
//! location. Every table entry that is an active prefix of the location
//! becomes a [`PageDescriptor`]; its depth is its table index.
//!
//! ## Ordering
//!
//! Output is ascending by depth. The root paints first and sits beneath
//! everything else; reversing this order inverts the visual stacking.
//!
//! ## Roles
//!
//! - The entry equal to the displayed location is [`PageRole::Active`].
//! - Entries that are strict prefixes of it are [`PageRole::Receding`].
//! - While a deferred commit toward a deeper target is pending,
//!   [`build_transition_stack`] marks that target [`PageRole::Entering`] and
//!   every shallower page [`PageRole::Receding`].
//!
//! ```
//! use understory_page_stack::route::RouteTable;
//! use understory_page_stack::stack::build_stack;
//! use understory_page_stack::types::PageRole;
//!
//! let table = RouteTable::default();
//! let pages = build_stack(&table, "/more");
//! assert_eq!(pages.len(), 2);
//! assert_eq!((pages[0].path.as_str(), pages[0].role), ("/", PageRole::Receding));
//! assert_eq!((pages[1].path.as_str(), pages[1].role), ("/more", PageRole::Active));
//! ```

use alloc::vec::Vec;

use crate::path;
use crate::route::RouteTable;
use crate::types::{PageDescriptor, PageRole, StackView};

/// Build descriptors for every table entry active under `displayed`.
///
/// Returns an empty stack when `displayed` is malformed or matches nothing.
pub fn build_stack(table: &RouteTable, displayed: &str) -> Vec<PageDescriptor> {
    descriptors(table, displayed, |p| {
        if path::same_path(p, displayed) {
            PageRole::Active
        } else {
            PageRole::Receding
        }
    })
}

/// Build descriptors while a deferred commit toward `pending_target` may be in
/// flight.
///
/// When `pending_target` is strictly below `displayed`, pages are taken from
/// the target's prefixes: the target itself is `Entering` and every shallower
/// page is `Receding`. Otherwise this is [`build_stack`].
pub fn build_transition_stack(
    table: &RouteTable,
    displayed: &str,
    pending_target: Option<&str>,
) -> Vec<PageDescriptor> {
    match pending_target {
        Some(target) if path::is_strict_prefix(displayed, target) => {
            descriptors(table, target, |p| {
                if path::same_path(p, target) {
                    PageRole::Entering
                } else {
                    PageRole::Receding
                }
            })
        }
        _ => build_stack(table, displayed),
    }
}

/// True iff a back control should be shown for `displayed`.
pub fn back_visible(displayed: &str) -> bool {
    !path::is_root(displayed)
}

/// Assemble the full published view.
pub fn view(table: &RouteTable, displayed: &str, pending_target: Option<&str>) -> StackView {
    StackView {
        displayed: displayed.into(),
        pages: build_transition_stack(table, displayed, pending_target),
        back_visible: back_visible(displayed),
    }
}

fn descriptors(
    table: &RouteTable,
    location: &str,
    role_of: impl Fn(&str) -> PageRole,
) -> Vec<PageDescriptor> {
    table
        .iter()
        .filter(|(_, p)| path::is_prefix_active(p, location))
        .map(|(depth, p)| PageDescriptor::new(p, depth, role_of(p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn summary(pages: &[PageDescriptor]) -> Vec<(&str, usize, PageRole)> {
        pages
            .iter()
            .map(|d| (d.path.as_str(), d.depth, d.role))
            .collect()
    }

    // Two descriptors, root beneath, `/more` active on top.
    #[test]
    fn stack_for_second_level() {
        let table = RouteTable::default();
        let pages = build_stack(&table, "/more");
        assert_eq!(
            summary(&pages),
            vec![("/", 0, PageRole::Receding), ("/more", 1, PageRole::Active)]
        );
    }

    #[test]
    fn stack_for_root_and_leaf() {
        let table = RouteTable::default();
        assert_eq!(
            summary(&build_stack(&table, "/")),
            vec![("/", 0, PageRole::Active)]
        );
        assert_eq!(
            summary(&build_stack(&table, "/more/more")),
            vec![
                ("/", 0, PageRole::Receding),
                ("/more", 1, PageRole::Receding),
                ("/more/more", 2, PageRole::Active),
            ]
        );
    }

    // A location below the deepest known route keeps every ancestor receding.
    #[test]
    fn unknown_descendant_has_no_active_page() {
        let table = RouteTable::default();
        let pages = build_stack(&table, "/more/more/extra");
        assert_eq!(pages.len(), 3);
        assert!(pages.iter().all(|d| d.role == PageRole::Receding));
    }

    #[test]
    fn malformed_location_yields_empty_stack() {
        let table = RouteTable::default();
        assert!(build_stack(&table, "").is_empty());
        assert!(build_stack(&table, "more").is_empty());
    }

    #[test]
    fn empty_table_yields_empty_stack() {
        let none: [&str; 0] = [];
        let table = RouteTable::new(none).unwrap();
        assert_eq!(build_stack(&table, "/"), vec![]);
        assert!(build_transition_stack(&table, "/", Some("/more")).is_empty());
        let v = view(&table, "/more", None);
        assert!(v.is_not_found());
        assert!(v.back_visible);
    }

    #[test]
    fn siblings_are_filtered_by_branch() {
        let table = RouteTable::new(["/", "/a", "/b", "/a/x"]).unwrap();
        assert_eq!(
            summary(&build_stack(&table, "/a/x")),
            vec![
                ("/", 0, PageRole::Receding),
                ("/a", 1, PageRole::Receding),
                ("/a/x", 3, PageRole::Active),
            ]
        );
        assert_eq!(
            summary(&build_stack(&table, "/b")),
            vec![("/", 0, PageRole::Receding), ("/b", 2, PageRole::Active)]
        );
    }

    #[test]
    fn pending_descent_marks_entering_page() {
        let table = RouteTable::default();
        let pages = build_transition_stack(&table, "/more", Some("/more/more"));
        assert_eq!(
            summary(&pages),
            vec![
                ("/", 0, PageRole::Receding),
                ("/more", 1, PageRole::Receding),
                ("/more/more", 2, PageRole::Entering),
            ]
        );
    }

    // Skipping a level still recedes the intermediate page.
    #[test]
    fn pending_descent_across_levels() {
        let table = RouteTable::new(["/", "/a", "/a/b", "/a/b/c"]).unwrap();
        let pages = build_transition_stack(&table, "/a", Some("/a/b/c"));
        assert_eq!(
            summary(&pages),
            vec![
                ("/", 0, PageRole::Receding),
                ("/a", 1, PageRole::Receding),
                ("/a/b", 2, PageRole::Receding),
                ("/a/b/c", 3, PageRole::Entering),
            ]
        );
    }

    #[test]
    fn non_descending_target_is_ignored() {
        let table = RouteTable::default();
        assert_eq!(
            build_transition_stack(&table, "/more", Some("/more")),
            build_stack(&table, "/more")
        );
        assert_eq!(
            build_transition_stack(&table, "/more/more", Some("/more")),
            build_stack(&table, "/more/more")
        );
        assert_eq!(
            build_transition_stack(&table, "/more", None),
            build_stack(&table, "/more")
        );
    }

    #[test]
    fn back_visibility() {
        assert!(!back_visible("/"));
        assert!(!back_visible("//"));
        assert!(back_visible("/more"));
        assert!(back_visible("/more/more"));
    }

    #[test]
    fn view_combines_pages_and_back_flag() {
        let table = RouteTable::default();
        let v = view(&table, "/", None);
        assert_eq!(v.displayed, "/");
        assert!(!v.back_visible);
        assert_eq!(v.top().map(|d| d.role), Some(PageRole::Active));
        let v = view(&table, "/nowhere", None);
        assert!(v.back_visible);
        assert_eq!(v.pages.len(), 1);
    }
}
