// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page stacks for each level of the default route table.
//!
//! Run:
//! - `cargo run -p understory_demos --example page_stack_basics`

use understory_page_stack::route::RouteTable;
use understory_page_stack::stack::{back_visible, build_stack, view};
use understory_page_stack::types::PageRole;

fn main() {
    let table = RouteTable::default();

    for displayed in ["/", "/more", "/more/more", "/missing"] {
        let pages = build_stack(&table, displayed);
        println!(
            "== {displayed} (back: {}) ==",
            if back_visible(displayed) { "shown" } else { "hidden" }
        );
        for d in &pages {
            println!("  z={} {:<12} {:?}", d.depth, d.path, d.role);
        }
    }

    let pages = build_stack(&table, "/more");
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].path, "/");
    assert_eq!(pages[0].role, PageRole::Receding);
    assert_eq!(pages[1].path, "/more");
    assert_eq!(pages[1].role, PageRole::Active);

    // `/missing` only matches the root, which recedes with nothing active above it.
    let pages = build_stack(&table, "/missing");
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].role, PageRole::Receding);

    // An empty table knows no routes, so every location renders nothing.
    let empty = RouteTable::new(Vec::<&str>::new()).expect("empty tables are valid");
    assert!(empty.is_empty());
    let v = view(&empty, "/more", None);
    println!("== /more with no routes (not found: {}) ==", v.is_not_found());
    assert!(v.is_not_found());
    assert!(!view(&table, "/more", None).is_not_found());
}
