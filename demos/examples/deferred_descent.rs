// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred commits with a simulated clock.
//!
//! Walks `/` → `/more` → `/more/more` → `/more` → `/` and prints the stack
//! after every change, including the frame where `/more/more` is entering.
//!
//! Run:
//! - `cargo run -p understory_demos --example deferred_descent`

use core::time::Duration;

use understory_page_stack::config::TransitionConfig;
use understory_page_stack::scheduler::{NavigateOutcome, TransitionScheduler};
use understory_page_stack::types::PageRole;

fn print(label: &str, s: &TransitionScheduler) {
    let v = s.view();
    println!("== {label} ==");
    println!("  displayed={} back={}", v.displayed, v.back_visible);
    for d in &v.pages {
        println!("  z={} {:<12} {:?}", d.depth, d.path, d.role);
    }
}

fn main() {
    let ms = Duration::from_millis;
    let mut s = TransitionScheduler::new(TransitionConfig::default(), "/");
    print("start", &s);

    // Leaving the root is never deferred.
    assert_eq!(s.on_navigate("/more", ms(0)), NavigateOutcome::Committed);
    print("t=0 /more", &s);

    // Going deeper keeps `/more` displayed while `/more/more` slides in.
    let deadline = match s.on_navigate("/more/more", ms(100)) {
        NavigateOutcome::Deferred { deadline: Some(deadline) } => deadline,
        other => panic!("expected a deferred commit, got {other:?}"),
    };
    print("t=100 /more/more requested", &s);
    assert_eq!(s.displayed(), "/more");
    assert_eq!(
        s.view().top().map(|d| d.role),
        Some(PageRole::Entering)
    );

    // A duplicate request does not restart the transition.
    assert_eq!(
        s.on_navigate("/more/more", ms(300)),
        NavigateOutcome::Unchanged
    );
    assert_eq!(s.deadline(), Some(deadline));

    assert!(!s.poll(ms(599)));
    assert!(s.poll(deadline));
    print("t=600 timer fired", &s);

    // Going back up swaps content immediately.
    assert_eq!(s.on_navigate("/more", ms(700)), NavigateOutcome::Committed);
    print("t=700 back to /more", &s);
    assert_eq!(s.on_navigate("/", ms(800)), NavigateOutcome::Committed);
    print("t=800 home", &s);

    s.shutdown();
}
