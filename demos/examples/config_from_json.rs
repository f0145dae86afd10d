// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading a `TransitionConfig` from JSON.
//!
//! Route tables are validated while deserializing, so a table that lists a
//! child before its parent is rejected up front.
//!
//! Run:
//! - `cargo run -p understory_demos --example config_from_json`

use core::time::Duration;

use understory_page_stack::config::TransitionConfig;
use understory_page_stack::stack::build_stack;

fn main() {
    let json = r#"{
        "route_table": ["/", "/settings", "/settings/account"],
        "delay": { "secs": 0, "nanos": 300000000 }
    }"#;
    let config: TransitionConfig = serde_json::from_str(json).expect("valid config");
    assert_eq!(config.delay, Duration::from_millis(300));
    for d in build_stack(&config.route_table, "/settings/account") {
        println!("  z={} {:<18} {:?}", d.depth, d.path, d.role);
    }

    let bad = r#"{ "route_table": ["/", "/settings/account", "/settings"] }"#;
    let err = serde_json::from_str::<TransitionConfig>(bad).unwrap_err();
    println!("rejected: {err}");

    // Missing fields fall back to the defaults.
    let config: TransitionConfig = serde_json::from_str("{}").expect("defaults");
    assert_eq!(config, TransitionConfig::default());
}
