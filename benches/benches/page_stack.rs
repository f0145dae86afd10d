// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_page_stack::config::TransitionConfig;
use understory_page_stack::route::RouteTable;
use understory_page_stack::scheduler::TransitionScheduler;
use understory_page_stack::stack::{build_stack, build_transition_stack};

/// A single chain `/`, `/l1`, `/l1/l2`, ... of `levels` entries.
fn gen_chain_table(levels: usize) -> RouteTable {
    let mut paths = vec![String::from("/")];
    let mut cur = String::new();
    for i in 1..levels {
        cur.push_str(&format!("/l{i}"));
        paths.push(cur.clone());
    }
    RouteTable::new(paths).unwrap()
}

/// A root with `fanout` siblings, each with `fanout` children.
fn gen_wide_table(fanout: usize) -> RouteTable {
    let mut paths = vec![String::from("/")];
    for a in 0..fanout {
        paths.push(format!("/s{a}"));
    }
    for a in 0..fanout {
        for b in 0..fanout {
            paths.push(format!("/s{a}/c{b}"));
        }
    }
    RouteTable::new(paths).unwrap()
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

/// Navigation requests walking up and down a chain table.
fn gen_walk(table: &RouteTable, count: usize) -> Vec<(String, Duration)> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let paths = table.paths();
    (0..count)
        .map(|_| {
            let p = paths[(rng.next_u64() as usize) % paths.len()].clone();
            let gap = Duration::from_millis(rng.next_u64() % 800);
            (p, gap)
        })
        .collect()
}

fn bench_build_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_stack");
    for &levels in &[3usize, 16, 64] {
        let table = gen_chain_table(levels);
        let leaf = table.paths().last().unwrap().clone();
        let parent = table.paths()[levels.saturating_sub(2)].clone();
        group.throughput(Throughput::Elements(levels as u64));
        group.bench_function(format!("chain_leaf_n{levels}"), |b| {
            b.iter(|| black_box(build_stack(&table, black_box(&leaf))));
        });
        group.bench_function(format!("chain_pending_n{levels}"), |b| {
            b.iter(|| {
                black_box(build_transition_stack(
                    &table,
                    black_box(&parent),
                    Some(black_box(&leaf)),
                ))
            });
        });
    }
    for &fanout in &[4usize, 16] {
        let table = gen_wide_table(fanout);
        let target = format!("/s{}/c{}", fanout - 1, fanout - 1);
        group.throughput(Throughput::Elements(table.len() as u64));
        group.bench_function(format!("wide_fanout{fanout}"), |b| {
            b.iter(|| black_box(build_stack(&table, black_box(&target))));
        });
    }
    group.finish();
}

fn bench_scheduler(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler");
    let table = gen_chain_table(8);
    let walk = gen_walk(&table, 1024);
    let config = TransitionConfig::default().with_route_table(table);
    group.throughput(Throughput::Elements(walk.len() as u64));
    group.bench_function("navigate_poll_walk_1024", |b| {
        b.iter_batched(
            || TransitionScheduler::<Duration>::new(config.clone(), "/"),
            |mut s| {
                let mut now = Duration::ZERO;
                for (path, gap) in &walk {
                    now += *gap;
                    let _ = s.poll(now);
                    black_box(s.on_navigate(path, now));
                }
                black_box(s.view());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_build_stack, bench_scheduler);
criterion_main!(benches);
