// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_presence::presence::Presence;
use understory_presence::types::{
    AnimationEvent, AnimationListeners, AnimationObserver, AnimationSnapshot, CallbackId,
    PresenceHost,
};

/// Host where every node runs `open` while present and `close` otherwise.
struct Host {
    closing: bool,
    next_callback: u64,
}

impl AnimationObserver<u32> for Host {
    fn observe(&mut self, _node: &u32, _listeners: AnimationListeners) {}
    fn unobserve(&mut self, _node: &u32, _listeners: AnimationListeners) {}
}

impl PresenceHost<u32> for Host {
    fn animation_snapshot(&self, _node: &u32) -> AnimationSnapshot {
        AnimationSnapshot::new(if self.closing { "close" } else { "open" }, false)
    }
    fn fill_mode(&self, _node: &u32) -> String {
        String::new()
    }
    fn set_fill_mode(&mut self, _node: &u32, _fill_mode: &str) {}
    fn schedule_callback(&mut self) -> CallbackId {
        self.next_callback += 1;
        CallbackId(self.next_callback)
    }
    fn cancel_callback(&mut self, _callback: CallbackId) {}
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
    fn next_bool(&mut self) -> bool {
        self.next_u64() & 1 == 1
    }
}

fn gen_intents(count: usize) -> Vec<bool> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count).map(|_| rng.next_bool()).collect()
}

fn bench_intent_flips(c: &mut Criterion) {
    let mut group = c.benchmark_group("presence");
    for &n in &[256usize, 4096] {
        let intents = gen_intents(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("intent_flips_n{}", n), |b| {
            b.iter_batched(
                || {
                    let mut host = Host {
                        closing: false,
                        next_callback: 0,
                    };
                    let mut p = Presence::new(true);
                    p.set_node(Some(1), &mut host);
                    (p, host)
                },
                |(mut p, mut host)| {
                    for &present in &intents {
                        host.closing = !present;
                        black_box(p.set_present(present, &mut host));
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_exit_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("presence");
    let cycles = 1024usize;
    group.throughput(Throughput::Elements(cycles as u64));
    group.bench_function("exit_cycle", |b| {
        b.iter_batched(
            || {
                let mut host = Host {
                    closing: false,
                    next_callback: 0,
                };
                let mut p = Presence::new(true);
                p.set_node(Some(1), &mut host);
                (p, host)
            },
            |(mut p, mut host)| {
                for _ in 0..cycles {
                    host.closing = false;
                    p.set_present(true, &mut host);
                    p.on_animation_event(&AnimationEvent::start(1, "open"), &mut host);
                    host.closing = true;
                    p.set_present(false, &mut host);
                    p.on_animation_event(&AnimationEvent::end(1, "close"), &mut host);
                    let id = CallbackId(host.next_callback);
                    black_box(p.on_callback(id, &mut host));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_intent_flips, bench_exit_cycle);
criterion_main!(benches);
