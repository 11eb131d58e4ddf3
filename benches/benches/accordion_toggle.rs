// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_disclosure::accordion::{Accordion, AccordionKind};
use understory_disclosure::nav::NavKey;
use understory_presence::types::{
    AnimationListeners, AnimationObserver, AnimationSnapshot, CallbackId, PresenceHost,
};

struct Host;

impl AnimationObserver<u32> for Host {
    fn observe(&mut self, _node: &u32, _listeners: AnimationListeners) {}
    fn unobserve(&mut self, _node: &u32, _listeners: AnimationListeners) {}
}

impl PresenceHost<u32> for Host {
    fn animation_snapshot(&self, _node: &u32) -> AnimationSnapshot {
        AnimationSnapshot::default()
    }
    fn fill_mode(&self, _node: &u32) -> String {
        String::new()
    }
    fn set_fill_mode(&mut self, _node: &u32, _fill_mode: &str) {}
    fn schedule_callback(&mut self) -> CallbackId {
        CallbackId(0)
    }
    fn cancel_callback(&mut self, _callback: CallbackId) {}
}

fn build(kind: AccordionKind, n: usize) -> (Accordion<u32>, Vec<String>) {
    let values: Vec<String> = (0..n).map(|i| format!("item-{i}")).collect();
    let mut a = Accordion::new(kind);
    for v in &values {
        a.add_item(v.as_str());
    }
    (a, values)
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("accordion");
    for &n in &[8usize, 64] {
        for (label, kind) in [
            ("single", AccordionKind::Single { collapsible: true }),
            ("multiple", AccordionKind::Multiple),
        ] {
            group.throughput(Throughput::Elements(n as u64));
            group.bench_function(format!("toggle_all_{}_n{}", label, n), |b| {
                b.iter_batched(
                    || build(kind, n),
                    |(mut a, values)| {
                        for v in &values {
                            black_box(a.toggle(v, &mut Host));
                        }
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_focus(c: &mut Criterion) {
    let mut group = c.benchmark_group("accordion");
    let (a, values) = build(AccordionKind::Multiple, 64);
    group.bench_function("focus_cycle_n64", |b| {
        b.iter(|| {
            let mut focused = values[0].as_str();
            for _ in 0..values.len() {
                if let Some(next) = a.focus_target(focused, NavKey::ArrowDown) {
                    focused = next;
                }
            }
            black_box(focused);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_toggle, bench_focus);
criterion_main!(benches);
