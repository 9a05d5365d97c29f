use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use cue_timing_core::{
    plan, resolve, Anchor, Easing, GroupSpec, NoticeScheduler, StaggerOrigin, StaggerSpec,
    TimelineEntry,
};

fn bench_stagger_plan(c: &mut Criterion) {
    let spec = StaggerSpec {
        origin: StaggerOrigin::Center,
        curve: Easing::EaseInOut,
        ..StaggerSpec::new(0.05)
    };
    c.bench_function("stagger_plan_100", |b| {
        b.iter(|| plan(black_box(100), black_box(&spec)))
    });
}

fn bench_timeline_resolve(c: &mut Criterion) {
    let entries: Vec<TimelineEntry> = (0..50)
        .map(|i| {
            let mut entry = TimelineEntry::new(format!("entry-{i}"), 0.25);
            entry.anchor = match i % 3 {
                0 => Anchor::Auto,
                1 => Anchor::After(0.05),
                _ => Anchor::Before(0.1),
            };
            if i == 0 {
                entry.anchor = Anchor::Auto;
            }
            if i % 8 == 4 {
                entry.group = Some(GroupSpec {
                    items: 8,
                    stagger: StaggerSpec {
                        curve: Easing::EaseOut,
                        ..StaggerSpec::new(0.03)
                    },
                });
            }
            entry
        })
        .collect();
    c.bench_function("timeline_resolve_50", |b| {
        b.iter(|| resolve(black_box(&entries)))
    });
}

fn bench_scheduler_tick(c: &mut Criterion) {
    c.bench_function("scheduler_tick_100", |b| {
        b.iter_batched(
            || {
                let mut sched = NoticeScheduler::default();
                for i in 0..100 {
                    sched.create(500.0 + i as f64 * 10.0);
                }
                sched.tick(0.0);
                sched
            },
            |mut sched| {
                sched.tick(black_box(750.0));
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_stagger_plan,
    bench_timeline_resolve,
    bench_scheduler_tick
);
criterion_main!(benches);
