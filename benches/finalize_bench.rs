use criterion::{criterion_group, criterion_main, Criterion};
use rift_mc::count::CountExtraction;
use rift_mc::key::parse_keys;
use rift_mc::recorder::{resolve_keys, KeyPhases};
use rift_mc::test_utils::MockHost;
use rift_mc::{CommandRecorder, Mode, Phase};
use std::hint::black_box;

fn record_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_cycle");

    group.bench_function("plain_command", |b| {
        let mut recorder = CommandRecorder::new();
        let mut host = MockHost::new();
        b.iter(|| {
            host.start_command("paste-after", "3p");
            recorder.begin(&host);
            black_box(recorder.finish(&mut host));
        })
    });

    group.bench_function("operator_command", |b| {
        let mut recorder = CommandRecorder::new();
        let mut host = MockHost::new();
        b.iter(|| {
            host.start_command("delete", "d2w");
            recorder.begin(&host);
            host.mode = Mode::Operator;
            host.set_keys("2w");
            recorder.save_operator(Phase::Pre, &host);
            recorder.save_operator(Phase::Post, &host);
            host.mode = Mode::Normal;
            black_box(recorder.finish(&mut host));
        })
    });

    group.finish();
}

fn resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_keys");

    // Long insert session replayed as motion keys
    let pre = parse_keys("c").unwrap_or_default();
    let motion = "abcdefghij".repeat(50);
    let motion = parse_keys(&motion).unwrap_or_default();

    group.bench_function("long_motion", |b| {
        let phases = KeyPhases {
            pre: &pre,
            motion_post: &motion,
            ..KeyPhases::default()
        };
        let extraction = CountExtraction::default();
        b.iter(|| black_box(resolve_keys(black_box(&phases), &extraction)))
    });

    group.finish();
}

criterion_group!(benches, record_cycle, resolve);
criterion_main!(benches);
