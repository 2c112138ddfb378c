use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use vitrine::animation::{
    EasingFunction, Tween, TweenAttribute, TweenKey, TweenScheduler,
};
use vitrine::scene::SceneRegistry;
use web_time::{Duration, Instant};

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::ExponentialInOut;
    c.bench_function("exponential_in_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

fn scheduler_update_benchmark(c: &mut Criterion) {
    let mut registry = SceneRegistry::grid(5.0, 10.0, Vec3::splat(0.5));
    let mut scheduler = TweenScheduler::new();
    let start = Instant::now();

    // One in-flight tween per grid object, the worst realistic case.
    for object in 0..9u32 {
        scheduler.start(Tween::new(
            TweenKey {
                object,
                attribute: TweenAttribute::Position,
            },
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, 25.0),
            start,
            Duration::from_secs(3600),
            EasingFunction::ExponentialInOut,
        ));
    }

    let mid = start + Duration::from_secs(1800);
    c.bench_function("scheduler_update_9_tweens", |b| {
        b.iter(|| scheduler.update(black_box(mid), &mut registry))
    });
}

criterion_group!(benches, easing_benchmark, scheduler_update_benchmark);
criterion_main!(benches);
