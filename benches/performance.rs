use criterion::{black_box, criterion_group, criterion_main, Criterion};
use proposal_card::effects::ParticleField;
use rand::SeedableRng;
use rand::rngs::StdRng;

// The window and GL parts are out of reach here, but the particle
// simulation carries the per-frame cost

fn benchmark_ambient_step(c: &mut Criterion) {
    c.bench_function("ambient_field_step", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::new(&mut rng, 1920.0, 1080.0, 1.0);
        b.iter(|| {
            field.step();
            black_box(field.particles().len())
        })
    });
}

fn benchmark_curtain_load(c: &mut Criterion) {
    c.bench_function("step_under_curtain_load", |b| {
        let mut rng = StdRng::seed_from_u64(2);
        let mut field = ParticleField::new(&mut rng, 1920.0, 1080.0, 1.0);
        // Roughly two seconds of curtain batches in flight
        for _ in 0..60 {
            field.spawn_curtain_batch(&mut rng);
        }
        b.iter(|| {
            let mut f = field.clone();
            f.step();
            black_box(f.hearts().len())
        })
    });
}

fn benchmark_burst_spawn(c: &mut Criterion) {
    c.bench_function("spawn_huge_explosion", |b| {
        let mut rng = StdRng::seed_from_u64(3);
        let field = ParticleField::new(&mut rng, 1920.0, 1080.0, 1.0);
        b.iter(|| {
            let mut f = field.clone();
            for _ in 0..5 {
                f.spawn_burst(&mut rng, 960.0, 540.0, 30);
            }
            black_box(f.hearts().len())
        })
    });
}

criterion_group!(
    benches,
    benchmark_ambient_step,
    benchmark_curtain_load,
    benchmark_burst_spawn
);
criterion_main!(benches);
