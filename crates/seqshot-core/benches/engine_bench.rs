use criterion::{Criterion, black_box, criterion_group, criterion_main};
use seqshot_core::{Engine, EngineConfig};

fn bench_engine(c: &mut Criterion) {
    let cached = Engine::with_defaults().unwrap();
    let uncached = Engine::new(EngineConfig::new().with_cache(false)).unwrap();

    let inputs = vec![
        "/projects/production/SQ01/SH010/assets/character.ma",
        "/projects/production/ABC01_010/assets/character.ma",
        "/projects/production/SEQ01/assets/character.ma",
        "/projects/production/assets/character.ma",
        "/projects/production/SEQ001__SH0010/assets/character.ma",
    ];

    c.bench_function("match_path_single", |b| {
        b.iter(|| uncached.get_sequence_and_shot(black_box(inputs[0])));
    });

    c.bench_function("match_path_batch_5", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = uncached.get_sequence_and_shot(black_box(input));
            }
        });
    });

    c.bench_function("cached_batch_5", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = cached.get_sequence_and_shot(black_box(input));
            }
        });
    });
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
