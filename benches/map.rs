use criterion::{black_box, criterion_group, criterion_main, Criterion};
use melodies::{functions::*, runtime::*, scope::Scope};

pub fn map_benchmark(c: &mut Criterion) {
    let mut scope = Scope::default();
    scope.setup_globals();

    let list = scope
        .call_function("range", vec![MelodyValue::Number(5000)])
        .unwrap();
    let square = MelodyValue::function(SquareFunc);
    let square_lambda = MelodyValue::function(Lambda::new(|x: Number| x.checked_mul(x)));

    let mut group = c.benchmark_group("map");
    group.significance_level(0.1).sample_size(10);

    group.bench_function("square over 5000 numbers", |b| {
        b.iter(|| {
            scope
                .call_function("map", vec![square.clone(), black_box(list.clone())])
                .unwrap()
        })
    });

    group.bench_function("lambda over 5000 numbers", |b| {
        b.iter(|| {
            scope
                .call_function("map", vec![square_lambda.clone(), black_box(list.clone())])
                .unwrap()
        })
    });
}

criterion_group!(benches, map_benchmark);
criterion_main!(benches);
