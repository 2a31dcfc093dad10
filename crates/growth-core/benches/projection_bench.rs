use growth_core::{CompoundingFrequency, ContributionFrequency, Projection, ProjectionInput};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");
    for &years in &[10u32, 40, 100] {
        let input = ProjectionInput::try_new(
            25_000.0,
            0.07,
            years,
            500.0,
            ContributionFrequency::Monthly,
            CompoundingFrequency::Daily,
        )
        .expect("valid input");
        group.bench_with_input(BenchmarkId::from_parameter(format!("years_{years}")), &input, |b, input| {
            b.iter(|| black_box(Projection::compute(input)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_projection);
criterion_main!(benches);
