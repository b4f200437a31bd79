use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use trunfo::compare::{compute, Comparator};
use trunfo::core::{Attribute, Card, CardBuilder};

fn make_card(population: u64, area: f64) -> Card {
    CardBuilder::new()
        .state("CE")
        .code("A01")
        .name("Mucambo")
        .population(population)
        .area(area)
        .gdp(1_000.0)
        .landmarks(3)
        .build()
        .unwrap()
}

fn bench_compute(c: &mut Criterion) {
    let card = make_card(14_000, 190.6);
    let mut group = c.benchmark_group("compute");
    for attribute in Attribute::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(attribute.name()),
            &attribute,
            |b, &attribute| b.iter(|| compute(std::hint::black_box(&card), attribute)),
        );
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let comparator = Comparator::default();
    let mut group = c.benchmark_group("resolve");

    // Primary decides
    let card1 = make_card(1_000, 10.0);
    let card2 = make_card(2_000, 10.0);
    group.bench_function("primary", |b| {
        b.iter(|| {
            comparator.resolve(
                std::hint::black_box(&card1),
                std::hint::black_box(&card2),
                Attribute::Density,
                Attribute::Gdp,
            )
        })
    });

    // Infinite densities tie, secondary decides
    let empty1 = make_card(1_000, 0.0);
    let empty2 = make_card(2_000, 0.0);
    group.bench_function("secondary", |b| {
        b.iter(|| {
            comparator.resolve(
                std::hint::black_box(&empty1),
                std::hint::black_box(&empty2),
                Attribute::Density,
                Attribute::Population,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, bench_compute, bench_resolve);
criterion_main!(benches);
