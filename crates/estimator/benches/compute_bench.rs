use criterion::{black_box, criterion_group, criterion_main, Criterion};

use estimator::units::convert_transport_units;
use estimator::{
    compute_emissions, ConsumptionField, ConsumptionInput, ConversionFactors, DistanceUnit,
};

fn household() -> ConsumptionInput {
    ConsumptionField::all()
        .enumerate()
        .fold(ConsumptionInput::default(), |input, (i, field)| {
            input.with(field, 50.0 + i as f64 * 25.0)
        })
}

fn bench_compute(c: &mut Criterion) {
    let input = household();
    let factors = ConversionFactors::default();

    c.bench_function("compute_emissions_km", |b| {
        b.iter(|| compute_emissions(black_box(&input), black_box(&factors), DistanceUnit::Km))
    });

    c.bench_function("compute_emissions_and_shares", |b| {
        b.iter(|| {
            let r = compute_emissions(black_box(&input), black_box(&factors), DistanceUnit::Miles);
            (r.annual_total(), r.scope_detail_lines(estimator::shares::Scope::Scope3))
        })
    });

    c.bench_function("convert_transport_units", |b| {
        b.iter(|| {
            convert_transport_units(
                black_box(&input.transport),
                DistanceUnit::Km,
                DistanceUnit::Miles,
            )
        })
    });
}

fn bench_calculator_frame(c: &mut Criterion) {
    use estimator::test_harness::TestCalculator;

    let mut calc = TestCalculator::new();
    let mut value = 0.0;
    c.bench_function("calculator_edit_frame", |b| {
        b.iter(|| {
            value += 1.0;
            calc.set(ConsumptionField::Electricity, value);
            black_box(calc.results().total)
        })
    });
}

criterion_group!(benches, bench_compute, bench_calculator_frame);
criterion_main!(benches);
