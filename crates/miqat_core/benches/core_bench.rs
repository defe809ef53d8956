use chrono::{FixedOffset, NaiveTime, TimeZone};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use miqat_core::{
    AsrJuristicMethod, CalculationMethod, CalculatorParams, HighLatitudeMethod,
    depression_angle_at, prayer_times, solar_position, time_for_angle,
};
use miqat_time::DstRule;

fn solar_bench(c: &mut Criterion) {
    let jd = 2_457_237.84;

    let mut group = c.benchmark_group("solar");
    group.bench_function("solar_position", |b| {
        b.iter(|| solar_position(black_box(jd)))
    });
    group.bench_function("time_for_angle_fajr", |b| {
        b.iter(|| time_for_angle(black_box(jd), 165.0, 5.0 / 24.0, black_box(47.66)))
    });
    group.finish();
}

fn day_bench(c: &mut Criterion) {
    let Some(offset) = FixedOffset::west_opt(7 * 3600) else {
        return;
    };
    let Some(date) = offset.with_ymd_and_hms(2015, 8, 3, 0, 0, 0).single() else {
        return;
    };
    let params = CalculatorParams::new(
        47.660918,
        -122.136371,
        CalculationMethod::Isna,
        AsrJuristicMethod::Shafii,
    );
    let oslo = CalculatorParams::new(59.9139, 10.7522, CalculationMethod::Mwl, AsrJuristicMethod::Shafii)
        .with_high_latitude(HighLatitudeMethod::AngleBased);

    let mut group = c.benchmark_group("day");
    group.bench_function("prayer_times_isna", |b| {
        b.iter(|| prayer_times(black_box(&date), &params, Some(-7.0), &DstRule::UnitedStates))
    });
    group.bench_function("prayer_times_high_latitude", |b| {
        b.iter(|| prayer_times(black_box(&date), &oslo, Some(2.0), &DstRule::EuropeanUnion))
    });
    let clock = NaiveTime::from_hms_opt(4, 1, 0).unwrap_or_default();
    group.bench_function("depression_angle_at", |b| {
        b.iter(|| depression_angle_at(black_box(&date), clock, &params, Some(-7.0), &DstRule::UnitedStates))
    });
    group.finish();
}

criterion_group!(benches, solar_bench, day_bench);
criterion_main!(benches);
