//! Performance benchmarks for the payroll reconciliation engine.
//!
//! Verifies that a full recalculation pass stays cheap enough to re-run on
//! every edit:
//! - Single-day month: well under 100μs mean
//! - Full 31-day month with mixed categories: < 1ms mean
//! - Batch of 100 employee-months: < 100ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;

use payslip_engine::calculation::compute;
use payslip_engine::config::ConfigLoader;
use payslip_engine::models::{EmployeeProfile, RawDay, RawMonthDataset};

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/il2025").expect("Failed to load config")
}

fn worked(start: &str, end: &str) -> RawDay {
    RawDay {
        start_time: Some(start.to_string()),
        end_time: Some(end.to_string()),
        ..Default::default()
    }
}

/// A month exercising every calculation path: ordinary days, overtime,
/// night shifts, Saturdays, sick days and a vacation day.
fn full_month_dataset() -> RawMonthDataset {
    let mut days = Vec::with_capacity(31);
    for i in 0..31 {
        days.push(match i % 7 {
            0 => worked("08:00", "16:00"),
            1 => worked("08:00", "19:00"),
            2 => worked("22:00", "06:00"),
            3 => worked("08:00", "20:00"),
            4 => RawDay {
                sick_mark: Some("1".to_string()),
                ..Default::default()
            },
            5 => RawDay {
                vacation_mark: Some("1".to_string()),
                ..Default::default()
            },
            _ => RawDay::default(),
        });
    }

    RawMonthDataset {
        employee: EmployeeProfile::with_rate("emp_001", Decimal::new(5250, 2)),
        year: 2025,
        month: 7,
        days,
    }
}

fn single_day_dataset() -> RawMonthDataset {
    RawMonthDataset {
        employee: EmployeeProfile::with_rate("emp_001", Decimal::new(50, 0)),
        year: 2025,
        month: 7,
        days: vec![worked("08:00", "16:00")],
    }
}

fn bench_single_day(c: &mut Criterion) {
    let config = load_config();
    let dataset = single_day_dataset();

    c.bench_function("compute_single_day", |b| {
        b.iter(|| compute(black_box(&dataset), black_box(&config)))
    });
}

fn bench_full_month(c: &mut Criterion) {
    let config = load_config();
    let dataset = full_month_dataset();

    c.bench_function("compute_full_month", |b| {
        b.iter(|| compute(black_box(&dataset), black_box(&config)))
    });
}

fn bench_batches(c: &mut Criterion) {
    let config = load_config();
    let dataset = full_month_dataset();

    let mut group = c.benchmark_group("compute_batch");
    for batch_size in [10, 100] {
        group.throughput(Throughput::Elements(batch_size));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &batch_size,
            |b, &size| {
                b.iter(|| {
                    for _ in 0..size {
                        black_box(compute(black_box(&dataset), black_box(&config)));
                    }
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_single_day, bench_full_month, bench_batches);
criterion_main!(benches);
