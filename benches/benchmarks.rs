/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rydberg_rs::report::Report;
use rydberg_rs::spectrum::{
    isotope_line_shift, isotope_shift_ratio, line_wavelength, reduced_rydberg,
};
use rydberg_rs::utils::constants::{DEUTERON_MASS, PROTON_MASS};

fn spectrum_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Rydberg Formula");

    group.bench_function("reduced_rydberg", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(reduced_rydberg(black_box(i as f64 * PROTON_MASS)));
            }
        })
    });

    group.bench_function("line_wavelength", |b| {
        b.iter(|| {
            for n in 3..1000 {
                black_box(line_wavelength(black_box(n as f64), black_box(PROTON_MASS)));
            }
        })
    });

    group.bench_function("isotope_shift_ratio", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(isotope_shift_ratio(
                    black_box(DEUTERON_MASS),
                    black_box(i as f64 * PROTON_MASS),
                ));
            }
        })
    });

    group.bench_function("isotope_line_shift", |b| {
        b.iter(|| {
            for n in 3..1000 {
                black_box(isotope_line_shift(black_box(n as f64)));
            }
        })
    });

    group.finish();
}

fn report_benchmark(c: &mut Criterion) {
    c.bench_function("report_render", |b| {
        b.iter(|| black_box(Report::compute().to_string()))
    });
}

criterion_group!(benches, spectrum_benchmark, report_benchmark);
criterion_main!(benches);
