use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array1;

use svy21::batch;
use svy21::proj::bounds::Bounded;
use svy21::{Projection, Svy21};

fn make_geodetic(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let lat = 1.2 + (i as f64 / n as f64) * 0.3;
            let lon = 103.6 + (i as f64 / n as f64) * 0.4;
            (lat, lon)
        })
        .collect()
}

fn make_planar(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let northing = 20_000.0 + (i as f64 / n as f64) * 30_000.0;
            let easting = 5_000.0 + (i as f64 / n as f64) * 40_000.0;
            (northing, easting)
        })
        .collect()
}

fn bench_scalar(c: &mut Criterion) {
    let p = Svy21::new();
    let (lat, lon) = (1.344_625_544_324_117_7, 103.727_943_780_417_92);
    let (northing, easting) = (36_307.704, 16_272.970);

    c.bench_function("forward_single", |b| {
        b.iter(|| p.forward(black_box(lat), black_box(lon)))
    });

    c.bench_function("inverse_single", |b| {
        b.iter(|| p.inverse(black_box(northing), black_box(easting)))
    });
}

fn bench_batch_throughput(c: &mut Criterion) {
    // Points/sec for the slice-based entry points
    let n = 1_000_000_usize;
    let p = Svy21::new();
    let geodetic = make_geodetic(n);
    let planar = make_planar(n);
    let mut coords = geodetic.clone();

    c.bench_function("forward_batch_1M", |b| {
        b.iter(|| {
            coords.copy_from_slice(&geodetic);
            p.forward_batch(&mut coords).unwrap();
        });
    });

    c.bench_function("forward_par_1M", |b| {
        b.iter(|| {
            coords.copy_from_slice(&geodetic);
            p.forward_par(&mut coords).unwrap();
        });
    });

    c.bench_function("inverse_par_1M", |b| {
        b.iter(|| {
            coords.copy_from_slice(&planar);
            p.inverse_par(&mut coords).unwrap();
        });
    });

    let bounded = Bounded::svy21();
    c.bench_function("bounded_forward_batch_1M", |b| {
        b.iter(|| {
            coords.copy_from_slice(&geodetic);
            bounded.forward_batch(&mut coords).unwrap();
        });
    });
}

fn bench_arrays(c: &mut Criterion) {
    let n = 1_000_000_usize;
    let p = Svy21::new();
    let (lat, lon): (Vec<f64>, Vec<f64>) = make_geodetic(n).into_iter().unzip();
    let lat = Array1::from(lat);
    let lon = Array1::from(lon);

    c.bench_function("forward_arrays_1M", |b| {
        b.iter(|| batch::forward_arrays(&p, lat.view(), lon.view()))
    });
}

fn bench_thread_scaling(c: &mut Criterion) {
    let n = 1_000_000_usize;
    let p = Svy21::new();
    let planar = make_planar(n);
    let mut coords = planar.clone();

    for &threads in &[1, 2, 4, 8] {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap();

        c.bench_function(&format!("inverse_par_threads_{threads}_1M"), |b| {
            b.iter(|| {
                coords.copy_from_slice(&planar);
                pool.install(|| p.inverse_par(&mut coords).unwrap());
            });
        });
    }
}

criterion_group!(
    benches,
    bench_scalar,
    bench_batch_throughput,
    bench_arrays,
    bench_thread_scaling
);
criterion_main!(benches);
