use std::{hint::black_box, io::Cursor};

use byteorder::{NativeEndian, WriteBytesExt};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hmp_core::{GridDims, HeatmapRaster, SampleReader, VolumeScale};
use rand::{rngs::SmallRng, Rng, SeedableRng};

const VOL_REF: f64 = 1_000.0;

fn random_heatmap(cells: usize) -> Vec<u8> {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut raw = Vec::with_capacity(cells * 8);
    for _ in 0..cells {
        raw.write_f64::<NativeEndian>(rng.gen_range(-VOL_REF..=VOL_REF))
            .unwrap();
    }
    raw
}

fn bench_rasterize(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize");

    for &(tim_nb, tck_nb) in &[(256u32, 64u32), (1024, 256), (4096, 512)] {
        let dims = GridDims::new(tim_nb, tck_nb).unwrap();
        let raw = random_heatmap(dims.capacity() as usize);

        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{tim_nb}x{tck_nb}")),
            &raw,
            |b, raw| {
                b.iter(|| {
                    let mut raster = HeatmapRaster::new(dims, VolumeScale::new(VOL_REF).unwrap());
                    let reader: SampleReader<_> = SampleReader::new(Cursor::new(raw.as_slice()));
                    for sample in reader {
                        raster.push(sample.unwrap()).unwrap();
                    }
                    black_box(raster.finish().unwrap())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_rasterize);
criterion_main!(benches);
