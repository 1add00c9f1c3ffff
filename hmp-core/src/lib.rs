//! Библиотека растеризации тепловых карт hmp
//!
//! Читает поток f64 (шаги времени × треки) и строит RGB-растр:
//! положительные значения — красный канал, отрицательные — синий.
//!
//! # Быстрый старт
//!
//! ```no_run
//! use std::{fs::File, io::BufReader};
//!
//! use hmp_core::{HeatmapRaster, SampleReader, VolumeScale};
//! use hmp_types::GridDims;
//!
//! let dims = GridDims::new(100, 64)?;
//! let mut raster = HeatmapRaster::new(dims, VolumeScale::new(1000.0)?);
//!
//! let file = BufReader::new(File::open("book.hmp")?);
//! let mut reader: SampleReader<_> = SampleReader::new(file);
//! for sample in &mut reader {
//!     raster.push(sample?)?;
//! }
//!
//! raster.finish()?.save("book.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod raster;
pub mod sample;
pub mod scale;
pub mod stats;

pub use hmp_types::{GridDims, HmpError, HmpResult, HMP_SAMPLE_SIZE};
pub use raster::*;
pub use sample::*;
pub use scale::*;
pub use stats::*;

/// Версия библиотеки.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
