use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

use hmp_core::{HeatmapRaster, RasterStats, SampleReader, SampleStats};
use hmp_types::HmpError;
use log::{debug, info, warn};

use crate::{ConvertConfig, ConvertResult};

/// Строка, печатаемая при усечённой последней записи.
pub const MALFORMED_MSG: &str = "Malformed heatmap.";

/// Итог успешного преобразования.
#[derive(Debug, Clone)]
pub struct ConvertReport {
    /// Статистика растеризации.
    pub raster: RasterStats,
    /// Статистика чтения исходного файла.
    pub samples: SampleStats,
}

impl ConvertReport {
    /// `true`, если поток оканчивался усечённой записью.
    pub fn malformed_tail(&self) -> bool {
        self.samples.truncated_tail > 0
    }
}

/// Преобразователь тепловой карты в изображение (single-threaded).
pub struct HeatmapConverter {
    config: ConvertConfig,
}

impl HeatmapConverter {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Читает исходный файл, строит растр и сохраняет изображение.
    ///
    /// Уровень каждой выборки печатается в `trace` отдельной строкой.
    /// Усечённая последняя запись печатает [`MALFORMED_MSG`] и прекращает
    /// чтение; после этого сетка всё равно должна быть заполнена полностью,
    /// иначе изображение не сохраняется.
    pub fn run<W: Write>(
        &self,
        trace: &mut W,
    ) -> ConvertResult<ConvertReport> {
        let cfg = &self.config;
        let mut raster = HeatmapRaster::new(cfg.dims, cfg.scale()?);

        let file = File::open(&cfg.src).map_err(HmpError::Io)?;
        let mut reader: SampleReader<_> = SampleReader::new(BufReader::new(file));

        while let Some(result) = reader.next_sample() {
            let sample = match result {
                Ok(s) => s,
                Err(e) if e.is_malformed() => {
                    warn!("{e}");
                    writeln!(trace, "{MALFORMED_MSG}")?;
                    break;
                }
                Err(e) => return Err(e.into()),
            };

            let level = raster.push(sample)?;
            writeln!(trace, "{level}")?;
        }

        let samples = reader.stats().clone();
        drop(reader);

        debug!(
            "Read {} samples ({} bytes) from {:?}",
            samples.samples_decoded, samples.bytes_read, cfg.src
        );

        let stats = raster.stats().clone();
        let image = raster.finish()?;

        image.save_with_format(&cfg.dst, cfg.format)?;

        info!("Saved {:?} ({:?})", cfg.dst, cfg.format);

        Ok(ConvertReport {
            raster: stats,
            samples,
        })
    }
}

/// Преобразует `src` в `dst` за один вызов.
pub fn rasterize<W: Write>(
    src: &Path,
    dst: &Path,
    tim_nb: u32,
    tck_nb: u32,
    vol_ref: f64,
    trace: &mut W,
) -> ConvertResult<ConvertReport> {
    let config = ConvertConfig::new(src, dst, tim_nb, tck_nb, vol_ref)?;

    HeatmapConverter::new(config).run(trace)
}
