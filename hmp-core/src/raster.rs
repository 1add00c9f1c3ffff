use hmp_types::{GridDims, HmpError, HmpResult};
use image::RgbImage;
use log::debug;

use crate::{heat_color, RasterStats, VolumeScale};

/// Растр тепловой карты, заполняемый по одной выборке.
///
/// Порядок заполнения задаёт [`GridDims::position`]: по столбцам, внутри
/// столбца снизу вверх. Незаполненные пиксели остаются чёрными.
pub struct HeatmapRaster {
    dims: GridDims,
    scale: VolumeScale,
    image: RgbImage,
    stats: RasterStats,
}

impl HeatmapRaster {
    /// Создаёт чёрный растр `tim_nb × tck_nb`.
    pub fn new(
        dims: GridDims,
        scale: VolumeScale,
    ) -> Self {
        Self {
            dims,
            scale,
            image: RgbImage::new(dims.tim_nb, dims.tck_nb),
            stats: RasterStats::default(),
        }
    }

    /// Проверяет, масштабирует и записывает очередную выборку.
    ///
    /// Возвращает уровень `trunc(sample * 255 / vol_ref)`. При ошибке растр
    /// не изменяется.
    pub fn push(
        &mut self,
        sample: f64,
    ) -> HmpResult<i32> {
        let index = self.stats.samples_written;
        let sample = self.scale.check(index, sample)?;
        let level = self.scale.level(sample);

        let (col, row) = self.dims.position(index).ok_or(HmpError::GridOverrun {
            index,
            capacity: self.dims.capacity(),
        })?;

        self.image.put_pixel(col, row, heat_color(level));
        self.stats.record(sample, level);

        Ok(level)
    }

    /// `true`, когда записаны все ячейки.
    pub fn is_complete(&self) -> bool {
        self.stats.samples_written == self.dims.capacity()
    }

    /// Завершает растеризацию: сетка должна быть заполнена полностью.
    pub fn finish(self) -> HmpResult<RgbImage> {
        if !self.is_complete() {
            return Err(HmpError::IncompleteGrid {
                written: self.stats.samples_written,
                expected: self.dims.capacity(),
            });
        }

        debug!(
            "Raster {}x{} complete ({} cells)",
            self.dims.tim_nb,
            self.dims.tck_nb,
            self.stats.samples_written
        );

        Ok(self.image)
    }

    /// Текущий (возможно, частичный) растр.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Накопленная статистика растеризации.
    pub fn stats(&self) -> &RasterStats {
        &self.stats
    }
}
