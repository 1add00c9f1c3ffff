//! Масштабирование выборок в 8-битную яркость канала.
//!
//! Положительные значения окрашиваются красным, отрицательные — синим.
//! Проверка диапазона и масштабирование — разные шаги: сначала
//! [`VolumeScale::check`], затем [`VolumeScale::level`].

use hmp_types::{HmpError, HmpResult};
use image::Rgb;

/// Максимальная яркость канала.
pub const LEVEL_MAX: f64 = 255.0;

/// Симметричная шкала `[-vol_ref, vol_ref] -> [-255, 255]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeScale {
    vol_ref: f64,
}

impl VolumeScale {
    /// Создаёт шкалу. `vol_ref` должен быть конечным и строго положительным.
    pub fn new(vol_ref: f64) -> HmpResult<Self> {
        if !vol_ref.is_finite() || vol_ref <= 0.0 {
            return Err(HmpError::InvalidVolumeRef(vol_ref));
        }

        Ok(Self { vol_ref })
    }

    pub fn vol_ref(&self) -> f64 {
        self.vol_ref
    }

    /// Проверяет, что выборка лежит в `[-vol_ref, vol_ref]` (границы
    /// включительно). NaN не проходит проверку.
    pub fn check(
        &self,
        index: u64,
        sample: f64,
    ) -> HmpResult<f64> {
        if sample >= -self.vol_ref && sample <= self.vol_ref {
            Ok(sample)
        } else {
            Err(HmpError::SampleOutOfRange {
                index,
                value: sample,
                vol_ref: self.vol_ref,
            })
        }
    }

    /// `trunc(sample * 255 / vol_ref)`, округление к нулю.
    ///
    /// Для проверенной выборки результат лежит в `[-255, 255]`, в том числе
    /// когда `sample * 255` не представимо в f64.
    pub fn level(
        &self,
        sample: f64,
    ) -> i32 {
        let product = sample * LEVEL_MAX;
        let scaled = if product.is_finite() {
            product / self.vol_ref
        } else {
            (sample / self.vol_ref) * LEVEL_MAX
        };

        scaled.trunc().clamp(-LEVEL_MAX, LEVEL_MAX) as i32
    }
}

/// Цвет пикселя для уровня: `< 0` в синий канал, иначе в красный.
/// Зелёный канал всегда 0.
pub fn heat_color(level: i32) -> Rgb<u8> {
    let magnitude = level.unsigned_abs().min(LEVEL_MAX as u32) as u8;

    if level < 0 {
        Rgb([0, 0, magnitude])
    } else {
        Rgb([magnitude, 0, 0])
    }
}
