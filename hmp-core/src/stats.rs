use std::fmt;

/// Статистика растеризации одной тепловой карты.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterStats {
    /// Записано ячеек.
    pub samples_written: u64,
    /// Уровней > 0 (красный канал).
    pub positive: u64,
    /// Уровней < 0 (синий канал).
    pub negative: u64,
    /// Нулевых уровней (чёрный пиксель).
    pub zero: u64,
    /// Минимальная выборка (`+inf`, пока выборок нет).
    pub min_sample: f64,
    /// Максимальная выборка (`-inf`, пока выборок нет).
    pub max_sample: f64,
}

impl RasterStats {
    pub fn record(
        &mut self,
        sample: f64,
        level: i32,
    ) {
        self.samples_written += 1;

        match level {
            l if l > 0 => self.positive += 1,
            l if l < 0 => self.negative += 1,
            _ => self.zero += 1,
        }

        self.min_sample = self.min_sample.min(sample);
        self.max_sample = self.max_sample.max(sample);
    }
}

impl Default for RasterStats {
    fn default() -> Self {
        Self {
            samples_written: 0,
            positive: 0,
            negative: 0,
            zero: 0,
            min_sample: f64::INFINITY,
            max_sample: f64::NEG_INFINITY,
        }
    }
}

impl fmt::Display for RasterStats {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "  Cells written : {}", self.samples_written)?;
        writeln!(f, "  Positive      : {}", self.positive)?;
        writeln!(f, "  Negative      : {}", self.negative)?;
        writeln!(f, "  Zero          : {}", self.zero)?;

        if self.samples_written > 0 {
            write!(
                f,
                "  Sample range  : [{}, {}]",
                self.min_sample, self.max_sample
            )
        } else {
            write!(f, "  Sample range  : -")
        }
    }
}
