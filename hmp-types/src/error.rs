use thiserror::Error;

/// Результат для операций hmp
pub type HmpResult<T> = std::result::Result<T, HmpError>;

/// Типы ошибок разбора и растеризации тепловой карты.
#[derive(Debug, Error)]
pub enum HmpError {
    /// Нулевая размерность сетки
    #[error("Invalid grid dimensions: {0}")]
    InvalidDimensions(String),

    /// Опорный объём должен быть конечным и > 0
    #[error("Invalid volume reference: {0}")]
    InvalidVolumeRef(f64),

    /// Выборка вне диапазона [-vol_ref, vol_ref]
    #[error("Sample #{index} out of range: {value} not in [-{vol_ref}, {vol_ref}]")]
    SampleOutOfRange {
        index: u64,
        value: f64,
        vol_ref: f64,
    },

    /// Выборок больше, чем вмещает сетка
    #[error("Grid overrun: sample #{index} does not fit into {capacity} cells")]
    GridOverrun { index: u64, capacity: u64 },

    /// Выборок меньше, чем вмещает сетка
    #[error("Incomplete grid: {written} of {expected} cells written")]
    IncompleteGrid { written: u64, expected: u64 },

    /// Усечённая запись в конце потока (меньше 8 байт)
    #[error("Malformed record at byte {offset}: {len} of 8 bytes")]
    MalformedRecord { offset: u64, len: usize },

    /// Ошибки ввода/вывода (автоконвертируются из std::io::Error)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HmpError {
    /// Удобные конструкторы
    pub fn invalid_dimensions<S: Into<String>>(s: S) -> Self {
        Self::InvalidDimensions(s.into())
    }

    /// `true` для ошибки усечённой записи, после которой чтение
    /// прекращается без аварии.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }
}
