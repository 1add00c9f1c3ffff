use crate::error::{HmpError, HmpResult};

/// Размер одной выборки тепловой карты в байтах (f64).
pub const HMP_SAMPLE_SIZE: usize = 8;

/// Размерность тепловой карты: время × треки.
///
/// Столбец изображения соответствует шагу времени, строка — треку.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    /// Количество шагов времени (ширина изображения)
    pub tim_nb: u32,
    /// Количество треков (высота изображения)
    pub tck_nb: u32,
}

impl GridDims {
    pub fn new(
        tim_nb: u32,
        tck_nb: u32,
    ) -> HmpResult<Self> {
        if tim_nb == 0 {
            return Err(HmpError::invalid_dimensions("tim_nb must be > 0"));
        }

        if tck_nb == 0 {
            return Err(HmpError::invalid_dimensions("tck_nb must be > 0"));
        }

        Ok(Self { tim_nb, tck_nb })
    }

    /// Количество ячеек сетки.
    pub fn capacity(&self) -> u64 {
        self.tim_nb as u64 * self.tck_nb as u64
    }

    /// Ожидаемый размер исходного файла в байтах.
    pub fn expected_bytes(&self) -> u64 {
        self.capacity() * HMP_SAMPLE_SIZE as u64
    }

    /// Координата `(столбец, строка)` выборки с порядковым номером `index`.
    ///
    /// Заполнение по столбцам, внутри столбца снизу вверх: первая выборка
    /// попадает в `(0, tck_nb - 1)`, `tck_nb`-я в `(0, 0)`, следующая в
    /// `(1, tck_nb - 1)`. `None`, если столбец выходит за `tim_nb`.
    pub fn position(
        &self,
        index: u64,
    ) -> Option<(u32, u32)> {
        let tck_nb = self.tck_nb as u64;
        let col = index / tck_nb;

        if col >= self.tim_nb as u64 {
            return None;
        }

        let row = tck_nb - 1 - index % tck_nb;

        Some((col as u32, row as u32))
    }
}
