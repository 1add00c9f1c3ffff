//! Потоковое чтение выборок тепловой карты.
//!
//! Файл тепловой карты — это просто последовательность f64 без заголовка.
//! По умолчанию порядок байт платформенный (так файл пишет генератор).

use std::{
    io::{ErrorKind, Read},
    marker::PhantomData,
};

use byteorder::{ByteOrder, NativeEndian};
use hmp_types::{HmpError, HmpResult, HMP_SAMPLE_SIZE};

/// Статистика, накопленная [`SampleReader`] в процессе чтения.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SampleStats {
    /// Успешно декодированных выборок.
    pub samples_decoded: u64,
    /// Всего прочитано байт (включая усечённый хвост).
    pub bytes_read: u64,
    /// Длина усечённой последней записи (0, если её нет).
    pub truncated_tail: usize,
}

/// Потоковый читатель выборок f64.
///
/// Итератор отдаёт `Ok(sample)` для каждой полной 8-байтовой записи,
/// один раз `Err(HmpError::MalformedRecord)` для усечённого хвоста и затем
/// завершается.
pub struct SampleReader<R: Read, B: ByteOrder = NativeEndian> {
    reader: R,
    stats: SampleStats,
    done: bool,
    _order: PhantomData<B>,
}

impl<R: Read, B: ByteOrder> SampleReader<R, B> {
    /// Оборачивает источник. Буферизацию выполняет вызывающий.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            stats: SampleStats::default(),
            done: false,
            _order: PhantomData,
        }
    }

    /// Возвращает следующую выборку или `None` на EOF.
    pub fn next_sample(&mut self) -> Option<HmpResult<f64>> {
        if self.done {
            return None;
        }

        let mut buf = [0u8; HMP_SAMPLE_SIZE];
        let filled = match self.fill(&mut buf) {
            Ok(n) => n,
            Err(e) => {
                self.done = true;
                return Some(Err(HmpError::Io(e)));
            }
        };

        self.stats.bytes_read += filled as u64;

        match filled {
            0 => {
                self.done = true;
                None
            }
            HMP_SAMPLE_SIZE => {
                self.stats.samples_decoded += 1;
                Some(Ok(B::read_f64(&buf)))
            }
            len => {
                self.done = true;
                self.stats.truncated_tail = len;
                Some(Err(HmpError::MalformedRecord {
                    offset: self.stats.samples_decoded * HMP_SAMPLE_SIZE as u64,
                    len,
                }))
            }
        }
    }

    /// Накопленная статистика чтения.
    pub fn stats(&self) -> &SampleStats {
        &self.stats
    }

    // Читает до заполнения буфера или EOF, возвращает число байт.
    fn fill(
        &mut self,
        buf: &mut [u8; HMP_SAMPLE_SIZE],
    ) -> std::io::Result<usize> {
        let mut filled = 0;

        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(filled)
    }
}

impl<R: Read, B: ByteOrder> Iterator for SampleReader<R, B> {
    type Item = HmpResult<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_sample()
    }
}
