use hmp_types::HmpError;
use thiserror::Error;

pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// Ошибка разбора или растеризации тепловой карты
    #[error("Heatmap error: {0}")]
    Hmp(#[from] HmpError),

    /// Ошибка кодирования или записи изображения
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Аргументы командной строки не разобраны
    #[error("Argument error: {0}")]
    Cli(#[from] clap::Error),

    /// Расширение файла назначения не соответствует поддерживаемому формату
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Ошибка записи трассировки в stdout
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
