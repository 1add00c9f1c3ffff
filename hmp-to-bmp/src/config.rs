use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use clap::Parser;
use hmp_core::VolumeScale;
use hmp_types::GridDims;
use image::ImageFormat;

use crate::{ConvertError, ConvertResult};

/// Строка подсказки, печатаемая при `-h` или неверном числе аргументов.
pub const USAGE: &str = "hmp_to_bmp src dst tim_nb tck_nb vol_ref";

/// Число позиционных аргументов.
pub const ARG_COUNT: usize = 5;

#[derive(Parser, Debug)]
#[command(
    name = "hmp_to_bmp",
    disable_help_flag = true,
    disable_version_flag = true,
    allow_negative_numbers = true,
    color = clap::ColorChoice::Never
)]
struct Cli {
    /// Исходный файл тепловой карты (поток f64)
    #[arg(allow_hyphen_values = true)]
    src: PathBuf,
    /// Путь к выходному изображению (формат по расширению)
    #[arg(allow_hyphen_values = true)]
    dst: PathBuf,
    /// Количество шагов времени (ширина)
    tim_nb: u32,
    /// Количество треков (высота)
    tck_nb: u32,
    /// Опорный объём: выборки должны лежать в [-vol_ref, vol_ref]
    vol_ref: f64,
}

/// Что делать после разбора аргументов.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    /// Напечатать [`USAGE`] и выйти с кодом 0.
    Usage,
    /// Выполнить преобразование.
    Convert(ConvertConfig),
}

/// Полная конфигурация преобразования.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertConfig {
    /// Путь к исходной тепловой карте
    pub src: PathBuf,
    /// Путь к выходному изображению
    pub dst: PathBuf,
    /// Размерность сетки
    pub dims: GridDims,
    /// Опорный объём (конечный, > 0)
    pub vol_ref: f64,
    /// Формат изображения, выведенный из расширения `dst`
    pub format: ImageFormat,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl Invocation {
    /// Разбирает полный `argv` (включая имя программы).
    ///
    /// `-h` в любой позиции или число аргументов, отличное от пяти, дают
    /// [`Invocation::Usage`]; это не ошибка.
    pub fn from_args<I, T>(args: I) -> ConvertResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let user_args = args.get(1..).unwrap_or_default();

        if user_args.len() != ARG_COUNT || user_args.iter().any(|a| a == "-h") {
            return Ok(Invocation::Usage);
        }

        let cli = Cli::try_parse_from(&args)?;
        let config = ConvertConfig::new(cli.src, cli.dst, cli.tim_nb, cli.tck_nb, cli.vol_ref)?;

        Ok(Invocation::Convert(config))
    }
}

impl ConvertConfig {
    /// Проверяет размерность, опорный объём и формат назначения.
    pub fn new(
        src: impl Into<PathBuf>,
        dst: impl Into<PathBuf>,
        tim_nb: u32,
        tck_nb: u32,
        vol_ref: f64,
    ) -> ConvertResult<Self> {
        let dims = GridDims::new(tim_nb, tck_nb)?;
        let vol_ref = VolumeScale::new(vol_ref)?.vol_ref();
        let dst = dst.into();
        let format = resolve_format(&dst)?;

        Ok(Self {
            src: src.into(),
            dst,
            dims,
            vol_ref,
            format,
        })
    }

    /// Шкала для растеризации.
    pub fn scale(&self) -> ConvertResult<VolumeScale> {
        Ok(VolumeScale::new(self.vol_ref)?)
    }
}

/// Определяет формат изображения по расширению файла.
///
/// Формат должен поддерживать запись в текущей сборке (`png`, `bmp`).
pub fn resolve_format(path: &Path) -> ConvertResult<ImageFormat> {
    let format = ImageFormat::from_path(path)
        .map_err(|_| ConvertError::UnsupportedFormat(path.display().to_string()))?;

    if !format.writing_enabled() {
        return Err(ConvertError::UnsupportedFormat(format!(
            "{} ({format:?} encoding is not available)",
            path.display()
        )));
    }

    Ok(format)
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
