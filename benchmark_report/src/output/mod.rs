//!
//! Benchmark report output.
//!

pub mod format;
pub mod html;
pub mod json;
pub mod xlsx;


use std::path::Path;

use crate::report::Report;

use self::format::Format;
use self::html::Html;
use self::json::Json;
use self::xlsx::Xlsx;

///
/// Rendered benchmark report.
///
pub enum Output {
    /// A single text file.
    SingleFile(String),
    /// A single spreadsheet file.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
}

impl Output {
    ///
    /// Writes the report to `path`, creating missing parent directories.
    ///
    pub fn write_to_file(self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|error| {
                anyhow::anyhow!("Report directory {parent:?} creating: {error}")
            })?;
        }
        match self {
            Output::SingleFile(content) => {
                std::fs::write(path, content)
                    .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
            }
            Output::SingleFileXlsx(mut workbook) => {
                workbook
                    .save(path)
                    .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
            }
        }
        Ok(())
    }
}

impl TryFrom<(&Report, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from((report, format): (&Report, Format)) -> Result<Self, Self::Error> {
        Ok(match format {
            Format::Html => Html::try_from(report)?.into(),
            Format::Json => Json::try_from(report)?.into(),
            Format::Xlsx => Xlsx::try_from(report)?.into(),
        })
    }
}

impl From<Html> for Output {
    fn from(value: Html) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::SingleFileXlsx(value.finalize())
    }
}
