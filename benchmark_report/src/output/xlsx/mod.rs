//!
//! XLSX output format for benchmark reports.
//!

pub mod worksheet;

use crate::report::table::Table;
use crate::report::Report;

use self::worksheet::Worksheet;

///
/// XLSX output format for benchmark reports.
///
pub struct Xlsx {
    /// Worksheet with one row per table row of every benchmark.
    pub durations_worksheet: Worksheet,
}

impl Xlsx {
    /// Width of columns that contain values.
    const VALUE_COLUMN_WIDTH: usize = 14;

    ///
    /// Creates a new XLSX workbook.
    ///
    pub fn new() -> anyhow::Result<Self> {
        let mut headers = vec![("Benchmark", 40), ("Key", 30)];
        headers.extend(Table::headers().map(|caption| (caption, Self::VALUE_COLUMN_WIDTH)));

        Ok(Self {
            durations_worksheet: Worksheet::new("Durations", headers)?,
        })
    }

    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        workbook.push_worksheet(self.durations_worksheet.into_inner());
        workbook
    }
}

impl TryFrom<&Report> for Xlsx {
    type Error = anyhow::Error;

    fn try_from(report: &Report) -> Result<Self, Self::Error> {
        let mut xlsx = Self::new()?;

        for benchmark in report.benchmarks.iter() {
            for table in benchmark.tables.iter() {
                for row in table.rows.iter() {
                    let mut values = vec![
                        row.run_config.cluster_size as f64,
                        row.run_config.size as f64,
                        row.run_config.length as f64,
                    ];
                    values.extend_from_slice(row.values.as_slice());
                    xlsx.durations_worksheet.write_row(
                        &[benchmark.name.as_str(), table.key.as_str()],
                        values.as_slice(),
                    )?;
                }
            }
        }

        Ok(xlsx)
    }
}
