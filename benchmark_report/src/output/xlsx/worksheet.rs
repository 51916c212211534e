//!
//! XLSX worksheet for benchmark data.
//!

///
/// XLSX worksheet for benchmark data.
///
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// Header names and their column widths.
    pub headers: Vec<(&'static str, usize)>,
    /// The number of data rows written so far.
    pub rows: u32,
}

impl Worksheet {
    ///
    /// Creates a new worksheet with the given name.
    ///
    pub fn new(name: &str, headers: Vec<(&'static str, usize)>) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(name)?;

        for (header_index, (header_name, column_width)) in headers.iter().enumerate() {
            worksheet.write_with_format(
                0,
                header_index as u16,
                header_name.to_owned(),
                &Self::column_header_format(),
            )?;
            worksheet.set_column_width(header_index as u16, *column_width as f64)?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        Ok(Self {
            worksheet,
            headers,
            rows: 0,
        })
    }

    ///
    /// Appends a row of captions followed by numeric values.
    ///
    pub fn write_row(&mut self, captions: &[&str], values: &[f64]) -> anyhow::Result<()> {
        if captions.len() + values.len() > self.headers.len() {
            anyhow::bail!(
                "Row of {} cells does not fit into {} columns",
                captions.len() + values.len(),
                self.headers.len()
            );
        }

        let row_index = self.rows + 1;
        for (column_index, caption) in captions.iter().enumerate() {
            self.worksheet.write_with_format(
                row_index,
                column_index as u16,
                caption.to_owned(),
                &Self::row_header_format(),
            )?;
        }
        for (column_index, value) in values.iter().enumerate() {
            self.worksheet.write_with_format(
                row_index,
                (captions.len() + column_index) as u16,
                *value,
                &Self::value_format(),
            )?;
        }
        self.rows += 1;
        Ok(())
    }

    ///
    /// Returns the inner worksheet.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#EEF3FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#DDE6FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Left);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#000000");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Right);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        let format = format.set_num_format("0.00");
        format
    }
}
