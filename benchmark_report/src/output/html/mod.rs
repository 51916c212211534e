//!
//! Static HTML report with tables and interactive charts.
//!

pub mod markdown;
pub mod script;

use std::fmt::Write;

use crate::metric::Metric;
use crate::report::benchmark::BenchmarkReport;
use crate::report::table::Table;
use crate::report::Report;

///
/// Static HTML report with tables and interactive charts.
///
/// The page embeds the precomputed chart data of every metric. Clicking a
/// metric column header highlights that column in every table of the
/// benchmark and redraws both of its charts.
///
#[derive(Default)]
pub struct Html {
    /// The page markup.
    pub content: String,
}

impl Html {
    /// The page stylesheet.
    const STYLE: &'static str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0 auto; max-width: 1200px; padding: 20px; color: #333; }
.header pre { background: #f5f5f5; padding: 10px; overflow-x: auto; }
.benchmark { border-top: 2px solid #3498db; margin-top: 30px; }
.benchmark-table { border-collapse: collapse; margin-bottom: 20px; }
.benchmark-table th, .benchmark-table td { border: 1px solid #ddd; padding: 4px 8px; text-align: right; }
.benchmark-table th[data-metric] { cursor: pointer; }
.chart-container { position: relative; margin-bottom: 30px; }
"#;

    ///
    /// Replaces every whitespace run with a dash, as used in element identifiers.
    ///
    pub fn element_id(name: &str) -> String {
        let mut id = String::with_capacity(name.len());
        let mut in_whitespace = false;
        for character in name.chars() {
            if character.is_whitespace() {
                if !in_whitespace {
                    id.push('-');
                }
                in_whitespace = true;
            } else {
                id.push(character);
                in_whitespace = false;
            }
        }
        id
    }

    ///
    /// Escapes text for use in element content and attribute values.
    ///
    pub fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for character in text.chars() {
            match character {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                character => escaped.push(character),
            }
        }
        escaped
    }

    ///
    /// Writes the whole page. `data` is the serialized report with `<` escaped.
    ///
    fn write_page(output: &mut String, report: &Report, data: &str) -> std::fmt::Result {
        writeln!(output, "<!DOCTYPE html>")?;
        writeln!(output, "<html lang=\"en\">")?;
        writeln!(output, "<head>")?;
        writeln!(output, "<meta charset=\"UTF-8\">")?;
        writeln!(
            output,
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(
            output,
            "<title>{} Benchmark Results</title>",
            Self::escape(report.suite.as_str())
        )?;
        writeln!(output, "<script src=\"{}\"></script>", script::CHART_JS_URL)?;
        writeln!(
            output,
            "<script src=\"{}\"></script>",
            script::DATE_ADAPTER_URL
        )?;
        writeln!(output, "<style>{}", Self::STYLE)?;
        Self::write_highlight_style(output)?;
        writeln!(output, "</style>")?;
        writeln!(output, "</head>")?;
        writeln!(output, "<body>")?;
        writeln!(output, "<div id=\"app\">")?;
        Self::write_header(output, report)?;
        for benchmark in report.benchmarks.iter() {
            Self::write_benchmark(output, benchmark, report.metric)?;
        }
        writeln!(output, "</div>")?;
        writeln!(
            output,
            "<script type=\"application/json\" id=\"report-data\">{data}</script>"
        )?;
        writeln!(output, "<script>{}</script>", script::SCRIPT)?;
        writeln!(output, "</body>")?;
        writeln!(output, "</html>")?;
        Ok(())
    }

    ///
    /// Writes the page header with the latest suite run metadata.
    ///
    fn write_header(output: &mut String, report: &Report) -> std::fmt::Result {
        writeln!(output, "<h1>Benchmark Results</h1>")?;
        writeln!(output, "<div class=\"header\">")?;
        writeln!(output, "<h2>{}</h2>", Self::escape(report.suite.as_str()))?;
        writeln!(
            output,
            "<p><strong>Version: </strong>{}</p>",
            Self::escape(report.version.as_str())
        )?;
        writeln!(
            output,
            "<p><strong>Timestamp: </strong>{}</p>",
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(
            output,
            "<pre>{}</pre>",
            Self::escape(report.environment.as_str())
        )?;
        writeln!(output, "</div>")?;
        Ok(())
    }

    ///
    /// Writes one benchmark section.
    ///
    fn write_benchmark(
        output: &mut String,
        benchmark: &BenchmarkReport,
        metric: Metric,
    ) -> std::fmt::Result {
        let name = Self::escape(benchmark.name.as_str());
        let id = Self::escape(Self::element_id(benchmark.name.as_str()).as_str());

        writeln!(output, "<section class=\"benchmark\">")?;
        writeln!(output, "<h3>{name}</h3>")?;
        writeln!(output, "<div class=\"description\">")?;
        write!(output, "{}", markdown::render(benchmark.description.as_str()))?;
        writeln!(output, "</div>")?;

        for table in benchmark.tables.iter() {
            writeln!(
                output,
                "<h4>Duration Results for: {}</h4>",
                Self::escape(table.key.as_str())
            )?;
            Self::write_table(output, benchmark, table, metric)?;
        }

        writeln!(output, "<div class=\"chart-container\">")?;
        writeln!(
            output,
            "<canvas id=\"chart-{id}\" class=\"chart\" data-benchmark=\"{name}\"></canvas>"
        )?;
        writeln!(output, "</div>")?;
        writeln!(output, "<div class=\"chart-container\">")?;
        writeln!(output, "<h4>Historical Trend</h4>")?;
        writeln!(
            output,
            "<canvas id=\"historical-chart-{id}\" class=\"historical-chart\" data-benchmark=\"{name}\"></canvas>"
        )?;
        writeln!(output, "</div>")?;
        writeln!(output, "</section>")?;
        Ok(())
    }

    ///
    /// Writes one duration table.
    ///
    fn write_table(
        output: &mut String,
        benchmark: &BenchmarkReport,
        table: &Table,
        metric: Metric,
    ) -> std::fmt::Result {
        let name = Self::escape(benchmark.name.as_str());
        let key = Self::escape(table.key.as_str());
        let id = Self::escape(Self::element_id(benchmark.name.as_str()).as_str());

        writeln!(
            output,
            "<table class=\"benchmark-table selected-metric-{metric}\" id=\"table-{id}-{key}\" data-benchmark=\"{name}\" data-key=\"{key}\">"
        )?;
        write!(output, "<thead><tr>")?;
        for header in Table::CONFIG_HEADERS.iter() {
            write!(output, "<th>{header}</th>")?;
        }
        for column in Metric::ALL.iter() {
            write!(
                output,
                "<th data-metric=\"{column}\">{}</th>",
                column.caption()
            )?;
        }
        writeln!(output, "</tr></thead>")?;

        writeln!(output, "<tbody>")?;
        for row in table.rows.iter() {
            write!(
                output,
                "<tr><td>{}</td><td>{}</td><td>{}</td>",
                row.run_config.cluster_size, row.run_config.size, row.run_config.length
            )?;
            for (column, value) in Metric::ALL.iter().zip(row.values.iter()) {
                write!(output, "<td data-metric=\"{column}\">{value:.2}</td>")?;
            }
            writeln!(output, "</tr>")?;
        }
        writeln!(output, "</tbody>")?;
        writeln!(output, "</table>")?;
        Ok(())
    }

    ///
    /// Writes the stylesheet rules highlighting the selected metric column.
    ///
    fn write_highlight_style(output: &mut String) -> std::fmt::Result {
        for metric in Metric::ALL.iter() {
            writeln!(
                output,
                ".selected-metric-{metric} [data-metric=\"{metric}\"] {{ background: #eef3ff; font-weight: bold; }}"
            )?;
        }
        Ok(())
    }
}

impl TryFrom<&Report> for Html {
    type Error = anyhow::Error;

    fn try_from(report: &Report) -> Result<Self, Self::Error> {
        let data = serde_json::to_string(report)
            .map_err(|error| anyhow::anyhow!("Report serialization: {error}"))?
            .replace('<', "\\u003c");

        let mut content = String::with_capacity(data.len() * 2);
        Self::write_page(&mut content, report, data.as_str())
            .map_err(|error| anyhow::anyhow!("Report page rendering: {error}"))?;

        Ok(Self { content })
    }
}
