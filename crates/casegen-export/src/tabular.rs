use crate::{ExportOptions, Exporter, flatten};
use anyhow::Context;
use casegen_schema::case::CaseFormat;
use casegen_schema::run::Run;

const BASE_HEADER: [&str; 6] = ["Test Case #", "Provider", "Title", "Steps", "Priority", "Type"];
const EXPECTED_RESULT_COLUMN: &str = "Expected Result";

/// Column names; plain-text runs carry an extra expected-result column.
pub fn csv_header(format: CaseFormat) -> Vec<&'static str> {
    let mut header = BASE_HEADER.to_vec();
    if format == CaseFormat::Plain {
        header.push(EXPECTED_RESULT_COLUMN);
    }
    header
}

/// Spreadsheet-friendly CSV, one row per case.
pub struct CsvExporter;

impl Exporter for CsvExporter {
    fn export(&self, run: &Run, _options: &ExportOptions) -> anyhow::Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer
            .write_record(csv_header(run.format))
            .context("write csv header")?;

        for row in flatten(run) {
            let index = row.index.to_string();
            let category = row.category.to_string();
            let mut record = vec![
                index.as_str(),
                row.provider.as_str(),
                row.title.as_str(),
                row.steps.as_str(),
                row.priority.as_str(),
                category.as_str(),
            ];
            if run.format == CaseFormat::Plain {
                record.push(row.expected_result.as_str());
            }
            writer
                .write_record(&record)
                .with_context(|| format!("write csv row {}", row.index))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("CSV export failed: {}", e))?;
        String::from_utf8(bytes).context("csv output is not utf-8")
    }
}
