use std::collections::BTreeSet;

use jiff::civil::DateTime;
use tracing::debug;

use screener_core::models::question::QuestionId;
use screener_core::models::record::{ExportField, ExportRecord};
use screener_core::models::scale::ScaleLevel;
use screener_instruments::scoring::MAX_TOTAL;

use crate::error::ExportError;

pub const TOTAL_COLUMN: &str = "Total Score";
pub const DATE_COLUMN: &str = "Date";

/// Wall-clock format of the date column (e.g. `2025-03-14 09:26:53`).
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Header row for a record: its question columns, then total and date.
pub fn header(record: &ExportRecord) -> Vec<String> {
    record
        .fields
        .iter()
        .map(|f| f.question.column_name())
        .chain([TOTAL_COLUMN.to_string(), DATE_COLUMN.to_string()])
        .collect()
}

/// Serialize one record as a header row plus a data row.
///
/// Unanswered questions are written as empty cells.
pub fn to_csv(record: &ExportRecord) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(header(record))?;

    let row: Vec<String> = record
        .fields
        .iter()
        .map(|f| f.value.map(|level| level.value().to_string()).unwrap_or_default())
        .chain([
            record.total.to_string(),
            record.date.strftime(DATE_FORMAT).to_string(),
        ])
        .collect();
    writer.write_record(&row)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    debug!(columns = row.len(), bytes = bytes.len(), "CSV export written");
    Ok(String::from_utf8(bytes)?)
}

/// Where each known column sits in a parsed header row.
struct Layout {
    questions: Vec<(usize, QuestionId)>,
    total: usize,
    date: usize,
}

impl Layout {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, ExportError> {
        let mut questions = Vec::new();
        let mut seen = BTreeSet::new();
        let mut total = None;
        let mut date = None;

        for (position, name) in headers.iter().enumerate() {
            let name = name.trim();
            if !seen.insert(name.to_string()) {
                return Err(ExportError::DuplicateColumn(name.to_string()));
            }
            match name {
                TOTAL_COLUMN => total = Some(position),
                DATE_COLUMN => date = Some(position),
                _ => {
                    let id: QuestionId = name
                        .parse()
                        .map_err(|_| ExportError::UnknownColumn(name.to_string()))?;
                    questions.push((position, id));
                }
            }
        }

        Ok(Self {
            questions,
            total: total.ok_or_else(|| ExportError::MissingColumn(TOTAL_COLUMN.to_string()))?,
            date: date.ok_or_else(|| ExportError::MissingColumn(DATE_COLUMN.to_string()))?,
        })
    }

    fn parse_row(&self, row: &csv::StringRecord) -> Result<ExportRecord, ExportError> {
        let cell = |position: usize| row.get(position).unwrap_or("").trim();

        let fields = self
            .questions
            .iter()
            .map(|(position, question)| {
                let value = parse_level(&question.column_name(), cell(*position))?;
                Ok(ExportField {
                    question: *question,
                    value,
                })
            })
            .collect::<Result<Vec<_>, ExportError>>()?;

        let raw_total = cell(self.total);
        let total = parse_total(raw_total)?;
        let sum: u16 = fields
            .iter()
            .filter_map(|f| f.value)
            .map(|level| u16::from(level.value()))
            .sum();
        if sum != total {
            return Err(invalid(TOTAL_COLUMN, raw_total));
        }

        let raw_date = cell(self.date);
        let date = DateTime::strptime(DATE_FORMAT, raw_date)
            .map_err(|_| invalid(DATE_COLUMN, raw_date))?;

        Ok(ExportRecord {
            fields,
            total,
            date,
        })
    }
}

/// Parse CSV text back into records, one per data row.
///
/// Question cells hold the ordinal (`2`). A cell carrying a full scale label
/// (`2 — Often`) is read by its leading ordinal. The total must equal the sum
/// of the answered cells.
pub fn parse_csv(text: &str) -> Result<Vec<ExportRecord>, ExportError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let layout = Layout::from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    for row in reader.records() {
        records.push(layout.parse_row(&row?)?);
    }
    debug!(rows = records.len(), "CSV export parsed");
    Ok(records)
}

fn parse_level(column: &str, cell: &str) -> Result<Option<ScaleLevel>, ExportError> {
    if cell.is_empty() {
        return Ok(None);
    }
    // Scale labels are written as `<ordinal> — <text>`.
    let ordinal = cell.split_once('—').map_or(cell, |(ordinal, _)| ordinal);
    let level = ordinal
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(|value| ScaleLevel::try_from(value).ok())
        .ok_or_else(|| invalid(column, cell))?;
    Ok(Some(level))
}

fn parse_total(cell: &str) -> Result<u16, ExportError> {
    cell.parse::<u16>()
        .ok()
        .filter(|total| *total <= MAX_TOTAL)
        .ok_or_else(|| invalid(TOTAL_COLUMN, cell))
}

fn invalid(column: &str, value: &str) -> ExportError {
    ExportError::InvalidValue {
        column: column.to_string(),
        value: value.to_string(),
    }
}
