use chrono::NaiveDate;
use fund_perf_core::{CashFlowRecord, FlowKind};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// One raw CSV row before validation. Fields are kept as strings so parse
/// failures can be reported with the offending value and row number.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Amount")]
    amount: String,
}

/// Read and validate a cash-flow CSV from a file path.
pub fn read_csv_file(path: &str) -> Result<Vec<CashFlowRecord>, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("File not found: {}", p.display()).into());
    }
    if !p.is_file() {
        return Err(format!("Not a file: {}", p.display()).into());
    }

    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(p)
        .map_err(|e| format!("Failed to open '{}': {}", p.display(), e))?;
    parse_rows(reader)
}

/// Read and validate a cash-flow CSV from any reader (piped stdin).
pub fn read_csv_reader<R: Read>(rdr: R) -> Result<Vec<CashFlowRecord>, Box<dyn std::error::Error>> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(rdr);
    parse_rows(reader)
}

fn parse_rows<R: Read>(
    mut reader: csv::Reader<R>,
) -> Result<Vec<CashFlowRecord>, Box<dyn std::error::Error>> {
    let mut records = Vec::new();
    for (index, result) in reader.deserialize().enumerate() {
        // Row numbers are 1-based over data rows (the header is row 0)
        let row_number = index + 1;
        let row: CsvRow =
            result.map_err(|e| format!("Row {}: malformed CSV record: {}", row_number, e))?;
        records.push(validate_row(&row, row_number)?);
    }
    Ok(records)
}

fn validate_row(
    row: &CsvRow,
    row_number: usize,
) -> Result<CashFlowRecord, Box<dyn std::error::Error>> {
    let date = parse_date(&row.date).ok_or_else(|| {
        format!(
            "Row {}: invalid date '{}' (expected YYYY-MM-DD or MM/DD/YYYY)",
            row_number, row.date
        )
    })?;

    let kind = match row.kind.as_str() {
        "Capital Call" => FlowKind::CapitalCall,
        "Distribution" => FlowKind::Distribution,
        "NAV" => FlowKind::Nav,
        other => {
            return Err(format!(
                "Row {}: unknown type '{}' (expected Capital Call, Distribution, or NAV)",
                row_number, other
            )
            .into())
        }
    };

    let amount: Decimal = row.amount.parse().map_err(|_| {
        format!(
            "Row {}: invalid amount '{}' (expected a non-negative number)",
            row_number, row.amount
        )
    })?;
    if amount < Decimal::ZERO {
        return Err(format!(
            "Row {}: amount must be non-negative, got {}",
            row_number, amount
        )
        .into());
    }

    Ok(CashFlowRecord { date, kind, amount })
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .ok()
}
