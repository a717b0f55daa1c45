pub mod csv_in;
pub mod stdin;

use fund_perf_core::CashFlowRecord;

/// Load cash-flow records from `--input <path>`, falling back to piped stdin.
pub fn load_records(
    path: Option<&str>,
) -> Result<Vec<CashFlowRecord>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return csv_in::read_csv_file(path);
    }
    if let Some(text) = stdin::read_stdin()? {
        return csv_in::read_csv_reader(text.as_bytes());
    }
    Err("--input <file.csv> or piped CSV on stdin required".into())
}
