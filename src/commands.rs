// Command handlers: one function per subcommand. Each calls the API
// client, prints the result and logs failures. A remote error never
// escapes a handler, so the process still exits 0; only the missing
// credential (handled in `main`) is fatal.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};

use crate::api::{ApiClient, CreateOutcome, EnrichOutcome, NewContact, RecordKind};
use crate::output::render_items;

/// Totals for one bulk upload run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UploadReport {
    pub uploaded: usize,
    pub failed: usize,
}

/// `company <query>`: search accounts by name and dump the matches.
pub fn run_company(api: &ApiClient, query: &str) {
    match api.search_companies(query) {
        Ok(payload) => print_payload(&payload),
        Err(err) => report_error(&err),
    }
}

/// `create <name> <email> <company>`: create a contact and report
/// whether the backend created (201) or merely accepted (200) it.
pub fn run_create(api: &ApiClient, name: &str, email: &str, company: &str) {
    let contact = NewContact {
        first_name: name.to_string(),
        email: email.to_string(),
        company: company.to_string(),
    };
    match api.create_contact(&contact) {
        Ok(CreateOutcome::Created(body)) => println!("Contact created: {body}"),
        Ok(CreateOutcome::Accepted(text)) => println!("Request accepted: {text}"),
        Err(err) => report_error(&err),
    }
}

/// `upload <type> <file>`: POST one request per CSV row. Input errors
/// (unknown type, missing file) abort the command; per-row failures do
/// not stop the remaining rows.
pub fn run_upload(api: &ApiClient, kind: &str, file: &Path) {
    match upload_rows(api, kind, file) {
        Ok(report) => {
            println!(
                "Upload finished: {} uploaded, {} failed",
                report.uploaded, report.failed
            );
        }
        Err(err) => report_error(&err),
    }
}

/// `enrich <domain>...`: send all domains in one request. A non-200
/// answer is printed with its status and raw body.
pub fn run_enrich(api: &ApiClient, domains: &[String]) {
    match api.enrich_domains(domains) {
        Ok(EnrichOutcome::Enriched(payload)) => print_payload(&payload),
        Ok(EnrichOutcome::Rejected { status, body }) => {
            log::error!("Enrichment rejected with status {status}");
            println!("Error: {status}");
            println!("{body}");
        }
        Err(err) => report_error(&err),
    }
}

/// Load the CSV at `file` and POST each data row to the endpoint for
/// `kind`. Returns the success/failure totals.
pub fn upload_rows(api: &ApiClient, kind: &str, file: &Path) -> Result<UploadReport> {
    let kind = RecordKind::parse(kind)?;
    if !file.exists() {
        bail!("CSV file '{}' not found", file.display());
    }

    let mut reader = csv::Reader::from_path(file)
        .with_context(|| format!("Failed to open CSV file '{}'", file.display()))?;
    let headers = reader.headers().context("Reading CSV header row")?.clone();

    let mut report = UploadReport::default();
    for record in reader.records() {
        let record = record.context("Reading CSV row")?;
        let row = row_to_json(&headers, &record);
        match api.upload_record(kind, &row) {
            Ok(()) => {
                report.uploaded += 1;
                println!("Successfully uploaded: {}", Value::Object(row));
            }
            Err(err) => {
                report.failed += 1;
                report_error(&err);
            }
        }
    }
    Ok(report)
}

/// Convert one CSV record into a column-to-cell JSON object. Cells stay
/// strings; any coercion is the backend's concern.
pub fn row_to_json(headers: &csv::StringRecord, record: &csv::StringRecord) -> Map<String, Value> {
    headers
        .iter()
        .zip(record.iter())
        .map(|(column, cell)| (column.to_string(), Value::String(cell.to_string())))
        .collect()
}

fn print_payload(payload: &Value) {
    match render_items(payload) {
        Ok(text) => println!("{text}"),
        Err(err) => report_error(&err),
    }
}

fn report_error(err: &anyhow::Error) {
    log::error!("{err:#}");
    println!("Error: {err:#}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_keeps_cells_as_strings() {
        let headers = csv::StringRecord::from(vec!["a", "b"]);
        let record = csv::StringRecord::from(vec!["1", "x"]);
        let row = row_to_json(&headers, &record);
        assert_eq!(Value::Object(row), serde_json::json!({"a": "1", "b": "x"}));
    }
}
