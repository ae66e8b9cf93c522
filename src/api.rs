// API client module: contains a small blocking HTTP client that talks to
// the Apollo.io REST API. Every operation is a single synchronous round
// trip; methods return typed values and never print, so the transport
// logic can be exercised against a mock server.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::{Map, Value};

/// Credential file, looked up in the working directory.
pub const API_KEY_FILE: &str = "api_key.key";

/// Production endpoint base.
pub const DEFAULT_BASE_URL: &str = "https://api.apollo.io/v1";

/// Header carrying the API key on every outbound request.
const API_KEY_HEADER: &str = "x-api-key";

/// Read the API key from `path`. The file holds a single line; surrounding
/// whitespace is stripped. A missing credential is the one condition the
/// binary treats as fatal.
pub fn read_api_key(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!("API key file '{}' not found", path.display());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read API key file '{}'", path.display()))?;
    Ok(raw.trim().to_string())
}

/// Kind of record a bulk upload targets. Decides the endpoint path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Contact,
    Company,
}

impl RecordKind {
    /// Parse the CLI `<type>` argument. Anything other than `contact` or
    /// `company` is an unsupported data type.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "contact" => Ok(RecordKind::Contact),
            "company" => Ok(RecordKind::Company),
            other => bail!("Unsupported data type: {other}"),
        }
    }

    fn path(self) -> &'static str {
        match self {
            RecordKind::Contact => "/contacts",
            RecordKind::Company => "/accounts",
        }
    }
}

/// Request body for contact creation. Field names mirror the backend
/// expectations.
#[derive(Serialize, Debug)]
pub struct NewContact {
    pub first_name: String,
    pub email: String,
    pub company: String,
}

/// Outcome of a contact creation call. The backend answers 201 when the
/// contact was created and 200 when the request was merely accepted.
#[derive(Debug)]
pub enum CreateOutcome {
    Created(Value),
    Accepted(String),
}

/// Outcome of an enrichment call. A non-200 answer is surfaced with its
/// status and raw body instead of being treated as a transport error.
#[derive(Debug)]
pub enum EnrichOutcome {
    Enriched(Value),
    Rejected { status: StatusCode, body: String },
}

/// Blocking API client holding a reqwest client preconfigured with the
/// fixed header set (content type, no-cache, API key) and the base URL.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url` authenticating with `api_key`. The
    /// key must be representable as an HTTP header value.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        let key = HeaderValue::from_str(api_key)
            .context("API key contains characters that cannot form a request header")?;
        headers.insert(API_KEY_HEADER, key);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Search accounts by name. Returns the raw JSON payload.
    pub fn search_companies(&self, query: &str) -> Result<Value> {
        let url = self.url("/accounts");
        let res = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "name": query }))
            .send()
            .context("Failed to send company search request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            bail!("Company search failed: {} - {}", status, txt);
        }
        res.json().context("Parsing company search response json")
    }

    /// Create a contact by POSTing to /contacts. Distinguishes the
    /// created (201) and accepted (200) answers for the caller.
    pub fn create_contact(&self, contact: &NewContact) -> Result<CreateOutcome> {
        let url = self.url("/contacts");
        let res = self
            .client
            .post(&url)
            .json(contact)
            .send()
            .context("Failed to send contact creation request")?;
        let status = res.status();
        if status == StatusCode::CREATED {
            let body = res.json().context("Parsing contact creation response json")?;
            Ok(CreateOutcome::Created(body))
        } else if status.is_success() {
            Ok(CreateOutcome::Accepted(res.text().unwrap_or_else(|_| "".into())))
        } else {
            let txt = res.text().unwrap_or_else(|_| "".into());
            bail!("Contact creation failed: {} - {}", status, txt);
        }
    }

    /// POST one upload row. The body is the row as a column-to-cell
    /// object; the endpoint follows from the record kind.
    pub fn upload_record(&self, kind: RecordKind, row: &Map<String, Value>) -> Result<()> {
        let url = self.url(kind.path());
        let res = self
            .client
            .post(&url)
            .json(row)
            .send()
            .context("Failed to send upload request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            bail!("Upload failed: {} - {}", status, txt);
        }
        Ok(())
    }

    /// Enrich organization data for every domain in one request.
    pub fn enrich_domains(&self, domains: &[String]) -> Result<EnrichOutcome> {
        let url = self.url("/organizations/bulk_enrich");
        let res = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "domains": domains }))
            .send()
            .context("Failed to send enrichment request")?;
        let status = res.status();
        if status == StatusCode::OK {
            let body = res.json().context("Parsing enrichment response json")?;
            Ok(EnrichOutcome::Enriched(body))
        } else {
            Ok(EnrichOutcome::Rejected {
                status,
                body: res.text().unwrap_or_else(|_| "".into()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn api_key_is_trimmed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "ABC123\n").unwrap();
        let key = read_api_key(file.path()).unwrap();
        assert_eq!(key, "ABC123");
    }

    #[test]
    fn missing_api_key_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_api_key(&dir.path().join("api_key.key")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn record_kind_parses_supported_types() {
        assert_eq!(RecordKind::parse("contact").unwrap(), RecordKind::Contact);
        assert_eq!(RecordKind::parse("company").unwrap(), RecordKind::Company);
    }

    #[test]
    fn record_kind_rejects_unknown_types() {
        let err = RecordKind::parse("invoice").unwrap_err();
        assert!(err.to_string().contains("Unsupported data type: invoice"));
    }
}
