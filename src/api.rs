// API client module: contains a small blocking HTTP client that talks to
// the leads backend on a local dev server. It is intentionally small and
// synchronous; the helper has exactly one request to make.

use anyhow::{Context, Result};
use reqwest::blocking::{multipart, Client};
use reqwest::StatusCode;
use std::path::Path;

/// Route the backend serves CSV imports on.
const UPLOAD_ROUTE: &str = "/api/leads/upload";

/// Simple API client that holds a reqwest blocking client and the base
/// URL of the leads backend.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// What the server said: status code and raw body text. A non-2xx status
/// is a normal outcome here, not an error; the helper only reports it.
#[derive(Debug)]
pub struct UploadOutcome {
    pub status: StatusCode,
    pub body: String,
}

impl ApiClient {
    /// Create an ApiClient configured from the environment variable
    /// `LEADS_API_URL` or fallback to `http://localhost:3000`.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("LEADS_API_URL").unwrap_or_else(|_| "http://localhost:3000".into());
        // No request timeout: the helper waits as long as the dev server
        // takes. The blocking client would otherwise default to 30s.
        let client = Client::builder()
            .timeout(None)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient { client, base_url })
    }

    fn upload_url(&self) -> String {
        format!("{}{}", &self.base_url, UPLOAD_ROUTE)
    }

    /// Upload a CSV using multipart/form-data: a single part named `file`,
    /// declared as `text/csv` whatever the file actually holds, filename
    /// taken from the path's base name.
    ///
    /// The file is read fully up front, so its handle is already closed by
    /// the time the connection is attempted. Sends once; no retry.
    pub fn upload_leads_csv(&self, file_path: &Path) -> Result<UploadOutcome> {
        let bytes = std::fs::read(file_path)
            .with_context(|| format!("Failed to read CSV file {}", file_path.display()))?;

        let part = multipart::Part::bytes(bytes)
            .file_name(part_file_name(file_path))
            .mime_str("text/csv")
            .context("Failed to build multipart part")?;
        let form = multipart::Form::new().part("file", part);

        let res = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .context("Failed to send upload request")?;

        let status = res.status();
        let body = res.text().context("Failed to read response body")?;
        Ok(UploadOutcome { status, body })
    }
}

/// Base name of the path, used as the multipart filename. Falls back to a
/// fixed name when the path has no usable final component.
fn part_file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("leads.csv")
        .to_string()
}
