// Entrypoint for the upload helper.
// - Keeps `main` small: create an API client, send the one request, print
//   what the server returned.
// - Returns `anyhow::Result` so a missing file or a dead server terminates
//   the run with a diagnostic and a non-zero exit.

use indicatif::{ProgressBar, ProgressStyle};
use leads_cli::api::ApiClient;
use std::path::PathBuf;
use std::time::Duration;

/// CSV the helper uploads unless `LEADS_CSV_PATH` points elsewhere.
const DEFAULT_CSV_PATH: &str = "data/leads.csv";

fn main() -> anyhow::Result<()> {
    // Base URL comes from the environment variable `LEADS_API_URL` or
    // defaults to http://localhost:3000. See `api::ApiClient::from_env`.
    let api = ApiClient::from_env()?;

    let csv_path = std::env::var("LEADS_CSV_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CSV_PATH));

    // indicatif draws on stderr, so stdout stays exactly the two report
    // lines below.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message("Uploading...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let outcome = api.upload_leads_csv(&csv_path);
    spinner.finish_and_clear();
    let outcome = outcome?;

    println!("Status: {}", outcome.status.as_u16());
    println!("Response: {}", outcome.body);
    Ok(())
}
