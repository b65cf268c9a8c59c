//! Environment-backed configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use enrichment::Credentials;

/// Environment variable holding the SerpAPI key.
pub const SERP_API_KEY_VAR: &str = "SERP_API_KEY";

/// Environment variable holding the Groq API key.
pub const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";

/// Environment variable pointing at a Google service-account key file.
pub const SERVICE_ACCOUNT_VAR: &str = "GOOGLE_SERVICE_ACCOUNT_FILE";

/// Load API credentials for an enrichment run.
///
/// Both API keys are required. The service-account file is optional
/// here; commands that touch a spreadsheet check for it themselves.
pub fn credentials_from_env() -> Result<Credentials> {
    let serp_api_key = std::env::var(SERP_API_KEY_VAR)
        .with_context(|| format!("{} is not set", SERP_API_KEY_VAR))?;
    let groq_api_key = std::env::var(GROQ_API_KEY_VAR)
        .with_context(|| format!("{} is not set", GROQ_API_KEY_VAR))?;

    let mut credentials = Credentials::new(serp_api_key, groq_api_key);
    if let Some(path) = service_account_file_from_env() {
        credentials = credentials.with_service_account_file(path);
    }
    Ok(credentials)
}

/// Path to the Google service-account key file, when configured.
pub fn service_account_file_from_env() -> Option<PathBuf> {
    std::env::var(SERVICE_ACCOUNT_VAR).ok().map(PathBuf::from)
}
