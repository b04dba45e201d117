//! Credential prompts shared by both tools.

use std::io::{BufRead, Write};
use std::time::Duration;

use crate::client::PolicyClient;
use crate::config::ToolConfig;
use crate::error::Result;
use crate::prompt::Prompter;

pub const API_KEY_PROMPT: &str = "Enter your Cloud One API Key: ";
pub const REGION_PROMPT: &str = "Enter your Cloud One region (e.g. de-1, us-1, eu-1): ";

/// Ask for the API key (always) and the region (unless known), then build
/// the client.
///
/// Endpoint precedence: `--region` flag, then `base_url` from config, then
/// `region` from config, then the region prompt.
pub fn connect<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &ToolConfig,
    region_flag: Option<String>,
) -> Result<PolicyClient> {
    let api_key = prompter.ask(API_KEY_PROMPT)?;
    let timeout = config.timeout_secs.map(Duration::from_secs);

    if region_flag.is_none() {
        if let Some(base_url) = &config.base_url {
            return PolicyClient::new(base_url.as_str(), &api_key, timeout);
        }
    }

    let region = prompter.ask_unless(region_flag.or_else(|| config.region.clone()), REGION_PROMPT)?;
    PolicyClient::for_region(&region, &api_key, timeout)
}
