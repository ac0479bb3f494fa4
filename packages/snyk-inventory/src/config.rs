use std::path::PathBuf;

use clap::Parser;
use snyk_client::{SnykClient, DEFAULT_BASE_URL};

use crate::report::DEFAULT_OUTPUT;

#[derive(Debug, Parser)]
#[command(name = "snyk-inventory")]
#[command(about = "Write a per-organization inventory of Snyk projects by product")]
pub struct Cli {
    /// Group ID
    #[arg(long, env = "SNYK_GROUP_ID")]
    pub group: String,

    /// API token
    #[arg(long, env = "SNYK_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Report file, overwritten on every run
    #[arg(long, env = "SNYK_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// API origin
    #[arg(long, env = "SNYK_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,
}

impl Cli {
    pub fn client(&self) -> SnykClient {
        SnykClient::new(self.token.as_str()).with_base_url(self.api_url.as_str())
    }
}
