#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url};

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;
pub const DEFAULT_USER_AGENT: &str = concat!("feed-loader/", env!("CARGO_PKG_VERSION"));

pub(crate) fn validate_source(
    url_field: &str,
    url: &str,
    timeout_seconds: u64,
    user_agent: &str,
) -> Result<()> {
    validate_url(url_field, url)?;
    validate_range("timeout_seconds", timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
    validate_non_empty_string("user_agent", user_agent)
}
