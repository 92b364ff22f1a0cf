//! CLI configuration for output location and rendering preferences.
//!
//! Command-line flags always take precedence over values read here.

pub(crate) mod loader;

pub(crate) use loader::load_cli_config;

use serde::Deserialize;

/// Settings read from `.confex.toml`.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct CliConfig {
    /// Default directory for rendered example files.
    pub output_dir: Option<String>,

    /// Override for the description line length limit.
    pub line_length_limit: Option<usize>,

    /// Fail when any diagnostic is reported.
    #[serde(default)]
    pub strict: bool,
}
