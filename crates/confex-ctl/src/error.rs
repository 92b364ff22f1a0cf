//! Error types for `confex-ctl` commands.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CtlError {
    #[error("failed to read spec '{}': {source}", path.display())]
    ReadSpec {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse spec YAML '{}': {source}", path.display())]
    ParseSpec {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("rendering failed: {0}")]
    Render(#[from] confex_core::RenderError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{count} diagnostic(s) reported in strict mode")]
    Diagnostics { count: usize },
}

pub(crate) type CtlResult<T> = Result<T, CtlError>;
