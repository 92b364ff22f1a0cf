//! Error types for example rendering.
//!
//! Formatting violations are never errors; they are collected as diagnostics
//! on each [`RenderedExample`](crate::RenderedExample). The only failure a
//! render pass can surface comes from the YAML serializer.

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("YAML serialization failed for `{option}`: {source}")]
    YamlSerialization {
        option: String,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type RenderResult<T> = Result<T, RenderError>;
