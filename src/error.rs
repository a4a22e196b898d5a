use std::path::PathBuf;

use thiserror::Error;

use crate::types::Format;

/// Errors surfaced by a cascade load or a dump.
///
/// The two base-file variants are the only ones a default value can absorb; see
/// [`is_recoverable`](CascfigError::is_recoverable).
#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum CascfigError {
    #[error("Failed to read config file {path}: {source}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(cascfig::missing_base_file),
            help("create the file or pass a default value")
        )
    )]
    MissingBaseFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed config file {path}: {source}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(code(cascfig::malformed_base_document))
    )]
    MalformedBaseDocument { path: PathBuf, source: DecodeError },

    #[error("Malformed custom config file {path}: {source}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(cascfig::malformed_override_document),
            help("custom files never fall back to the default value")
        )
    )]
    MalformedOverrideDocument { path: PathBuf, source: DecodeError },

    #[error("Failed to read custom config file {path}: {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(cascfig::unreadable_override)))]
    UnreadableOverride {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to dump config as {format}: {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(cascfig::dump)))]
    Dump { format: Format, source: DumpError },
}

impl CascfigError {
    /// Whether a default value would have replaced this failure with a fallback.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CascfigError::MissingBaseFile { .. } | CascfigError::MalformedBaseDocument { .. }
        )
    }
}

/// Why a single document could not be applied onto the destination.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("file is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("document root must be a mapping of keys to values")]
    NotAMapping,

    #[error("current value could not be captured: {0}")]
    Snapshot(#[source] serde_yaml::Error),

    #[error("{0}")]
    Deserialize(#[source] serde_yaml::Error),

    #[error("unknown keys: {}", .0.join(", "))]
    UnknownKeys(Vec<String>),
}

/// Serializer failure behind [`CascfigError::Dump`].
#[derive(Debug, Error)]
pub enum DumpError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Toml(#[from] toml::ser::Error),
}
