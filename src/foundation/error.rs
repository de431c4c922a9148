use std::path::PathBuf;

/// Convenience result type used across iconsmith.
pub type AssetResult<T> = Result<T, AssetError>;

/// Top-level error taxonomy used by generator APIs.
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    /// The target platform is missing from the project, or the project itself is unusable.
    #[error("project configuration error: {0}")]
    ProjectConfiguration(String),

    /// Generation was requested before the input asset had a bound transform handle.
    #[error("pipeline not ready: {0}")]
    PipelineNotReady(String),

    /// The platform manifest could not be read or parsed.
    #[error("manifest corrupt: '{}': {reason}", path.display())]
    ManifestCorrupt {
        /// Manifest file that failed.
        path: PathBuf,
        /// Underlying read or parse failure.
        reason: String,
    },

    /// A template in the output catalog is malformed.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Invalid caller-provided values (configuration, dimensions, colors).
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AssetError {
    /// Build a [`AssetError::ProjectConfiguration`] value.
    pub fn project_configuration(msg: impl Into<String>) -> Self {
        Self::ProjectConfiguration(msg.into())
    }

    /// Build a [`AssetError::PipelineNotReady`] value.
    pub fn pipeline_not_ready(msg: impl Into<String>) -> Self {
        Self::PipelineNotReady(msg.into())
    }

    /// Build a [`AssetError::ManifestCorrupt`] value.
    pub fn manifest_corrupt(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::ManifestCorrupt {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Build a [`AssetError::Catalog`] value.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Build a [`AssetError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
