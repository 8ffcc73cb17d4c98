use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why one operation was dropped from tool emission. Never fatal for the
/// run; the batch continues.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    #[error("operation name {0:?} sanitizes to nothing usable")]
    UnusableName(String),
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    #[error("template rendering failed: {0}")]
    Render(String),
}
