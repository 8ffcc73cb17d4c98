pub mod config;
pub mod descriptor;
pub mod error;
pub mod grouping;
pub mod registry;
pub mod resolve;
pub mod sanitize;
pub mod typegen;

use serde::Serialize;

/// What kind of output a generated artifact is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// An executable tool wrapper for one API operation.
    Tool,
    /// An operation-reference prompt module for one category.
    Prompt,
    /// A package aggregation module (`__init__.py`).
    Package,
}

/// One generated, ready-to-persist unit of output.
///
/// Identifiers are unique within their kind; the surrounding system decides
/// where each artifact's content is written.
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    pub identifier: String,
    pub kind: ArtifactKind,
    pub content: String,
}

/// An operation that was dropped from tool emission, with the raw name it
/// entered the run under.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedOperation {
    pub raw_name: String,
    pub reason: String,
}

/// The full result of one generation run.
#[derive(Debug, Clone)]
pub struct Generation {
    pub artifacts: Vec<GeneratedArtifact>,
    pub skipped: Vec<SkippedOperation>,
    /// True when tool bodies were emitted untyped because no type index was
    /// available (compiler absent or failed).
    pub types_degraded: bool,
}

/// Trait for target generators that produce artifacts from an extraction
/// document.
pub trait ToolsetGenerator {
    type Error: std::error::Error;

    fn generate(
        &self,
        doc: &descriptor::ExtractionDocument,
        types: Option<&typegen::TypeIndex>,
    ) -> Result<Generation, Self::Error>;
}
