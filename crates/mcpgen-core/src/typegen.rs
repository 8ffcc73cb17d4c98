//! Capability interface for typed request models.
//!
//! Tool generation never depends on this structurally: when no compiler is
//! available, or compilation fails, tools are emitted with untyped bodies
//! and the run reports degraded mode.

use indexmap::IndexMap;
use thiserror::Error;

use crate::descriptor::ExtractionDocument;
use crate::sanitize::{DigitPrefix, sanitize_opt};

#[derive(Debug, Error)]
pub enum TypeCompilerError {
    #[error("type compiler unavailable: {0}")]
    Unavailable(String),

    #[error("type compilation failed: {0}")]
    Failed(String),
}

/// Maps request schema references to importable Python class names.
#[derive(Debug, Clone)]
pub struct TypeIndex {
    /// Python module the classes are imported from (relative import).
    pub module: String,
    by_ref: IndexMap<String, String>,
}

impl TypeIndex {
    pub fn new(module: impl Into<String>) -> Self {
        Self { module: module.into(), by_ref: IndexMap::new() }
    }

    pub fn insert(&mut self, schema_ref: impl Into<String>, class_name: impl Into<String>) {
        self.by_ref.insert(schema_ref.into(), class_name.into());
    }

    pub fn class_for(&self, schema_ref: &str) -> Option<&str> {
        self.by_ref.get(schema_ref).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.by_ref.is_empty()
    }
}

/// Produces a [`TypeIndex`] for an extraction document.
pub trait TypeCompiler {
    fn compile(&self, doc: &ExtractionDocument) -> Result<TypeIndex, TypeCompilerError>;
}

/// Best-effort indexer that derives class names from schema reference
/// pointers without invoking an external compiler: the last pointer segment
/// of `#/components/schemas/User` becomes `User` in the `models` module.
#[derive(Debug, Clone)]
pub struct SchemaRefIndexer {
    pub module: String,
}

impl Default for SchemaRefIndexer {
    fn default() -> Self {
        Self { module: "models".to_string() }
    }
}

impl TypeCompiler for SchemaRefIndexer {
    fn compile(&self, doc: &ExtractionDocument) -> Result<TypeIndex, TypeCompilerError> {
        let mut index = TypeIndex::new(self.module.clone());
        for op in &doc.tools {
            let Some(ref schema_ref) = op.request_schema_ref else {
                continue;
            };
            let segment = schema_ref.rsplit('/').next().unwrap_or(schema_ref);
            // Unusable segments are simply left out of the index; the tool
            // degrades to an untyped body on its own.
            if let Some(class_name) = sanitize_opt(segment, DigitPrefix::Underscore) {
                index.insert(schema_ref.clone(), class_name);
            }
        }
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::from_json;

    #[test]
    fn indexes_schema_refs_by_last_segment() {
        let doc = from_json(
            r##"{"base_url": "x", "tools": [
                {"name": "createUser", "method": "POST", "path": "/users",
                 "request_schema_ref": "#/components/schemas/User"},
                {"name": "ping", "method": "GET", "path": "/ping"}
            ]}"##,
        )
        .unwrap();
        let index = SchemaRefIndexer::default().compile(&doc).unwrap();
        assert_eq!(index.class_for("#/components/schemas/User"), Some("User"));
        assert_eq!(index.module, "models");
    }

    #[test]
    fn unusable_ref_segment_is_left_unindexed() {
        let doc = from_json(
            r##"{"base_url": "x", "tools": [
                {"name": "create", "method": "POST", "path": "/x",
                 "request_schema_ref": "#/components/schemas/!!!"}
            ]}"##,
        )
        .unwrap();
        let index = SchemaRefIndexer::default().compile(&doc).unwrap();
        assert!(index.is_empty());
    }
}
