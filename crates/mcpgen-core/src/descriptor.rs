use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

/// The structured document produced by the external extraction step.
///
/// `base_url` and `tools` are the two required top-level fields; a document
/// missing either fails deserialization, which is the only fatal error of a
/// generation run.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionDocument {
    pub base_url: String,
    pub tools: Vec<OperationDescriptor>,
}

/// Parse an extraction document from JSON.
pub fn from_json(content: &str) -> Result<ExtractionDocument, DocumentError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse an extraction document from YAML.
pub fn from_yaml(content: &str) -> Result<ExtractionDocument, DocumentError> {
    Ok(serde_yaml_ng::from_str(content)?)
}

/// Normalized description of one API endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationDescriptor {
    /// Raw operation name; possibly empty or entirely invalid.
    #[serde(default)]
    pub name: String,
    pub method: HttpMethod,
    /// URL template with `{placeholder}` segments.
    pub path: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    /// Presence signals that a request body is expected.
    #[serde(default)]
    pub request_schema_ref: Option<String>,
    /// Empty means the implicit `general` category.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// HTTP method supported by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether this verb carries a request payload when a schema ref is
    /// present.
    pub fn takes_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

impl<'de> Deserialize<'de> for HttpMethod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        match raw.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(de::Error::custom(format!("unsupported method: {other}"))),
        }
    }
}

/// One declared parameter of an operation.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "in", default)]
    pub location: ParameterLocation,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub schema: Option<SchemaHint>,
    #[serde(default)]
    pub description: String,
}

impl ParameterDescriptor {
    /// Path parameters are always required, regardless of the declared flag.
    pub fn effective_required(&self) -> bool {
        self.required || self.location == ParameterLocation::Path
    }

    pub fn scalar_type(&self) -> ScalarType {
        self.schema
            .as_ref()
            .map(|s| s.scalar_type())
            .unwrap_or(ScalarType::String)
    }
}

/// Where a declared parameter lives in the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterLocation {
    Path,
    #[default]
    Query,
    Header,
    Cookie,
}

/// The fragment of a parameter schema the generator cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaHint {
    #[serde(rename = "type", default)]
    pub ty: Option<String>,
}

impl SchemaHint {
    /// Unrecognized or absent types degrade to `string`.
    pub fn scalar_type(&self) -> ScalarType {
        match self.ty.as_deref() {
            Some("integer") => ScalarType::Integer,
            Some("boolean") => ScalarType::Boolean,
            Some("number") => ScalarType::Number,
            _ => ScalarType::String,
        }
    }
}

/// Scalar parameter type as classified from the schema fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    #[default]
    String,
    Integer,
    Boolean,
    Number,
}
