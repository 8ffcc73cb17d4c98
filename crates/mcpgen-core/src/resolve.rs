//! Merges declared parameters with URL-template placeholders into one
//! ordered, de-duplicated, typed parameter list per operation.

use crate::descriptor::{OperationDescriptor, ParameterLocation, ScalarType};
use crate::error::ResolveError;
use crate::registry::NameRegistry;
use crate::sanitize::{DigitPrefix, sanitize, sanitize_opt};

/// Fallback identifier for operations; an operation whose name sanitizes to
/// nothing is skipped rather than emitted under this name.
pub const TOOL_FALLBACK: &str = "tool";

/// Where a resolved parameter is wired into the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedLocation {
    Path,
    Query,
    Header,
    Cookie,
    /// The synthetic request-payload parameter.
    Body,
}

impl From<ParameterLocation> for ResolvedLocation {
    fn from(loc: ParameterLocation) -> Self {
        match loc {
            ParameterLocation::Path => ResolvedLocation::Path,
            ParameterLocation::Query => ResolvedLocation::Query,
            ParameterLocation::Header => ResolvedLocation::Header,
            ParameterLocation::Cookie => ResolvedLocation::Cookie,
        }
    }
}

/// One parameter of a resolved operation. `sanitized_name` is unique within
/// the owning operation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ResolvedParameter {
    pub raw_name: String,
    pub sanitized_name: String,
    pub location: ResolvedLocation,
    pub required: bool,
    pub ty: ScalarType,
    pub description: String,
}

/// An operation ready for emission.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ResolvedOperation {
    pub tool_name: String,
    pub method: crate::descriptor::HttpMethod,
    pub path: String,
    pub description: String,
    pub params: Vec<ResolvedParameter>,
    pub has_body: bool,
    /// The request schema reference, when a body is expected.
    pub request_schema_ref: Option<String>,
}

/// Resolve one operation descriptor. `tool_names` is the run-scoped tool
/// identifier namespace; parameter names live in a fresh per-operation
/// namespace.
pub fn resolve_operation(
    op: &OperationDescriptor,
    tool_names: &mut NameRegistry,
) -> Result<ResolvedOperation, ResolveError> {
    // An empty or entirely invalid name would collapse to the bare fallback;
    // such operations are skipped, not renamed.
    let Some(base_name) = sanitize_opt(&op.name, DigitPrefix::Tool) else {
        return Err(ResolveError::UnusableName(op.name.clone()));
    };
    let tool_name = tool_names.reserve(&base_name);

    let mut param_names = NameRegistry::new();
    let mut params = Vec::new();

    // Path placeholders, left to right. A placeholder with no covering
    // declared parameter is synthesized as a required string.
    for raw in path_placeholders(&op.path) {
        let declared = op
            .parameters
            .iter()
            .find(|p| p.location == ParameterLocation::Path && p.name == raw);
        let candidate = sanitize(&raw, "param", DigitPrefix::Underscore);
        let sanitized_name = param_names.reserve(&candidate);
        params.push(ResolvedParameter {
            raw_name: raw,
            sanitized_name,
            location: ResolvedLocation::Path,
            required: declared.map(|p| p.effective_required()).unwrap_or(true),
            ty: declared.map(|p| p.scalar_type()).unwrap_or_default(),
            description: declared.map(|p| p.description.clone()).unwrap_or_default(),
        });
    }

    // Declared non-path parameters, in input order. Anonymous parameters
    // get param_<n>, counting only the anonymous ones.
    let mut anonymous = 0usize;
    for p in op.parameters.iter().filter(|p| p.location != ParameterLocation::Path) {
        let candidate = match sanitize_opt(&p.name, DigitPrefix::Underscore) {
            Some(name) => name,
            None => {
                anonymous += 1;
                format!("param_{anonymous}")
            }
        };
        let sanitized_name = param_names.reserve(&candidate);
        params.push(ResolvedParameter {
            raw_name: p.name.clone(),
            sanitized_name,
            location: p.location.into(),
            required: p.required,
            ty: p.scalar_type(),
            description: p.description.clone(),
        });
    }

    // Required parameters first, then lexicographic on the sanitized name,
    // so emitted signatures put defaulted parameters last.
    params.sort_by(|a, b| {
        (!a.required, a.sanitized_name.as_str()).cmp(&(!b.required, b.sanitized_name.as_str()))
    });

    let has_body = op.method.takes_body() && op.request_schema_ref.is_some();
    if has_body {
        let sanitized_name = param_names.reserve("body");
        params.push(ResolvedParameter {
            raw_name: "body".to_string(),
            sanitized_name,
            location: ResolvedLocation::Body,
            required: true,
            ty: ScalarType::String,
            description: "Request payload.".to_string(),
        });
    }

    Ok(ResolvedOperation {
        tool_name,
        method: op.method,
        path: op.path.clone(),
        description: op.description.clone(),
        params,
        has_body,
        request_schema_ref: if has_body { op.request_schema_ref.clone() } else { None },
    })
}

/// Extract `{placeholder}` tokens from a path template, left to right,
/// keeping only the first occurrence of a repeated token.
pub fn path_placeholders(path: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut rest = path;
    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open + 1..].find('}') else {
            break;
        };
        let token = &rest[open + 1..open + 1 + close];
        if !out.iter().any(|t| t == token) {
            out.push(token.to_string());
        }
        rest = &rest[open + 1 + close + 1..];
    }
    out
}
