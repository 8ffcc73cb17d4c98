use minijinja::{Environment, context};

use mcpgen_core::descriptor::HttpMethod;
use mcpgen_core::resolve::{ResolvedLocation, ResolvedOperation};
use mcpgen_core::typegen::TypeIndex;
use mcpgen_core::{ArtifactKind, GeneratedArtifact};

use super::filters::{py_str, sanitize_docstring};
use crate::type_mapper::signature_entry;

/// Whether the emitted tool body is typed, and with what.
struct BodyTyping {
    typed: bool,
    class_name: String,
    module: String,
}

/// Emit one Python tool wrapper module for a resolved operation.
///
/// Returns the artifact and whether the body was emitted untyped despite a
/// request schema being expected (degraded mode input for the run report).
pub fn emit_tool(
    op: &ResolvedOperation,
    base_url: &str,
    base_url_env: &str,
    types: Option<&TypeIndex>,
) -> (GeneratedArtifact, bool) {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("tool.py.j2", include_str!("../../templates/tool.py.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("tool.py.j2").unwrap();

    let body = body_typing(op, types);
    let degraded = op.has_body && !body.typed;

    let doc = if op.description.trim().is_empty() {
        format!("{} {}", op.method.as_str(), op.path)
    } else {
        sanitize_docstring(&op.description)
    };

    let required_query: Vec<minijinja::Value> = op
        .params
        .iter()
        .filter(|p| p.location == ResolvedLocation::Query && p.required)
        .map(|p| context! { raw => py_str(&p.raw_name), name => p.sanitized_name.clone() })
        .collect();
    let optional_query: Vec<minijinja::Value> = op
        .params
        .iter()
        .filter(|p| p.location == ResolvedLocation::Query && !p.required)
        .map(|p| context! { raw => py_str(&p.raw_name), name => p.sanitized_name.clone() })
        .collect();
    let has_query = !required_query.is_empty() || !optional_query.is_empty();
    let signature = build_signature(op, &body);
    let body_payload = if body.typed { "body.model_dump()" } else { "body" };

    let content = tmpl
        .render(context! {
            tool_name => op.tool_name.clone(),
            method => op.method.as_str(),
            verb => verb(op.method),
            path => op.path.clone(),
            doc => doc,
            base_url => py_str(base_url),
            base_url_env => py_str(base_url_env),
            url => url_fstring(op),
            signature => signature,
            has_query => has_query,
            required_query => required_query,
            optional_query => optional_query,
            has_body => op.has_body,
            typed_body => body.typed,
            body_class => body.class_name,
            models_module => body.module,
            body_payload => body_payload,
        })
        .expect("render should succeed");

    let artifact = GeneratedArtifact {
        identifier: op.tool_name.clone(),
        kind: ArtifactKind::Tool,
        content: ensure_trailing_newline(content),
    };
    (artifact, degraded)
}

fn verb(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "get",
        HttpMethod::Post => "post",
        HttpMethod::Put => "put",
        HttpMethod::Patch => "patch",
        HttpMethod::Delete => "delete",
    }
}

fn body_typing(op: &ResolvedOperation, types: Option<&TypeIndex>) -> BodyTyping {
    let class_name = op
        .request_schema_ref
        .as_deref()
        .and_then(|r| types.and_then(|t| t.class_for(r)))
        .map(String::from);
    match class_name {
        Some(class_name) => BodyTyping {
            typed: true,
            module: types.map(|t| t.module.clone()).unwrap_or_default(),
            class_name,
        },
        None => BodyTyping { typed: false, class_name: String::new(), module: String::new() },
    }
}

/// Render the def signature: resolved parameters in order, then the body.
///
/// A default-less parameter after a defaulted one (the synthetic body after
/// optional parameters) is made keyword-only behind a `*` separator, which
/// keeps the signature valid Python without reordering the resolved list.
fn build_signature(op: &ResolvedOperation, body: &BodyTyping) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(op.params.len());
    let mut seen_default = false;
    let mut star_inserted = false;
    for p in &op.params {
        let (entry, has_default) = match p.location {
            ResolvedLocation::Body => {
                let entry = if body.typed {
                    format!("{}: {}", p.sanitized_name, body.class_name)
                } else {
                    format!("{}: dict[str, Any]", p.sanitized_name)
                };
                (entry, false)
            }
            _ => (signature_entry(&p.sanitized_name, p.ty, p.required), !p.required),
        };
        if seen_default && !has_default && !star_inserted {
            parts.push("*".to_string());
            star_inserted = true;
        }
        seen_default |= has_default;
        parts.push(entry);
    }
    parts.join(", ")
}

/// Substitute every path placeholder with its sanitized parameter name and
/// prefix the runtime base-URL token, yielding an f-string body.
fn url_fstring(op: &ResolvedOperation) -> String {
    let mut path = py_str(&op.path);
    for p in op.params.iter().filter(|p| p.location == ResolvedLocation::Path) {
        path = path.replace(
            &format!("{{{}}}", py_str(&p.raw_name)),
            &format!("{{{}}}", p.sanitized_name),
        );
    }
    format!("{{BASE_URL}}{path}")
}

pub(crate) fn ensure_trailing_newline(mut content: String) -> String {
    if !content.ends_with('\n') {
        content.push('\n');
    }
    content
}
