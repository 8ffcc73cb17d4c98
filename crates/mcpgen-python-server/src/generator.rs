use mcpgen_core::descriptor::ExtractionDocument;
use mcpgen_core::error::GenerateError;
use mcpgen_core::grouping::{DEFAULT_CATEGORY, group_by_category};
use mcpgen_core::registry::NameRegistry;
use mcpgen_core::resolve::{ResolvedOperation, TOOL_FALLBACK, resolve_operation};
use mcpgen_core::sanitize::{DigitPrefix, sanitize};
use mcpgen_core::typegen::TypeIndex;
use mcpgen_core::{Generation, SkippedOperation, ToolsetGenerator};

use crate::emitters::package::emit_package_init;
use crate::emitters::prompts::{PromptEntry, emit_prompt};
use crate::emitters::tools::emit_tool;

/// Python MCP-server target generator.
pub struct PythonServerGenerator {
    /// Environment variable generated tools consult for the base URL.
    pub base_url_env: String,
}

impl Default for PythonServerGenerator {
    fn default() -> Self {
        Self { base_url_env: "API_BASE_URL".to_string() }
    }
}

impl PythonServerGenerator {
    pub fn new(base_url_env: impl Into<String>) -> Self {
        Self { base_url_env: base_url_env.into() }
    }
}

impl ToolsetGenerator for PythonServerGenerator {
    type Error = GenerateError;

    fn generate(
        &self,
        doc: &ExtractionDocument,
        types: Option<&TypeIndex>,
    ) -> Result<Generation, GenerateError> {
        // Name reservation happens strictly in input order; everything after
        // this loop is a pure function of the resolved list.
        let mut tool_names = NameRegistry::new();
        let mut resolved: Vec<Option<ResolvedOperation>> = Vec::with_capacity(doc.tools.len());
        let mut skipped = Vec::new();
        for op in &doc.tools {
            match resolve_operation(op, &mut tool_names) {
                Ok(r) => resolved.push(Some(r)),
                Err(e) => {
                    log::warn!("skipping operation {:?}: {e}", op.name);
                    skipped.push(SkippedOperation {
                        raw_name: op.name.clone(),
                        reason: e.to_string(),
                    });
                    resolved.push(None);
                }
            }
        }

        let mut artifacts = Vec::new();
        let mut types_degraded = false;
        let mut tool_entries = Vec::new();
        for r in resolved.iter().flatten() {
            let (artifact, degraded) = emit_tool(r, &doc.base_url, &self.base_url_env, types);
            types_degraded |= degraded;
            tool_entries.push((r.tool_name.clone(), r.tool_name.clone()));
            artifacts.push(artifact);
        }
        if types_degraded {
            log::warn!("request models unavailable; affected tool bodies fall back to untyped payloads");
        }

        // Prompts cover the full operation list, including operations whose
        // tool generation was skipped; their lines carry the fallback
        // identifier so the reference stays complete.
        let mut prompt_names = NameRegistry::new();
        let mut prompt_entries = Vec::new();
        for group in group_by_category(&doc.tools) {
            let candidate = sanitize(&group.name, DEFAULT_CATEGORY, DigitPrefix::Tool);
            let identifier = prompt_names.reserve(&candidate);
            let entries: Vec<PromptEntry> = group
                .operation_indices
                .iter()
                .map(|&i| {
                    let op = &doc.tools[i];
                    let tool = resolved[i]
                        .as_ref()
                        .map(|r| r.tool_name.clone())
                        .unwrap_or_else(|| sanitize(&op.name, TOOL_FALLBACK, DigitPrefix::Tool));
                    PromptEntry {
                        tool,
                        method: op.method.as_str(),
                        path: op.path.clone(),
                        summary: op.description.clone(),
                    }
                })
                .collect();
            artifacts.push(emit_prompt(&identifier, &group.name, &entries));
            prompt_entries.push((identifier.clone(), format!("{identifier}_prompt")));
        }

        artifacts.push(emit_package_init(
            "tools",
            "Generated tool wrappers, one module per API operation.",
            "TOOLS",
            &tool_entries,
        ));
        artifacts.push(emit_package_init(
            "prompts",
            "Generated operation-reference prompts, one module per category.",
            "PROMPTS",
            &prompt_entries,
        ));

        Ok(Generation { artifacts, skipped, types_degraded })
    }
}
