use minijinja::{Environment, context};

use mcpgen_core::{ArtifactKind, GeneratedArtifact};

use super::filters::{one_line, py_str};
use super::tools::ensure_trailing_newline;

/// One operation line of a category reference prompt.
#[derive(Debug, Clone)]
pub struct PromptEntry {
    pub tool: String,
    pub method: &'static str,
    pub path: String,
    pub summary: String,
}

/// Emit the operation-reference prompt module for one category.
///
/// `identifier` is the sanitized, run-unique category name; it doubles as
/// the artifact identifier and the emitted function prefix.
pub fn emit_prompt(
    identifier: &str,
    category_raw: &str,
    entries: &[PromptEntry],
) -> GeneratedArtifact {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("prompt.py.j2", include_str!("../../templates/prompt.py.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("prompt.py.j2").unwrap();

    let lines: Vec<String> = entries.iter().map(render_line).collect();

    let content = tmpl
        .render(context! {
            category => identifier,
            category_label => one_line(category_raw),
            lines => lines,
        })
        .expect("render should succeed");

    GeneratedArtifact {
        identifier: identifier.to_string(),
        kind: ArtifactKind::Prompt,
        content: ensure_trailing_newline(content),
    }
}

fn render_line(entry: &PromptEntry) -> String {
    let mut line = format!("- {} ({} {})", entry.tool, entry.method, py_str(&entry.path));
    let summary = one_line(&entry.summary);
    if !summary.is_empty() {
        line.push_str(": ");
        line.push_str(&summary);
    }
    line
}
