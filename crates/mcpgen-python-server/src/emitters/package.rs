use minijinja::{Environment, context};

use mcpgen_core::{ArtifactKind, GeneratedArtifact};

use super::tools::ensure_trailing_newline;

/// Emit a package `__init__` aggregation module: re-exports each generated
/// symbol and collects them into a registration tuple, the hook the server
/// wiring registers tools and prompts from.
pub fn emit_package_init(
    identifier: &str,
    doc: &str,
    registry: &str,
    entries: &[(String, String)],
) -> GeneratedArtifact {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template(
        "package_init.py.j2",
        include_str!("../../templates/package_init.py.j2"),
    )
    .expect("template should be valid");
    let tmpl = env.get_template("package_init.py.j2").unwrap();

    let entries: Vec<minijinja::Value> = entries
        .iter()
        .map(|(module, symbol)| context! { module => module, symbol => symbol })
        .collect();

    let content = tmpl
        .render(context! {
            doc => doc,
            registry => registry,
            entries => entries,
        })
        .expect("render should succeed");

    GeneratedArtifact {
        identifier: identifier.to_string(),
        kind: ArtifactKind::Package,
        content: ensure_trailing_newline(content),
    }
}
