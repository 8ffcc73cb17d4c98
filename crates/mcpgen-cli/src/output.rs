//! Filesystem boundary: maps generated artifacts to paths and writes them.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use mcpgen_core::{ArtifactKind, GeneratedArtifact, Generation};

/// Relative path an artifact is written to within the output directory.
fn artifact_path(artifact: &GeneratedArtifact) -> PathBuf {
    match artifact.kind {
        ArtifactKind::Tool => PathBuf::from("tools").join(format!("{}.py", artifact.identifier)),
        ArtifactKind::Prompt => {
            PathBuf::from("prompts").join(format!("{}.py", artifact.identifier))
        }
        ArtifactKind::Package => PathBuf::from(&artifact.identifier).join("__init__.py"),
    }
}

/// Write every artifact of a generation run under `output`, creating the
/// package directories and the root `__init__.py`.
pub fn write_generation(output: &Path, generation: &Generation) -> Result<()> {
    for dir in [output.to_path_buf(), output.join("tools"), output.join("prompts")] {
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let root_init = output.join("__init__.py");
    fs::write(&root_init, "")
        .with_context(|| format!("failed to write {}", root_init.display()))?;

    for artifact in &generation.artifacts {
        let path = output.join(artifact_path(artifact));
        fs::write(&path, &artifact.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
}

/// Write an `.env.example` documenting the runtime base-URL override.
pub fn write_env_template(output: &Path, base_url_env: &str, base_url: &str) -> Result<()> {
    let content = format!(
        "# Runtime configuration for the generated tools\n\
         # Overrides the generation-time default ({base_url})\n\
         {base_url_env}={base_url}\n"
    );
    let path = output.join(".env.example");
    fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcpgen_core::SkippedOperation;

    fn artifact(identifier: &str, kind: ArtifactKind) -> GeneratedArtifact {
        GeneratedArtifact {
            identifier: identifier.to_string(),
            kind,
            content: format!("# {identifier}\n"),
        }
    }

    #[test]
    fn writes_artifacts_to_kind_directories() {
        let dir = tempfile::tempdir().unwrap();
        let generation = Generation {
            artifacts: vec![
                artifact("getUser", ArtifactKind::Tool),
                artifact("general", ArtifactKind::Prompt),
                artifact("tools", ArtifactKind::Package),
            ],
            skipped: Vec::<SkippedOperation>::new(),
            types_degraded: false,
        };

        write_generation(dir.path(), &generation).unwrap();

        assert!(dir.path().join("__init__.py").exists());
        assert!(dir.path().join("tools/getUser.py").exists());
        assert!(dir.path().join("prompts/general.py").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("tools/__init__.py")).unwrap(),
            "# tools\n"
        );
    }

    #[test]
    fn env_template_carries_the_default() {
        let dir = tempfile::tempdir().unwrap();
        write_env_template(dir.path(), "API_BASE_URL", "https://api.example.com").unwrap();
        let content = fs::read_to_string(dir.path().join(".env.example")).unwrap();
        assert!(content.contains("API_BASE_URL=https://api.example.com"));
    }
}
