use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level project configuration loaded from `.mcpgen.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct McpgenConfig {
    /// Path to the extraction document (JSON or YAML).
    pub input: String,
    /// Directory the generated Python package is written to.
    pub output: String,
    /// Environment variable the generated tools consult for the base URL at
    /// execution time.
    pub base_url_env: String,
    /// Whether to build a type index for typed request bodies.
    pub models: bool,
    /// Whether to write an `.env.example` next to the generated package.
    pub env_template: bool,
}

impl Default for McpgenConfig {
    fn default() -> Self {
        Self {
            input: "extraction.json".to_string(),
            output: "generated".to_string(),
            base_url_env: "API_BASE_URL".to_string(),
            models: true,
            env_template: false,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".mcpgen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<McpgenConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: McpgenConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# mcpgen configuration
input: extraction.json   # extraction document (json or yaml)
output: generated        # output directory for the python package

base_url_env: API_BASE_URL  # env var checked by generated tools at runtime
models: true                # index request schema refs for typed bodies
env_template: false         # write .env.example next to the output
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = McpgenConfig::default();
        assert_eq!(config.input, "extraction.json");
        assert_eq!(config.output, "generated");
        assert_eq!(config.base_url_env, "API_BASE_URL");
        assert!(config.models);
        assert!(!config.env_template);
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
input: api.yaml
output: out
base_url_env: PETSTORE_URL
models: false
env_template: true
"#;
        let config: McpgenConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "api.yaml");
        assert_eq!(config.output, "out");
        assert_eq!(config.base_url_env, "PETSTORE_URL");
        assert!(!config.models);
        assert!(config.env_template);
    }

    #[test]
    fn test_parse_minimal_config() {
        let yaml = "input: api.json\n";
        let config: McpgenConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "api.json");
        // Defaults applied
        assert_eq!(config.output, "generated");
        assert!(config.models);
    }

    #[test]
    fn test_default_content_parses() {
        let config: McpgenConfig = serde_yaml_ng::from_str(default_config_content()).unwrap();
        assert_eq!(config.base_url_env, "API_BASE_URL");
    }
}
