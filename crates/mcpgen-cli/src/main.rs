mod output;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use mcpgen_core::config::{self, CONFIG_FILE_NAME, McpgenConfig};
use mcpgen_core::descriptor::{self, ExtractionDocument};
use mcpgen_core::registry::NameRegistry;
use mcpgen_core::resolve::resolve_operation;
use mcpgen_core::typegen::{SchemaRefIndexer, TypeCompiler, TypeIndex};
use mcpgen_core::{Generation, ToolsetGenerator};
use mcpgen_python_server::PythonServerGenerator;

#[derive(Parser)]
#[command(name = "mcpgen", about = "MCP server tool-surface generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the Python tool surface from an extraction document
    Generate {
        /// Path to the extraction document (JSON or YAML)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory for the generated package
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the request-model type index (forces untyped bodies)
        #[arg(long)]
        no_models: bool,

        /// Write an .env.example next to the generated package
        #[arg(long)]
        env_template: bool,
    },

    /// Validate an extraction document
    Validate {
        /// Path to the extraction document
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Inspect the resolved operation set of an extraction document
    Inspect {
        /// Path to the extraction document
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new mcpgen configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input, output, no_models, env_template } => {
            cmd_generate(input, output, no_models, env_template)
        }

        Commands::Validate { input } => cmd_validate(&input),

        Commands::Inspect { input, format } => cmd_inspect(&input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "mcpgen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<McpgenConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

fn load_document(path: &Path) -> Result<ExtractionDocument> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
    let doc = match ext {
        "yaml" | "yml" => descriptor::from_yaml(&content)?,
        _ => descriptor::from_json(&content)?,
    };
    Ok(doc)
}

/// Build the best-effort type index. Failure is non-fatal; generation
/// proceeds in degraded mode.
fn build_type_index(doc: &ExtractionDocument, models: bool) -> Option<TypeIndex> {
    if !models {
        return None;
    }
    match SchemaRefIndexer::default().compile(doc) {
        Ok(index) if !index.is_empty() => Some(index),
        Ok(_) => None,
        Err(e) => {
            log::warn!("type compilation failed, continuing untyped: {e}");
            None
        }
    }
}

fn cmd_generate(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    no_models: bool,
    env_template: bool,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output = output.unwrap_or_else(|| PathBuf::from(&cfg.output));

    let doc = load_document(&input)?;
    let types = build_type_index(&doc, cfg.models && !no_models);

    let generator = PythonServerGenerator::new(cfg.base_url_env.clone());
    let generation = generator.generate(&doc, types.as_ref())?;

    output::write_generation(&output, &generation)?;
    if env_template || cfg.env_template {
        output::write_env_template(&output, &cfg.base_url_env, &doc.base_url)?;
    }

    report(&generation, &output);
    Ok(())
}

fn report(generation: &Generation, output: &Path) {
    let tools = generation
        .artifacts
        .iter()
        .filter(|a| a.kind == mcpgen_core::ArtifactKind::Tool)
        .count();
    let prompts = generation
        .artifacts
        .iter()
        .filter(|a| a.kind == mcpgen_core::ArtifactKind::Prompt)
        .count();
    println!("generated {tools} tools and {prompts} prompts in {}", output.display());
    for skip in &generation.skipped {
        println!("warning: skipped operation {:?}: {}", skip.raw_name, skip.reason);
    }
    if generation.types_degraded {
        println!("warning: request models unavailable, tool bodies are untyped");
    }
}

fn cmd_validate(input: &Path) -> Result<()> {
    let doc = load_document(input)?;

    let mut tool_names = NameRegistry::new();
    let mut skipped = 0usize;
    for op in &doc.tools {
        if let Err(e) = resolve_operation(op, &mut tool_names) {
            println!("warning: {e}");
            skipped += 1;
        }
    }

    println!(
        "{} is valid: {} operations ({} would be skipped)",
        input.display(),
        doc.tools.len(),
        skipped
    );
    Ok(())
}

#[derive(serde::Serialize)]
struct InspectReport {
    tools: Vec<mcpgen_core::resolve::ResolvedOperation>,
    skipped: Vec<mcpgen_core::SkippedOperation>,
}

fn cmd_inspect(input: &Path, format: InspectFormat) -> Result<()> {
    let doc = load_document(input)?;

    let mut tool_names = NameRegistry::new();
    let mut report = InspectReport { tools: Vec::new(), skipped: Vec::new() };
    for op in &doc.tools {
        match resolve_operation(op, &mut tool_names) {
            Ok(resolved) => report.tools.push(resolved),
            Err(e) => report.skipped.push(mcpgen_core::SkippedOperation {
                raw_name: op.name.clone(),
                reason: e.to_string(),
            }),
        }
    }

    let rendered = match format {
        InspectFormat::Yaml => serde_yaml_ng::to_string(&report)?,
        InspectFormat::Json => serde_json::to_string_pretty(&report)?,
    };
    println!("{rendered}");
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    if path.exists() && !force {
        anyhow::bail!("{CONFIG_FILE_NAME} already exists (use --force to overwrite)");
    }
    fs::write(&path, config::default_config_content())
        .with_context(|| format!("failed to write {CONFIG_FILE_NAME}"))?;
    println!("wrote {CONFIG_FILE_NAME}");
    Ok(())
}
