//! servergen CLI entrypoint
//! Parses command-line arguments and dispatches to the server generators.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use servergen::{
    core::config::{Configuration, GenerateOptions},
    generation::{Framework, RenderContext, go_source, select_generator},
    infrastructure::{
        TeraEngine,
        openapi::{CompositeOperationLoader, OperationLoader},
        output::write_output,
    },
};
use std::path::{Path, PathBuf};

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "servergen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate Go server scaffolding from an OpenAPI specification
    Generate {
        /// Path or URL to the OpenAPI document (YAML or JSON)
        #[arg(long)]
        spec: String,
        /// Configuration file (YAML or TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Server framework to generate for; overrides the configuration
        #[arg(long)]
        framework: Option<Framework>,
        /// Split the server interface into one interface per operation tag
        #[arg(long)]
        group_by_tag: bool,
        /// Custom template directory
        #[arg(long)]
        template_dir: Option<PathBuf>,
        /// Go package name of the generated file
        #[arg(long)]
        package: Option<String>,
        /// Output file; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List the supported frameworks and their template sets
    Frameworks,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO, on stderr so stdout stays clean for generated code
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            spec,
            config,
            framework,
            group_by_tag,
            template_dir,
            package,
            output,
        } => {
            generate_server(GenerateParams {
                spec: &spec,
                config: config.as_deref(),
                framework,
                group_by_tag,
                template_dir: template_dir.as_deref(),
                package,
                output,
            })
            .await?
        }
        Commands::Frameworks => list_frameworks(),
    }
    Ok(())
}

/// Parameters for server generation
struct GenerateParams<'a> {
    spec: &'a str,
    config: Option<&'a Path>,
    framework: Option<Framework>,
    group_by_tag: bool,
    template_dir: Option<&'a Path>,
    package: Option<String>,
    output: Option<PathBuf>,
}

/// Generate server code from an OpenAPI specification
async fn generate_server(params: GenerateParams<'_>) -> anyhow::Result<()> {
    let mut configuration = match params.config {
        Some(path) => Configuration::load(path)
            .await
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Configuration::default(),
    };

    // Command-line flags win over the configuration file
    if let Some(framework) = params.framework {
        configuration.generate = GenerateOptions::from_framework(framework);
    }
    if params.group_by_tag {
        configuration.output_options.group_by_tag = true;
    }
    if let Some(package) = params.package {
        configuration.package_name = package;
    }
    if let Some(output) = params.output {
        configuration.output = Some(output.to_string_lossy().into_owned());
    }

    let framework = configuration
        .generate
        .selected_framework()
        .context("Invalid framework selection")?;

    match framework {
        Some(framework) => info!(framework = %framework, spec = %params.spec, "Generating server"),
        None => warn!("No server framework selected; only the package clause will be written"),
    }

    let loader = CompositeOperationLoader::new().context("Failed to create OpenAPI loader")?;
    let operations = loader
        .load(params.spec)
        .await
        .context("Failed to load OpenAPI schema")?;
    info!(count = operations.len(), "Loaded operations");

    let engine = match params.template_dir {
        Some(dir) => TeraEngine::from_dir(dir)
            .with_context(|| format!("Failed to load templates from {}", dir.display()))?,
        None => TeraEngine::embedded().context("Failed to load built-in templates")?,
    };

    let data = RenderContext::new(operations, &configuration)
        .to_value()
        .context("Failed to build render context")?;

    let code = select_generator(framework)
        .generate(&engine, &data)
        .map_err(|e| {
            error!(template = %e.template(), error = %e, "Generation failed");
            anyhow::anyhow!(e)
        })?;

    let source = go_source(&configuration.package_name, framework, &code);
    let output = configuration.output.as_deref().map(Path::new);
    write_output(output, &source)
        .await
        .context("Failed to write generated code")?;

    if let Some(path) = output {
        info!(path = %path.display(), "Generated server code");
    }
    Ok(())
}

/// Print every supported framework with its template set
fn list_frameworks() {
    for framework in Framework::all() {
        println!("{} ({})", framework.as_str(), framework.display_name());
        for template in framework.template_set().iter() {
            println!("  {}", template);
        }
    }
}
