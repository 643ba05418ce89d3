//! svcgen CLI entrypoint
//! Parses command-line arguments and dispatches to the client generator.
#![deny(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use svcgen::application::{GenerateClientRequest, GenerateClientUseCase};
use svcgen::config::GeneratorConfig;
use svcgen::generation::PostProcessor;
use svcgen::infrastructure::generation::{FormatterPostProcessor, TeraTemplateRenderer};
use svcgen::infrastructure::output::FileSystemOutputService;
use svcgen::infrastructure::service::CompositeServiceLoader;
use svcgen::infrastructure::shell::ProcessCommandExecutor;
use svcgen::infrastructure::templates::DEFAULT_TEMPLATE;

#[derive(Parser)]
#[command(name = "svcgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate a client module from a service description
    Generate(GenerateArgs),
    /// Print the embedded default template
    Template,
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Module name for the generated client, e.g. Bodh.Iot
    #[arg(long)]
    module_name: Option<String>,
    /// Path or URL of the service description (JSON)
    #[arg(long)]
    source: Option<String>,
    /// Template file to render instead of the embedded default
    #[arg(long)]
    template: Option<PathBuf>,
    /// Output directory for the generated module
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Include only required structure members
    #[arg(long)]
    only_required: bool,
    /// Skip running the formatter on the generated file
    #[arg(long)]
    no_format: bool,
    /// Configuration file (defaults to ./svcgen.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, env_directives.as_deref()))
        .init();

    match cli.command {
        Commands::Generate(args) => generate_client(args).await?,
        Commands::Template => print!("{DEFAULT_TEMPLATE}"),
    }
    Ok(())
}

/// Log filter: `--verbose` forces DEBUG, otherwise `RUST_LOG` if set and valid, else INFO
fn log_filter(verbose: bool, env_directives: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    env_directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Merge command-line flags over file configuration
fn resolve_config(args: GenerateArgs) -> anyhow::Result<GeneratorConfig> {
    let mut config =
        GeneratorConfig::load(args.config.as_deref()).context("Failed to load configuration")?;

    if let Some(module_name) = args.module_name {
        config.module_name = Some(module_name);
    }
    if let Some(source) = args.source {
        config.source = Some(source);
    }
    if let Some(template) = args.template {
        config.template = Some(template);
    }
    if let Some(output_dir) = args.output_dir {
        config.output_dir = output_dir;
    }
    if args.only_required {
        config.only_required = true;
    }
    if args.no_format {
        config.formatter.clear();
    }
    Ok(config)
}

/// Generate a client module
async fn generate_client(args: GenerateArgs) -> anyhow::Result<()> {
    let config = resolve_config(args)?;
    let request =
        GenerateClientRequest::from_config(&config).context("Invalid generation request")?;

    info!(
        module_name = %request.module_name,
        source = %request.source,
        only_required = request.only_required,
        "Generating client module"
    );

    let post_processor: Option<Arc<dyn PostProcessor>> =
        config.formatter_command().map(|command| {
            Arc::new(FormatterPostProcessor::new(
                Arc::new(ProcessCommandExecutor::new()),
                command,
            )) as Arc<dyn PostProcessor>
        });

    let use_case = GenerateClientUseCase::new(
        Arc::new(CompositeServiceLoader::new().context("Failed to initialize service loader")?),
        Arc::new(TeraTemplateRenderer::new()),
        Arc::new(FileSystemOutputService::new()),
        post_processor,
    );

    let response = use_case
        .execute(request)
        .await
        .context("Failed to generate client module")?;

    info!(
        output_path = %response.output_path.display(),
        types = response.type_count,
        operations = response.operation_count,
        diagnostics = response.diagnostics.len(),
        formatted = response.formatted,
        "Successfully generated client module"
    );
    println!(
        "Generated {} ({} types, {} functions, {} diagnostics)",
        response.output_path.display(),
        response.type_count,
        response.operation_count,
        response.diagnostics.len()
    );
    Ok(())
}
