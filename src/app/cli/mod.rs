//! CLI Adapter.

mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::adapters::MinijinjaTemplateRenderer;
use crate::app::commands::{demo, list};
use crate::app::{AppContext, config, logging};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "phiprompt")]
#[command(version)]
#[command(
    about = "Build HIPAA-aware clinical summary and LLM validation prompts",
    long_about = None
)]
struct Cli {
    /// Prompt config file (defaults to ./phiprompt.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available prompt kinds and their fields
    #[clap(visible_alias = "ls")]
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render a prompt from request fields
    #[clap(visible_alias = "r")]
    Render {
        /// Prompt kind (e.g. vitals-summary, phi-scrub)
        kind: String,
        /// Request field as key=value (repeatable)
        #[arg(short, long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,
        /// Read request fields from a .json, .yml or .toml file
        #[arg(short, long, value_name = "FILE")]
        request: Option<PathBuf>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print every prompt built from sample data
    Demo,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::List { json } => run_list(cli.config, json),
        Commands::Render { kind, fields, request, json } => {
            load_context(cli.config).and_then(|ctx| {
                render::run_render(&ctx, &kind, &fields, request.as_deref(), json)
            })
        }
        Commands::Demo => {
            run_demo();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_context(
    config_path: Option<PathBuf>,
) -> Result<AppContext<MinijinjaTemplateRenderer>, AppError> {
    let renderer = MinijinjaTemplateRenderer::new();
    let cwd = std::env::current_dir()?;
    let config = config::load_config(config_path.as_deref(), &cwd, &renderer)?;
    Ok(AppContext::new(config, renderer))
}

fn run_list(config_path: Option<PathBuf>, json: bool) -> Result<(), AppError> {
    let ctx = load_context(config_path)?;
    let overridden: Vec<_> = ctx.config().overrides.kinds().collect();
    let summaries = list::execute(&overridden);

    if json {
        let rendered = serde_json::to_string_pretty(&summaries).map_err(|err| {
            AppError::ParseError { what: "prompt list".to_string(), details: err.to_string() }
        })?;
        println!("{}", rendered);
        return Ok(());
    }

    for summary in &summaries {
        let marker = if summary.overridden { " (overridden)" } else { "" };
        println!("{}{}", summary.kind, marker);
        println!("    {}", summary.description);
        if !summary.required_fields.is_empty() {
            println!("    required: {}", summary.required_fields.join(", "));
        }
        if !summary.optional_fields.is_empty() {
            println!("    optional: {}", summary.optional_fields.join(", "));
        }
    }
    Ok(())
}

fn run_demo() {
    for (i, outcome) in demo::execute().iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("=== {} ===", outcome.kind);
        println!("{}", outcome.prompt);
    }
}
