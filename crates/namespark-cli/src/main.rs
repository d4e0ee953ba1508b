mod logging;
mod workspace;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use namespark_core::{
    Error as CoreError, FormInput, FormState, industry_options, vibe_options,
};
use namespark_generate::output::{OutputFormat, json, text};
use namespark_generate::{GenerateOptions, GenerationError, NameGenerator};
use schemars::schema_for;
use thiserror::Error;
use uuid::Uuid;
use workspace::{GenerationRecord, Settings, load_settings, save_settings, write_record};

#[derive(Debug, Error)]
enum CliError {
    #[error("workspace error: {0}")]
    Workspace(#[from] workspace::WorkspaceError),
    #[error("logging error: {0}")]
    Logging(#[from] logging::LoggingError),
    #[error("{0}")]
    Form(#[from] CoreError),
    #[error("output error: {0}")]
    Output(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Parser, Debug)]
#[command(name = "namespark", version, about = "Startup name generator")]
struct Cli {
    /// Settings file.
    #[arg(long, global = true, default_value = "namespark.toml")]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate candidate names.
    Generate(GenerateArgs),
    /// List the industries and vibes the lexicons know.
    Options,
    /// Print the JSON Schema of the form input.
    Schema,
    /// Manage the settings file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default settings file.
    Init {
        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Print the effective settings.
    Show,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Startup concept, in a sentence.
    #[arg(long, conflicts_with = "input")]
    concept: Option<String>,
    /// Industry, ex.: Tech, Finance, E-commerce.
    #[arg(long, conflicts_with = "input")]
    industry: Option<String>,
    /// Vibe, ex.: Modern, Playful, Premium.
    #[arg(long, conflicts_with = "input")]
    vibe: Option<String>,
    /// Comma-separated keywords.
    #[arg(long, conflicts_with = "input")]
    keywords: Option<String>,
    /// JSON file with coreConcept, industry, vibe and keywords.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
    /// Seed for reproducible names.
    #[arg(long)]
    seed: Option<u64>,
    /// Output format (text or json); defaults to the settings file.
    #[arg(long)]
    format: Option<OutputFormat>,
    /// Also write the result, with its report, to this JSON file.
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
    /// Print which patterns were skipped and why.
    #[arg(long, default_value_t = false)]
    report: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = load_settings(&cli.config)?;

    match cli.command {
        Command::Generate(args) => {
            logging::init_logging(&settings)?;
            run_generate(args, &settings)
        }
        Command::Options => print_options(),
        Command::Schema => print_schema(),
        Command::Config(command) => run_config(command, &cli.config, &settings),
    }
}

fn run_generate(args: GenerateArgs, settings: &Settings) -> Result<(), CliError> {
    let timer = Instant::now();
    let raw = collect_input(&args, settings)?;

    let mut form =
        FormState::with_keyword_placeholder(settings.keyword_placeholder()).prefilled(raw);
    let input = form.submit()?;

    let run_id = Uuid::new_v4().to_string();
    tracing::info!(
        event = "generation_started",
        run_id = %run_id,
        industry = %input.industry,
        vibe = %input.vibe,
        seed = ?args.seed
    );

    let generator = NameGenerator::new(GenerateOptions { seed: args.seed });
    let result = generator.generate(&input);

    let format = args.format.unwrap_or(settings.output);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            text::write_names(&mut out, &result.names)?;
            if args.report {
                writeln!(out)?;
                text::write_report(&mut out, &result.report)?;
            }
        }
        OutputFormat::Json if args.report => json::write_json(&mut out, &result)?,
        OutputFormat::Json => json::write_json(&mut out, &result.names)?,
    }
    out.flush()?;

    if let Some(path) = args.out.as_deref() {
        let record = GenerationRecord {
            run_id: run_id.clone(),
            generated_at: chrono::Utc::now(),
            seed: args.seed,
            input: &input,
            names: &result.names,
            report: &result.report,
        };
        write_record(path, &record)?;
        tracing::info!(event = "result_written", path = %path.display());
    }

    let duration_ms = timer.elapsed().as_millis();
    tracing::info!(
        event = "generation_finished",
        run_id = %run_id,
        names = result.names.len(),
        duplicates_removed = result.report.duplicates_removed,
        duration_ms = duration_ms
    );

    Ok(())
}

fn collect_input(args: &GenerateArgs, settings: &Settings) -> Result<FormInput, CliError> {
    let mut input = match &args.input {
        Some(path) => {
            let contents = std::fs::read_to_string(path).map_err(|err| {
                CliError::InvalidInput(format!("failed to read {}: {err}", path.display()))
            })?;
            serde_json::from_str::<FormInput>(&contents)?
        }
        None => FormInput::new(
            args.concept.clone().unwrap_or_default(),
            args.industry.clone().unwrap_or_default(),
            args.vibe.clone().unwrap_or_default(),
            args.keywords.clone().unwrap_or_default(),
        ),
    };

    settings.defaults.fill_blank(&mut input);
    Ok(input)
}

fn print_options() -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Industries:")?;
    for option in industry_options() {
        writeln!(out, "  {:<12} {}", option.value, option.label)?;
    }
    writeln!(out, "Vibes:")?;
    for option in vibe_options() {
        writeln!(out, "  {:<12} {}", option.value, option.label)?;
    }
    Ok(())
}

fn print_schema() -> Result<(), CliError> {
    let schema = schema_for!(FormInput);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn run_config(command: ConfigCommand, path: &Path, settings: &Settings) -> Result<(), CliError> {
    match command {
        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::InvalidInput(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            save_settings(path, &Settings::default())?;
            println!("wrote {}", path.display());
        }
        ConfigCommand::Show => {
            let encoded = toml::to_string_pretty(settings)
                .map_err(workspace::WorkspaceError::from)?;
            print!("{encoded}");
        }
    }
    Ok(())
}
