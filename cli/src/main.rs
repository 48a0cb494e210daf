//! `assist`: command-line host for the assistance API client.
//!
//! Builds one `ApiService` from configuration, runs a single command, and
//! prints the result as pretty JSON. Failures print the user-facing message
//! on stderr and exit with status 1.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use assist_core::client::HealthProbe;
use assist_core::upload::{validate_document, validate_image, validate_text};
use assist_core::{
    ApiService, ClientConfig, FormAnalysisRequest, FormExplanationRequest, ImageTranslationRequest,
    ReqwestTransport, TemplateFilter, TranslationRequest, Upload,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "assist", version, about = "Translate text and images, and get help with forms")]
struct Cli {
    /// Backend base URL. Overrides ASSIST_API_URL.
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Translate a piece of text.
    TranslateText {
        text: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        context: Option<String>,
    },
    /// Translate the text found in an image.
    TranslateImage {
        path: PathBuf,
        #[arg(long)]
        to: String,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        context: Option<String>,
    },
    /// List supported languages.
    Languages,
    /// Explain a form document field by field.
    AnalyzeForm {
        path: PathBuf,
        #[arg(long)]
        to: String,
        #[arg(long)]
        document_type: Option<String>,
        #[arg(long)]
        country: Option<String>,
    },
    /// Explain a single form field.
    ExplainField {
        #[arg(long)]
        field: String,
        #[arg(long)]
        field_context: String,
        #[arg(long)]
        form_type: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        situation: Option<String>,
    },
    /// List form templates, optionally filtered.
    Templates {
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        language: Option<String>,
    },
    /// List form categories.
    Categories,
    /// Query a health probe.
    Health {
        #[arg(value_enum, default_value_t = Probe::Basic)]
        probe: Probe,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Probe {
    Basic,
    Status,
    Readiness,
    Liveness,
}

impl From<Probe> for HealthProbe {
    fn from(probe: Probe) -> Self {
        match probe {
            Probe::Basic => HealthProbe::Basic,
            Probe::Status => HealthProbe::Status,
            Probe::Readiness => HealthProbe::Readiness,
            Probe::Liveness => HealthProbe::Liveness,
        }
    }
}

fn config_for(cli: &Cli, from_env: ClientConfig) -> ClientConfig {
    match &cli.api_url {
        Some(url) => ClientConfig {
            base_url: url.clone(),
            ..from_env
        },
        None => from_env,
    }
}

fn read_upload(path: &Path) -> anyhow::Result<Upload> {
    Upload::from_path(path).with_context(|| format!("could not read {}", path.display()))
}

fn pretty<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

async fn run(api: &ApiService<ReqwestTransport>, command: Command) -> anyhow::Result<String> {
    match command {
        Command::TranslateText { text, to, from, context } => {
            validate_text(&text)?;
            let request = TranslationRequest {
                text,
                source_language: from,
                target_language: to,
                context,
            };
            pretty(&api.translate_text(&request).await?)
        }
        Command::TranslateImage { path, to, from, context } => {
            let image = read_upload(&path)?;
            validate_image(&image)?;
            let request = ImageTranslationRequest {
                image,
                target_language: to,
                source_language: from,
                context,
            };
            pretty(&api.translate_image(&request).await?)
        }
        Command::Languages => pretty(&api.get_languages().await?),
        Command::AnalyzeForm { path, to, document_type, country } => {
            let document = read_upload(&path)?;
            validate_document(&document)?;
            let request = FormAnalysisRequest {
                document,
                target_language: to,
                document_type,
                country,
            };
            pretty(&api.analyze_form(&request).await?)
        }
        Command::ExplainField { field, field_context, form_type, to, situation } => {
            let request = FormExplanationRequest {
                field_name: field,
                field_context,
                form_type,
                target_language: to,
                user_situation: situation,
            };
            pretty(&api.explain_field(&request).await?)
        }
        Command::Templates { country, category, language } => {
            let filter = TemplateFilter { country, category, language };
            pretty(&api.get_templates(&filter).await?)
        }
        Command::Categories => pretty(&api.get_categories().await?),
        Command::Health { probe } => pretty(&api.probe(probe.into()).await?),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config_for(&cli, ClientConfig::from_env());
    tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "client configured");

    let api = match ApiService::from_config(&config) {
        Ok(api) => api,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match report(run(&api, cli.command).await) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

/// Flatten a failure into the single line shown on stderr.
fn report(result: anyhow::Result<String>) -> Result<String, String> {
    result.map_err(|err| format!("{err:#}"))
}
