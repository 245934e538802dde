mod console;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use console::{ConsoleInput, ConsoleView};
use feedback_form::{
    Attachment, FormController, FormSettings, HttpTransport, InitData, SubmitOutcome,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "feedback-submit")]
#[command(version, about = "Validate and submit the feedback form from a terminal", long_about = None)]
struct Cli {
    /// Feedback category (one of --types)
    #[arg(short = 't', long = "type")]
    feedback_type: String,

    /// Full name
    #[arg(short, long)]
    name: String,

    /// Contact email
    #[arg(short, long)]
    email: String,

    /// Contact phone (optional)
    #[arg(short, long, default_value = "")]
    phone: String,

    /// Message text
    #[arg(short, long)]
    message: String,

    /// File to attach (JPG, PNG or PDF, up to 5 MB)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Allowed categories, comma separated
    #[arg(long, value_delimiter = ',', default_value = "suggestion,problem,complaint,other")]
    types: Vec<String>,

    /// Settings file
    #[arg(short, long, default_value = "feedback.toml")]
    config: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = FormSettings::load(&cli.config)?;

    let attachment = cli
        .file
        .as_ref()
        .map(|path| {
            Attachment::read(path).with_context(|| format!("Failed to read attachment: {:?}", path))
        })
        .transpose()?;

    let view = ConsoleView::new(ConsoleInput {
        feedback_type: cli.feedback_type,
        full_name: cli.name,
        email: cli.email,
        phone: cli.phone,
        message: cli.message,
        attachment,
    });
    let transport = HttpTransport::from_settings(&settings.http)
        .context("Failed to build HTTP client")?;

    let form = FormController::new(
        settings.validation_config(&InitData::from_values(cli.types)),
        settings.catalog(),
        view,
        transport,
    )
    .with_endpoint(settings.form.endpoint.clone());

    form.init();
    form.handle_message_input();

    let code = match form.handle_submit().await {
        SubmitOutcome::Redirected(_) => ExitCode::SUCCESS,
        SubmitOutcome::Accepted(status) => {
            println!("{} server answered {}", "✓".green().bold(), status);
            ExitCode::SUCCESS
        }
        SubmitOutcome::Invalid => {
            eprintln!("{}", "Fix the fields above and try again.".yellow());
            ExitCode::from(2)
        }
        SubmitOutcome::Rejected(_) | SubmitOutcome::Failed(_) | SubmitOutcome::Ignored => {
            ExitCode::FAILURE
        }
    };

    Ok(code)
}
