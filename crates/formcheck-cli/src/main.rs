//! formcheck CLI
//!
//! Command-line tool for validating registration form submissions.

mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use formcheck::fields::{registration_fields, registration_form, PASSWORD};
use formcheck::preview::PreviewLoader;
use formcheck::validation::{luhn_valid, mask_credit_card};
use formcheck::{FieldValue, FormData, ValidationConfig, ValueKind};

use crate::report::Report;

/// Validate registration form submissions.
#[derive(Parser)]
#[command(name = "formcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file overriding validation limits.
    #[arg(short, long, env = "FORMCHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Date ages are measured on (YYYY-MM-DD); today if not specified.
    #[arg(long, env = "FORMCHECK_TODAY")]
    today: Option<NaiveDate>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a whole submission stored as a JSON object.
    Check {
        /// Submission file.
        file: PathBuf,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,

        /// Do not load image previews.
        #[arg(long)]
        no_preview: bool,
    },

    /// Validate a single text field.
    Field {
        /// Field name, e.g. `zip-code`.
        name: String,

        /// Value to validate.
        value: String,

        /// Password to compare against for `confirm-password`.
        #[arg(long)]
        password: Option<String>,
    },

    /// Check a card number against the Luhn checksum.
    Luhn {
        /// Card number; separators are ignored.
        number: String,
    },

    /// List the registration form fields.
    Fields,
}

fn load_config(cli: &Cli) -> anyhow::Result<ValidationConfig> {
    let mut config = match &cli.config {
        Some(path) => ValidationConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ValidationConfig::default(),
    };
    if cli.today.is_some() {
        config.reference_date = cli.today;
    }
    debug!(?config, "Loaded configuration");
    Ok(config)
}

async fn check(
    config: &ValidationConfig,
    file: &Path,
    json: bool,
    no_preview: bool,
) -> anyhow::Result<bool> {
    let input = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let data = FormData::from_json(&input)
        .with_context(|| format!("failed to parse {}", file.display()))?;

    let mut form = registration_form(config);
    let mut previews = None;
    if !no_preview {
        let (loader, rx) = PreviewLoader::channel();
        form = form.with_previews(loader);
        previews = Some(rx);
    }

    let names: Vec<(String, ValueKind)> = form
        .fields()
        .iter()
        .map(|def| (def.name.clone(), def.kind()))
        .collect();
    for (name, kind) in names {
        let value = data.get(&name).cloned().unwrap_or_else(|| kind.empty());
        form.set_value(&name, value)
            .with_context(|| format!("bad value in {}", file.display()))?;
    }
    for (name, _) in data.iter() {
        if form.state(name).is_none() {
            info!(field = name, "Ignoring unknown field");
        }
    }

    let outcome = form.submit();
    let mut report = Report::new(&form, &outcome);

    // Spawned loads hold their own senders; once the form is gone the
    // channel closes when the last one finishes.
    drop(form);
    if let Some(mut rx) = previews {
        while let Some(preview) = rx.recv().await {
            report.add_preview(&preview);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render());
    }

    Ok(outcome.is_accepted())
}

fn check_field(
    config: &ValidationConfig,
    name: &str,
    value: String,
    password: Option<String>,
) -> anyhow::Result<bool> {
    let fields = registration_fields(config);
    let Some(def) = fields.iter().find(|def| def.name == name) else {
        let known: Vec<&str> = fields.iter().map(|def| def.name.as_str()).collect();
        bail!("unknown field {name}; expected one of {}", known.join(", "));
    };
    if def.kind() != ValueKind::Text {
        bail!("field {name} takes a {} value, use `check`", def.kind().as_str());
    }

    let data = FormData::new().with(PASSWORD, password.unwrap_or_default());
    let result = def.validator.validate(&FieldValue::Text(value.clone()), &data);

    if result.is_valid() {
        println!("[ok] {name} {}", result.normalized_value().unwrap_or(&value));
    } else {
        println!("[!!] {name} {}", result.message().unwrap_or_default());
    }
    if let Some(strength) = result.strength() {
        println!("     strength {:.0}% ({})", strength.percent(), strength.tier());
        for rule in strength.unmet() {
            println!("     missing: {rule}");
        }
    }

    Ok(result.is_valid())
}

const fn exit_code(passed: bool) -> ExitCode {
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Check {
            file,
            json,
            no_preview,
        } => check(&config, &file, json, no_preview).await.map(exit_code),

        Commands::Field {
            name,
            value,
            password,
        } => check_field(&config, &name, value, password).map(exit_code),

        Commands::Luhn { number } => {
            let digits: String = number.chars().filter(char::is_ascii_digit).collect();
            let valid = luhn_valid(&digits);
            println!(
                "{} {}",
                if valid { "valid" } else { "invalid" },
                mask_credit_card(&digits)
            );
            Ok(exit_code(valid))
        }

        Commands::Fields => {
            for def in registration_fields(&config) {
                println!(
                    "{:<18} {:<8} {:<38} {}",
                    def.name,
                    def.trigger,
                    def.label,
                    def.help_text.as_deref().unwrap_or("")
                );
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
