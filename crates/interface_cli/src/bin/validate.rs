//! Enrollment Validation - Command-Line Binary
//!
//! Validates an enrollment submission and prints a JSON report.
//!
//! # Usage
//!
//! ```bash
//! # Validate a file
//! enrollment-validate submission.json
//!
//! # Validate from stdin
//! cat submission.json | enrollment-validate
//! ```
//!
//! Exits with status 0 when every pair validates and 1 otherwise.
//!
//! # Environment Variables
//!
//! * `ENROLLMENT_BIRTH_YEAR_MIN` - Earliest accepted birth year (default: 1925)
//! * `ENROLLMENT_BIRTH_YEAR_MAX` - Latest accepted birth year (default: 2025)
//! * `ENROLLMENT_DATE_PLACEHOLDER` - Text for absent dates (default: 未入力)
//! * `ENROLLMENT_CLI_LOG_LEVEL` - Log level when `RUST_LOG` is unset (default: warn)
//! * `ENROLLMENT_CLI_PRETTY` - Pretty-print the report (default: false)
//! * `ENROLLMENT_CLI_NORMALIZE_HALF_WIDTH` - Convert full-width digits before validating
//!   (default: false)

use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use domain_party::RuleConfig;
use interface_cli::{CliConfig, Submission, SubmissionValidator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let cli = CliConfig::from_env().context("loading CLI configuration")?;
    init_tracing(&cli.log_level);

    let rules = RuleConfig::from_env().context("loading rule configuration")?;
    tracing::debug!(
        birth_year_min = rules.birth_year_min,
        birth_year_max = rules.birth_year_max,
        "rule configuration loaded"
    );

    let input = read_input(std::env::args().nth(1))?;
    let mut submission = Submission::from_json(&input).context("parsing submission")?;
    if cli.normalize_half_width {
        submission.normalize_half_width();
    }

    let validator = SubmissionValidator::new(&rules).context("building validator")?;
    let report = validator.validate(&submission);
    let output = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{output}");

    Ok(if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Reads the submission from `path`, or from stdin when absent or `-`
fn read_input(path: Option<String>) -> anyhow::Result<String> {
    match path.as_deref() {
        None | Some("-") => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("reading submission from stdin")?;
            Ok(input)
        }
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {path}")),
    }
}

/// Initializes the tracing subscriber, logging to stderr
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}
