//! oxide-signup CLI
//!
//! Runs one submit of the signup form against values given on the command
//! line and prints the result.

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_signup::html::render_page;
use oxide_signup::{SignupConfig, SignupForm, EMAIL, PASSWORD, PASSWORD_CONFIRM, USERNAME};
use oxide_validator::{DisplayState, FormResult};

/// Validate a signup form submission.
#[derive(Parser)]
#[command(name = "oxide-signup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Username value.
    #[arg(long, env = "SIGNUP_USERNAME", default_value = "")]
    username: String,

    /// Email value.
    #[arg(long, env = "SIGNUP_EMAIL", default_value = "")]
    email: String,

    /// Password value.
    #[arg(long, env = "SIGNUP_PASSWORD", default_value = "")]
    password: String,

    /// Password confirmation value.
    #[arg(long, env = "SIGNUP_PASSWORD_CONFIRM", default_value = "")]
    password_confirm: String,

    /// JSON configuration file.
    #[arg(short, long, env = "SIGNUP_CONFIG")]
    config: Option<PathBuf>,

    /// Print the rendered page instead of a summary.
    #[arg(long)]
    html: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
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

    let config = match &cli.config {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            SignupConfig::load(path)?
        }
        None => SignupConfig::default(),
    };

    let values = HashMap::from([
        (USERNAME.to_string(), cli.username),
        (EMAIL.to_string(), cli.email),
        (PASSWORD.to_string(), cli.password),
        (PASSWORD_CONFIRM.to_string(), cli.password_confirm),
    ]);

    let mut form = SignupForm::new(&config)?;
    let mut display = DisplayState::new();
    let result = form.submit(&values, &mut display)?;

    if cli.html {
        println!("{}", render_page(&form, &values, &display));
    } else {
        print_summary(&form, &result, &display);
    }

    Ok(if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_summary(form: &SignupForm, result: &FormResult, display: &DisplayState) {
    for field in form.fields() {
        match result.outcome(field.id()).and_then(|o| o.message()) {
            Some(message) => println!(" [ ] {}: {}", field.label(), message),
            None => println!(" [X] {}", field.label()),
        }
    }

    if let Some(greeting) = display.greeting() {
        println!();
        println!("{}", greeting.heading());
        println!("{}", greeting.subheading());
    }
}
