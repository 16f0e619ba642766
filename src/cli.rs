//! Command-line interface implementation for Plater.
//! Provides argument parsing and help text formatting using clap.
//! All values arrive through flags; plater never prompts.

use chrono::Local;
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::tokens::TokenTable;

/// Command-line arguments structure for Plater.
#[derive(Parser, Debug)]
#[command(author, version, about = "Plater: project template materialization tool", long_about = None)]
pub struct Args {
    /// Path to the template directory
    #[arg(value_name = "TEMPLATE_DIR")]
    pub template_dir: PathBuf,

    /// Directory where the materialized project will be created
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Project name, substituted for {PROJECT}
    #[arg(long)]
    pub name: String,

    /// Author name, substituted for {AUTHOR}
    #[arg(long)]
    pub author: String,

    /// Author email, substituted for {EMAIL}
    #[arg(long)]
    pub email: Option<String>,

    /// Project URL, substituted for {URL}
    #[arg(long)]
    pub url: Option<String>,

    /// Organization name, substituted for {ORGANIZATION}.
    /// Defaults to the project name.
    #[arg(long)]
    pub organization: Option<String>,

    /// Feature flag enabling optional fragments; may be repeated
    #[arg(long = "feature", value_name = "NAME")]
    pub features: Vec<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Resolves every token once, before materialization starts. The date
    /// tokens come from the local clock; the organization falls back to
    /// the project name.
    pub fn resolve_tokens(&self) -> TokenTable {
        let now = Local::now();
        let today = now.format("%Y-%m-%d").to_string();

        TokenTable::new()
            .with("PROJECT", self.name.clone())
            .with("AUTHOR", self.author.clone())
            .with("EMAIL", self.email.clone().unwrap_or_default())
            .with("URL", self.url.clone().unwrap_or_default())
            .with(
                "ORGANIZATION",
                self.organization.clone().unwrap_or_else(|| self.name.clone()),
            )
            .with("YEAR", now.format("%Y").to_string())
            .with("TODAY", today.clone())
            .with("DATE", today)
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
