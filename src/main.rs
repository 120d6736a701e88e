//! Groundwork - one-shot post-generation provisioner for scaffolded projects.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use groundwork::cli::output;
use groundwork::cli::{execute, Cli};
use groundwork::error::GroundworkError;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("GROUNDWORK_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("groundwork=debug")
        } else {
            EnvFilter::new("groundwork=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let suggestion = match &e {
            GroundworkError::ContextNotFound(_) => {
                Some("pass --context <file> or run from the generated project root")
            }
            GroundworkError::UnknownFrontend(_) => Some("recognized variants: next, nuxt"),
            GroundworkError::MissingField(_) => {
                Some("the context needs project_slug and frontend fields")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
