//! gostrap CLI
//!
//! Usage: gostrap [--repository NAME] [--namespace NAME] [--project NAME] [-v] [-y]

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gostrap::presentation::{self, Cli};

/// Log to stderr; stdout carries the progress lines and prompts.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "gostrap=warn",
        1 => "gostrap=info",
        _ => "gostrap=debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = presentation::run(cli) {
        println!("{:#}", err);
        std::process::exit(1);
    }
}
