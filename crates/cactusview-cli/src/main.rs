use std::time::Instant;

use clap::Parser;

use cactusview::CactusviewOptions;
use cactusview::run_main;
use cactusview_error::Result;

#[derive(Parser, Debug)]
#[command(
    name = "cactusview",
    about = "cactusview: render a nested cactus-graph alignment as a DOT graph",
    version
)]
pub struct Cli {
    /// Path to the cactus disk document (JSON)
    #[arg(short = 'c', long = "disk", value_name = "FILE")]
    disk: String,

    /// Name of the net to render from (defaults to the disk's root net)
    #[arg(short = 'd', long = "net", value_name = "NAME")]
    net: Option<String>,

    /// Output file path (writes to stdout when omitted)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<String>,

    /// Give end nodes name labels
    #[arg(short = 'g', long = "name-labels", default_value_t = false)]
    name_labels: bool,

    /// Log filter directive, e.g. 'info' or 'cactusview=debug'
    #[arg(short = 'a', long = "log-level", value_name = "LEVEL")]
    log_level: Option<String>,
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if let Some(directive) = args.log_level.as_deref() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(directive))
            .with_writer(std::io::stderr)
            .init();
    } else if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = CactusviewOptions {
        disk: args.disk.clone(),
        net: args.net.clone(),
        name_labels: args.name_labels,
    };

    match run_main(&opts) {
        Ok(output) => {
            if let Some(ref path) = args.output {
                std::fs::write(path, &output)?;
                tracing::info!(path, "output written");
            } else {
                print!("{output}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            return Err(e);
        }
    }

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
