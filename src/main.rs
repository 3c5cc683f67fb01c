//! modgraph - Mermaid graph of a Go module's internal package dependencies
//!
//! Inspect the result at https://mermaid.live

mod diagram_cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "modgraph")]
#[command(about = "Prints a Mermaid graph of the internal package dependencies of a Go module", version)]
struct Cli {
    #[command(flatten)]
    diagram: diagram_cli::DiagramArgs,
}

fn main() -> anyhow::Result<()> {
    // stdout carries only the diagram
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    diagram_cli::run(cli.diagram)
}
