//! diagram command - load a Go module and print its dependency graph

use anyhow::Context;
use clap::Args;
use depgraph::{parse_ignore_list, Diagram, Direction, GraphConfig, ImportGraph, MermaidGenerator};
use gomod::{GoModuleLoader, PackageLoader};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct DiagramArgs {
    /// Directory of the Go module
    pub dir: PathBuf,
    /// Go package pattern [env: MODGRAPH_PATTERN] [default: ./...]
    #[arg(long)]
    pub pattern: Option<String>,
    /// Packages to ignore, comma separated [env: MODGRAPH_IGNORE]
    #[arg(long)]
    pub ignore: Option<String>,
    /// Prefix to remove from each package name [env: MODGRAPH_IGNORE_PREFIX]
    #[arg(long = "ignore-prefix", alias = "ignorePrefix")]
    pub ignore_prefix: Option<String>,
    /// Flowchart direction: BT, TD, LR, RL [env: MODGRAPH_DIRECTION] [default: BT]
    #[arg(long)]
    pub direction: Option<Direction>,
    /// JSON output
    #[arg(long)]
    pub json: bool,
    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl DiagramArgs {
    /// Flags override the environment
    fn apply(&self, mut config: GraphConfig) -> GraphConfig {
        if let Some(pattern) = &self.pattern {
            config.pattern = pattern.clone();
        }
        if let Some(ignore) = &self.ignore {
            config.ignore = parse_ignore_list(ignore);
        }
        if let Some(prefix) = &self.ignore_prefix {
            config.ignore_prefix = prefix.clone();
        }
        if let Some(direction) = self.direction {
            config.direction = direction;
        }
        config
    }
}

pub fn run(args: DiagramArgs) -> anyhow::Result<()> {
    let config = args.apply(GraphConfig::from_env());
    let rendered = render(&args, &config)?;

    match &args.output {
        Some(file) => {
            let content = if !args.json && is_markdown(file) {
                format!("```mermaid\n{}```\n", rendered)
            } else {
                rendered
            };
            fs::write(file, content)
                .with_context(|| format!("failed to write {}", file.display()))?;
            tracing::info!("Saved to: {}", file.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Builds the whole output in memory so a failure never leaves a partial diagram
fn render(args: &DiagramArgs, config: &GraphConfig) -> anyhow::Result<String> {
    let module = GoModuleLoader::new(&args.dir)
        .with_pattern(&config.pattern)
        .load()
        .with_context(|| format!("failed to load Go module in {}", args.dir.display()))?;

    let graph = ImportGraph::build(&module.packages, &module.module_path, &config.path_filter());
    tracing::info!(
        "Graph: {} nodes, {} edges",
        graph.nodes().len(),
        graph.edge_count()
    );

    let diagram = Diagram::from_graph(&graph);

    if args.json {
        let mut json = serde_json::to_string_pretty(&diagram)?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(MermaidGenerator::new()
            .with_direction(config.direction)
            .render(&diagram))
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension().map(|e| e == "md").unwrap_or(false)
}
