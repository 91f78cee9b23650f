//! Batch driver: run an MST engine over a list of graph descriptions and
//! write one JSON report per input.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};

use spannr::graph::Graph;
use spannr::io::{load_graph, write_dot, Report};
use spannr::mst::{kruskal, prim_eager, prim_lazy, MSTResult};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    Kruskal,
    PrimLazy,
    PrimEager,
}

impl Algorithm {
    fn name(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::PrimLazy => "prim-lazy",
            Self::PrimEager => "prim-eager",
        }
    }

    fn run(self, graph: &Graph) -> MSTResult {
        match self {
            Self::Kruskal => kruskal(graph),
            Self::PrimLazy => prim_lazy(graph),
            Self::PrimEager => prim_eager(graph),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Parser)]
#[command(version, about = "Compute minimum spanning trees with run statistics")]
struct Cli {
    /// Graph description files (JSON).
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Engine to run.
    #[arg(long, value_enum, default_value_t = Algorithm::Kruskal)]
    algorithm: Algorithm,

    /// Directory reports are written to.
    #[arg(long, default_value = "results")]
    out_dir: PathBuf,

    /// Also write a DOT file with the selected edges highlighted.
    #[arg(long)]
    dot: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("failed to create {}", cli.out_dir.display()))?;

    // One failing input must not stop the batch.
    let mut failures = 0;
    for input in &cli.inputs {
        if let Err(err) = process(input, &cli) {
            failures += 1;
            tracing::error!(input = %input.display(), "run failed: {err:#}");
        }
    }
    if failures > 0 {
        bail!("{failures} of {} input(s) failed", cli.inputs.len());
    }
    Ok(())
}

fn process(input: &Path, cli: &Cli) -> anyhow::Result<()> {
    let labeled = load_graph(input)?;
    let result = cli.algorithm.run(&labeled.graph);

    if !result.is_spanning_tree() {
        tracing::warn!(
            input = %input.display(),
            "graph not fully connected; result is a partial spanning forest"
        );
    }

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("graph");

    let report = Report::new(cli.algorithm.name(), &labeled, &result);
    let report_path = cli.out_dir.join(format!("{stem}-report.json"));
    fs::write(&report_path, report.to_json()?)
        .with_context(|| format!("failed to write {}", report_path.display()))?;

    if cli.dot {
        let dot_path = cli.out_dir.join(format!("{stem}.dot"));
        let mut out = Vec::new();
        write_dot(&mut out, &labeled, Some(&result))?;
        fs::write(&dot_path, out)
            .with_context(|| format!("failed to write {}", dot_path.display()))?;
    }

    println!(
        "{}: {} weight={:.2} edges={}/{} time={}ms -> {}",
        input.display(),
        cli.algorithm.name(),
        result.total_weight,
        result.edges.len(),
        result.num_vertices.saturating_sub(1),
        result.elapsed_ms,
        report_path.display(),
    );
    Ok(())
}
