//! cgr-query — run one earliest-arrival query against a contact plan file.
//!
//! ```text
//! cgr-query --plan data/contact_plan.txt --source 1 --destination 12
//! cgr-query --plan plan.csv --format csv -s 1 -d 7 --window enforced --stats
//! ```
//!
//! Router settings come from `--config <json>` if given (see
//! `data/router.json`), then `--window` / `--early-exit` override them.

mod logging;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};

use cgr_core::NodeId;
use cgr_plan::{ContactGraph, load_contacts_csv, load_contacts_plain};
use cgr_route::{EarliestArrivalRouter, RouteReport, RouterConfig, SearchStats, WindowPolicy};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PlanFormat {
    /// Whitespace-separated `id start end src dst owlt`, one contact per line.
    Plain,
    /// CSV with an `id,start,end,src,dst,owlt` header.
    Csv,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum WindowArg {
    Unchecked,
    Enforced,
}

impl From<WindowArg> for WindowPolicy {
    fn from(w: WindowArg) -> Self {
        match w {
            WindowArg::Unchecked => WindowPolicy::Unchecked,
            WindowArg::Enforced => WindowPolicy::Enforced,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Earliest-arrival contact graph routing")]
struct Args {
    /// Contact plan file.
    #[arg(long)]
    plan: PathBuf,

    #[arg(long, value_enum, default_value_t = PlanFormat::Plain)]
    format: PlanFormat,

    /// Source node id.
    #[arg(short, long)]
    source: NodeId,

    /// Destination node id.
    #[arg(short, long)]
    destination: NodeId,

    /// JSON file holding a router configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Contact window handling (overrides the config file).
    #[arg(long, value_enum)]
    window: Option<WindowArg>,

    /// Stop as soon as the destination is settled.
    #[arg(long)]
    early_exit: bool,

    /// Print search statistics after the route.
    #[arg(long)]
    stats: bool,

    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    logging::initialize_logging(args.log_level)?;

    let graph = load_plan(&args.plan, args.format)?;
    info!(
        "loaded {} contacts over {} nodes from {}",
        graph.contact_count(),
        graph.node_count(),
        args.plan.display()
    );

    let config = router_config(&args)?;
    let router = EarliestArrivalRouter::new(config);
    let (source, destination) = (args.source, args.destination);

    let mut stats = SearchStats::default();
    let t0 = Instant::now();
    let outcome = router
        .route_observed(&graph, source, destination, &mut stats)
        .with_context(|| format!("routing {source} -> {destination}"))?;
    let elapsed = t0.elapsed();

    print!("{}", RouteReport(&outcome));

    if args.stats {
        println!(
            "settled {}  |  relaxations {}  |  stale pops {}  |  {:.3} ms",
            stats.settled,
            stats.relaxations,
            stats.stale_pops,
            elapsed.as_secs_f64() * 1_000.0
        );
    }
    Ok(())
}

fn load_plan(path: &Path, format: PlanFormat) -> Result<ContactGraph> {
    let graph = match format {
        PlanFormat::Plain => load_contacts_plain(path),
        PlanFormat::Csv => load_contacts_csv(path),
    };
    graph.with_context(|| format!("failed to load contact plan {}", path.display()))
}

fn router_config(args: &Args) -> Result<RouterConfig> {
    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str::<RouterConfig>(&text)
                .with_context(|| format!("invalid router config {}", path.display()))?
        }
        None => RouterConfig::default(),
    };
    Ok(config.with_overrides(args.window.map(Into::into), args.early_exit))
}
