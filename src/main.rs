use anyhow::{Context, Result};
use clap::Parser;
use fishbot::board::{PlayerId, Snapshot};
use fishbot::search::{decide, HeuristicVariant, Preset, SearchParams};
use log::info;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fishbot", version, about = "Choose the next hook action for a fishing game snapshot")]
struct Args {
    /// Snapshot JSON file, or '-' for stdin
    #[arg(long, default_value = "-")]
    state: String,

    /// Base tuning
    #[arg(long, value_enum, default_value_t = Preset::Deepening)]
    preset: Preset,

    /// JSON file with search parameters (replaces the preset)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Time budget in milliseconds
    #[arg(long)]
    budget_ms: Option<u64>,

    /// First iterative-deepening depth
    #[arg(long)]
    depth_floor: Option<u32>,

    /// Deepest iteration allowed
    #[arg(long)]
    max_depth: Option<u32>,

    #[arg(long, value_enum)]
    heuristic: Option<HeuristicVariant>,

    /// Root-parallel worker count
    #[arg(long)]
    threads: Option<usize>,

    /// Play as player one instead of player zero
    #[arg(long, default_value_t = false)]
    second: bool,

    /// Print the full decision as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn read_state(src: &str) -> Result<Snapshot> {
    let raw = if src == "-" {
        let mut s = String::new();
        std::io::stdin().read_to_string(&mut s).context("read snapshot from stdin")?;
        s
    } else {
        std::fs::read_to_string(src).with_context(|| format!("open snapshot file: {}", src))?
    };
    Snapshot::from_json(&raw).context("parse snapshot")
}

fn load_params(args: &Args, snap: &Snapshot) -> Result<SearchParams> {
    let mut p = match args.config.as_ref() {
        Some(path) => {
            let raw = std::fs::read_to_string(path).with_context(|| format!("open config file: {}", path.display()))?;
            serde_json::from_str(&raw).context("parse search config")?
        }
        None => SearchParams::preset(args.preset),
    };
    p.board_width = snap.width;
    if let Some(ms) = args.budget_ms { p.time_budget_ms = Some(ms); }
    if let Some(d) = args.depth_floor { p.depth_floor = d; }
    if let Some(d) = args.max_depth { p.max_depth = Some(d); }
    if let Some(h) = args.heuristic { p.heuristic = h; }
    if let Some(t) = args.threads { p.threads = t; }
    if args.second { p.player = PlayerId::One; }
    p.validate().context("invalid search parameters")?;
    Ok(p)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let snap = read_state(&args.state)?;
    let params = load_params(&args, &snap)?;
    info!("searching {} fish, preset {:?}, budget {:?} ms", snap.fish.len(), args.preset, params.time_budget_ms);

    let d = decide(snap, &params);
    info!("depth={} nodes={} expanded={} cache_hits={} cache_stores={} elapsed={:.1}ms timed_out={}",
        d.depth, d.nodes, d.expanded, d.cache_hits, d.cache_stores, d.elapsed.as_secs_f64() * 1000.0, d.timed_out);
    if args.json {
        println!("{}", serde_json::to_string(&d)?);
    } else {
        println!("{}", d.action);
    }
    Ok(())
}
