use clap::Parser;
use fishbot::board::Snapshot;
use fishbot::search::{decide, Preset, SearchParams};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "fishbot-bench", version, about = "Benchmark decision depth and node rate on random boards")]
struct Args {
    /// Number of random boards
    #[arg(long, default_value_t = 50)]
    positions: usize,

    /// Fish per board
    #[arg(long, default_value_t = 8)]
    fish: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, value_enum, default_value_t = Preset::Deepening)]
    preset: Preset,

    /// Time budget per decision in milliseconds
    #[arg(long)]
    budget_ms: Option<u64>,

    /// Root-parallel worker count
    #[arg(long, default_value_t = 1)]
    threads: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut p = SearchParams::preset(args.preset);
    if let Some(ms) = args.budget_ms { p.time_budget_ms = Some(ms); }
    p.threads = args.threads.max(1);
    p.validate()?;

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let t0 = Instant::now();
    let (mut nodes, mut hits, mut depth_sum, mut timeouts, mut max_ms) = (0u64, 0u64, 0u64, 0usize, 0.0f64);
    for _ in 0..args.positions {
        let snap = Snapshot::random(&mut rng, args.fish);
        let d = decide(snap, &p);
        nodes += d.nodes;
        hits += d.cache_hits;
        depth_sum += d.depth as u64;
        if d.timed_out { timeouts += 1; }
        max_ms = max_ms.max(d.elapsed.as_secs_f64() * 1000.0);
    }
    let dt = t0.elapsed().as_secs_f64();
    let n = args.positions.max(1) as f64;
    let nps = if dt > 0.0 { nodes as f64 / dt } else { 0.0 };
    println!("positions={} avg_depth={:.2} nodes={} cache_hits={} nps={:.1} worst_ms={:.1} timeouts={} elapsed={:.3}s",
        args.positions, depth_sum as f64 / n, nodes, hits, nps, max_ms, timeouts, dt);
    Ok(())
}
