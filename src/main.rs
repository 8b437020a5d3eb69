use clap::Parser;
use socialsearch::{
    mock::{self, MockNetworkParams},
    network::SocialNetwork,
    search::{DepthLimitedSearch, IterativeDeepening, bfs_shortest_path, dfs_explore},
    statistics::{Algorithm, AlgorithmReport, COMPLEXITY_NOTES, RunReport},
};
use std::time::Instant;
use tqdm::tqdm;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Uninformed search strategies over a random social network
#[derive(Parser, Debug)]
#[command(name = "socialsearch")]
#[command(about = "Compares BFS, DFS, DLS and IDS on a random friendship graph", long_about = None)]
struct Args {
    /// Number of users in the generated network
    #[arg(long, default_value_t = 1000)]
    users: usize,

    /// Number of random friendships to add (duplicates allowed)
    #[arg(long, default_value_t = 5000)]
    friendships: usize,

    /// Seed for the network generator; random when absent
    #[arg(long)]
    seed: Option<u64>,

    /// User the searches start from
    #[arg(short, long, default_value = "User0")]
    start: String,

    /// User the targeted searches look for
    #[arg(short, long, default_value = "User500")]
    target: String,

    /// Also run a single depth-limited search with this budget
    #[arg(long)]
    depth_limit: Option<usize>,

    /// Give up iterative deepening after this depth budget. Without it, IDS
    /// is skipped whenever BFS could not reach the target.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn run_searches(network: &SocialNetwork<String>, args: &Args, report: &mut RunReport<String>) {
    let (start, target) = (&args.start, &args.target);

    info!("starting BFS");
    let start_time = Instant::now();
    let outcome = bfs_shortest_path(network, start, target);
    let reachable = outcome.is_found();
    report.push(AlgorithmReport::search(
        Algorithm::Bfs,
        outcome,
        start_time.elapsed(),
    ));

    info!("starting DFS");
    let start_time = Instant::now();
    let connections = dfs_explore(network, start);
    report.push(AlgorithmReport::exploration(
        &connections,
        start_time.elapsed(),
    ));

    if let Some(depth) = args.depth_limit {
        info!(depth, "starting DLS");
        let start_time = Instant::now();
        let outcome = DepthLimitedSearch::new(depth).run(network, start, target);
        report.push(AlgorithmReport::depth_limited(
            outcome,
            depth,
            start_time.elapsed(),
        ));
    }

    if !reachable && args.max_depth.is_none() {
        warn!("target is unreachable and IDS has no --max-depth, skipping it");
        return;
    }

    info!(max_depth = ?args.max_depth, "starting IDS");
    let deepening = IterativeDeepening {
        max_depth: args.max_depth,
        ..IterativeDeepening::default()
    };
    let start_time = Instant::now();
    let result = deepening.run(network, start, target);
    report.push(AlgorithmReport::deepening(result, start_time.elapsed()));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let params = MockNetworkParams::new(args.users, args.friendships, args.seed);

    info!(users = params.users, friendships = params.friendships, "building network");
    let network = mock::populate_from(&params, tqdm(mock::friendship_pairs(&params)));

    for user in [&args.start, &args.target] {
        if !network.contains(user) {
            warn!(%user, "user is not part of the network, searches will come up empty");
        }
    }

    let mut report = RunReport::new(
        network.len(),
        network.friendship_count(),
        args.seed,
        args.start.clone(),
        args.target.clone(),
    );
    run_searches(&network, &args, &mut report);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("failed to serialize report: {err}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{report}");
        println!("Complexity Analysis:");
        println!("{COMPLEXITY_NOTES}");
    }
}
