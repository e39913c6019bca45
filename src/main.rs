use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use treegen::tree::{ABSENT_MARGIN, VALUE_BOUND};
use treegen::{
    write_array, GeneratorConfig, SamplerRange, TreeGenerator, DEFAULT_LIMIT,
    DEFAULT_MAX_ATTEMPTS, MAX_LIMIT,
};

#[derive(Parser, Debug)]
#[command(
    name = "treegen",
    version,
    about = "Print a random level-order binary tree array, e.g. [ 0, 12, null, -7, 40 ]"
)]
struct Cli {
    /// Minimum number of slots in the printed array.
    #[arg(short, long, default_value_t = DEFAULT_LIMIT, value_parser = parse_limit)]
    limit: usize,

    /// Seed the random source for reproducible output.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Present node values lie in [-BOUND, BOUND].
    #[arg(long, default_value_t = VALUE_BOUND, allow_negative_numbers = true)]
    value_bound: i32,

    /// Width of the band beyond the value bound that samples as null.
    #[arg(long, default_value_t = ABSENT_MARGIN, allow_negative_numbers = true)]
    absent_margin: i32,

    /// Fresh trees to try when every branch dies out before the limit.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = GeneratorConfig {
        limit: cli.limit,
        range: SamplerRange {
            value_bound: cli.value_bound,
            absent_margin: cli.absent_margin,
        },
        max_attempts: cli.max_attempts,
    };
    debug!(?config, seed = ?cli.seed, "configuration");

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut generator =
        TreeGenerator::new(config, rng).context("invalid generator configuration")?;
    let array = generator
        .generate()
        .context("failed to generate tree array")?;

    let mut rendered = Vec::with_capacity(array.len() * 4);
    write_array(&mut rendered, &array).context("failed to render tree array")?;
    info!(
        len = array.len(),
        absent = array.absent_count(),
        fingerprint = %blake3::hash(&rendered),
        "tree array ready"
    );

    let mut stdout = io::stdout().lock();
    stdout.write_all(&rendered).context("failed to write to stdout")?;
    writeln!(stdout).context("failed to write to stdout")?;

    Ok(())
}

fn parse_limit(raw: &str) -> Result<usize, String> {
    let limit: usize = raw
        .parse()
        .map_err(|_| format!("'{}' is not a non-negative integer", raw))?;
    if limit == 0 {
        return Err("limit must be at least 1".to_string());
    }
    if limit > MAX_LIMIT {
        return Err(format!("limit must not exceed {}", MAX_LIMIT));
    }
    Ok(limit)
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
