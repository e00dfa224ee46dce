use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use lukle::solver::constants::{DEFAULT_LOWER_TARGET, DEFAULT_UPPER_TARGET};
use lukle::{
    Bag, ExpressionSolver, GameConfig, Pool, Solution, SolutionRegistry, SolveOutcome,
    SolveStats, SolverConfig, TargetRange, parse_number_list, validate_operands,
};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Lukle - find which targets a bag of numbers can reach
#[derive(Parser, Debug)]
#[command(name = "lukle")]
#[command(
    about = "Enumerate every +-*/ expression over a bag of numbers and report reachable targets"
)]
#[command(version)]
pub struct CliArgs {
    /// Big numbers to draw from 25, 50, 75, 100
    #[arg(long, default_value_t = 2)]
    pub big: usize,

    /// Small numbers to draw from two copies of 1 to 10
    #[arg(long, default_value_t = 4)]
    pub small: usize,

    /// Solve these numbers instead of drawing, e.g. "75,25,8,6,3,1"
    #[arg(short, long, conflicts_with = "config")]
    pub numbers: Option<String>,

    /// Game configuration JSON with "target" and "initialNumbers"
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for a reproducible draw and sample
    #[arg(long)]
    pub seed: Option<u64>,

    /// Smallest target to record
    #[arg(long, default_value_t = DEFAULT_LOWER_TARGET, allow_hyphen_values = true)]
    pub min: i64,

    /// Largest target to record
    #[arg(long, default_value_t = DEFAULT_UPPER_TARGET, allow_hyphen_values = true)]
    pub max: i64,

    /// Show the solution for this target instead of a random one
    #[arg(short, long)]
    pub target: Option<i64>,

    /// Run on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Largest number of operands to combine
    #[arg(long)]
    pub max_operands: Option<usize>,

    /// Give up after this many seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Where the bag comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BagSource {
    Draw { big: usize, small: usize },
    Fixed(Bag),
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub source: BagSource,
    pub target: Option<i64>,
    pub solver: SolverConfig,
    pub seed: Option<u64>,
    pub json: bool,
}

impl CliConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let range = TargetRange::new(args.min, args.max).context("Invalid target range")?;

        let mut target = args.target;
        let source = if let Some(path) = &args.config {
            let game = GameConfig::load(path).context("Invalid game configuration")?;
            target = target.or(Some(game.target));
            BagSource::Fixed(game.bag())
        } else if let Some(numbers) = &args.numbers {
            let values = parse_number_list(numbers).context("Invalid number list")?;
            validate_operands(&values).context("Invalid number list")?;
            BagSource::Fixed(Bag::new(values))
        } else {
            BagSource::Draw {
                big: args.big,
                small: args.small,
            }
        };

        Ok(Self {
            source,
            target,
            solver: SolverConfig {
                range,
                parallel: !args.sequential,
                max_operands: args.max_operands,
                timeout: args.timeout.map(Duration::from_secs),
            },
            seed: args.seed,
            json: args.json,
        })
    }
}

/// JSON report printed with `--json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    bag: &'a Bag,
    range: TargetRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<i64>,
    solution: Option<&'a Solution>,
    solutions_found: usize,
    missing: &'a [i64],
    stats: &'a SolveStats,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Logger already initialized")?;
    Ok(())
}

/// Pick one recorded solution uniformly at random
pub fn pick_random<'a, R: Rng + ?Sized>(
    registry: &'a SolutionRegistry,
    rng: &mut R,
) -> Option<&'a Solution> {
    if registry.is_empty() {
        return None;
    }
    let index = rng.random_range(0..registry.len());
    registry.iter().nth(index)
}

fn print_text(bag: &Bag, target: Option<i64>, solution: Option<&Solution>, outcome: &SolveOutcome) {
    println!("Bag: {}", bag);
    match (solution, target) {
        (Some(solution), _) => println!("{}", solution),
        (None, Some(target)) => println!("No solution for {}.", target),
        (None, None) => println!("No solutions in range."),
    }
    println!(
        "Reached {} of {} targets in {}",
        outcome.registry.len(),
        outcome.registry.range().size(),
        outcome.registry.range()
    );
    println!("Could not find solutions for: {:?}", outcome.missing);
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;
    let config = CliConfig::from_args(args)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let bag = match &config.source {
        BagSource::Draw { big, small } => Pool::standard()
            .draw(*big, *small, &mut rng)
            .context("Cannot draw bag")?,
        BagSource::Fixed(bag) => bag.clone(),
    };

    let solver = ExpressionSolver::new(config.solver);
    info!("Solving {} with {:?}", bag, solver.config());
    let range = solver.config().range;
    let outcome = solver.solve(&bag);

    if !outcome.stats.exhausted {
        warn!("Search timed out; some reachable targets may be reported missing");
    }

    let solution = match config.target {
        Some(target) => {
            if !range.contains(target) {
                warn!("Target {} is outside the range {}", target, range);
            }
            outcome.registry.get(target)
        }
        None => pick_random(&outcome.registry, &mut rng),
    };

    if config.json {
        let report = Report {
            bag: &bag,
            range,
            target: config.target,
            solution,
            solutions_found: outcome.registry.len(),
            missing: &outcome.missing,
            stats: &outcome.stats,
        };
        let json = serde_json::to_string_pretty(&report).context("Cannot serialize report")?;
        println!("{}", json);
    } else {
        print_text(&bag, config.target, solution, &outcome);
    }

    Ok(())
}
