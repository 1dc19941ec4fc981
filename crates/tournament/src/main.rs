//! Tournament CLI
//!
//! Run matches between Isolation agents and report win rates.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tournament::{AgentKind, AgentSpec, MatchRunner, TournamentConfig, TournamentResults};

#[derive(Parser, Debug)]
#[command(author, version, about = "Isolation agent tournament runner", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write results as JSON to this file
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a match configured on the command line
    Match(MatchArgs),
    /// Play a match described by a TOML file
    Run {
        #[arg(short, long)]
        config: PathBuf,
    },
}

#[derive(Args, Debug)]
struct MatchArgs {
    #[arg(long, value_enum, default_value_t = AgentKind::PhaseAdaptive)]
    agent1: AgentKind,

    #[arg(long, value_enum, default_value_t = AgentKind::Baseline)]
    agent2: AgentKind,

    #[arg(short, long, default_value_t = 10)]
    games: u32,

    /// Depth cap for searching agents
    #[arg(short = 'd', long, default_value_t = alphabeta_engine::DEFAULT_MAX_DEPTH)]
    depth: u32,

    /// Milliseconds per move; unlimited when omitted
    #[arg(short, long)]
    time_ms: Option<u64>,

    /// Random plies before the agents take over
    #[arg(long, default_value_t = 0)]
    opening_plies: u32,

    /// Seed for openings and fallback moves
    #[arg(long)]
    seed: Option<u64>,
}

impl MatchArgs {
    fn into_config(self) -> TournamentConfig {
        let spec = |kind| AgentSpec {
            max_depth: self.depth,
            fallback_seed: self.seed,
            ..AgentSpec::new(kind)
        };
        TournamentConfig {
            games: self.games,
            time_per_move_ms: self.time_ms,
            opening_plies: self.opening_plies,
            seed: self.seed,
            ..TournamentConfig::new(spec(self.agent1), spec(self.agent2))
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .target(env_logger::Target::Stderr)
    .init();
}

fn run(config: TournamentConfig, output: Option<PathBuf>) -> Result<()> {
    config.validate().context("invalid match configuration")?;

    println!(
        "=== Match: {} vs {} ===",
        config.agent1.label(),
        config.agent2.label()
    );
    println!();

    let mut runner = MatchRunner::new(config.match_config(true));
    let result = runner.run_match(&config.agent1, &config.agent2)?;

    let results = TournamentResults::new(config, result);
    println!();
    results.print_report();

    if let Some(path) = output {
        results
            .save(&path)
            .with_context(|| format!("failed to save results to {}", path.display()))?;
        log::info!("results written to {}", path.display());
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command {
        Command::Match(args) => run(args.into_config(), cli.output),
        Command::Run { config } => TournamentConfig::load(&config)
            .with_context(|| format!("failed to load {}", config.display()))
            .and_then(|c| run(c, cli.output)),
    };

    if let Err(e) = outcome {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
