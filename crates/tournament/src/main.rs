//! Tournament CLI
//!
//! Run matches between the move-selection strategies.

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use tournament::{ConfigError, MatchConfig, MatchReport, MatchRunner, Strategy};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("material-chess Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [options]");
    println!();
    println!("Options:");
    println!("  --games, -g N     Number of games (default 10)");
    println!("  --depth, -d D     Minimax depth when not given per engine (default 2)");
    println!("  --seed, -s S      Seed for reproducible games");
    println!("  --config FILE     Read settings from a TOML file");
    println!("  --out FILE        Write the match as JSON");
    println!("  --quiet, -q       Only print the final report");
    println!();
    println!("Engines:");
    println!("  random            - Uniform random legal move");
    println!("  greedy            - Two-ply material lookahead");
    println!("  minimax[:D]       - Fixed-depth minimax over material");
    println!();
    println!("Examples:");
    println!("  tournament match greedy random --games 20");
    println!("  tournament match minimax:3 greedy --seed 7 --out results.json");
}

/// Parsed arguments of the `match` command.
struct MatchArgs {
    engine1: Strategy,
    engine2: Strategy,
    config: MatchConfig,
    out: Option<PathBuf>,
}

fn flag_value<'a>(args: &'a [String], i: usize) -> Result<&'a str, ConfigError> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| ConfigError::MissingValue(args[i].clone()))
}

fn parse_flag<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

fn parse_match_args(args: &[String]) -> Result<MatchArgs, ConfigError> {
    if args.len() < 2 {
        return Err(ConfigError::MissingEngines);
    }
    let engine1: Strategy = args[0].parse()?;
    let engine2: Strategy = args[1].parse()?;

    // The config file is the base; flags given alongside it override it.
    let mut config = match args.iter().position(|a| a == "--config") {
        Some(i) => MatchConfig::load(flag_value(args, i)?)?,
        None => MatchConfig::default(),
    };
    let mut out = None;

    let mut i = 2;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--games" | "-g" => config.games = parse_flag(flag, flag_value(args, i)?)?,
            "--depth" | "-d" => config.depth = parse_flag(flag, flag_value(args, i)?)?,
            "--seed" | "-s" => config.seed = Some(parse_flag(flag, flag_value(args, i)?)?),
            "--out" | "-o" => out = Some(PathBuf::from(flag_value(args, i)?)),
            "--config" => {}
            "--quiet" | "-q" => {
                config.verbose = false;
                i += 1;
                continue;
            }
            _ => {
                tracing::warn!(flag, "ignoring unknown option");
                i += 1;
                continue;
            }
        }
        i += 2;
    }

    config.validate()?;
    Ok(MatchArgs {
        engine1,
        engine2,
        config,
        out,
    })
}

fn run_match(args: &[String]) -> Result<()> {
    let MatchArgs {
        engine1,
        engine2,
        config,
        out,
    } = match parse_match_args(args) {
        Ok(parsed) => parsed,
        Err(e) => {
            print_usage();
            bail!(e);
        }
    };

    println!("=== Match: {} vs {} ===", engine1, engine2);
    println!("Games: {}, Depth: {}", config.games, config.depth);
    println!();

    let mut e1 = engine1.build(&config, config.engine_seed(1));
    let mut e2 = engine2.build(&config, config.engine_seed(2));

    // Labels keep the two sides apart when both run the same strategy.
    let label1 = format!("{} (1)", engine1);
    let label2 = format!("{} (2)", engine2);
    let mut runner = MatchRunner::new(config.clone());
    let result = runner.run_labeled_match(&label1, e1.as_mut(), &label2, e2.as_mut());

    let report = MatchReport { config, result };
    println!();
    report.print_report();

    if let Some(path) = out {
        report
            .save(&path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        println!("Results written to {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("match") => run_match(&args[2..]),
        Some("help" | "--help" | "-h") | None => {
            print_usage();
            Ok(())
        }
        Some(other) => {
            print_usage();
            bail!("unknown command: {}", other)
        }
    }
}
