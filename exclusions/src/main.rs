//! Command-line front end for the exclusion registry

use std::io::Write;

use anyhow::Context;
use clap::{Parser, Subcommand};

use exclusions::{ExclusionKind, ExclusionRegistry, RegistryConfig, DEFAULT_EXCLUSION_PATH};
use shared::logging;

/// Maintain the stable/problematic coin exclusion list
#[derive(Parser)]
#[command(name = "exclusions")]
#[command(about = "Maintains the persisted coin exclusion list and filters symbols against it")]
pub struct Args {
    /// Exclusion record file
    #[arg(long, default_value = DEFAULT_EXCLUSION_PATH)]
    pub path: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add stable coins (a trailing USDT is stripped)
    AddStable {
        #[arg(required = true)]
        symbols: Vec<String>,
    },
    /// Add problematic coins (a trailing USDT is stripped)
    AddProblematic {
        #[arg(required = true)]
        symbols: Vec<String>,
    },
    /// Print the stable, problematic and combined lists
    List,
    /// Print the symbols that survive filtering, one per line
    Filter {
        #[arg(required = true)]
        symbols: Vec<String>,
    },
}

fn add_all<W: Write>(
    registry: &mut ExclusionRegistry,
    kind: ExclusionKind,
    symbols: &[String],
    out: &mut W,
) -> anyhow::Result<()> {
    for symbol in symbols {
        let added = registry
            .add_coin(kind, symbol)
            .with_context(|| format!("adding {kind} coin {symbol}"))?;
        if !added {
            writeln!(out, "unchanged: {symbol}")?;
        }
    }
    Ok(())
}

fn run<W: Write>(args: Args, out: &mut W) -> anyhow::Result<()> {
    let config = RegistryConfig::new(&args.path);
    let mut registry = ExclusionRegistry::from_config(&config)
        .with_context(|| format!("opening exclusion record {}", args.path))?;

    match args.command {
        Command::AddStable { symbols } => {
            add_all(&mut registry, ExclusionKind::Stable, &symbols, out)?
        }
        Command::AddProblematic { symbols } => {
            add_all(&mut registry, ExclusionKind::Problematic, &symbols, out)?
        }
        Command::List => {
            writeln!(out, "Stable Coins: {:?}", registry.stable_coins())?;
            writeln!(out, "Problematic Coins: {:?}", registry.problematic_coins())?;
            writeln!(out, "Exclusion Coins: {:?}", registry.exclusion_coins())?;
        }
        Command::Filter { symbols } => {
            for symbol in registry.filter_symbols(&symbols) {
                writeln!(out, "{symbol}")?;
            }
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing_with_level(Some(&args.log_level));

    let mut stdout = std::io::stdout().lock();
    run(args, &mut stdout).inspect_err(|e| logging::log_error("exclusions", &format!("{e:#}")))
}
