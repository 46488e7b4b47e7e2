use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use badchar::batch::{read_pairs, sample_pairs, search_pairs, SAMPLES};
use badchar::normalize::normalize;
use badchar::prompt::Prompt;
use badchar::report::{render_json, render_result, render_sample, render_stats, render_table};
use badchar::{SearchConfig, Searcher, ShiftTable};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "badchar", about = "Bad-character substring search")]
struct Args {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Give up after examining this many windows
    #[arg(long, global = true)]
    max_steps: Option<usize>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search one text for one pattern
    Find {
        text: String,
        pattern: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
        /// Print scan counters
        #[arg(long)]
        stats: bool,
    },
    /// Print the shift table of a pattern
    Table { pattern: String },
    /// Search every `text,pattern` row of a CSV file
    Batch {
        input: PathBuf,
        /// Emit JSON (NDJSON)
        #[arg(long)]
        json: bool,
    },
    /// Run the built-in sample set
    Demo,
    /// Prompt for texts and patterns on the console
    Interactive,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let searcher = Searcher::new(load_config(&args)?);

    match args.command {
        Command::Find {
            text,
            pattern,
            json,
            stats,
        } => {
            let (result, counters) = searcher.search_with_stats(&text, &pattern)?;
            if json {
                println!("{}", render_json(&text, &pattern, &result)?);
            } else {
                println!("{}", render_result(&result));
            }
            if stats {
                eprintln!("{}", render_stats(&counters));
            }
        }
        Command::Table { pattern } => {
            let normalized = normalize(&pattern);
            let table = ShiftTable::build(&normalized);
            println!("Pattern: {}", normalized.iter().collect::<String>());
            println!("{}", render_table(&table));
        }
        Command::Batch { input, json } => {
            let file = File::open(&input).with_context(|| format!("failed to open {}", input.display()))?;
            let pairs = read_pairs(file)?;
            let results = search_pairs(&searcher, &pairs)?;
            for (pair, result) in pairs.iter().zip(&results) {
                if json {
                    println!("{}", render_json(&pair.text, &pair.pattern, result)?);
                } else {
                    println!("{:?} in {:?}: {}", pair.pattern, pair.text, render_result(result));
                }
            }
        }
        Command::Demo => {
            let results = search_pairs(&searcher, &sample_pairs())?;
            let mut failed = 0;
            for (sample, result) in SAMPLES.iter().zip(&results) {
                if result.found() != sample.expect_found {
                    failed += 1;
                }
                println!("{}", render_sample(sample, result));
            }
            let summary = format!("{} samples, {} failed", SAMPLES.len(), failed);
            if failed == 0 {
                println!("\n{}", summary.green().bold());
            } else {
                println!("\n{}", summary.red().bold());
                anyhow::bail!("{} sample(s) did not produce the expected outcome", failed);
            }
        }
        Command::Interactive => {
            println!("Welcome to the Boyer-Moore algorithm!\n");
            let stdin = io::stdin();
            let mut prompt = Prompt::new(stdin.lock(), io::stdout());
            prompt.run(&searcher)?;
            println!("\nExiting. Goodbye!");
        }
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<SearchConfig> {
    let mut config = match &args.config {
        Some(path) => SearchConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SearchConfig::default(),
    };
    if let Some(limit) = args.max_steps {
        config = config.with_step_limit(limit);
    }
    config.validate()?;
    Ok(config)
}
