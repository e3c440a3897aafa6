use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use instacalc::config::Config;
use instacalc::host::{FileRegion, process_region, run_pipe, run_watch};
use instacalc::{CalcEngine, EngineConfig, Selection, calculator};

#[derive(Parser)]
#[command(
    name = "instacalc",
    version,
    about = "Rewrites =(...) expressions in plain text with their evaluated values"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Process files in place
    Run {
        /// Files to process
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Keep running and re-process files when they change
        #[arg(long)]
        watch: bool,
        /// Print results to stdout instead of writing files
        #[arg(long)]
        dry_run: bool,
    },
    /// Evaluate a single expression and print the result
    Eval {
        /// The expression, without the =( ) delimiters
        expression: String,
        /// Also copy the result to the clipboard
        #[arg(long)]
        copy: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("instacalc=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load();
    let engine = CalcEngine::with_config(EngineConfig {
        max_depth: config.max_depth,
    });

    match cli.command {
        None => run_pipe(&engine),
        Some(Command::Run {
            files,
            watch,
            dry_run,
        }) => run_files(&engine, &files, watch, dry_run, config),
        Some(Command::Eval { expression, copy }) => run_eval(&engine, &expression, copy),
    }
}

fn run_files(
    engine: &CalcEngine,
    files: &[PathBuf],
    watch: bool,
    dry_run: bool,
    config: Config,
) -> Result<()> {
    if watch && dry_run {
        anyhow::bail!("--watch and --dry-run cannot be combined");
    }

    for path in files {
        if dry_run {
            let text = std::fs::read_to_string(path)?;
            let outcome = engine.process(&text, Selection::origin());
            print!("{}", outcome.text);
        } else {
            let mut region = FileRegion::new(path);
            if process_region(engine, &mut region)? {
                info!(path = %path.display(), "rewrote expressions");
            }
        }
    }

    if watch {
        run_watch(engine, files, Duration::from_millis(config.debounce_ms))?;
    }

    Ok(())
}

fn run_eval(engine: &CalcEngine, expression: &str, copy: bool) -> Result<()> {
    let result = engine.evaluate_expression(expression);
    println!("{}", result);
    if copy {
        calculator::copy_result(&result)?;
        info!("result copied to clipboard");
    }
    Ok(())
}
