//! # tsp-anneal CLI
//!
//! Loads an instance file, seeds with the optimal bitonic tour and runs the
//! annealed population search until the evaluation budget is spent or the
//! process receives SIGINT. Every improvement is written under the report
//! directory.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use tracing_subscriber::EnvFilter;
use tsp_anneal::anneal::{AnnealConfig, CoolingSchedule};
use tsp_anneal::instance::{Budget, Instance};
use tsp_anneal::optimizer::{OptimizationLoop, OptimizerConfig};
use tsp_anneal::report::FileReporter;

/// Command-line interface for tsp-anneal
#[derive(Parser)]
#[command(name = "tsp-anneal")]
#[command(version)]
#[command(about = "Euclidean TSP heuristic: bitonic seed, mutation/crossover, simulated annealing")]
struct Cli {
    /// Instance file (header, DIMENSION line, section marker, `id x y` lines)
    file: PathBuf,

    /// Maximum number of tour evaluations (unbounded if omitted)
    #[arg(short = 'f', long)]
    max_evaluations: Option<u64>,

    /// Tours carried into each generation
    #[arg(short = 'p', long, default_value_t = 10)]
    max_population: usize,

    /// Initial annealing temperature
    #[arg(short = 'T', long, default_value_t = 5_000_000.0)]
    initial_temperature: f64,

    /// Temperature decrease per generation
    #[arg(long, default_value_t = 0.1)]
    cooling_step: f64,

    /// Stop after this many generations
    #[arg(long)]
    max_generations: Option<usize>,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Directory receiving one file per improvement
    #[arg(long, default_value = "log")]
    report_dir: PathBuf,

    /// Log per-generation progress
    #[arg(short, long)]
    verbose: bool,
}

static STOP: OnceLock<Arc<AtomicBool>> = OnceLock::new();

#[cfg(unix)]
extern "C" fn handle_sigint(_sig: libc::c_int) {
    // Only an atomic store: the search polls the flag at safe points.
    if let Some(flag) = STOP.get() {
        flag.store(true, Ordering::Relaxed);
    }
}

#[cfg(unix)]
fn install_interrupt_handler(flag: Arc<AtomicBool>) {
    let _ = STOP.set(flag);
    unsafe {
        libc::signal(
            libc::SIGINT,
            handle_sigint as extern "C" fn(libc::c_int) as libc::sighandler_t,
        );
    }
}

#[cfg(not(unix))]
fn install_interrupt_handler(flag: Arc<AtomicBool>) {
    let _ = STOP.set(flag);
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "tsp_anneal=debug"
    } else {
        "tsp_anneal=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut instance = Instance::from_file(&cli.file, Budget::from_limit(cli.max_evaluations))
        .with_context(|| format!("failed to load instance {}", cli.file.display()))?;

    let config = OptimizerConfig {
        max_population: cli.max_population,
        max_generations: cli.max_generations,
        seed: cli.seed,
        anneal: AnnealConfig::default()
            .with_initial_temperature(cli.initial_temperature)
            .with_cooling(CoolingSchedule::Linear {
                step: cli.cooling_step,
            }),
    };

    let mut reporter = FileReporter::new(&cli.report_dir).with_context(|| {
        format!(
            "failed to create report directory {}",
            cli.report_dir.display()
        )
    })?;

    let stop = Arc::new(AtomicBool::new(false));
    install_interrupt_handler(stop.clone());

    let result = OptimizationLoop::run_with_cancel(&mut instance, &config, Some(stop), &mut reporter)?;

    println!(
        "best length: {:.2} ({} generations, {} evaluations{})",
        result.best_length(),
        result.generations,
        result.evaluations,
        if result.cancelled { ", interrupted" } else { "" }
    );
    if let Some(path) = reporter.last_written() {
        println!("last report: {}", path.display());
    }
    Ok(())
}
