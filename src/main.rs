use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;
use ising_mc::{read_run_config, save_grid, RunConfig, Simulation};

#[derive(Parser, Debug)]
#[command(version, about = "Metropolis Monte Carlo for the 2D Ising model", long_about = None)]
struct Args {
    /// YAML run configuration; command line values override it
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Temperature (<= 1.0 is cold, >= 5.0 is hot, 2.269 is critical)
    #[arg(short, long, allow_negative_numbers = true)]
    temperature: Option<f64>,
    /// Initial configuration: 1 for COLD, 2 for WARM
    #[arg(short, long)]
    initial_condition: Option<u8>,
    /// Linear lattice size N
    #[arg(short = 'n', long)]
    size: Option<usize>,
    /// Total number of update trials
    #[arg(short, long)]
    steps: Option<usize>,
    /// Number of snapshots to record
    #[arg(short, long)]
    frames: Option<usize>,
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Reference grid file; switches to the reference-biased rule
    #[arg(short, long)]
    reference: Option<PathBuf>,
    /// Write the final lattice to this grid file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    fn run_config(&self) -> anyhow::Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => read_run_config(path)
                .with_context(|| format!("cannot read config {}", path.display()))?,
            None => RunConfig::default(),
        };
        if let Some(temperature) = self.temperature {
            config.temperature = temperature;
        }
        if let Some(initial_condition) = self.initial_condition {
            config.initial_condition = initial_condition;
        }
        if let Some(size) = self.size {
            config.lattice_size = size;
        }
        if let Some(steps) = self.steps {
            config.total_steps = steps;
        }
        if let Some(frames) = self.frames {
            config.frame_count = frames;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.reference.is_some() {
            config.reference = self.reference.clone();
            config.reference_mode = true;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = args.run_config()?;
    let params = config.validate()?;

    let reference = match &config.reference {
        Some(path) => config
            .load_reference()
            .with_context(|| format!("cannot load reference lattice {}", path.display()))?,
        None => None,
    };
    let mut simulation = Simulation::from_config(&config, reference)?;

    let bar = ProgressBar::new(params.frame_count as u64);
    bar.set_style(ProgressStyle::with_template(
        " {bar:40.cyan/blue} {pos}/{len} frames [{elapsed_precise}]",
    )?);
    let recorded = simulation.run_with(|_, _| bar.inc(1))?.len();
    bar.finish();

    println!("Ising Model Simulation Results");
    println!("------------------------------");
    println!("Lattice size: {0} x {0}", params.size);
    println!("Temperature: {:.4}", params.temperature);
    println!("Update rule: {}", simulation.rule());
    println!("Frames recorded: {}", recorded);
    println!("Steps per frame: {}", params.steps_per_frame);
    println!("Trials executed: {}", simulation.trials_executed());
    println!("Acceptance rate: {:.4}", simulation.acceptance_rate());

    if let Some(path) = &args.output {
        save_grid(simulation.lattice(), path)
            .with_context(|| format!("cannot write {}", path.display()))?;
        println!("Final lattice written to {}", path.display());
    }
    Ok(())
}
