use std::error::Error;
use std::time::Instant;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use hydrogen_mc::{
    read_run_config, ChainSummary, MetropolisSampler, QuantumNumbers, RunConfig,
    DEFAULT_SEED_TRIALS,
};

/// Metropolis sampling of hydrogen orbital densities
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// YAML run configuration; overrides the orbital flags below
    #[arg(short, long)]
    config: Option<String>,

    /// Principal quantum number
    #[arg(short = 'n', long, default_value_t = 1)]
    n: u32,

    /// Azimuthal quantum number
    #[arg(short = 'l', long, default_value_t = 0)]
    l: u32,

    /// Magnetic quantum number
    #[arg(short = 'm', long, default_value_t = 0, allow_negative_numbers = true)]
    m: i32,

    /// Number of Metropolis steps
    #[arg(short = 's', long, default_value_t = 10_000)]
    samples: usize,

    /// Proposal half-width per axis
    #[arg(long, default_value_t = 0.5)]
    step: f64,

    /// Bohr radius
    #[arg(long, default_value_t = 1.0)]
    a0: f64,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn into_config(self) -> Result<RunConfig, Box<dyn Error>> {
        if let Some(path) = self.config {
            return Ok(read_run_config(path)?);
        }
        Ok(RunConfig {
            orbital: QuantumNumbers::new(self.n, self.l, self.m)?,
            bohr_radius: self.a0,
            num_samples: self.samples,
            step_size: self.step,
            max_seed_trials: DEFAULT_SEED_TRIALS,
            seed: self.seed,
        })
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    let config = Args::parse().into_config()?;
    let (orbital, params) = config.validate()?;
    let sampler = MetropolisSampler::new(orbital, params)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let start = Instant::now();
    let chain = sampler.run(&mut rng);
    let elapsed = start.elapsed();

    let summary = ChainSummary::from_chain(&chain);
    let a0 = orbital.bohr_radius();

    println!("Metropolis sampling of hydrogen orbital {}", config.orbital);
    println!("----------------------------------------");
    println!("Bohr radius:         {a0}");
    println!("Step size:           {}", params.step_size);
    println!("Points:              {} ({elapsed:0.2?})", summary.num_points);
    println!("Acceptance rate:     {:.2}%", 100.0 * summary.acceptance_rate);
    if summary.seed_fallback {
        println!("Seed:                fallback {:?}", chain.seed.point.as_slice());
    } else {
        println!("Seed:                found after {} trials", chain.seed.trials);
    }
    println!(
        "Mean position:       ({:.4}, {:.4}, {:.4})",
        summary.mean.x, summary.mean.y, summary.mean.z
    );
    println!("<r>:                 {:.4}", summary.mean_radius);
    println!("<r²>:                {:.4}", summary.mean_radius_squared);
    match summary.radial_peak {
        Some(peak) => println!("Radial peak:         {peak:.4}"),
        None => println!("Radial peak:         n/a"),
    }

    Ok(())
}
