//! Command-line surface of the graphgen binary.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::generate::{HyperbolicParams, Model, ModelOptions};
use crate::output::batch::{BatchConfig, SweepSummary, generate_for_combinations};

/// Generate k random graphs for every combination of vertex count and model
/// parameter, written as DIMACS files.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "graphgen",
    after_help = "Example: graphgen -o ../Graphs/ --model ER -k 10 --n-set 100 125 150 --p-set 0.1 0.5 0.9"
)]
pub struct Cli {
    /// Parent directory where the graphs will be stored.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Number of graphs to generate for each combination.
    #[arg(short = 'k', value_name = "K")]
    pub replicas: usize,

    /// Vertex counts.
    #[arg(long = "n-set", alias = "n_set", num_args = 1.., required = true)]
    pub n_set: Vec<usize>,

    /// Parameters: edge probability for ER, distance threshold for RGG
    /// (1.x for the complement of 0.x), disk radius for HGG, attachment count
    /// for BA.
    #[arg(
        long = "p-set",
        alias = "p_set",
        num_args = 1..,
        required = true,
        allow_negative_numbers = true
    )]
    pub p_set: Vec<f64>,

    /// Graph model: ER, RGG, HGG or BA.
    #[arg(long, value_parser = Model::from_str)]
    pub model: Model,

    /// HGG degree-tail parameter.
    #[arg(long, default_value_t = HyperbolicParams::default().alpha)]
    pub alpha: f64,

    /// HGG curvature.
    #[arg(long, default_value_t = HyperbolicParams::default().curvature)]
    pub curvature: f64,

    /// Seed for reproducible output; seeded from the OS when absent.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    fn batch_config(&self) -> BatchConfig {
        BatchConfig {
            output_dir: self.output.clone(),
            replicas: self.replicas,
            model: self.model,
            options: ModelOptions {
                alpha: self.alpha,
                curvature: self.curvature,
            },
        }
    }
}

/// Runs the sweep described by `cli` with a single RNG stream.
pub fn run_cli(cli: &Cli) -> anyhow::Result<SweepSummary> {
    debug!(?cli, "parsed arguments");
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    generate_for_combinations(&mut rng, &cli.batch_config(), &cli.n_set, &cli.p_set)
}
