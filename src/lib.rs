//! Random graph generator writing DIMACS batches for coloring and
//! optimisation benchmarks.
//!
//! Four models are available (Erdős–Rényi, random geometric, hyperbolic
//! geometric and Barabási–Albert). Every generator takes the RNG explicitly so
//! a whole sweep draws from one seeded stream.

pub mod cli;
pub mod core;
pub mod generate;
pub mod logging;
pub mod output;
