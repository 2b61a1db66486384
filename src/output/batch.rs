//! Batch layout and generation.
//!
//! A batch lives in `<output_dir>/<model>/<model><n>.<pname>` and holds
//! `<model><n>.<pname>_inst<i>.col` for `i` in `1..=k`. `pname` encodes the
//! model parameter so that batches stay distinguishable on disk:
//!
//! * `ER`: the digits after the decimal point of the edge probability
//!   (`0.5` gives `5`).
//! * `RGG`: the same for thresholds below 1; thresholds above 1 use the
//!   digits of `d - 1` rounded to 15 places plus a `c` suffix for the
//!   complement (`1.3` gives `3c`).
//! * `HGG` and `BA`: the plain decimal form, always with a fractional part
//!   (`8` gives `8.0`). HGG batches built with a non-default alpha or
//!   curvature also carry both values (`8.0_a3.0_c2.5`).
//!
//! An existing batch directory is never touched again, so an interrupted
//! sweep can simply be rerun.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::Context;
use rand::Rng;
use tracing::{debug, info, instrument};

use crate::core::error::GenError;
use crate::generate::{self, Model, ModelOptions, erdos_renyi, geometric};
use crate::output::dimacs::write_dimacs;

pub struct BatchConfig {
    pub output_dir: PathBuf,
    /// Instances per batch, `k`.
    pub replicas: usize,
    pub model: Model,
    pub options: ModelOptions,
}

#[derive(Debug, PartialEq)]
pub enum BatchOutcome {
    Skipped { dir: PathBuf },
    Generated { dir: PathBuf, instances: usize },
}

#[derive(Debug, Default, PartialEq)]
pub struct SweepSummary {
    pub generated: usize,
    pub skipped: usize,
}

/// Shortest round-trip decimal form, never in exponent notation, with `.0`
/// appended to integral values.
pub fn plain_decimal(x: f64) -> String {
    let s = x.to_string();
    if x.is_finite() && !s.contains('.') {
        s + ".0"
    } else {
        s
    }
}

fn fraction_digits(x: f64) -> Result<String, GenError> {
    plain_decimal(x)
        .split_once('.')
        .map(|(_, digits)| digits.to_owned())
        .ok_or_else(|| GenError::invalid("param", x, "a value with a fractional part"))
}

pub fn param_name(model: Model, param: f64, opts: &ModelOptions) -> Result<String, GenError> {
    match model {
        Model::ErdosRenyi => {
            erdos_renyi::check_probability(param)?;
            fraction_digits(param)
        }
        Model::Geometric => {
            let threshold = geometric::threshold(param)?;
            let digits = fraction_digits(threshold.distance)?;
            Ok(if threshold.complement {
                digits + "c"
            } else {
                digits
            })
        }
        Model::Hyperbolic if *opts != ModelOptions::default() => Ok(format!(
            "{}_a{}_c{}",
            plain_decimal(param),
            plain_decimal(opts.alpha),
            plain_decimal(opts.curvature)
        )),
        Model::Hyperbolic | Model::BarabasiAlbert => Ok(plain_decimal(param)),
    }
}

pub fn batch_dir(output_dir: &Path, model: Model, n: usize, pname: &str) -> PathBuf {
    output_dir
        .join(model.tag())
        .join(format!("{model}{n}.{pname}"))
}

pub fn instance_file_name(model: Model, n: usize, pname: &str, i: usize) -> String {
    format!("{model}{n}.{pname}_inst{i}.col")
}

/// Generates one batch of `cfg.replicas` instances for `(n, param)`.
///
/// Arguments are validated before anything is created on disk. If the batch
/// directory already exists nothing is written and [`BatchOutcome::Skipped`]
/// is returned. A failed write aborts the batch and may leave a truncated
/// instance file behind.
#[instrument(skip(rng, cfg), fields(model = %cfg.model))]
pub fn generate_graphs<R: Rng + ?Sized>(
    rng: &mut R,
    cfg: &BatchConfig,
    n: usize,
    param: f64,
) -> anyhow::Result<BatchOutcome> {
    if cfg.replicas == 0 {
        return Err(GenError::invalid("k", 0, "at least one instance per batch").into());
    }
    generate::validate(cfg.model, n, param, &cfg.options)?;
    let pname = param_name(cfg.model, param, &cfg.options)?;

    let dir = batch_dir(&cfg.output_dir, cfg.model, n, &pname);
    if dir
        .try_exists()
        .with_context(|| format!("failed to inspect `{}`", dir.display()))?
    {
        info!(dir = %dir.display(), "batch already exists, skipping generation");
        return Ok(BatchOutcome::Skipped { dir });
    }
    fs::create_dir_all(&dir).with_context(|| format!("failed to create `{}`", dir.display()))?;

    for i in 1..=cfg.replicas {
        let graph = generate::generate(rng, cfg.model, n, param, &cfg.options)?;
        let path = dir.join(instance_file_name(cfg.model, n, &pname, i));
        let file =
            File::create(&path).with_context(|| format!("failed to create `{}`", path.display()))?;
        write_dimacs(file, &graph)
            .with_context(|| format!("failed to write `{}`", path.display()))?;
        debug!(path = %path.display(), edges = graph.edge_count(), "instance written");
    }

    info!(
        dir = %dir.display(),
        "{} graphs with {n} vertices and parameter {pname} written",
        cfg.replicas
    );
    Ok(BatchOutcome::Generated {
        dir,
        instances: cfg.replicas,
    })
}

/// Runs [`generate_graphs`] for every `(n, param)` in `n_set × param_set`.
/// Stops at the first failing combination.
pub fn generate_for_combinations<R: Rng + ?Sized>(
    rng: &mut R,
    cfg: &BatchConfig,
    n_set: &[usize],
    param_set: &[f64],
) -> anyhow::Result<SweepSummary> {
    let mut summary = SweepSummary::default();
    for &n in n_set {
        for &param in param_set {
            let outcome = generate_graphs(rng, cfg, n, param)
                .with_context(|| format!("batch {}{n} with parameter {param} failed", cfg.model))?;
            match outcome {
                BatchOutcome::Generated { .. } => summary.generated += 1,
                BatchOutcome::Skipped { .. } => summary.skipped += 1,
            }
        }
    }
    info!(
        generated = summary.generated,
        skipped = summary.skipped,
        "sweep finished"
    );
    anyhow::Ok(summary)
}
