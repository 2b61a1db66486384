//! Random graph models and the dispatch from a model tag plus a raw
//! parameter to the matching generator.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::core::error::GenError;
use crate::core::graph::Graph;

pub mod barabasi_albert;
pub mod erdos_renyi;
pub mod geometric;
pub mod hyperbolic;

pub use barabasi_albert::barabasi_albert;
pub use erdos_renyi::erdos_renyi;
pub use geometric::random_geometric;
pub use hyperbolic::{HyperbolicParams, hyperbolic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    ErdosRenyi,
    Geometric,
    Hyperbolic,
    BarabasiAlbert,
}

impl Model {
    pub const ALL: [Model; 4] = [
        Model::ErdosRenyi,
        Model::Geometric,
        Model::Hyperbolic,
        Model::BarabasiAlbert,
    ];

    /// Short tag used on the command line and in batch paths.
    pub fn tag(&self) -> &'static str {
        match self {
            Model::ErdosRenyi => "ER",
            Model::Geometric => "RGG",
            Model::Hyperbolic => "HGG",
            Model::BarabasiAlbert => "BA",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Model {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::ALL
            .into_iter()
            .find(|model| model.tag() == s)
            .ok_or_else(|| GenError::UnsupportedModel {
                provided: s.to_owned(),
            })
    }
}

/// Model settings that are not carried by the per-batch parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelOptions {
    pub alpha: f64,
    pub curvature: f64,
}

impl Default for ModelOptions {
    fn default() -> Self {
        let hgg = HyperbolicParams::default();
        Self {
            alpha: hgg.alpha,
            curvature: hgg.curvature,
        }
    }
}

impl ModelOptions {
    fn hyperbolic(&self, radius: f64) -> HyperbolicParams {
        HyperbolicParams {
            radius,
            alpha: self.alpha,
            curvature: self.curvature,
        }
    }
}

/// Checks `n` and `param` against the model's domain without drawing.
pub fn validate(model: Model, n: usize, param: f64, opts: &ModelOptions) -> Result<(), GenError> {
    match model {
        Model::ErdosRenyi => erdos_renyi::check(n, param).map(|_| ()),
        Model::Geometric => geometric::check(n, param).map(|_| ()),
        Model::Hyperbolic => hyperbolic::check(n, &opts.hyperbolic(param)).map(|_| ()),
        Model::BarabasiAlbert => {
            barabasi_albert::check(n, attachment_count(param)?).map(|_| ())
        }
    }
}

/// Generates one instance of `model` with `n` vertices.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    model: Model,
    n: usize,
    param: f64,
    opts: &ModelOptions,
) -> Result<Graph, GenError> {
    match model {
        Model::ErdosRenyi => erdos_renyi(rng, n, param),
        Model::Geometric => random_geometric(rng, n, param),
        Model::Hyperbolic => hyperbolic(rng, n, &opts.hyperbolic(param)),
        Model::BarabasiAlbert => barabasi_albert(rng, n, attachment_count(param)?),
    }
}

// Truncates towards zero, the way the attachment count has always been read.
fn attachment_count(param: f64) -> Result<usize, GenError> {
    if !param.is_finite() || param < 0.0 {
        return Err(GenError::invalid(
            "m",
            param,
            "a non-negative attachment count",
        ));
    }
    Ok(param.trunc() as usize)
}

/// Rounds `x` to `places` decimal digits, correctly rounded.
pub fn round_decimal(x: f64, places: usize) -> f64 {
    format!("{x:.places$}").parse().unwrap_or(x)
}
