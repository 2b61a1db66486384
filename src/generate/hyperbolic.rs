use std::f64::consts::{PI, TAU};

use rand::Rng;

use crate::core::error::GenError;
use crate::core::graph::{Graph, GraphBuilder};
use crate::core::ids::{NodeId, checked_node_count};

/// Shape of the hyperbolic disk the vertices are sampled from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HyperbolicParams {
    /// Disk radius `R`, also the connection distance. `R >> 1` keeps the
    /// graph distinct from a Euclidean one.
    pub radius: f64,
    /// Larger values give a longer-tailed degree distribution.
    pub alpha: f64,
    /// Larger values give fewer connections.
    pub curvature: f64,
}

impl Default for HyperbolicParams {
    fn default() -> Self {
        Self {
            radius: 8.0,
            alpha: 1.0,
            curvature: 1.0,
        }
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), GenError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GenError::invalid(name, value, "a finite positive number"))
    }
}

pub(crate) fn check(n: usize, params: &HyperbolicParams) -> Result<NodeId, GenError> {
    let node_count = checked_node_count(n)?;
    positive("R", params.radius)?;
    positive("alpha", params.alpha)?;
    positive("curvature", params.curvature)?;
    Ok(node_count)
}

/// Hyperbolic geometric graph (Krioukov et al., arXiv:1006.5169). Radii are
/// drawn quasi-uniformly by inverse CDF, angles uniformly, and pairs within
/// hyperbolic distance `R` are joined. Connectivity is not guaranteed.
pub fn hyperbolic<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    params: &HyperbolicParams,
) -> Result<Graph, GenError> {
    let node_count = check(n, params)?;
    let HyperbolicParams {
        radius,
        alpha,
        curvature,
    } = *params;

    let spread = (alpha * radius).cosh() - 1.0;
    let radii = (0..node_count)
        .map(|_| (1.0 + spread * rng.random::<f64>()).acosh() / alpha)
        .collect::<Vec<f64>>();
    let angles = (0..node_count)
        .map(|_| rng.random::<f64>() * TAU)
        .collect::<Vec<f64>>();

    let mut gb = GraphBuilder::new(node_count);
    for u in 0..node_count {
        for v in u + 1..node_count {
            let (i, j) = (u as usize, v as usize);
            if distance(radii[i], angles[i], radii[j], angles[j], curvature) <= radius {
                gb.add_edge(u, v);
            }
        }
    }
    Ok(gb.freeze())
}

/// Hyperbolic law-of-cosines distance between polar points `(r1, t1)` and
/// `(r2, t2)` in a space of the given curvature.
fn distance(r1: f64, t1: f64, r2: f64, t2: f64, curvature: f64) -> f64 {
    let r1 = r1 * curvature;
    let r2 = r2 * curvature;
    // shortest angular separation on the circle
    let dtheta = PI - (PI - (t1 - t2).abs()).abs();
    let h = r1.cosh() * r2.cosh() - r1.sinh() * r2.sinh() * dtheta.cos();
    clamped_acosh(h) / curvature
}

// h can dip just under 1 for coincident points
fn clamped_acosh(h: f64) -> f64 {
    if h < 1.0 { 0.0 } else { h.acosh() }
}
