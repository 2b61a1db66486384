use rand::Rng;

use crate::core::error::GenError;
use crate::core::graph::{Graph, GraphBuilder};
use crate::core::ids::{NodeId, checked_node_count};
use crate::generate::round_decimal;

pub(crate) struct Threshold {
    pub distance: f64,
    pub complement: bool,
}

/// Splits `d` into the distance threshold and the complement flag: `1.x`
/// means the complement of the graph at `0.x`.
pub(crate) fn threshold(d: f64) -> Result<Threshold, GenError> {
    if !(d > 0.0 && d < 2.0) || d == 1.0 {
        return Err(GenError::invalid(
            "d",
            d,
            "a distance threshold in (0, 2) other than 1",
        ));
    }
    Ok(if d > 1.0 {
        Threshold {
            distance: round_decimal(d - 1.0, 15),
            complement: true,
        }
    } else {
        Threshold {
            distance: d,
            complement: false,
        }
    })
}

pub(crate) fn check(n: usize, d: f64) -> Result<(NodeId, Threshold), GenError> {
    Ok((checked_node_count(n)?, threshold(d)?))
}

/// Random geometric graph on `n` points drawn uniformly from the unit square.
/// Pairs at distance `<= d` are joined, or for `d > 1` pairs at distance
/// greater than `d - 1`.
pub fn random_geometric<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    d: f64,
) -> Result<Graph, GenError> {
    let (node_count, threshold) = check(n, d)?;
    let points = (0..node_count)
        .map(|_| (rng.random::<f64>(), rng.random::<f64>()))
        .collect::<Vec<(f64, f64)>>();

    let mut gb = GraphBuilder::new(node_count);
    for u in 0..node_count {
        for v in u + 1..node_count {
            let (x1, y1) = points[u as usize];
            let (x2, y2) = points[v as usize];
            let dist = ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt();
            let near = dist <= threshold.distance;
            if near != threshold.complement {
                gb.add_edge(u, v);
            }
        }
    }
    Ok(gb.freeze())
}
