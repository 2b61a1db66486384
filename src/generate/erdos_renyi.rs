use rand::Rng;

use crate::core::error::GenError;
use crate::core::graph::{Graph, GraphBuilder};
use crate::core::ids::{NodeId, checked_node_count};

pub(crate) fn check_probability(p: f64) -> Result<(), GenError> {
    if !(p > 0.0 && p < 1.0) {
        return Err(GenError::invalid("p", p, "an edge probability in (0, 1)"));
    }
    Ok(())
}

pub(crate) fn check(n: usize, p: f64) -> Result<NodeId, GenError> {
    let node_count = checked_node_count(n)?;
    check_probability(p)?;
    Ok(node_count)
}

/// G(n, p): every pair `u < v` is kept independently when a single uniform
/// draw is `<= p`. Edges come out in lexicographic order.
pub fn erdos_renyi<R: Rng + ?Sized>(rng: &mut R, n: usize, p: f64) -> Result<Graph, GenError> {
    let node_count = check(n, p)?;
    let mut gb = GraphBuilder::new(node_count);
    for u in 0..node_count {
        for v in u + 1..node_count {
            if rng.random::<f64>() <= p {
                gb.add_edge(u, v);
            }
        }
    }
    Ok(gb.freeze())
}
