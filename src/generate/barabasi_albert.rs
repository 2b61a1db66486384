use std::collections::BTreeSet;
use std::iter;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::core::error::GenError;
use crate::core::graph::{Graph, GraphBuilder};
use crate::core::ids::{NodeId, checked_node_count};

pub(crate) fn check(n: usize, m: usize) -> Result<NodeId, GenError> {
    let node_count = checked_node_count(n)?;
    if m >= n {
        return Err(GenError::invalid(
            "m",
            m,
            format!("an attachment count below n = {n}"),
        ));
    }
    Ok(node_count)
}

/// Preferential attachment growth. Starts from `m` isolated vertices; every
/// later vertex links to `m` distinct earlier vertices picked with probability
/// proportional to their degree, giving `m * (n - m)` edges.
pub fn barabasi_albert<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    m: usize,
) -> Result<Graph, GenError> {
    let node_count = check(n, m)?;
    let mut gb = GraphBuilder::with_capacity(node_count, m * (n - m));
    if m == 0 {
        return Ok(gb.freeze());
    }

    let seed_count = m as NodeId;
    let mut targets = (0..seed_count).collect::<Vec<NodeId>>();
    // every edge endpoint once, so a uniform pick is degree-proportional
    let mut repeated = Vec::with_capacity(2 * m * (n - m));
    for source in seed_count..node_count {
        for &target in &targets {
            gb.add_edge(target, source);
        }
        repeated.extend_from_slice(&targets);
        repeated.extend(iter::repeat_n(source, m));
        if source + 1 < node_count {
            targets = random_subset(rng, &repeated, m);
        }
    }
    Ok(gb.freeze())
}

fn random_subset<R: Rng + ?Sized>(rng: &mut R, pool: &[NodeId], m: usize) -> Vec<NodeId> {
    let mut picked = BTreeSet::new();
    while picked.len() < m {
        match pool.choose(rng) {
            Some(&node) => {
                picked.insert(node);
            }
            None => break,
        }
    }
    picked.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::Edge;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case(2, 1)]
    #[case(10, 1)]
    #[case(10, 3)]
    #[case(50, 5)]
    #[case(6, 5)]
    fn test_edge_count(#[case] n: usize, #[case] m: usize) {
        let mut rng = StdRng::seed_from_u64(17);
        let g = barabasi_albert(&mut rng, n, m).unwrap();
        assert_eq!(m * (n - m), g.edge_count());
    }

    #[test]
    fn test_simple_graph() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..10 {
            let g = barabasi_albert(&mut rng, 80, 4).unwrap();
            let edges = g.edges().collect::<Vec<Edge>>();
            assert!(edges.iter().all(|e| e.u < e.v && e.v < 80));
            let unique = edges.iter().collect::<HashSet<&Edge>>();
            assert_eq!(edges.len(), unique.len());
        }
    }

    #[test]
    fn test_every_new_vertex_attaches_m_times() {
        let mut rng = StdRng::seed_from_u64(8);
        let g = barabasi_albert(&mut rng, 40, 3).unwrap();
        let mut back_links = vec![0; 40];
        for e in g.edges() {
            back_links[e.v as usize] += 1;
        }
        assert!(back_links[..3].iter().all(|&c| c == 0));
        assert!(back_links[3..].iter().all(|&c| c == 3));
    }

    #[test]
    fn test_hubs_emerge() {
        let mut rng = StdRng::seed_from_u64(12);
        let g = barabasi_albert(&mut rng, 500, 2).unwrap();
        let max_degree = g.degrees().into_iter().max().unwrap();
        // far above the mean degree of about 4
        assert!(max_degree >= 15, "max degree {max_degree}");
    }

    #[test]
    fn test_zero_attachment_is_edgeless() {
        let mut rng = StdRng::seed_from_u64(0);
        let g = barabasi_albert(&mut rng, 5, 0).unwrap();
        assert_eq!(5, g.node_count());
        assert_eq!(0, g.edge_count());
    }

    #[rstest]
    #[case(0, 0)]
    #[case(5, 5)]
    #[case(5, 9)]
    fn test_rejects_out_of_domain(#[case] n: usize, #[case] m: usize) {
        let mut rng = StdRng::seed_from_u64(0);
        let err = barabasi_albert(&mut rng, n, m).unwrap_err();
        assert!(matches!(err, GenError::InvalidArgument { .. }));
    }
}
