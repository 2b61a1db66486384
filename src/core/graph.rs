use crate::core::ids::NodeId;

pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    pub fn new(node_count: NodeId) -> Self {
        Self {
            graph: Graph::new(node_count),
        }
    }

    pub fn with_capacity(node_count: NodeId, edges: usize) -> Self {
        let mut builder = Self::new(node_count);
        builder.graph.srcs.reserve(edges);
        builder.graph.dsts.reserve(edges);
        builder
    }

    /// Appends the undirected edge `{u, v}`, stored as `(min, max)`.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) {
        debug_assert!(u != v, "self-loop on {u}");
        debug_assert!(u.max(v) < self.graph.node_count, "edge ({u}, {v}) out of range");
        self.graph.srcs.push(u.min(v));
        self.graph.dsts.push(u.max(v));
    }

    pub fn freeze(self) -> Graph {
        self.graph
    }
}

/// An undirected simple graph kept as an ordered edge list.
#[derive(Debug)]
pub struct Graph {
    node_count: NodeId,
    srcs: Vec<NodeId>,
    dsts: Vec<NodeId>,
}

impl Graph {
    fn new(node_count: NodeId) -> Self {
        Self {
            node_count,
            srcs: vec![],
            dsts: vec![],
        }
    }

    pub fn node_count(&self) -> NodeId {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.srcs.len()
    }

    /// Edges in insertion order.
    pub fn edges(&'_ self) -> EdgeIter<'_> {
        EdgeIter::new(self)
    }

    #[cfg(test)]
    pub(crate) fn degrees(&self) -> Vec<usize> {
        let mut result = vec![0; self.node_count as usize];
        for e in self.edges() {
            result[e.u as usize] += 1;
            result[e.v as usize] += 1;
        }
        result
    }
}

pub struct EdgeIter<'a> {
    graph: &'a Graph,
    next: usize,
}

impl<'a> EdgeIter<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph, next: 0 }
    }
}

impl<'a> Iterator for EdgeIter<'a> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next < self.graph.edge_count() {
            let result = Some(Edge::new(
                self.graph.srcs[self.next],
                self.graph.dsts[self.next],
            ));
            self.next += 1;
            result
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.graph.edge_count() - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for EdgeIter<'_> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub u: NodeId,
    pub v: NodeId,
}

impl Edge {
    pub fn new(u: NodeId, v: NodeId) -> Self {
        Self { u, v }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_edges() {
        let gb = GraphBuilder::new(2);
        let g = gb.freeze();

        assert_eq!(2, g.node_count());
        assert_eq!(0, g.edge_count());
        assert_eq!(0, g.edges().count());
        assert_eq!(vec![0, 0], g.degrees());
    }

    #[test]
    fn test_edges_are_normalized() {
        let mut gb = GraphBuilder::new(3);
        gb.add_edge(2, 0);
        gb.add_edge(1, 2);
        let g = gb.freeze();

        let mut iter = g.edges();
        assert_eq!(2, iter.len());
        assert_eq!(Some(Edge::new(0, 2)), iter.next());
        assert_eq!(Some(Edge::new(1, 2)), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut gb = GraphBuilder::with_capacity(4, 3);
        gb.add_edge(2, 3);
        gb.add_edge(0, 1);
        gb.add_edge(0, 3);
        let g = gb.freeze();

        let edges = g.edges().collect::<Vec<Edge>>();
        assert_eq!(
            vec![Edge::new(2, 3), Edge::new(0, 1), Edge::new(0, 3)],
            edges
        );
    }

    #[test]
    fn test_degrees() {
        let mut gb = GraphBuilder::new(4);
        gb.add_edge(0, 1);
        gb.add_edge(0, 2);
        gb.add_edge(0, 3);
        gb.add_edge(2, 3);
        let g = gb.freeze();

        assert_eq!(vec![3, 1, 2, 2], g.degrees());
    }
}
