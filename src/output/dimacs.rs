use std::io;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::core::graph::Graph;

/// Writes `graph` as DIMACS edge-format text: a comment line, the problem
/// line `p edge <n> <m>` and one 1-indexed `e <u> <v>` line per edge.
pub fn write_dimacs<W: io::Write>(writer: W, graph: &Graph) -> anyhow::Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    let n = graph.node_count();
    wtr.serialize(("c", format!("Random graph with {n} vertices")))?;
    wtr.serialize(("p", "edge", n, graph.edge_count()))?;
    for e in graph.edges() {
        wtr.serialize(("e", e.u + 1, e.v + 1))?;
    }
    wtr.flush()?;

    anyhow::Ok(())
}
