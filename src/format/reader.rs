//! Reads graphs from the tab-separated text format.

use std::io::BufRead;
use std::path::Path;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, Label, DIRECTED_HEADER, UNDIRECTED_HEADER};

/// Reader for graph text files.
///
/// Edge lines are replayed through [`Graph::add_edge`] in file order, so a
/// repeated edge fails with `DuplicateEdge` and a negative weight with
/// `NegativeWeight`, exactly as if the calls had been made directly.
pub struct GraphReader;

impl GraphReader {
    /// Read a graph from a file.
    pub fn read_from_file<V: Label>(
        path: &Path,
        parse: impl Fn(&str) -> GraphResult<V>,
    ) -> GraphResult<Graph<V>> {
        let file = std::fs::File::open(path)?;
        let graph = Self::read_from(std::io::BufReader::new(file), parse)?;
        log::info!(
            "Loaded {} vertices and {} edges from {}",
            graph.vertex_count(),
            graph.edge_count(),
            path.display()
        );
        Ok(graph)
    }

    /// Read a graph from any buffered reader, turning label text into `V`
    /// with `parse`.
    pub fn read_from<V: Label>(
        reader: impl BufRead,
        parse: impl Fn(&str) -> GraphResult<V>,
    ) -> GraphResult<Graph<V>> {
        let mut lines = reader.lines();

        let header = lines.next().transpose()?.unwrap_or_default();
        let directed = match header.trim_end() {
            DIRECTED_HEADER => true,
            UNDIRECTED_HEADER => false,
            other => return Err(GraphError::InvalidHeader(other.to_string())),
        };
        let mut graph = Graph::new(directed);

        for (idx, line) in lines.enumerate() {
            let line_no = idx + 2;
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            let &[from, to, weight] = fields.as_slice() else {
                return Err(GraphError::Malformed {
                    line: line_no,
                    reason: format!("expected 3 tab-separated fields, got {}", fields.len()),
                });
            };
            let weight: i64 = weight.trim().parse().map_err(|_| GraphError::Malformed {
                line: line_no,
                reason: format!("weight is not an integer: {weight:?}"),
            })?;

            let added = parse(from)
                .and_then(|from| Ok((from, parse(to)?)))
                .and_then(|(from, to)| graph.add_edge(from, to, weight));
            if let Err(e) = added {
                log::warn!("Rejected edge on line {line_no}: {e}");
                return Err(e);
            }
        }

        Ok(graph)
    }
}

/// Parse a string vertex label, rejecting empty names and names holding a
/// tab or line break.
pub fn parse_label(text: &str) -> GraphResult<String> {
    let label = text.trim();
    if label.is_empty() {
        return Err(GraphError::InvalidKey(
            "vertex name cannot be empty".to_string(),
        ));
    }
    check_field(label)?;
    Ok(label.to_string())
}

/// Reject text that would split a tab-separated record.
pub(crate) fn check_field(text: &str) -> GraphResult<()> {
    if text.contains(['\t', '\n', '\r']) {
        return Err(GraphError::InvalidKey(format!(
            "vertex name cannot contain tabs or line breaks: {text:?}"
        )));
    }
    Ok(())
}
