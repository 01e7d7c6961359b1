//! Writes graphs in the tab-separated text format.

use std::fmt::Display;
use std::io::Write;
use std::path::Path;

use crate::graph::Graph;
use crate::store::OpenTable;
use crate::types::{GraphResult, Label, DIRECTED_HEADER, UNDIRECTED_HEADER};

use super::reader::check_field;

/// Writer for graph text files.
///
/// Layout: a `directed` / `undirected` header line, then one
/// `source<TAB>target<TAB>weight` line per edge. Undirected edges are written
/// once, in the direction first met while walking the vertices. Labels whose
/// text holds a tab or line break are refused with `InvalidKey` before
/// anything is written.
pub struct GraphWriter;

impl GraphWriter {
    /// Write a graph to a file, replacing its contents.
    pub fn write_to_file<V: Label + Display>(graph: &Graph<V>, path: &Path) -> GraphResult<()> {
        check_labels(graph)?;
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer)?;
        writer.flush()?;
        log::info!("Saved graph to {}", path.display());
        Ok(())
    }

    /// Write a graph to any writer. Returns the number of edge lines written.
    pub fn write_to<V: Label + Display>(
        graph: &Graph<V>,
        writer: &mut impl Write,
    ) -> GraphResult<usize> {
        check_labels(graph)?;

        let header = if graph.is_directed() {
            DIRECTED_HEADER
        } else {
            UNDIRECTED_HEADER
        };
        writeln!(writer, "{header}")?;

        let mut written: OpenTable<(V, V), ()> = OpenTable::new();
        let mut lines = 0;
        for source in graph.vertices() {
            for edge in graph.edges_from(source)? {
                if !graph.is_directed() {
                    if written.contains_key(&(edge.target.clone(), source.clone())) {
                        continue;
                    }
                    written.put((source.clone(), edge.target.clone()), ())?;
                }
                writeln!(writer, "{}\t{}\t{}", source, edge.target, edge.weight)?;
                lines += 1;
            }
        }
        Ok(lines)
    }
}

fn check_labels<V: Label + Display>(graph: &Graph<V>) -> GraphResult<()> {
    for v in graph.vertices() {
        check_field(&v.to_string())?;
    }
    Ok(())
}
