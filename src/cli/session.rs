//! Interactive session: one command per line over an in-memory graph.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::format::{parse_label, GraphReader, GraphWriter};
use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

use super::commands::{direction_name, join};

/// Commands understood by the session, with usage and description.
pub const COMMANDS: &[(&str, &str)] = &[
    ("add-vertex <v>", "Add a vertex"),
    ("add-edge <from> <to> <weight>", "Add an edge"),
    ("remove-vertex <v>", "Remove a vertex and its edges"),
    ("remove-edge <from> <to>", "Remove an edge"),
    ("adjacent <v>", "Show neighbours of a vertex"),
    ("edges", "Show all edges"),
    ("dfs <start>", "Depth-first traversal"),
    ("bfs <start>", "Breadth-first traversal"),
    ("path <start> <goal>", "Shortest path (Dijkstra)"),
    ("info", "Show graph type and size"),
    ("new [directed|undirected]", "Start an empty graph"),
    ("save [file]", "Save the graph"),
    ("load <file>", "Load a graph"),
    ("help", "Show this list"),
    ("exit", "Leave the session"),
];

/// Session state: the working graph and the file it was loaded from.
pub struct Session {
    graph: Graph<String>,
    file_path: Option<PathBuf>,
}

impl Session {
    pub fn new(graph: Graph<String>, file_path: Option<PathBuf>) -> Self {
        Self { graph, file_path }
    }

    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// Read commands from `input` until `exit` or end of input. Command
    /// errors are reported on `out` and the loop continues.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> GraphResult<()> {
        writeln!(
            out,
            "{} graph session. Type `help` for commands.",
            direction_name(&self.graph)
        )?;
        for line in input.lines() {
            let line = line?;
            match self.execute(&line, out) {
                Ok(true) => break,
                Ok(false) => {}
                Err(e) => writeln!(out, "Error: {e}")?,
            }
        }
        Ok(())
    }

    /// Execute a single command line. Returns `true` when the session should end.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> GraphResult<bool> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, args)) = tokens.split_first() else {
            return Ok(false);
        };

        match (cmd, args) {
            ("exit" | "quit", _) => return Ok(true),
            ("help", _) => {
                for (usage, desc) in COMMANDS {
                    writeln!(out, "  {usage:<32} {desc}")?;
                }
            }
            ("add-vertex", &[v]) => {
                self.graph.add_vertex(parse_label(v)?)?;
                writeln!(out, "Vertex added")?;
            }
            ("add-edge", &[from, to, weight]) => {
                let weight: i64 = weight
                    .parse()
                    .map_err(|_| GraphError::InvalidWeight(weight.to_string()))?;
                self.graph
                    .add_edge(parse_label(from)?, parse_label(to)?, weight)?;
                writeln!(out, "Edge added")?;
            }
            ("remove-vertex", &[v]) => {
                self.graph.remove_vertex(&parse_label(v)?)?;
                writeln!(out, "Vertex removed")?;
            }
            ("remove-edge", &[from, to]) => {
                self.graph
                    .remove_edge(&parse_label(from)?, &parse_label(to)?)?;
                writeln!(out, "Edge removed")?;
            }
            ("adjacent", &[v]) => {
                let adjacent = self.graph.get_adjacent(&parse_label(v)?)?;
                writeln!(out, "Adjacent: {}", join(adjacent.as_slice()))?;
            }
            ("edges", []) => {
                for from in self.graph.vertices() {
                    for edge in self.graph.edges_from(from)? {
                        writeln!(out, "{from} -> {edge}")?;
                    }
                }
            }
            ("dfs", &[start]) => {
                let order = self.graph.dfs(&parse_label(start)?)?;
                writeln!(out, "DFS order: {}", join(order.as_slice()))?;
            }
            ("bfs", &[start]) => {
                let order = self.graph.bfs(&parse_label(start)?)?;
                writeln!(out, "BFS order: {}", join(order.as_slice()))?;
            }
            ("path", &[start, goal]) => {
                let route = self
                    .graph
                    .shortest_path(&parse_label(start)?, &parse_label(goal)?)?;
                let weight = self.graph.path_weight(route.as_slice())?;
                writeln!(out, "Path: {}", join(route.as_slice()))?;
                writeln!(out, "Total weight: {weight}")?;
            }
            ("info", []) => {
                writeln!(
                    out,
                    "{} graph: {} vertices, {} edges",
                    direction_name(&self.graph),
                    self.graph.vertex_count(),
                    self.graph.edge_count()
                )?;
            }
            ("new", []) | ("new", ["directed"]) => {
                self.graph = Graph::directed();
                self.file_path = None;
                writeln!(out, "Created directed graph")?;
            }
            ("new", ["undirected"]) => {
                self.graph = Graph::undirected();
                self.file_path = None;
                writeln!(out, "Created undirected graph")?;
            }
            ("save", rest) if rest.len() <= 1 => {
                let path = match rest.first() {
                    Some(p) => PathBuf::from(*p),
                    None => match &self.file_path {
                        Some(p) => p.clone(),
                        None => {
                            writeln!(out, "No file loaded. Usage: save <file>")?;
                            return Ok(false);
                        }
                    },
                };
                GraphWriter::write_to_file(&self.graph, &path)?;
                writeln!(out, "Saved {}", path.display())?;
                self.file_path = Some(path);
            }
            ("load", &[file]) => {
                let path = PathBuf::from(file);
                self.graph = GraphReader::read_from_file(&path, parse_label)?;
                writeln!(out, "Loaded {}", path.display())?;
                self.file_path = Some(path);
            }
            _ => writeln!(out, "Unknown command or wrong arguments: {line}. Type `help`.")?,
        }

        Ok(false)
    }
}
