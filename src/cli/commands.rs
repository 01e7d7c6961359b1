//! CLI command implementations.
//!
//! Each command loads the graph file, applies one operation, and writes the
//! file back when the graph changed.

use std::path::Path;

use crate::format::{parse_label, GraphReader, GraphWriter};
use crate::graph::{Graph, TraversalOrder};
use crate::types::{EdgeRecord, GraphResult};

fn load(path: &Path) -> GraphResult<Graph<String>> {
    GraphReader::read_from_file(path, parse_label)
}

fn save(graph: &Graph<String>, path: &Path) -> GraphResult<()> {
    GraphWriter::write_to_file(graph, path)
}

/// Create a new empty graph file.
pub fn cmd_create(path: &Path, undirected: bool) -> GraphResult<()> {
    let graph: Graph<String> = Graph::new(!undirected);
    save(&graph, path)?;
    println!(
        "Created {} graph {}",
        direction_name(&graph),
        path.display()
    );
    Ok(())
}

/// Display information about a graph file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    let file_size = std::fs::metadata(path)?.len();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "directed": graph.is_directed(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "file_size": file_size,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Type: {}", direction_name(&graph));
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!("File size: {} B", file_size);
    }
    Ok(())
}

/// Add an edge, creating missing endpoints.
pub fn cmd_add_edge(path: &Path, from: &str, to: &str, weight: i64, json: bool) -> GraphResult<()> {
    let mut graph = load(path)?;
    let (from, to) = (parse_label(from)?, parse_label(to)?);
    graph.add_edge(from.clone(), to.clone(), weight)?;
    save(&graph, path)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"from": from, "to": to, "weight": weight})
        );
    } else {
        println!("Added edge {} -> {} (weight {})", from, to, weight);
    }
    Ok(())
}

/// Remove a vertex and every edge touching it.
pub fn cmd_remove_vertex(path: &Path, vertex: &str) -> GraphResult<()> {
    let mut graph = load(path)?;
    let vertex = parse_label(vertex)?;
    graph.remove_vertex(&vertex)?;
    save(&graph, path)?;
    println!("Removed vertex {}", vertex);
    Ok(())
}

/// Remove an edge (and its mirror in undirected graphs).
pub fn cmd_remove_edge(path: &Path, from: &str, to: &str) -> GraphResult<()> {
    let mut graph = load(path)?;
    let (from, to) = (parse_label(from)?, parse_label(to)?);
    graph.remove_edge(&from, &to)?;
    save(&graph, path)?;
    println!("Removed edge {} -> {}", from, to);
    Ok(())
}

/// List the neighbours of a vertex.
pub fn cmd_adjacent(path: &Path, vertex: &str, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    let adjacent = graph.get_adjacent(&parse_label(vertex)?)?;

    if json {
        println!("{}", serde_json::json!(adjacent.as_slice()));
    } else {
        println!("Adjacent to {}: {}", vertex, join(adjacent.as_slice()));
    }
    Ok(())
}

/// List every stored edge.
pub fn cmd_edges(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load(path)?;

    if json {
        let mut edges = Vec::new();
        for from in graph.vertices() {
            for edge in graph.edges_from(from)? {
                edges.push(EdgeRecord { from, edge });
            }
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&edges).unwrap_or_default()
        );
    } else {
        for from in graph.vertices() {
            for edge in graph.edges_from(from)? {
                println!("{} -> {}", from, edge);
            }
        }
    }
    Ok(())
}

/// Run a DFS or BFS from a start vertex.
pub fn cmd_traverse(path: &Path, start: &str, order: TraversalOrder, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    let visited = graph.traverse_with(&parse_label(start)?, order, |_| {})?;

    if json {
        println!("{}", serde_json::json!(visited.as_slice()));
    } else {
        let name = match order {
            TraversalOrder::DepthFirst => "DFS",
            TraversalOrder::BreadthFirst => "BFS",
        };
        println!("{} order: {}", name, join(visited.as_slice()));
    }
    Ok(())
}

/// Find the shortest path between two vertices.
pub fn cmd_path(path: &Path, start: &str, goal: &str, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    let route = graph.shortest_path(&parse_label(start)?, &parse_label(goal)?)?;
    let weight = graph.path_weight(route.as_slice())?;

    if json {
        println!(
            "{}",
            serde_json::json!({"path": route.as_slice(), "weight": weight})
        );
    } else {
        println!("Path: {}", join(route.as_slice()));
        println!("Total weight: {}", weight);
    }
    Ok(())
}

pub(crate) fn direction_name<V: crate::types::Label>(graph: &Graph<V>) -> &'static str {
    if graph.is_directed() {
        "directed"
    } else {
        "undirected"
    }
}

pub(crate) fn join(labels: &[String]) -> String {
    labels.join(" ")
}
