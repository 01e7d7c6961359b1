//! Phase 3 tests: text format and interactive session.

use std::io::Cursor;

use adjgraph::cli::Session;
use adjgraph::format::{parse_label, GraphReader, GraphWriter};
use adjgraph::graph::Graph;
use adjgraph::types::{EdgeRecord, GraphError};

use tempfile::NamedTempFile;

fn read(text: &str) -> Result<Graph<String>, GraphError> {
    GraphReader::read_from(Cursor::new(text), parse_label)
}

fn write(graph: &Graph<String>) -> String {
    let mut buf = Vec::new();
    GraphWriter::write_to(graph, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

fn s(label: &str) -> String {
    label.to_string()
}

// ==================== Reader Tests ====================

#[test]
fn test_read_directed() {
    let graph = read("directed\nA\tB\t1\nB\tC\t2\n\nA\tC\t10\n").unwrap();

    assert!(graph.is_directed());
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(
        graph.get_adjacent(&s("A")).unwrap().into_vec(),
        vec![s("B"), s("C")]
    );
}

#[test]
fn test_read_undirected_creates_mirrors() {
    let graph = read("undirected\nA\tB\t5\n").unwrap();
    assert!(!graph.is_directed());
    assert_eq!(graph.find_edge(&s("B"), &s("A")).unwrap().weight, 5);
}

#[test]
fn test_read_invalid_header() {
    match read("sideways\nA\tB\t1\n") {
        Err(GraphError::InvalidHeader(h)) => assert_eq!(h, "sideways"),
        other => panic!("Expected InvalidHeader, got {:?}", other),
    }
    assert!(matches!(read(""), Err(GraphError::InvalidHeader(_))));
}

#[test]
fn test_read_malformed_lines() {
    match read("directed\nA\tB\t1\nA B 1\n") {
        Err(GraphError::Malformed { line, .. }) => assert_eq!(line, 3),
        other => panic!("Expected Malformed, got {:?}", other),
    }
    match read("directed\nA\tB\theavy\n") {
        Err(GraphError::Malformed { line, .. }) => assert_eq!(line, 2),
        other => panic!("Expected Malformed, got {:?}", other),
    }
}

#[test]
fn test_read_surfaces_graph_errors() {
    assert!(matches!(
        read("directed\nA\tB\t1\nA\tB\t2\n"),
        Err(GraphError::DuplicateEdge { .. })
    ));
    assert!(matches!(
        read("directed\nA\tB\t-3\n"),
        Err(GraphError::NegativeWeight(-3))
    ));
    assert!(matches!(
        read("directed\n\tB\t1\n"),
        Err(GraphError::InvalidKey(_))
    ));
}

// ==================== Writer Tests ====================

#[test]
fn test_write_directed() {
    let mut graph: Graph<String> = Graph::directed();
    graph.add_edge(s("A"), s("B"), 1).unwrap();

    assert_eq!(write(&graph), "directed\nA\tB\t1\n");
}

#[test]
fn test_write_undirected_once_per_edge() {
    let mut graph: Graph<String> = Graph::undirected();
    graph.add_edge(s("A"), s("B"), 1).unwrap();
    graph.add_edge(s("B"), s("C"), 2).unwrap();
    graph.add_edge(s("C"), s("C"), 3).unwrap();

    let text = write(&graph);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "undirected");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_roundtrip_preserves_edges() {
    for directed in [true, false] {
        let mut graph: Graph<String> = Graph::new(directed);
        graph.add_edge(s("A"), s("B"), 1).unwrap();
        graph.add_edge(s("B"), s("C"), 2).unwrap();
        graph.add_edge(s("C"), s("A"), 3).unwrap();
        graph.add_edge(s("D"), s("D"), 0).unwrap();

        let restored = read(&write(&graph)).unwrap();
        assert_eq!(restored.is_directed(), directed);
        assert_eq!(restored.vertex_count(), graph.vertex_count());
        assert_eq!(restored.edge_count(), graph.edge_count());
        for v in graph.vertices() {
            for edge in graph.edges_from(v).unwrap() {
                assert_eq!(
                    restored.find_edge(v, &edge.target).map(|e| e.weight),
                    Some(edge.weight)
                );
            }
        }
    }
}

#[test]
fn test_file_roundtrip() {
    let mut graph: Graph<String> = Graph::directed();
    graph.add_edge(s("home"), s("work"), 12).unwrap();
    graph.add_edge(s("work"), s("gym"), 3).unwrap();

    let tmp = NamedTempFile::new().unwrap();
    GraphWriter::write_to_file(&graph, tmp.path()).unwrap();
    let restored = GraphReader::read_from_file(tmp.path(), parse_label).unwrap();

    let path = restored.shortest_path(&s("home"), &s("gym")).unwrap();
    assert_eq!(restored.path_weight(path.as_slice()).unwrap(), 15);
}

#[test]
fn test_read_missing_file() {
    let result = GraphReader::read_from_file(
        std::path::Path::new("/nonexistent/graph.txt"),
        parse_label,
    );
    assert!(matches!(result, Err(GraphError::Io(_))));
}

#[test]
fn test_numeric_labels() {
    let graph: Graph<u32> = GraphReader::read_from(Cursor::new("directed\n1\t2\t4\n"), |t| {
        t.parse()
            .map_err(|_| GraphError::InvalidKey(t.to_string()))
    })
    .unwrap();
    assert_eq!(graph.get_adjacent(&1).unwrap().into_vec(), vec![2]);
}

#[test]
fn test_read_rejects_unparsable_target_label() {
    let result: Result<Graph<u32>, GraphError> =
        GraphReader::read_from(Cursor::new("directed\n1\tx\t4\n"), |t| {
            t.parse()
                .map_err(|_| GraphError::InvalidKey(t.to_string()))
        });
    match result {
        Err(GraphError::InvalidKey(label)) => assert_eq!(label, "x"),
        other => panic!("Expected InvalidKey, got {:?}", other),
    }
}

#[test]
fn test_parse_label_rejects_separators() {
    assert_eq!(parse_label("  A ").unwrap(), "A");
    for bad in ["A\tB", "A\nB", "A\rB"] {
        assert!(matches!(parse_label(bad), Err(GraphError::InvalidKey(_))));
    }
}

#[test]
fn test_write_rejects_separator_in_label() {
    let mut graph: Graph<String> = Graph::directed();
    graph.add_edge(s("A\tB"), s("C"), 1).unwrap();

    let mut buf = Vec::new();
    match GraphWriter::write_to(&graph, &mut buf) {
        Err(GraphError::InvalidKey(_)) => {}
        other => panic!("Expected InvalidKey, got {:?}", other),
    }
    assert!(buf.is_empty());

    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "directed\nX\tY\t1\n").unwrap();
    assert!(GraphWriter::write_to_file(&graph, file.path()).is_err());
    // The existing file is left untouched.
    assert_eq!(
        std::fs::read_to_string(file.path()).unwrap(),
        "directed\nX\tY\t1\n"
    );
}

#[test]
fn test_edge_record_json() {
    let mut graph: Graph<String> = Graph::directed();
    graph.add_edge(s("A"), s("B"), 7).unwrap();

    let from = s("A");
    let edge = &graph.edges_from(&from).unwrap()[0];
    let value = serde_json::to_value(EdgeRecord { from: &from, edge }).unwrap();
    assert_eq!(value, serde_json::json!({"from": "A", "to": "B", "weight": 7}));
}

// ==================== Session Tests ====================

fn run_session(script: &str) -> (Session, String) {
    let mut session = Session::new(Graph::directed(), None);
    let mut out = Vec::new();
    session.run(Cursor::new(script), &mut out).unwrap();
    (session, String::from_utf8(out).unwrap())
}

#[test]
fn test_session_builds_graph() {
    let (session, out) = run_session(
        "add-edge A B 1\nadd-edge B C 2\nadd-edge A C 10\npath A C\ndfs A\nexit\n",
    );

    assert_eq!(session.graph().edge_count(), 3);
    assert!(out.contains("Path: A B C"));
    assert!(out.contains("Total weight: 3"));
    assert!(out.contains("DFS order: A B C"));
}

#[test]
fn test_session_reports_errors_and_continues() {
    let (session, out) = run_session(
        "add-edge A B -4\nadd-edge A B x\nremove-vertex Q\nfrobnicate\nadd-vertex A\n",
    );

    assert!(out.contains("Error: Edge weight cannot be negative: -4"));
    assert!(out.contains("Error: Edge weight must be an integer"));
    assert!(out.contains("Error: Vertex \"Q\" not found"));
    assert!(out.contains("Unknown command"));
    assert!(session.graph().contains_vertex(&s("A")));
}

#[test]
fn test_session_stops_at_exit() {
    let (session, _) = run_session("add-vertex A\nexit\nadd-vertex B\n");
    assert!(session.graph().contains_vertex(&s("A")));
    assert!(!session.graph().contains_vertex(&s("B")));
}

#[test]
fn test_session_save_and_load() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().display().to_string();

    let script = format!(
        "new undirected\nadd-edge A B 2\nsave {path}\nnew\nload {path}\nadjacent B\n"
    );
    let (session, out) = run_session(&script);

    assert!(!session.graph().is_directed());
    assert!(out.contains("Adjacent: A"));
}
