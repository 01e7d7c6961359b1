//! CLI entry point for the `adjg` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use adjgraph::cli::{commands, Session};
use adjgraph::format::{parse_label, GraphReader};
use adjgraph::graph::{Graph, TraversalOrder};
use adjgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "adjg",
    about = "adjgraph CLI: weighted graphs in tab-separated text files"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty graph file
    Create {
        /// Path to the graph file to create
        file: PathBuf,
        /// Create an undirected graph
        #[arg(long)]
        undirected: bool,
    },
    /// Display information about a graph file
    Info {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Add an edge, creating missing vertices
    AddEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Source vertex
        from: String,
        /// Destination vertex
        to: String,
        /// Non-negative integer weight
        #[arg(allow_negative_numbers = true)]
        weight: i64,
    },
    /// Remove a vertex and every edge touching it
    RemoveVertex {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex to remove
        vertex: String,
    },
    /// Remove an edge
    RemoveEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Source vertex
        from: String,
        /// Destination vertex
        to: String,
    },
    /// Show the neighbours of a vertex
    Adjacent {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex to inspect
        vertex: String,
    },
    /// Show all edges
    Edges {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Depth-first traversal from a start vertex
    Dfs {
        /// Path to the graph file
        file: PathBuf,
        /// Start vertex
        start: String,
    },
    /// Breadth-first traversal from a start vertex
    Bfs {
        /// Path to the graph file
        file: PathBuf,
        /// Start vertex
        start: String,
    },
    /// Shortest path between two vertices (Dijkstra)
    Path {
        /// Path to the graph file
        file: PathBuf,
        /// Start vertex
        start: String,
        /// Goal vertex
        goal: String,
    },
    /// Interactive session over an in-memory graph
    Repl {
        /// Graph file to load at startup
        file: Option<PathBuf>,
        /// Start with an undirected graph when no file is given
        #[arg(long)]
        undirected: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Create { file, undirected } => commands::cmd_create(&file, undirected),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::AddEdge {
            file,
            from,
            to,
            weight,
        } => commands::cmd_add_edge(&file, &from, &to, weight, json),
        Commands::RemoveVertex { file, vertex } => commands::cmd_remove_vertex(&file, &vertex),
        Commands::RemoveEdge { file, from, to } => commands::cmd_remove_edge(&file, &from, &to),
        Commands::Adjacent { file, vertex } => commands::cmd_adjacent(&file, &vertex, json),
        Commands::Edges { file } => commands::cmd_edges(&file, json),
        Commands::Dfs { file, start } => {
            commands::cmd_traverse(&file, &start, TraversalOrder::DepthFirst, json)
        }
        Commands::Bfs { file, start } => {
            commands::cmd_traverse(&file, &start, TraversalOrder::BreadthFirst, json)
        }
        Commands::Path { file, start, goal } => commands::cmd_path(&file, &start, &goal, json),
        Commands::Repl { file, undirected } => run_repl(file, undirected),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::InvalidHeader(_) | GraphError::Malformed { .. } => 2,
            GraphError::VertexNotFound(_)
            | GraphError::EdgeNotFound { .. }
            | GraphError::NoPathExists { .. }
            | GraphError::EdgeNotFoundOnPath { .. } => 4,
            _ => 5,
        };
        process::exit(code);
    }
}

fn run_repl(file: Option<PathBuf>, undirected: bool) -> adjgraph::GraphResult<()> {
    let graph = match &file {
        Some(path) => GraphReader::read_from_file(path, parse_label)?,
        None => Graph::new(!undirected),
    };
    let mut session = Session::new(graph, file);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    session.run(stdin.lock(), &mut stdout)
}
