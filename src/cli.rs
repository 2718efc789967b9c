use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::sort::Algorithm;
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "algos")]
#[command(about = "Topological sort and classic algorithm demos")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Order the vertices of a directed graph (Kahn's algorithm)
    Toposort {
        #[command(flatten)]
        graph: GraphArgs,
        /// Re-check the produced order against every edge
        #[arg(long)]
        verify: bool,
    },

    /// Breadth-first traversal from a start vertex
    Bfs {
        #[command(flatten)]
        graph: GraphArgs,
        /// Vertex to start from
        #[arg(long, default_value_t = 0)]
        start: usize,
    },

    /// Find the first index of a value
    Search {
        /// Value to look for
        #[arg(long, allow_negative_numbers = true)]
        target: i64,
        /// Values to search through
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Sort values ascending
    Sort {
        /// Sorting algorithm
        #[arg(long, value_enum, default_value_t = Algorithm::Bubble)]
        algorithm: Algorithm,
        /// Values to sort
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Run the built-in example scenarios (text output only)
    Demo,
}

/// Where a command gets its graph from.
///
/// `--input` loads a JSON graph; `--edge` values are appended to it, or to
/// an edgeless graph of `--vertices` vertices when no file is given.
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// JSON file: {"vertex_count": N, "adjacency": [[..]]} or {"vertex_count": N, "edges": [[u, v]]}
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Number of vertices (ids 0..N)
    #[arg(long)]
    pub vertices: Option<usize>,

    /// Directed edge `FROM:TO` (repeatable)
    #[arg(long = "edge", value_name = "FROM:TO")]
    pub edges: Vec<String>,
}

impl GraphArgs {
    pub fn load(&self) -> Result<Graph> {
        let mut graph = match (&self.input, self.vertices) {
            (Some(path), _) => {
                let content = fs::read_to_string(path)?;
                serde_json::from_str::<Graph>(&content)?
            }
            (None, Some(vertices)) => Graph::empty(vertices),
            (None, None) => return Err(Error::MissingGraph),
        };

        for edge in &self.edges {
            let edge: EdgeArg = edge.parse()?;
            graph.add_edge(edge.from, edge.to)?;
        }
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph loaded"
        );
        Ok(graph)
    }
}

/// A `FROM:TO` (or `FROM->TO`) edge given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeArg {
    pub from: usize,
    pub to: usize,
}

impl FromStr for EdgeArg {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (from, to) = s
            .split_once("->")
            .or_else(|| s.split_once(':'))
            .ok_or_else(|| Error::InvalidEdge(s.to_string()))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| Error::InvalidEdge(s.to_string()))
        };

        Ok(EdgeArg {
            from: parse(from)?,
            to: parse(to)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_edge_arg_forms() {
        assert_eq!(
            "5:2".parse::<EdgeArg>().unwrap(),
            EdgeArg { from: 5, to: 2 }
        );
        assert_eq!(
            "3 -> 1".parse::<EdgeArg>().unwrap(),
            EdgeArg { from: 3, to: 1 }
        );
    }

    #[test]
    fn test_edge_arg_rejects_garbage() {
        assert!(matches!("5".parse::<EdgeArg>(), Err(Error::InvalidEdge(_))));
        assert!(matches!("a:b".parse::<EdgeArg>(), Err(Error::InvalidEdge(_))));
        assert!(matches!("-1:2".parse::<EdgeArg>(), Err(Error::InvalidEdge(_))));
    }

    #[test]
    fn test_load_from_flags() {
        let args = GraphArgs {
            input: None,
            vertices: Some(3),
            edges: vec!["0:2".to_string()],
        };
        let graph = args.load().unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.successors(0), &[2]);
    }

    #[test]
    fn test_load_reports_bad_edge() {
        let args = GraphArgs {
            input: None,
            vertices: Some(2),
            edges: vec!["0-1".to_string()],
        };
        assert!(matches!(args.load(), Err(Error::InvalidEdge(_))));
    }

    #[test]
    fn test_load_requires_a_source() {
        let args = GraphArgs {
            input: None,
            vertices: None,
            edges: vec![],
        };
        assert!(matches!(args.load(), Err(Error::MissingGraph)));
    }

    #[test]
    fn test_load_file_then_extra_edges() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"vertex_count": 3, "edges": [[0, 1]]}}"#).unwrap();

        let args = GraphArgs {
            input: Some(file.path().to_path_buf()),
            vertices: None,
            edges: vec!["1->2".to_string()],
        };
        let graph = args.load().unwrap();
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "algos", "--json", "toposort", "--vertices", "2", "--edge", "0:1",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Toposort { verify: false, .. }));
    }
}
