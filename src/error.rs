use thiserror::Error;

/// All possible errors raised by the algorithms and the CLI harness
#[derive(Error, Debug)]
pub enum Error {
    #[error("Edge {from} -> {to} points outside the graph ({vertex_count} vertices)")]
    VertexOutOfRange {
        from: usize,
        to: usize,
        vertex_count: usize,
    },

    #[error("Adjacency has {actual} entries but the graph declares {expected} vertices")]
    AdjacencyLength { expected: usize, actual: usize },

    #[error("Start vertex {start} is not in the graph ({vertex_count} vertices)")]
    StartOutOfRange { start: usize, vertex_count: usize },

    #[error("Invalid edge `{0}`: expected `FROM:TO`")]
    InvalidEdge(String),

    #[error("No graph given. Use --input or --vertices/--edge")]
    MissingGraph,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
