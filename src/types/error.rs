//! Error types for the graph computations.

use std::fmt;

/// Error type shared by ingestion and the graph algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge record could not be parsed or carries an unusable weight.
    MalformedEdge(String),
    /// Requested flow source or sink is not a node of the graph.
    InvalidEndpoint(String),
    /// The iteration guard around the augmentation loop tripped.
    ComputationAborted { rounds: u64 },
    /// Underlying file access failed.
    Io(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedEdge(reason) => write!(f, "Malformed edge record: {reason}"),
            Self::InvalidEndpoint(label) => write!(f, "Unknown endpoint: {label}"),
            Self::ComputationAborted { rounds } => {
                write!(f, "Computation aborted after {rounds} rounds")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for GraphError {}

impl From<std::io::Error> for GraphError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
