use thiserror::Error;

use super::store::VertexId;

/// Recoverable failures of graph and landmark operations.
///
/// A failed operation leaves every piece of state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
	/// The operation referenced a vertex that is not in the graph.
	#[error("vertex {0} not found")]
	NotFound(VertexId),
	/// An edge from a vertex to itself was requested.
	#[error("invalid edge: self-loop on vertex {0}")]
	InvalidEdge(VertexId),
}
