use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::error::GraphError;

/// Stable vertex identifier.
///
/// Identifiers start at 1, are handed out in increasing order and are never
/// reused or renumbered, even after the vertex is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u32);

impl VertexId {
	/// Wraps a raw identifier, e.g. one previously obtained from [`VertexId::get`].
	pub const fn new(raw: u32) -> Self {
		Self(raw)
	}

	/// The raw identifier.
	pub const fn get(self) -> u32 {
		self.0
	}
}

impl fmt::Display for VertexId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Canonical key of an undirected edge: the endpoints ordered by identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey(VertexId, VertexId);

impl EdgeKey {
	/// Builds the key for `{u, v}` regardless of argument order.
	pub fn new(u: VertexId, v: VertexId) -> Self {
		if u <= v { Self(u, v) } else { Self(v, u) }
	}

	/// Endpoints, lower identifier first.
	pub fn endpoints(self) -> (VertexId, VertexId) {
		(self.0, self.1)
	}

	/// Whether `id` is one of the endpoints.
	pub fn touches(self, id: VertexId) -> bool {
		self.0 == id || self.1 == id
	}
}

impl fmt::Display for EdgeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}-{}", self.0, self.1)
	}
}

/// Simple undirected graph with symmetric adjacency.
#[derive(Clone, Debug)]
pub struct GraphStore {
	next_id: u32,
	adjacency: BTreeMap<VertexId, BTreeSet<VertexId>>,
	edges: BTreeSet<EdgeKey>,
}

impl Default for GraphStore {
	fn default() -> Self {
		Self::new()
	}
}

impl GraphStore {
	/// An empty graph whose first vertex will be `1`.
	pub fn new() -> Self {
		Self {
			next_id: 1,
			adjacency: BTreeMap::new(),
			edges: BTreeSet::new(),
		}
	}

	/// Allocates a fresh vertex with no neighbors.
	pub fn add_vertex(&mut self) -> VertexId {
		let id = VertexId(self.next_id);
		self.next_id += 1;
		self.adjacency.insert(id, BTreeSet::new());
		id
	}

	/// Removes `id` together with every edge incident to it.
	pub fn remove_vertex(&mut self, id: VertexId) -> Result<(), GraphError> {
		let neighbors = self.adjacency.remove(&id).ok_or(GraphError::NotFound(id))?;
		for neighbor in neighbors {
			if let Some(set) = self.adjacency.get_mut(&neighbor) {
				set.remove(&id);
			}
			self.edges.remove(&EdgeKey::new(id, neighbor));
		}
		Ok(())
	}

	/// Inserts the edge `{u, v}`.
	///
	/// Returns `Ok(false)` if the edge was already present.
	pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<bool, GraphError> {
		if u == v {
			return Err(GraphError::InvalidEdge(u));
		}
		self.check_vertex(u)?;
		self.check_vertex(v)?;
		if !self.edges.insert(EdgeKey::new(u, v)) {
			return Ok(false);
		}
		self.adjacency.entry(u).or_default().insert(v);
		self.adjacency.entry(v).or_default().insert(u);
		Ok(true)
	}

	/// Removes the edge `{u, v}`.
	///
	/// Returns `Ok(false)` if there was no such edge.
	pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Result<bool, GraphError> {
		self.check_vertex(u)?;
		self.check_vertex(v)?;
		if !self.edges.remove(&EdgeKey::new(u, v)) {
			return Ok(false);
		}
		if let Some(set) = self.adjacency.get_mut(&u) {
			set.remove(&v);
		}
		if let Some(set) = self.adjacency.get_mut(&v) {
			set.remove(&u);
		}
		Ok(true)
	}

	/// Neighbors of `id`, in identifier order.
	pub fn neighbors(&self, id: VertexId) -> Result<&BTreeSet<VertexId>, GraphError> {
		self.adjacency.get(&id).ok_or(GraphError::NotFound(id))
	}

	/// Whether `id` is a live vertex.
	pub fn has_vertex(&self, id: VertexId) -> bool {
		self.adjacency.contains_key(&id)
	}

	/// Whether the edge `{u, v}` exists.
	pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
		self.edges.contains(&EdgeKey::new(u, v))
	}

	/// Live vertices in identifier order.
	pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
		self.adjacency.keys().copied()
	}

	/// Edges ordered by canonical key.
	pub fn edges(&self) -> impl Iterator<Item = EdgeKey> + '_ {
		self.edges.iter().copied()
	}

	/// Number of live vertices.
	pub fn vertex_count(&self) -> usize {
		self.adjacency.len()
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// True when the graph has no vertices.
	pub fn is_empty(&self) -> bool {
		self.adjacency.is_empty()
	}

	fn check_vertex(&self, id: VertexId) -> Result<(), GraphError> {
		if self.has_vertex(id) {
			Ok(())
		} else {
			Err(GraphError::NotFound(id))
		}
	}
}
