//! Multi-source unweighted distances and the resolving-set check.
//!
//! Every call recomputes from scratch: one breadth-first search per landmark,
//! `O(|W| * (|V| + |E|))` overall. Graphs edited by hand stay small enough for
//! that to be instant.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::fmt;

use super::error::GraphError;
use super::store::{GraphStore, VertexId};

/// Shortest-path length between two vertices.
///
/// `Unreachable` orders after every finite distance and never equals one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
	/// Number of edges on a shortest path.
	Finite(u32),
	/// No path exists.
	Unreachable,
}

impl Distance {
	/// Whether a path exists.
	pub fn is_reachable(self) -> bool {
		matches!(self, Distance::Finite(_))
	}
}

impl fmt::Display for Distance {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Distance::Finite(d) => write!(f, "{d}"),
			Distance::Unreachable => f.write_str("∞"),
		}
	}
}

/// Distances from one vertex to each landmark, in landmark order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DistanceVector(Vec<Distance>);

impl DistanceVector {
	/// Coordinates in landmark order.
	pub fn as_slice(&self) -> &[Distance] {
		&self.0
	}

	/// Number of coordinates, one per landmark.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// True when there are no landmarks.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<Distance>> for DistanceVector {
	fn from(distances: Vec<Distance>) -> Self {
		Self(distances)
	}
}

impl fmt::Display for DistanceVector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("(")?;
		for (i, d) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{d}")?;
		}
		f.write_str(")")
	}
}

/// Distance vectors of every vertex for one landmark set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
	vectors: BTreeMap<VertexId, DistanceVector>,
	ambiguous: BTreeSet<VertexId>,
}

impl Resolution {
	/// Per-vertex vectors, in vertex order.
	pub fn vectors(&self) -> &BTreeMap<VertexId, DistanceVector> {
		&self.vectors
	}

	/// Vector of `id`, if it is a vertex.
	pub fn vector(&self, id: VertexId) -> Option<&DistanceVector> {
		self.vectors.get(&id)
	}

	/// Vertices whose vector is shared with at least one other vertex.
	pub fn ambiguous_vertices(&self) -> &BTreeSet<VertexId> {
		&self.ambiguous
	}

	/// True iff no two vertices share a distance vector.
	pub fn is_resolved(&self) -> bool {
		self.ambiguous.is_empty()
	}
}

/// Breadth-first distances from `source` to every vertex of `store`.
pub fn distances_from(
	store: &GraphStore,
	source: VertexId,
) -> Result<BTreeMap<VertexId, Distance>, GraphError> {
	if !store.has_vertex(source) {
		return Err(GraphError::NotFound(source));
	}
	Ok(bfs(store, source))
}

/// Distance vectors for every vertex with respect to `landmarks`.
///
/// Fails if any landmark is not a vertex of `store`.
pub fn recompute(store: &GraphStore, landmarks: &[VertexId]) -> Result<Resolution, GraphError> {
	if let Some(&missing) = landmarks.iter().find(|&&w| !store.has_vertex(w)) {
		return Err(GraphError::NotFound(missing));
	}
	Ok(resolve_live(store, landmarks))
}

/// [`recompute`] for landmarks already known to be live.
pub(crate) fn resolve_live(store: &GraphStore, landmarks: &[VertexId]) -> Resolution {
	let per_landmark: Vec<_> = landmarks.iter().map(|&w| bfs(store, w)).collect();

	let vectors: BTreeMap<_, _> = store
		.vertices()
		.map(|x| {
			let vector = per_landmark
				.iter()
				.map(|distances| distances.get(&x).copied().unwrap_or(Distance::Unreachable))
				.collect::<Vec<_>>();
			(x, DistanceVector::from(vector))
		})
		.collect();

	let mut owners: HashMap<&DistanceVector, Vec<VertexId>> = HashMap::new();
	for (&x, vector) in &vectors {
		owners.entry(vector).or_default().push(x);
	}
	let ambiguous = owners
		.into_values()
		.filter(|group| group.len() > 1)
		.flatten()
		.collect();

	Resolution { vectors, ambiguous }
}

fn bfs(store: &GraphStore, source: VertexId) -> BTreeMap<VertexId, Distance> {
	let mut distances: BTreeMap<_, _> = store
		.vertices()
		.map(|x| (x, Distance::Unreachable))
		.collect();
	let mut queue = VecDeque::new();
	queue.push_back((source, 0u32));

	while let Some((current, depth)) = queue.pop_front() {
		let Some(slot) = distances.get_mut(&current) else {
			continue;
		};
		if slot.is_reachable() {
			continue;
		}
		*slot = Distance::Finite(depth);
		let Ok(neighbors) = store.neighbors(current) else {
			continue;
		};
		for &next in neighbors {
			if distances.get(&next) == Some(&Distance::Unreachable) {
				queue.push_back((next, depth + 1));
			}
		}
	}
	distances
}
