use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use super::engine::{self, DistanceVector, Resolution};
use super::error::GraphError;
use super::landmarks::LandmarkSet;
use super::store::{GraphStore, VertexId};

/// One editing session: the graph, its landmark set and their distance vectors.
///
/// Every successful mutation recomputes the resolution from scratch, so the
/// outbound queries always describe the current graph and landmarks.
#[derive(Clone, Debug, Default)]
pub struct Session {
	store: GraphStore,
	landmarks: LandmarkSet,
	resolution: Resolution,
}

impl Session {
	/// An empty session.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an isolated vertex.
	pub fn on_vertex_created(&mut self) -> VertexId {
		let id = self.store.add_vertex();
		debug!("vertex {id} created");
		self.refresh();
		id
	}

	/// Deletes a vertex, its incident edges and its landmark membership.
	pub fn on_vertex_deleted(&mut self, id: VertexId) -> Result<(), GraphError> {
		self.store.remove_vertex(id)?;
		let was_landmark = self.landmarks.remove(id);
		debug!("vertex {id} deleted (landmark: {was_landmark})");
		self.refresh();
		Ok(())
	}

	/// Connects `u` and `v`; an existing edge is left as is.
	pub fn on_edge_created(&mut self, u: VertexId, v: VertexId) -> Result<(), GraphError> {
		if self.store.add_edge(u, v)? {
			debug!("edge {u}-{v} created");
			self.refresh();
		}
		Ok(())
	}

	/// Disconnects `u` and `v`; a missing edge is ignored.
	pub fn on_edge_deleted(&mut self, u: VertexId, v: VertexId) -> Result<(), GraphError> {
		if self.store.remove_edge(u, v)? {
			debug!("edge {u}-{v} deleted");
			self.refresh();
		}
		Ok(())
	}

	/// Adds `id` to the landmark set, or removes it if already there.
	pub fn on_landmark_toggled(&mut self, id: VertexId) -> Result<(), GraphError> {
		if !self.store.has_vertex(id) {
			return Err(GraphError::NotFound(id));
		}
		let now_landmark = self.landmarks.toggle(id);
		debug!("vertex {id} landmark: {now_landmark}");
		self.refresh();
		Ok(())
	}

	/// Distance vector of every vertex, in vertex order.
	pub fn current_distance_vectors(&self) -> &BTreeMap<VertexId, DistanceVector> {
		self.resolution.vectors()
	}

	/// Whether the landmarks tell every vertex apart.
	pub fn is_resolved(&self) -> bool {
		self.resolution.is_resolved()
	}

	/// Landmarks in insertion order.
	pub fn current_landmark_set(&self) -> &[VertexId] {
		self.landmarks.as_slice()
	}

	/// Whether `id` is currently a landmark.
	pub fn is_landmark(&self, id: VertexId) -> bool {
		self.landmarks.contains(id)
	}

	/// Vertices sharing their distance vector with another vertex.
	pub fn ambiguous_vertices(&self) -> &BTreeSet<VertexId> {
		self.resolution.ambiguous_vertices()
	}

	/// The latest recomputation.
	pub fn resolution(&self) -> &Resolution {
		&self.resolution
	}

	/// Read-only view of the graph.
	pub fn store(&self) -> &GraphStore {
		&self.store
	}

	fn refresh(&mut self) {
		self.resolution = engine::resolve_live(&self.store, self.landmarks.as_slice());
		debug!(
			"recomputed {} vectors over {} landmarks, resolved: {}",
			self.resolution.vectors().len(),
			self.landmarks.len(),
			self.resolution.is_resolved()
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::Distance;

	fn session_with(n: usize) -> (Session, Vec<VertexId>) {
		let mut session = Session::new();
		let ids = (0..n).map(|_| session.on_vertex_created()).collect();
		(session, ids)
	}

	#[test]
	fn vectors_track_every_mutation() {
		let (mut session, ids) = session_with(2);
		assert!(!session.is_resolved());

		session.on_landmark_toggled(ids[0]).unwrap();
		assert_eq!(
			session.current_distance_vectors()[&ids[1]].as_slice(),
			&[Distance::Unreachable]
		);

		session.on_edge_created(ids[0], ids[1]).unwrap();
		assert_eq!(
			session.current_distance_vectors()[&ids[1]].as_slice(),
			&[Distance::Finite(1)]
		);

		let late = session.on_vertex_created();
		assert_eq!(
			session.current_distance_vectors()[&late].as_slice(),
			&[Distance::Unreachable]
		);
		assert!(session.is_resolved());
	}

	#[test]
	fn deleting_a_landmark_cascades() {
		let (mut session, ids) = session_with(3);
		session.on_edge_created(ids[0], ids[1]).unwrap();
		session.on_edge_created(ids[0], ids[2]).unwrap();
		session.on_landmark_toggled(ids[1]).unwrap();
		session.on_landmark_toggled(ids[0]).unwrap();

		session.on_vertex_deleted(ids[0]).unwrap();
		assert_eq!(session.current_landmark_set(), &[ids[1]]);
		assert!(!session.store().has_vertex(ids[0]));
		assert_eq!(session.store().edge_count(), 0);
		assert_eq!(session.current_distance_vectors().len(), 2);
		assert!(session.current_distance_vectors().values().all(|v| v.len() == 1));
	}

	#[test]
	fn failed_operations_leave_state_alone() {
		let (mut session, ids) = session_with(2);
		session.on_landmark_toggled(ids[0]).unwrap();
		let before = session.resolution().clone();
		let ghost = VertexId::new(77);

		assert_eq!(session.on_vertex_deleted(ghost), Err(GraphError::NotFound(ghost)));
		assert_eq!(session.on_edge_created(ids[0], ids[0]), Err(GraphError::InvalidEdge(ids[0])));
		assert_eq!(session.on_edge_created(ids[0], ghost), Err(GraphError::NotFound(ghost)));
		assert_eq!(session.on_edge_deleted(ghost, ids[1]), Err(GraphError::NotFound(ghost)));
		assert_eq!(session.on_landmark_toggled(ghost), Err(GraphError::NotFound(ghost)));

		assert_eq!(session.resolution(), &before);
		assert_eq!(session.current_landmark_set(), &[ids[0]]);
		assert_eq!(session.store().edge_count(), 0);
	}

	#[test]
	fn redundant_edge_operations_are_accepted() {
		let (mut session, ids) = session_with(2);
		session.on_edge_deleted(ids[0], ids[1]).unwrap();
		session.on_edge_created(ids[0], ids[1]).unwrap();
		session.on_edge_created(ids[1], ids[0]).unwrap();
		assert_eq!(session.store().edge_count(), 1);
	}

	#[test]
	fn toggling_twice_restores_the_landmark_set() {
		let (mut session, ids) = session_with(3);
		session.on_landmark_toggled(ids[2]).unwrap();
		session.on_landmark_toggled(ids[0]).unwrap();
		session.on_landmark_toggled(ids[2]).unwrap();
		assert_eq!(session.current_landmark_set(), &[ids[0]]);
		assert!(session.is_landmark(ids[0]));
		assert!(!session.is_landmark(ids[2]));
	}
}
