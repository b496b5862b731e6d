use super::store::VertexId;

/// Ordered set of landmark vertices (the candidate resolving set `W`).
///
/// Insertion order is the coordinate order of every distance vector. The set
/// does not know which vertices exist; [`Session`](super::Session) only lets
/// live vertices in and removes them when they are deleted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LandmarkSet {
	order: Vec<VertexId>,
}

impl LandmarkSet {
	/// An empty landmark set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Flips membership of `id` and returns whether it is now a landmark.
	pub fn toggle(&mut self, id: VertexId) -> bool {
		if self.remove(id) {
			false
		} else {
			self.order.push(id);
			true
		}
	}

	/// Removes `id`, keeping the order of the remaining landmarks.
	pub fn remove(&mut self, id: VertexId) -> bool {
		match self.order.iter().position(|&w| w == id) {
			Some(index) => {
				self.order.remove(index);
				true
			}
			None => false,
		}
	}

	/// Whether `id` is a landmark.
	pub fn contains(&self, id: VertexId) -> bool {
		self.order.contains(&id)
	}

	/// Landmarks in insertion order.
	pub fn as_slice(&self) -> &[VertexId] {
		&self.order
	}

	/// Number of landmarks.
	pub fn len(&self) -> usize {
		self.order.len()
	}

	/// True when no vertex is a landmark.
	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}
}
