use crate::graph::{DistanceVector, VertexId};

const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

pub fn subscript(n: u32) -> String {
	n.to_string()
		.chars()
		.filter_map(|c| c.to_digit(10))
		.map(|d| SUBSCRIPT_DIGITS[d as usize])
		.collect()
}

/// `v₁₂` for vertex 12.
pub fn vertex_label(id: VertexId) -> String {
	format!("v{}", subscript(id.get()))
}

/// Nothing to show while there are no landmarks.
pub fn vector_label(vector: &DistanceVector) -> Option<String> {
	(!vector.is_empty()).then(|| vector.to_string())
}

/// `W = {v₁, v₃}`, or `None` for an empty set.
pub fn landmark_set_label(landmarks: &[VertexId]) -> Option<String> {
	if landmarks.is_empty() {
		return None;
	}
	let names: Vec<_> = landmarks.iter().map(|&w| vertex_label(w)).collect();
	Some(format!("W = {{{}}}", names.join(", ")))
}
