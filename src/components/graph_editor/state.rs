use std::collections::BTreeMap;

use log::debug;

use super::labels;
use super::types::{EditMode, Point, ResolutionSummary};
use crate::graph::{EdgeKey, GraphError, Session, VertexId};

pub const VERTEX_RADIUS: f64 = 20.0;
pub const EDGE_HIT_RADIUS: f64 = 6.0;
/// Pointer travel that turns a press on a vertex into a drag instead of a click.
pub const DRAG_THRESHOLD: f64 = 3.0;

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub vertex: Option<VertexId>,
	pub start: Point,
	pub vertex_start: Point,
	pub moved: bool,
}

pub struct EditorState {
	pub session: Session,
	pub mode: Option<EditMode>,
	/// First endpoint picked in [`EditMode::AddEdge`].
	pub selected: Option<VertexId>,
	pub drag: DragState,
	pub pointer: Option<Point>,
	pub width: f64,
	pub height: f64,
	positions: BTreeMap<VertexId, Point>,
	suppress_click: bool,
}

impl EditorState {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			session: Session::new(),
			mode: None,
			selected: None,
			drag: DragState::default(),
			pointer: None,
			width,
			height,
			positions: BTreeMap::new(),
			suppress_click: false,
		}
	}

	pub fn position(&self, id: VertexId) -> Option<Point> {
		self.positions.get(&id).copied()
	}

	pub fn positions(&self) -> impl Iterator<Item = (VertexId, Point)> + '_ {
		self.positions.iter().map(|(&id, &p)| (id, p))
	}

	/// Topmost vertex under `p`; later vertices are drawn above earlier ones.
	pub fn vertex_at(&self, p: Point) -> Option<VertexId> {
		self.positions
			.iter()
			.rev()
			.find(|(_, center)| p.distance(**center) <= VERTEX_RADIUS)
			.map(|(&id, _)| id)
	}

	/// Closest edge whose segment passes within [`EDGE_HIT_RADIUS`] of `p`.
	///
	/// Vertices are drawn above edges, so a point on a vertex never hits an edge.
	pub fn edge_at(&self, p: Point) -> Option<EdgeKey> {
		if self.vertex_at(p).is_some() {
			return None;
		}
		self.session
			.store()
			.edges()
			.filter_map(|edge| {
				let (u, v) = edge.endpoints();
				let d = p.distance_to_segment(self.position(u)?, self.position(v)?);
				(d <= EDGE_HIT_RADIUS).then_some((edge, d))
			})
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(edge, _)| edge)
	}

	pub fn set_mode(&mut self, mode: Option<EditMode>) {
		self.mode = mode;
		if mode != Some(EditMode::AddEdge) {
			self.selected = None;
		}
	}

	/// Applies the current mode to a click at `p`.
	pub fn click(&mut self, p: Point) {
		if std::mem::take(&mut self.suppress_click) {
			return;
		}
		let Some(mode) = self.mode else {
			return;
		};
		let result = match mode {
			EditMode::AddVertex => {
				let id = self.session.on_vertex_created();
				self.positions.insert(id, p);
				Ok(())
			}
			EditMode::DeleteVertex => match self.vertex_at(p) {
				Some(id) => self.delete_vertex(id),
				None => Ok(()),
			},
			EditMode::AddEdge => self.pick_endpoint(p),
			EditMode::DeleteEdge => match self.edge_at(p) {
				Some(edge) => {
					let (u, v) = edge.endpoints();
					self.session.on_edge_deleted(u, v)
				}
				None => Ok(()),
			},
			EditMode::Resolve => match self.vertex_at(p) {
				Some(id) => self.session.on_landmark_toggled(id),
				None => Ok(()),
			},
		};
		if let Err(err) = result {
			debug!("ignored {mode:?} click: {err}");
		}
	}

	pub fn begin_drag(&mut self, p: Point) {
		let Some(id) = self.vertex_at(p) else {
			return;
		};
		let Some(vertex_start) = self.position(id) else {
			return;
		};
		self.drag = DragState {
			vertex: Some(id),
			start: p,
			vertex_start,
			moved: false,
		};
	}

	pub fn drag_to(&mut self, p: Point) {
		self.pointer = Some(p);
		let Some(id) = self.drag.vertex else {
			return;
		};
		if !self.drag.moved && p.distance(self.drag.start) < DRAG_THRESHOLD {
			return;
		}
		self.drag.moved = true;
		let target = Point::new(
			self.drag.vertex_start.x + (p.x - self.drag.start.x),
			self.drag.vertex_start.y + (p.y - self.drag.start.y),
		);
		if let Some(center) = self.positions.get_mut(&id) {
			*center = target;
		}
	}

	pub fn end_drag(&mut self) {
		self.suppress_click = self.drag.moved;
		self.drag = DragState::default();
	}

	pub fn leave(&mut self) {
		self.drag = DragState::default();
		self.suppress_click = false;
		self.pointer = None;
	}

	pub fn summary(&self) -> ResolutionSummary {
		let landmarks = labels::landmark_set_label(self.session.current_landmark_set());
		ResolutionSummary {
			visible: landmarks.is_some(),
			landmarks: landmarks.unwrap_or_default(),
			resolved: self.session.is_resolved(),
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	fn delete_vertex(&mut self, id: VertexId) -> Result<(), GraphError> {
		self.session.on_vertex_deleted(id)?;
		self.positions.remove(&id);
		if self.selected == Some(id) {
			self.selected = None;
		}
		Ok(())
	}

	fn pick_endpoint(&mut self, p: Point) -> Result<(), GraphError> {
		match (self.selected.take(), self.vertex_at(p)) {
			(None, Some(id)) => {
				self.selected = Some(id);
				Ok(())
			}
			(Some(first), Some(second)) if first != second => {
				self.session.on_edge_created(first, second)
			}
			// same vertex again, or empty canvas: cancel
			_ => Ok(()),
		}
	}
}
