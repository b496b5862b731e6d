/// What a click on the canvas does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditMode {
	AddVertex,
	DeleteVertex,
	AddEdge,
	DeleteEdge,
	Resolve,
}

impl EditMode {
	pub const ALL: [EditMode; 5] = [
		EditMode::AddVertex,
		EditMode::DeleteVertex,
		EditMode::AddEdge,
		EditMode::DeleteEdge,
		EditMode::Resolve,
	];

	pub fn label(self) -> &'static str {
		match self {
			EditMode::AddVertex => "Add vertex",
			EditMode::DeleteVertex => "Delete vertex",
			EditMode::AddEdge => "Add edge",
			EditMode::DeleteEdge => "Delete edge",
			EditMode::Resolve => "Resolve",
		}
	}

	/// Pressing the active mode's button switches editing off.
	pub fn toggled(current: Option<EditMode>, pressed: EditMode) -> Option<EditMode> {
		if current == Some(pressed) {
			None
		} else {
			Some(pressed)
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Point) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}

	/// Distance from `self` to the segment `a`-`b`.
	pub fn distance_to_segment(self, a: Point, b: Point) -> f64 {
		let (dx, dy) = (b.x - a.x, b.y - a.y);
		let len_sq = dx * dx + dy * dy;
		if len_sq < f64::EPSILON {
			return self.distance(a);
		}
		let t = (((self.x - a.x) * dx + (self.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
		self.distance(Point::new(a.x + t * dx, a.y + t * dy))
	}
}

/// What the resolving-set banner shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolutionSummary {
	pub landmarks: String,
	pub resolved: bool,
	pub visible: bool,
}
