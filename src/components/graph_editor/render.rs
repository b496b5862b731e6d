use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::labels;
use super::state::{EditorState, VERTEX_RADIUS};
use super::types::{EditMode, Point};

const BACKGROUND: &str = "#fafafa";
const EDGE_COLOR: &str = "#555";
const VERTEX_FILL: &str = "#ffffff";
const VERTEX_STROKE: &str = "#333";
const LANDMARK_FILL: &str = "#ffd166";
const SELECTED_STROKE: &str = "#1f77b4";
const AMBIGUOUS_STROKE: &str = "#d62728";
const LABEL_OFFSET: (f64, f64) = (25.0, -10.0);

pub fn render(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_edges(state, ctx);
	draw_pending_edge(state, ctx);
	draw_vertices(state, ctx);
}

fn line(ctx: &CanvasRenderingContext2d, a: Point, b: Point) {
	ctx.begin_path();
	ctx.move_to(a.x, a.y);
	ctx.line_to(b.x, b.y);
	ctx.stroke();
}

fn draw_edges(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(EDGE_COLOR);
	ctx.set_line_width(2.0);
	for edge in state.session.store().edges() {
		let (u, v) = edge.endpoints();
		if let (Some(a), Some(b)) = (state.position(u), state.position(v)) {
			line(ctx, a, b);
		}
	}
}

fn draw_pending_edge(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	if state.mode != Some(EditMode::AddEdge) {
		return;
	}
	let (Some(from), Some(to)) = (state.selected.and_then(|id| state.position(id)), state.pointer)
	else {
		return;
	};
	ctx.set_stroke_style_str(SELECTED_STROKE);
	ctx.set_line_width(1.5);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(6.0),
		&JsValue::from_f64(4.0),
	));
	line(ctx, from, to);
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_vertices(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	let session = &state.session;
	let show_vectors = !session.current_landmark_set().is_empty();

	ctx.set_text_baseline("middle");
	for (id, p) in state.positions() {
		let stroke = if state.selected == Some(id) {
			SELECTED_STROKE
		} else if session.ambiguous_vertices().contains(&id) && show_vectors {
			AMBIGUOUS_STROKE
		} else {
			VERTEX_STROKE
		};

		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, VERTEX_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(if session.is_landmark(id) {
			LANDMARK_FILL
		} else {
			VERTEX_FILL
		});
		ctx.fill();
		ctx.set_stroke_style_str(stroke);
		ctx.set_line_width(2.0);
		ctx.stroke();

		ctx.set_fill_style_str(VERTEX_STROKE);
		ctx.set_font("14px sans-serif");
		ctx.set_text_align("center");
		let _ = ctx.fill_text(&labels::vertex_label(id), p.x, p.y);

		if !show_vectors {
			continue;
		}
		let label = session
			.current_distance_vectors()
			.get(&id)
			.and_then(labels::vector_label);
		if let Some(label) = label {
			ctx.set_font("12px monospace");
			ctx.set_text_align("left");
			let _ = ctx.fill_text(&label, p.x + LABEL_OFFSET.0, p.y + LABEL_OFFSET.1);
		}
	}
}
