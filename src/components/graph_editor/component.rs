use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::EditorState;
use super::types::{EditMode, Point, ResolutionSummary};

type SharedState = Rc<RefCell<Option<EditorState>>>;
type SharedContext = Rc<RefCell<Option<CanvasRenderingContext2d>>>;

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn pointer_position(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<Point> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some(Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

fn redraw(state: &SharedState, ctx: &SharedContext) {
	if let (Some(s), Some(ctx)) = (&*state.borrow(), &*ctx.borrow()) {
		render::render(s, ctx);
	}
}

/// Canvas for building a graph and checking whether a landmark set resolves it.
#[component]
pub fn GraphEditorCanvas(
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let context: SharedContext = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let mode = RwSignal::new(None::<EditMode>);
	let summary = RwSignal::new(ResolutionSummary::default());
	let (state_init, context_init, resize_cb_init) =
		(state.clone(), context.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("no window, graph editor disabled");
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window).unwrap_or((800.0, 600.0))
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			error!("2d canvas context unavailable");
			return;
		};
		*context_init.borrow_mut() = Some(ctx);
		*state_init.borrow_mut() = Some(EditorState::new(w, h));
		info!("graph editor ready at {w}x{h}");

		if fullscreen {
			let (state_resize, context_resize, canvas_resize) =
				(state_init.clone(), context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
				redraw(&state_resize, &context_resize);
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		redraw(&state_init, &context_init);
	});

	let (state_mode, context_mode) = (state.clone(), context.clone());
	Effect::new(move |_| {
		let next = mode.get();
		if let Some(ref mut s) = *state_mode.borrow_mut() {
			s.set_mode(next);
		}
		redraw(&state_mode, &context_mode);
	});

	let (state_ck, context_ck) = (state.clone(), context.clone());
	let on_click = move |ev: MouseEvent| {
		let Some(p) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		let next = state_ck.borrow_mut().as_mut().map(|s| {
			s.click(p);
			s.summary()
		});
		if let Some(next) = next {
			summary.set(next);
		}
		redraw(&state_ck, &context_ck);
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(p) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.begin_drag(p);
		}
	};

	let (state_mm, context_mm) = (state.clone(), context.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let Some(p) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.drag_to(p);
		}
		redraw(&state_mm, &context_mm);
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.end_drag();
		}
	};

	let (state_ml, context_ml) = (state.clone(), context.clone());
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.leave();
		}
		redraw(&state_ml, &context_ml);
	};

	let toolbar = EditMode::ALL
		.into_iter()
		.map(|target| {
			view! {
				<button
					class="mode-button"
					class:active=move || mode.get() == Some(target)
					on:click=move |_| mode.update(|m| *m = EditMode::toggled(*m, target))
				>
					{target.label()}
				</button>
			}
		})
		.collect_view();

	view! {
		<div class="graph-editor">
			<div class="toolbar">{toolbar}</div>
			<div
				class="resolving-set-display"
				class:resolved=move || summary.with(|s| s.resolved)
				style:visibility=move || {
					if summary.with(|s| s.visible) { "visible" } else { "hidden" }
				}
			>
				{move || summary.with(|s| s.landmarks.clone())}
			</div>
			<canvas
				node_ref=canvas_ref
				class="graph-editor-canvas"
				on:click=on_click
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				style="display: block; cursor: crosshair;"
			/>
		</div>
	}
}
