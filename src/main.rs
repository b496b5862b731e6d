use leptos::prelude::*;
use resolving_set_canvas::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App)
}
