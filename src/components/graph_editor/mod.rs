mod component;
mod labels;
mod render;
mod state;
mod types;

pub use component::GraphEditorCanvas;
