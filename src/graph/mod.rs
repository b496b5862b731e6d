//! Graph model and distance-vector resolution.
//!
//! Everything in here is plain data and synchronous computation; the canvas
//! component drives it through [`Session`].

#![deny(missing_docs)]

mod engine;
mod error;
mod landmarks;
mod session;
mod store;

pub use engine::{Distance, DistanceVector, Resolution, distances_from, recompute};
pub use error::GraphError;
pub use landmarks::LandmarkSet;
pub use session::Session;
pub use store::{EdgeKey, GraphStore, VertexId};
