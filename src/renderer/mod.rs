//! Rendering interface
//!
//! The simulation is drawn by an external renderer. This module only supplies
//! geometry and colors: a draw list per frame and its triangulation.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{DrawCommand, TextAlign, build_scene};
pub use shapes::tessellate;
pub use vertex::{Color, Vertex};
