//! Drawing for calendar strips
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes and styling
//! - `geometry`: Angle math, arcs and annular sectors
//! - `shapes`: Drawable primitives
//! - `month`: One month strip as primitives
//! - `svg`: SVG generation

pub mod defaults;
pub mod geometry;
pub mod month;
pub mod shapes;
pub mod svg;

pub use geometry::{
    Arc, DimensionalArc, build_arc, build_dimensional_arc, point_on_circle, to_radian,
};
pub use month::month_geometry;
pub use shapes::{DrawContext, Drawable, Primitive};
