pub mod draw;
pub mod geometry;
pub mod logging;
pub mod render;
pub mod result;
pub mod types;
pub mod window;

pub use geometry::{AnchorPoint, Box3, Rect};
