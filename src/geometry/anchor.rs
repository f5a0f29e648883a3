use crate::types::Vec2;

/// Normalized reference points inside a rectangle, measured from its bottom-left corner.
///
/// `(0.0, 0.0)` is the bottom-left corner and `(1.0, 1.0)` the top-right one.
pub struct AnchorPoint;

impl AnchorPoint {
    pub const BOTTOM_LEFT: Vec2 = Vec2::new(0.0, 0.0);
    pub const BOTTOM_CENTER: Vec2 = Vec2::new(0.5, 0.0);
    pub const BOTTOM_RIGHT: Vec2 = Vec2::new(1.0, 0.0);
    pub const CENTER_LEFT: Vec2 = Vec2::new(0.0, 0.5);
    pub const CENTER: Vec2 = Vec2::new(0.5, 0.5);
    pub const CENTER_RIGHT: Vec2 = Vec2::new(1.0, 0.5);
    pub const TOP_LEFT: Vec2 = Vec2::new(0.0, 1.0);
    pub const TOP_CENTER: Vec2 = Vec2::new(0.5, 1.0);
    pub const TOP_RIGHT: Vec2 = Vec2::new(1.0, 1.0);
}
