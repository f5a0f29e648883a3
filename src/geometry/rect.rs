use crate::geometry::anchor::AnchorPoint;
use crate::types::{Float, Point, Size, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::{BitAnd, BitOr};

/// An immutable axis aligned rectangle.
///
/// All eight attributes are stored and kept consistent by the named constructors
/// ([`Rect::lrbt`], [`Rect::lbwh`], [`Rect::xywh`], [`Rect::xyrr`], [`Rect::viewport`]).
/// Every operation returns a new rectangle. Rectangles cannot rotate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Lrbt", into = "Lrbt")]
pub struct Rect {
    left: Float,
    right: Float,
    bottom: Float,
    top: Float,
    width: Float,
    height: Float,
    x: Float,
    y: Float,
}

/// Corner form of a [`Rect`], used as its serialized representation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lrbt {
    pub left: Float,
    pub right: Float,
    pub bottom: Float,
    pub top: Float,
}

impl From<Lrbt> for Rect {
    fn from(value: Lrbt) -> Self {
        Rect::lrbt(value.left, value.right, value.bottom, value.top)
    }
}

impl From<Rect> for Lrbt {
    fn from(rect: Rect) -> Self {
        Lrbt {
            left: rect.left,
            right: rect.right,
            bottom: rect.bottom,
            top: rect.top,
        }
    }
}

// Vertical extent used by the center based constructors
#[cfg(not(feature = "legacy-center-extents"))]
fn center_vertical_extent(_width: Float, height: Float) -> Float {
    height
}

#[cfg(feature = "legacy-center-extents")]
fn center_vertical_extent(width: Float, _height: Float) -> Float {
    width
}

impl Rect {
    pub fn lrbt(left: Float, right: Float, bottom: Float, top: Float) -> Self {
        let width = right - left;
        let height = top - bottom;
        Self {
            left,
            right,
            bottom,
            top,
            width,
            height,
            x: left + width / 2.0,
            y: bottom + height / 2.0,
        }
    }

    pub fn lbwh(left: Float, bottom: Float, width: Float, height: Float) -> Self {
        Self {
            left,
            right: left + width,
            bottom,
            top: bottom + height,
            width,
            height,
            x: left + width / 2.0,
            y: bottom + height / 2.0,
        }
    }

    pub fn xywh(x: Float, y: Float, width: Float, height: Float) -> Self {
        let vertical = center_vertical_extent(width, height);
        Self {
            left: x - width / 2.0,
            right: x + width / 2.0,
            bottom: y - vertical / 2.0,
            top: y + vertical / 2.0,
            width,
            height,
            x,
            y,
        }
    }

    pub fn xyrr(x: Float, y: Float, half_width: Float, half_height: Float) -> Self {
        let vertical = center_vertical_extent(half_width, half_height);
        Self {
            left: x - half_width,
            right: x + half_width,
            bottom: y - vertical,
            top: y + vertical,
            width: half_width * 2.0,
            height: half_height * 2.0,
            x,
            y,
        }
    }

    /// Integer flavoured variant of [`Rect::xywh`], centered on `(x, y)`.
    pub fn viewport(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::xywh(x as Float, y as Float, width as Float, height as Float)
    }

    pub fn left(&self) -> Float {
        self.left
    }

    pub fn right(&self) -> Float {
        self.right
    }

    pub fn bottom(&self) -> Float {
        self.bottom
    }

    pub fn top(&self) -> Float {
        self.top
    }

    pub fn width(&self) -> Float {
        self.width
    }

    pub fn height(&self) -> Float {
        self.height
    }

    pub fn x(&self) -> Float {
        self.x
    }

    pub fn y(&self) -> Float {
        self.y
    }

    pub fn center_x(&self) -> Float {
        self.x
    }

    pub fn center_y(&self) -> Float {
        self.y
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left, self.bottom)
    }

    pub fn position(&self) -> Point {
        self.bottom_left()
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right, self.top)
    }

    pub fn bottom_center(&self) -> Point {
        Point::new(self.x, self.bottom)
    }

    pub fn right_center(&self) -> Point {
        Point::new(self.right, self.y)
    }

    pub fn top_center(&self) -> Point {
        Point::new(self.x, self.top)
    }

    pub fn left_center(&self) -> Point {
        Point::new(self.left, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn area(&self) -> Float {
        self.width * self.height
    }

    pub fn to_lrbt(&self) -> (Float, Float, Float, Float) {
        (self.left, self.right, self.bottom, self.top)
    }

    pub fn to_lbwh(&self) -> (Float, Float, Float, Float) {
        (self.left, self.bottom, self.width, self.height)
    }

    pub fn to_xywh(&self) -> (Float, Float, Float, Float) {
        (self.x, self.y, self.width, self.height)
    }

    pub fn to_xyrr(&self) -> (Float, Float, Float, Float) {
        (self.x, self.y, self.width / 2.0, self.height / 2.0)
    }

    /// Truncates towards zero.
    pub fn to_viewport(&self) -> (i32, i32, i32, i32) {
        (
            self.x as i32,
            self.y as i32,
            self.width as i32,
            self.height as i32,
        )
    }

    /// Corners in the order bottom-left, top-left, top-right, bottom-right.
    pub fn to_points(&self) -> [Point; 4] {
        [
            self.bottom_left(),
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
        ]
    }

    /// Centers a rectangle of the same size on `position`.
    pub fn at_position(&self, position: Point) -> Rect {
        Rect::lbwh(
            position.x - self.width / 2.0,
            position.y - self.height / 2.0,
            self.width,
            self.height,
        )
    }

    pub fn move_by(&self, dx: Float, dy: Float) -> Rect {
        Rect::lbwh(self.left + dx, self.bottom + dy, self.width, self.height)
    }

    fn anchor_position(&self, anchor: Vec2) -> (Float, Float) {
        (
            self.left + anchor.x * self.width,
            self.bottom + anchor.y * self.height,
        )
    }

    /// Changes the size while keeping the `anchor` (see [`AnchorPoint`]) in place.
    pub fn resize(&self, new_size: Size, anchor: Vec2) -> Rect {
        let (anchor_x, anchor_y) = self.anchor_position(anchor);
        let ratio_x = new_size.width / self.width;
        let ratio_y = new_size.height / self.height;
        Rect::lrbt(
            anchor_x + (self.left - anchor_x) * ratio_x,
            anchor_x + (self.right - anchor_x) * ratio_x,
            anchor_y + (self.bottom - anchor_y) * ratio_y,
            anchor_y + (self.top - anchor_y) * ratio_y,
        )
    }

    pub fn resize_centered(&self, new_size: Size) -> Rect {
        self.resize(new_size, AnchorPoint::CENTER)
    }

    /// Scales uniformly by `factor` while keeping the `anchor` in place.
    pub fn scale(&self, factor: Float, anchor: Vec2) -> Rect {
        let (anchor_x, anchor_y) = self.anchor_position(anchor);
        Rect::lrbt(
            anchor_x + (self.left - anchor_x) * factor,
            anchor_x + (self.right - anchor_x) * factor,
            anchor_y + (self.bottom - anchor_y) * factor,
            anchor_y + (self.top - anchor_y) * factor,
        )
    }

    pub fn scale_centered(&self, factor: Float) -> Rect {
        self.scale(factor, AnchorPoint::CENTER)
    }

    pub fn align_top(&self, value: Float) -> Rect {
        self.move_by(0.0, value - self.top)
    }

    pub fn align_bottom(&self, value: Float) -> Rect {
        self.move_by(0.0, value - self.bottom)
    }

    pub fn align_left(&self, value: Float) -> Rect {
        self.move_by(value - self.left, 0.0)
    }

    pub fn align_right(&self, value: Float) -> Rect {
        self.move_by(value - self.right, 0.0)
    }

    pub fn align_center_x(&self, value: Float) -> Rect {
        self.move_by(value - self.x, 0.0)
    }

    pub fn align_center_y(&self, value: Float) -> Rect {
        self.move_by(0.0, value - self.y)
    }

    pub fn align_center(&self, value: Point) -> Rect {
        self.move_by(value.x - self.x, value.y - self.y)
    }

    /// Grows the rectangle to at least the given size, keeping the bottom-left corner.
    pub fn min_size(&self, width: Option<Float>, height: Option<Float>) -> Rect {
        Rect::lbwh(
            self.left,
            self.bottom,
            self.width.max(width.unwrap_or(0.0)),
            self.height.max(height.unwrap_or(0.0)),
        )
    }

    /// Shrinks the rectangle to at most the given size, keeping the bottom-left corner.
    pub fn max_size(&self, width: Option<Float>, height: Option<Float>) -> Rect {
        Rect::lbwh(
            self.left,
            self.bottom,
            self.width.min(width.unwrap_or(Float::INFINITY)),
            self.height.min(height.unwrap_or(Float::INFINITY)),
        )
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::lrbt(
            self.left.min(other.left),
            self.right.max(other.right),
            self.bottom.min(other.bottom),
            self.top.max(other.top),
        )
    }

    /// Returns true if the rectangles overlap or touch.
    ///
    /// This is the same test [`Rect::intersect`] uses, so `intersect` returns `None`
    /// exactly when this returns false.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right >= other.left
            && other.right >= self.left
            && self.top >= other.bottom
            && other.top >= self.bottom
    }

    /// Overlapping region of both rectangles, `None` if they do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Rect::lrbt(
            self.left.max(other.left),
            self.right.min(other.right),
            self.bottom.max(other.bottom),
            self.top.min(other.top),
        ))
    }

    /// Points on an edge are not contained.
    pub fn contains_point(&self, point: Point) -> bool {
        self.left < point.x && point.x < self.right && self.bottom < point.y && point.y < self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

impl BitOr for Rect {
    type Output = Rect;

    fn bitor(self, rhs: Rect) -> Rect {
        self.union(&rhs)
    }
}

impl BitAnd for Rect {
    type Output = Option<Rect>;

    fn bitand(self, rhs: Rect) -> Option<Rect> {
        self.intersect(&rhs)
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<Rect LRBT({}, {}, {}, {}) XYWH({}, {}, {}, {})>",
            self.left, self.right, self.bottom, self.top, self.x, self.y, self.width, self.height
        )
    }
}
