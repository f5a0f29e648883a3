use crate::geometry::rect::Rect;
use crate::types::{Float, Point3, Size3};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::{BitAnd, BitOr};

/// An immutable axis aligned 3D box, the 3D partner of [`Rect`].
///
/// `near`/`far` extend `left`/`right`/`bottom`/`top` along the z axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Lrbtnf", into = "Lrbtnf")]
pub struct Box3 {
    left: Float,
    right: Float,
    bottom: Float,
    top: Float,
    near: Float,
    far: Float,
    width: Float,
    height: Float,
    depth: Float,
    x: Float,
    y: Float,
    z: Float,
}

/// Corner form of a [`Box3`], used as its serialized representation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lrbtnf {
    pub left: Float,
    pub right: Float,
    pub bottom: Float,
    pub top: Float,
    pub near: Float,
    pub far: Float,
}

impl From<Lrbtnf> for Box3 {
    fn from(value: Lrbtnf) -> Self {
        Box3::lrbtnf(
            value.left,
            value.right,
            value.bottom,
            value.top,
            value.near,
            value.far,
        )
    }
}

impl From<Box3> for Lrbtnf {
    fn from(value: Box3) -> Self {
        Lrbtnf {
            left: value.left,
            right: value.right,
            bottom: value.bottom,
            top: value.top,
            near: value.near,
            far: value.far,
        }
    }
}

impl Box3 {
    pub fn xyzwhd(x: Float, y: Float, z: Float, width: Float, height: Float, depth: Float) -> Self {
        let half_width = width / 2.0;
        let half_height = height / 2.0;
        let half_depth = depth / 2.0;
        Self {
            left: x - half_width,
            right: x + half_width,
            bottom: y - half_height,
            top: y + half_height,
            near: z - half_depth,
            far: z + half_depth,
            width,
            height,
            depth,
            x,
            y,
            z,
        }
    }

    pub fn lrbtnf(left: Float, right: Float, bottom: Float, top: Float, near: Float, far: Float) -> Self {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;
        Self {
            left,
            right,
            bottom,
            top,
            near,
            far,
            width,
            height,
            depth,
            x: left + width / 2.0,
            y: bottom + height / 2.0,
            z: near + depth / 2.0,
        }
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

    pub fn near(&self) -> Float {
        self.near
    }

    pub fn far(&self) -> Float {
        self.far
    }

    pub fn width(&self) -> Float {
        self.width
    }

    pub fn height(&self) -> Float {
        self.height
    }

    pub fn depth(&self) -> Float {
        self.depth
    }

    pub fn x(&self) -> Float {
        self.x
    }

    pub fn y(&self) -> Float {
        self.y
    }

    pub fn z(&self) -> Float {
        self.z
    }

    pub fn center_x(&self) -> Float {
        self.x
    }

    pub fn center_y(&self) -> Float {
        self.y
    }

    pub fn center_z(&self) -> Float {
        self.z
    }

    pub fn center(&self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn size(&self) -> Size3 {
        Size3::new(self.width, self.height, self.depth)
    }

    pub fn volume(&self) -> Float {
        self.width * self.height * self.depth
    }

    pub fn to_lrbtnf(&self) -> (Float, Float, Float, Float, Float, Float) {
        (self.left, self.right, self.bottom, self.top, self.near, self.far)
    }

    pub fn to_xyzwhd(&self) -> (Float, Float, Float, Float, Float, Float) {
        (self.x, self.y, self.z, self.width, self.height, self.depth)
    }

    pub fn bottom_left_near(&self) -> Point3 {
        Point3::new(self.left, self.bottom, self.near)
    }

    pub fn bottom_left_far(&self) -> Point3 {
        Point3::new(self.left, self.bottom, self.far)
    }

    pub fn bottom_right_near(&self) -> Point3 {
        Point3::new(self.right, self.bottom, self.near)
    }

    pub fn bottom_right_far(&self) -> Point3 {
        Point3::new(self.right, self.bottom, self.far)
    }

    pub fn top_left_near(&self) -> Point3 {
        Point3::new(self.left, self.top, self.near)
    }

    pub fn top_left_far(&self) -> Point3 {
        Point3::new(self.left, self.top, self.far)
    }

    pub fn top_right_near(&self) -> Point3 {
        Point3::new(self.right, self.top, self.near)
    }

    pub fn top_right_far(&self) -> Point3 {
        Point3::new(self.right, self.top, self.far)
    }

    // Faces are projections onto their plane, so opposite faces share the same rect.

    pub fn near_face(&self) -> Rect {
        Rect::lbwh(self.left, self.bottom, self.width, self.height)
    }

    pub fn far_face(&self) -> Rect {
        Rect::lbwh(self.left, self.bottom, self.width, self.height)
    }

    pub fn left_face(&self) -> Rect {
        Rect::lbwh(self.near, self.bottom, self.depth, self.height)
    }

    pub fn right_face(&self) -> Rect {
        Rect::lbwh(self.near, self.bottom, self.depth, self.height)
    }

    pub fn top_face(&self) -> Rect {
        Rect::lbwh(self.left, self.near, self.width, self.depth)
    }

    pub fn bottom_face(&self) -> Rect {
        Rect::lbwh(self.left, self.near, self.width, self.depth)
    }

    pub fn near_face_center(&self) -> Point3 {
        Point3::new(self.x, self.y, self.near)
    }

    pub fn far_face_center(&self) -> Point3 {
        Point3::new(self.x, self.y, self.far)
    }

    pub fn left_face_center(&self) -> Point3 {
        Point3::new(self.left, self.y, self.z)
    }

    pub fn right_face_center(&self) -> Point3 {
        Point3::new(self.right, self.y, self.z)
    }

    pub fn top_face_center(&self) -> Point3 {
        Point3::new(self.x, self.top, self.z)
    }

    #[cfg(not(feature = "legacy-bottom-face-center"))]
    pub fn bottom_face_center(&self) -> Point3 {
        Point3::new(self.x, self.bottom, self.z)
    }

    #[cfg(feature = "legacy-bottom-face-center")]
    pub fn bottom_face_center(&self) -> Point3 {
        self.top_face_center()
    }

    pub fn at_position(&self, position: Point3) -> Box3 {
        Box3::xyzwhd(
            position.x,
            position.y,
            position.z,
            self.width,
            self.height,
            self.depth,
        )
    }

    pub fn move_by(&self, dx: Float, dy: Float, dz: Float) -> Box3 {
        Box3::xyzwhd(
            self.x + dx,
            self.y + dy,
            self.z + dz,
            self.width,
            self.height,
            self.depth,
        )
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Box3) -> Box3 {
        Box3::lrbtnf(
            self.left.min(other.left),
            self.right.max(other.right),
            self.bottom.min(other.bottom),
            self.top.max(other.top),
            self.near.min(other.near),
            self.far.max(other.far),
        )
    }

    /// Overlapping region of both boxes, `None` unless [`Box3::overlaps`] holds.
    pub fn intersection(&self, other: &Box3) -> Option<Box3> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Box3::lrbtnf(
            self.left.max(other.left),
            self.right.min(other.right),
            self.bottom.max(other.bottom),
            self.top.min(other.top),
            self.near.max(other.near),
            self.far.min(other.far),
        ))
    }

    /// Center distance test: on every axis half the summed extents must strictly exceed
    /// the distance between the centers. Touching boxes do not overlap.
    pub fn overlaps(&self, other: &Box3) -> bool {
        (other.width + self.width) / 2.0 > (self.x - other.x).abs()
            && (other.height + self.height) / 2.0 > (self.y - other.y).abs()
            && (other.depth + self.depth) / 2.0 > (self.z - other.z).abs()
    }

    /// Points on a face are contained.
    pub fn contains_point(&self, point: Point3) -> bool {
        (self.left..=self.right).contains(&point.x)
            && (self.bottom..=self.top).contains(&point.y)
            && (self.near..=self.far).contains(&point.z)
    }

    /// All eight corners: the near face counter-clockwise from bottom-left, then the far face.
    pub fn to_points(&self) -> [Point3; 8] {
        [
            self.bottom_left_near(),
            self.top_left_near(),
            self.top_right_near(),
            self.bottom_right_near(),
            self.bottom_left_far(),
            self.top_left_far(),
            self.top_right_far(),
            self.bottom_right_far(),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0 || self.depth == 0.0
    }
}

impl BitOr for Box3 {
    type Output = Box3;

    fn bitor(self, rhs: Box3) -> Box3 {
        self.union(&rhs)
    }
}

impl BitAnd for Box3 {
    type Output = Option<Box3>;

    fn bitand(self, rhs: Box3) -> Option<Box3> {
        self.intersection(&rhs)
    }
}

impl Display for Box3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<Box3 LRBTNF({}, {}, {}, {}, {}, {}) XYZWHD({}, {}, {}, {}, {}, {})>",
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
            self.x,
            self.y,
            self.z,
            self.width,
            self.height,
            self.depth
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::box3::Box3;
    use crate::types::{Point3, Size3};
    use assertables::assert_in_delta;
    use expect_test::expect;

    fn assert_consistent(value: &Box3) {
        assert_in_delta!(value.right() - value.left(), value.width(), 1e-4);
        assert_in_delta!(value.top() - value.bottom(), value.height(), 1e-4);
        assert_in_delta!(value.far() - value.near(), value.depth(), 1e-4);
        assert_in_delta!(value.near() + value.depth() / 2.0, value.z(), 1e-4);
    }

    #[test]
    fn xyzwhd_cube() {
        let cube = Box3::xyzwhd(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        assert_eq!(1000.0, cube.volume());
        assert_eq!(Point3::new(-5.0, -5.0, -5.0), cube.bottom_left_near());
        assert_eq!(Point3::new(5.0, 5.0, 5.0), cube.top_right_far());
        assert_eq!(Size3::new(10.0, 10.0, 10.0), cube.size());
        assert_eq!(Point3::new(0.0, 0.0, 0.0), cube.center());
        assert_consistent(&cube);
    }

    #[test]
    fn lrbtnf_derives_all_attributes() {
        let value = Box3::lrbtnf(1.0, 3.0, 2.0, 6.0, -4.0, 0.0);
        assert_eq!((2.0, 4.0, -2.0, 2.0, 4.0, 4.0), value.to_xyzwhd());
        assert_eq!((1.0, 3.0, 2.0, 6.0, -4.0, 0.0), value.to_lrbtnf());
        assert_eq!(32.0, value.volume());
        assert_consistent(&value);
        let (x, y, z, w, h, d) = value.to_xyzwhd();
        assert_eq!(value, Box3::xyzwhd(x, y, z, w, h, d));
    }

    #[test]
    fn corners_in_documented_order() {
        let value = Box3::lrbtnf(0.0, 1.0, 0.0, 2.0, 0.0, 3.0);
        assert_eq!(
            [
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(0.0, 2.0, 0.0),
                Point3::new(1.0, 2.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 0.0, 3.0),
                Point3::new(0.0, 2.0, 3.0),
                Point3::new(1.0, 2.0, 3.0),
                Point3::new(1.0, 0.0, 3.0),
            ],
            value.to_points()
        );
        assert_eq!(Point3::new(1.0, 0.0, 3.0), value.bottom_right_far());
        assert_eq!(Point3::new(0.0, 2.0, 3.0), value.top_left_far());
    }

    #[test]
    fn faces_are_plane_projections() {
        let value = Box3::lrbtnf(0.0, 1.0, 0.0, 2.0, 5.0, 8.0);
        assert_eq!((0.0, 0.0, 1.0, 2.0), value.near_face().to_lbwh());
        assert_eq!(value.near_face(), value.far_face());
        assert_eq!((5.0, 0.0, 3.0, 2.0), value.left_face().to_lbwh());
        assert_eq!(value.left_face(), value.right_face());
        assert_eq!((0.0, 5.0, 1.0, 3.0), value.top_face().to_lbwh());
        assert_eq!(value.top_face(), value.bottom_face());
    }

    #[test]
    fn face_centers() {
        let value = Box3::lrbtnf(0.0, 2.0, 0.0, 4.0, 0.0, 6.0);
        assert_eq!(Point3::new(1.0, 2.0, 0.0), value.near_face_center());
        assert_eq!(Point3::new(1.0, 2.0, 6.0), value.far_face_center());
        assert_eq!(Point3::new(0.0, 2.0, 3.0), value.left_face_center());
        assert_eq!(Point3::new(2.0, 2.0, 3.0), value.right_face_center());
        assert_eq!(Point3::new(1.0, 4.0, 3.0), value.top_face_center());
        #[cfg(not(feature = "legacy-bottom-face-center"))]
        assert_eq!(Point3::new(1.0, 0.0, 3.0), value.bottom_face_center());
        #[cfg(feature = "legacy-bottom-face-center")]
        assert_eq!(value.top_face_center(), value.bottom_face_center());
    }

    #[test]
    fn move_and_at_position() {
        let value = Box3::xyzwhd(0.0, 0.0, 0.0, 2.0, 2.0, 2.0);
        let moved = value.move_by(1.0, 2.0, 3.0);
        assert_eq!((0.0, 2.0, 1.0, 3.0, 2.0, 4.0), moved.to_lrbtnf());
        assert_eq!(value, moved.move_by(-1.0, -2.0, -3.0));
        let placed = value.at_position(Point3::new(10.0, 0.0, -10.0));
        assert_eq!(Point3::new(10.0, 0.0, -10.0), placed.center());
        assert_eq!(value.size(), placed.size());
    }

    #[test]
    fn union_and_intersection() {
        let a = Box3::lrbtnf(0.0, 4.0, 0.0, 4.0, 0.0, 4.0);
        let b = Box3::lrbtnf(2.0, 6.0, 1.0, 3.0, -2.0, 2.0);
        assert_eq!((0.0, 6.0, 0.0, 4.0, -2.0, 4.0), a.union(&b).to_lrbtnf());
        assert_eq!(a.union(&b), a | b);
        assert_eq!(a.union(&b), b.union(&a));
        let intersection = a.intersection(&b).unwrap();
        assert_eq!((2.0, 4.0, 1.0, 3.0, 0.0, 2.0), intersection.to_lrbtnf());
        assert_eq!(Some(intersection), b & a);
    }

    #[test]
    fn touching_boxes_do_not_overlap() {
        let a = Box3::lrbtnf(0.0, 2.0, 0.0, 2.0, 0.0, 2.0);
        let b = Box3::lrbtnf(2.0, 4.0, 0.0, 2.0, 0.0, 2.0);
        assert!(!a.overlaps(&b));
        assert_eq!(None, a.intersection(&b));
        let c = Box3::lrbtnf(1.0, 4.0, 1.0, 4.0, 1.0, 4.0);
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    #[test]
    fn disjoint_on_one_axis() {
        let a = Box3::lrbtnf(0.0, 2.0, 0.0, 2.0, 0.0, 2.0);
        let b = Box3::lrbtnf(0.0, 2.0, 0.0, 2.0, 5.0, 6.0);
        assert!(!a.overlaps(&b));
        assert_eq!(None, a & b);
    }

    #[test]
    fn contains_point_is_inclusive() {
        let value = Box3::lrbtnf(0.0, 2.0, 0.0, 2.0, 0.0, 2.0);
        assert!(value.contains_point(Point3::new(1.0, 1.0, 1.0)));
        assert!(value.contains_point(Point3::new(0.0, 2.0, 2.0)));
        assert!(!value.contains_point(Point3::new(1.0, 1.0, 2.5)));
    }

    #[test]
    fn emptiness() {
        assert!(Box3::xyzwhd(0.0, 0.0, 0.0, 1.0, 1.0, 0.0).is_empty());
        assert!(!Box3::xyzwhd(0.0, 0.0, 0.0, 1.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn display() {
        expect!["<Box3 LRBTNF(-5, 5, -5, 5, -5, 5) XYZWHD(0, 0, 0, 10, 10, 10)>"]
            .assert_eq(&Box3::xyzwhd(0.0, 0.0, 0.0, 10.0, 10.0, 10.0).to_string());
    }

    #[test]
    fn serializes_as_corners() {
        let value: Box3 =
            ron::from_str("(left: 0.0, right: 2.0, bottom: 0.0, top: 4.0, near: 1.0, far: 3.0)")
                .unwrap();
        assert_eq!(Point3::new(1.0, 2.0, 2.0), value.center());
        let text = ron::to_string(&value).unwrap();
        assert_eq!(value, ron::from_str::<Box3>(&text).unwrap());
    }
}
