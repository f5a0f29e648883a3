use rgb::RGBA8;

pub struct WorldSpace;
pub type Color = RGBA8;
pub type Float = f32;
pub type Point = euclid::Point2D<Float, WorldSpace>;
pub type Vec2 = euclid::Vector2D<Float, WorldSpace>;
pub type Size = euclid::Size2D<Float, WorldSpace>;
pub type Point3 = euclid::Point3D<Float, WorldSpace>;
pub type Size3 = euclid::Size3D<Float, WorldSpace>;

pub const BLACK: Color = Color {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};
pub const WHITE: Color = Color {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};
