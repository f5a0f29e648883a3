use crate::geometry::Rect;
use crate::types::{Color, Float, Point};

/// An elliptical arc, angles in degrees counter-clockwise from the positive x axis.
#[derive(Clone, Debug, PartialEq)]
pub struct EllipticalArc {
    pub center: Point,
    pub width: Float,
    pub height: Float,
    pub color: Color,
    pub start_angle: Float,
    pub end_angle: Float,
    /// Clockwise rotation of the whole arc, in degrees
    pub tilt_angle: Float,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RenderCommand {
    Save,
    Restore,
    Clear(Color),
    Translate { x: Float, y: Float },
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color, border_width: Float },
    ArcFilled { arc: EllipticalArc },
    ArcOutline { arc: EllipticalArc, border_width: Float },
}
