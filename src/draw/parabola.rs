use crate::draw::ArcPainter;
use crate::types::{Color, Float};

const START_ANGLE: Float = 0.0;
const END_ANGLE: Float = 180.0;

/// Tilt and stroke applied to a parabola, defaults to no tilt and a one pixel border.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParabolaStyle {
    /// Clockwise rotation, in degrees
    pub tilt_angle: Float,
    /// Only used by outlines
    pub border_width: Float,
}

impl Default for ParabolaStyle {
    fn default() -> Self {
        Self {
            tilt_angle: 0.0,
            border_width: 1.0,
        }
    }
}

impl ParabolaStyle {
    pub fn tilted(tilt_angle: Float) -> Self {
        Self {
            tilt_angle,
            ..Self::default()
        }
    }

    pub fn with_border_width(self, border_width: Float) -> Self {
        Self {
            border_width,
            ..self
        }
    }
}

struct ParabolaArc {
    center_x: Float,
    center_y: Float,
    width: Float,
}

fn parabola_arc(start_x: Float, start_y: Float, end_x: Float, height: Float) -> ParabolaArc {
    ParabolaArc {
        center_x: (start_x + end_x) / 2.0,
        center_y: start_y + height,
        width: start_x - end_x,
    }
}

/// Draws a filled parabola from `start_x` to `end_x`, rising `height` above `start_y`.
pub fn draw_parabola_filled(
    painter: &mut impl ArcPainter,
    start_x: Float,
    start_y: Float,
    end_x: Float,
    height: Float,
    color: Color,
    style: &ParabolaStyle,
) {
    let arc = parabola_arc(start_x, start_y, end_x, height);
    painter.draw_arc_filled(
        arc.center_x,
        arc.center_y,
        arc.width,
        height,
        color,
        START_ANGLE,
        END_ANGLE,
        style.tilt_angle,
    );
}

/// Outline variant of [`draw_parabola_filled`], stroked with the style's border width.
pub fn draw_parabola_outline(
    painter: &mut impl ArcPainter,
    start_x: Float,
    start_y: Float,
    end_x: Float,
    height: Float,
    color: Color,
    style: &ParabolaStyle,
) {
    let arc = parabola_arc(start_x, start_y, end_x, height);
    painter.draw_arc_outline(
        arc.center_x,
        arc.center_y,
        arc.width,
        height,
        color,
        START_ANGLE,
        END_ANGLE,
        style.border_width,
        style.tilt_angle,
    );
}
