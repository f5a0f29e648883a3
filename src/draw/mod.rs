pub mod parabola;

use crate::types::{Color, Float};

/// Arc drawing primitive the shape helpers are built on.
///
/// `width` and `height` are the full extents of the ellipse the arc is cut from, angles are
/// in degrees. `tilt_angle` rotates the arc clockwise around its center.
pub trait ArcPainter {
    #[allow(clippy::too_many_arguments)]
    fn draw_arc_filled(
        &mut self,
        center_x: Float,
        center_y: Float,
        width: Float,
        height: Float,
        color: Color,
        start_angle: Float,
        end_angle: Float,
        tilt_angle: Float,
    );

    #[allow(clippy::too_many_arguments)]
    fn draw_arc_outline(
        &mut self,
        center_x: Float,
        center_y: Float,
        width: Float,
        height: Float,
        color: Color,
        start_angle: Float,
        end_angle: Float,
        border_width: Float,
        tilt_angle: Float,
    );
}
