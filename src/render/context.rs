use crate::draw::ArcPainter;
use crate::geometry::Rect;
use crate::render::command::{EllipticalArc, RenderCommand};
use crate::types::{Color, Float, Point};

/// Collects render commands for a frame.
#[derive(Debug, Default)]
pub struct RenderContext {
    render_queue: Vec<RenderCommand>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command(&mut self, command: RenderCommand) {
        self.render_queue.push(command);
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.render_queue
    }

    pub fn take_commands(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.render_queue)
    }

    pub fn render_queue(self) -> Vec<RenderCommand> {
        self.render_queue
    }

    pub fn save(&mut self) {
        self.add_command(RenderCommand::Save);
    }

    pub fn restore(&mut self) {
        self.add_command(RenderCommand::Restore);
    }

    /// Offsets everything drawn until the matching [`RenderContext::restore`].
    pub fn translate(&mut self, x: Float, y: Float) {
        self.add_command(RenderCommand::Translate { x, y });
    }

    pub fn clear(&mut self, color: Color) {
        self.add_command(RenderCommand::Clear(color));
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.add_command(RenderCommand::FillRect { rect, color });
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Color, border_width: Float) {
        self.add_command(RenderCommand::StrokeRect {
            rect,
            color,
            border_width,
        });
    }
}

impl ArcPainter for RenderContext {
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
    ) {
        self.add_command(RenderCommand::ArcFilled {
            arc: EllipticalArc {
                center: Point::new(center_x, center_y),
                width,
                height,
                color,
                start_angle,
                end_angle,
                tilt_angle,
            },
        });
    }

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
    ) {
        self.add_command(RenderCommand::ArcOutline {
            arc: EllipticalArc {
                center: Point::new(center_x, center_y),
                width,
                height,
                color,
                start_angle,
                end_angle,
                tilt_angle,
            },
            border_width,
        });
    }
}
