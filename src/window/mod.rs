use crate::render::command::RenderCommand;
use crate::render::context::RenderContext;
use crate::types::{Color, BLACK};
use tracing::debug;

/// A screen that can be shown in a [`Window`].
pub trait View {
    /// Called once when the view becomes the current view.
    fn on_show_view(&mut self) {}

    /// Called once when another view replaces this one.
    fn on_hide_view(&mut self) {}

    /// Color used when clearing while this view is shown, `None` uses the window color.
    fn background_color(&self) -> Option<Color> {
        None
    }
}

pub struct Window {
    current_view: Option<Box<dyn View>>,
    background_color: Color,
    render_context: RenderContext,
}

impl Default for Window {
    fn default() -> Self {
        Self::new(BLACK)
    }
}

impl Window {
    pub fn new(background_color: Color) -> Self {
        Self {
            current_view: None,
            background_color,
            render_context: RenderContext::new(),
        }
    }

    /// Makes `view` the current view and returns the one it replaced.
    pub fn show_view(&mut self, mut view: Box<dyn View>) -> Option<Box<dyn View>> {
        let mut previous = self.current_view.take();
        if let Some(previous) = previous.as_mut() {
            debug!("Hiding previous view");
            previous.on_hide_view();
        }
        debug!("Showing view");
        view.on_show_view();
        self.current_view = Some(view);
        previous
    }

    pub fn current_view(&self) -> Option<&dyn View> {
        self.current_view.as_deref()
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
    }

    /// Clears with the current view's background color, falling back to the window's.
    pub fn clear(&mut self) {
        let color = self
            .current_view
            .as_ref()
            .and_then(|view| view.background_color())
            .unwrap_or(self.background_color);
        self.clear_with(color);
    }

    pub fn clear_with(&mut self, color: Color) {
        self.render_context.clear(color);
    }

    pub fn render_context(&mut self) -> &mut RenderContext {
        &mut self.render_context
    }

    pub fn take_commands(&mut self) -> Vec<RenderCommand> {
        self.render_context.take_commands()
    }
}
