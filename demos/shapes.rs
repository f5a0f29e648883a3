use rectbox::draw::parabola::{draw_parabola_filled, draw_parabola_outline, ParabolaStyle};
use rectbox::logging::init_logging;
use rectbox::render::backend_svg::render_svg;
use rectbox::render::settings::SvgSettings;
use rectbox::result::RectboxResult;
use rectbox::types::{Color, WHITE};
use rectbox::window::{View, Window};
use rectbox::{AnchorPoint, Rect};
use tracing::info;

struct ShapesView;

impl View for ShapesView {
    fn on_show_view(&mut self) {
        info!("Shapes view shown");
    }

    fn background_color(&self) -> Option<Color> {
        Some(Color::new(0, 204, 0, 255))
    }
}

fn main() -> RectboxResult<()> {
    init_logging()?;
    let settings = SvgSettings::load_or_default("demos/shapes.ron");

    let mut window = Window::new(WHITE);
    window.show_view(Box::new(ShapesView));
    window.clear();

    let screen = Rect::lbwh(0.0, 0.0, settings.width, settings.height);
    let panel = screen
        .scale(0.5, AnchorPoint::CENTER)
        .min_size(Some(200.0), Some(100.0));
    window
        .render_context()
        .stroke_rect(panel, Color::new(0, 0, 0, 255), 2.0);
    draw_parabola_filled(
        window.render_context(),
        panel.left(),
        panel.bottom(),
        panel.x(),
        panel.height() / 4.0,
        Color::new(200, 0, 0, 255),
        &ParabolaStyle::default(),
    );
    draw_parabola_outline(
        window.render_context(),
        panel.x(),
        panel.bottom(),
        panel.right(),
        panel.height() / 2.0,
        Color::new(0, 0, 200, 255),
        &ParabolaStyle::tilted(15.0).with_border_width(3.0),
    );

    let commands = window.take_commands();
    info!("Rendering {} commands for {}", commands.len(), panel);
    render_svg(&settings, &commands, &mut std::io::stdout())
}
