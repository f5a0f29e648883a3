use crate::err;
use crate::geometry::Rect;
use crate::render::command::{EllipticalArc, RenderCommand};
use crate::render::settings::SvgSettings;
use crate::result::RectboxResult;
use crate::types::{Color, Float};
use std::io::Write;
use svg::node::element::{Group, Path, Rectangle};
use svg::{Document, Node};
use tracing::debug;

pub fn render_svg(
    settings: &SvgSettings,
    render_list: &[RenderCommand],
    write: &mut dyn Write,
) -> RectboxResult<()> {
    let document = render_svg_document(settings, render_list)?;
    write.write_all(&document.to_string().into_bytes())?;
    Ok(())
}

struct Entry {
    group: Group,
    children: Vec<Box<dyn Node>>,
}

fn push_element(element: impl Node, entry_stack: &mut [Entry]) -> RectboxResult<()> {
    entry_stack
        .last_mut()
        .ok_or_else(|| err!("Empty svg group stack"))?
        .children
        .push(Box::new(element));
    Ok(())
}

fn push_group(group: Group, entry_stack: &mut Vec<Entry>) {
    entry_stack.push(Entry {
        group,
        children: Vec::new(),
    });
}

fn pop_stack(entry_stack: &mut Vec<Entry>) -> RectboxResult<()> {
    let Entry {
        mut group,
        children,
    } = entry_stack
        .pop()
        .ok_or_else(|| err!("Empty svg group stack"))?;
    for child in children {
        group.append(child);
    }
    push_element(group, entry_stack)
}

// Rounds to three decimals so trigonometry noise does not leak into the output
fn round(value: f64) -> f64 {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn svg_color(color: Color) -> String {
    format!("rgb({} {} {})", color.r, color.g, color.b)
}

fn with_opacity<N: Node>(mut node: N, attribute: &str, color: Color) -> N {
    if color.a != 255 {
        node.assign(attribute, round(color.a as f64 / 255.0));
    }
    node
}

// World coordinates have y pointing up, svg has y pointing down
fn rectangle(rect: &Rect, canvas_height: Float) -> Rectangle {
    Rectangle::new()
        .set("x", rect.left())
        .set("y", canvas_height - rect.top())
        .set("width", rect.width())
        .set("height", rect.height())
}

fn arc_point(arc: &EllipticalArc, angle: f64, canvas_height: f64) -> (f64, f64) {
    let (sin, cos) = angle.to_radians().sin_cos();
    let local_x = arc.width as f64 / 2.0 * cos;
    let local_y = arc.height as f64 / 2.0 * sin;
    let (tilt_sin, tilt_cos) = (arc.tilt_angle as f64).to_radians().sin_cos();
    let x = arc.center.x as f64 + local_x * tilt_cos + local_y * tilt_sin;
    let y = arc.center.y as f64 - local_x * tilt_sin + local_y * tilt_cos;
    (round(x), round(canvas_height - y))
}

fn arc_path(arc: &EllipticalArc, canvas_height: Float, closed: bool) -> String {
    let canvas_height = canvas_height as f64;
    let start = arc.start_angle as f64;
    let end = arc.end_angle as f64;
    let radius_x = round((arc.width as f64 / 2.0).abs());
    let radius_y = round((arc.height as f64 / 2.0).abs());
    let rotation = round(arc.tilt_angle as f64);
    // Mirrored extents flip the direction the arc is traced in
    let sweep = if (arc.width < 0.0) != (arc.height < 0.0) {
        1
    } else {
        0
    };
    // Sweeps beyond a full turn retrace the same ellipse
    let end = if (end - start).abs() > 360.0 {
        start + 360.0 * (end - start).signum()
    } else {
        end
    };
    // A full turn cannot be expressed by a single arc segment
    let waypoints = if (end - start).abs() >= 360.0 {
        vec![(start + end) / 2.0, end]
    } else {
        vec![end]
    };
    let mut segment_start = start;
    let (start_x, start_y) = arc_point(arc, start, canvas_height);
    let mut path = if closed {
        let (center_x, center_y) = (
            round(arc.center.x as f64),
            round(canvas_height - arc.center.y as f64),
        );
        format!("M {center_x} {center_y} L {start_x} {start_y}")
    } else {
        format!("M {start_x} {start_y}")
    };
    for waypoint in waypoints {
        let large_arc = if (waypoint - segment_start).rem_euclid(360.0) > 180.0 {
            1
        } else {
            0
        };
        let (x, y) = arc_point(arc, waypoint, canvas_height);
        path.push_str(&format!(
            " A {radius_x} {radius_y} {rotation} {large_arc} {sweep} {x} {y}"
        ));
        segment_start = waypoint;
    }
    if closed {
        path.push_str(" Z");
    }
    path
}

pub fn render_svg_document(
    settings: &SvgSettings,
    render_list: &[RenderCommand],
) -> RectboxResult<Document> {
    debug!("Rendering {} commands to svg", render_list.len());
    let canvas_height = settings.height;
    let mut document = Document::new().set("viewBox", (0, 0, settings.width, settings.height));

    let entry_stack: &mut Vec<Entry> = &mut vec![Entry {
        group: Group::new(),
        children: Vec::new(),
    }];
    let mut save_stack = vec![];
    for render_command in render_list {
        match render_command {
            RenderCommand::Clear(color) => {
                let background = Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", settings.width)
                    .set("height", settings.height)
                    .set("fill", svg_color(*color));
                push_element(with_opacity(background, "fill-opacity", *color), entry_stack)?;
            }
            RenderCommand::FillRect { rect, color } => {
                let element = rectangle(rect, canvas_height).set("fill", svg_color(*color));
                push_element(with_opacity(element, "fill-opacity", *color), entry_stack)?;
            }
            RenderCommand::StrokeRect {
                rect,
                color,
                border_width,
            } => {
                let element = rectangle(rect, canvas_height)
                    .set("fill", "none")
                    .set("stroke", svg_color(*color))
                    .set("stroke-width", *border_width);
                push_element(with_opacity(element, "stroke-opacity", *color), entry_stack)?;
            }
            RenderCommand::ArcFilled { arc } => {
                let element = Path::new()
                    .set("d", arc_path(arc, canvas_height, true))
                    .set("fill", svg_color(arc.color));
                push_element(with_opacity(element, "fill-opacity", arc.color), entry_stack)?;
            }
            RenderCommand::ArcOutline { arc, border_width } => {
                let element = Path::new()
                    .set("d", arc_path(arc, canvas_height, false))
                    .set("fill", "none")
                    .set("stroke", svg_color(arc.color))
                    .set("stroke-width", *border_width);
                push_element(
                    with_opacity(element, "stroke-opacity", arc.color),
                    entry_stack,
                )?;
            }
            RenderCommand::Save => {
                save_stack.push(entry_stack.len());
            }
            RenderCommand::Restore => {
                let desired_size = save_stack
                    .pop()
                    .ok_or_else(|| err!("Restore without matching Save"))?;
                while entry_stack.len() > desired_size {
                    pop_stack(entry_stack)?;
                }
            }
            RenderCommand::Translate { x, y } => {
                push_group(
                    Group::new().set("transform", format!("translate({} {})", x, -y)),
                    entry_stack,
                );
            }
        }
    }
    while entry_stack.len() > 1 {
        pop_stack(entry_stack)?;
    }
    let root = entry_stack
        .pop()
        .ok_or_else(|| err!("Empty svg group stack"))?;
    for child in root.children {
        document.append(child);
    }
    document.assign(
        "style",
        format!("background-color: {}", svg_color(settings.background_color)),
    );
    Ok(document)
}

// Tests
#[cfg(test)]
mod tests {
    use crate::draw::parabola::{draw_parabola_filled, ParabolaStyle};
    use crate::geometry::Rect;
    use crate::render::backend_svg::render_svg;
    use crate::render::command::{EllipticalArc, RenderCommand};
    use crate::render::context::RenderContext;
    use crate::render::settings::SvgSettings;
    use crate::types::{Color, Point, BLACK, WHITE};
    use expect_test::{expect, Expect};

    const RED: Color = Color {
        r: 255,
        g: 0,
        b: 0,
        a: 255,
    };
    const BLUE: Color = Color {
        r: 0,
        g: 0,
        b: 255,
        a: 255,
    };

    fn settings() -> SvgSettings {
        SvgSettings {
            width: 100.0,
            height: 100.0,
            background_color: WHITE,
        }
    }

    fn arc(tilt_angle: f32, start_angle: f32, end_angle: f32) -> EllipticalArc {
        EllipticalArc {
            center: Point::new(50.0, 50.0),
            width: 20.0,
            height: 10.0,
            color: RED,
            start_angle,
            end_angle,
            tilt_angle,
        }
    }

    fn test_render_svg(commands: &[RenderCommand], expected: Expect) {
        let mut buffer = Vec::new();
        render_svg(&settings(), commands, &mut buffer).unwrap();
        let svg = String::from_utf8(buffer).unwrap();
        expected.assert_eq(&svg);
    }

    macro_rules! test_render_svg {
        ($($name:ident, $input:expr, $expected:expr;)+) => {
            $(#[test]
            fn $name() {
                test_render_svg($input, $expected);
            })+
        };
    }

    test_render_svg!(
      empty, &[], expect![[r#"<svg style="background-color: rgb(255 255 255)" viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg"/>"#]];
      clear, &[RenderCommand::Clear(BLACK)], expect![[r#"
          <svg style="background-color: rgb(255 255 255)" viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">
          <rect fill="rgb(0 0 0)" height="100" width="100" x="0" y="0"/>
          </svg>"#]];
      fill_rect, &[RenderCommand::FillRect { rect: Rect::lbwh(10.0, 20.0, 30.0, 40.0), color: RED }], expect![[r#"
          <svg style="background-color: rgb(255 255 255)" viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">
          <rect fill="rgb(255 0 0)" height="40" width="30" x="10" y="40"/>
          </svg>"#]];
      translucent_fill_rect, &[RenderCommand::FillRect { rect: Rect::lbwh(10.0, 20.0, 30.0, 40.0), color: Color::new(255, 0, 0, 51) }], expect![[r#"
          <svg style="background-color: rgb(255 255 255)" viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">
          <rect fill="rgb(255 0 0)" fill-opacity="0.2" height="40" width="30" x="10" y="40"/>
          </svg>"#]];
      stroke_rect, &[RenderCommand::StrokeRect { rect: Rect::lbwh(0.0, 0.0, 10.0, 10.0), color: BLACK, border_width: 2.0 }], expect![[r#"
          <svg style="background-color: rgb(255 255 255)" viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">
          <rect fill="none" height="10" stroke="rgb(0 0 0)" stroke-width="2" width="10" x="0" y="90"/>
          </svg>"#]];
      arc_filled, &[RenderCommand::ArcFilled { arc: arc(0.0, 0.0, 180.0) }], expect![[r#"
          <svg style="background-color: rgb(255 255 255)" viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">
          <path d="M 50 50 L 60 50 A 10 5 0 0 0 40 50 Z" fill="rgb(255 0 0)"/>
          </svg>"#]];
      arc_outline_tilted, &[RenderCommand::ArcOutline { arc: EllipticalArc { color: BLUE, ..arc(90.0, 0.0, 180.0) }, border_width: 3.0 }], expect![[r#"
          <svg style="background-color: rgb(255 255 255)" viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">
          <path d="M 50 60 A 10 5 90 0 0 50 40" fill="none" stroke="rgb(0 0 255)" stroke-width="3"/>
          </svg>"#]];
      arc_large, &[RenderCommand::ArcOutline { arc: arc(0.0, 0.0, 270.0), border_width: 1.0 }], expect![[r#"
          <svg style="background-color: rgb(255 255 255)" viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">
          <path d="M 60 50 A 10 5 0 1 0 50 55" fill="none" stroke="rgb(255 0 0)" stroke-width="1"/>
          </svg>"#]];
      arc_full_turn, &[RenderCommand::ArcOutline { arc: arc(0.0, 0.0, 360.0), border_width: 1.0 }], expect![[r#"
          <svg style="background-color: rgb(255 255 255)" viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">
          <path d="M 60 50 A 10 5 0 0 0 40 50 A 10 5 0 0 0 60 50" fill="none" stroke="rgb(255 0 0)" stroke-width="1"/>
          </svg>"#]];
      arc_double_turn, &[RenderCommand::ArcOutline { arc: arc(0.0, 0.0, 720.0), border_width: 1.0 }], expect![[r#"
          <svg style="background-color: rgb(255 255 255)" viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">
          <path d="M 60 50 A 10 5 0 0 0 40 50 A 10 5 0 0 0 60 50" fill="none" stroke="rgb(255 0 0)" stroke-width="1"/>
          </svg>"#]];
      save_restore, &[RenderCommand::Save, RenderCommand::Translate { x: 5.0, y: 5.0 }, RenderCommand::FillRect { rect: Rect::lbwh(0.0, 0.0, 1.0, 1.0), color: BLACK }, RenderCommand::Restore, RenderCommand::FillRect { rect: Rect::lbwh(0.0, 0.0, 2.0, 2.0), color: BLACK }], expect![[r#"
          <svg style="background-color: rgb(255 255 255)" viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">
          <g transform="translate(5 -5)">
          <rect fill="rgb(0 0 0)" height="1" width="1" x="0" y="99"/>
          </g>
          <rect fill="rgb(0 0 0)" height="2" width="2" x="0" y="98"/>
          </svg>"#]];
    );

    #[test]
    fn unbalanced_restore_fails() {
        let mut buffer = Vec::new();
        let error = render_svg(&settings(), &[RenderCommand::Restore], &mut buffer).unwrap_err();
        assert_eq!("General Error: Restore without matching Save", error.to_string());
        assert!(buffer.is_empty());
    }

    #[test]
    fn mirrored_parabola_flips_sweep() {
        let mut context = RenderContext::new();
        draw_parabola_filled(
            &mut context,
            20.0,
            10.0,
            80.0,
            30.0,
            BLACK,
            &ParabolaStyle::default(),
        );
        test_render_svg(
            &context.render_queue(),
            expect![[r#"
                <svg style="background-color: rgb(255 255 255)" viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">
                <path d="M 50 60 L 20 60 A 30 15 0 0 1 80 60 Z" fill="rgb(0 0 0)"/>
                </svg>"#]],
        );
    }

    #[test]
    fn translated_group_from_context() {
        let mut context = RenderContext::new();
        context.save();
        context.translate(10.0, 20.0);
        context.stroke_rect(Rect::lbwh(0.0, 0.0, 4.0, 4.0), BLACK, 1.0);
        context.restore();
        context.fill_rect(Rect::lbwh(0.0, 0.0, 4.0, 4.0), RED);
        test_render_svg(
            &context.render_queue(),
            expect![[r#"
                <svg style="background-color: rgb(255 255 255)" viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">
                <g transform="translate(10 -20)">
                <rect fill="none" height="4" stroke="rgb(0 0 0)" stroke-width="1" width="4" x="0" y="96"/>
                </g>
                <rect fill="rgb(255 0 0)" height="4" width="4" x="0" y="96"/>
                </svg>"#]],
        );
    }
}
