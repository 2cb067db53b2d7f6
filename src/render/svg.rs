use std::fmt::Write as _;

use crate::error::ChartResult;
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Renderer serializing each frame into a standalone SVG document.
///
/// The reference rendering surface is scalable vector graphics; this backend
/// needs no system libraries and doubles as a snapshot target in tests.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_document: Option<String>,
}

impl SvgRenderer {
    /// The SVG document produced by the most recent `render` call.
    #[must_use]
    pub fn last_document(&self) -> Option<&str> {
        self.last_document.as_deref()
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut document = String::new();
        let _ = writeln!(
            document,
            r#"<svg xmlns="{SVG_NS}" width="{}" height="{}">"#,
            frame.viewport.width, frame.viewport.height
        );

        for line in &frame.lines {
            let _ = writeln!(
                document,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                fmt_px(line.x1),
                fmt_px(line.y1),
                fmt_px(line.x2),
                fmt_px(line.y2),
                css_color(line.color),
                fmt_px(line.stroke_width),
            );
        }

        for circle in &frame.circles {
            let _ = writeln!(
                document,
                r#"  <circle cx="{}" cy="{}" r="{}" fill="{}" fill-opacity="{}"/>"#,
                fmt_px(circle.cx),
                fmt_px(circle.cy),
                fmt_px(circle.radius),
                css_color(circle.fill),
                circle.fill.alpha,
            );
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            let transform = if text.rotation_degrees == 0.0 {
                String::new()
            } else {
                format!(
                    r#" transform="rotate({} {} {})""#,
                    fmt_px(text.rotation_degrees),
                    fmt_px(text.x),
                    fmt_px(text.y),
                )
            };
            let _ = writeln!(
                document,
                r#"  <text x="{}" y="{}" font-family="sans-serif" font-size="{}px" fill="{}" text-anchor="{anchor}"{transform}>{}</text>"#,
                fmt_px(text.x),
                fmt_px(text.y),
                fmt_px(text.font_size_px),
                css_color(text.color),
                escape_text(&text.text),
            );
        }

        document.push_str("</svg>\n");
        self.last_document = Some(document);
        Ok(())
    }
}

fn css_color(color: Color) -> String {
    format!(
        "rgb({},{},{})",
        channel_to_byte(color.red),
        channel_to_byte(color.green),
        channel_to_byte(color.blue),
    )
}

fn channel_to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Trims trailing `.0` noise from pixel attribute values.
fn fmt_px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
