//! SVG export of turtle geometry.
//!
//! Geometry is projected orthographically onto the XY plane (Z is dropped),
//! fitted to a canvas sized from its bounding box, and written as one `<line>`
//! per segment in the chosen [`Style`].

use crate::color::{hsv_to_rgb, svg_rgb, to_rgb8};
use crate::error::ExportError;
use crate::geometry::{Bounds2, Segment};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

/// Hue step between consecutive segments in [`Style::Rainbow`], in degrees.
pub const GOLDEN_ANGLE_DEGREES: f32 = 137.5;

/// Number of distinct line gradients emitted for [`Style::Gradient`].
pub const GRADIENT_PALETTE_SIZE: usize = 10;

/// Visual treatment of an exported image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Style {
    /// Flat segment colors on black.
    #[default]
    Plain,
    /// Cycling green line gradients with a glow on a radial background.
    Gradient,
    /// Golden-angle hue per segment with a glow on a radial background.
    Rainbow,
    /// Pale segment colors on an off-white background.
    Light,
    /// Segments darken and thin out with distance from the canvas center.
    Depth,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Plain,
        Style::Gradient,
        Style::Rainbow,
        Style::Light,
        Style::Depth,
    ];

    /// Parses a style name. Unknown names fall back to [`Style::Plain`].
    pub fn parse_lenient(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "gradient" => Style::Gradient,
            "rainbow" => Style::Rainbow,
            "light" => Style::Light,
            "depth" => Style::Depth,
            _ => Style::Plain,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Style::Plain => "plain",
            Style::Gradient => "gradient",
            Style::Rainbow => "rainbow",
            Style::Light => "light",
            Style::Depth => "depth",
        }
    }

    /// Total border added to the scaled bounding box. Styles with a glow or
    /// depth falloff reserve extra room.
    pub fn margin(self) -> f32 {
        match self {
            Style::Plain => 100.0,
            _ => 200.0,
        }
    }

    fn width_multiplier(self) -> f32 {
        match self {
            Style::Plain => 0.5,
            _ => 0.8,
        }
    }

    fn min_stroke_width(self) -> f32 {
        match self {
            Style::Plain => 0.0,
            _ => 0.5,
        }
    }

    fn glows(self) -> bool {
        matches!(self, Style::Gradient | Style::Rainbow)
    }

    fn background(self) -> &'static str {
        match self {
            Style::Gradient | Style::Rainbow => "url(#bg)",
            Style::Light => "#f8f8f8",
            Style::Plain | Style::Depth => "black",
        }
    }
}

impl FromStr for Style {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl From<String> for Style {
    fn from(name: String) -> Self {
        Self::parse_lenient(&name)
    }
}

impl From<Style> for String {
    fn from(style: Style) -> Self {
        style.name().to_string()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mapping from world XY to canvas pixels (Y pointing down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub bounds: Bounds2,
    pub scale: f32,
    pub margin: f32,
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn new(bounds: Bounds2, scale: f32, margin: f32) -> Self {
        Self {
            bounds,
            scale,
            margin,
            width: bounds.width() * scale + margin,
            height: bounds.height() * scale + margin,
        }
    }

    /// Projects a world point onto the canvas.
    pub fn project(&self, p: Vec3) -> Vec2 {
        let offset = self.margin / 2.0;
        let x = (p.x - self.bounds.min.x) * self.scale + offset;
        let y = (p.y - self.bounds.min.y) * self.scale + offset;
        Vec2::new(x, self.height - y)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// What an export call wrote.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub segments: usize,
    pub style: Style,
}

/// Renders `segments` as an SVG document. Returns `None` for empty input.
pub fn render_svg(segments: &[Segment], scale: f32, style: Style) -> Option<String> {
    let bounds = Bounds2::from_segments(segments)?;
    let canvas = Canvas::new(bounds, scale, style.margin());

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        canvas.width, canvas.height
    ));

    if style.glows() {
        push_defs(&mut out, style, segments.len());
    }

    out.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        style.background()
    ));

    for (i, segment) in segments.iter().enumerate() {
        push_line(&mut out, &canvas, style, i, segment);
    }

    out.push_str("</svg>\n");
    Some(out)
}

/// Renders `segments` and writes the document to `path`.
///
/// Empty input writes nothing and returns `Ok(None)`. A failed write is
/// returned as [`ExportError::Io`] and is not retried.
pub fn export_svg(
    segments: &[Segment],
    scale: f32,
    style: Style,
    path: impl AsRef<Path>,
) -> Result<Option<ExportSummary>, ExportError> {
    let path = path.as_ref();
    let Some(document) = render_svg(segments, scale, style) else {
        return Ok(None);
    };

    std::fs::write(path, document).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        segments = segments.len(),
        %style,
        "SVG file saved"
    );

    Ok(Some(ExportSummary {
        path: path.to_path_buf(),
        segments: segments.len(),
        style,
    }))
}

fn push_defs(out: &mut String, style: Style, segment_count: usize) {
    out.push_str("<defs>\n");

    out.push_str("<radialGradient id=\"bg\" cx=\"50%\" cy=\"50%\" r=\"50%\">\n");
    out.push_str("<stop offset=\"0%\" style=\"stop-color:#001122;stop-opacity:1\" />\n");
    out.push_str("<stop offset=\"100%\" style=\"stop-color:#000000;stop-opacity:1\" />\n");
    out.push_str("</radialGradient>\n");

    if style == Style::Gradient {
        for i in 0..segment_count.min(GRADIENT_PALETTE_SIZE) {
            out.push_str(&format!(
                "<linearGradient id=\"lineGrad{i}\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">\n"
            ));
            out.push_str("<stop offset=\"0%\" style=\"stop-color:#90EE90;stop-opacity:0.9\" />\n");
            out.push_str("<stop offset=\"100%\" style=\"stop-color:#32CD32;stop-opacity:0.6\" />\n");
            out.push_str("</linearGradient>\n");
        }
    }

    out.push_str("<filter id=\"glow\">\n");
    out.push_str("<feGaussianBlur stdDeviation=\"2\" result=\"coloredBlur\"/>\n");
    out.push_str("<feMerge>\n");
    out.push_str("<feMergeNode in=\"coloredBlur\"/>\n");
    out.push_str("<feMergeNode in=\"SourceGraphic\"/>\n");
    out.push_str("</feMerge>\n");
    out.push_str("</filter>\n");

    out.push_str("</defs>\n");
}

fn push_line(out: &mut String, canvas: &Canvas, style: Style, index: usize, segment: &Segment) {
    let a = canvas.project(segment.start);
    let b = canvas.project(segment.end);

    let mut stroke_width = style
        .min_stroke_width()
        .max(segment.width * style.width_multiplier());

    let stroke = match style {
        Style::Plain => svg_rgb(to_rgb8(segment.color)),
        Style::Gradient => format!("url(#lineGrad{})", index % GRADIENT_PALETTE_SIZE),
        Style::Rainbow => {
            let hue = (index as f32 * GOLDEN_ANGLE_DEGREES) % 360.0;
            svg_rgb(to_rgb8(hsv_to_rgb(hue, 0.7, 0.9)))
        }
        Style::Light => {
            let pale = segment.color * 180.0 + Vec3::splat(75.0);
            svg_rgb([pale.x as u8, pale.y as u8, pale.z as u8])
        }
        Style::Depth => {
            let center = canvas.center();
            let intensity = 1.0 - (a.distance(center) / center.length()) * 0.7;
            stroke_width *= intensity;
            svg_rgb(to_rgb8(segment.color * intensity))
        }
    };

    let filter = if style.glows() {
        " filter=\"url(#glow)\""
    } else {
        ""
    };

    out.push_str(&format!(
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\" stroke-linecap=\"round\"{filter}/>\n",
        a.x, a.y, b.x, b.y
    ));
}
