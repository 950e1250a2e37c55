//! Color conversions used by the SVG styles.

use glam::Vec3;

/// Converts HSV to RGB.
///
/// `hue` is in degrees over `[0, 360)`, `saturation` and `value` in `[0, 1]`.
/// Sectors are half-open on hue (`[0, 60)`, `[60, 120)`, ...); anything not in
/// `[0, 300)` lands in the last sector.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Vec3 {
    let c = value * saturation;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = value - c;

    let rgb = match hue {
        h if (0.0..60.0).contains(&h) => Vec3::new(c, x, 0.0),
        h if (60.0..120.0).contains(&h) => Vec3::new(x, c, 0.0),
        h if (120.0..180.0).contains(&h) => Vec3::new(0.0, c, x),
        h if (180.0..240.0).contains(&h) => Vec3::new(0.0, x, c),
        h if (240.0..300.0).contains(&h) => Vec3::new(x, 0.0, c),
        _ => Vec3::new(c, 0.0, x),
    };

    rgb + Vec3::splat(m)
}

/// Scales `[0, 1]` channels to bytes, truncating toward zero.
pub fn to_rgb8(color: Vec3) -> [u8; 3] {
    let c = color * 255.0;
    [c.x as u8, c.y as u8, c.z as u8]
}

/// Formats channels as an SVG `rgb(r,g,b)` paint.
pub fn svg_rgb([r, g, b]: [u8; 3]) -> String {
    format!("rgb({r},{g},{b})")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn primaries() {
        assert!(approx(hsv_to_rgb(0.0, 1.0, 1.0), Vec3::new(1.0, 0.0, 0.0)));
        assert!(approx(hsv_to_rgb(120.0, 1.0, 1.0), Vec3::new(0.0, 1.0, 0.0)));
        assert!(approx(hsv_to_rgb(240.0, 1.0, 1.0), Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn sector_edges_are_half_open() {
        // 60 starts the yellow-to-green sector: (x, c, 0) with x == c.
        assert!(approx(hsv_to_rgb(60.0, 1.0, 1.0), Vec3::new(1.0, 1.0, 0.0)));
        assert!(approx(hsv_to_rgb(180.0, 1.0, 1.0), Vec3::new(0.0, 1.0, 1.0)));
        assert!(approx(hsv_to_rgb(300.0, 1.0, 1.0), Vec3::new(1.0, 0.0, 1.0)));
        assert!(approx(hsv_to_rgb(359.0, 1.0, 1.0), Vec3::new(1.0, 0.0, 1.0 / 60.0)));
    }

    #[test]
    fn zero_saturation_is_grey() {
        assert!(approx(hsv_to_rgb(200.0, 0.0, 0.5), Vec3::splat(0.5)));
    }

    #[test]
    fn bytes_truncate() {
        assert_eq!(to_rgb8(Vec3::new(1.0, 0.5, 0.0)), [255, 127, 0]);
        assert_eq!(svg_rgb([1, 2, 3]), "rgb(1,2,3)");
    }
}
