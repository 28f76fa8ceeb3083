//! Immediate-mode drawing surface
//!
//! A trimmed-down Canvas 2D: transforms, fill/stroke state and a handful
//! of primitives. Coordinates are logical world units (800×450).

use std::fmt;

/// RGBA color, alpha in 0..=1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string for canvas fill/stroke styles
    pub fn to_css(self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Fixed palette
pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    /// Role colors
    pub const P1_BLUE: Color = Color::rgb(0x4f, 0xac, 0xfe);
    pub const P2_RED: Color = Color::rgb(0xff, 0x6b, 0x6b);

    /// Avatar details
    pub const LIMB: Color = Color::rgb(0x33, 0x33, 0x33);
    pub const SKIN: Color = Color::rgb(0xff, 0xcc, 0xaa);

    /// Basketball court and ball
    pub const COURT_ORANGE: Color = Color::rgb(0xe6, 0x7e, 0x22);
    pub const HOOP_RED: Color = Color::rgb(0xc0, 0x39, 0x2b);

    /// American football
    pub const GOALPOST_YELLOW: Color = Color::rgb(0xf1, 0xc4, 0x0f);
    pub const LEATHER_BROWN: Color = Color::rgb(0x8b, 0x45, 0x13);

    /// Soccer goal areas
    pub const GOAL_AREA: Color = Color::rgba(0xff, 0xff, 0xff, 0.5);
}

/// Canvas-like drawing target.
///
/// Angles passed to `rotate` are radians. `save`/`restore` push and pop the
/// full transform + style state, as on a real canvas.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, sx: f32, sy: f32);

    fn set_fill(&mut self, color: Color);
    fn set_stroke(&mut self, color: Color, line_width: f32);
    fn set_alpha(&mut self, alpha: f32);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_round_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32);
    fn stroke_circle(&mut self, x: f32, y: f32, radius: f32);
    fn fill_ellipse(&mut self, x: f32, y: f32, rx: f32, ry: f32);
    fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_colors() {
        assert_eq!(palette::P1_BLUE.to_css(), "#4facfe");
        assert_eq!(palette::P2_RED.to_css(), "#ff6b6b");
        assert_eq!(palette::GOAL_AREA.to_css(), "rgba(255,255,255,0.5)");
        assert_eq!(palette::LEATHER_BROWN.to_string(), "#8b4513");
    }
}
