//! Surface that records draw calls instead of painting
//!
//! Used by the native demo and by tests to inspect what a frame drew.
//! Each primitive captures the style active when it was issued.

use super::surface::{Color, Surface, palette};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Style {
    fill: Color,
    stroke: Color,
    line_width: f32,
    alpha: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: palette::BLACK,
            stroke: palette::BLACK,
            line_width: 1.0,
            alpha: 1.0,
        }
    }
}

/// One recorded call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Save,
    Restore,
    Translate { x: f32, y: f32 },
    Rotate { radians: f32 },
    Scale { sx: f32, sy: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32, color: Color, alpha: f32 },
    RoundRect { x: f32, y: f32, w: f32, h: f32, radius: f32, color: Color },
    Circle { x: f32, y: f32, radius: f32, color: Color },
    CircleOutline { x: f32, y: f32, radius: f32, color: Color, line_width: f32 },
    Ellipse { x: f32, y: f32, rx: f32, ry: f32, color: Color },
    Line { x0: f32, y0: f32, x1: f32, y1: f32, color: Color, line_width: f32 },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    style: Style,
    stack: Vec<Style>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded commands, keeping the current style
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Number of save/restore levels currently open
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn circles(&self) -> impl Iterator<Item = (f32, f32, f32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Circle {
                x,
                y,
                radius,
                color,
            } => Some((x, y, radius, color)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (f32, f32, f32, f32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Rect {
                x, y, w, h, color, ..
            } => Some((x, y, w, h, color)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (f32, f32, f32, f32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Line {
                x0,
                y0,
                x1,
                y1,
                color,
                ..
            } => Some((x0, y0, x1, y1, color)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn save(&mut self) {
        self.stack.push(self.style);
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        if let Some(style) = self.stack.pop() {
            self.style = style;
        }
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::Translate { x, y });
    }

    fn rotate(&mut self, radians: f32) {
        self.commands.push(DrawCommand::Rotate { radians });
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.commands.push(DrawCommand::Scale { sx, sy });
    }

    fn set_fill(&mut self, color: Color) {
        self.style.fill = color;
    }

    fn set_stroke(&mut self, color: Color, line_width: f32) {
        self.style.stroke = color;
        self.style.line_width = line_width;
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.style.alpha = alpha;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            w,
            h,
            color: self.style.fill,
            alpha: self.style.alpha,
        });
    }

    fn fill_round_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32) {
        self.commands.push(DrawCommand::RoundRect {
            x,
            y,
            w,
            h,
            radius,
            color: self.style.fill,
        });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            color: self.style.fill,
        });
    }

    fn stroke_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.commands.push(DrawCommand::CircleOutline {
            x,
            y,
            radius,
            color: self.style.stroke,
            line_width: self.style.line_width,
        });
    }

    fn fill_ellipse(&mut self, x: f32, y: f32, rx: f32, ry: f32) {
        self.commands.push(DrawCommand::Ellipse {
            x,
            y,
            rx,
            ry,
            color: self.style.fill,
        });
    }

    fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        self.commands.push(DrawCommand::Line {
            x0,
            y0,
            x1,
            y1,
            color: self.style.stroke,
            line_width: self.style.line_width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_pops_style() {
        let mut surface = RecordingSurface::new();
        surface.set_fill(palette::WHITE);
        surface.save();
        surface.set_fill(palette::P1_BLUE);
        surface.fill_circle(0.0, 0.0, 1.0);
        surface.restore();
        surface.fill_circle(0.0, 0.0, 2.0);

        let colors: Vec<Color> = surface.circles().map(|c| c.3).collect();
        assert_eq!(colors, vec![palette::P1_BLUE, palette::WHITE]);
        assert_eq!(surface.depth(), 0);
    }
}
