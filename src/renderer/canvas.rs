//! Canvas 2D backend
//!
//! Canvas calls that can throw (transforms, arcs) only do so for invalid
//! geometry such as a negative radius; those are logged and skipped so a
//! bad value costs one shape, never the frame.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{Color, Surface};

/// Get the 2D context of a canvas element
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context is null"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("Failed to cast to 2d context"))
}

#[inline]
fn check(op: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::trace!("canvas {} failed: {:?}", op, e);
    }
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f32, height: f32) {
        self.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn translate(&mut self, x: f32, y: f32) {
        check("translate", CanvasRenderingContext2d::translate(self, x as f64, y as f64));
    }

    fn rotate(&mut self, radians: f32) {
        check("rotate", CanvasRenderingContext2d::rotate(self, radians as f64));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        check("scale", CanvasRenderingContext2d::scale(self, sx as f64, sy as f64));
    }

    fn set_fill(&mut self, color: Color) {
        self.set_fill_style_str(&color.to_css());
    }

    fn set_stroke(&mut self, color: Color, line_width: f32) {
        self.set_stroke_style_str(&color.to_css());
        self.set_line_width(line_width as f64);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.set_global_alpha(alpha as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        CanvasRenderingContext2d::fill_rect(self, x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_round_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32) {
        let (x, y, w, h) = (x as f64, y as f64, w as f64, h as f64);
        let r = (radius as f64).min(w / 2.0).min(h / 2.0);

        self.begin_path();
        self.move_to(x + r, y);
        check("arc_to", self.arc_to(x + w, y, x + w, y + h, r));
        check("arc_to", self.arc_to(x + w, y + h, x, y + h, r));
        check("arc_to", self.arc_to(x, y + h, x, y, r));
        check("arc_to", self.arc_to(x, y, x + w, y, r));
        self.close_path();
        self.fill();
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.begin_path();
        check("arc", self.arc(x as f64, y as f64, radius as f64, 0.0, TAU));
        self.fill();
    }

    fn stroke_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.begin_path();
        check("arc", self.arc(x as f64, y as f64, radius as f64, 0.0, TAU));
        self.stroke();
    }

    fn fill_ellipse(&mut self, x: f32, y: f32, rx: f32, ry: f32) {
        self.begin_path();
        check(
            "ellipse",
            self.ellipse(x as f64, y as f64, rx as f64, ry as f64, 0.0, 0.0, TAU),
        );
        self.fill();
    }

    fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        self.begin_path();
        self.move_to(x0 as f64, y0 as f64);
        self.line_to(x1 as f64, y1 as f64);
        self.stroke();
    }
}
