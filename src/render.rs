use glam::Vec2;
use heart_core::Surface;
use web_sys as web;

/// Canvas 2D context as a heart [`Surface`].
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    /// Backing store size in px, floored to at least 1x1.
    pub fn resize(&self, width: f32, height: f32) {
        self.canvas.set_width((width as u32).max(1));
        self.canvas.set_height((height as u32).max(1));
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.canvas.height() as f32
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn set_fill_color(&mut self, css_color: &str) {
        self.ctx.set_fill_style_str(css_color);
    }

    fn translate(&mut self, offset: Vec2) {
        _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn rotate(&mut self, radians: f32) {
        _ = self.ctx.rotate(radians as f64);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Vec2) {
        self.ctx.move_to(p.x as f64, p.y as f64);
    }

    fn bezier_curve_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2) {
        self.ctx.bezier_curve_to(
            c1.x as f64,
            c1.y as f64,
            c2.x as f64,
            c2.y as f64,
            end.x as f64,
            end.y as f64,
        );
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }
}
