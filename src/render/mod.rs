//! Drawing seam between figure procedures and rendering backends.
//!
//! Figure draw functions emit path and paint operations through
//! [`DrawSurface`]; backends (canvas, cairo, test recorders) implement the
//! trait. The method set is exactly the 2D-path subset the built-in figures
//! need, so a backend stays small.

/// Target of figure draw procedures.
///
/// Implementations hold the pen state (`set_*` calls apply to subsequent
/// `fill`/`stroke`/`fill_text` operations) and must not observe anything
/// beyond the calls they receive.
pub trait DrawSurface {
    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    #[allow(clippy::too_many_arguments)]
    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    /// Appends a rectangle path; `radius > 0` rounds the corners.
    fn rect_path(&mut self, x: f64, y: f64, width: f64, height: f64, radius: f64);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, max_width: f64);
    fn set_line_width(&mut self, width: f64);
    fn set_stroke_color(&mut self, color: &str);
    fn set_fill_color(&mut self, color: &str);
    /// Empty slice resets to a solid stroke.
    fn set_line_dash(&mut self, dash: &[f64]);
    fn set_font(&mut self, size: f64, weight: &str, family: &str);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);
}

/// One recorded surface operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    ClosePath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    BezierCurveTo {
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    },
    Arc {
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    RectPath {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: f64,
    },
    Fill,
    Stroke,
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
        max_width: f64,
    },
    LineWidth(f64),
    StrokeColor(String),
    FillColor(String),
    LineDash(Vec<f64>),
    Font {
        size: f64,
        weight: String,
        family: String,
    },
    Save,
    Restore,
    Translate {
        dx: f64,
        dy: f64,
    },
}

/// Surface that records every operation; used by tests and headless hosts.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of recorded `Fill`/`Stroke`/`FillRect`/`FillText` paint operations.
    #[must_use]
    pub fn paint_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| {
                matches!(
                    command,
                    DrawCommand::Fill
                        | DrawCommand::Stroke
                        | DrawCommand::FillRect { .. }
                        | DrawCommand::FillText { .. }
                )
            })
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        self.commands.push(DrawCommand::BezierCurveTo {
            cp1x,
            cp1y,
            cp2x,
            cp2y,
            x,
            y,
        });
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.commands.push(DrawCommand::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn rect_path(&mut self, x: f64, y: f64, width: f64, height: f64, radius: f64) {
        self.commands.push(DrawCommand::RectPath {
            x,
            y,
            width,
            height,
            radius,
        });
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, max_width: f64) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_owned(),
            x,
            y,
            max_width,
        });
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.commands.push(DrawCommand::StrokeColor(color.to_owned()));
    }

    fn set_fill_color(&mut self, color: &str) {
        self.commands.push(DrawCommand::FillColor(color.to_owned()));
    }

    fn set_line_dash(&mut self, dash: &[f64]) {
        self.commands.push(DrawCommand::LineDash(dash.to_vec()));
    }

    fn set_font(&mut self, size: f64, weight: &str, family: &str) {
        self.commands.push(DrawCommand::Font {
            size,
            weight: weight.to_owned(),
            family: family.to_owned(),
        });
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.commands.push(DrawCommand::Translate { dx, dy });
    }
}
