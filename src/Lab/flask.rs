//! What the flask looks like: color of the liquid and how full it is.
//! Drawing is left to the front end; `text_art()` gives a plain terminal picture.

use crate::Substances::color::Rgb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlaskView {
    pub color: Rgb,
    /// mL
    pub total_volume: f64,
    /// mL, the flask scale
    pub capacity: f64,
}

impl FlaskView {
    pub fn new(color: Rgb, total_volume: f64, capacity: f64) -> Self {
        Self {
            color,
            total_volume,
            capacity,
        }
    }

    /// 0..=1
    pub fn fill_fraction(&self) -> f64 {
        if self.capacity <= 0.0 {
            return 0.0;
        }
        (self.total_volume / self.capacity).clamp(0.0, 1.0)
    }

    pub fn is_overflowing(&self) -> bool {
        self.total_volume > self.capacity
    }

    /// Erlenmeyer flask: narrow neck on top of a cone widening downwards.
    /// Liquid rows are painted with the mixture color when `ansi` is set, `~` otherwise.
    pub fn text_art(&self, ansi: bool) -> Vec<String> {
        const NECK_ROWS: usize = 3;
        const BODY_ROWS: usize = 8;
        let total_rows = NECK_ROWS + BODY_ROWS;
        let filled_rows = (self.fill_fraction() * total_rows as f64).round() as usize;
        let body_width = |row: usize| 4 + 2 * row;
        let mut lines = Vec::with_capacity(total_rows + 1);
        for level in 0..total_rows {
            // level 0 is the top of the neck
            let inner = if level < NECK_ROWS {
                4
            } else {
                body_width(level - NECK_ROWS)
            };
            let outer = body_width(BODY_ROWS - 1);
            let pad = " ".repeat((outer - inner) / 2 + 1);
            let filled = total_rows - level <= filled_rows;
            let content = if filled {
                if ansi {
                    format!("{}{}\x1b[0m", self.color.ansi_background(), " ".repeat(inner))
                } else {
                    "~".repeat(inner)
                }
            } else {
                " ".repeat(inner)
            };
            let (left, right) = if level < NECK_ROWS { ("|", "|") } else { ("/", "\\") };
            lines.push(format!("{}{}{}{}", pad, left, content, right));
        }
        lines.push("=".repeat(body_width(BODY_ROWS - 1) + 4));
        lines
    }
}
