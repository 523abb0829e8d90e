//! Canvas geometry and the drawing surface the display paints on.

use crate::display::ClockDisplay;
use crate::error::{ClockError, Result};
use crate::topology::{CellIndex, GRID_COLUMNS, GRID_ROWS};

const BACKGROUND: u8 = 255;
const BORDER: Stroke = Stroke {
    gray: 220,
    weight: 5.0,
};
const OUTLINE_GRAY: u8 = 240;
const HAND_GRAY: u8 = 0;

const MARGIN_RATIO: f64 = 0.02;
const DIAMETER_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Grayscale stroke style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub gray: u8,
    pub weight: f64,
}

/// Immediate-mode drawing surface. Coordinates are canvas pixels with the
/// origin at the top left.
pub trait Renderer {
    /// Fills the whole surface.
    fn background(&mut self, gray: u8);
    fn rect(&mut self, origin: Point, width: f64, height: f64, stroke: Stroke);
    /// Unfilled circle.
    fn circle(&mut self, center: Point, diameter: f64, stroke: Stroke);
    fn line(&mut self, from: Point, to: Point, stroke: Stroke);
}

/// Pixel geometry of the clock grid, derived from the canvas width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    width: f64,
    height: f64,
    margin: f64,
    unit: f64,
    stroke_weight: f64,
    diameter: f64,
    hand_length: f64,
}

impl Layout {
    pub fn new(width: f64) -> Result<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(ClockError::InvalidCanvasWidth(width));
        }
        let margin = MARGIN_RATIO * width;
        let unit = (width - 2.0 * margin) / GRID_COLUMNS as f64;
        // 6 px at 2000 px wide, 3 px at 1000 px.
        let stroke_weight = (0.003_285_71 * width - 0.5).max(1.0);
        let diameter = DIAMETER_RATIO * unit;
        Ok(Self {
            width,
            height: GRID_ROWS as f64 * unit + 2.0 * margin,
            margin,
            unit,
            stroke_weight,
            diameter,
            hand_length: diameter / 2.0 - stroke_weight,
        })
    }

    pub const fn width(&self) -> f64 {
        self.width
    }

    pub const fn height(&self) -> f64 {
        self.height
    }

    pub const fn unit(&self) -> f64 {
        self.unit
    }

    pub const fn stroke_weight(&self) -> f64 {
        self.stroke_weight
    }

    pub const fn diameter(&self) -> f64 {
        self.diameter
    }

    pub const fn hand_length(&self) -> f64 {
        self.hand_length
    }

    pub fn cell_center(&self, cell: CellIndex) -> Point {
        let offset = self.margin + self.unit / 2.0;
        Point::new(
            offset + cell.column as f64 * self.unit,
            offset + cell.row as f64 * self.unit,
        )
    }

    /// Tip of a hand at `angle` degrees on the clock centred at `center`.
    pub fn hand_end(&self, center: Point, angle: f64) -> Point {
        let radians = angle.to_radians();
        Point::new(
            center.x + self.hand_length * radians.cos(),
            center.y + self.hand_length * radians.sin(),
        )
    }

    /// Paints one frame: background, border, clock faces and hands.
    pub fn draw<R, D>(&self, display: &ClockDisplay<D>, renderer: &mut R)
    where
        R: Renderer + ?Sized,
    {
        renderer.background(BACKGROUND);
        renderer.rect(Point::new(0.0, 0.0), self.width, self.height, BORDER);

        let outline = Stroke {
            gray: OUTLINE_GRAY,
            weight: self.stroke_weight,
        };
        let hand = Stroke {
            gray: HAND_GRAY,
            weight: self.stroke_weight,
        };
        for (cell, clock) in display.cells() {
            let center = self.cell_center(cell);
            renderer.circle(center, self.diameter, outline);
            for h in clock.hands() {
                renderer.line(center, self.hand_end(center, h.angle()), hand);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn geometry_at_two_thousand_pixels() {
        let layout = Layout::new(2000.0).unwrap();
        assert!(close(layout.unit(), 96.0));
        assert!(close(layout.diameter(), 76.8));
        assert!((layout.stroke_weight() - 6.0714).abs() < 1e-3);
        assert!(close(layout.hand_length(), 38.4 - layout.stroke_weight()));
        assert!(close(layout.height(), 8.0 * 96.0 + 80.0));
    }

    #[test]
    fn stroke_weight_has_a_floor() {
        let layout = Layout::new(300.0).unwrap();
        assert_eq!(layout.stroke_weight(), 1.0);
    }

    #[test]
    fn cell_centers_step_by_unit() {
        let layout = Layout::new(2000.0).unwrap();
        assert_eq!(layout.cell_center(CellIndex::new(0, 0)), Point::new(88.0, 88.0));
        let corner = layout.cell_center(CellIndex::new(GRID_ROWS - 1, GRID_COLUMNS - 1));
        assert!(close(corner.x, 88.0 + 19.0 * 96.0));
        assert!(close(corner.y, 88.0 + 7.0 * 96.0));
    }

    #[test]
    fn hands_point_along_screen_axes() {
        let layout = Layout::new(1000.0).unwrap();
        let c = Point::new(0.0, 0.0);
        let right = layout.hand_end(c, 0.0);
        assert!(close(right.x, layout.hand_length()) && close(right.y, 0.0));
        // -90° points up on a y-down canvas.
        let up = layout.hand_end(c, -90.0);
        assert!(close(up.x, 0.0) && close(up.y, -layout.hand_length()));
    }

    #[test]
    fn rejects_degenerate_width() {
        assert_eq!(Layout::new(0.0), Err(ClockError::InvalidCanvasWidth(0.0)));
        assert!(Layout::new(f64::NAN).is_err());
    }
}
