use logeq_core::{Curve, EquationParams, Interval};

use crate::SamplePoint;

/// Settings for deriving the visible y-range from both curves.
///
/// The defaults probe 500 intervals and pad the observed range by 12% plus
/// 0.5 on each side. When neither curve is defined anywhere, `fallback` is
/// used before padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportConfig {
    pub probes: usize,
    pub pad_fraction: f64,
    pub pad_min: f64,
    pub fallback: [f64; 2],
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            probes: 500,
            pad_fraction: 0.12,
            pad_min: 0.5,
            fallback: [-5.0, 5.0],
        }
    }
}

/// The visible region in domain coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Probes `y1` and `y2` across `interval` and returns padded bounds that
    /// contain every finite value seen.
    #[must_use]
    pub fn probe(params: &EquationParams, interval: Interval, config: &ViewportConfig) -> Self {
        let log = params.log_curve();
        let line = params.line();
        let probes = config.probes.max(1);

        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for i in 0..=probes {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / probes as f64;
            let x = interval.min + interval.width() * t;

            for y in [log.eval(x), line.eval(x)].into_iter().flatten() {
                if y.is_finite() {
                    y_min = y_min.min(y);
                    y_max = y_max.max(y);
                }
            }
        }

        if !y_min.is_finite() || !y_max.is_finite() {
            [y_min, y_max] = config.fallback;
        }

        let pad = (y_max - y_min) * config.pad_fraction + config.pad_min;

        Self {
            x_min: interval.min,
            x_max: interval.max,
            y_min: y_min - pad,
            y_max: y_max + pad,
        }
    }
}

/// Size of the drawing surface in pixels.
///
/// Defaults to 760×380.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 760.0,
            height: 380.0,
        }
    }
}

/// Rows further than this outside the canvas are not drawn.
const OVERFLOW_ROWS: f64 = 2000.0;

/// Affine mapping from domain coordinates to canvas pixels.
///
/// `x_min` maps to column 0 and `x_max` to `width`; `y_max` maps to row 0
/// and `y_min` to `height`, so increasing y moves up the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mapper {
    bounds: Bounds,
    canvas: Canvas,
}

impl Mapper {
    #[must_use]
    pub fn new(bounds: Bounds, canvas: Canvas) -> Self {
        Self { bounds, canvas }
    }

    /// Returns the pixel column of `x`.
    #[must_use]
    pub fn map_x(&self, x: f64) -> f64 {
        let Bounds { x_min, x_max, .. } = self.bounds;
        (x - x_min) / (x_max - x_min) * self.canvas.width
    }

    /// Returns the pixel row of `y`.
    #[must_use]
    pub fn map_y(&self, y: f64) -> f64 {
        let Bounds { y_min, y_max, .. } = self.bounds;
        self.canvas.height - (y - y_min) / (y_max - y_min) * self.canvas.height
    }

    /// Maps a domain point to `[column, row]`.
    #[must_use]
    pub fn map(&self, [x, y]: [f64; 2]) -> [f64; 2] {
        [self.map_x(x), self.map_y(y)]
    }

    /// Maps samples to pixel polylines.
    ///
    /// A line is broken at undefined samples and at samples whose row lies
    /// more than 2000 pixels above or below the canvas.
    #[must_use]
    pub fn polylines(&self, samples: &[SamplePoint]) -> Vec<Vec<[f64; 2]>> {
        let mut lines = Vec::new();
        let mut current = Vec::new();

        for sample in samples {
            let pixel = sample
                .defined()
                .map(|point| self.map(point))
                .filter(|[_, row]| self.is_drawable_row(*row));

            match pixel {
                Some(pixel) => current.push(pixel),
                None if !current.is_empty() => lines.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }

        lines
    }

    /// Returns the canvas this mapper draws onto.
    #[must_use]
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn is_drawable_row(&self, row: f64) -> bool {
        (-OVERFLOW_ROWS..=self.canvas.height + OVERFLOW_ROWS).contains(&row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn probe_pads_observed_range() {
        // y1 undefined everywhere, y2 = x on [0, 10].
        let params = EquationParams::new(2.0, 0.0, -1.0, 1.0, 0.0);
        let bounds = Bounds::probe(&params, Interval::new(0.0, 10.0), &ViewportConfig::default());

        // Range 10 padded by 10 * 0.12 + 0.5 = 1.7.
        assert_relative_eq!(bounds.y_min, -1.7, epsilon = 1e-12);
        assert_relative_eq!(bounds.y_max, 11.7, epsilon = 1e-12);
        assert_relative_eq!(bounds.x_min, 0.0);
        assert_relative_eq!(bounds.x_max, 10.0);
    }

    #[test]
    fn probe_includes_both_curves() {
        // y1 = log2(x) reaches log2(0.25) = -2 at the left end, y2 = 1.
        let params = EquationParams::new(2.0, 1.0, 0.0, 0.0, 1.0);
        let bounds = Bounds::probe(&params, Interval::new(0.25, 2.0), &ViewportConfig::default());

        let pad = 3.0 * 0.12 + 0.5;
        assert_relative_eq!(bounds.y_min, -2.0 - pad, epsilon = 1e-12);
        assert_relative_eq!(bounds.y_max, 1.0 + pad, epsilon = 1e-12);
    }

    #[test]
    fn probe_falls_back_without_finite_values() {
        let params = EquationParams::new(2.0, 0.0, -1.0, f64::INFINITY, 0.0);
        let bounds = Bounds::probe(&params, Interval::new(0.0, 1.0), &ViewportConfig::default());

        let pad = 10.0 * 0.12 + 0.5;
        assert_relative_eq!(bounds.y_min, -5.0 - pad, epsilon = 1e-12);
        assert_relative_eq!(bounds.y_max, 5.0 + pad, epsilon = 1e-12);
    }

    fn unit_mapper() -> Mapper {
        let bounds = Bounds {
            x_min: -1.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 10.0,
        };
        Mapper::new(
            bounds,
            Canvas {
                width: 200.0,
                height: 100.0,
            },
        )
    }

    #[test]
    fn maps_corners_with_inverted_y() {
        let mapper = unit_mapper();

        assert_eq!(mapper.map([-1.0, 0.0]), [0.0, 100.0]);
        assert_eq!(mapper.map([1.0, 10.0]), [200.0, 0.0]);
        assert_eq!(mapper.map([0.0, 5.0]), [100.0, 50.0]);
    }

    #[test]
    fn increasing_y_decreases_row() {
        let mapper = unit_mapper();
        assert!(mapper.map_y(7.0) < mapper.map_y(3.0));
    }

    #[test]
    fn polylines_break_at_gaps_and_overflow() {
        let mapper = unit_mapper();
        let samples = [
            SamplePoint { x: -1.0, y: Some(0.0) },
            SamplePoint { x: -0.5, y: Some(5.0) },
            SamplePoint { x: 0.0, y: None },
            SamplePoint { x: 0.25, y: Some(1.0) },
            // Row 100 - 1000 * 10 = -9900, far above the canvas.
            SamplePoint { x: 0.5, y: Some(1000.0) },
            SamplePoint { x: 1.0, y: Some(10.0) },
        ];

        let lines = mapper.polylines(&samples);
        assert_eq!(
            lines,
            vec![
                vec![[0.0, 100.0], [50.0, 50.0]],
                vec![[125.0, 90.0]],
                vec![[200.0, 0.0]],
            ]
        );
    }
}
