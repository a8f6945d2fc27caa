use thiserror::Error;

use logeq_core::{DomainNote, EquationParams, Interval};
use logeq_solvers::{RootSet, SolveError, equation::scan, solve_with};

use crate::{
    Bounds, Canvas, DEFAULT_CURVE_STEPS, Mapper, SamplePoint, ViewportConfig, sample_curve,
};

/// Errors that can occur when building a [`Scene`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SceneError {
    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error("interval [{min}, {max}] must be finite with max > min")]
    InvalidInterval { min: f64, max: f64 },
}

/// Settings for a solve-and-render cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub canvas: Canvas,
    pub viewport: ViewportConfig,
    /// Number of intervals used to sample each curve for drawing.
    pub curve_steps: usize,
    pub scan: scan::Config,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            viewport: ViewportConfig::default(),
            curve_steps: DEFAULT_CURVE_STEPS,
            scan: scan::Config::default(),
        }
    }
}

/// A root placed on the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMarker {
    /// The root.
    pub x: f64,
    /// Height of the marker, `y2(x)`.
    pub y: f64,
    /// Marker position in canvas pixels.
    pub pixel: [f64; 2],
}

/// Pixel positions of the coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axes {
    /// Row where `y = 0`.
    pub x_axis_row: f64,
    /// Column where `x = 0`.
    pub y_axis_column: f64,
}

/// Everything a renderer needs to draw one solved equation.
///
/// A scene is plain data: it never touches a display surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub params: EquationParams,
    pub interval: Interval,
    pub roots: RootSet,
    pub bounds: Bounds,
    pub canvas: Canvas,
    /// Samples of `y1(x) = log_b(a·x + d)`.
    pub log_samples: Vec<SamplePoint>,
    /// Samples of `y2(x) = m·x + n`.
    pub line_samples: Vec<SamplePoint>,
}

impl Scene {
    /// Solves the equation and samples both curves for display.
    ///
    /// # Errors
    ///
    /// Returns an error if the base is invalid or the interval is not finite
    /// and increasing. Callers holding reversed bounds should pass them
    /// through [`Interval::ordered`] first.
    pub fn build(
        params: &EquationParams,
        interval: Interval,
        config: &SceneConfig,
    ) -> Result<Self, SceneError> {
        if !interval.is_valid() {
            return Err(SceneError::InvalidInterval {
                min: interval.min,
                max: interval.max,
            });
        }

        let roots = solve_with(params, interval, &config.scan)?;
        let bounds = Bounds::probe(params, interval, &config.viewport);
        log::debug!(
            "scene with {} root(s), y range [{}, {}]",
            roots.len(),
            bounds.y_min,
            bounds.y_max
        );

        Ok(Self {
            params: *params,
            interval,
            roots,
            bounds,
            canvas: config.canvas,
            log_samples: sample_curve(&params.log_curve(), interval, config.curve_steps),
            line_samples: sample_curve(&params.line(), interval, config.curve_steps),
        })
    }

    /// Returns the domain-to-pixel mapping for this scene.
    #[must_use]
    pub fn mapper(&self) -> Mapper {
        Mapper::new(self.bounds, self.canvas)
    }

    /// Returns `y1` as pixel polylines.
    #[must_use]
    pub fn log_polylines(&self) -> Vec<Vec<[f64; 2]>> {
        self.mapper().polylines(&self.log_samples)
    }

    /// Returns `y2` as pixel polylines.
    #[must_use]
    pub fn line_polylines(&self) -> Vec<Vec<[f64; 2]>> {
        self.mapper().polylines(&self.line_samples)
    }

    /// Returns a marker for every root, placed on the line `y2`.
    #[must_use]
    pub fn root_markers(&self) -> Vec<RootMarker> {
        let line = self.params.line();
        let mapper = self.mapper();

        self.roots
            .iter()
            .filter_map(|&x| {
                let y = line.at(x);
                y.is_finite().then(|| RootMarker {
                    x,
                    y,
                    pixel: mapper.map([x, y]),
                })
            })
            .collect()
    }

    /// Returns where the coordinate axes cross the canvas.
    #[must_use]
    pub fn axes(&self) -> Axes {
        let mapper = self.mapper();
        Axes {
            x_axis_row: mapper.map_y(0.0),
            y_axis_column: mapper.map_x(0.0),
        }
    }

    /// Describes where the logarithm is defined.
    #[must_use]
    pub fn domain_note(&self) -> DomainNote {
        self.params.domain_note()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use logeq_core::InvalidBase;

    fn log2_scene() -> Scene {
        let params = EquationParams::new(2.0, 1.0, 0.0, 0.0, 0.0);
        Scene::build(&params, Interval::new(0.1, 10.0), &SceneConfig::default())
            .expect("valid scene")
    }

    #[test]
    fn builds_samples_and_roots() {
        let scene = log2_scene();

        assert_eq!(scene.log_samples.len(), DEFAULT_CURVE_STEPS + 1);
        assert_eq!(scene.line_samples.len(), DEFAULT_CURVE_STEPS + 1);
        assert_eq!(scene.roots.len(), 1);
        assert_relative_eq!(scene.roots[0], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn root_markers_sit_on_the_line() {
        let scene = log2_scene();
        let markers = scene.root_markers();

        assert_eq!(markers.len(), 1);
        assert_relative_eq!(markers[0].y, 0.0);
        assert_relative_eq!(markers[0].pixel[1], scene.axes().x_axis_row);
    }

    #[test]
    fn polylines_stay_within_overflow_rows() {
        let scene = log2_scene();
        let height = scene.canvas.height;

        for line in scene.log_polylines().iter().chain(&scene.line_polylines()) {
            for [column, row] in line {
                assert!((0.0..=scene.canvas.width + 1e-9).contains(column));
                assert!(*row >= -2000.0 && *row <= height + 2000.0);
            }
        }
    }

    #[test]
    fn domain_gap_splits_log_curve() {
        // log10(1 - x) is undefined for x ≥ 1.
        let params = EquationParams::new(10.0, -1.0, 1.0, 0.0, 0.0);
        let scene = Scene::build(&params, Interval::new(-2.0, 3.0), &SceneConfig::default())
            .expect("valid scene");

        let polylines = scene.log_polylines();
        assert_eq!(polylines.len(), 1);
        assert!(scene.log_samples.last().unwrap().y.is_none());
        assert_eq!(scene.line_polylines().len(), 1);
    }

    #[test]
    fn rejects_invalid_base() {
        let params = EquationParams::new(1.0, 1.0, 0.0, 0.0, 0.0);
        let err = Scene::build(&params, Interval::new(0.1, 10.0), &SceneConfig::default())
            .unwrap_err();

        assert_eq!(
            err,
            SceneError::Solve(SolveError::InvalidBase(InvalidBase { base: 1.0 }))
        );
    }

    #[test]
    fn rejects_invalid_interval() {
        let params = EquationParams::new(2.0, 1.0, 0.0, 0.0, 0.0);
        let err = Scene::build(&params, Interval::new(5.0, 5.0), &SceneConfig::default())
            .unwrap_err();

        assert!(matches!(err, SceneError::InvalidInterval { .. }));
    }

    #[test]
    fn undefined_log_curve_still_renders_line() {
        let params = EquationParams::new(2.0, 0.0, -1.0, 1.0, 0.0);
        let scene = Scene::build(&params, Interval::new(-1.0, 1.0), &SceneConfig::default())
            .expect("valid scene");

        assert!(scene.roots.is_empty());
        assert!(scene.log_polylines().is_empty());
        assert_eq!(scene.line_polylines().len(), 1);
        assert_eq!(scene.domain_note(), DomainNote::ConstantArgument);
    }
}
