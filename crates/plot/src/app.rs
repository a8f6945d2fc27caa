//! Interactive egui window for a solved equation.
//!
//! See [`PlotApp`] for usage.

use eframe::egui::{self, Color32};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::{Scene, segments};

const LOG_COLOR: Color32 = Color32::from_rgb(220, 53, 69);
const LINE_COLOR: Color32 = Color32::from_rgb(15, 23, 42);
const ROOT_COLOR: Color32 = Color32::from_rgb(13, 110, 253);

/// A runnable egui application that plots `y1`, `y2`, and the roots of a [`Scene`].
///
/// egui handles zooming and panning, so curves are drawn in domain
/// coordinates rather than through the scene's [`Mapper`](crate::Mapper).
///
/// # Example
///
/// ```ignore
/// let scene = Scene::build(&params, interval, &SceneConfig::default())?;
/// PlotApp::from_scene(&scene).run("log₂(x) = 0")?;
/// ```
pub struct PlotApp {
    log_segments: Vec<Vec<[f64; 2]>>,
    line_segments: Vec<Vec<[f64; 2]>>,
    roots: Vec<[f64; 2]>,
}

impl PlotApp {
    /// Collects the drawable pieces of a scene.
    #[must_use]
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            log_segments: segments(&scene.log_samples),
            line_segments: segments(&scene.line_samples),
            roots: scene
                .root_markers()
                .iter()
                .map(|marker| [marker.x, marker.y])
                .collect(),
        }
    }

    /// Opens a blocking egui window displaying the scene.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn run(self, title: &str) -> Result<(), eframe::Error> {
        log::debug!(
            "opening plot window with {} root marker(s)",
            self.roots.len()
        );
        eframe::run_native(
            title,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("logeq")
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    for segment in &self.line_segments {
                        let points: PlotPoints = segment.iter().copied().collect();
                        plot_ui.line(
                            Line::new(points)
                                .name("y2 = m·x + n")
                                .color(LINE_COLOR)
                                .width(2.5),
                        );
                    }

                    for segment in &self.log_segments {
                        let points: PlotPoints = segment.iter().copied().collect();
                        plot_ui.line(
                            Line::new(points)
                                .name("y1 = log_b(a·x + d)")
                                .color(LOG_COLOR)
                                .width(2.5),
                        );
                    }

                    if !self.roots.is_empty() {
                        let points: PlotPoints = self.roots.iter().copied().collect();
                        plot_ui.points(
                            Points::new(points)
                                .name("roots")
                                .color(ROOT_COLOR)
                                .radius(4.5),
                        );
                    }
                });
        });
    }
}
