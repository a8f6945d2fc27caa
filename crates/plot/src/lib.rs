//! Sampling, coordinate mapping, and plotting for `log_b(a·x + d) = m·x + n`.
//!
//! This crate turns a solved equation into drawable data:
//!
//! - [`sample_curve`] and [`segments`]: sample a curve and split it at
//!   undefined points
//! - [`Bounds`], [`Mapper`]: derive the visible region and map domain
//!   coordinates onto a fixed-size [`Canvas`]
//! - [`Scene`]: the result of one solve-and-render cycle (roots, samples,
//!   bounds, markers)
//!
//! # Features
//!
//! - `plot`: Enables [`PlotApp`] for viewing a scene in an egui window.
//!   This feature adds dependencies on `eframe` and `egui_plot`.

mod sample;
mod scene;
mod viewport;

#[cfg(feature = "plot")]
mod app;

pub use sample::{DEFAULT_CURVE_STEPS, SamplePoint, sample_curve, segments};
pub use scene::{Axes, RootMarker, Scene, SceneConfig, SceneError};
pub use viewport::{Bounds, Canvas, Mapper, ViewportConfig};

#[cfg(feature = "plot")]
pub use app::PlotApp;
