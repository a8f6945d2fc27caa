//! Interactive plots of solved logarithmic equations.
//!
//! # Usage
//!
//! ```text
//! cargo run -p logeq-plot --example plot --features plot -- log2
//! cargo run -p logeq-plot --example plot --features plot -- identity
//! cargo run -p logeq-plot --example plot --features plot -- gap
//! ```
//!
//! # Modes
//!
//! - **log2**: `log₂(x) = 0` on \[0.1, 10\], one root at x = 1.
//! - **identity**: `log₁₀(x + 1) = x` on \[-0.9, 5\], roots near -0.862 and at 0.
//! - **gap**: `log₁₀(1 − x) = 0.5·x` on \[-3, 3\], the log curve ends at x = 1.

use std::error::Error;

use logeq_core::{EquationParams, Interval};
use logeq_plot::{PlotApp, Scene, SceneConfig};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "log2".into());
    let (title, params, interval) = match mode.as_str() {
        "log2" => (
            "log₂(x) = 0",
            EquationParams::new(2.0, 1.0, 0.0, 0.0, 0.0),
            Interval::new(0.1, 10.0),
        ),
        "identity" => (
            "log₁₀(x + 1) = x",
            EquationParams::new(10.0, 1.0, 1.0, 1.0, 0.0),
            Interval::new(-0.9, 5.0),
        ),
        "gap" => (
            "log₁₀(1 − x) = 0.5·x",
            EquationParams::new(10.0, -1.0, 1.0, 0.5, 0.0),
            Interval::new(-3.0, 3.0),
        ),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [log2|identity|gap]");
            std::process::exit(1);
        }
    };

    let scene = Scene::build(&params, interval, &SceneConfig::default())?;
    for root in &scene.roots {
        println!("x ≈ {root:.6}");
    }

    PlotApp::from_scene(&scene).run(title)?;

    Ok(())
}
