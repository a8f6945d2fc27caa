use anyhow::{Context, Result};
use clap::Parser;
use logeq_core::{EquationParams, Interval};
use logeq_solvers::{equation::scan, solve_with};

mod report;

use report::Report;

#[derive(Parser, Debug)]
#[command(name = "logeq")]
#[command(about = "Find the real roots of log_b(a·x + d) = m·x + n on an interval")]
struct Cli {
    /// Logarithm base (positive, not 1)
    #[arg(short, default_value_t = 2.0, allow_negative_numbers = true)]
    b: f64,
    /// Slope of the logarithm's argument
    #[arg(short, default_value_t = 1.0, allow_negative_numbers = true)]
    a: f64,
    /// Offset of the logarithm's argument
    #[arg(short, default_value_t = 0.0, allow_negative_numbers = true)]
    d: f64,
    /// Slope of the line
    #[arg(short, default_value_t = 0.0, allow_negative_numbers = true)]
    m: f64,
    /// Intercept of the line
    #[arg(short, default_value_t = 0.0, allow_negative_numbers = true)]
    n: f64,
    /// Lower bound of the search interval
    #[arg(long, default_value_t = 0.1, allow_negative_numbers = true)]
    x_min: f64,
    /// Upper bound of the search interval
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    x_max: f64,
    /// Number of scan intervals
    #[arg(long, default_value_t = 400)]
    steps: usize,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
    /// Open an interactive plot of both curves
    #[cfg(feature = "plot")]
    #[arg(long)]
    plot: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn params(&self) -> EquationParams {
        EquationParams::new(self.b, self.a, self.d, self.m, self.n)
    }

    /// Returns the search interval, swapping reversed bounds.
    fn interval(&self) -> Interval {
        let interval = Interval::ordered(self.x_min, self.x_max);
        if interval.min != self.x_min {
            log::warn!(
                "x-min {} is not below x-max {}, searching [{}, {}]",
                self.x_min,
                self.x_max,
                interval.min,
                interval.max
            );
        }
        interval
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let params = cli.params();
    let interval = cli.interval();
    let config = scan::Config::default()
        .with_steps(cli.steps)
        .context("invalid --steps")?;

    let roots = solve_with(&params, interval, &config)?;
    log::info!("{} root(s) on [{}, {}]", roots.len(), interval.min, interval.max);

    let report = Report::new(params, interval, roots.into_vec());
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    #[cfg(feature = "plot")]
    if cli.plot {
        plot(&params, interval, config)?;
    }

    Ok(())
}

#[cfg(feature = "plot")]
fn plot(params: &EquationParams, interval: Interval, scan: scan::Config) -> Result<()> {
    use logeq_plot::{PlotApp, Scene, SceneConfig};

    let config = SceneConfig {
        scan,
        ..SceneConfig::default()
    };
    let scene = Scene::build(params, interval, &config)?;
    PlotApp::from_scene(&scene)
        .run("logeq")
        .map_err(|err| anyhow::anyhow!("cannot open plot window: {err}"))
}
