// ./src/main.rs
use log::{error, info};
use minkowski_fit::{
    analysis::{AnalysisConfig, ShapeAnalysis},
    debug::visualization::write_analysis_svg,
    math::MathResult,
};
use std::process::ExitCode;

const CRATE_NAME: &str = env!("CARGO_CRATE_NAME");

fn init_logging() {
    let level = if cfg!(debug_assertions) { "info" } else { "warn" };
    let filter = format!("{CRATE_NAME}={level}");

    // RUST_LOG hat Vorrang vor dem Standardfilter
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

fn run() -> MathResult<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => AnalysisConfig::from_json_file(&path)?,
        None => AnalysisConfig::default(),
    };

    let analysis = ShapeAnalysis::from_config(config)?;
    info!(
        "Analysing |A| = {} vertices, |B| = {} vertices",
        analysis.shape_a().len(),
        analysis.shape_b().len()
    );

    let report = analysis.run()?;
    info!(
        "Baseline {:.6}, best derived distance {:.6}",
        report.baseline_distance,
        report.best_distance()
    );

    if let Some(path) = &analysis.config().svg_output {
        write_analysis_svg(path, &report)?;
    }

    println!("{}", report.to_json_pretty()?);
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("minkowski_fit: {err}");
            ExitCode::FAILURE
        }
    }
}
