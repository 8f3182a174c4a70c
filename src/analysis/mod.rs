// src/analysis/mod.rs

//! Kompletter Analyse-Lauf: Baseline, A ⊖ B, Kreise, Summen und beide Optimierer.

pub mod config;
pub mod pipeline;
pub mod report;

pub use config::AnalysisConfig;
pub use pipeline::{ShapeAnalysis, reference_shapes};
pub use report::{AnalysisReport, BaselineCheck, CircleFit, ShapeDistance};
