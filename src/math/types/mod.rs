// src/math/types/mod.rs
pub mod bounds;
pub mod circle;

pub use bounds::*;
pub use circle::*;

// Re-export häufig verwendete externe Typen
pub use glam::DVec2;

// Einheitliche Typen für das gesamte Modul
pub type Point2D = DVec2;
