// src/math/geometry/circle/mod.rs

//! Inkreis (Rastersuche) und Umkreis (Welzl) beliebiger einfacher Polygone.

pub mod enclosing;
pub mod inscribed;

pub use enclosing::{
    smallest_enclosing_circle, smallest_enclosing_circle_of, smallest_enclosing_circle_of_points,
};
pub use inscribed::{InscribedCircleConfig, largest_inscribed_circle, largest_inscribed_circle_of};
