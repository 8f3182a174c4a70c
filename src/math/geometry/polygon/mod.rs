// src/math/geometry/polygon/mod.rs

pub mod builder;
pub mod core; // Enthält die Polygon-Struktur selbst
pub mod properties; // Enthält den PolygonProperties-Trait
pub mod result; // Getaggtes Ergebnis: leer, einzeln, mehrteilig

pub mod operations;
pub mod transformations;

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Polygon-Elemente
pub use self::builder::{ShapeGenerators, star_polygon};
pub use self::core::Polygon;
pub use self::properties::{Orientation, PolygonProperties};
pub use self::result::GeometryResult;

pub use self::operations::{
    clipping::{ClipStrategy, HalfPlane, PolygonClipper},
    minkowski_difference::{DifferenceConfig, minkowski_difference},
    minkowski_sum::minkowski_sum,
};
pub use self::transformations::affine::{AffineTransform, AffineTransformable};
