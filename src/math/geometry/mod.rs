// src/math/geometry/mod.rs

pub mod circle;
pub mod polygon;

// Re-Exporte für einen schnellen Zugriff auf die Kern-Geometrietypen
pub use self::circle::{
    InscribedCircleConfig, largest_inscribed_circle, largest_inscribed_circle_of,
    smallest_enclosing_circle, smallest_enclosing_circle_of,
};
pub use self::polygon::{
    AffineTransform, AffineTransformable, ClipStrategy, DifferenceConfig, GeometryResult,
    Orientation, Polygon, PolygonProperties, ShapeGenerators, minkowski_difference,
    minkowski_sum, operations::primitives, star_polygon,
};
