pub mod error;
pub mod geometry;
pub mod optimization;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{MathError, MathResult},
        geometry::{
            AffineTransformable, ClipStrategy, DifferenceConfig, GeometryResult,
            InscribedCircleConfig, Polygon, PolygonProperties, ShapeGenerators,
            largest_inscribed_circle_of, minkowski_difference, minkowski_sum, primitives,
            smallest_enclosing_circle_of, star_polygon,
        },
        optimization::{
            RadiusSearchConfig, ScalarSearchConfig, SimplexConfig, optimize_radii, optimize_scale,
        },
        types::{Bounds2D, Circle, Point2D},
    };
}
