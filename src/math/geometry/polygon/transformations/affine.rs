use super::super::{Polygon, PolygonProperties};
use crate::math::{
    error::{MathError, MathResult},
    types::*,
};

/// Affine Transformations-Matrix (3x3 für 2D)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    // Matrix in der Form: [a c tx]
    //                    [b d ty]
    //                    [0 0  1]
    pub a: f64,  // x-Skalierung
    pub b: f64,  // y-Scherung in x
    pub c: f64,  // x-Scherung in y
    pub d: f64,  // y-Skalierung
    pub tx: f64, // x-Translation
    pub ty: f64, // y-Translation
}

impl AffineTransform {
    /// Translation
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            tx,
            ty,
        }
    }

    /// Skalierung
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            b: 0.0,
            c: 0.0,
            d: sy,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Uniform Skalierung um einen Punkt
    pub fn uniform_scale_around(factor: f64, origin: Point2D) -> Self {
        let translate_back = Self::translation(origin.x, origin.y);
        let translate_to_origin = Self::translation(-origin.x, -origin.y);

        translate_back
            .compose(&Self::scale(factor, factor))
            .compose(&translate_to_origin)
    }

    /// Transformations-Komposition (`self` nach `other`)
    pub fn compose(&self, other: &AffineTransform) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            tx: self.a * other.tx + self.c * other.ty + self.tx,
            ty: self.b * other.tx + self.d * other.ty + self.ty,
        }
    }

    /// Transformiert einen Punkt
    pub fn transform_point(&self, point: Point2D) -> Point2D {
        Point2D::new(
            self.a * point.x + self.c * point.y + self.tx,
            self.b * point.x + self.d * point.y + self.ty,
        )
    }
}

/// Trait für affine Transformationen
pub trait AffineTransformable {
    fn transform(&self, transform: &AffineTransform) -> Self
    where
        Self: Sized;

    /// Uniforme Skalierung um den Flächenschwerpunkt.
    ///
    /// Nicht-positive oder nicht-endliche Faktoren sind Aufruferfehler.
    fn scale_about_centroid(&self, factor: f64) -> MathResult<Self>
    where
        Self: Sized;
}

impl AffineTransformable for Polygon {
    fn transform(&self, transform: &AffineTransform) -> Self {
        Polygon::new(
            self.vertices()
                .iter()
                .map(|&v| transform.transform_point(v))
                .collect(),
        )
    }

    fn scale_about_centroid(&self, factor: f64) -> MathResult<Self> {
        if !(factor > 0.0 && factor.is_finite()) {
            return Err(MathError::invalid_parameter(
                "scale",
                format!("factor must be positive and finite, got {factor}"),
            ));
        }

        let Some(origin) = self.geometric_centroid() else {
            return Ok(Polygon::empty());
        };

        Ok(self.transform(&AffineTransform::uniform_scale_around(factor, origin)))
    }
}
