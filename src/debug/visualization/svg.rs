// src/debug/visualization/svg.rs
use crate::analysis::AnalysisReport;
use crate::math::{
    error::{MathError, MathResult},
    geometry::Polygon,
    types::{Bounds2D, Circle},
};
use log::info;
use std::path::Path;
use svg::Document;
use svg::node::element::{Circle as SvgCircle, Group, Polygon as SvgPolygon, Rectangle, Style};

// ===================================================================================
// 1. HILFS-STRUCT für die SVG-Erstellung
// ===================================================================================
/// Baut ein SVG-Dokument in Weltkoordinaten (y nach oben).
struct SvgBuilder {
    display_bounds: Bounds2D,
    layers: Group,
    // Relative Größen, abhängig von der Ausdehnung der Szene
    stroke_w_normal: f64,
    stroke_w_thin: f64,
    point_radius: f64,
}

impl SvgBuilder {
    fn new(display_bounds: Bounds2D) -> Self {
        let extent = (display_bounds.width() + display_bounds.height()) / 2.0;

        Self {
            display_bounds,
            // Spiegelung an der x-Achse, damit y wie in der Mathematik nach oben zeigt
            layers: Group::new().set("transform", "scale(1,-1)"),
            stroke_w_normal: extent * 0.005,
            stroke_w_thin: extent * 0.002,
            point_radius: extent * 0.004,
        }
    }

    fn style(&self) -> Style {
        let (normal, thin) = (self.stroke_w_normal, self.stroke_w_thin);
        Style::new(format!(
            r#"
    .background {{ fill: #f0f0f0; }}
    .shape-a {{ fill: rgba(150, 200, 255, 0.3); stroke: #0055aa; stroke-width: {normal}; }}
    .shape-b {{ fill: rgba(255, 200, 150, 0.4); stroke: #cc6600; stroke-width: {normal}; }}
    .difference {{ fill: rgba(150, 255, 150, 0.5); stroke: #00aa00; stroke-width: {normal}; }}
    .inscribed {{ fill: none; stroke: #aa00aa; stroke-width: {thin}; }}
    .enclosing {{ fill: none; stroke: #aa00aa; stroke-width: {thin}; stroke-dasharray: {dash},{dash}; }}
    .sum {{ fill: none; stroke: #555555; stroke-width: {thin}; }}
    .scaled-sum {{ fill: none; stroke: #cc0000; stroke-width: {normal}; }}
    .star-sum {{ fill: none; stroke: #5500aa; stroke-width: {normal}; stroke-dasharray: {dash},{dash}; }}
    .center {{ fill: #aa00aa; }}
"#,
            dash = thin * 4.0,
        ))
    }

    /// Zeichnet ein Polygon; entartete Polygone werden übersprungen.
    fn draw_polygon(&mut self, polygon: &Polygon, class: &str) {
        if polygon.len() < 2 {
            return;
        }
        let points = polygon
            .vertices()
            .iter()
            .map(|p| format!("{:.5},{:.5}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        self.push(|layers| layers.add(SvgPolygon::new().set("points", points).set("class", class)));
    }

    /// Zeichnet einen Kreis samt Mittelpunkt.
    fn draw_circle(&mut self, circle: &Circle, class: &str) {
        let point_radius = self.point_radius;
        self.push(|layers| {
            layers
                .add(
                    SvgCircle::new()
                        .set("cx", circle.center.x)
                        .set("cy", circle.center.y)
                        .set("r", circle.radius)
                        .set("class", class),
                )
                .add(
                    SvgCircle::new()
                        .set("cx", circle.center.x)
                        .set("cy", circle.center.y)
                        .set("r", point_radius)
                        .set("class", "center"),
                )
        });
    }

    fn push(&mut self, draw: impl FnOnce(Group) -> Group) {
        let layers = std::mem::replace(&mut self.layers, Group::new());
        self.layers = draw(layers);
    }

    /// Speichert die SVG-Datei.
    fn save(self, path: &Path, pixel_size: f64) -> MathResult<()> {
        let b = self.display_bounds;
        // viewBox in gespiegelten Koordinaten
        let view_box = (b.min.x, -b.max.y, b.width(), b.height());

        let document = Document::new()
            .set("width", pixel_size)
            .set("height", pixel_size)
            .set("viewBox", view_box)
            .add(self.style())
            .add(
                Rectangle::new()
                    .set("x", view_box.0)
                    .set("y", view_box.1)
                    .set("width", view_box.2)
                    .set("height", view_box.3)
                    .set("class", "background"),
            )
            .add(self.layers);

        svg::save(path, &document)?;
        info!("Debug SVG '{}' wurde erstellt.", path.display());
        Ok(())
    }
}

/// Bounding Box aller gezeichneten Formen, mit 10 % Rand.
fn calculate_display_bounds(report: &AnalysisReport) -> Option<Bounds2D> {
    let mut polygons: Vec<&Polygon> = vec![
        &report.shape_a,
        &report.shape_b,
        &report.difference_sum.shape,
        &report.scale_fit.shape,
    ];
    polygons.extend(report.difference.polygons());
    polygons.extend(report.enclosing.iter().map(|fit| &fit.sum));

    let bounds = Bounds2D::from_points_iter(
        polygons
            .into_iter()
            .flat_map(|p| p.vertices().iter().copied()),
    )?;

    let margin = 0.1 * bounds.width().max(bounds.height()).max(1e-6);
    Some(bounds.expand(margin))
}

// ===================================================================================
// 2. EXPORT
// ===================================================================================
/// Schreibt A, B, X = A ⊖ B, Inkreis/Umkreis und die angepassten Summen als SVG.
pub fn write_analysis_svg(path: impl AsRef<Path>, report: &AnalysisReport) -> MathResult<()> {
    write_analysis_svg_sized(path, report, 800.0)
}

pub fn write_analysis_svg_sized(
    path: impl AsRef<Path>,
    report: &AnalysisReport,
    pixel_size: f64,
) -> MathResult<()> {
    let display_bounds = calculate_display_bounds(report).ok_or_else(|| {
        MathError::GeometricFailure {
            operation: "svg export: report contains no vertices".into(),
        }
    })?;

    let mut svg = SvgBuilder::new(display_bounds);

    svg.draw_polygon(&report.shape_a, "shape-a");
    svg.draw_polygon(&report.shape_b, "shape-b");
    for part in report.difference.polygons() {
        svg.draw_polygon(part, "difference");
    }

    if let Some(fit) = &report.inscribed {
        svg.draw_circle(&fit.circle, "inscribed");
        svg.draw_polygon(&fit.sum, "sum");
    }
    if let Some(fit) = &report.enclosing {
        svg.draw_circle(&fit.circle, "enclosing");
        svg.draw_polygon(&fit.sum, "sum");
    }

    svg.draw_polygon(&report.difference_sum.shape, "sum");
    svg.draw_polygon(&report.scale_fit.shape, "scaled-sum");
    if let Some(best) = report.best_radius_fit() {
        svg.draw_polygon(&best.shape, "star-sum");
    }

    svg.save(path.as_ref(), pixel_size)
}
