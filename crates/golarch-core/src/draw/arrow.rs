//! Directed edges and their SVG arrowhead markers.
//!
//! An [`ArrowDefinition`] holds the stroke and arrowhead scale shared by every
//! edge of a diagram. The exporter collects marker definitions once per
//! document through [`create_marker_definitions`], and each [`Arrow`] refers
//! to its marker by id.

use std::collections::HashSet;

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{LayeredOutput, RenderLayer},
    geometry::Point,
};

/// Arrowhead length relative to the configured arrow size.
const HEAD_LENGTH_FACTOR: f32 = 0.6;

/// Visual properties of an edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowDefinition {
    color: Color,
    width: f32,
    head_size: f32,
}

impl ArrowDefinition {
    /// Creates a definition with the given stroke color, stroke width and
    /// arrowhead scale.
    pub fn new(color: Color, width: f32, head_size: f32) -> Self {
        Self {
            color,
            width,
            head_size,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn head_size(&self) -> f32 {
        self.head_size
    }

    /// Length of the rendered arrowhead in canvas units.
    pub fn head_length(&self) -> f32 {
        self.head_size * HEAD_LENGTH_FACTOR
    }

    /// Returns the id of the marker drawn at the end of each arrow.
    pub fn marker_id(&self) -> String {
        format!(
            "arrowhead-{}-{}",
            self.color.to_id_safe_string(),
            self.head_size.round() as i64
        )
    }

    fn marker(&self) -> svg_element::Marker {
        let head_length = self.head_length();
        svg_element::Marker::new()
            .set("id", self.marker_id())
            .set("viewBox", "0 0 10 10")
            .set("refX", 10)
            .set("refY", 5)
            .set("markerUnits", "userSpaceOnUse")
            .set("markerWidth", head_length)
            .set("markerHeight", head_length)
            .set("orient", "auto")
            .add(
                svg_element::Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", self.color.to_string()),
            )
    }
}

impl Default for ArrowDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0, 20.0)
    }
}

/// Creates one marker per distinct arrow definition.
pub fn create_marker_definitions<'a, I>(definitions: I) -> svg_element::Definitions
where
    I: IntoIterator<Item = &'a ArrowDefinition>,
{
    let mut seen = HashSet::new();
    let mut defs = svg_element::Definitions::new();

    for definition in definitions {
        if seen.insert(definition.marker_id()) {
            defs = defs.add(definition.marker());
        }
    }

    defs
}

/// A straight edge drawn with an [`ArrowDefinition`].
#[derive(Debug, Clone)]
pub struct Arrow<'a> {
    definition: &'a ArrowDefinition,
}

impl<'a> Arrow<'a> {
    pub fn new(definition: &'a ArrowDefinition) -> Self {
        Self { definition }
    }

    /// Renders the arrow from `start` to `end`, with the arrowhead tip at `end`.
    pub fn render_between(&self, start: Point, end: Point) -> LayeredOutput {
        let path = svg_element::Path::new()
            .set("d", create_path_data_from_points(start, end))
            .set("fill", "none")
            .set("stroke", self.definition.color().to_string())
            .set("stroke-width", self.definition.width())
            .set(
                "marker-end",
                format!("url(#{})", self.definition.marker_id()),
            );

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Arrow, Box::new(path));
        output
    }
}

/// Create a path data string from two points
pub fn create_path_data_from_points(start: Point, end: Point) -> String {
    format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y())
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_head_length_scales_with_size() {
        let def = ArrowDefinition::new(Color::default(), 1.0, 20.0);
        assert_approx_eq!(f32, def.head_length(), 12.0);
    }

    #[test]
    fn test_marker_definitions_are_deduplicated() {
        let black = ArrowDefinition::default();
        let red = ArrowDefinition::new(Color::new("red").unwrap(), 1.0, 20.0);
        let defs = create_marker_definitions([&black, &black, &red]).to_string();

        assert_eq!(defs.matches("<marker").count(), 2);
        assert!(defs.contains(&black.marker_id()));
        assert!(defs.contains(&red.marker_id()));
    }

    #[test]
    fn test_render_between_references_marker() {
        let def = ArrowDefinition::default();
        let output = Arrow::new(&def).render_between(Point::new(0.0, 0.0), Point::new(10.0, 20.0));
        assert_eq!(output.layer_len(RenderLayer::Arrow), 1);

        let rendered = output.render()[0].to_string();
        assert!(rendered.contains("M 0 0 L 10 20"));
        assert!(rendered.contains(&format!("url(#{})", def.marker_id())));
    }
}
