use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

/// A filled circle marking a node.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    radius: f32,
    fill_color: Color,
    line_color: Option<Color>,
    line_width: f32,
}

impl Circle {
    /// Creates a circle with the given radius, a black fill and no outline.
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            fill_color: Color::default(),
            line_color: None,
            line_width: 1.0,
        }
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Adds an outline of the given color and width.
    pub fn with_outline(mut self, color: Color, width: f32) -> Self {
        self.line_color = Some(color);
        self.line_width = width;
        self
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// Finds where the segment from `center` towards `external` leaves the circle.
    ///
    /// Returns `center` when both points coincide.
    pub fn find_intersection(&self, center: Point, external: Point) -> Point {
        match external.sub_point(center).normalize() {
            Some(direction) => center.add_point(direction.scale(self.radius)),
            None => center,
        }
    }
}

impl Drawable for Circle {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut circle = svg_element::Circle::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("r", self.radius)
            .set("fill", self.fill_color.to_string())
            .set("fill-opacity", self.fill_color.alpha());

        if let Some(line_color) = self.line_color {
            circle = circle
                .set("stroke", line_color.to_string())
                .set("stroke-width", self.line_width);
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Node, Box::new(circle));
        output
    }

    fn size(&self) -> Size {
        Size::new(self.radius * 2.0, self.radius * 2.0)
    }
}
