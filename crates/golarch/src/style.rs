//! Visual styling applied when a diagram is rendered.

use std::f32::consts::PI;

use golarch_core::{
    color::Color,
    draw::{ArrowDefinition, Circle, FontWeight, TextDefinition},
};

/// Styling for one rendered diagram.
///
/// The defaults reproduce the classic plotted look: 3000 pt² node markers,
/// 10 pt bold labels, black edges with size-20 arrowheads and a 12 pt title.
///
/// ```
/// use golarch::{RenderStyle, color::Color};
///
/// let style = RenderStyle::new(Color::new("lightblue").unwrap());
/// assert_eq!(style.font_size(), 10);
/// assert!((style.node_radius() - 30.9).abs() < 0.1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    node_color: Color,
    node_size: f32,
    font_size: u16,
    font_weight: FontWeight,
    font_family: String,
    arrow_size: f32,
    edge_color: Color,
    title_size: u16,
    background_color: Color,
    label_color: Option<Color>,
    node_outline: Option<Color>,
}

impl RenderStyle {
    pub const DEFAULT_NODE_SIZE: f32 = 3000.0;
    pub const DEFAULT_FONT_SIZE: u16 = 10;
    pub const DEFAULT_ARROW_SIZE: f32 = 20.0;
    pub const DEFAULT_TITLE_SIZE: u16 = 12;
    pub const NODE_OUTLINE_WIDTH: f32 = 1.0;

    /// Creates the default style with the given node fill color.
    pub fn new(node_color: Color) -> Self {
        Self {
            node_color,
            node_size: Self::DEFAULT_NODE_SIZE,
            font_size: Self::DEFAULT_FONT_SIZE,
            font_weight: FontWeight::Bold,
            font_family: "sans-serif".to_string(),
            arrow_size: Self::DEFAULT_ARROW_SIZE,
            edge_color: Color::default(),
            title_size: Self::DEFAULT_TITLE_SIZE,
            background_color: Color::new("white").expect("'white' is a valid CSS color"),
            label_color: None,
            node_outline: None,
        }
    }

    pub fn with_node_color(mut self, color: Color) -> Self {
        self.node_color = color;
        self
    }

    /// Sets the node marker area in square points.
    pub fn with_node_size(mut self, size: f32) -> Self {
        self.node_size = size;
        self
    }

    pub fn with_font_size(mut self, size: u16) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn with_arrow_size(mut self, size: f32) -> Self {
        self.arrow_size = size;
        self
    }

    pub fn with_edge_color(mut self, color: Color) -> Self {
        self.edge_color = color;
        self
    }

    pub fn with_title_size(mut self, size: u16) -> Self {
        self.title_size = size;
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Sets the label fill. Labels are black when unset.
    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = Some(color);
        self
    }

    /// Outlines every node circle with a thin stroke of the given color.
    pub fn with_node_outline(mut self, color: Color) -> Self {
        self.node_outline = Some(color);
        self
    }

    pub fn node_color(&self) -> Color {
        self.node_color
    }

    pub fn node_size(&self) -> f32 {
        self.node_size
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_weight(&self) -> FontWeight {
        self.font_weight
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn arrow_size(&self) -> f32 {
        self.arrow_size
    }

    pub fn edge_color(&self) -> Color {
        self.edge_color
    }

    pub fn title_size(&self) -> u16 {
        self.title_size
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn label_color(&self) -> Option<Color> {
        self.label_color
    }

    pub fn node_outline(&self) -> Option<Color> {
        self.node_outline
    }

    /// Radius of a node circle. `node_size` is the marker area, so the radius
    /// is `sqrt(node_size / π)`.
    pub fn node_radius(&self) -> f32 {
        (self.node_size / PI).sqrt()
    }

    pub fn node_circle(&self) -> Circle {
        let circle = Circle::new(self.node_radius()).with_fill_color(self.node_color);
        match self.node_outline {
            Some(color) => circle.with_outline(color, Self::NODE_OUTLINE_WIDTH),
            None => circle,
        }
    }

    pub fn label_text(&self) -> TextDefinition {
        let mut text = TextDefinition::new();
        text.set_font_family(&self.font_family);
        text.set_font_size(self.font_size);
        text.set_font_weight(self.font_weight);
        text.set_color(self.label_color);
        text
    }

    pub fn title_text(&self) -> TextDefinition {
        let mut text = TextDefinition::new();
        text.set_font_family(&self.font_family);
        text.set_font_size(self.title_size);
        text
    }

    pub fn arrow(&self) -> ArrowDefinition {
        ArrowDefinition::new(self.edge_color, 1.0, self.arrow_size)
    }
}
