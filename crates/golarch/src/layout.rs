//! Manual placement of a diagram onto an SVG canvas.
//!
//! No layout algorithm is involved: every node keeps the plot coordinate it
//! was declared with. [`ManualLayout`] only maps plot units to canvas pixels,
//! flips the y axis, reserves room for labels and the title, and clips edges
//! to the node circles.

use std::collections::HashMap;

use log::debug;

use golarch_core::{
    draw::{Drawable, Text},
    geometry::{Bounds, Insets, Point, Size},
};

use crate::{
    diagram::{Diagram, Node},
    style::RenderStyle,
};

/// Perpendicular distance between the two arrows of a reciprocal edge pair.
const RECIPROCAL_GAP: f32 = 8.0;

/// Vertical space between the title and the topmost node.
const TITLE_GAP: f32 = 16.0;

/// Maps plot coordinates onto the canvas at a fixed scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualLayout {
    scale: f32,
    margin: f32,
}

impl ManualLayout {
    /// Creates a layout drawing `scale` pixels per plot unit, with `margin`
    /// pixels of blank space around the drawing.
    pub fn new(scale: f32, margin: f32) -> Self {
        Self { scale, margin }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Places every node and edge of `diagram` on the canvas.
    pub fn place<'a>(&self, diagram: &'a Diagram, style: &RenderStyle) -> PlacedDiagram<'a> {
        let circle = style.node_circle();
        let label_text = style.label_text();
        let title_text = style.title_text();

        // Plot space to unshifted canvas space; y grows downward on the canvas
        let raw: Vec<(&Node, Point)> = diagram
            .nodes()
            .map(|node| {
                let position = node.position();
                (
                    node,
                    Point::new(position.x() * self.scale, -position.y() * self.scale),
                )
            })
            .collect();

        let content = raw
            .iter()
            .map(|(node, center)| {
                let label_size = Text::new(&label_text, node.label()).size();
                center.to_bounds(circle.size().max(label_size))
            })
            .reduce(|acc, bounds| acc.merge(&bounds))
            .unwrap_or_default();

        let title_size = Text::new(&title_text, diagram.title()).size();
        let title_band = title_size.height() + TITLE_GAP;

        let padding = Insets::uniform(self.margin).with_top(self.margin + title_band);
        let inner_width = content.width().max(title_size.width());
        let canvas = Size::new(inner_width, content.height()).add_padding(padding);

        // Centre the content horizontally when the title is the wider element
        let offset = Point::new(
            padding.left() + (inner_width - content.width()) / 2.0 - content.min_x(),
            padding.top() - content.min_y(),
        );

        let nodes: Vec<PlacedNode<'a>> = raw
            .into_iter()
            .map(|(node, center)| PlacedNode {
                node,
                center: center.add_point(offset),
            })
            .collect();

        let centers: HashMap<&str, Point> = nodes
            .iter()
            .map(|placed| (placed.node.label(), placed.center))
            .collect();

        let edges = diagram
            .edges()
            .map(|edge| {
                let source = edge.source().label();
                let target = edge.target().label();
                let source_center = centers[source];
                let target_center = centers[target];

                let mut start = circle.find_intersection(source_center, target_center);
                let mut end = circle.find_intersection(target_center, source_center);

                let reciprocal = diagram.has_edge(target, source);
                if reciprocal {
                    if let Some(direction) = target_center.sub_point(source_center).normalize() {
                        let shift = direction.perpendicular().scale(RECIPROCAL_GAP / 2.0);
                        start = start.add_point(shift);
                        end = end.add_point(shift);
                    }
                }

                PlacedEdge {
                    source,
                    target,
                    start,
                    end,
                    reciprocal,
                }
            })
            .collect();

        let title_position = Point::new(canvas.width() / 2.0, self.margin + title_size.height() / 2.0);

        debug!(
            title = diagram.title(),
            width = canvas.width(),
            height = canvas.height();
            "Diagram placed"
        );

        PlacedDiagram {
            title: diagram.title(),
            title_position,
            canvas,
            nodes,
            edges,
        }
    }
}

impl Default for ManualLayout {
    fn default() -> Self {
        Self::new(160.0, 40.0)
    }
}

/// A node with its centre in canvas coordinates.
#[derive(Debug, Clone)]
pub struct PlacedNode<'a> {
    node: &'a Node,
    center: Point,
}

impl<'a> PlacedNode<'a> {
    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn center(&self) -> Point {
        self.center
    }
}

/// An edge clipped to the boundaries of its two node circles.
#[derive(Debug, Clone)]
pub struct PlacedEdge<'a> {
    source: &'a str,
    target: &'a str,
    start: Point,
    end: Point,
    reciprocal: bool,
}

impl<'a> PlacedEdge<'a> {
    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn target(&self) -> &'a str {
        self.target
    }

    /// Point on the source circle where the arrow starts.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Point on the target circle where the arrowhead tip lands.
    pub fn end(&self) -> Point {
        self.end
    }

    /// True when the opposite edge also exists and this arrow is drawn offset.
    pub fn is_reciprocal(&self) -> bool {
        self.reciprocal
    }
}

/// A diagram with every element positioned on a canvas.
#[derive(Debug, Clone)]
pub struct PlacedDiagram<'a> {
    title: &'a str,
    title_position: Point,
    canvas: Size,
    nodes: Vec<PlacedNode<'a>>,
    edges: Vec<PlacedEdge<'a>>,
}

impl<'a> PlacedDiagram<'a> {
    pub fn title(&self) -> &'a str {
        self.title
    }

    /// Centre of the title text.
    pub fn title_position(&self) -> Point {
        self.title_position
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Canvas bounds, anchored at the origin.
    pub fn canvas_bounds(&self) -> Bounds {
        Bounds::new_from_top_left(Point::default(), self.canvas)
    }

    pub fn nodes(&self) -> &[PlacedNode<'a>] {
        &self.nodes
    }

    pub fn edges(&self) -> &[PlacedEdge<'a>] {
        &self.edges
    }

    /// Returns the placed node with the given label.
    pub fn node(&self, label: &str) -> Option<&PlacedNode<'a>> {
        self.nodes.iter().find(|placed| placed.node.label() == label)
    }
}
