//! Drawable components for architecture diagrams.
//!
//! Every element placed on the canvas implements [`Drawable`], which renders
//! the element at an absolute position into a [`LayeredOutput`]. Layers keep
//! arrows underneath the node circles and labels on top of everything.
//!
//! - [`Circle`] - A filled node marker
//! - [`Text`] / [`TextDefinition`] - Labels and titles
//! - [`CircleWithText`] - A node marker with its label centred on it
//! - [`Arrow`] / [`ArrowDefinition`] - Directed edges with arrowhead markers

mod arrow;
mod circle;
mod circle_with_text;
mod layer;
mod text;

pub use arrow::{Arrow, ArrowDefinition, create_marker_definitions};
pub use circle::Circle;
pub use circle_with_text::CircleWithText;
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use text::{FontWeight, Text, TextDefinition};

use crate::geometry::{Point, Size};

/// An element that can render itself at a given position.
pub trait Drawable: std::fmt::Debug {
    /// Renders the element centred on `position`.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the size of the element's bounding box.
    fn size(&self) -> Size;
}
