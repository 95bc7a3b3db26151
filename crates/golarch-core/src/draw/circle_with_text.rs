use crate::{
    draw::{Circle, Drawable, LayeredOutput, Text},
    geometry::{Point, Size},
};

/// A node circle with its label centred on top of it.
///
/// The label is not clipped to the circle; long labels spill past the edge
/// the same way plotted node labels do.
#[derive(Debug, Clone)]
pub struct CircleWithText<'a> {
    circle: &'a Circle,
    text: Text<'a>,
}

impl<'a> CircleWithText<'a> {
    pub fn new(circle: &'a Circle, text: Text<'a>) -> Self {
        Self { circle, text }
    }

    pub fn circle(&self) -> &Circle {
        self.circle
    }

    pub fn text(&self) -> &Text<'a> {
        &self.text
    }
}

impl Drawable for CircleWithText<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = self.circle.render_to_layers(position);
        output.merge(self.text.render_to_layers(position));
        output
    }

    fn size(&self) -> Size {
        self.circle.size().max(self.text.size())
    }
}
