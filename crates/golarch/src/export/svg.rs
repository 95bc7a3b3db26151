//! SVG rendering of placed diagrams.

use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use golarch_core::draw::{
    Arrow, CircleWithText, Drawable, LayeredOutput, RenderLayer, Text, create_marker_definitions,
};

use crate::{
    export::{self, Exporter},
    layout::PlacedDiagram,
    style::RenderStyle,
};

/// Renders placed diagrams to SVG with a fixed [`RenderStyle`].
#[derive(Debug)]
pub struct Svg<'a> {
    style: &'a RenderStyle,
}

impl<'a> Svg<'a> {
    pub fn new(style: &'a RenderStyle) -> Self {
        Self { style }
    }

    /// Builds the SVG document for a placed diagram.
    ///
    /// Edges are drawn first, then node circles, then labels and the title,
    /// so arrowheads never cover a node.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] when the canvas has no usable size.
    pub fn render_document(&self, diagram: &PlacedDiagram<'_>) -> Result<Document, export::Error> {
        let canvas = diagram.canvas();
        let (width, height) = (canvas.width(), canvas.height());
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(export::Error::Render(format!(
                "invalid canvas size {width}x{height}"
            )));
        }

        let arrow = self.style.arrow();
        let circle = self.style.node_circle();
        let label_text = self.style.label_text();
        let title_text = self.style.title_text();

        let mut output = LayeredOutput::new();

        let background = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", width)
            .set("height", height)
            .set("fill", self.style.background_color().to_string());
        output.add_to_layer(RenderLayer::Background, Box::new(background));

        let drawer = Arrow::new(&arrow);
        for edge in diagram.edges() {
            output.merge(drawer.render_between(edge.start(), edge.end()));
        }

        for placed in diagram.nodes() {
            let node = CircleWithText::new(&circle, Text::new(&label_text, placed.node().label()));
            output.merge(node.render_to_layers(placed.center()));
        }

        let title = Text::new(&title_text, diagram.title());
        output.merge(title.render_to_layers(diagram.title_position()));

        let mut doc = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0.0, 0.0, width, height))
            .add(create_marker_definitions([&arrow]));

        for node in output.render() {
            doc = doc.add(node);
        }

        debug!(width, height; "SVG document rendered");

        Ok(doc)
    }

    /// Renders a placed diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// See [`Svg::render_document`].
    pub fn render_string(&self, diagram: &PlacedDiagram<'_>) -> Result<String, export::Error> {
        Ok(self.render_document(diagram)?.to_string())
    }

    /// Writes an SVG document to the specified file
    fn write_document(&self, doc: &Document, path: &Path) -> Result<(), export::Error> {
        let file_name = path.display().to_string();
        info!(file_name; "Creating SVG file");

        let mut f = File::create(path).map_err(|err| {
            error!(file_name, err:err; "Failed to create SVG file");
            export::Error::Io(err)
        })?;

        write!(f, "{doc}").map_err(|err| {
            error!(file_name, err:err; "Failed to write SVG content");
            export::Error::Io(err)
        })?;

        Ok(())
    }
}

impl Exporter for Svg<'_> {
    fn export_diagram(&self, diagram: &PlacedDiagram<'_>, path: &Path) -> Result<(), export::Error> {
        let doc = self.render_document(diagram)?;
        self.write_document(&doc, path)
    }
}
