//! Configuration types for diagram rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file. Every field is optional; anything left out falls back to the
//! built-in style of each architecture.
//!
//! - [`AppConfig`] - Top-level configuration root.
//! - [`LayoutConfig`] - Canvas scale and margin.
//! - [`StyleConfig`] - Style shared by every diagram.
//! - [`DiagramsConfig`] - Per-architecture overrides, keyed by slug.
//!
//! ```
//! # use golarch::{Architecture, config::AppConfig};
//! let config = AppConfig::default();
//! let style = config.render_style(Architecture::Monolithic).unwrap();
//! assert_eq!(style.font_size(), 10);
//! ```

use serde::Deserialize;

use golarch_core::{color::Color, draw::FontWeight};

use crate::{catalog::Architecture, style::RenderStyle};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    layout: LayoutConfig,

    #[serde(default)]
    style: StyleConfig,

    #[serde(default)]
    diagrams: DiagramsConfig,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig, style: StyleConfig, diagrams: DiagramsConfig) -> Self {
        Self {
            layout,
            style,
            diagrams,
        }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn diagrams(&self) -> &DiagramsConfig {
        &self.diagrams
    }

    /// Resolves the [`RenderStyle`] for one architecture.
    ///
    /// Starts from the architecture's defaults, then applies the shared
    /// `[style]` section and finally the `[diagrams.<slug>]` section.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending option when a color does not
    /// parse or a size is not a positive, finite number.
    pub fn render_style(&self, architecture: Architecture) -> Result<RenderStyle, String> {
        let node_color = parse_color("node_color", architecture.default_node_color())?;
        let style = self.style.apply(RenderStyle::new(node_color))?;
        self.diagrams.get(architecture).apply(style)
    }
}

/// Canvas placement settings.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Canvas pixels per plot unit.
    #[serde(default)]
    scale: Option<f32>,

    /// Blank space around the drawing, in pixels.
    #[serde(default)]
    margin: Option<f32>,
}

impl LayoutConfig {
    pub const DEFAULT_SCALE: f32 = 160.0;
    pub const DEFAULT_MARGIN: f32 = 40.0;

    pub fn new(scale: Option<f32>, margin: Option<f32>) -> Self {
        Self { scale, margin }
    }

    /// Returns the configured scale, or the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the scale is not positive and finite.
    pub fn scale(&self) -> Result<f32, String> {
        positive("layout.scale", self.scale.unwrap_or(Self::DEFAULT_SCALE))
    }

    /// Returns the configured margin, or the default. Zero is allowed.
    ///
    /// # Errors
    ///
    /// Returns an error if the margin is negative or not finite.
    pub fn margin(&self) -> Result<f32, String> {
        let margin = self.margin.unwrap_or(Self::DEFAULT_MARGIN);
        if margin.is_finite() && margin >= 0.0 {
            Ok(margin)
        } else {
            Err(format!("layout.margin must be a non-negative number, got {margin}"))
        }
    }
}

/// Style shared by every diagram.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    #[serde(default)]
    node_size: Option<f32>,

    #[serde(default)]
    font_size: Option<u16>,

    #[serde(default)]
    font_weight: Option<FontWeight>,

    #[serde(default)]
    font_family: Option<String>,

    #[serde(default)]
    arrow_size: Option<f32>,

    #[serde(default)]
    edge_color: Option<String>,

    #[serde(default)]
    title_size: Option<u16>,

    #[serde(default)]
    background_color: Option<String>,

    #[serde(default)]
    label_color: Option<String>,

    #[serde(default)]
    node_outline: Option<String>,
}

impl StyleConfig {
    fn apply(&self, mut style: RenderStyle) -> Result<RenderStyle, String> {
        if let Some(size) = self.node_size {
            style = style.with_node_size(positive("style.node_size", size)?);
        }
        if let Some(size) = self.font_size {
            style = style.with_font_size(positive_u16("style.font_size", size)?);
        }
        if let Some(weight) = self.font_weight {
            style = style.with_font_weight(weight);
        }
        if let Some(family) = &self.font_family {
            style = style.with_font_family(family.as_str());
        }
        if let Some(size) = self.arrow_size {
            style = style.with_arrow_size(positive("style.arrow_size", size)?);
        }
        if let Some(color) = &self.edge_color {
            style = style.with_edge_color(parse_color("style.edge_color", color)?);
        }
        if let Some(size) = self.title_size {
            style = style.with_title_size(positive_u16("style.title_size", size)?);
        }
        if let Some(color) = &self.background_color {
            style = style.with_background_color(parse_color("style.background_color", color)?);
        }
        if let Some(color) = &self.label_color {
            style = style.with_label_color(parse_color("style.label_color", color)?);
        }
        if let Some(color) = &self.node_outline {
            style = style.with_node_outline(parse_color("style.node_outline", color)?);
        }
        Ok(style)
    }
}

/// Per-architecture overrides.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagramsConfig {
    #[serde(default)]
    monolithic: DiagramStyleConfig,

    #[serde(default)]
    microservices: DiagramStyleConfig,
}

impl DiagramsConfig {
    pub fn get(&self, architecture: Architecture) -> &DiagramStyleConfig {
        match architecture {
            Architecture::Monolithic => &self.monolithic,
            Architecture::Microservices => &self.microservices,
        }
    }
}

/// Overrides for a single architecture.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagramStyleConfig {
    #[serde(default)]
    node_color: Option<String>,
}

impl DiagramStyleConfig {
    pub fn new(node_color: Option<String>) -> Self {
        Self { node_color }
    }

    fn apply(&self, style: RenderStyle) -> Result<RenderStyle, String> {
        match &self.node_color {
            Some(color) => Ok(style.with_node_color(parse_color("node_color", color)?)),
            None => Ok(style),
        }
    }
}

fn parse_color(option: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid {option} in config: {err}"))
}

fn positive(option: &str, value: f32) -> Result<f32, String> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("{option} must be a positive number, got {value}"))
    }
}

fn positive_u16(option: &str, value: u16) -> Result<u16, String> {
    if value > 0 {
        Ok(value)
    } else {
        Err(format!("{option} must be greater than zero"))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn parse(source: &str) -> AppConfig {
        toml::from_str(source).expect("valid configuration")
    }

    #[test]
    fn test_default_styles_per_architecture() {
        let config = AppConfig::default();

        let mono = config.render_style(Architecture::Monolithic).unwrap();
        let micro = config.render_style(Architecture::Microservices).unwrap();

        assert_eq!(mono.node_color(), Color::new("lightblue").unwrap());
        assert_eq!(micro.node_color(), Color::new("lightgreen").unwrap());
        assert_approx_eq!(f32, mono.node_size(), 3000.0);
        assert_eq!(mono.font_weight(), FontWeight::Bold);
    }

    #[test]
    fn test_default_layout() {
        let layout = LayoutConfig::default();
        assert_approx_eq!(f32, layout.scale().unwrap(), LayoutConfig::DEFAULT_SCALE);
        assert_approx_eq!(f32, layout.margin().unwrap(), LayoutConfig::DEFAULT_MARGIN);
    }

    #[test]
    fn test_shared_and_per_diagram_overrides() {
        let config = parse(
            r#"
            [layout]
            scale = 100.0

            [style]
            font_size = 14
            font_weight = "normal"
            edge_color = "gray"

            [diagrams.microservices]
            node_color = "orange"
            "#,
        );

        assert_approx_eq!(f32, config.layout().scale().unwrap(), 100.0);

        let mono = config.render_style(Architecture::Monolithic).unwrap();
        assert_eq!(mono.font_size(), 14);
        assert_eq!(mono.font_weight(), FontWeight::Normal);
        assert_eq!(mono.node_color(), Color::new("lightblue").unwrap());

        let micro = config.render_style(Architecture::Microservices).unwrap();
        assert_eq!(micro.node_color(), Color::new("orange").unwrap());
        assert_eq!(micro.edge_color(), Color::new("gray").unwrap());
    }

    #[test]
    fn test_label_color_and_node_outline() {
        let config = parse(
            r#"
            [style]
            label_color = "navy"
            node_outline = "dimgray"
            "#,
        );

        for arch in Architecture::ALL {
            let style = config.render_style(arch).unwrap();
            assert_eq!(style.label_color(), Some(Color::new("navy").unwrap()));
            assert_eq!(style.node_outline(), Some(Color::new("dimgray").unwrap()));
        }

        let config = parse("[style]\nnode_outline = \"nope\"\n");
        let err = config.render_style(Architecture::Monolithic).unwrap_err();
        assert!(err.contains("style.node_outline"), "unexpected message: {err}");
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let config = parse(
            r#"
            [diagrams.monolithic]
            node_color = "not-a-color"
            "#,
        );

        let err = config.render_style(Architecture::Monolithic).unwrap_err();
        assert!(err.contains("node_color"), "unexpected message: {err}");
        assert!(config.render_style(Architecture::Microservices).is_ok());
    }

    #[test]
    fn test_non_positive_sizes_are_rejected() {
        let config = parse("[style]\nnode_size = 0.0\n");
        assert!(config.render_style(Architecture::Monolithic).is_err());

        let config = parse("[style]\nfont_size = 0\n");
        assert!(config.render_style(Architecture::Monolithic).is_err());

        let config = parse("[layout]\nscale = -5.0\n");
        assert!(config.layout().scale().is_err());

        let config = parse("[layout]\nmargin = 0.0\n");
        assert_approx_eq!(f32, config.layout().margin().unwrap(), 0.0);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(toml::from_str::<AppConfig>("[style]\nnode_colour = \"red\"\n").is_err());
        assert!(toml::from_str::<AppConfig>("[diagrams.serverless]\n").is_err());
        assert!(toml::from_str::<AppConfig>("[style]\nfont_weight = \"heavy\"\n").is_err());
    }
}
