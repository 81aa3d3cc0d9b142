//! Configuration types for Trellis diagram rendering.
//!
//! All types implement [`serde::Deserialize`] so the CLI can load them from
//! TOML. Every setting is optional; anything left unset keeps the
//! [`Theme`] default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`StyleConfig`] - Overrides for fonts, colors and text spacing.
//!
//! # Example
//!
//! ```
//! # use trellis::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().to_theme().is_ok());
//! ```

use serde::Deserialize;

use trellis_core::{
    color::Color,
    theme::{Font, Theme},
};

use crate::TrellisError;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style configuration.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling overrides for rendered diagrams.
///
/// Colors are CSS color strings and are validated when the theme is
/// resolved with [`StyleConfig::to_theme`].
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    /// CSS font-family list for box labels and listings.
    #[serde(default)]
    font_family: Option<String>,

    /// Font size in pixels for box labels and listings.
    #[serde(default)]
    font_size: Option<u16>,

    /// Color of body text.
    #[serde(default)]
    text_color: Option<String>,

    /// Fill color of boxes.
    #[serde(default)]
    box_fill: Option<String>,

    /// Outline color of boxes.
    #[serde(default)]
    box_stroke: Option<String>,

    /// Stroke width of box outlines and arrows.
    #[serde(default)]
    stroke_width: Option<f32>,

    /// Color of arrow shafts and heads.
    #[serde(default)]
    arrow_color: Option<String>,

    /// Canvas background color.
    #[serde(default)]
    background_color: Option<String>,

    /// Distance between label baselines in pixels.
    #[serde(default)]
    line_height: Option<f32>,
}

impl StyleConfig {
    /// Sets the font family override.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Sets the box fill color override.
    pub fn with_box_fill(mut self, color: impl Into<String>) -> Self {
        self.box_fill = Some(color.into());
        self
    }

    /// Sets the background color override.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Resolves the overrides on top of the default [`Theme`].
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::Style`] if a configured color is not a valid
    /// CSS color, or if a size is not a positive finite number.
    pub fn to_theme(&self) -> Result<Theme, TrellisError> {
        let mut theme = Theme::default();

        if self.font_family.is_some() || self.font_size.is_some() {
            let mut font: Font = theme.font().clone();
            if let Some(family) = &self.font_family {
                font = font.with_family(family);
            }
            if let Some(size) = self.font_size {
                if size == 0 {
                    return Err(TrellisError::Style("font_size must be positive".to_string()));
                }
                font = font.with_size(size);
            }
            theme = theme.with_font(font);
        }

        if let Some(color) = parse_color("text_color", self.text_color.as_deref())? {
            theme = theme.with_text_color(color);
        }

        let stroke_width = match self.stroke_width {
            Some(width) if !width.is_finite() || width <= 0.0 => {
                return Err(TrellisError::Style(format!(
                    "stroke_width must be positive, got {width}"
                )));
            }
            width => width,
        };

        let mut box_style = theme.box_style().clone();
        if let Some(color) = parse_color("box_fill", self.box_fill.as_deref())? {
            box_style = box_style.with_fill(color);
        }
        if let Some(color) = parse_color("box_stroke", self.box_stroke.as_deref())? {
            box_style = box_style.with_stroke(color);
        }
        if let Some(width) = stroke_width {
            box_style = box_style.with_stroke_width(width);
        }
        theme = theme.with_box_style(box_style);

        let mut arrow_style = theme.arrow_style().clone();
        if let Some(color) = parse_color("arrow_color", self.arrow_color.as_deref())? {
            arrow_style = arrow_style.with_stroke(color);
        }
        if let Some(width) = stroke_width {
            arrow_style = arrow_style.with_stroke_width(width);
        }
        theme = theme.with_arrow_style(arrow_style);

        if let Some(color) = parse_color("background_color", self.background_color.as_deref())? {
            theme = theme.with_background(color);
        }

        if let Some(line_height) = self.line_height {
            if !line_height.is_finite() || line_height <= 0.0 {
                return Err(TrellisError::Style(format!(
                    "line_height must be positive, got {line_height}"
                )));
            }
            theme = theme.with_line_height(line_height);
        }

        Ok(theme)
    }
}

fn parse_color(field: &str, value: Option<&str>) -> Result<Option<Color>, TrellisError> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| TrellisError::Style(format!("{field}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_resolves_default_theme() {
        let theme = AppConfig::default().style().to_theme().unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_toml_overrides() {
        let config: AppConfig = toml::from_str(
            r##"
            [style]
            font_family = "Inter, sans-serif"
            font_size = 13
            box_fill = "#f5f5ff"
            arrow_color = "navy"
            stroke_width = 2.0
            line_height = 18.5
            "##,
        )
        .unwrap();

        let theme = config.style().to_theme().unwrap();
        assert_eq!(theme.font().to_string(), "13px Inter, sans-serif");
        assert_eq!(
            theme.box_style().to_css(),
            "fill:#f5f5ff;stroke:#333;stroke-width:2"
        );
        assert_eq!(theme.arrow_style().to_css(), "stroke:navy;stroke-width:2;fill:none");
        assert_eq!(theme.marker_fill().to_string(), "navy");
        assert_eq!(theme.line_height(), 18.5);
    }

    #[test]
    fn test_empty_style_section() {
        let config: AppConfig = toml::from_str("[style]\n").unwrap();
        assert_eq!(config.style().to_theme().unwrap(), Theme::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[style]\nbox_colour = \"red\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_color_reports_field() {
        let style = StyleConfig::default().with_background_color("not-a-color");
        let err = style.to_theme().unwrap_err();

        assert!(matches!(err, TrellisError::Style(_)));
        assert!(err.to_string().contains("background_color"));
    }

    #[test]
    fn test_non_positive_sizes_are_rejected() {
        let config: AppConfig = toml::from_str("[style]\nline_height = 0.0\n").unwrap();
        assert!(matches!(
            config.style().to_theme(),
            Err(TrellisError::Style(_))
        ));

        let config: AppConfig = toml::from_str("[style]\nstroke_width = -1.0\n").unwrap();
        assert!(config.style().to_theme().is_err());

        let config: AppConfig = toml::from_str("[style]\nfont_size = 0\n").unwrap();
        assert!(config.style().to_theme().is_err());
    }

    #[test]
    fn test_infinite_and_nan_sizes_are_rejected() {
        for style in [
            "[style]\nstroke_width = inf\n",
            "[style]\nline_height = inf\n",
            "[style]\nstroke_width = nan\n",
            "[style]\nline_height = -inf\n",
        ] {
            let config: AppConfig = toml::from_str(style).unwrap();
            let err = config.style().to_theme().unwrap_err();
            assert!(matches!(err, TrellisError::Style(_)), "{style}: {err}");
        }
    }

    #[test]
    fn test_builder_setters() {
        let theme = StyleConfig::default()
            .with_font_family("monospace")
            .with_box_fill("#eee")
            .with_background_color("#fafafa")
            .to_theme()
            .unwrap();

        assert_eq!(theme.font().family(), "monospace");
        assert_eq!(theme.box_style().fill().to_string(), "#eee");
        assert_eq!(theme.background().to_string(), "#fafafa");
    }
}
