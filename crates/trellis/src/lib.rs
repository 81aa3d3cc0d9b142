//! Trellis - hand-laid SVG diagrams for project documentation.
//!
//! A fixed catalog of architecture and usage diagrams, each produced by a pure
//! builder that places boxes, arrows and labels at literal coordinates. The
//! drawing primitives live in [`trellis_core`] and are re-exported here.

pub mod config;
pub mod diagrams;

mod catalog;
mod error;

pub use trellis_core::{color, draw, geometry, scene, theme};

pub use catalog::Diagram;
pub use error::TrellisError;

use log::{debug, info};

use config::AppConfig;
use theme::Theme;

/// Builder for rendering the diagram catalog with a resolved theme.
///
/// # Examples
///
/// ```rust
/// use trellis::{Diagram, DiagramBuilder, config::AppConfig};
///
/// let builder = DiagramBuilder::new(AppConfig::default())
///     .expect("default configuration is valid");
///
/// let svg = builder.render(Diagram::NavigationFlow);
/// assert!(svg.contains("Boot"));
///
/// // Or use the default theme directly
/// let builder = DiagramBuilder::default();
/// assert_eq!(builder.render_all().len(), Diagram::ALL.len());
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    theme: Theme,
}

impl DiagramBuilder {
    /// Create a new diagram builder from application configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration carrying the style overrides
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::Style`] if the style overrides do not resolve
    /// to a valid theme.
    pub fn new(config: AppConfig) -> Result<Self, TrellisError> {
        let theme = config.style().to_theme()?;
        debug!(font:% = theme.font(); "Theme resolved");
        Ok(Self { theme })
    }

    /// Create a builder that renders with an already resolved theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Render one diagram to a complete SVG document.
    pub fn render(&self, diagram: Diagram) -> String {
        info!(diagram = diagram.name(); "Rendering diagram");
        let svg = diagram.render(&self.theme);
        debug!(diagram = diagram.name(), bytes = svg.len(); "Diagram rendered");
        svg
    }

    /// Render every catalog entry, in catalog order.
    pub fn render_all(&self) -> Vec<(Diagram, String)> {
        Diagram::ALL
            .iter()
            .map(|&diagram| (diagram, self.render(diagram)))
            .collect()
    }
}
