//! The fixed set of diagrams Trellis knows how to draw.

use std::{fmt, str::FromStr};

use trellis_core::theme::Theme;

use crate::{TrellisError, diagrams};

/// One entry of the diagram catalog.
///
/// Names are the output file stems, e.g. `arch-high-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagram {
    HighLevel,
    ComponentFlow,
    Hal,
    DisplayPipeline,
    Storage,
    Threading,
    NavigationFlow,
    ProjectStructure,
}

impl Diagram {
    /// Every diagram, in generation order.
    pub const ALL: [Diagram; 8] = [
        Diagram::HighLevel,
        Diagram::ComponentFlow,
        Diagram::Hal,
        Diagram::DisplayPipeline,
        Diagram::Storage,
        Diagram::Threading,
        Diagram::NavigationFlow,
        Diagram::ProjectStructure,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::HighLevel => "arch-high-level",
            Self::ComponentFlow => "arch-component-flow",
            Self::Hal => "arch-hal",
            Self::DisplayPipeline => "arch-display-pipeline",
            Self::Storage => "arch-storage",
            Self::Threading => "arch-threading",
            Self::NavigationFlow => "usage-navigation-flow",
            Self::ProjectStructure => "dev-project-structure",
        }
    }

    /// Output file name: the name plus an `.svg` extension.
    pub fn file_name(self) -> String {
        format!("{}.svg", self.name())
    }

    /// One-line summary, shown by `--list`.
    pub fn description(self) -> &'static str {
        match self {
            Self::HighLevel => "High-level component architecture",
            Self::ComponentFlow => "Entry point and main loop call flow",
            Self::Hal => "HAL abstraction with device and simulator implementations",
            Self::DisplayPipeline => "Display rendering pipeline",
            Self::Storage => "Virtual SD card path resolution",
            Self::Threading => "Single-thread main loop architecture",
            Self::NavigationFlow => "Screen navigation flow",
            Self::ProjectStructure => "Project directory structure",
        }
    }

    /// Render this diagram with the given theme.
    pub fn render(self, theme: &Theme) -> String {
        match self {
            Self::HighLevel => diagrams::high_level::build(theme),
            Self::ComponentFlow => diagrams::component_flow::build(theme),
            Self::Hal => diagrams::hal::build(theme),
            Self::DisplayPipeline => diagrams::display_pipeline::build(theme),
            Self::Storage => diagrams::storage::build(theme),
            Self::Threading => diagrams::threading::build(theme),
            Self::NavigationFlow => diagrams::navigation_flow::build(theme),
            Self::ProjectStructure => diagrams::project_structure::build(theme),
        }
    }

    /// Render this diagram with the default theme.
    pub fn build(self) -> String {
        self.render(Theme::default_borrowed())
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Diagram {
    type Err = TrellisError;

    /// Parses a diagram name, with or without the `.svg` extension.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_suffix(".svg").unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|diagram| diagram.name() == name)
            .ok_or_else(|| TrellisError::UnknownDiagram {
                name: s.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(|diagram| diagram.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}
