//! CLI logic for the Trellis diagram generator.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{collections::HashSet, fs, path::Path};

use log::{debug, info};

use trellis::{Diagram, DiagramBuilder, TrellisError};

/// Run the Trellis CLI application
///
/// With `--list`, prints the catalog and returns. Otherwise renders the
/// selected diagrams (all of them when none are named) into the output
/// directory, creating it if needed.
///
/// # Errors
///
/// Returns `TrellisError` for:
/// - Unknown diagram names
/// - Configuration loading errors
/// - Invalid style overrides
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), TrellisError> {
    if args.list {
        for diagram in Diagram::ALL {
            println!("{}\t{}", diagram.name(), diagram.description());
        }
        return Ok(());
    }

    let selected = select_diagrams(&args.diagrams)?;
    info!(
        out_dir = args.out_dir,
        count = selected.len();
        "Generating diagrams"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let builder = DiagramBuilder::new(app_config)?;

    let out_dir = Path::new(&args.out_dir);
    fs::create_dir_all(out_dir)?;

    for diagram in selected {
        let path = out_dir.join(diagram.file_name());
        fs::write(&path, builder.render(diagram))?;
        info!(path = path.display().to_string(); "Wrote diagram");
    }

    Ok(())
}

/// Resolve requested names to diagrams in catalog order, ignoring duplicates.
fn select_diagrams(names: &[String]) -> Result<Vec<Diagram>, TrellisError> {
    if names.is_empty() {
        return Ok(Diagram::ALL.to_vec());
    }

    let requested = names
        .iter()
        .map(|name| name.parse::<Diagram>())
        .collect::<Result<HashSet<_>, _>>()?;
    debug!(requested = requested.len(); "Diagram selection resolved");

    Ok(Diagram::ALL
        .into_iter()
        .filter(|diagram| requested.contains(diagram))
        .collect())
}
