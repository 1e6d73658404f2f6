//! Script generation from a catalog and a selection.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, Catalog, OptionId, ScriptDocument, SelectionSet, synthesize};
use crate::ports::ScriptSink;

/// What the user asked to include.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Individual option ids.
    pub option_ids: Vec<String>,
    /// Whole categories, by name.
    pub categories: Vec<String>,
    /// Where to persist the script; `None` leaves it to the caller.
    pub output: Option<PathBuf>,
}

/// Result of a successful generation.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub script: ScriptDocument,
    /// Labels of the included options, in script order.
    pub included: Vec<String>,
    /// Set when the script was written to disk.
    pub written_to: Option<PathBuf>,
}

/// Build a selection from ids and category names, validating them against the catalog.
pub fn build_selection(
    catalog: &Catalog,
    option_ids: &[String],
    categories: &[String],
) -> Result<SelectionSet, AppError> {
    let mut selection = SelectionSet::new();

    for raw in option_ids {
        let id = OptionId::new(raw)?;
        if !catalog.contains_option(id.as_str()) {
            return Err(AppError::UnknownOption {
                id: raw.clone(),
                available: catalog.available_option_ids(),
            });
        }
        selection.set(id, true);
    }

    for name in categories {
        let category = catalog.category(name).ok_or_else(|| AppError::UnknownCategory {
            name: name.clone(),
            available: catalog.available_categories(),
        })?;
        for option in &category.options {
            selection.set(option.id.clone(), true);
        }
    }

    Ok(selection)
}

/// Synthesize the script and persist it if an output path is given.
pub fn execute(
    catalog: &Catalog,
    selection: &SelectionSet,
    output: Option<&Path>,
    sink: &impl ScriptSink,
) -> Result<GenerateOutcome, AppError> {
    let script = synthesize(catalog, selection)?;

    let included = catalog
        .options()
        .filter(|o| selection.is_selected(o.id.as_str()))
        .map(|o| o.label.clone())
        .collect();

    let written_to = match output {
        Some(path) => Some(sink.persist(path, &script)?),
        None => None,
    };

    Ok(GenerateOutcome { script, included, written_to })
}
