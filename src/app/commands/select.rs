//! Interactive, category-by-category selection.

use crate::domain::{AppError, Catalog, SelectionSet};
use crate::ports::OptionPicker;

/// Walk every category through `picker`, starting from `initial`.
///
/// Each category's answer replaces that category's prior state. Returns
/// `None` if the user aborts at any category.
pub fn execute(
    catalog: &Catalog,
    initial: SelectionSet,
    picker: &impl OptionPicker,
) -> Result<Option<SelectionSet>, AppError> {
    let mut selection = initial;
    selection.retain_known(catalog);

    for category in &catalog.categories {
        let Some(chosen) = picker.pick(category, &selection)? else {
            return Ok(None);
        };
        for option in &category.options {
            selection.set(option.id.clone(), chosen.contains(&option.id));
        }
    }

    Ok(Some(selection))
}
