//! Terminal multi-select picker.

use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, MultiSelect};

use crate::domain::{AppError, Category, OptionId, SelectionSet};
use crate::ports::OptionPicker;

/// Presents each category as a checkbox list on the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPicker;

impl OptionPicker for DialoguerPicker {
    fn pick(
        &self,
        category: &Category,
        selection: &SelectionSet,
    ) -> Result<Option<Vec<OptionId>>, AppError> {
        if category.options.is_empty() {
            return Ok(Some(Vec::new()));
        }

        let labels: Vec<&str> = category.options.iter().map(|o| o.label.as_str()).collect();
        let defaults: Vec<bool> =
            category.options.iter().map(|o| selection.is_selected(o.id.as_str())).collect();

        let prompt = if category.description.trim().is_empty() {
            category.name.clone()
        } else {
            format!("{} - {}", category.name, category.description.trim())
        };

        match MultiSelect::new().with_prompt(prompt).items(&labels).defaults(&defaults).interact_opt()
        {
            Ok(Some(indices)) => {
                Ok(Some(indices.into_iter().map(|i| category.options[i].id.clone()).collect()))
            }
            Ok(None) => Ok(None),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(AppError::PromptError(format!(
                "Failed to read selection for '{}': {}",
                category.name, err
            ))),
        }
    }
}
