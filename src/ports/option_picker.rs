use crate::domain::{AppError, Category, OptionId, SelectionSet};

/// Port for letting the user choose options within one category.
pub trait OptionPicker {
    /// Present `category` with the current `selection` pre-checked.
    ///
    /// Returns the ids chosen in this category, or `None` if the user aborted.
    fn pick(
        &self,
        category: &Category,
        selection: &SelectionSet,
    ) -> Result<Option<Vec<OptionId>>, AppError>;
}
