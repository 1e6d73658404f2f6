//! Script sink and option picker doubles.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Category, OptionId, ScriptDocument, SelectionSet};
use crate::ports::{OptionPicker, ScriptSink};

/// Records persisted scripts instead of touching disk.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub written: RefCell<Vec<(PathBuf, String)>>,
}

impl ScriptSink for RecordingSink {
    fn persist(&self, path: &Path, script: &ScriptDocument) -> Result<PathBuf, AppError> {
        self.written.borrow_mut().push((path.to_path_buf(), script.text().to_string()));
        Ok(path.to_path_buf())
    }
}

/// Answers each category prompt from a fixed table; `None` simulates Esc.
#[derive(Debug, Default)]
pub struct ScriptedPicker {
    answers: HashMap<String, Option<Vec<String>>>,
    pub seen_defaults: RefCell<Vec<(String, Vec<String>)>>,
}

impl ScriptedPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, category: &str, ids: &[&str]) -> Self {
        self.answers
            .insert(category.to_string(), Some(ids.iter().map(|s| s.to_string()).collect()));
        self
    }

    pub fn abort_at(mut self, category: &str) -> Self {
        self.answers.insert(category.to_string(), None);
        self
    }
}

impl OptionPicker for ScriptedPicker {
    fn pick(
        &self,
        category: &Category,
        selection: &SelectionSet,
    ) -> Result<Option<Vec<OptionId>>, AppError> {
        let defaults = category
            .options
            .iter()
            .filter(|o| selection.is_selected(o.id.as_str()))
            .map(|o| o.id.to_string())
            .collect();
        self.seen_defaults.borrow_mut().push((category.name.clone(), defaults));

        match self.answers.get(&category.name) {
            Some(Some(ids)) => {
                ids.iter().map(|id| OptionId::new(id)).collect::<Result<Vec<_>, _>>().map(Some)
            }
            Some(None) => Ok(None),
            None => Ok(Some(Vec::new())),
        }
    }
}
