//! Catalog model: categories of installable options, each with a shell snippet.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use super::{AppError, OptionId};

/// A single installable option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogOption {
    pub id: OptionId,
    pub label: String,
    /// Multi-line shell text inserted verbatim into the generated script.
    #[serde(rename = "script")]
    pub snippet: String,
}

/// A named group of options. Option order is emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub options: Vec<CatalogOption>,
}

/// Root configuration document.
///
/// Immutable once loaded; a reload produces a new value that replaces the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, deserialize_with = "scalar_string")]
    pub app_name: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub app_version: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub subtitle: String,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Parse and validate a catalog document.
    ///
    /// Both the remote payload and the on-disk cache go through here.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let catalog: Option<Catalog> = serde_yaml::from_str(content)
            .map_err(|e| AppError::ConfigMalformed(format!("Error parsing YAML: {}", e)))?;
        let catalog = catalog
            .ok_or_else(|| AppError::ConfigMalformed("Catalog document is empty".to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Serialize to the same document shape `parse` accepts.
    pub fn to_yaml(&self) -> Result<String, AppError> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::ConfigMalformed(format!("Failed to serialize catalog: {}", e)))
    }

    fn validate(&self) -> Result<(), AppError> {
        let mut names = HashSet::new();
        let mut ids = HashSet::new();

        for category in &self.categories {
            if category.name.trim().is_empty() {
                return Err(AppError::ConfigMalformed("Category with empty name".to_string()));
            }
            if !names.insert(category.name.as_str()) {
                return Err(AppError::ConfigMalformed(format!(
                    "Duplicate category '{}'",
                    category.name
                )));
            }
            for option in &category.options {
                if !ids.insert(option.id.as_str()) {
                    return Err(AppError::ConfigMalformed(format!(
                        "Duplicate option id '{}' (in category '{}')",
                        option.id, category.name
                    )));
                }
            }
        }

        Ok(())
    }

    /// Iterate all options across categories, in catalog order.
    pub fn options(&self) -> impl Iterator<Item = &CatalogOption> {
        self.categories.iter().flat_map(|c| c.options.iter())
    }

    /// Look up an option by id.
    pub fn find_option(&self, id: &str) -> Option<&CatalogOption> {
        self.options().find(|o| o.id.as_str() == id)
    }

    pub fn contains_option(&self, id: &str) -> bool {
        self.find_option(id).is_some()
    }

    /// Look up a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Comma-separated option ids, for error messages.
    pub fn available_option_ids(&self) -> String {
        self.options().map(|o| o.id.as_str()).collect::<Vec<_>>().join(", ")
    }

    /// Comma-separated category names, for error messages.
    pub fn available_categories(&self) -> String {
        self.categories.iter().map(|c| c.name.as_str()).collect::<Vec<_>>().join(", ")
    }
}

/// Accept strings or bare YAML scalars (`app_version: 1.2`) as text.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::Null => Ok(String::new()),
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected a string, found {:?}", other))),
    }
}
