//! Catalog listing.

use serde::Serialize;

use crate::domain::Catalog;

/// Summary information for a catalog option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSummary {
    pub id: String,
    pub label: String,
}

/// Summary information for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub description: String,
    pub options: Vec<OptionSummary>,
}

/// Catalog overview without the shell snippets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub app_name: String,
    pub app_version: String,
    pub subtitle: String,
    pub categories: Vec<CategorySummary>,
}

/// Summarize the catalog in its stored order.
pub fn execute(catalog: &Catalog) -> CatalogSummary {
    CatalogSummary {
        app_name: catalog.app_name.clone(),
        app_version: catalog.app_version.clone(),
        subtitle: catalog.subtitle.clone(),
        categories: catalog
            .categories
            .iter()
            .map(|c| CategorySummary {
                name: c.name.clone(),
                description: c.description.clone(),
                options: c
                    .options
                    .iter()
                    .map(|o| OptionSummary { id: o.id.to_string(), label: o.label.clone() })
                    .collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::EDITORS_AND_LANGUAGES;

    #[test]
    fn summary_keeps_order_and_drops_scripts() {
        let summary = execute(&Catalog::parse(EDITORS_AND_LANGUAGES).unwrap());

        assert_eq!(summary.app_version, "3.1");
        let names: Vec<_> = summary.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Editors", "Languages"]);
        assert_eq!(summary.categories[1].options[1].id, "go");

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"label\":\"VS Code\""));
        assert!(!json.contains("apt install"));
    }
}
