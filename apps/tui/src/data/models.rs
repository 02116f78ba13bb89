use serde::Deserialize;
use serde_json::Value;

use crate::locale::FieldChain;

/// Site-wide metadata as served: a flat object whose keys may carry localized
/// variants. Read-only for the session; display values are resolved through
/// [`FieldChain`]s rather than direct key access.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SiteConfig(serde_json::Map<String, Value>);

impl SiteConfig {
    /// First non-empty candidate wins; the chain's literal default closes it.
    pub fn resolve(&self, chain: &FieldChain) -> String {
        for key in chain.keys {
            if let Some(Value::String(text)) = self.0.get(*key) {
                if !text.trim().is_empty() {
                    return text.clone();
                }
            }
        }
        chain.fallback.to_string()
    }
}

/// One catalog entry. Extra fields in the source JSON are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

/// A typed variable record; the table renders (and filters/sorts) the derived
/// cell text, keyed by column index.
#[derive(Debug, Clone, Deserialize)]
pub struct Variable {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub missing: Option<f64>,
}

impl Variable {
    pub const COLUMNS: [&'static str; 5] = ["Name", "Label", "Type", "Unit", "Missing %"];

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.label.clone(),
            self.kind.clone(),
            self.unit.clone(),
            self.missing.map(|rate| rate.to_string()).unwrap_or_default(),
        ]
    }
}

/// The joined result of the two startup fetches; immutable once loaded.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub site: SiteConfig,
    pub datasets: Vec<Dataset>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Lang;
    use crate::locale::site_fields;

    fn site(json: &str) -> SiteConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn resolve_prefers_the_localized_key() {
        let config = site(r#"{"site_title_en": "Lab DB", "site_title": "实验室数据库"}"#);
        assert_eq!(config.resolve(&site_fields(Lang::En).title), "Lab DB");
        assert_eq!(config.resolve(&site_fields(Lang::Zh).title), "实验室数据库");
    }

    #[test]
    fn resolve_skips_empty_values() {
        let config = site(r#"{"owner_en": "  ", "owner": "The Lab"}"#);
        assert_eq!(config.resolve(&site_fields(Lang::En).owner), "The Lab");
    }

    #[test]
    fn resolve_falls_back_to_the_literal_default() {
        let config = site("{}");
        assert_eq!(
            config.resolve(&site_fields(Lang::En).contact_email),
            "data-admin@example.edu"
        );
    }

    #[test]
    fn datasets_tolerate_extra_fields() {
        let datasets: Vec<Dataset> = serde_json::from_str(
            r#"[{"slug": "ds1", "title": "One", "summary": "s", "doi": "10.1/x"}]"#,
        )
        .unwrap();
        assert_eq!(datasets[0].slug, "ds1");
        assert!(datasets[0].variables.is_empty());
    }

    #[test]
    fn variable_cells_follow_column_order() {
        let variable: Variable = serde_json::from_str(
            r#"{"name": "age", "label": "Age", "type": "integer", "unit": "years", "missing": 1.5}"#,
        )
        .unwrap();
        let cells = variable.cells();
        assert_eq!(cells.len(), Variable::COLUMNS.len());
        assert_eq!(cells[0], "age");
        assert_eq!(cells[2], "integer");
        assert_eq!(cells[4], "1.5");
    }
}
