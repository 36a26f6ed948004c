//! Core data structures for the template store

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::{Result, StoreError};

/// Unique identifier for a stored template
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub String);

impl TemplateId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        TemplateId(Uuid::new_v4().to_string())
    }
}

impl From<String> for TemplateId {
    fn from(s: String) -> Self {
        TemplateId(s)
    }
}

impl From<&str> for TemplateId {
    fn from(s: &str) -> Self {
        TemplateId(s.to_string())
    }
}

impl AsRef<str> for TemplateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named, categorized list of person names
///
/// The store owns the canonical copy; the file mirror is a best-effort
/// replica kept in sync on every write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameListTemplate {
    /// Opaque identifier, generated at creation, immutable
    pub id: TemplateId,

    /// Human-readable template name
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// Free-text category label
    pub category: String,

    /// Ordered sequence of person names
    pub names: Vec<String>,

    /// Creation timestamp
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,

    /// Refreshed on every successful modification
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl NameListTemplate {
    /// Create a new template from validated input, with a generated id and
    /// both timestamps set to the creation instant.
    pub fn new(input: TemplateInput) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id: TemplateId::generate(),
            name: input.name,
            description: input.description,
            category: input.category,
            names: input.names,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields in place and refresh `updated_at`.
    pub fn apply(&mut self, update: &TemplateUpdate) {
        self.name = update.name.clone();
        self.description = update.description.clone();
        self.category = update.category.clone();
        self.names = update.names.clone();
        self.updated_at = OffsetDateTime::now_utc();
    }
}

/// Fields accepted when creating a template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateInput {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub category: String,
    pub names: Vec<String>,
}

impl TemplateInput {
    /// Check the required fields: a non-blank name and a non-empty name list.
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.name, &self.names)
    }
}

/// Full-replacement update of a template's mutable fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateUpdate {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub category: String,
    pub names: Vec<String>,
}

impl TemplateUpdate {
    /// Same required-field rules as [`TemplateInput::validate`].
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.name, &self.names)
    }
}

fn validate_fields(name: &str, names: &[String]) -> Result<()> {
    if name.trim().is_empty() {
        return Err(StoreError::Validation("template name is required".to_string()));
    }
    if names.is_empty() {
        return Err(StoreError::Validation("name list must not be empty".to_string()));
    }
    Ok(())
}

/// Filter for list queries
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateFilter {
    /// Exact category match; `"all"` and empty act as no filter
    pub category: Option<String>,

    /// Case-insensitive substring match on the template name
    pub search: Option<String>,
}

impl TemplateFilter {
    /// The effective category constraint, if any.
    pub fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != "all")
    }

    /// Apply the filter semantics to a single template.
    pub fn matches(&self, template: &NameListTemplate) -> bool {
        if let Some(category) = self.category_filter() {
            if template.category != category {
                return false;
            }
        }
        if let Some(search) = &self.search {
            if !template
                .name
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, names: &[&str]) -> TemplateInput {
        TemplateInput {
            name: name.to_string(),
            description: None,
            category: "default".to_string(),
            names: names.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_new_generates_id_and_timestamps() {
        let a = NameListTemplate::new(input("team", &["Alice"]));
        let b = NameListTemplate::new(input("team", &["Alice"]));
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, a.updated_at);
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        assert!(input("  ", &["Alice"]).validate().is_err());
        assert!(input("team", &[]).validate().is_err());
        assert!(input("team", &["Alice"]).validate().is_ok());
    }

    #[test]
    fn test_apply_refreshes_updated_at() {
        let mut template = NameListTemplate::new(input("team", &["Alice"]));
        let created_at = template.created_at;
        template.apply(&TemplateUpdate {
            name: "team b".to_string(),
            description: Some("second shift".to_string()),
            category: "ops".to_string(),
            names: vec!["Bob".to_string()],
        });
        assert_eq!(template.name, "team b");
        assert_eq!(template.created_at, created_at);
        assert!(template.updated_at >= created_at);
    }

    #[test]
    fn test_filter_category_sentinel() {
        let template = NameListTemplate::new(input("weekly standup", &["Alice"]));

        let all = TemplateFilter {
            category: Some("all".to_string()),
            search: None,
        };
        assert!(all.matches(&template));

        let other = TemplateFilter {
            category: Some("ops".to_string()),
            search: None,
        };
        assert!(!other.matches(&template));
    }

    #[test]
    fn test_filter_search_is_case_insensitive() {
        let template = NameListTemplate::new(input("Weekly Standup", &["Alice"]));
        let filter = TemplateFilter {
            category: None,
            search: Some("standup".to_string()),
        };
        assert!(filter.matches(&template));
    }
}
