//! SQLite primary-store implementation
//!
//! Stores templates in a local SQLite database file. The name list is
//! kept as a JSON column; timestamps are RFC 3339 text.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{Row, SqlitePool, sqlite::SqliteConnectOptions, sqlite::SqliteRow};

use crate::entities::{NameListTemplate, TemplateFilter, TemplateId, TemplateUpdate};
use crate::error::{Result, StoreError};
use crate::primary::PrimaryStore;

/// SQLite-backed [`PrimaryStore`]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Create a new SQLite store for the given connection string,
    /// creating the database file if missing.
    ///
    /// The pool establishes connections lazily and caches them for the
    /// process lifetime.
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| StoreError::Backend(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true);

        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to connect to SQLite: {}", e)))?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Create a store from the `DATABASE_URL` environment variable.
    pub async fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:./data/rollcall.db".to_string());

        Self::new(&database_url).await
    }

    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS templates (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT,
                category TEXT NOT NULL,
                names TEXT NOT NULL,       -- JSON array of person names
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
        "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(format!("Failed to create templates table: {}", e)))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_templates_category ON templates(category)")
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to create category index: {}", e)))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_templates_created ON templates(created_at)")
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to create created_at index: {}", e)))?;

        Ok(())
    }
}

fn format_timestamp(ts: time::OffsetDateTime) -> Result<String> {
    ts.format(&time::format_description::well_known::Rfc3339)
        .map_err(|e| StoreError::Backend(format!("Failed to format timestamp: {}", e)))
}

fn parse_timestamp(raw: &str) -> Result<time::OffsetDateTime> {
    time::OffsetDateTime::parse(raw, &time::format_description::well_known::Rfc3339)
        .map_err(|e| StoreError::Backend(format!("Failed to parse timestamp: {}", e)))
}

fn template_from_row(row: &SqliteRow) -> Result<NameListTemplate> {
    let names_json: String = row.get("names");
    let names: Vec<String> = serde_json::from_str(&names_json)
        .map_err(|e| StoreError::Backend(format!("Failed to deserialize name list: {}", e)))?;

    Ok(NameListTemplate {
        id: TemplateId::from(row.get::<String, _>("id")),
        name: row.get("name"),
        description: row.get("description"),
        category: row.get("category"),
        names,
        created_at: parse_timestamp(&row.get::<String, _>("created_at"))?,
        updated_at: parse_timestamp(&row.get::<String, _>("updated_at"))?,
    })
}

#[async_trait]
impl PrimaryStore for SqliteStore {
    async fn insert(&self, template: &NameListTemplate) -> Result<()> {
        let names_json = serde_json::to_string(&template.names)
            .map_err(|e| StoreError::Backend(format!("Failed to serialize name list: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO templates (id, name, description, category, names, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
        )
        .bind(template.id.as_ref())
        .bind(&template.name)
        .bind(&template.description)
        .bind(&template.category)
        .bind(names_json)
        .bind(format_timestamp(template.created_at)?)
        .bind(format_timestamp(template.updated_at)?)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(format!("Failed to insert template: {}", e)))?;

        Ok(())
    }

    async fn find(&self, filter: &TemplateFilter) -> Result<Vec<NameListTemplate>> {
        let mut sql = String::from(
            "SELECT id, name, description, category, names, created_at, updated_at FROM templates",
        );

        let category = filter.category_filter();
        let mut clauses = Vec::new();
        if category.is_some() {
            clauses.push("category = ?");
        }
        if filter.search.is_some() {
            clauses.push("name LIKE ?");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY created_at DESC");

        let mut query = sqlx::query(&sql);
        if let Some(category) = category {
            query = query.bind(category.to_string());
        }
        if let Some(search) = &filter.search {
            query = query.bind(format!("%{}%", search));
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to list templates: {}", e)))?;

        rows.iter().map(template_from_row).collect()
    }

    async fn find_by_id(&self, id: &TemplateId) -> Result<Option<NameListTemplate>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, category, names, created_at, updated_at
            FROM templates
            WHERE id = ?
        "#,
        )
        .bind(id.as_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(format!("Failed to get template: {}", e)))?;

        row.as_ref().map(template_from_row).transpose()
    }

    async fn update_by_id(&self, id: &TemplateId, update: &TemplateUpdate) -> Result<bool> {
        let names_json = serde_json::to_string(&update.names)
            .map_err(|e| StoreError::Backend(format!("Failed to serialize name list: {}", e)))?;

        let result = sqlx::query(
            r#"
            UPDATE templates
            SET name = ?, description = ?, category = ?, names = ?, updated_at = ?
            WHERE id = ?
        "#,
        )
        .bind(&update.name)
        .bind(&update.description)
        .bind(&update.category)
        .bind(names_json)
        .bind(format_timestamp(time::OffsetDateTime::now_utc())?)
        .bind(id.as_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(format!("Failed to update template: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: &TemplateId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM templates WHERE id = ?")
            .bind(id.as_ref())
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to delete template: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::TemplateInput;
    use tempfile::tempdir;

    // The TempDir handle keeps the database directory alive for the test.
    async fn create_test_store() -> (tempfile::TempDir, SqliteStore) {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite:{}", db_path.display());
        let store = SqliteStore::new(&db_url).await.unwrap();
        (temp_dir, store)
    }

    fn sample(name: &str, category: &str) -> NameListTemplate {
        NameListTemplate::new(TemplateInput {
            name: name.to_string(),
            description: Some("weekly session".to_string()),
            category: category.to_string(),
            names: vec!["张三".to_string(), "Alice".to_string()],
        })
    }

    #[tokio::test]
    async fn test_template_crud() {
        let (_dir, store) = create_test_store().await;
        let template = sample("standup", "work");

        store.insert(&template).await.unwrap();

        let retrieved = store.find_by_id(&template.id).await.unwrap().unwrap();
        assert_eq!(retrieved.name, "standup");
        assert_eq!(retrieved.names, template.names);
        assert_eq!(retrieved.created_at, template.created_at);

        let update = TemplateUpdate {
            name: "daily standup".to_string(),
            description: None,
            category: "work".to_string(),
            names: vec!["Bob".to_string()],
        };
        assert!(store.update_by_id(&template.id, &update).await.unwrap());

        let updated = store.find_by_id(&template.id).await.unwrap().unwrap();
        assert_eq!(updated.name, "daily standup");
        assert_eq!(updated.names, vec!["Bob"]);
        assert!(updated.description.is_none());

        assert!(store.delete_by_id(&template.id).await.unwrap());
        assert!(store.find_by_id(&template.id).await.unwrap().is_none());
        assert!(!store.delete_by_id(&template.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_unknown_id_reports_no_match() {
        let (_dir, store) = create_test_store().await;
        let update = TemplateUpdate {
            name: "x".to_string(),
            description: None,
            category: String::new(),
            names: vec!["a".to_string()],
        };
        let matched = store
            .update_by_id(&TemplateId::from("missing"), &update)
            .await
            .unwrap();
        assert!(!matched);
    }

    #[tokio::test]
    async fn test_find_filters_and_sorts() {
        let (_dir, store) = create_test_store().await;

        let mut older = sample("Weekly Standup", "work");
        older.created_at -= time::Duration::minutes(5);
        let newer = sample("Book Club", "leisure");

        store.insert(&older).await.unwrap();
        store.insert(&newer).await.unwrap();

        let all = store.find(&TemplateFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, newer.id, "newest-created first");

        let work_only = store
            .find(&TemplateFilter {
                category: Some("work".to_string()),
                search: None,
            })
            .await
            .unwrap();
        assert_eq!(work_only.len(), 1);
        assert_eq!(work_only[0].id, older.id);

        let searched = store
            .find(&TemplateFilter {
                category: Some("all".to_string()),
                search: Some("standup".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(searched.len(), 1);
        assert_eq!(searched[0].id, older.id);
    }
}
