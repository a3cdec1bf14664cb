//! Persistence hook and read-side statistics.
//!
//! The engine takes no position on storage technology: persistence is an
//! injected [`TemplateStore`] capability. [`MemoryTemplateStore`] is the
//! DashMap-backed reference implementation used by tests and by callers
//! that do not need durable storage.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use serde::Serialize;
use uuid::Uuid;

use super::types::{EmailTemplate, NewTemplate, PersistenceError, TemplateType};

/// Storage capability injected into the catalog and the statistics
/// aggregator.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Persist a draft, assigning identity and timestamps, and return the
    /// stored record.
    async fn persist(&self, draft: NewTemplate) -> Result<EmailTemplate, PersistenceError>;

    /// All stored templates. Reads need not be transactionally consistent
    /// with concurrent writes.
    async fn list_all(&self) -> Result<Vec<EmailTemplate>, PersistenceError>;
}

/// In-memory template storage
pub struct MemoryTemplateStore {
    templates: DashMap<Uuid, EmailTemplate>,
}

impl Default for MemoryTemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self {
            templates: DashMap::new(),
        }
    }

    /// Number of stored templates
    pub fn count(&self) -> usize {
        self.templates.len()
    }
}

#[async_trait]
impl TemplateStore for MemoryTemplateStore {
    async fn persist(&self, draft: NewTemplate) -> Result<EmailTemplate, PersistenceError> {
        let now = Utc::now();
        let template = EmailTemplate {
            id: Uuid::new_v4(),
            name: draft.name,
            subject: draft.subject,
            html_content: draft.html_content,
            text_content: draft.text_content,
            description: draft.description,
            is_active: draft.is_active,
            creator_id: draft.creator_id,
            template_type: draft.template_type,
            created_at: now,
            updated_at: now,
        };

        template
            .validate()
            .map_err(|e| PersistenceError::Rejected(e.to_string()))?;

        tracing::debug!(id = %template.id, name = %template.name, "Stored template");
        self.templates.insert(template.id, template.clone());
        Ok(template)
    }

    async fn list_all(&self) -> Result<Vec<EmailTemplate>, PersistenceError> {
        Ok(self
            .templates
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }
}

/// Template counts grouped by type
#[derive(Debug, Clone, Serialize)]
pub struct TemplateStatistics {
    pub total: u64,
    pub by_type: HashMap<TemplateType, u64>,
}

/// Count stored templates, total and per type. Computed fresh on every
/// call; `sum(by_type) == total`.
pub async fn get_statistics(
    store: &dyn TemplateStore,
) -> Result<TemplateStatistics, PersistenceError> {
    let templates = store.list_all().await?;

    let mut by_type: HashMap<TemplateType, u64> = HashMap::new();
    for template in &templates {
        *by_type.entry(template.template_type).or_insert(0) += 1;
    }

    let stats = TemplateStatistics {
        total: templates.len() as u64,
        by_type,
    };

    tracing::debug!(total = stats.total, "Computed template statistics");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, template_type: TemplateType) -> NewTemplate {
        NewTemplate {
            name: name.to_string(),
            subject: "Subject".to_string(),
            html_content: "<p>Body</p>".to_string(),
            text_content: None,
            description: None,
            is_active: true,
            creator_id: Uuid::new_v4(),
            template_type,
        }
    }

    #[tokio::test]
    async fn test_persist_assigns_identity() {
        let store = MemoryTemplateStore::new();

        let first = store
            .persist(draft("First", TemplateType::General))
            .await
            .unwrap();
        let second = store
            .persist(draft("Second", TemplateType::General))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.count(), 2);
    }

    #[tokio::test]
    async fn test_persist_rejects_invalid_draft() {
        let store = MemoryTemplateStore::new();

        let result = store.persist(draft("", TemplateType::General)).await;
        assert!(matches!(result, Err(PersistenceError::Rejected(_))));
        assert_eq!(store.count(), 0);
    }

    #[tokio::test]
    async fn test_statistics_counts_by_type() {
        let store = MemoryTemplateStore::new();
        for _ in 0..3 {
            store
                .persist(draft("Invite", TemplateType::Invitation))
                .await
                .unwrap();
        }
        store
            .persist(draft("Welcome", TemplateType::Welcome))
            .await
            .unwrap();

        let stats = get_statistics(&store).await.unwrap();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.by_type[&TemplateType::Invitation], 3);
        assert_eq!(stats.by_type[&TemplateType::Welcome], 1);
    }

    #[tokio::test]
    async fn test_statistics_sum_matches_total() {
        let store = MemoryTemplateStore::new();
        let types = [
            TemplateType::Invitation,
            TemplateType::Welcome,
            TemplateType::Welcome,
            TemplateType::Notification,
            TemplateType::General,
        ];
        for ty in types {
            store.persist(draft("T", ty)).await.unwrap();
        }

        let stats = get_statistics(&store).await.unwrap();
        assert_eq!(stats.by_type.values().sum::<u64>(), stats.total);
    }

    #[tokio::test]
    async fn test_statistics_empty_store() {
        let store = MemoryTemplateStore::new();
        let stats = get_statistics(&store).await.unwrap();
        assert_eq!(stats.total, 0);
        assert!(stats.by_type.is_empty());
    }
}
