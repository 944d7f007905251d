//! 内存零件目录
//!
//! `HashMap<PartId, Arc<Part>>` 由读写锁保护。新目录在锁外完整构建，
//! 然后在写锁内一次性替换，读者不会看到部分加载的状态。

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use spacecraft_errors::{AppError, AppResult};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::{Part, PartFilter, PartId, PartRepository};

#[derive(Default)]
struct Catalog {
    parts: HashMap<PartId, Arc<Part>>,
    loaded_at: Option<DateTime<Utc>>,
}

/// 内存零件仓储
#[derive(Default)]
pub struct InMemoryPartRepository {
    catalog: RwLock<Catalog>,
}

impl InMemoryPartRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建并加载初始数据
    pub async fn with_parts(parts: Vec<Part>) -> AppResult<Self> {
        let repo = Self::new();
        repo.initialize(parts).await?;
        Ok(repo)
    }

    fn build(parts: Vec<Part>) -> AppResult<HashMap<PartId, Arc<Part>>> {
        let mut map = HashMap::with_capacity(parts.len());
        for part in parts {
            part.validate()?;
            match map.entry(part.id.clone()) {
                Entry::Occupied(entry) => {
                    return Err(AppError::conflict(format!(
                        "duplicate part id {}",
                        entry.key()
                    )));
                }
                Entry::Vacant(entry) => {
                    entry.insert(Arc::new(part));
                }
            }
        }
        Ok(map)
    }
}

#[async_trait]
impl PartRepository for InMemoryPartRepository {
    async fn get_by_id(&self, id: &PartId) -> AppResult<Arc<Part>> {
        let catalog = self.catalog.read().await;
        catalog
            .parts
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("part with id {} not found", id)))
    }

    async fn list_by_filter(&self, filter: &PartFilter) -> Vec<Arc<Part>> {
        let catalog = self.catalog.read().await;
        if filter.is_empty() {
            return catalog.parts.values().cloned().collect();
        }

        let parts: Vec<Arc<Part>> = catalog
            .parts
            .values()
            .filter(|part| filter.matches(part))
            .cloned()
            .collect();

        debug!(
            scanned = catalog.parts.len(),
            matched = parts.len(),
            "Catalog scan finished"
        );
        parts
    }

    async fn initialize(&self, parts: Vec<Part>) -> AppResult<usize> {
        let parts = Self::build(parts)?;
        let count = parts.len();

        let mut catalog = self.catalog.write().await;
        catalog.parts = parts;
        catalog.loaded_at = Some(Utc::now());
        drop(catalog);

        info!(count, "Catalog initialized");
        Ok(count)
    }

    async fn len(&self) -> usize {
        self.catalog.read().await.parts.len()
    }

    async fn is_initialized(&self) -> bool {
        self.catalog.read().await.loaded_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Manufacturer};

    fn part(id: &str, name: &str, category: Category) -> Part {
        Part::new(PartId::from(id), name, category, Utc::now())
    }

    fn sample() -> Vec<Part> {
        vec![
            part("a", "Main Engine", Category::Engine)
                .with_tags(["engine", "core"])
                .with_manufacturer(Manufacturer::new("AeroGmbH", "Germany", "https://aero")),
            part("b", "Hull Plate", Category::Hull).with_tags(["hull"]),
            part("c", "Main Engine", Category::Hull),
        ]
    }

    fn ids(parts: &[Arc<Part>]) -> Vec<String> {
        let mut ids: Vec<String> = parts.iter().map(|p| p.id.to_string()).collect();
        ids.sort();
        ids
    }

    #[tokio::test]
    async fn test_new_repository_is_empty_and_not_initialized() {
        let repo = InMemoryPartRepository::new();
        assert_eq!(repo.len().await, 0);
        assert!(!repo.is_initialized().await);
        assert!(repo.list_by_filter(&PartFilter::new()).await.is_empty());
    }

    #[tokio::test]
    async fn test_initialize_with_empty_catalog_marks_initialized() {
        let repo = InMemoryPartRepository::new();
        assert_eq!(repo.initialize(vec![]).await.unwrap(), 0);
        assert!(repo.is_initialized().await);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let parts = sample();
        let expected = parts[0].clone();
        let repo = InMemoryPartRepository::with_parts(parts).await.unwrap();

        let found = repo.get_by_id(&PartId::from("a")).await.unwrap();
        assert_eq!(*found, expected);

        let err = repo.get_by_id(&PartId::from("missing")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_by_filter() {
        let repo = InMemoryPartRepository::with_parts(sample()).await.unwrap();

        let all = repo.list_by_filter(&PartFilter::new()).await;
        assert_eq!(ids(&all), vec!["a", "b", "c"]);

        let hulls = repo
            .list_by_filter(&PartFilter::new().with_categories([Category::Hull]))
            .await;
        assert_eq!(ids(&hulls), vec!["b", "c"]);

        let main_engine = PartFilter::new()
            .with_names(["Main Engine"])
            .with_categories([Category::Engine]);
        assert_eq!(ids(&repo.list_by_filter(&main_engine).await), vec!["a"]);

        let nothing = PartFilter::new().with_tags(["fuel"]);
        assert!(repo.list_by_filter(&nothing).await.is_empty());
    }

    #[tokio::test]
    async fn test_initialize_rejects_duplicate_ids_and_keeps_previous_catalog() {
        let repo = InMemoryPartRepository::with_parts(sample()).await.unwrap();

        let duplicated = vec![
            part("x", "One", Category::Wing),
            part("x", "Two", Category::Wing),
        ];
        let err = repo.initialize(duplicated).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(repo.len().await, 3);
    }

    #[tokio::test]
    async fn test_initialize_rejects_invalid_part() {
        let repo = InMemoryPartRepository::new();
        let err = repo
            .initialize(vec![part("a", "Broken", Category::Fuel).with_price(-5.0)])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(!repo.is_initialized().await);
    }

    #[tokio::test]
    async fn test_initialize_replaces_contents() {
        let repo = InMemoryPartRepository::with_parts(sample()).await.unwrap();
        repo.initialize(vec![part("z", "Wing", Category::Wing)])
            .await
            .unwrap();

        assert_eq!(repo.len().await, 1);
        assert!(repo.get_by_id(&PartId::from("a")).await.is_err());
        assert!(repo.get_by_id(&PartId::from("z")).await.is_ok());
    }
}
