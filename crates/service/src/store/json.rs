use std::{collections::HashMap, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tokio::{fs, sync::RwLock};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::query::Filter;

use super::{Collection, DeleteOutcome, Document, InsertOutcome, UpdateOutcome};

/// JSON file-backed document collection.
///
/// Holds the full collection as a `HashMap<id, Document>` behind an
/// `RwLock` and writes the file back after every mutation. Intended for
/// deployments where a real document database is overkill; the store's
/// client-side pooling is replaced by the lock.
#[derive(Clone)]
pub struct JsonCollection {
    inner: Arc<RwLock<HashMap<String, Document>>>,
    file_path: PathBuf,
}

impl JsonCollection {
    /// Open the collection file, creating it with an empty map if missing.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let map: HashMap<String, Document> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => {
                let empty: HashMap<String, Document> = HashMap::new();
                fs::write(
                    &file_path,
                    serde_json::to_vec(&empty).map_err(|e| ServiceError::Store(e.to_string()))?,
                )
                .await
                .map_err(|e| ServiceError::Store(e.to_string()))?;
                empty
            }
        };

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(map)), file_path }))
    }

    async fn save(&self) -> Result<(), ServiceError> {
        let map = self.inner.read().await;
        let data = serde_json::to_vec(&*map).map_err(|e| ServiceError::Store(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Store(e.to_string()))?;
        Ok(())
    }
}

/// Merge `patch` into `doc`, returning whether any field value changed.
fn merge_into(doc: &mut Document, patch: Document) -> bool {
    let mut changed = false;
    for (k, v) in patch {
        if doc.get(&k) != Some(&v) {
            doc.insert(k, v);
            changed = true;
        }
    }
    changed
}

#[async_trait]
impl Collection for JsonCollection {
    async fn insert_one(&self, mut doc: Document) -> Result<InsertOutcome, ServiceError> {
        let id = Uuid::new_v4().to_string();
        doc.insert("_id".into(), serde_json::Value::String(id.clone()));
        let mut map = self.inner.write().await;
        map.insert(id.clone(), doc);
        drop(map);
        self.save().await?;
        Ok(InsertOutcome { acknowledged: true, inserted_id: id })
    }

    async fn find_one(&self, id: &str) -> Result<Option<Document>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.get(id).cloned())
    }

    async fn find(&self, filter: &Filter) -> Result<Vec<Document>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.values().filter(|d| filter.matches(d)).cloned().collect())
    }

    async fn update_one(
        &self,
        id: &str,
        patch: Document,
        upsert: bool,
    ) -> Result<UpdateOutcome, ServiceError> {
        let mut map = self.inner.write().await;
        let outcome = if let Some(doc) = map.get_mut(id) {
            let changed = merge_into(doc, patch);
            UpdateOutcome {
                acknowledged: true,
                matched_count: 1,
                modified_count: u64::from(changed),
                upserted_id: None,
            }
        } else if upsert {
            let mut doc = patch;
            doc.insert("_id".into(), serde_json::Value::String(id.to_string()));
            map.insert(id.to_string(), doc);
            UpdateOutcome {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
                upserted_id: Some(id.to_string()),
            }
        } else {
            // No match, no upsert: nothing to persist.
            return Ok(UpdateOutcome {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
                upserted_id: None,
            });
        };
        drop(map);
        self.save().await?;
        Ok(outcome)
    }

    async fn delete_one(&self, id: &str) -> Result<DeleteOutcome, ServiceError> {
        let mut map = self.inner.write().await;
        let existed = map.remove(id).is_some();
        drop(map);
        if existed {
            self.save().await?;
        }
        Ok(DeleteOutcome { acknowledged: true, deleted_count: u64::from(existed) })
    }
}
