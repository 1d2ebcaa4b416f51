use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::error::StoreError;
use super::Store;

/// Entities a [`MemoryStore`] can hold: anything carrying an integer key.
/// A key of 0 means "not yet assigned" and asks the store to pick one.
pub trait Keyed {
    fn key(&self) -> i64;
    fn set_key(&mut self, key: i64);
}

struct Inner<E> {
    entities: BTreeMap<i64, E>,
    dirty: bool,
}

/// In-memory store adapter: a keyed map behind an async RwLock.
///
/// Mutations apply under the write lock immediately, so a lookup followed by
/// a mutation within one request observes its own prior writes. There is no
/// version token on entities; concurrent writers to the same key are
/// last-commit-wins.
pub struct MemoryStore<E> {
    inner: RwLock<Inner<E>>,
}

impl<E: Keyed + Clone> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                entities: BTreeMap::new(),
                dirty: false,
            }),
        }
    }

    /// Build a store pre-populated with `entities`, assigning keys to any
    /// entity that has none.
    pub fn with_entities(entities: Vec<E>) -> Self {
        let mut map = BTreeMap::new();
        for mut entity in entities {
            if entity.key() == 0 {
                let next = map.last_key_value().map(|(k, _)| k + 1).unwrap_or(1);
                entity.set_key(next);
            }
            map.insert(entity.key(), entity);
        }
        Self {
            inner: RwLock::new(Inner {
                entities: map,
                dirty: false,
            }),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.entities.len()
    }
}

impl<E: Keyed + Clone> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Keyed + Clone + Send + Sync> Store<E, i64> for MemoryStore<E> {
    async fn select_all(&self) -> Result<Vec<E>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.entities.values().cloned().collect())
    }

    async fn select_one(&self, key: i64) -> Result<Option<E>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.entities.get(&key).cloned())
    }

    async fn insert(&self, mut entity: E) -> Result<E, StoreError> {
        let mut inner = self.inner.write().await;
        if entity.key() == 0 {
            let next = inner.entities.last_key_value().map(|(k, _)| k + 1).unwrap_or(1);
            entity.set_key(next);
        } else if inner.entities.contains_key(&entity.key()) {
            return Err(StoreError::Duplicate(entity.key()));
        }
        inner.entities.insert(entity.key(), entity.clone());
        inner.dirty = true;
        Ok(entity)
    }

    async fn update(&self, key: i64, entity: E) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.entities.contains_key(&key) {
            return Err(StoreError::MissingKey(key));
        }
        inner.entities.insert(key, entity);
        inner.dirty = true;
        Ok(())
    }

    async fn delete(&self, key: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if inner.entities.remove(&key).is_none() {
            return Err(StoreError::MissingKey(key));
        }
        inner.dirty = true;
        Ok(())
    }

    async fn save(&self) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if inner.dirty {
            tracing::debug!(entities = inner.entities.len(), "committed store mutations");
            inner.dirty = false;
        }
        Ok(())
    }
}
