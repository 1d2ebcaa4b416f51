pub mod error;
pub mod memory;

pub use error::StoreError;
pub use memory::MemoryStore;

use async_trait::async_trait;

/// Generic entity store capability.
///
/// One parametrized interface covers every entity type; concrete adapters
/// (currently only [`MemoryStore`]) implement it directly, no per-entity
/// subclassing. Mutations become visible to subsequent calls on the same
/// handle immediately; `save` is the explicit commit that flushes pending
/// state.
#[async_trait]
pub trait Store<E, K>: Send + Sync {
    /// All entities in stable key order.
    async fn select_all(&self) -> Result<Vec<E>, StoreError>;

    /// Single entity by key, `None` when absent.
    async fn select_one(&self, key: K) -> Result<Option<E>, StoreError>;

    /// Insert a new entity, returning it with its assigned key.
    async fn insert(&self, entity: E) -> Result<E, StoreError>;

    /// Replace the entity at `key` wholesale.
    async fn update(&self, key: K, entity: E) -> Result<(), StoreError>;

    /// Remove the entity at `key`.
    async fn delete(&self, key: K) -> Result<(), StoreError>;

    /// Commit pending mutations.
    async fn save(&self) -> Result<(), StoreError>;
}
