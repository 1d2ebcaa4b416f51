use std::sync::Arc;

use crate::store::Store;

use super::entity::{is_valid_name, Person};
use super::error::PersonError;
use super::filter::PersonFilter;

/// Outcome of an upsert: either a fresh entity was created or an existing
/// one was replaced in place.
#[derive(Debug, Clone, PartialEq)]
pub enum Upserted {
    Created(Person),
    Replaced,
}

/// All person semantics live here; the versioned HTTP handlers are thin
/// adapters over this one service.
#[derive(Clone)]
pub struct PersonService {
    store: Arc<dyn Store<Person, i64>>,
}

impl PersonService {
    pub fn new(store: Arc<dyn Store<Person, i64>>) -> Self {
        Self { store }
    }

    /// Unfiltered listing, in stable store order.
    pub async fn list(&self) -> Result<Vec<Person>, PersonError> {
        Ok(self.store.select_all().await?)
    }

    /// Filtered listing. The empty-filter check runs before any store call;
    /// an empty post-filter result is a distinct rejection, never an empty
    /// success payload.
    pub async fn find(&self, filter: &PersonFilter) -> Result<Vec<Person>, PersonError> {
        if filter.is_empty() {
            return Err(PersonError::EmptyFilter);
        }
        let people = self.store.select_all().await?;
        let matched = filter.apply(people);
        if matched.is_empty() {
            return Err(PersonError::NoResults);
        }
        Ok(matched)
    }

    pub async fn get(&self, id: i64) -> Result<Person, PersonError> {
        self.store
            .select_one(id)
            .await?
            .ok_or(PersonError::NotFound(id))
    }

    /// Validate, insert, commit. Name failures never touch the store.
    pub async fn create(&self, person: Person) -> Result<Person, PersonError> {
        if !is_valid_name(&person.name) {
            return Err(PersonError::InvalidName(person.name));
        }
        let created = self.store.insert(person).await?;
        self.store.save().await?;
        tracing::info!(id = created.id, "created person");
        Ok(created)
    }

    /// PUT semantics: replace when the target exists, create when it does
    /// not. Name validation runs first so an invalid name wins over an id
    /// mismatch when both are present; the id check runs before any store
    /// lookup.
    pub async fn upsert(&self, id: i64, person: Person) -> Result<Upserted, PersonError> {
        if !is_valid_name(&person.name) {
            return Err(PersonError::InvalidName(person.name));
        }
        // Key 0 means "assign me an id" to the store; letting it through
        // would create the entity somewhere other than the path id.
        if id == 0 {
            return Err(PersonError::ReservedId(id));
        }
        if person.id != id {
            return Err(PersonError::IdMismatch {
                path_id: id,
                payload_id: person.id,
            });
        }
        match self.store.select_one(id).await? {
            None => Ok(Upserted::Created(self.create(person).await?)),
            Some(_) => {
                // Full replacement, not a merge.
                self.store.update(id, person).await?;
                self.store.save().await?;
                tracing::info!(id, "replaced person");
                Ok(Upserted::Replaced)
            }
        }
    }

    /// Look up first, then delete; a missing id must leave the store
    /// untouched rather than be a silent no-op.
    pub async fn delete(&self, id: i64) -> Result<(), PersonError> {
        if self.store.select_one(id).await?.is_none() {
            return Err(PersonError::NotFound(id));
        }
        self.store.delete(id).await?;
        self.store.save().await?;
        tracing::info!(id, "deleted person");
        Ok(())
    }
}
