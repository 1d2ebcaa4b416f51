use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum PersonError {
    #[error("'{0}' is not a valid person name")]
    InvalidName(String),

    #[error("path id {path_id} does not match payload id {payload_id}")]
    IdMismatch { path_id: i64, payload_id: i64 },

    #[error("id {0} is reserved for unassigned entities and cannot be an upsert target")]
    ReservedId(i64),

    #[error("no filter criteria supplied")]
    EmptyFilter,

    #[error("no results matched your filters")]
    NoResults,

    #[error("person with id {0} does not exist")]
    NotFound(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}
