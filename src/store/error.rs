use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no entity stored under key {0}")]
    MissingKey(i64),

    #[error("an entity already exists under key {0}")]
    Duplicate(i64),

    #[error("store backend error: {0}")]
    Backend(String),
}
