pub mod entity;
pub mod error;
pub mod filter;
pub mod service;

pub use entity::Person;
pub use error::PersonError;
pub use filter::PersonFilter;
pub use service::{PersonService, Upserted};
