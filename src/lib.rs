pub mod config;
pub mod error;
pub mod handlers;
pub mod person;
pub mod routes;
pub mod store;
