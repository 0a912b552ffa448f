//! Streets, each belonging to one city.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::StreetService;
