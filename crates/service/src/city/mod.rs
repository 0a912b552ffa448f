//! Cities: the root of the directory.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::CityService;
