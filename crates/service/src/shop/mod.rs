//! Shops: listing with city/street/open-now filters, and creation.

pub mod domain;
pub mod filter;
pub mod repository;
pub mod service;

pub use filter::{OpenState, ShopFilter};
pub use service::ShopService;
