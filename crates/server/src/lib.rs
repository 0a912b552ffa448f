//! HTTP surface of the city/street/shop directory.

pub mod errors;
pub mod extract;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::{build_app, run, run_with_config};
pub use state::ServerState;
