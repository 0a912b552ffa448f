//! Pieces shared by every crate in the workspace: logging setup and
//! small wire types that are not tied to the directory domain.

pub mod types;
pub mod utils;
