//! Service layer providing the directory's business operations on top of models.
//! - Repository traits separate data access from business rules.
//! - Reuses validation and entity definitions in `models` crate.
//! - The current time is injected through [`clock::Clock`], never read globally.

pub mod errors;
pub mod clock;
pub mod city;
pub mod street;
pub mod shop;
#[cfg(test)]
pub mod test_support;
