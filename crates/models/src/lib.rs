//! Persistent records of the directory: cities, their streets, and the
//! shops on those streets, plus the field rules each record must satisfy.

pub mod errors;
pub mod validation;
pub mod db;
pub mod city;
pub mod street;
pub mod shop;

#[cfg(test)]
mod tests;
