//! Data access for the stock store.
//!
//! Lookups that can miss return `Option`, deletes report whether a row was
//! removed, and every product is loaded together with its category.

pub mod categories;
pub mod products;
