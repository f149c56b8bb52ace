//! Domain layer - Catalog records and report types

pub mod product;

pub use product::*;
