//! SeaORM entities.

pub mod snippet;
