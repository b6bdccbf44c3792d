//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod id_generator;
mod repository;

pub use id_generator::ShareIdGenerator;
pub use repository::SnippetRepository;
