//! # Codeshare Core
//!
//! The domain layer of the code-sharing service.
//! This crate contains the snippet lifecycle with zero infrastructure dependencies:
//! identifier generation, validation, and the share/retrieval services that drive
//! a [`ports::SnippetRepository`].

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError};
