//! Snippet stores that need no external service.

mod memory;

pub use memory::InMemorySnippetRepository;
