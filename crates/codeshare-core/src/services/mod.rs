//! Application services - the snippet lifecycle on top of the ports.

mod retrieval;
mod share;

pub use retrieval::RetrievalService;
pub use share::{CategoryPolicy, ShareService, ShareSubmission};

#[cfg(test)]
pub(crate) mod testing;
