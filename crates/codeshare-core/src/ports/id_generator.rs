use crate::domain::ShareId;
use crate::error::DomainError;

/// Source of fresh share identifiers.
///
/// Implementations are pure generators and never consult the store.
/// A failing entropy source must surface as an error, never as a guessable id.
pub trait ShareIdGenerator: Send + Sync {
    fn generate(&self) -> Result<ShareId, DomainError>;
}
