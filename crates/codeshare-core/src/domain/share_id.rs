//! Share identifiers and the default random generator.

use std::fmt;

use rand::TryRngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ports::ShareIdGenerator;

/// Length of identifiers issued when nothing else is configured.
pub const DEFAULT_SHARE_ID_LENGTH: usize = 10;

/// Longest identifier the store schema accepts.
pub const MAX_SHARE_ID_LENGTH: usize = 64;

/// URL-safe alphabet. Exactly 64 symbols so `byte & 63` is unbiased.
const ALPHABET: &[u8; 64] = b"useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";

/// Public share identifier addressing one snippet.
///
/// Lookups accept whatever the caller supplies; only generated identifiers
/// are guaranteed to be drawn from the URL-safe alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShareId(String);

impl ShareId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ShareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShareId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for ShareId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generates identifiers from the operating system's entropy source.
#[derive(Debug, Clone)]
pub struct RandomShareIdGenerator {
    length: usize,
}

impl RandomShareIdGenerator {
    /// Lengths outside `1..=MAX_SHARE_ID_LENGTH` fall back to the default.
    pub fn new(length: usize) -> Self {
        let length = if (1..=MAX_SHARE_ID_LENGTH).contains(&length) {
            length
        } else {
            DEFAULT_SHARE_ID_LENGTH
        };
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomShareIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SHARE_ID_LENGTH)
    }
}

impl ShareIdGenerator for RandomShareIdGenerator {
    fn generate(&self) -> Result<ShareId, DomainError> {
        let mut bytes = vec![0u8; self.length];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| DomainError::Internal(format!("entropy source failed: {e}")))?;

        let id = bytes
            .iter()
            .map(|b| ALPHABET[(b & 63) as usize] as char)
            .collect();
        Ok(ShareId(id))
    }
}
