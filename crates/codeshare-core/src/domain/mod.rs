//! Domain entities - the core business objects.

mod category;
mod share_id;
mod snippet;

pub use category::{Category, highlight_language};
pub use share_id::{DEFAULT_SHARE_ID_LENGTH, MAX_SHARE_ID_LENGTH, RandomShareIdGenerator, ShareId};
pub use snippet::{Snippet, SnippetView};
