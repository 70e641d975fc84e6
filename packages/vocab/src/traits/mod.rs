//! Core trait abstractions.
//!
//! One trait per collaborator: `PostFeed` (where posts come from),
//! `VocabStore` (where pairs go), `CursorStore` (where the poll position
//! lives). Implementations live in sibling crates or in `stores`/`testing`.

pub mod cursor;
pub mod feed;
pub mod store;

pub use cursor::CursorStore;
pub use feed::{FeedPage, PostFeed};
pub use store::VocabStore;
