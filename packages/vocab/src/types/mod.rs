//! Domain types shared across the library.

pub mod cursor;
pub mod pair;
pub mod post;

pub use cursor::Cursor;
pub use pair::{StoredPair, VocabularyPair};
pub use post::RawPost;
