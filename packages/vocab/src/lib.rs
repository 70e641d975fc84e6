//! Vocabulary harvesting library.
//!
//! Polls a feed of social-media posts, extracts vocabulary pairs (an
//! English term and its Japanese translation) from post text, and persists
//! new pairs into a document store, skipping terms that already exist.
//!
//! The heart of the crate is [`extract`]: a pure function that decides
//! whether a post announces a vocabulary pair and, if so, where the term
//! ends and the translation begins. Everything else is thin plumbing over
//! the [`traits`] seams.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vocab::{harvest_once, MemoryVocabStore};
//! use vocab::testing::MockFeed;
//!
//! let feed = MockFeed::new().with_posts(posts);
//! let store = MemoryVocabStore::new();
//!
//! let report = harvest_once(&feed, &store, None, 20).await?;
//! println!("inserted {} new pairs", report.inserted);
//! ```
//!
//! # Modules
//!
//! - [`extract`] - The extraction heuristic
//! - [`traits`] - Trait seams (PostFeed, VocabStore, CursorStore)
//! - [`harvest`] - The one-pass polling driver
//! - [`feeds`] - Feed wrappers (rate limiting)
//! - [`stores`] - Storage implementations (in-memory)
//! - [`testing`] - Mock implementations for tests

pub mod error;
pub mod extract;
pub mod feeds;
pub mod harvest;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export the core surface at the crate root
pub use error::{CursorError, FeedError, HarvestError, StoreError};
pub use extract::{clean_post_text, extract, is_japanese_script};
pub use harvest::{harvest_once, HarvestReport};
pub use traits::{CursorStore, FeedPage, PostFeed, VocabStore};
pub use types::{Cursor, RawPost, StoredPair, VocabularyPair};

// Re-export wrappers and stores
pub use feeds::{FeedExt, RateLimitedFeed};
pub use stores::{MemoryCursorStore, MemoryVocabStore};
