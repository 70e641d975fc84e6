//! Persistence trait for the poll cursor.

use async_trait::async_trait;

use crate::error::CursorResult;
use crate::types::Cursor;

/// Durable storage for the cursor between polls.
///
/// The harvest driver takes a cursor in and hands the advanced cursor back;
/// loading and saving it is the caller's job through this trait, so no
/// component holds "last seen post" as global state.
#[async_trait]
pub trait CursorStore: Send + Sync {
    /// Load the saved cursor, `None` on first run.
    async fn load(&self) -> CursorResult<Option<Cursor>>;

    /// Persist the cursor for the next run.
    async fn save(&self, cursor: &Cursor) -> CursorResult<()>;
}
