//! File-backed cursor storage.

use async_trait::async_trait;
use std::path::PathBuf;

use vocab::error::CursorResult;
use vocab::traits::cursor::CursorStore;
use vocab::types::Cursor;

/// Persists the cursor as a single line in a local file.
///
/// A missing file means no cursor yet (first run).
pub struct FileCursorStore {
    path: PathBuf,
}

impl FileCursorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CursorStore for FileCursorStore {
    async fn load(&self) -> CursorResult<Option<Cursor>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let value = contents.trim();
                if value.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(Cursor::new(value)))
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, cursor: &Cursor) -> CursorResult<()> {
        tokio::fs::write(&self.path, cursor.as_str()).await?;
        Ok(())
    }
}
