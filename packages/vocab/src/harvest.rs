//! One harvest pass: fetch a page of posts, extract pairs, store new ones.
//!
//! This is the single parameterized driver over the trait seams. The cursor
//! travels through it explicitly: the caller passes the last saved cursor in
//! and persists the returned one.

use crate::error::HarvestResult;
use crate::extract::extract;
use crate::traits::{PostFeed, VocabStore};
use crate::types::Cursor;

/// Counters from one harvest pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestReport {
    /// Posts fetched from the feed
    pub fetched: usize,

    /// Posts that yielded a vocabulary pair
    pub pairs_found: usize,

    /// Pairs inserted into the store
    pub inserted: usize,

    /// Pairs skipped because the term already existed
    pub duplicates: usize,

    /// Cursor to persist for the next pass. `None` only when the feed had
    /// nothing and no cursor was passed in.
    pub next_cursor: Option<Cursor>,
}

/// Run one fetch → extract → store pass.
///
/// Posts that are not vocabulary announcements are skipped silently (logged
/// at debug); only feed or store failures surface as errors.
pub async fn harvest_once<F, S>(
    feed: &F,
    store: &S,
    cursor: Option<&Cursor>,
    limit: u32,
) -> HarvestResult<HarvestReport>
where
    F: PostFeed,
    S: VocabStore,
{
    let page = feed.fetch(cursor, limit).await?;

    let mut report = HarvestReport {
        fetched: page.posts.len(),
        next_cursor: page.next_cursor.or_else(|| cursor.cloned()),
        ..Default::default()
    };

    for post in &page.posts {
        let Some(pair) = extract(&post.text) else {
            tracing::debug!(post_id = %post.id, "no vocabulary pair in post");
            continue;
        };
        report.pairs_found += 1;

        // Unguarded find-then-insert; concurrent harvesters can race.
        if store.find_by_term(&pair.term).await?.is_some() {
            tracing::debug!(term = %pair.term, "term already stored, skipping");
            report.duplicates += 1;
            continue;
        }

        let stored = store.insert(&pair).await?;
        tracing::info!(id = %stored.id, term = %stored.term, "stored new vocabulary pair");
        report.inserted += 1;
    }

    tracing::info!(
        fetched = report.fetched,
        pairs_found = report.pairs_found,
        inserted = report.inserted,
        duplicates = report.duplicates,
        "harvest pass complete"
    );

    Ok(report)
}
