//! Analytics bookmarks
//!
//! Saved outlet/period/comparison combinations of the multi-outlet
//! analytics view, kept as one JSON array under `analytics-bookmarks`.

use serde::{Deserialize, Serialize};

use super::dashboard::{AnalyticsPeriod, ComparisonMode, Outlet, keys};
use super::store::PreferenceStore;
use crate::error::{PreferenceError, PreferenceResult};
use crate::util;

/// A saved analytics view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsBookmark {
    pub id: i64,
    pub name: String,
    pub outlets: Vec<Outlet>,
    pub time_period: AnalyticsPeriod,
    pub comparison_mode: ComparisonMode,
    /// RFC 3339
    pub created_at: String,
}

/// Bookmarks in insertion order.
///
/// A value that does not parse reads as no bookmarks.
pub fn list_bookmarks(store: &PreferenceStore) -> Vec<AnalyticsBookmark> {
    let Some(raw) = store.get(keys::ANALYTICS_BOOKMARKS) else {
        return Vec::new();
    };
    serde_json::from_str(raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Malformed analytics bookmarks, ignoring");
        Vec::new()
    })
}

/// Append a bookmark and persist. The name is trimmed and must not be empty.
pub fn save_bookmark(
    store: &mut PreferenceStore,
    name: &str,
    outlets: Vec<Outlet>,
    time_period: AnalyticsPeriod,
    comparison_mode: ComparisonMode,
) -> PreferenceResult<AnalyticsBookmark> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PreferenceError::InvalidBookmark("name is empty".into()));
    }

    let mut bookmarks = list_bookmarks(store);
    let mut id = util::snowflake_id();
    while bookmarks.iter().any(|b| b.id == id) {
        id = util::snowflake_id();
    }

    let bookmark = AnalyticsBookmark {
        id,
        name: name.to_string(),
        outlets,
        time_period,
        comparison_mode,
        created_at: util::now_rfc3339(),
    };
    bookmarks.push(bookmark.clone());
    write_bookmarks(store, &bookmarks)?;

    tracing::debug!(id = bookmark.id, name = %bookmark.name, "Bookmark saved");
    Ok(bookmark)
}

/// Remove the bookmark with `id` and persist
pub fn delete_bookmark(store: &mut PreferenceStore, id: i64) -> PreferenceResult<AnalyticsBookmark> {
    let mut bookmarks = list_bookmarks(store);
    let index = bookmarks
        .iter()
        .position(|b| b.id == id)
        .ok_or(PreferenceError::BookmarkNotFound(id))?;
    let removed = bookmarks.remove(index);
    write_bookmarks(store, &bookmarks)?;

    tracing::debug!(id, "Bookmark deleted");
    Ok(removed)
}

fn write_bookmarks(store: &mut PreferenceStore, bookmarks: &[AnalyticsBookmark]) -> PreferenceResult<()> {
    let json = serde_json::to_string(bookmarks)?;
    store.set(keys::ANALYTICS_BOOKMARKS, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn save(store: &mut PreferenceStore, name: &str) -> AnalyticsBookmark {
        save_bookmark(
            store,
            name,
            vec![Outlet::Downtown, Outlet::Mall, Outlet::Airport],
            AnalyticsPeriod::Month,
            ComparisonMode::OutletVsOutlet,
        )
        .unwrap()
    }

    #[test]
    fn test_save_and_list() {
        let mut store = PreferenceStore::in_memory();
        assert!(list_bookmarks(&store).is_empty());

        let first = save(&mut store, "  Weekend peak ");
        let second = save(&mut store, "Airport only");

        assert_eq!(first.name, "Weekend peak");
        let listed = list_bookmarks(&store);
        assert_eq!(listed, vec![first, second]);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut store = PreferenceStore::in_memory();
        let err = save_bookmark(
            &mut store,
            "   ",
            vec![],
            AnalyticsPeriod::Today,
            ComparisonMode::PeriodVsPeriod,
        )
        .unwrap_err();
        assert!(matches!(err, PreferenceError::InvalidBookmark(_)));
        assert_eq!(store.get(keys::ANALYTICS_BOOKMARKS), None);
    }

    #[test]
    fn test_delete() {
        let mut store = PreferenceStore::in_memory();
        let a = save(&mut store, "A");
        let b = save(&mut store, "B");

        let removed = delete_bookmark(&mut store, a.id).unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(list_bookmarks(&store), vec![b]);

        assert!(matches!(
            delete_bookmark(&mut store, a.id),
            Err(PreferenceError::BookmarkNotFound(id)) if id == a.id
        ));
    }

    #[test]
    fn test_stored_shape() {
        let mut store = PreferenceStore::in_memory();
        save(&mut store, "Shape");
        let raw: serde_json::Value =
            serde_json::from_str(store.get(keys::ANALYTICS_BOOKMARKS).unwrap()).unwrap();
        let entry = &raw[0];
        assert_eq!(entry["outlets"], serde_json::json!(["downtown", "mall", "airport"]));
        assert_eq!(entry["timePeriod"], "month");
        assert_eq!(entry["comparisonMode"], "outlet-vs-outlet");
        assert!(entry["createdAt"].is_string());
    }

    #[test]
    fn test_malformed_value_reads_as_empty() {
        let mut store = PreferenceStore::in_memory();
        store.set(keys::ANALYTICS_BOOKMARKS, "[{broken").unwrap();
        assert!(list_bookmarks(&store).is_empty());
    }
}
