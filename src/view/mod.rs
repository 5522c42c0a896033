//! Client-side derived view over the equipment collection.
//!
//! The view is a pure recomputation from the fetched collection plus the
//! current search/filter/sort state; nothing here is persisted or mutated
//! incrementally.

pub mod form;

use chrono::NaiveDate;

use crate::models::Equipment;

/// Column a view can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Type,
    Status,
    LastCleaned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::Name,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortConfig {
    /// Sorting on the already-active key flips the direction; a new key
    /// resets to ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Search, filter and sort state driving the derived view.
///
/// `None` filters mean "all".
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub search_term: String,
    pub type_filter: Option<String>,
    pub status_filter: Option<String>,
    pub sort: SortConfig,
}

/// Derive the filtered and sorted view: search by name (case-insensitive
/// substring), then type filter, then status filter, then sort. String keys
/// compare on their raw text; the date key compares as calendar dates.
pub fn derive_view(records: &[Equipment], view: &ViewState) -> Vec<Equipment> {
    let search = view.search_term.to_lowercase();

    let mut result: Vec<Equipment> = records
        .iter()
        .filter(|r| {
            search.is_empty()
                || r.name
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&search)
        })
        .filter(|r| {
            view.type_filter
                .as_deref()
                .map_or(true, |t| r.equipment_type.as_deref() == Some(t))
        })
        .filter(|r| {
            view.status_filter
                .as_deref()
                .map_or(true, |s| r.status.as_deref() == Some(s))
        })
        .cloned()
        .collect();

    result.sort_unstable_by(|a, b| {
        let ord = match view.sort.key {
            SortKey::Name => text(&a.name).cmp(text(&b.name)),
            SortKey::Type => text(&a.equipment_type).cmp(text(&b.equipment_type)),
            SortKey::Status => text(&a.status).cmp(text(&b.status)),
            SortKey::LastCleaned => date(&a.last_cleaned).cmp(&date(&b.last_cleaned)),
        };
        match view.sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    result
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

// unparseable or absent dates order before parseable ones
fn date(field: &Option<String>) -> Option<NaiveDate> {
    field
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

/// CSV header row of the exported view.
pub const CSV_HEADER: &str = "Name,Type,Status,Last Cleaned";

/// Serialize the derived view as CSV text: header row, one row per record,
/// fields joined by literal commas. Embedded commas and quotes are not
/// escaped; callers exporting such values get a malformed file. Rows are
/// joined by `\n` with no trailing newline.
pub fn export_csv(records: &[Equipment]) -> String {
    let mut out = String::from(CSV_HEADER);
    for record in records {
        out.push('\n');
        out.push_str(text(&record.name));
        out.push(',');
        out.push_str(text(&record.equipment_type));
        out.push(',');
        out.push_str(text(&record.status));
        out.push(',');
        out.push_str(text(&record.last_cleaned));
    }
    out
}
