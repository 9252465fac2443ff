//! Entity list ordering.
//!
//! The sort key is a closed set: creation time in either direction, or
//! display name ascending. Name ordering is locale-aware (Korean collation
//! at secondary strength, so case and width differences are ignored) rather
//! than raw byte order. Null sort fields follow the null-is-larger
//! convention: after non-null values ascending, before them descending.
//! Ties keep whatever order the stable sort preserves.

use std::cmp::Ordering;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::locale;
use serde::{Deserialize, Serialize};

/// Anything the sort strategy can order.
pub trait Sortable {
    /// Creation timestamp, if the entity carries one.
    fn created_at(&self) -> Option<DateTime<Utc>>;

    /// Display name used by name ordering, if the entity carries one.
    fn sort_name(&self) -> Option<&str>;
}

/// The closed set of list orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Newest first. The default ordering.
    #[default]
    CreatedDesc,
    /// Oldest first.
    CreatedAsc,
    /// Name ascending under Korean collation.
    NameAsc,
}

impl SortKey {
    /// Compare two entities under this key.
    #[must_use]
    pub fn compare<E: Sortable>(self, a: &E, b: &E) -> Ordering {
        match self {
            SortKey::CreatedAsc => cmp_null_large(a.created_at(), b.created_at(), Ord::cmp),
            SortKey::CreatedDesc => {
                cmp_null_large(a.created_at(), b.created_at(), Ord::cmp).reverse()
            }
            SortKey::NameAsc => cmp_null_large(a.sort_name(), b.sort_name(), |a, b| {
                korean_collator().compare(a, b)
            }),
        }
    }

    /// Stable-sort a slice in place under this key.
    pub fn sort<E: Sortable>(self, items: &mut [E]) {
        items.sort_by(|a, b| self.compare(a, b));
    }

    /// The `order=` query value the row store expects for this key.
    #[must_use]
    pub fn order_param(self) -> &'static str {
        match self {
            SortKey::CreatedDesc => "created_at.desc",
            SortKey::CreatedAsc => "created_at.asc",
            SortKey::NameAsc => "name.asc",
        }
    }
}

/// Ascending comparison with `None` sorting after `Some`.
fn cmp_null_large<T>(
    a: Option<T>,
    b: Option<T>,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Korean-locale collator, built once from compiled collation data.
fn korean_collator() -> &'static Collator {
    static COLLATOR: OnceLock<Collator> = OnceLock::new();
    COLLATOR.get_or_init(|| {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Secondary);
        Collator::try_new(&locale!("ko").into(), options)
            .expect("compiled collation data for the ko locale")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        created_at: Option<DateTime<Utc>>,
        name: Option<&'static str>,
    }

    impl Sortable for Item {
        fn created_at(&self) -> Option<DateTime<Utc>> {
            self.created_at
        }

        fn sort_name(&self) -> Option<&str> {
            self.name
        }
    }

    fn at(secs: i64) -> Option<DateTime<Utc>> {
        Some(Utc.timestamp_opt(secs, 0).unwrap())
    }

    fn item(secs: Option<i64>, name: Option<&'static str>) -> Item {
        Item {
            created_at: secs.map(|s| Utc.timestamp_opt(s, 0).unwrap()),
            name,
        }
    }

    #[test]
    fn created_desc_puts_newest_first() {
        let mut items = vec![item(Some(1), None), item(Some(3), None), item(Some(2), None)];
        SortKey::CreatedDesc.sort(&mut items);
        assert_eq!(items[0].created_at, at(3));
        assert_eq!(items[2].created_at, at(1));
    }

    #[test]
    fn name_asc_uses_korean_collation() {
        let mut items = vec![
            item(None, Some("나")),
            item(None, Some("가")),
            item(None, Some("다")),
        ];
        SortKey::NameAsc.sort(&mut items);
        let names: Vec<_> = items.iter().map(|i| i.name.unwrap()).collect();
        assert_eq!(names, ["가", "나", "다"]);
    }

    #[test]
    fn name_collation_ignores_case_and_width() {
        let collator = korean_collator();
        assert_eq!(collator.compare("abc", "ABC"), Ordering::Equal);
        // Halfwidth vs fullwidth Latin "A".
        assert_eq!(collator.compare("A", "Ａ"), Ordering::Equal);
    }

    #[test]
    fn nulls_sort_after_values_ascending_and_before_descending() {
        let mut items = vec![item(None, None), item(Some(2), None), item(Some(1), None)];
        SortKey::CreatedAsc.sort(&mut items);
        assert_eq!(items[0].created_at, at(1));
        assert!(items[2].created_at.is_none());

        SortKey::CreatedDesc.sort(&mut items);
        assert!(items[0].created_at.is_none());
        assert_eq!(items[1].created_at, at(2));

        let mut items = vec![item(None, None), item(None, Some("가"))];
        SortKey::NameAsc.sort(&mut items);
        assert_eq!(items[0].name, Some("가"));
        assert!(items[1].name.is_none());
    }

    #[test]
    fn sorting_is_idempotent_for_all_keys() {
        for key in [SortKey::CreatedDesc, SortKey::CreatedAsc, SortKey::NameAsc] {
            let mut items = vec![
                item(Some(2), Some("나")),
                item(None, None),
                item(Some(1), Some("가")),
                item(Some(3), Some("다")),
            ];
            key.sort(&mut items);
            let once = items.clone();
            key.sort(&mut items);
            assert_eq!(items, once, "{key:?} not idempotent");
        }
    }

    #[test]
    fn order_params_match_row_store_columns() {
        assert_eq!(SortKey::CreatedDesc.order_param(), "created_at.desc");
        assert_eq!(SortKey::CreatedAsc.order_param(), "created_at.asc");
        assert_eq!(SortKey::NameAsc.order_param(), "name.asc");
    }
}
