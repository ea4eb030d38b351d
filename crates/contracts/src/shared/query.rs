//! Substring search, sorting and grouping over in-memory record collections.
//!
//! Records expose their fields by name through [`Fields`]. A dotted path such as
//! `live.totalPoints` is resolved by the record itself, usually by delegating the
//! tail of the path to a nested value with [`split_path`].

use crate::enums::SortDirection;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Value of a single record field, as seen by search and sort
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
}

impl FieldValue {
    /// String form used for substring search and equality filters
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            FieldValue::Text(_) | FieldValue::Date(_) => None,
        }
    }

    /// Relational comparison: numbers numerically, dates chronologically,
    /// everything else by its string form.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                _ => self.as_text().cmp(&other.as_text()),
            },
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<u8> for FieldValue {
    fn from(value: u8) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<usize> for FieldValue {
    fn from(value: usize) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

/// Named field access for records that can be searched, filtered and sorted
pub trait Fields {
    /// Value of the field at `path`, `None` when the record has no such field
    /// or the field is empty.
    fn field_value(&self, path: &str) -> Option<FieldValue>;
}

/// Splits `"live.totalPoints"` into `("live", Some("totalPoints"))`
pub fn split_path(path: &str) -> (&str, Option<&str>) {
    match path.split_once('.') {
        Some((head, tail)) => (head, Some(tail)),
        None => (path, None),
    }
}

/// Ordering of two optional field values. Missing values sort first.
pub fn compare_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.compare(b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Returns `true` when any of `fields` contains `query`, ignoring case.
/// `query` must already be lowercased.
fn matches_query<T: Fields>(record: &T, lowercase_query: &str, fields: &[&str]) -> bool {
    fields.iter().any(|field| {
        record
            .field_value(field)
            .map(|value| value.as_text().to_lowercase().contains(lowercase_query))
            .unwrap_or(false)
    })
}

/// Keeps the records where any of `fields` contains `query` (case-insensitive).
///
/// An empty query returns the records unchanged and in the same order.
pub fn filter_by_query<T: Fields + Clone>(records: &[T], query: &str, fields: &[&str]) -> Vec<T> {
    if query.is_empty() {
        return records.to_vec();
    }

    let lowercase_query = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_query(*record, &lowercase_query, fields))
        .cloned()
        .collect()
}

/// Returns a new sequence ordered by `field`.
///
/// The sort is stable: records with equal keys keep their relative order in
/// both directions.
pub fn sort_by<T: Fields + Clone>(records: &[T], field: &str, direction: SortDirection) -> Vec<T> {
    let mut keyed: Vec<(Option<FieldValue>, &T)> = records
        .iter()
        .map(|record| (record.field_value(field), record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let cmp = compare_values(a.as_ref(), b.as_ref());
        if direction.is_ascending() {
            cmp
        } else {
            cmp.reverse()
        }
    });

    keyed.into_iter().map(|(_, record)| record.clone()).collect()
}

/// Groups records by the string form of `field`, in order of first appearance.
/// Records without the field are grouped under an empty key.
pub fn group_by<T: Fields + Clone>(records: &[T], field: &str) -> Vec<(String, Vec<T>)> {
    let mut groups: Vec<(String, Vec<T>)> = Vec::new();
    for record in records {
        let key = record
            .field_value(field)
            .map(|v| v.as_text())
            .unwrap_or_default();
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(record.clone()),
            None => groups.push((key, vec![record.clone()])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        score: u32,
        owner: Option<Owner>,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Owner {
        city: &'static str,
    }

    impl Fields for Owner {
        fn field_value(&self, path: &str) -> Option<FieldValue> {
            match path {
                "city" => Some(self.city.into()),
                _ => None,
            }
        }
    }

    impl Fields for Row {
        fn field_value(&self, path: &str) -> Option<FieldValue> {
            match split_path(path) {
                ("name", None) => Some(self.name.into()),
                ("score", None) => Some(self.score.into()),
                ("owner", Some(rest)) => self.owner.as_ref()?.field_value(rest),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Charlie", score: 30, owner: Some(Owner { city: "Oslo" }) },
            Row { name: "alice", score: 10, owner: None },
            Row { name: "Bob", score: 20, owner: Some(Owner { city: "Berlin" }) },
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let data = rows();
        assert_eq!(filter_by_query(&data, "", &["name"]), data);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let found = filter_by_query(&rows(), "ALI", &["name"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "alice");
    }

    #[test]
    fn test_filter_matches_numbers_as_text() {
        let found = filter_by_query(&rows(), "20", &["name", "score"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Bob");
    }

    #[test]
    fn test_filter_nested_path_skips_missing_values() {
        let found = filter_by_query(&rows(), "o", &["owner.city"]);
        let names: Vec<_> = found.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Charlie"]);
    }

    #[test]
    fn test_filter_unknown_field_matches_nothing() {
        assert!(filter_by_query(&rows(), "a", &["nope"]).is_empty());
    }

    #[test]
    fn test_sort_numeric_both_directions() {
        let asc: Vec<_> = sort_by(&rows(), "score", SortDirection::Asc)
            .iter()
            .map(|r| r.score)
            .collect();
        assert_eq!(asc, vec![10, 20, 30]);

        let desc: Vec<_> = sort_by(&rows(), "score", SortDirection::Desc)
            .iter()
            .map(|r| r.score)
            .collect();
        assert_eq!(desc, vec![30, 20, 10]);
    }

    #[test]
    fn test_sort_strings_use_code_point_order() {
        let names: Vec<_> = sort_by(&rows(), "name", SortDirection::Asc)
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Bob", "Charlie", "alice"]);
    }

    #[test]
    fn test_sort_nested_missing_first() {
        let names: Vec<_> = sort_by(&rows(), "owner.city", SortDirection::Asc)
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["alice", "Bob", "Charlie"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let data = vec![
            Row { name: "first", score: 1, owner: None },
            Row { name: "second", score: 1, owner: None },
            Row { name: "third", score: 0, owner: None },
        ];
        let asc: Vec<_> = sort_by(&data, "score", SortDirection::Asc)
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(asc, vec!["third", "first", "second"]);

        let desc: Vec<_> = sort_by(&data, "score", SortDirection::Desc)
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(desc, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_group_by_keeps_first_appearance_order() {
        let data = vec![
            Row { name: "a", score: 2, owner: None },
            Row { name: "b", score: 1, owner: None },
            Row { name: "c", score: 2, owner: None },
        ];
        let groups = group_by(&data, "score");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "2");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "1");
    }

    #[test]
    fn test_number_text_has_no_trailing_zero() {
        assert_eq!(FieldValue::from(2450u32).as_text(), "2450");
        assert_eq!(FieldValue::from(91.5).as_text(), "91.5");
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone, PartialEq)]
        struct Item {
            label: String,
            rank: u32,
        }

        impl Fields for Item {
            fn field_value(&self, path: &str) -> Option<FieldValue> {
                match path {
                    "label" => Some(self.label.clone().into()),
                    "rank" => Some(self.rank.into()),
                    _ => None,
                }
            }
        }

        proptest! {
            #[test]
            fn filtered_records_all_contain_query(
                labels in proptest::collection::vec("[a-zA-Z]{0,8}", 0..20),
                query in "[a-zA-Z]{1,3}",
            ) {
                let items: Vec<Item> = labels
                    .into_iter()
                    .enumerate()
                    .map(|(i, label)| Item { label, rank: i as u32 })
                    .collect();
                let found = filter_by_query(&items, &query, &["label"]);
                let needle = query.to_lowercase();
                for item in &found {
                    prop_assert!(item.label.to_lowercase().contains(&needle));
                }
                let expected = items
                    .iter()
                    .filter(|i| i.label.to_lowercase().contains(&needle))
                    .count();
                prop_assert_eq!(found.len(), expected);
            }

            #[test]
            fn desc_is_reversed_asc_without_ties(
                ranks in proptest::collection::hash_set(0u32..1000, 0..30),
            ) {
                let items: Vec<Item> = ranks
                    .into_iter()
                    .map(|rank| Item { label: String::new(), rank })
                    .collect();
                let mut asc = sort_by(&items, "rank", SortDirection::Asc);
                asc.reverse();
                let desc = sort_by(&items, "rank", SortDirection::Desc);
                prop_assert_eq!(asc, desc);
            }
        }
    }
}
