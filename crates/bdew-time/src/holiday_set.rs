//! `HolidaySet` — an immutable mapping from date to holiday label.

use std::collections::btree_map::{self, BTreeMap};

use crate::date::Date;

/// Dates mapped to human-readable labels (e.g. `"Heiligabend"`).
///
/// Each date carries at most one label. Only membership matters to the
/// working-day arithmetic; labels are informational.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    entries: BTreeMap<Date, String>,
}

impl HolidaySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the set with `date` added.
    ///
    /// If `date` is already present its existing label is kept.
    pub fn with(mut self, date: Date, label: impl Into<String>) -> Self {
        self.entries.entry(date).or_insert_with(|| label.into());
        self
    }

    /// Union of two sets.
    ///
    /// Membership is a plain logical OR. When both sides label the same date,
    /// the label of `self` wins.
    pub fn union(mut self, other: HolidaySet) -> Self {
        for (date, label) in other.entries {
            self.entries.entry(date).or_insert(label);
        }
        self
    }

    /// Return `true` if `date` is in the set.
    pub fn contains(&self, date: Date) -> bool {
        self.entries.contains_key(&date)
    }

    /// Label of `date`, if it is in the set.
    pub fn label(&self, date: Date) -> Option<&str> {
        self.entries.get(&date).map(String::as_str)
    }

    /// Number of dates in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if the set holds no dates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(date, label)` pairs in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &str)> + '_ {
        self.entries.iter().map(|(d, l)| (*d, l.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(Date, S)> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = (Date, S)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(HolidaySet::new(), |set, (date, label)| set.with(date, label))
    }
}

impl IntoIterator for HolidaySet {
    type Item = (Date, String);
    type IntoIter = btree_map::IntoIter<Date, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
