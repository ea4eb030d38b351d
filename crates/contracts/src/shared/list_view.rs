//! Generic list view-model: base collection, search text, equality filters and
//! sort order, with the visible collection recomputed on every change.

use crate::enums::SortDirection;
use crate::shared::query::{filter_by_query, sort_by, Fields};

/// Filter value that disables an equality filter
pub const FILTER_ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EqualityFilter {
    pub field: &'static str,
    pub value: String,
}

impl EqualityFilter {
    pub fn is_active(&self) -> bool {
        self.value != FILTER_ALL
    }

    fn accepts<T: Fields>(&self, record: &T) -> bool {
        if !self.is_active() {
            return true;
        }
        record
            .field_value(self.field)
            .map(|v| v.as_text() == self.value)
            .unwrap_or(false)
    }
}

/// Page state for a searchable, filterable, sortable list.
///
/// `visible` always equals `sort(filters(search(items)))` for the current inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    phase: LoadPhase,
    items: Vec<T>,
    search_fields: Vec<&'static str>,
    search_query: String,
    filters: Vec<EqualityFilter>,
    sort_field: String,
    sort_direction: SortDirection,
    visible: Vec<T>,
}

impl<T: Fields + Clone> ListView<T> {
    /// Empty view in the `Loading` phase. Every name in `filter_fields` starts at `all`.
    pub fn new(
        search_fields: &[&'static str],
        filter_fields: &[&'static str],
        sort_field: &str,
        sort_direction: SortDirection,
    ) -> Self {
        Self {
            phase: LoadPhase::Loading,
            items: Vec::new(),
            search_fields: search_fields.to_vec(),
            search_query: String::new(),
            filters: filter_fields
                .iter()
                .map(|field| EqualityFilter {
                    field: *field,
                    value: FILTER_ALL.to_string(),
                })
                .collect(),
            sort_field: sort_field.to_string(),
            sort_direction,
            visible: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn visible(&self) -> &[T] {
        &self.visible
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn sort_field(&self) -> &str {
        &self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Current value of the equality filter on `field`, `None` if there is no such filter
    pub fn filter(&self, field: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.value.as_str())
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.iter().filter(|f| f.is_active()).count()
    }

    // ------------------------------------------------------------------
    // Inputs
    // ------------------------------------------------------------------

    /// Installs the loaded collection and moves to `Ready`
    pub fn finish_loading(&mut self, items: Vec<T>) {
        self.items = items;
        self.phase = LoadPhase::Ready;
        self.recompute();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.recompute();
    }

    /// Sets an equality filter; unknown fields are ignored
    pub fn set_filter(&mut self, field: &str, value: impl Into<String>) {
        if let Some(filter) = self.filters.iter_mut().find(|f| f.field == field) {
            filter.value = value.into();
            self.recompute();
        }
    }

    pub fn clear_filters(&mut self) {
        self.search_query.clear();
        for filter in &mut self.filters {
            filter.value = FILTER_ALL.to_string();
        }
        self.recompute();
    }

    pub fn set_sort(&mut self, field: &str, direction: SortDirection) {
        self.sort_field = field.to_string();
        self.sort_direction = direction;
        self.recompute();
    }

    /// Column header click: flips the direction on the current field,
    /// starts ascending on a new one.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field.to_string();
            self.sort_direction = SortDirection::Asc;
        }
        self.recompute();
    }

    /// Applies a `field-direction` preset such as `members-desc`.
    /// Returns `false` for a malformed preset.
    pub fn apply_sort_preset(&mut self, preset: &str) -> bool {
        let Some((field, direction)) = preset.rsplit_once('-') else {
            return false;
        };
        let Some(direction) = SortDirection::from_code(direction) else {
            return false;
        };
        if field.is_empty() {
            return false;
        }
        self.set_sort(field, direction);
        true
    }

    /// Current sort as a `field-direction` preset
    pub fn sort_preset(&self) -> String {
        format!("{}-{}", self.sort_field, self.sort_direction.code())
    }

    // ------------------------------------------------------------------
    // Base collection mutations
    // ------------------------------------------------------------------

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.recompute();
    }

    /// Removes every item matching `predicate`, returns how many were removed
    pub fn remove_where(&mut self, predicate: impl Fn(&T) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        let removed = before - self.items.len();
        if removed > 0 {
            self.recompute();
        }
        removed
    }

    /// Applies `update` to every matching item, returns how many were updated
    pub fn update_where(&mut self, predicate: impl Fn(&T) -> bool, mut update: impl FnMut(&mut T)) -> usize {
        let mut updated = 0;
        for item in self.items.iter_mut().filter(|item| predicate(item)) {
            update(item);
            updated += 1;
        }
        if updated > 0 {
            self.recompute();
        }
        updated
    }

    /// Applies `update` to every item and recomputes
    pub fn update_all(&mut self, update: impl FnMut(&mut T)) {
        self.items.iter_mut().for_each(update);
        self.recompute();
    }

    pub fn recompute(&mut self) {
        let searched = filter_by_query(&self.items, &self.search_query, &self.search_fields);
        let filtered: Vec<T> = searched
            .into_iter()
            .filter(|item| self.filters.iter().all(|f| f.accepts(item)))
            .collect();
        self.visible = sort_by(&filtered, &self.sort_field, self.sort_direction);
    }
}
