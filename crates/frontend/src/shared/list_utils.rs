//! Shared list controls: search box, filter selects and sort headers.

use crate::shared::icons::icon;
use contracts::enums::SortDirection;
use contracts::shared::list_view::FILTER_ALL;
use leptos::prelude::*;

/// Sort arrow for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, direction: SortDirection) -> &'static str {
    if current_field != field {
        return " ⇅";
    }
    match direction {
        SortDirection::Asc => " ▲",
        SortDirection::Desc => " ▼",
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

/// `(value, label)` options of a filter select, starting with the `all` option
pub fn filter_options(all_label: &str, values: &[&str]) -> Vec<(String, String)> {
    std::iter::once((FILTER_ALL.to_string(), all_label.to_string()))
        .chain(values.iter().map(|v| (v.to_string(), v.to_string())))
        .collect()
}

/// Rows paired with their position, for `<For>` keys. New records take
/// `len + 1` as id, which can repeat after a delete, so the id alone is not
/// a unique key.
pub fn indexed<T: Clone>(rows: &[T]) -> Vec<(usize, T)> {
    rows.iter().cloned().enumerate().collect()
}

/// Search box; every keystroke is passed on immediately
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button class="search-input__clear" title="Clear" on:click=move |_| on_change.run(String::new())>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[component]
pub fn FilterSelect(
    #[prop(into)] value: Signal<String>,
    options: Vec<(String, String)>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="filter-select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {options
                .into_iter()
                .map(|(val, label)| {
                    let selected_val = val.clone();
                    view! {
                        <option value=val selected=move || value.get() == selected_val>{label}</option>
                    }
                })
                .collect_view()}
        </select>
    }
}

/// Clickable `<th>` that reports its field on click
#[component]
pub fn SortableHeader(
    #[prop(into)] label: String,
    sort_field: &'static str,
    #[prop(into)] current_field: Signal<String>,
    #[prop(into)] direction: Signal<SortDirection>,
    on_sort: Callback<String>,
) -> impl IntoView {
    view! {
        <th class="table__header-cell table__sortable-header" on:click=move |_| on_sort.run(sort_field.to_string())>
            {label}
            <span class=move || get_sort_class(&current_field.get(), sort_field)>
                {move || get_sort_indicator(&current_field.get(), sort_field, direction.get())}
            </span>
        </th>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", SortDirection::Asc), " ▲");
        assert_eq!(get_sort_indicator("name", "name", SortDirection::Desc), " ▼");
        assert_eq!(get_sort_indicator("name", "email", SortDirection::Asc), " ⇅");
        assert_eq!(get_sort_class("name", "name"), "sort-icon active");
    }

    #[test]
    fn test_filter_options_start_with_all() {
        let options = filter_options("All Departments", &["Engineering", "Sales"]);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0], ("all".to_string(), "All Departments".to_string()));
        assert_eq!(options[2].0, "Sales");
    }

    #[test]
    fn test_indexed_keeps_duplicates_apart() {
        let rows = indexed(&[5, 4, 5]);
        assert_eq!(rows, vec![(0, 5), (1, 4), (2, 5)]);
    }
}
