/// Generic list helpers (sorting and sort indicators)
use std::cmp::Ordering;

/// Trait for row types that support column sorting
pub trait Sortable {
    /// Compare two rows by the given field
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list by the given field
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// CSS class for a column's sort indicator
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}
