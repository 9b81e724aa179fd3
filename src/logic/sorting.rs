//! Sorting logic
//!
//! Pure functions for ordering country lists by name.

use crate::api::Country;
use crate::logic::collation::compare_names;
use crate::SortOrder;
use std::cmp::Ordering;

/// Compare two countries by name in the given order
pub fn compare_countries(a: &Country, b: &Country, order: SortOrder) -> Ordering {
    let result = compare_names(&a.name, &b.name);
    match order {
        SortOrder::Ascending => result,
        SortOrder::Descending => result.reverse(),
    }
}

/// Return a sorted copy of `countries`
///
/// The sort is stable in both directions: countries with identical names keep
/// their relative order from the input.
pub fn sort_countries(countries: &[Country], order: SortOrder) -> Vec<Country> {
    let mut sorted = countries.to_vec();
    sorted.sort_by(|a, b| compare_countries(a, b, order));
    sorted
}
