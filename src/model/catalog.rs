//! Catalog Model
//!
//! The country list state record and its transitions. Every transition takes
//! the model by value and returns the next model, so the whole load → sort →
//! filter → reset flow can be exercised without a terminal.
//!
//! Invariants:
//! - `countries` is always a permutation or subset of `original`
//! - `original` is only ever replaced by `loaded`

use crate::api::Country;
use crate::logic::filters::{self, FilterCriteria, FilterFlags};
use crate::logic::sorting;
use crate::SortOrder;

/// Which ordering the working list currently reflects
///
/// Reset restores the fetched order without touching `sort_order`, so the
/// selector can disagree with what is on screen. This makes that visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListOrder {
    AsFetched,
    Sorted(SortOrder),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogModel {
    /// Snapshot from the initial fetch (reset baseline)
    original: Vec<Country>,

    /// Working list shown as cards
    pub countries: Vec<Country>,

    /// Value of the sort selector
    pub sort_order: SortOrder,

    /// Ordering the working list is actually in
    pub list_order: ListOrder,

    /// Area filter checkbox
    pub filter_by_area: bool,

    /// Region filter checkbox
    pub filter_by_region: bool,

    /// Reference country and target region
    pub criteria: FilterCriteria,

    /// Area of the reference country, resolved against `original` on load
    area_threshold: Option<f64>,
}

impl CatalogModel {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self {
            original: Vec::new(),
            countries: Vec::new(),
            sort_order: SortOrder::default(),
            list_order: ListOrder::AsFetched,
            filter_by_area: false,
            filter_by_region: false,
            criteria,
            area_threshold: None,
        }
    }

    pub fn original(&self) -> &[Country] {
        &self.original
    }

    pub fn area_threshold(&self) -> Option<f64> {
        self.area_threshold
    }

    pub fn flags(&self) -> FilterFlags {
        FilterFlags {
            by_area: self.filter_by_area,
            by_region: self.filter_by_region,
        }
    }

    /// Install the fetched list as both the snapshot and the working list
    pub fn loaded(self, countries: Vec<Country>) -> Self {
        let area_threshold =
            filters::resolve_area_threshold(&countries, &self.criteria.reference_country);

        Self {
            original: countries.clone(),
            countries,
            list_order: ListOrder::AsFetched,
            area_threshold,
            ..self
        }
    }

    /// Sort the working list by name and record the selected order
    pub fn sorted(self, order: SortOrder) -> Self {
        let countries = sorting::sort_countries(&self.countries, order);

        Self {
            countries,
            sort_order: order,
            list_order: ListOrder::Sorted(order),
            ..self
        }
    }

    pub fn with_area_filter(self, enabled: bool) -> Self {
        Self {
            filter_by_area: enabled,
            ..self
        }
    }

    pub fn with_region_filter(self, enabled: bool) -> Self {
        Self {
            filter_by_region: enabled,
            ..self
        }
    }

    /// Narrow the current working list with the enabled filters
    ///
    /// Filters compose on top of earlier filtering. With no flag set the
    /// working list is left as is.
    pub fn filtered(self) -> Self {
        let flags = self.flags();
        if !flags.any() {
            return self;
        }

        let countries = filters::apply_filters(
            &self.countries,
            flags,
            self.area_threshold,
            &self.criteria.target_region,
        );

        Self { countries, ..self }
    }

    /// Restore the fetched list and clear both filter flags
    ///
    /// `sort_order` is deliberately kept; `list_order` goes back to
    /// `AsFetched`.
    pub fn reset(self) -> Self {
        Self {
            countries: self.original.clone(),
            list_order: ListOrder::AsFetched,
            filter_by_area: false,
            filter_by_region: false,
            ..self
        }
    }

    /// True when the working list does not reflect the selector value
    pub fn order_out_of_date(&self) -> bool {
        self.list_order != ListOrder::Sorted(self.sort_order) && !self.countries.is_empty()
    }
}

impl Default for CatalogModel {
    fn default() -> Self {
        Self::new(FilterCriteria::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Area;

    fn make_country(name: &str, region: &str, area: f64) -> Country {
        Country {
            name: name.to_string(),
            region: region.to_string(),
            area: Area::Known(area),
        }
    }

    fn sample() -> Vec<Country> {
        vec![
            make_country("Fiji", "Oceania", 18274.0),
            make_country("Lithuania", "Europe", 65300.0),
            make_country("Peru", "Americas", 1285216.0),
        ]
    }

    fn names(catalog: &CatalogModel) -> Vec<&str> {
        catalog.countries.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_new_catalog_is_empty() {
        let catalog = CatalogModel::default();
        assert!(catalog.countries.is_empty());
        assert!(catalog.original().is_empty());
        assert_eq!(catalog.sort_order, SortOrder::Ascending);
        assert!(!catalog.filter_by_area);
        assert!(!catalog.filter_by_region);
    }

    #[test]
    fn test_loaded_sets_both_lists() {
        let catalog = CatalogModel::default().loaded(sample());
        assert_eq!(catalog.countries, sample());
        assert_eq!(catalog.original(), sample().as_slice());
        assert_eq!(catalog.area_threshold(), Some(65300.0));
    }

    #[test]
    fn test_loaded_replaces_instead_of_merging() {
        let catalog = CatalogModel::default()
            .loaded(sample())
            .loaded(vec![make_country("Nauru", "Oceania", 21.0)]);
        assert_eq!(names(&catalog), vec!["Nauru"]);
        assert_eq!(catalog.original().len(), 1);
        assert_eq!(catalog.area_threshold(), None);
    }

    #[test]
    fn test_area_filter_only() {
        let catalog = CatalogModel::default()
            .loaded(sample())
            .with_area_filter(true)
            .filtered();
        assert_eq!(names(&catalog), vec!["Fiji"]);
    }

    #[test]
    fn test_region_filter_only() {
        let catalog = CatalogModel::default()
            .loaded(sample())
            .with_region_filter(true)
            .filtered();
        assert_eq!(names(&catalog), vec!["Fiji"]);
    }

    #[test]
    fn test_both_filters() {
        let catalog = CatalogModel::default()
            .loaded(sample())
            .with_area_filter(true)
            .with_region_filter(true)
            .filtered();
        assert_eq!(names(&catalog), vec!["Fiji"]);
    }

    #[test]
    fn test_filter_without_flags_keeps_list() {
        let catalog = CatalogModel::default()
            .loaded(sample())
            .with_region_filter(true)
            .filtered()
            .with_region_filter(false)
            .filtered();

        // Not a restore: the earlier narrowing stays
        assert_eq!(names(&catalog), vec!["Fiji"]);
    }

    #[test]
    fn test_filters_narrow_cumulatively() {
        let countries = vec![
            make_country("Fiji", "Oceania", 18274.0),
            make_country("Australia", "Oceania", 7692024.0),
            make_country("Lithuania", "Europe", 65300.0),
            make_country("Malta", "Europe", 316.0),
        ];

        let catalog = CatalogModel::default()
            .loaded(countries)
            .with_region_filter(true)
            .filtered()
            .with_region_filter(false)
            .with_area_filter(true)
            .filtered();

        // Malta passes the area filter but was already removed by region
        assert_eq!(names(&catalog), vec!["Fiji"]);
    }

    #[test]
    fn test_area_threshold_survives_reference_removal() {
        // First pass removes Lithuania itself; the second pass must still
        // compare against its area instead of degrading to pass-through
        let countries = vec![
            make_country("Fiji", "Oceania", 18274.0),
            make_country("Lithuania", "Europe", 65300.0),
            make_country("Australia", "Oceania", 7692024.0),
        ];

        let catalog = CatalogModel::default()
            .loaded(countries)
            .with_area_filter(true)
            .filtered();
        assert_eq!(names(&catalog), vec!["Fiji"]);
        assert_eq!(catalog.area_threshold(), Some(65300.0));

        let again = catalog.filtered();
        assert_eq!(names(&again), vec!["Fiji"]);
    }

    #[test]
    fn test_area_filter_without_reference_is_noop() {
        let countries = vec![
            make_country("Fiji", "Oceania", 18274.0),
            make_country("Peru", "Americas", 1285216.0),
        ];
        let catalog = CatalogModel::default()
            .loaded(countries.clone())
            .with_area_filter(true)
            .filtered();
        assert_eq!(catalog.countries, countries);
    }

    #[test]
    fn test_area_filter_keeps_null_area() {
        let heard = Country {
            name: "Heard Island".to_string(),
            region: "Antarctic".to_string(),
            area: Area::Null,
        };
        let bouvet = Country {
            name: "Bouvet Island".to_string(),
            region: "Antarctic".to_string(),
            area: Area::Missing,
        };
        let catalog = CatalogModel::default()
            .loaded(vec![
                make_country("Lithuania", "Europe", 65300.0),
                heard.clone(),
                bouvet,
            ])
            .with_area_filter(true)
            .filtered();
        assert_eq!(catalog.countries, vec![heard]);
    }

    #[test]
    fn test_custom_criteria() {
        let criteria = FilterCriteria {
            reference_country: "Fiji".to_string(),
            target_region: "Europe".to_string(),
        };
        let mut countries = sample();
        countries.push(make_country("Malta", "Europe", 316.0));

        let catalog = CatalogModel::new(criteria)
            .loaded(countries)
            .with_area_filter(true)
            .with_region_filter(true)
            .filtered();
        assert_eq!(names(&catalog), vec!["Malta"]);
    }

    #[test]
    fn test_sorted_updates_order_and_list() {
        let catalog = CatalogModel::default()
            .loaded(sample())
            .sorted(SortOrder::Descending);
        assert_eq!(names(&catalog), vec!["Peru", "Lithuania", "Fiji"]);
        assert_eq!(catalog.sort_order, SortOrder::Descending);
        assert_eq!(catalog.list_order, ListOrder::Sorted(SortOrder::Descending));
        assert_eq!(catalog.original(), sample().as_slice());
    }

    #[test]
    fn test_reset_restores_fetch_order_and_keeps_sort_selector() {
        let catalog = CatalogModel::default()
            .loaded(sample())
            .sorted(SortOrder::Descending)
            .with_area_filter(true)
            .with_region_filter(true)
            .filtered()
            .reset();

        assert_eq!(catalog.countries, sample());
        assert!(!catalog.filter_by_area);
        assert!(!catalog.filter_by_region);
        assert_eq!(catalog.sort_order, SortOrder::Descending);
        assert_eq!(catalog.list_order, ListOrder::AsFetched);
        assert!(catalog.order_out_of_date());
    }

    #[test]
    fn test_order_out_of_date() {
        let catalog = CatalogModel::default();
        assert!(!catalog.order_out_of_date());

        let catalog = catalog.loaded(sample());
        assert!(catalog.order_out_of_date());

        let catalog = catalog.sorted(SortOrder::Ascending);
        assert!(!catalog.order_out_of_date());
    }

    #[test]
    fn test_operations_on_empty_list_are_safe() {
        let catalog = CatalogModel::default()
            .sorted(SortOrder::Descending)
            .with_area_filter(true)
            .with_region_filter(true)
            .filtered()
            .reset();
        assert!(catalog.countries.is_empty());
        assert!(catalog.original().is_empty());
    }
}
