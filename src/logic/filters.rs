//! Filter predicates
//!
//! Two independent predicates narrow the working list:
//! - **Area**: area strictly below the reference country's area. A `null`
//!   area counts as zero; a country without an area field never passes.
//! - **Region**: region exactly equal to the target region
//!
//! Enabled predicates are combined with AND. The reference area is resolved
//! by the caller (once, against the original snapshot) and passed in.

use crate::api::Country;

pub const DEFAULT_REFERENCE_COUNTRY: &str = "Lithuania";
pub const DEFAULT_TARGET_REGION: &str = "Oceania";

/// Which reference country and region the filters compare against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub reference_country: String,
    pub target_region: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            reference_country: DEFAULT_REFERENCE_COUNTRY.to_string(),
            target_region: DEFAULT_TARGET_REGION.to_string(),
        }
    }
}

/// The two filter checkboxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterFlags {
    pub by_area: bool,
    pub by_region: bool,
}

impl FilterFlags {
    pub fn any(&self) -> bool {
        self.by_area || self.by_region
    }
}

/// Look up the area of `reference` by exact name match
///
/// Returns None when the country is absent or has no area field.
pub fn resolve_area_threshold(countries: &[Country], reference: &str) -> Option<f64> {
    countries
        .iter()
        .find(|c| c.name == reference)
        .and_then(|c| c.area.comparable())
}

/// Area predicate. Without a threshold every country passes.
pub fn passes_area(country: &Country, threshold: Option<f64>) -> bool {
    match threshold {
        Some(threshold) => country.area.comparable().is_some_and(|area| area < threshold),
        None => true,
    }
}

/// Region predicate (case-sensitive exact match)
pub fn passes_region(country: &Country, target_region: &str) -> bool {
    country.region == target_region
}

/// Keep the countries that pass every enabled predicate, preserving order
pub fn apply_filters(
    countries: &[Country],
    flags: FilterFlags,
    area_threshold: Option<f64>,
    target_region: &str,
) -> Vec<Country> {
    countries
        .iter()
        .filter(|c| !flags.by_area || passes_area(c, area_threshold))
        .filter(|c| !flags.by_region || passes_region(c, target_region))
        .cloned()
        .collect()
}
