//! End-to-end walk through the control panel flow on a three-country list
//!
//! Fiji (Oceania, 18274), Lithuania (Europe, 65300), Peru (Americas, 1285216)

use countryviz::api::{parse_countries, Country};
use countryviz::logic::filters::FilterCriteria;
use countryviz::model::{CatalogModel, ListOrder, Model};
use countryviz::SortOrder;

const BODY: &str = r#"[
    {"name":"Fiji","region":"Oceania","area":18274},
    {"name":"Lithuania","region":"Europe","area":65300},
    {"name":"Peru","region":"Americas","area":1285216}
]"#;

fn loaded() -> CatalogModel {
    CatalogModel::default().loaded(parse_countries(BODY).unwrap())
}

fn names(countries: &[Country]) -> Vec<&str> {
    countries.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn test_area_filter_only_keeps_fiji() {
    let catalog = loaded().with_area_filter(true).filtered();
    assert_eq!(names(&catalog.countries), vec!["Fiji"]);
}

#[test]
fn test_region_filter_only_keeps_fiji() {
    let catalog = loaded().with_region_filter(true).filtered();
    assert_eq!(names(&catalog.countries), vec!["Fiji"]);
}

#[test]
fn test_both_filters_keep_fiji() {
    let catalog = loaded()
        .with_area_filter(true)
        .with_region_filter(true)
        .filtered();
    assert_eq!(names(&catalog.countries), vec!["Fiji"]);
}

#[test]
fn test_reset_restores_all_three_in_fetch_order() {
    let catalog = loaded()
        .with_area_filter(true)
        .with_region_filter(true)
        .filtered()
        .reset();

    assert_eq!(names(&catalog.countries), vec!["Fiji", "Lithuania", "Peru"]);
    assert!(!catalog.filter_by_area);
    assert!(!catalog.filter_by_region);
}

#[test]
fn test_descending_then_reset_keeps_selector() {
    let catalog = loaded().sorted(SortOrder::Descending);
    assert_eq!(names(&catalog.countries), vec!["Peru", "Lithuania", "Fiji"]);

    let catalog = catalog.reset();
    assert_eq!(names(&catalog.countries), vec!["Fiji", "Lithuania", "Peru"]);
    assert_eq!(catalog.sort_order, SortOrder::Descending);
    assert_eq!(catalog.list_order, ListOrder::AsFetched);
    assert!(catalog.order_out_of_date());
}

#[test]
fn test_null_area_passes_area_filter() {
    let body = r#"[
        {"name":"Lithuania","region":"Europe","area":65300},
        {"name":"Heard Island","region":"Antarctic","area":null},
        {"name":"Bouvet Island","region":"Antarctic"}
    ]"#;
    let catalog = CatalogModel::default()
        .loaded(parse_countries(body).unwrap())
        .with_area_filter(true)
        .filtered();

    assert_eq!(names(&catalog.countries), vec!["Heard Island"]);
}

#[test]
fn test_model_before_load_is_inert() {
    let mut model = Model::new(FilterCriteria::default(), false);
    model.update_catalog(|c| c.sorted(SortOrder::Descending));
    model.update_catalog(|c| c.with_area_filter(true).filtered());
    model.update_catalog(|c| c.reset());

    assert!(model.catalog.countries.is_empty());
    assert_eq!(model.max_scroll(), 0);
}
