use std::cmp::Ordering;

use catalog_core::{
    collate, derive_view, filter_products, paginate, sort_products, PerPage, Product, SortOption,
};
use pretty_assertions::assert_eq;

fn catalog() -> Vec<Product> {
    vec![
        Product::new("1", "USB-C Cable", "Generic", 19.0),
        Product::new("2", "apple watch band", "Apple S9", 49.0),
        Product::new("3", "AirPods Case", "Apple H2", 29.0),
        Product::new("4", "Charger 20W", "Generic", 19.0),
        Product::new("5", "Magsafe charger", "Apple A17", 39.5),
        Product::new("6", "screen protector", "none", 9.99),
        Product::new("7", "Apple Pencil", "Apple M2", 129.0),
    ]
}

fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

fn two_products() -> Vec<Product> {
    vec![
        Product::new("a", "A", "X", 100.0),
        Product::new("b", "B", "Y", 50.0),
    ]
}

#[test]
fn cheapest_is_non_decreasing_in_price() {
    let sorted = sort_products(&catalog(), &SortOption::Cheapest);
    assert!(sorted
        .windows(2)
        .all(|pair| pair[0].price_regular <= pair[1].price_regular));
}

#[test]
fn cheapest_keeps_fetch_order_for_equal_prices() {
    let sorted = sort_products(&catalog(), &SortOption::Cheapest);
    let ties: Vec<&str> = sorted
        .iter()
        .filter(|p| p.price_regular == 19.0)
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ties, vec!["1", "4"]);
}

#[test]
fn alphabetically_is_non_decreasing_under_collation() {
    let sorted = sort_products(&catalog(), &SortOption::Alphabetically);
    assert!(sorted
        .windows(2)
        .all(|pair| collate(&pair[0].name, &pair[1].name) != Ordering::Greater));
    assert_eq!(sorted[0].name, "AirPods Case");
    assert_eq!(sorted[1].name, "Apple Pencil");
    assert_eq!(sorted[2].name, "apple watch band");
}

#[test]
fn alphabetically_places_accented_names_by_base_letter() {
    let products = vec![
        Product::new("1", "Fundas", "Generic", 10.0),
        Product::new("2", "Étui", "Generic", 10.0),
        Product::new("3", "Zeta", "Generic", 10.0),
    ];
    let sorted = sort_products(&products, &SortOption::Alphabetically);
    assert_eq!(names(&sorted), vec!["Étui", "Fundas", "Zeta"]);
}

#[test]
fn alphabetically_orders_punctuation_before_digits() {
    let products = vec![
        Product::new("1", "cable2", "Generic", 10.0),
        Product::new("2", "cable_2", "Generic", 10.0),
    ];
    let sorted = sort_products(&products, &SortOption::Alphabetically);
    assert_eq!(names(&sorted), vec!["cable_2", "cable2"]);
}

#[test]
fn newest_is_non_increasing_in_processor() {
    let sorted = sort_products(&catalog(), &SortOption::Newest);
    assert!(sorted
        .windows(2)
        .all(|pair| collate(&pair[0].processor, &pair[1].processor) != Ordering::Less));
    assert_eq!(sorted[0].processor, "none");
}

#[test]
fn unrecognized_sort_keeps_fetch_order() {
    let sorted = sort_products(&catalog(), &SortOption::Other("rating".into()));
    assert_eq!(sorted, catalog());
}

#[test]
fn filtering_is_case_insensitive_and_idempotent() {
    let once = filter_products(catalog(), "APPLE");
    assert_eq!(names(&once), vec!["apple watch band", "Apple Pencil"]);

    let twice = filter_products(once.clone(), "APPLE");
    assert_eq!(once, twice);
}

#[test]
fn empty_query_keeps_everything() {
    assert_eq!(filter_products(catalog(), ""), catalog());
}

#[test]
fn pages_partition_the_filtered_list() {
    let filtered = filter_products(sort_products(&catalog(), &SortOption::Cheapest), "");
    for per_page in 1..=8 {
        let page_count = filtered.len().div_ceil(per_page);
        let mut rebuilt = Vec::new();
        for page in 1..=page_count {
            let slice = paginate(&filtered, PerPage::Count(per_page), page);
            assert!(!slice.is_empty());
            assert!(slice.len() <= per_page);
            rebuilt.extend_from_slice(slice);
        }
        assert_eq!(rebuilt, filtered, "per_page={per_page}");
    }
}

#[test]
fn all_per_page_is_a_single_full_page_for_any_page_number() {
    let filtered = filter_products(catalog(), "c");
    for page in [1, 2, 50] {
        assert_eq!(paginate(&filtered, PerPage::All, page), filtered.as_slice());
    }
}

#[test]
fn cheapest_scenario_pages_one_product_at_a_time() {
    let products = two_products();
    let sorted = sort_products(&products, &SortOption::Cheapest);
    assert_eq!(names(&sorted), vec!["B", "A"]);

    let page_one = derive_view(&products, &SortOption::Cheapest, "", PerPage::Count(1), 1);
    assert_eq!(names(&page_one.page), vec!["B"]);

    let page_two = derive_view(&products, &SortOption::Cheapest, "", PerPage::Count(1), 2);
    assert_eq!(names(&page_two.page), vec!["A"]);
}

#[test]
fn query_filter_applies_regardless_of_sort() {
    let products = two_products();
    for sort in [
        SortOption::Newest,
        SortOption::Alphabetically,
        SortOption::Cheapest,
    ] {
        let view = derive_view(&products, &sort, "b", PerPage::All, 1);
        assert_eq!(names(&view.filtered), vec!["B"]);
    }
}
