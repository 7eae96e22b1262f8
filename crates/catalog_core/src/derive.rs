//! Derived view pipeline: sort, then filter, then paginate.
//!
//! Everything here is recomputed from base state on each call.
use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};

use crate::{PerPage, Product, SortOption};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DerivedView {
    /// Sorted and filtered, before pagination.
    pub filtered: Vec<Product>,
    /// The slice for the current page.
    pub page: Vec<Product>,
}

pub fn derive_view(
    products: &[Product],
    sort: &SortOption,
    query: &str,
    per_page: PerPage,
    current_page: usize,
) -> DerivedView {
    let filtered = filter_products(sort_products(products, sort), query);
    let page = paginate(&filtered, per_page, current_page).to_vec();
    DerivedView { filtered, page }
}

/// Stable sort into a new list; unrecognized options keep the fetched order.
pub fn sort_products(products: &[Product], sort: &SortOption) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match sort {
        SortOption::Newest => sorted.sort_by(|a, b| collate(&b.processor, &a.processor)),
        SortOption::Alphabetically => sorted.sort_by(|a, b| collate(&a.name, &b.name)),
        SortOption::Cheapest => sorted.sort_by(|a, b| a.price_regular.total_cmp(&b.price_regular)),
        SortOption::Other(_) => {}
    }
    sorted
}

/// Case-insensitive substring match on the product name.
pub fn filter_products(mut products: Vec<Product>, query: &str) -> Vec<Product> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return products;
    }
    products.retain(|product| product.name.to_lowercase().contains(&needle));
    products
}

/// 1-based page slice. Pages past the end (or page 0) come back empty.
pub fn paginate<T>(items: &[T], per_page: PerPage, current_page: usize) -> &[T] {
    let PerPage::Count(count) = per_page else {
        return items;
    };
    let Some(first) = current_page.checked_sub(1) else {
        return &[];
    };
    let start = first.saturating_mul(count).min(items.len());
    let end = current_page.saturating_mul(count).min(items.len());
    &items[start..end]
}

thread_local! {
    static COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        Collator::try_new(&Default::default(), options).ok()
    };
}

/// Root-locale text order at tertiary strength: accents and case only break ties.
///
/// Falls back to code point order if the collation data fails to load.
pub fn collate(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}
