use catalog_core::{PageViewModel, PaginationView, Product, PER_PAGE_OPTIONS, SORT_OPTIONS};

use super::constants::*;

/// Renders the page as plain text lines, top to bottom.
pub fn render(view: &PageViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(view.breadcrumbs.join(" > "));
    lines.push(format!("# {}", view.title));

    if view.show_loader {
        lines.push(LOADING_TEXT.to_string());
    }
    if view.show_error {
        lines.push(format!("{ERROR_TEXT} [{RELOAD_LABEL}]"));
    }
    if view.show_empty_notice {
        lines.push(EMPTY_TEXT.to_string());
    }

    if view.show_listing {
        lines.push(format!("{} models", view.total_models));
        lines.push(format!(
            "{SORT_LABEL}: {}",
            dropdown(&SORT_OPTIONS, view.sort_option.as_str())
        ));
        lines.push(format!(
            "{PER_PAGE_LABEL}: {}",
            dropdown(&PER_PAGE_OPTIONS, &view.per_page.to_string())
        ));

        if view.is_changing_page {
            lines.push(CHANGING_TEXT.to_string());
        } else {
            lines.extend(view.products.iter().map(format_product));
        }

        if let Some(pagination) = &view.pagination {
            lines.push(format_pagination(pagination));
        }
    }

    lines
}

fn dropdown(options: &[&str], selected: &str) -> String {
    let mut shown: Vec<String> = options
        .iter()
        .map(|option| {
            if *option == selected {
                format!("[{option}]")
            } else {
                option.to_string()
            }
        })
        .collect();
    // A value from the location that the dropdown doesn't offer.
    if !options.contains(&selected) {
        shown.push(format!("[{selected}]"));
    }
    shown.join(" | ")
}

fn format_product(product: &Product) -> String {
    let price = match product.price_discount {
        Some(discount) if discount < product.price_regular => format!(
            "{} (was {})",
            format_price(discount),
            format_price(product.price_regular)
        ),
        _ => format_price(product.price_regular),
    };
    if product.processor.is_empty() {
        format!("- {} {}", product.name, price)
    } else {
        format!("- {} {} ({})", product.name, price, product.processor)
    }
}

fn format_price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("${value:.0}")
    } else {
        format!("${value:.2}")
    }
}

fn format_pagination(pagination: &PaginationView) -> String {
    let pages: Vec<String> = (1..=pagination.page_count)
        .map(|page| {
            if page == pagination.current_page {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect();
    format!("< {} >", pages.join(" "))
}
