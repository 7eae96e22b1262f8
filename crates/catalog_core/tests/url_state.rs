use catalog_core::{decode, encode, AppState, PerPage, SortOption, UrlState};
use pretty_assertions::assert_eq;

#[test]
fn defaults_encode_to_empty_query() {
    assert_eq!(encode(&UrlState::default()), "");
}

#[test]
fn empty_query_decodes_to_defaults() {
    assert_eq!(decode(""), UrlState::default());
    assert_eq!(decode("?"), UrlState::default());
}

#[test]
fn non_default_triple_survives_a_fresh_mount() {
    let state = UrlState {
        sort: SortOption::Cheapest,
        page: 2,
        per_page: PerPage::Count(8),
    };

    let query = encode(&state);
    assert_eq!(query, "sort=cheapest&page=2&perPage=8");

    let mounted = AppState::from_location(&format!("?{query}"));
    assert_eq!(mounted.url_state(), &state);
}

#[test]
fn only_non_default_fields_are_written() {
    let state = UrlState {
        per_page: PerPage::Count(16),
        ..UrlState::default()
    };
    assert_eq!(encode(&state), "perPage=16");

    let state = UrlState {
        sort: SortOption::Alphabetically,
        ..UrlState::default()
    };
    assert_eq!(encode(&state), "sort=alphabetically");
}

#[test]
fn unparseable_values_fall_back_to_defaults() {
    let decoded = decode("?page=abc&perPage=lots");
    assert_eq!(decoded, UrlState::default());

    let decoded = decode("?page=0&perPage=0");
    assert_eq!(decoded.page, 1);
    assert_eq!(decoded.per_page, PerPage::All);

    let decoded = decode("?page=-3");
    assert_eq!(decoded.page, 1);
}

#[test]
fn page_and_per_page_tolerate_the_same_padding() {
    let state = decode("?page=%202%20&perPage=%208%20");
    assert_eq!(state.page, 2);
    assert_eq!(state.per_page, PerPage::Count(8));

    let state = decode("?page=+0+&perPage=+0+");
    assert_eq!(state.page, 1);
    assert_eq!(state.per_page, PerPage::All);
}

#[test]
fn unknown_sort_value_is_kept_and_written_back() {
    let decoded = decode("sort=rating");
    assert_eq!(decoded.sort, SortOption::Other("rating".to_string()));
    assert_eq!(encode(&decoded), "sort=rating");
}

#[test]
fn query_parameter_is_read_but_never_written() {
    let state = AppState::from_location("?query=Case&sort=cheapest");
    assert_eq!(state.query(), "Case");
    assert_eq!(encode(state.url_state()), "sort=cheapest");
}

#[test]
fn explicit_defaults_in_location_are_dropped_on_encode() {
    let decoded = decode("?sort=newest&page=1&perPage=all");
    assert_eq!(decoded, UrlState::default());
    assert_eq!(encode(&decoded), "");
}
