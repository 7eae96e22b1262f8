use crate::{FailureKind, FetchError, ProductRecord};

/// Parse a JSON array of products, keeping only `category` when one is given.
///
/// Category matching ignores ASCII case. Records without a category are
/// dropped when filtering.
pub fn decode_products(
    bytes: &[u8],
    category: Option<&str>,
) -> Result<Vec<ProductRecord>, FetchError> {
    // Tolerate a UTF-8 BOM from static file hosts.
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let records: Vec<ProductRecord> = serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;

    let Some(category) = category else {
        return Ok(records);
    };
    Ok(records
        .into_iter()
        .filter(|record| {
            record
                .category
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(category))
        })
        .collect())
}
