//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a002_dc--detail"`)
//!   - `data-page-category` with one of the constants below
//!
//! The entity part matches `EntityKind::full_name()`, so an id copied from
//! the DOM inspector leads straight to `domain/a002_delivery_challan/`.

/// List of records with search.
pub const PAGE_CAT_LIST: &str = "list";

/// Read-only view of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Form creating a new record from a referenced one.
pub const PAGE_CAT_CREATE: &str = "create";

/// Summary page with statistics.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_CREATE,
    PAGE_CAT_DASHBOARD,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a002_dc--detail"));
        assert!(is_valid_page_id("a004_srv--dashboard"));
        assert!(!is_valid_page_id("a002_dc"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a002_dc--legacy"));
    }
}
