//! Canonical entity identifiers and navigation paths.
//!
//! Route parameters may arrive fragmented (catch-all matching splits on
//! `/`), so everything that addresses a PO, DC or Invoice goes through
//! [`normalize_id`] first and through the builders below afterwards.

use contracts::domain::common::EntityKind;
use leptos_router::params::ParamsMap;
use std::fmt::Display;

/// Raw route parameter as delivered by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteParam {
    One(String),
    Segments(Vec<String>),
}

impl RouteParam {
    /// Read `key` from the params map. Several values become
    /// [`RouteParam::Segments`], a missing key gives `None`.
    pub fn from_params(params: &ParamsMap, key: &str) -> Option<Self> {
        let mut values = params.get_all(key)?;
        if values.len() == 1 {
            values.pop().map(RouteParam::One)
        } else {
            Some(RouteParam::Segments(values))
        }
    }
}

impl From<&str> for RouteParam {
    fn from(value: &str) -> Self {
        RouteParam::One(value.to_string())
    }
}

impl From<String> for RouteParam {
    fn from(value: String) -> Self {
        RouteParam::One(value)
    }
}

impl From<Vec<String>> for RouteParam {
    fn from(value: Vec<String>) -> Self {
        RouteParam::Segments(value)
    }
}

impl From<Vec<&str>> for RouteParam {
    fn from(value: Vec<&str>) -> Self {
        RouteParam::Segments(value.into_iter().map(String::from).collect())
    }
}

/// Collapse a raw route parameter into a single identifier.
///
/// Segments are joined with `/`, so an id that itself contains `/` and an
/// id split across several segments end up identical. Nothing supplied
/// gives an empty string.
pub fn normalize_id(id: Option<&RouteParam>) -> String {
    match id {
        Some(RouteParam::One(value)) => value.clone(),
        Some(RouteParam::Segments(parts)) => parts.join("/"),
        None => String::new(),
    }
}

/// Trim and percent-encode an identifier for a path or query slot.
pub fn encode_id(id: impl Display) -> String {
    let raw = id.to_string();
    urlencoding::encode(raw.trim()).into_owned()
}

/// `/{segment}/{id}` for any routed entity.
pub fn entity_route(kind: EntityKind, id: impl Display) -> String {
    format!("/{}/{}", kind.route_segment(), encode_id(id))
}

/// List page of an entity kind. Purchase orders are the home page.
pub fn list_route(kind: EntityKind) -> String {
    match kind {
        EntityKind::PurchaseOrder => "/".to_string(),
        other => format!("/{}", other.route_segment()),
    }
}

pub fn po_route(id: impl Display) -> String {
    entity_route(EntityKind::PurchaseOrder, id)
}

pub fn dc_route(id: impl Display) -> String {
    entity_route(EntityKind::DeliveryChallan, id)
}

pub fn invoice_route(id: impl Display) -> String {
    entity_route(EntityKind::Invoice, id)
}

/// New DC against a purchase order.
pub fn create_dc_route(po_id: impl Display) -> String {
    format!("/dc/create?po={}", encode_id(po_id))
}

/// New invoice against a delivery challan.
pub fn create_invoice_route(dc_id: impl Display) -> String {
    format!("/invoice/create?dc={}", encode_id(dc_id))
}

/// API path of a collection, relative to the configured API prefix.
pub fn api_collection_path(kind: EntityKind) -> String {
    format!("/{}", kind.route_segment())
}

/// API path of one entity, relative to the configured API prefix.
/// Uses the same trim + encode rule as the UI routes.
pub fn api_entity_path(kind: EntityKind, id: impl Display) -> String {
    entity_route(kind, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_segments_joined_with_slash() {
        let param = RouteParam::from(vec!["a", "b"]);
        assert_eq!(normalize_id(Some(&param)), "a/b");
    }

    #[test]
    fn test_normalize_plain_string_unchanged() {
        assert_eq!(normalize_id(Some(&RouteParam::from("abc"))), "abc");
        assert_eq!(normalize_id(Some(&RouteParam::from("PO-12/A"))), "PO-12/A");
    }

    #[test]
    fn test_normalize_empty_inputs() {
        assert_eq!(normalize_id(Some(&RouteParam::from(""))), "");
        assert_eq!(normalize_id(Some(&RouteParam::Segments(vec![]))), "");
        assert_eq!(normalize_id(None), "");
    }

    #[test]
    fn test_slash_in_id_and_split_segments_are_indistinguishable() {
        let literal = RouteParam::from("a/b");
        let split = RouteParam::from(vec!["a", "b"]);
        assert_eq!(normalize_id(Some(&literal)), normalize_id(Some(&split)));
    }

    #[test]
    fn test_entity_routes() {
        assert_eq!(po_route(42), "/po/42");
        assert_eq!(dc_route(" dc-1 "), "/dc/dc-1");
        assert_eq!(invoice_route("a/b"), "/invoice/a%2Fb");
    }

    #[test]
    fn test_create_routes() {
        assert_eq!(create_dc_route(7), "/dc/create?po=7");
        assert_eq!(create_invoice_route("dc-5"), "/invoice/create?dc=dc-5");
        assert_eq!(create_invoice_route("dc 5&x"), "/invoice/create?dc=dc%205%26x");
    }

    #[test]
    fn test_numeric_and_string_ids_are_equivalent() {
        assert_eq!(po_route(42), po_route("42"));
        assert_eq!(create_dc_route(7u64), create_dc_route(" 7 "));
    }

    #[test]
    fn test_api_paths() {
        assert_eq!(api_collection_path(EntityKind::Invoice), "/invoice");
        assert_eq!(api_entity_path(EntityKind::DeliveryChallan, " a/b "), "/dc/a%2Fb");
    }

    #[test]
    fn test_list_routes() {
        assert_eq!(list_route(EntityKind::PurchaseOrder), "/");
        assert_eq!(list_route(EntityKind::DeliveryChallan), "/dc");
        assert_eq!(list_route(EntityKind::Srv), "/srv");
    }
}
