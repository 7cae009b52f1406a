use crate::routes::paths::{api_collection_path, api_entity_path};
use crate::shared::api_utils::get_json;
use contracts::domain::a001_purchase_order::aggregate::{PurchaseOrder, PurchaseOrderHeader};
use contracts::domain::common::EntityKind;

/// Fetch all purchase order headers
pub async fn fetch_purchase_orders() -> Result<Vec<PurchaseOrderHeader>, String> {
    get_json(&api_collection_path(EntityKind::PurchaseOrder)).await
}

/// Fetch one purchase order with its lines
pub async fn fetch_purchase_order(id: &str) -> Result<PurchaseOrder, String> {
    get_json(&api_entity_path(EntityKind::PurchaseOrder, id)).await
}
