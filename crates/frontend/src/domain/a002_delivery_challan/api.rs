use crate::routes::paths::{api_collection_path, api_entity_path};
use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a002_delivery_challan::aggregate::{
    CreateDeliveryChallanRequest, DeliveryChallan, DeliveryChallanHeader,
};
use contracts::domain::common::{CreatedResponse, EntityKind};

/// Fetch all delivery challan headers
pub async fn fetch_delivery_challans() -> Result<Vec<DeliveryChallanHeader>, String> {
    get_json(&api_collection_path(EntityKind::DeliveryChallan)).await
}

/// Fetch one delivery challan with its lines
pub async fn fetch_delivery_challan(id: &str) -> Result<DeliveryChallan, String> {
    get_json(&api_entity_path(EntityKind::DeliveryChallan, id)).await
}

/// Create a delivery challan, returning the new id
pub async fn create_delivery_challan(request: &CreateDeliveryChallanRequest) -> Result<String, String> {
    let created: CreatedResponse =
        post_json(&api_collection_path(EntityKind::DeliveryChallan), request).await?;
    log::info!("Delivery challan created: {}", created.id);
    Ok(created.id)
}
