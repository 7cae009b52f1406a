use crate::routes::paths::{api_collection_path, api_entity_path};
use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a003_invoice::aggregate::{CreateInvoiceRequest, Invoice, InvoiceHeader};
use contracts::domain::common::{CreatedResponse, EntityKind};

/// Fetch all invoice headers
pub async fn fetch_invoices() -> Result<Vec<InvoiceHeader>, String> {
    get_json(&api_collection_path(EntityKind::Invoice)).await
}

/// Fetch one invoice with its lines
pub async fn fetch_invoice(id: &str) -> Result<Invoice, String> {
    get_json(&api_entity_path(EntityKind::Invoice, id)).await
}

/// Create an invoice, returning the new id
pub async fn create_invoice(request: &CreateInvoiceRequest) -> Result<String, String> {
    let created: CreatedResponse =
        post_json(&api_collection_path(EntityKind::Invoice), request).await?;
    log::info!("Invoice created: {}", created.id);
    Ok(created.id)
}
