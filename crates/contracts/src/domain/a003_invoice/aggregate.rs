use serde::{Deserialize, Serialize};

/// Строка счёта-фактуры
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceItem {
    /// Идентификатор строки (назначает backend)
    #[serde(default)]
    pub id: Option<String>,

    /// Строка PO, к которой относится позиция
    pub po_item_id: String,

    pub description: String,

    #[serde(default)]
    pub hsn_code: Option<String>,

    #[serde(default)]
    pub unit: Option<String>,

    pub quantity: f64,

    pub rate: f64,

    /// quantity × rate
    pub taxable_value: f64,
}

/// Шапка счёта-фактуры
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceHeader {
    pub invoice_number: String,

    /// Дата счёта (YYYY-MM-DD)
    pub invoice_date: String,

    /// DC, на основании которого выставлен счёт
    pub dc_number: String,

    pub buyer_name: String,

    #[serde(default)]
    pub buyer_gstin: Option<String>,

    #[serde(default)]
    pub buyer_address: Option<String>,

    #[serde(default)]
    pub place_of_supply: Option<String>,

    #[serde(default)]
    pub payment_terms: Option<String>,

    pub taxable_value: f64,

    pub cgst: f64,

    pub sgst: f64,

    pub total_invoice_value: f64,

    #[serde(default)]
    pub remarks: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,
}

/// Ответ `GET /api/invoice/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub header: InvoiceHeader,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
}

/// Строка запроса на создание счёта
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateInvoiceItem {
    pub po_item_id: String,
    pub description: String,
    pub hsn_code: Option<String>,
    pub unit: Option<String>,
    pub quantity: f64,
    pub rate: f64,
    pub taxable_value: f64,
}

/// Тело `POST /api/invoice`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateInvoiceRequest {
    pub invoice_number: String,
    pub invoice_date: String,
    pub dc_number: String,
    pub buyer_name: String,
    pub buyer_gstin: Option<String>,
    pub buyer_address: Option<String>,
    pub place_of_supply: Option<String>,
    pub payment_terms: Option<String>,
    pub taxable_value: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub total_invoice_value: f64,
    pub remarks: Option<String>,
    pub items: Vec<CreateInvoiceItem>,
}
