use serde::{Deserialize, Serialize};

/// Строка DC в том виде, в каком её отдаёт backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryChallanItem {
    /// Идентификатор строки (назначает backend)
    #[serde(default)]
    pub id: Option<String>,

    /// Ссылка на строку PO
    pub po_item_id: String,

    /// Номер партии
    #[serde(default)]
    pub lot_no: Option<i64>,

    #[serde(default)]
    pub material_code: Option<String>,

    pub description: String,

    #[serde(default)]
    pub unit: Option<String>,

    /// Заказано по строке PO
    pub ordered_quantity: f64,

    /// Отгружено этим DC
    pub dispatch_quantity: f64,
}

/// Шапка Delivery Challan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryChallanHeader {
    pub dc_number: String,

    /// Дата DC (YYYY-MM-DD)
    pub dc_date: String,

    /// PO, по которому выполнена отгрузка
    pub po_number: String,

    pub consignee_name: String,

    #[serde(default)]
    pub consignee_gstin: Option<String>,

    #[serde(default)]
    pub consignee_address: Option<String>,

    #[serde(default)]
    pub vehicle_no: Option<String>,

    /// Номер транспортной накладной (LR)
    #[serde(default)]
    pub lr_no: Option<String>,

    #[serde(default)]
    pub transporter: Option<String>,

    #[serde(default)]
    pub eway_bill_no: Option<String>,

    #[serde(default)]
    pub remarks: Option<String>,

    /// Дата и время создания записи (заполняет backend)
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Ответ `GET /api/dc/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryChallan {
    pub header: DeliveryChallanHeader,
    #[serde(default)]
    pub items: Vec<DeliveryChallanItem>,
}

/// Строка запроса на создание DC
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateDeliveryChallanItem {
    pub po_item_id: String,
    pub lot_no: Option<i64>,
    pub material_code: Option<String>,
    pub description: String,
    pub unit: Option<String>,
    pub ordered_quantity: f64,
    pub dispatch_quantity: f64,
}

/// Тело `POST /api/dc`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateDeliveryChallanRequest {
    pub dc_number: String,
    pub dc_date: String,
    pub po_number: String,
    pub consignee_name: String,
    pub consignee_gstin: Option<String>,
    pub consignee_address: Option<String>,
    pub vehicle_no: Option<String>,
    pub lr_no: Option<String>,
    pub transporter: Option<String>,
    pub eway_bill_no: Option<String>,
    pub remarks: Option<String>,
    pub items: Vec<CreateDeliveryChallanItem>,
}
