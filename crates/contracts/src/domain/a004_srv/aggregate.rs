use serde::{Deserialize, Serialize};

/// Stores Receipt Voucher: приёмка товара на складе покупателя
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Srv {
    pub srv_number: String,

    /// Дата SRV (YYYY-MM-DD)
    pub srv_date: String,

    pub po_number: String,

    /// Принято на склад
    pub received_qty: f64,

    /// Забраковано при приёмке
    #[serde(default)]
    pub rejected_qty: f64,

    #[serde(default)]
    pub invoice_number: Option<String>,
}

/// Сводка по SRV для шапки страницы
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SrvStats {
    pub total_srvs: i64,
    pub total_received_qty: f64,
    pub total_rejected_qty: f64,
    /// Доля брака в процентах
    pub rejection_rate: f64,
}
