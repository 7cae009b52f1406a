use serde::{Deserialize, Serialize};

/// Строка заказа на поставку
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseOrderItem {
    /// Идентификатор строки заказа (ссылка из строк DC)
    pub po_item_id: String,

    /// Порядковый номер строки в PO
    pub po_sl_no: String,

    /// Код материала покупателя
    #[serde(default)]
    pub material_code: Option<String>,

    pub material_description: String,

    /// Единица измерения (NOS, KG, ...)
    #[serde(default)]
    pub unit: Option<String>,

    /// Заказанное количество
    pub ord_qty: f64,

    /// Цена за единицу
    pub po_rate: f64,

    /// Уже отгружено по всем DC
    #[serde(default)]
    pub delivered_qty: f64,
}

impl PurchaseOrderItem {
    /// Остаток к отгрузке, не меньше нуля
    pub fn remaining_qty(&self) -> f64 {
        (self.ord_qty - self.delivered_qty).max(0.0)
    }
}

/// Шапка заказа на поставку (PO)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseOrderHeader {
    /// Номер PO, он же идентификатор в маршрутах
    pub po_number: String,

    /// Дата PO (YYYY-MM-DD)
    pub po_date: String,

    pub supplier_name: String,

    #[serde(default)]
    pub supplier_code: Option<String>,

    #[serde(default)]
    pub department_no: Option<i64>,

    /// Сумма заказа
    pub po_value: f64,

    #[serde(default)]
    pub remarks: Option<String>,
}

/// Заказ на поставку целиком: шапка и строки
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseOrder {
    pub header: PurchaseOrderHeader,
    #[serde(default)]
    pub items: Vec<PurchaseOrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_optional_fields_missing() {
        let json = r#"{
            "header": {"po_number": "4500012345", "po_date": "2024-03-15",
                       "supplier_name": "Sensto Engineering", "po_value": 1200.5},
            "items": [{"po_item_id": "i1", "po_sl_no": "10",
                       "material_description": "Bush", "ord_qty": 10, "po_rate": 120.05}]
        }"#;
        let po: PurchaseOrder = serde_json::from_str(json).unwrap();
        assert_eq!(po.header.department_no, None);
        assert_eq!(po.items[0].delivered_qty, 0.0);
        assert_eq!(po.items[0].remaining_qty(), 10.0);
    }

    #[test]
    fn test_remaining_qty_never_negative() {
        let item = PurchaseOrderItem {
            po_item_id: "i1".into(),
            po_sl_no: "10".into(),
            material_code: None,
            material_description: "Bush".into(),
            unit: None,
            ord_qty: 5.0,
            po_rate: 1.0,
            delivered_qty: 7.0,
        };
        assert_eq!(item.remaining_qty(), 0.0);
    }
}
