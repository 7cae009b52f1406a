//! UI-side shape of a delivery challan.
//!
//! The same struct is the read model of the detail page and the state of
//! the create form. Optional wire text is filled with `""`; quantities
//! the user types are `Option<f64>` so a blank field stays distinguishable
//! from zero.

use crate::shared::date_utils::today_iso;
use contracts::domain::a001_purchase_order::aggregate::PurchaseOrder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryChallanItemForm {
    /// Backend line id, read-only
    pub id: Option<String>,
    pub po_item_id: String,
    pub lot_no: Option<i64>,
    pub material_code: String,
    pub description: String,
    pub unit: String,
    pub ordered_quantity: f64,
    pub dispatch_quantity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryChallanForm {
    pub dc_number: String,
    pub dc_date: String,
    pub po_number: String,
    pub consignee_name: String,
    pub consignee_gstin: String,
    pub consignee_address: String,
    pub vehicle_no: String,
    pub lr_no: String,
    pub transporter: String,
    pub eway_bill_no: String,
    pub remarks: String,
    /// Set by the backend, read-only
    pub created_at: Option<String>,
    pub items: Vec<DeliveryChallanItemForm>,
}

impl DeliveryChallanForm {
    /// New challan against `po` dated `dc_date`: one line per PO item that
    /// still has quantity left, dispatching all of it by default.
    pub fn draft_from_po(po: &PurchaseOrder, dc_date: &str) -> Self {
        let items = po
            .items
            .iter()
            .filter(|item| item.remaining_qty() > 0.0)
            .enumerate()
            .map(|(index, item)| DeliveryChallanItemForm {
                id: None,
                po_item_id: item.po_item_id.clone(),
                lot_no: Some(index as i64 + 1),
                material_code: item.material_code.clone().unwrap_or_default(),
                description: item.material_description.clone(),
                unit: item.unit.clone().unwrap_or_default(),
                ordered_quantity: item.ord_qty,
                dispatch_quantity: Some(item.remaining_qty()),
            })
            .collect();

        Self {
            dc_date: dc_date.to_string(),
            po_number: po.header.po_number.clone(),
            consignee_name: po.header.supplier_name.clone(),
            items,
            ..Self::default()
        }
    }

    /// Draft dated today
    pub fn draft_from_po_today(po: &PurchaseOrder) -> Self {
        Self::draft_from_po(po, &today_iso())
    }

    pub fn total_dispatch_quantity(&self) -> f64 {
        self.items
            .iter()
            .filter_map(|item| item.dispatch_quantity)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_purchase_order::aggregate::{
        PurchaseOrderHeader, PurchaseOrderItem,
    };

    fn po_item(id: &str, ord: f64, delivered: f64) -> PurchaseOrderItem {
        PurchaseOrderItem {
            po_item_id: id.to_string(),
            po_sl_no: "10".to_string(),
            material_code: Some(format!("M-{}", id)),
            material_description: format!("Part {}", id),
            unit: Some("NOS".to_string()),
            ord_qty: ord,
            po_rate: 100.0,
            delivered_qty: delivered,
        }
    }

    fn po() -> PurchaseOrder {
        PurchaseOrder {
            header: PurchaseOrderHeader {
                po_number: "4500012345".to_string(),
                po_date: "2024-03-01".to_string(),
                supplier_name: "BHEL Trichy".to_string(),
                supplier_code: None,
                department_no: Some(12),
                po_value: 3000.0,
                remarks: None,
            },
            items: vec![po_item("a", 10.0, 4.0), po_item("b", 5.0, 5.0), po_item("c", 8.0, 0.0)],
        }
    }

    #[test]
    fn test_draft_skips_fully_delivered_lines() {
        let form = DeliveryChallanForm::draft_from_po(&po(), "2024-03-20");
        assert_eq!(form.po_number, "4500012345");
        assert_eq!(form.consignee_name, "BHEL Trichy");
        assert_eq!(form.dc_date, "2024-03-20");
        assert!(form.dc_number.is_empty());

        let ids: Vec<&str> = form.items.iter().map(|i| i.po_item_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(form.items[0].dispatch_quantity, Some(6.0));
        assert_eq!(form.items[1].lot_no, Some(2));
        assert_eq!(form.total_dispatch_quantity(), 14.0);
    }

    #[test]
    fn test_ui_model_serializes_camel_case() {
        let form = DeliveryChallanForm::draft_from_po(&po(), "2024-03-20");
        let json = serde_json::to_value(&form).unwrap();
        assert!(json.get("dcNumber").is_some());
        assert!(json.get("consigneeName").is_some());
        assert!(json["items"][0].get("dispatchQuantity").is_some());
        assert!(json.get("dc_number").is_none());
    }
}
