//! UI-side shape of an invoice, shared by the detail view and the create form.

use crate::shared::date_utils::today_iso;
use contracts::domain::a001_purchase_order::aggregate::PurchaseOrder;
use contracts::domain::a002_delivery_challan::aggregate::DeliveryChallan;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CGST_RATE: f64 = 9.0;
pub const DEFAULT_SGST_RATE: f64 = 9.0;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemForm {
    /// Backend line id, read-only
    pub id: Option<String>,
    pub po_item_id: String,
    pub description: String,
    pub hsn_code: String,
    pub unit: String,
    pub quantity: Option<f64>,
    pub rate: Option<f64>,
    pub taxable_value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceForm {
    pub invoice_number: String,
    pub invoice_date: String,
    pub dc_number: String,
    pub buyer_name: String,
    pub buyer_gstin: String,
    pub buyer_address: String,
    pub place_of_supply: String,
    pub payment_terms: String,
    pub taxable_value: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub total_invoice_value: f64,
    pub remarks: String,
    /// Set by the backend, read-only
    pub created_at: Option<String>,
    pub items: Vec<InvoiceItemForm>,
}

impl InvoiceForm {
    /// New invoice billing `dc`. Rates come from the matching lines of `po`
    /// when it is known, otherwise they are left blank for the user.
    pub fn draft_from_dc(dc: &DeliveryChallan, po: Option<&PurchaseOrder>, invoice_date: &str) -> Self {
        let rate_for = |po_item_id: &str| {
            po.and_then(|po| po.items.iter().find(|item| item.po_item_id == po_item_id))
                .map(|item| item.po_rate)
        };

        let items = dc
            .items
            .iter()
            .map(|line| InvoiceItemForm {
                id: None,
                po_item_id: line.po_item_id.clone(),
                description: line.description.clone(),
                hsn_code: String::new(),
                unit: line.unit.clone().unwrap_or_default(),
                quantity: Some(line.dispatch_quantity),
                rate: rate_for(&line.po_item_id),
                taxable_value: 0.0,
            })
            .collect();

        let mut form = Self {
            invoice_date: invoice_date.to_string(),
            dc_number: dc.header.dc_number.clone(),
            buyer_name: dc.header.consignee_name.clone(),
            buyer_gstin: dc.header.consignee_gstin.clone().unwrap_or_default(),
            buyer_address: dc.header.consignee_address.clone().unwrap_or_default(),
            items,
            ..Self::default()
        };
        form.recalculate_totals(DEFAULT_CGST_RATE, DEFAULT_SGST_RATE);
        form
    }

    /// Draft dated today
    pub fn draft_from_dc_today(dc: &DeliveryChallan, po: Option<&PurchaseOrder>) -> Self {
        Self::draft_from_dc(dc, po, &today_iso())
    }

    /// Recompute line and header amounts. Lines with a blank quantity or
    /// rate contribute zero.
    pub fn recalculate_totals(&mut self, cgst_rate: f64, sgst_rate: f64) {
        for item in &mut self.items {
            item.taxable_value = match (item.quantity, item.rate) {
                (Some(quantity), Some(rate)) => round2(quantity * rate),
                _ => 0.0,
            };
        }
        let taxable: f64 = self.items.iter().map(|item| item.taxable_value).sum();
        self.taxable_value = round2(taxable);
        self.cgst = round2(self.taxable_value * cgst_rate / 100.0);
        self.sgst = round2(self.taxable_value * sgst_rate / 100.0);
        self.total_invoice_value = round2(self.taxable_value + self.cgst + self.sgst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_purchase_order::aggregate::{
        PurchaseOrderHeader, PurchaseOrderItem,
    };
    use contracts::domain::a002_delivery_challan::aggregate::{
        DeliveryChallanHeader, DeliveryChallanItem,
    };

    fn dc() -> DeliveryChallan {
        let line = |id: &str, qty: f64| DeliveryChallanItem {
            id: Some(format!("dc-line-{}", id)),
            po_item_id: id.to_string(),
            lot_no: None,
            material_code: None,
            description: format!("Part {}", id),
            unit: Some("NOS".to_string()),
            ordered_quantity: 20.0,
            dispatch_quantity: qty,
        };
        DeliveryChallan {
            header: DeliveryChallanHeader {
                dc_number: "DC-101".to_string(),
                dc_date: "2024-03-20".to_string(),
                po_number: "4500012345".to_string(),
                consignee_name: "BHEL Trichy".to_string(),
                consignee_gstin: Some("33AAACB4146P1ZK".to_string()),
                consignee_address: None,
                vehicle_no: None,
                lr_no: None,
                transporter: None,
                eway_bill_no: None,
                remarks: None,
                created_at: None,
            },
            items: vec![line("a", 10.0), line("b", 4.0)],
        }
    }

    fn po() -> PurchaseOrder {
        PurchaseOrder {
            header: PurchaseOrderHeader {
                po_number: "4500012345".to_string(),
                po_date: "2024-03-01".to_string(),
                supplier_name: "BHEL Trichy".to_string(),
                supplier_code: None,
                department_no: None,
                po_value: 0.0,
                remarks: None,
            },
            items: vec![PurchaseOrderItem {
                po_item_id: "a".to_string(),
                po_sl_no: "10".to_string(),
                material_code: None,
                material_description: "Part a".to_string(),
                unit: None,
                ord_qty: 20.0,
                po_rate: 100.0,
                delivered_qty: 10.0,
            }],
        }
    }

    #[test]
    fn test_draft_from_dc_with_po_rates() {
        let form = InvoiceForm::draft_from_dc(&dc(), Some(&po()), "2024-03-21");
        assert_eq!(form.dc_number, "DC-101");
        assert_eq!(form.buyer_name, "BHEL Trichy");
        assert_eq!(form.buyer_gstin, "33AAACB4146P1ZK");
        assert_eq!(form.items.len(), 2);
        assert_eq!(form.items[0].rate, Some(100.0));
        assert_eq!(form.items[1].rate, None);
        assert_eq!(form.items[0].taxable_value, 1000.0);
        assert_eq!(form.items[1].taxable_value, 0.0);
        assert_eq!(form.taxable_value, 1000.0);
        assert_eq!(form.cgst, 90.0);
        assert_eq!(form.sgst, 90.0);
        assert_eq!(form.total_invoice_value, 1180.0);
    }

    #[test]
    fn test_draft_without_po_leaves_rates_blank() {
        let form = InvoiceForm::draft_from_dc(&dc(), None, "2024-03-21");
        assert!(form.items.iter().all(|item| item.rate.is_none()));
        assert_eq!(form.total_invoice_value, 0.0);
    }

    #[test]
    fn test_recalculate_after_edit() {
        let mut form = InvoiceForm::draft_from_dc(&dc(), Some(&po()), "2024-03-21");
        form.items[1].rate = Some(25.0);
        form.recalculate_totals(6.0, 6.0);
        assert_eq!(form.items[1].taxable_value, 100.0);
        assert_eq!(form.taxable_value, 1100.0);
        assert_eq!(form.cgst, 66.0);
        assert_eq!(form.total_invoice_value, 1232.0);
    }
}
