//! Conversion between the wire representation of an invoice and the UI
//! model / form state.

use super::model::{InvoiceForm, InvoiceItemForm};
use crate::shared::validation::{
    item_field, non_negative, optional_text, positive, required_date, required_text,
    ValidationError,
};
use contracts::domain::a003_invoice::aggregate::{
    CreateInvoiceItem, CreateInvoiceRequest, Invoice, InvoiceItem,
};

pub fn item_to_ui_model(item: &InvoiceItem) -> InvoiceItemForm {
    InvoiceItemForm {
        id: item.id.clone(),
        po_item_id: item.po_item_id.clone(),
        description: item.description.clone(),
        hsn_code: item.hsn_code.clone().unwrap_or_default(),
        unit: item.unit.clone().unwrap_or_default(),
        quantity: Some(item.quantity),
        rate: Some(item.rate),
        taxable_value: item.taxable_value,
    }
}

pub fn to_ui_model(invoice: &Invoice) -> InvoiceForm {
    let header = &invoice.header;
    InvoiceForm {
        invoice_number: header.invoice_number.clone(),
        invoice_date: header.invoice_date.clone(),
        dc_number: header.dc_number.clone(),
        buyer_name: header.buyer_name.clone(),
        buyer_gstin: header.buyer_gstin.clone().unwrap_or_default(),
        buyer_address: header.buyer_address.clone().unwrap_or_default(),
        place_of_supply: header.place_of_supply.clone().unwrap_or_default(),
        payment_terms: header.payment_terms.clone().unwrap_or_default(),
        taxable_value: header.taxable_value,
        cgst: header.cgst,
        sgst: header.sgst,
        total_invoice_value: header.total_invoice_value,
        remarks: header.remarks.clone().unwrap_or_default(),
        created_at: header.created_at.clone(),
        items: invoice.items.iter().map(item_to_ui_model).collect(),
    }
}

fn item_to_api_request(index: usize, item: &InvoiceItemForm) -> Result<CreateInvoiceItem, ValidationError> {
    let po_item_id = required_text(&item_field(index, "po_item_id"), &item.po_item_id)?;
    let description = required_text(&item_field(index, "description"), &item.description)?;

    let quantity_field = item_field(index, "quantity");
    let quantity = match item.quantity {
        Some(quantity) => positive(&quantity_field, quantity)?,
        None => return Err(ValidationError::Missing(quantity_field)),
    };
    let rate_field = item_field(index, "rate");
    let rate = match item.rate {
        Some(rate) => non_negative(&rate_field, rate)?,
        None => return Err(ValidationError::Missing(rate_field)),
    };
    let taxable_value = non_negative(&item_field(index, "taxable_value"), item.taxable_value)?;

    Ok(CreateInvoiceItem {
        po_item_id,
        description,
        hsn_code: optional_text(&item.hsn_code),
        unit: optional_text(&item.unit),
        quantity,
        rate,
        taxable_value,
    })
}

/// Build the `POST /invoice` body, validating required fields first.
pub fn to_api_request(form: &InvoiceForm) -> Result<CreateInvoiceRequest, ValidationError> {
    let invoice_number = required_text("invoice_number", &form.invoice_number)?;
    let invoice_date = required_date("invoice_date", &form.invoice_date)?;
    let dc_number = required_text("dc_number", &form.dc_number)?;
    let buyer_name = required_text("buyer_name", &form.buyer_name)?;
    let taxable_value = non_negative("taxable_value", form.taxable_value)?;
    let cgst = non_negative("cgst", form.cgst)?;
    let sgst = non_negative("sgst", form.sgst)?;
    let total_invoice_value = non_negative("total_invoice_value", form.total_invoice_value)?;

    if form.items.is_empty() {
        return Err(ValidationError::NoItems);
    }
    let items = form
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| item_to_api_request(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CreateInvoiceRequest {
        invoice_number,
        invoice_date,
        dc_number,
        buyer_name,
        buyer_gstin: optional_text(&form.buyer_gstin),
        buyer_address: optional_text(&form.buyer_address),
        place_of_supply: optional_text(&form.place_of_supply),
        payment_terms: optional_text(&form.payment_terms),
        taxable_value,
        cgst,
        sgst,
        total_invoice_value,
        remarks: optional_text(&form.remarks),
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_invoice::aggregate::InvoiceHeader;

    fn invoice() -> Invoice {
        Invoice {
            header: InvoiceHeader {
                invoice_number: "INV/24-25/001".to_string(),
                invoice_date: "2024-04-02".to_string(),
                dc_number: "DC-101".to_string(),
                buyer_name: "BHEL Trichy".to_string(),
                buyer_gstin: Some("33AAACB4146P1ZK".to_string()),
                buyer_address: None,
                place_of_supply: Some("Tamil Nadu".to_string()),
                payment_terms: None,
                taxable_value: 1000.0,
                cgst: 90.0,
                sgst: 90.0,
                total_invoice_value: 1180.0,
                remarks: None,
                created_at: Some("2024-04-02T09:30:00Z".to_string()),
            },
            items: vec![InvoiceItem {
                id: Some("inv-line-1".to_string()),
                po_item_id: "a".to_string(),
                description: "Bush".to_string(),
                hsn_code: Some("8483".to_string()),
                unit: None,
                quantity: 10.0,
                rate: 100.0,
                taxable_value: 1000.0,
            }],
        }
    }

    #[test]
    fn test_round_trip_reconstructs_payload() {
        let source = invoice();
        let request = to_api_request(&to_ui_model(&source)).unwrap();
        let h = &source.header;
        assert_eq!(request.invoice_number, h.invoice_number);
        assert_eq!(request.invoice_date, h.invoice_date);
        assert_eq!(request.dc_number, h.dc_number);
        assert_eq!(request.buyer_name, h.buyer_name);
        assert_eq!(request.buyer_gstin, h.buyer_gstin);
        assert_eq!(request.buyer_address, h.buyer_address);
        assert_eq!(request.place_of_supply, h.place_of_supply);
        assert_eq!(request.payment_terms, h.payment_terms);
        assert_eq!(request.taxable_value, h.taxable_value);
        assert_eq!(request.cgst, h.cgst);
        assert_eq!(request.sgst, h.sgst);
        assert_eq!(request.total_invoice_value, h.total_invoice_value);
        assert_eq!(request.remarks, h.remarks);

        let item = &source.items[0];
        let req_item = &request.items[0];
        assert_eq!(req_item.po_item_id, item.po_item_id);
        assert_eq!(req_item.description, item.description);
        assert_eq!(req_item.hsn_code, item.hsn_code);
        assert_eq!(req_item.unit, item.unit);
        assert_eq!(req_item.quantity, item.quantity);
        assert_eq!(req_item.rate, item.rate);
        assert_eq!(req_item.taxable_value, item.taxable_value);
    }

    #[test]
    fn test_ui_model_fills_defaults() {
        let form = to_ui_model(&invoice());
        assert_eq!(form.buyer_address, "");
        assert_eq!(form.items[0].unit, "");
        assert_eq!(form.items[0].quantity, Some(10.0));
    }

    #[test]
    fn test_missing_buyer() {
        let mut form = to_ui_model(&invoice());
        form.buyer_name.clear();
        assert_eq!(
            to_api_request(&form),
            Err(ValidationError::Missing("buyer_name".to_string()))
        );
    }

    #[test]
    fn test_blank_rate_is_rejected() {
        let mut form = to_ui_model(&invoice());
        form.items[0].rate = None;
        assert_eq!(
            to_api_request(&form),
            Err(ValidationError::Missing("items[0].rate".to_string()))
        );
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let mut form = to_ui_model(&invoice());
        form.items[0].rate = Some(-1.0);
        assert_eq!(
            to_api_request(&form),
            Err(ValidationError::Negative("items[0].rate".to_string()))
        );
    }

    #[test]
    fn test_header_checked_before_items() {
        let mut form = to_ui_model(&invoice());
        form.items.clear();
        form.invoice_date = "tomorrow".to_string();
        assert!(matches!(
            to_api_request(&form),
            Err(ValidationError::InvalidDate { .. })
        ));
    }
}
