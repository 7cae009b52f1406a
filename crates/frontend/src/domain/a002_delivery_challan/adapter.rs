//! Conversion between the wire representation of a delivery challan and
//! the UI model / form state.

use super::model::{DeliveryChallanForm, DeliveryChallanItemForm};
use crate::shared::validation::{
    item_field, non_negative, optional_text, positive, required_date, required_text,
    ValidationError,
};
use contracts::domain::a002_delivery_challan::aggregate::{
    CreateDeliveryChallanItem, CreateDeliveryChallanRequest, DeliveryChallan, DeliveryChallanItem,
};

pub fn item_to_ui_model(item: &DeliveryChallanItem) -> DeliveryChallanItemForm {
    DeliveryChallanItemForm {
        id: item.id.clone(),
        po_item_id: item.po_item_id.clone(),
        lot_no: item.lot_no,
        material_code: item.material_code.clone().unwrap_or_default(),
        description: item.description.clone(),
        unit: item.unit.clone().unwrap_or_default(),
        ordered_quantity: item.ordered_quantity,
        dispatch_quantity: Some(item.dispatch_quantity),
    }
}

pub fn to_ui_model(dc: &DeliveryChallan) -> DeliveryChallanForm {
    let header = &dc.header;
    DeliveryChallanForm {
        dc_number: header.dc_number.clone(),
        dc_date: header.dc_date.clone(),
        po_number: header.po_number.clone(),
        consignee_name: header.consignee_name.clone(),
        consignee_gstin: header.consignee_gstin.clone().unwrap_or_default(),
        consignee_address: header.consignee_address.clone().unwrap_or_default(),
        vehicle_no: header.vehicle_no.clone().unwrap_or_default(),
        lr_no: header.lr_no.clone().unwrap_or_default(),
        transporter: header.transporter.clone().unwrap_or_default(),
        eway_bill_no: header.eway_bill_no.clone().unwrap_or_default(),
        remarks: header.remarks.clone().unwrap_or_default(),
        created_at: header.created_at.clone(),
        items: dc.items.iter().map(item_to_ui_model).collect(),
    }
}

fn item_to_api_request(
    index: usize,
    item: &DeliveryChallanItemForm,
) -> Result<CreateDeliveryChallanItem, ValidationError> {
    let po_item_id = required_text(&item_field(index, "po_item_id"), &item.po_item_id)?;
    let description = required_text(&item_field(index, "description"), &item.description)?;
    let dispatch_field = item_field(index, "dispatch_quantity");
    let dispatch_quantity = match item.dispatch_quantity {
        Some(qty) => positive(&dispatch_field, qty)?,
        None => return Err(ValidationError::Missing(dispatch_field)),
    };
    let ordered_quantity = non_negative(&item_field(index, "ordered_quantity"), item.ordered_quantity)?;

    Ok(CreateDeliveryChallanItem {
        po_item_id,
        lot_no: item.lot_no,
        material_code: optional_text(&item.material_code),
        description,
        unit: optional_text(&item.unit),
        ordered_quantity,
        dispatch_quantity,
    })
}

/// Build the `POST /dc` body, validating required fields first.
pub fn to_api_request(
    form: &DeliveryChallanForm,
) -> Result<CreateDeliveryChallanRequest, ValidationError> {
    let dc_number = required_text("dc_number", &form.dc_number)?;
    let dc_date = required_date("dc_date", &form.dc_date)?;
    let po_number = required_text("po_number", &form.po_number)?;
    let consignee_name = required_text("consignee_name", &form.consignee_name)?;

    if form.items.is_empty() {
        return Err(ValidationError::NoItems);
    }
    let items = form
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| item_to_api_request(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CreateDeliveryChallanRequest {
        dc_number,
        dc_date,
        po_number,
        consignee_name,
        consignee_gstin: optional_text(&form.consignee_gstin),
        consignee_address: optional_text(&form.consignee_address),
        vehicle_no: optional_text(&form.vehicle_no),
        lr_no: optional_text(&form.lr_no),
        transporter: optional_text(&form.transporter),
        eway_bill_no: optional_text(&form.eway_bill_no),
        remarks: optional_text(&form.remarks),
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_delivery_challan::aggregate::DeliveryChallanHeader;

    fn full_dc() -> DeliveryChallan {
        DeliveryChallan {
            header: DeliveryChallanHeader {
                dc_number: "DC-101".to_string(),
                dc_date: "2024-03-20".to_string(),
                po_number: "4500012345".to_string(),
                consignee_name: "BHEL Trichy".to_string(),
                consignee_gstin: Some("33AAACB4146P1ZK".to_string()),
                consignee_address: Some("Tiruchirappalli".to_string()),
                vehicle_no: Some("TN45AB1234".to_string()),
                lr_no: Some("LR-77".to_string()),
                transporter: Some("VRL".to_string()),
                eway_bill_no: Some("EWB-1".to_string()),
                remarks: Some("Urgent".to_string()),
                created_at: Some("2024-03-20T10:00:00Z".to_string()),
            },
            items: vec![DeliveryChallanItem {
                id: Some("line-1".to_string()),
                po_item_id: "a".to_string(),
                lot_no: Some(1),
                material_code: Some("M-a".to_string()),
                description: "Bush".to_string(),
                unit: Some("NOS".to_string()),
                ordered_quantity: 10.0,
                dispatch_quantity: 6.0,
            }],
        }
    }

    fn minimal_dc() -> DeliveryChallan {
        let mut dc = full_dc();
        dc.header.consignee_gstin = None;
        dc.header.consignee_address = None;
        dc.header.vehicle_no = None;
        dc.header.lr_no = None;
        dc.header.transporter = None;
        dc.header.eway_bill_no = None;
        dc.header.remarks = None;
        dc.header.created_at = None;
        dc.items[0].material_code = None;
        dc.items[0].unit = None;
        dc.items[0].lot_no = None;
        dc
    }

    fn assert_round_trip(dc: &DeliveryChallan) {
        let request = to_api_request(&to_ui_model(dc)).unwrap();
        let h = &dc.header;
        assert_eq!(request.dc_number, h.dc_number);
        assert_eq!(request.dc_date, h.dc_date);
        assert_eq!(request.po_number, h.po_number);
        assert_eq!(request.consignee_name, h.consignee_name);
        assert_eq!(request.consignee_gstin, h.consignee_gstin);
        assert_eq!(request.consignee_address, h.consignee_address);
        assert_eq!(request.vehicle_no, h.vehicle_no);
        assert_eq!(request.lr_no, h.lr_no);
        assert_eq!(request.transporter, h.transporter);
        assert_eq!(request.eway_bill_no, h.eway_bill_no);
        assert_eq!(request.remarks, h.remarks);
        assert_eq!(request.items.len(), dc.items.len());
        for (req_item, item) in request.items.iter().zip(&dc.items) {
            assert_eq!(req_item.po_item_id, item.po_item_id);
            assert_eq!(req_item.lot_no, item.lot_no);
            assert_eq!(req_item.material_code, item.material_code);
            assert_eq!(req_item.description, item.description);
            assert_eq!(req_item.unit, item.unit);
            assert_eq!(req_item.ordered_quantity, item.ordered_quantity);
            assert_eq!(req_item.dispatch_quantity, item.dispatch_quantity);
        }
    }

    #[test]
    fn test_round_trip_reconstructs_payload() {
        assert_round_trip(&full_dc());
        assert_round_trip(&minimal_dc());
    }

    #[test]
    fn test_ui_model_fills_defaults() {
        let form = to_ui_model(&minimal_dc());
        assert_eq!(form.vehicle_no, "");
        assert_eq!(form.items[0].unit, "");
        assert_eq!(form.items[0].dispatch_quantity, Some(6.0));
        assert_eq!(form.created_at, None);
    }

    #[test]
    fn test_ui_model_keeps_read_only_fields() {
        let form = to_ui_model(&full_dc());
        assert_eq!(form.created_at.as_deref(), Some("2024-03-20T10:00:00Z"));
        assert_eq!(form.items[0].id.as_deref(), Some("line-1"));
    }

    #[test]
    fn test_missing_required_header_field() {
        let mut form = to_ui_model(&full_dc());
        form.dc_number = "  ".to_string();
        assert_eq!(
            to_api_request(&form),
            Err(ValidationError::Missing("dc_number".to_string()))
        );
    }

    #[test]
    fn test_invalid_date() {
        let mut form = to_ui_model(&full_dc());
        form.dc_date = "20/03/2024".to_string();
        assert!(matches!(
            to_api_request(&form),
            Err(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_no_items() {
        let mut form = to_ui_model(&full_dc());
        form.items.clear();
        assert_eq!(to_api_request(&form), Err(ValidationError::NoItems));
    }

    #[test]
    fn test_blank_dispatch_quantity() {
        let mut form = to_ui_model(&full_dc());
        form.items[0].dispatch_quantity = None;
        assert_eq!(
            to_api_request(&form),
            Err(ValidationError::Missing("items[0].dispatch_quantity".to_string()))
        );

        form.items[0].dispatch_quantity = Some(0.0);
        assert_eq!(
            to_api_request(&form),
            Err(ValidationError::NonPositive("items[0].dispatch_quantity".to_string()))
        );
    }

    #[test]
    fn test_text_is_trimmed_and_blank_optional_dropped() {
        let mut form = to_ui_model(&minimal_dc());
        form.dc_number = " DC-102 ".to_string();
        form.vehicle_no = "   ".to_string();
        let request = to_api_request(&form).unwrap();
        assert_eq!(request.dc_number, "DC-102");
        assert_eq!(request.vehicle_no, None);
    }
}
