pub mod a001_purchase_order;
pub mod a002_delivery_challan;
pub mod a003_invoice;
pub mod a004_srv;
pub mod common;
