pub mod adapter;
pub mod api;
pub mod model;
pub mod ui;
