pub mod form_field;
pub mod number_input;
pub mod stat_card;
pub mod status;
pub mod textarea;
