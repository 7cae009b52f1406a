pub mod design_tokens;
