//! Common types shared by all entities

pub mod created;
pub mod entity_kind;

// Re-exports
pub use created::CreatedResponse;
pub use entity_kind::EntityKind;
