use serde::{Deserialize, Serialize};

/// Ответ backend на создание документа
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// Идентификатор созданного документа
    pub id: String,
}
