use serde::{Deserialize, Serialize};

/// Вид сущности, адресуемой через маршруты и API
///
/// Каждый вид живёт в собственном пространстве идентификаторов:
/// один и тот же id может одновременно обозначать PO и DC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    PurchaseOrder,
    DeliveryChallan,
    Invoice,
    Srv,
}

impl EntityKind {
    /// Индекс сущности в системе (например, "a001")
    pub fn aggregate_index(&self) -> &'static str {
        match self {
            EntityKind::PurchaseOrder => "a001",
            EntityKind::DeliveryChallan => "a002",
            EntityKind::Invoice => "a003",
            EntityKind::Srv => "a004",
        }
    }

    /// Сегмент пути, общий для UI-маршрутов и REST API (`/po`, `/api/po`)
    pub fn route_segment(&self) -> &'static str {
        match self {
            EntityKind::PurchaseOrder => "po",
            EntityKind::DeliveryChallan => "dc",
            EntityKind::Invoice => "invoice",
            EntityKind::Srv => "srv",
        }
    }

    /// Имя элемента для UI (единственное число)
    pub fn element_name(&self) -> &'static str {
        match self {
            EntityKind::PurchaseOrder => "Purchase Order",
            EntityKind::DeliveryChallan => "Delivery Challan",
            EntityKind::Invoice => "Invoice",
            EntityKind::Srv => "SRV",
        }
    }

    /// Имя списка для UI (множественное число)
    pub fn list_name(&self) -> &'static str {
        match self {
            EntityKind::PurchaseOrder => "Purchase Orders",
            EntityKind::DeliveryChallan => "Delivery Challans",
            EntityKind::Invoice => "Invoices",
            EntityKind::Srv => "Stores Receipt Vouchers",
        }
    }

    /// Полное имя сущности (например, "a002_dc")
    pub fn full_name(&self) -> String {
        format!("{}_{}", self.aggregate_index(), self.route_segment())
    }

    pub fn all() -> [EntityKind; 4] {
        [
            EntityKind::PurchaseOrder,
            EntityKind::DeliveryChallan,
            EntityKind::Invoice,
            EntityKind::Srv,
        ]
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.element_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_segments_are_unique() {
        let mut segments: Vec<&str> = EntityKind::all().iter().map(|k| k.route_segment()).collect();
        segments.sort();
        segments.dedup();
        assert_eq!(segments.len(), 4);
    }

    #[test]
    fn test_full_name() {
        assert_eq!(EntityKind::DeliveryChallan.full_name(), "a002_dc");
        assert_eq!(EntityKind::Invoice.full_name(), "a003_invoice");
    }
}
