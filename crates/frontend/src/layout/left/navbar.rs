use crate::routes::paths::list_route;
use crate::shared::icons;
use contracts::domain::common::EntityKind;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Whether the navbar entry of `kind` owns `pathname`.
/// Purchase orders live at the root, so `/` and `/po/...` both belong to them.
pub fn is_section_active(kind: EntityKind, pathname: &str) -> bool {
    let prefix = format!("/{}", kind.route_segment());
    let in_section = pathname == prefix || pathname.starts_with(&format!("{}/", prefix));
    match kind {
        EntityKind::PurchaseOrder => pathname == "/" || in_section,
        _ => in_section,
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="main-nav-bar">
            <ul>
                {EntityKind::all().into_iter().map(|kind| {
                    let active = move || location.pathname.with(|path| is_section_active(kind, path));
                    view! {
                        <li class:active=active>
                            <a href=list_route(kind)>
                                {icons::icon(kind.route_segment())}
                                <span>{kind.list_name()}</span>
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_orders_own_root() {
        assert!(is_section_active(EntityKind::PurchaseOrder, "/"));
        assert!(is_section_active(EntityKind::PurchaseOrder, "/po/4500012345"));
        assert!(!is_section_active(EntityKind::PurchaseOrder, "/dc"));
    }

    #[test]
    fn test_create_pages_belong_to_their_section() {
        assert!(is_section_active(EntityKind::DeliveryChallan, "/dc/create"));
        assert!(is_section_active(EntityKind::Invoice, "/invoice"));
        assert!(!is_section_active(EntityKind::Invoice, "/invoices"));
        assert!(!is_section_active(EntityKind::Srv, "/"));
    }
}
