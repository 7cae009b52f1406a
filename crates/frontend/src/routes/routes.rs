use crate::domain::a001_purchase_order::ui::details::PurchaseOrderDetail;
use crate::domain::a001_purchase_order::ui::list::PurchaseOrderList;
use crate::domain::a002_delivery_challan::ui::create::DeliveryChallanCreate;
use crate::domain::a002_delivery_challan::ui::details::DeliveryChallanDetail;
use crate::domain::a002_delivery_challan::ui::list::DeliveryChallanList;
use crate::domain::a003_invoice::ui::create::InvoiceCreate;
use crate::domain::a003_invoice::ui::details::InvoiceDetail;
use crate::domain::a003_invoice::ui::list::InvoiceList;
use crate::domain::a004_srv::ui::list::SrvList;
use crate::layout::Shell;
use crate::shared::components::status::NotFound;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Client-side routing table.
///
/// Detail routes take the id as a wildcard so that ids containing `/`
/// (encoded or not) still reach the page; the page joins the segments back.
/// The static `create` segments outrank the wildcards.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound what="Page" /> }>
                    <Route path=path!("/") view=PurchaseOrderList />
                    <Route path=path!("/po/*id") view=PurchaseOrderDetail />
                    <Route path=path!("/dc") view=DeliveryChallanList />
                    <Route path=path!("/dc/create") view=DeliveryChallanCreate />
                    <Route path=path!("/dc/*id") view=DeliveryChallanDetail />
                    <Route path=path!("/invoice") view=InvoiceList />
                    <Route path=path!("/invoice/create") view=InvoiceCreate />
                    <Route path=path!("/invoice/*id") view=InvoiceDetail />
                    <Route path=path!("/srv") view=SrvList />
                </Routes>
            </Shell>
        </Router>
    }
}
