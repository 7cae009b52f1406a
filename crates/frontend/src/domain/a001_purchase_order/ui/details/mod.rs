use crate::domain::a001_purchase_order::api::fetch_purchase_order;
use crate::routes::paths::{create_dc_route, list_route, normalize_id, RouteParam};
use crate::shared::components::status::{ErrorBanner, Loading, NotFound};
use crate::shared::date_utils::format_date;
use crate::shared::format::{format_amount, format_quantity};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_purchase_order::aggregate::PurchaseOrder;
use contracts::domain::common::EntityKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use thaw::*;

#[component]
pub fn PurchaseOrderDetail() -> impl IntoView {
    let params = use_params_map();
    let po_id = Memo::new(move |_| {
        params.with(|p| normalize_id(RouteParam::from_params(p, "id").as_ref()))
    });

    let (doc, set_doc) = signal(None::<PurchaseOrder>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let id = po_id.get();
        set_doc.set(None);
        set_error.set(None);
        if id.is_empty() {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            let result = fetch_purchase_order(&id).await;
            // A newer id may have been routed while this request was in flight.
            if po_id.get_untracked() != id {
                return;
            }
            match result {
                Ok(data) => set_doc.set(Some(data)),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    view! {
        <PageFrame page_id=format!("{}--detail", EntityKind::PurchaseOrder.full_name()) category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || format!("Purchase Order {}", po_id.get())}
                    </h1>
                </div>
                <div class="page__header-right">
                    <a class="button button--subtle" href=list_route(EntityKind::PurchaseOrder)>"✕ Close"</a>
                    <a class="button button--primary" href=move || create_dc_route(po_id.get())>"New DC"</a>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    if po_id.with(|id| id.is_empty()) {
                        return view! { <NotFound what="Purchase order" /> }.into_any();
                    }
                    if loading.get() {
                        return view! { <Loading /> }.into_any();
                    }
                    if let Some(err) = error.get() {
                        return view! { <ErrorBanner message=err /> }.into_any();
                    }
                    match doc.get() {
                        Some(po) => view! { <PurchaseOrderView po=po /> }.into_any(),
                        None => ().into_any(),
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn PurchaseOrderView(po: PurchaseOrder) -> impl IntoView {
    let header = po.header;
    let department = header
        .department_no
        .map(|d| d.to_string())
        .unwrap_or_else(|| "—".to_string());

    view! {
        <Card>
            <div class="details-grid">
                <span class="form__label">"PO Number:"</span>
                <strong>{header.po_number.clone()}</strong>

                <span class="form__label">"PO Date:"</span>
                <span>{format_date(&header.po_date)}</span>

                <span class="form__label">"Supplier:"</span>
                <span>{header.supplier_name.clone()} " " {header.supplier_code.clone().unwrap_or_default()}</span>

                <span class="form__label">"Department:"</span>
                <span>{department}</span>

                <span class="form__label">"PO Value:"</span>
                <strong>{format_amount(header.po_value)}</strong>

                <span class="form__label">"Remarks:"</span>
                <span>{header.remarks.clone().unwrap_or_default()}</span>
            </div>
        </Card>

        <table class="table">
            <thead>
                <tr>
                    <th>"Sl. No"</th>
                    <th>"Material"</th>
                    <th>"Description"</th>
                    <th class="table__cell--right">"Ordered"</th>
                    <th class="table__cell--right">"Delivered"</th>
                    <th class="table__cell--right">"Remaining"</th>
                    <th class="table__cell--right">"Rate"</th>
                </tr>
            </thead>
            <tbody>
                {po.items.into_iter().map(|item| {
                    let remaining = item.remaining_qty();
                    view! {
                        <tr>
                            <td>{item.po_sl_no}</td>
                            <td>{item.material_code.unwrap_or_default()}</td>
                            <td>{item.material_description}</td>
                            <td class="table__cell--right">
                                {format_quantity(item.ord_qty)} " " {item.unit.unwrap_or_default()}
                            </td>
                            <td class="table__cell--right">{format_quantity(item.delivered_qty)}</td>
                            <td class="table__cell--right">{format_quantity(remaining)}</td>
                            <td class="table__cell--right">{format_amount(item.po_rate)}</td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
}
