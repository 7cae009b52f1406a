use crate::domain::a002_delivery_challan::adapter::to_ui_model;
use crate::domain::a002_delivery_challan::api::fetch_delivery_challan;
use crate::domain::a002_delivery_challan::model::DeliveryChallanForm;
use crate::routes::paths::{create_invoice_route, list_route, normalize_id, po_route, RouteParam};
use crate::shared::components::status::{ErrorBanner, Loading, NotFound};
use crate::shared::date_utils::format_date;
use crate::shared::format::format_quantity;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::common::EntityKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use thaw::*;

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "—".to_string()
    } else {
        value.to_string()
    }
}

#[component]
pub fn DeliveryChallanDetail() -> impl IntoView {
    let params = use_params_map();
    let dc_id = Memo::new(move |_| {
        params.with(|p| normalize_id(RouteParam::from_params(p, "id").as_ref()))
    });

    let (doc, set_doc) = signal(None::<DeliveryChallanForm>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let id = dc_id.get();
        set_doc.set(None);
        set_error.set(None);
        if id.is_empty() {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            let result = fetch_delivery_challan(&id).await;
            if dc_id.get_untracked() != id {
                return;
            }
            match result {
                Ok(dc) => set_doc.set(Some(to_ui_model(&dc))),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    view! {
        <PageFrame page_id=format!("{}--detail", EntityKind::DeliveryChallan.full_name()) category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || format!("Delivery Challan {}", dc_id.get())}</h1>
                </div>
                <div class="page__header-right">
                    <a class="button button--subtle" href=list_route(EntityKind::DeliveryChallan)>"✕ Close"</a>
                    <a class="button button--primary" href=move || create_invoice_route(dc_id.get())>"New invoice"</a>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    if dc_id.with(|id| id.is_empty()) {
                        return view! { <NotFound what="Delivery challan" /> }.into_any();
                    }
                    if loading.get() {
                        return view! { <Loading /> }.into_any();
                    }
                    if let Some(err) = error.get() {
                        return view! { <ErrorBanner message=err /> }.into_any();
                    }
                    match doc.get() {
                        Some(dc) => view! { <DeliveryChallanView dc=dc /> }.into_any(),
                        None => ().into_any(),
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn DeliveryChallanView(dc: DeliveryChallanForm) -> impl IntoView {
    let total = dc.total_dispatch_quantity();

    view! {
        <Card>
            <div class="details-grid">
                <span class="form__label">"DC Number:"</span>
                <strong>{dc.dc_number.clone()}</strong>

                <span class="form__label">"DC Date:"</span>
                <span>{format_date(&dc.dc_date)}</span>

                <span class="form__label">"Purchase Order:"</span>
                <a href=po_route(&dc.po_number)>{dc.po_number.clone()}</a>

                <span class="form__label">"Consignee:"</span>
                <span>{dc.consignee_name.clone()}</span>

                <span class="form__label">"GSTIN:"</span>
                <span>{or_dash(&dc.consignee_gstin)}</span>

                <span class="form__label">"Address:"</span>
                <span>{or_dash(&dc.consignee_address)}</span>

                <span class="form__label">"Vehicle / LR:"</span>
                <span>{or_dash(&dc.vehicle_no)} " / " {or_dash(&dc.lr_no)}</span>

                <span class="form__label">"Transporter:"</span>
                <span>{or_dash(&dc.transporter)}</span>

                <span class="form__label">"E-way bill:"</span>
                <span>{or_dash(&dc.eway_bill_no)}</span>

                <span class="form__label">"Remarks:"</span>
                <span>{or_dash(&dc.remarks)}</span>

                <span class="form__label">"Created:"</span>
                <span>{dc.created_at.as_deref().map(format_date).unwrap_or_else(|| "—".to_string())}</span>
            </div>
        </Card>

        <table class="table">
            <thead>
                <tr>
                    <th>"Lot"</th>
                    <th>"Material"</th>
                    <th>"Description"</th>
                    <th class="table__cell--right">"Ordered"</th>
                    <th class="table__cell--right">"Dispatched"</th>
                </tr>
            </thead>
            <tbody>
                {dc.items.into_iter().map(|item| {
                    view! {
                        <tr>
                            <td>{item.lot_no.map(|l| l.to_string()).unwrap_or_default()}</td>
                            <td>{item.material_code}</td>
                            <td>{item.description}</td>
                            <td class="table__cell--right">{format_quantity(item.ordered_quantity)}</td>
                            <td class="table__cell--right">
                                {item.dispatch_quantity.map(format_quantity).unwrap_or_default()} " " {item.unit}
                            </td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
            <tfoot>
                <tr>
                    <td colspan="4">"Total dispatched"</td>
                    <td class="table__cell--right">{format_quantity(total)}</td>
                </tr>
            </tfoot>
        </table>
    }
}
