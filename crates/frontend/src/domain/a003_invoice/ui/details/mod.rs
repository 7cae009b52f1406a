use crate::domain::a003_invoice::adapter::to_ui_model;
use crate::domain::a003_invoice::api::fetch_invoice;
use crate::domain::a003_invoice::model::InvoiceForm;
use crate::routes::paths::{dc_route, list_route, normalize_id, RouteParam};
use crate::shared::components::status::{ErrorBanner, Loading, NotFound};
use crate::shared::date_utils::format_date;
use crate::shared::format::{format_amount, format_quantity};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::common::EntityKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use thaw::*;

#[component]
pub fn InvoiceDetail() -> impl IntoView {
    let params = use_params_map();
    let invoice_id = Memo::new(move |_| {
        params.with(|p| normalize_id(RouteParam::from_params(p, "id").as_ref()))
    });

    let (doc, set_doc) = signal(None::<InvoiceForm>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let id = invoice_id.get();
        set_doc.set(None);
        set_error.set(None);
        if id.is_empty() {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            let result = fetch_invoice(&id).await;
            if invoice_id.get_untracked() != id {
                return;
            }
            match result {
                Ok(invoice) => set_doc.set(Some(to_ui_model(&invoice))),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    view! {
        <PageFrame page_id=format!("{}--detail", EntityKind::Invoice.full_name()) category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || format!("Invoice {}", invoice_id.get())}</h1>
                </div>
                <div class="page__header-right">
                    <a class="button button--subtle" href=list_route(EntityKind::Invoice)>"✕ Close"</a>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    if invoice_id.with(|id| id.is_empty()) {
                        return view! { <NotFound what="Invoice" /> }.into_any();
                    }
                    if loading.get() {
                        return view! { <Loading /> }.into_any();
                    }
                    if let Some(err) = error.get() {
                        return view! { <ErrorBanner message=err /> }.into_any();
                    }
                    match doc.get() {
                        Some(invoice) => view! { <InvoiceView invoice=invoice /> }.into_any(),
                        None => ().into_any(),
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn InvoiceView(invoice: InvoiceForm) -> impl IntoView {
    let text_or_dash = |value: &str| {
        if value.is_empty() {
            "—".to_string()
        } else {
            value.to_string()
        }
    };

    view! {
        <Card>
            <div class="details-grid">
                <span class="form__label">"Invoice Number:"</span>
                <strong>{invoice.invoice_number.clone()}</strong>

                <span class="form__label">"Invoice Date:"</span>
                <span>{format_date(&invoice.invoice_date)}</span>

                <span class="form__label">"Delivery Challan:"</span>
                <a href=dc_route(&invoice.dc_number)>{invoice.dc_number.clone()}</a>

                <span class="form__label">"Buyer:"</span>
                <span>{invoice.buyer_name.clone()}</span>

                <span class="form__label">"GSTIN:"</span>
                <span>{text_or_dash(&invoice.buyer_gstin)}</span>

                <span class="form__label">"Address:"</span>
                <span>{text_or_dash(&invoice.buyer_address)}</span>

                <span class="form__label">"Place of supply:"</span>
                <span>{text_or_dash(&invoice.place_of_supply)}</span>

                <span class="form__label">"Payment terms:"</span>
                <span>{text_or_dash(&invoice.payment_terms)}</span>

                <span class="form__label">"Remarks:"</span>
                <span>{text_or_dash(&invoice.remarks)}</span>
            </div>
        </Card>

        <table class="table">
            <thead>
                <tr>
                    <th>"Description"</th>
                    <th>"HSN"</th>
                    <th class="table__cell--right">"Qty"</th>
                    <th class="table__cell--right">"Rate"</th>
                    <th class="table__cell--right">"Taxable"</th>
                </tr>
            </thead>
            <tbody>
                {invoice.items.iter().map(|item| {
                    view! {
                        <tr>
                            <td>{item.description.clone()}</td>
                            <td>{item.hsn_code.clone()}</td>
                            <td class="table__cell--right">
                                {item.quantity.map(format_quantity).unwrap_or_default()} " " {item.unit.clone()}
                            </td>
                            <td class="table__cell--right">{item.rate.map(format_amount).unwrap_or_default()}</td>
                            <td class="table__cell--right">{format_amount(item.taxable_value)}</td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
            <tfoot>
                <tr>
                    <td colspan="4">"Taxable value"</td>
                    <td class="table__cell--right">{format_amount(invoice.taxable_value)}</td>
                </tr>
                <tr>
                    <td colspan="4">"CGST"</td>
                    <td class="table__cell--right">{format_amount(invoice.cgst)}</td>
                </tr>
                <tr>
                    <td colspan="4">"SGST"</td>
                    <td class="table__cell--right">{format_amount(invoice.sgst)}</td>
                </tr>
                <tr>
                    <td colspan="4"><strong>"Invoice total"</strong></td>
                    <td class="table__cell--right"><strong>{format_amount(invoice.total_invoice_value)}</strong></td>
                </tr>
            </tfoot>
        </table>
    }
}
