use crate::domain::a001_purchase_order::api::fetch_purchase_order;
use crate::domain::a002_delivery_challan::api::fetch_delivery_challan;
use crate::domain::a003_invoice::adapter::to_api_request;
use crate::domain::a003_invoice::api::create_invoice;
use crate::domain::a003_invoice::model::{
    InvoiceForm, InvoiceItemForm, DEFAULT_CGST_RATE, DEFAULT_SGST_RATE,
};
use crate::routes::paths::{dc_route, invoice_route, normalize_id, RouteParam};
use crate::shared::components::form_field::{date_field, text_field};
use crate::shared::components::number_input::NumberInput;
use crate::shared::components::status::{ErrorBanner, Loading, NotFound};
use crate::shared::components::textarea::Textarea;
use crate::shared::format::format_amount;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CREATE;
use contracts::domain::common::EntityKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

/// Apply `edit` to line `index` and bring the totals back in line.
fn update_line(form: RwSignal<InvoiceForm>, index: usize, edit: impl FnOnce(&mut InvoiceItemForm)) {
    form.update(|f| {
        if let Some(item) = f.items.get_mut(index) {
            edit(item);
        }
        f.recalculate_totals(DEFAULT_CGST_RATE, DEFAULT_SGST_RATE);
    });
}

#[component]
pub fn InvoiceCreate() -> impl IntoView {
    let query = use_query_map();
    let dc_id = Memo::new(move |_| {
        query.with(|q| normalize_id(q.get("dc").map(RouteParam::from).as_ref()))
    });

    let form = RwSignal::new(InvoiceForm::default());
    let (ready, set_ready) = signal(false);
    let (loading, set_loading) = signal(false);
    let (load_error, set_load_error) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);
    let navigate = StoredValue::new_local(use_navigate());

    Effect::new(move |_| {
        let id = dc_id.get();
        set_ready.set(false);
        set_load_error.set(None);
        if id.is_empty() {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            let dc = match fetch_delivery_challan(&id).await {
                Ok(dc) => dc,
                Err(e) => {
                    if dc_id.get_untracked() == id {
                        log::error!("Failed to load delivery challan {}: {}", id, e);
                        set_load_error.set(Some(e));
                        set_loading.set(false);
                    }
                    return;
                }
            };
            // Rates are a convenience; the form still works without the PO.
            let po = match fetch_purchase_order(&dc.header.po_number).await {
                Ok(po) => Some(po),
                Err(e) => {
                    log::warn!("Purchase order {} unavailable, rates left blank: {}", dc.header.po_number, e);
                    None
                }
            };
            if dc_id.get_untracked() != id {
                return;
            }
            form.set(InvoiceForm::draft_from_dc_today(&dc, po.as_ref()));
            set_ready.set(true);
            set_loading.set(false);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let request = match form.with_untracked(to_api_request) {
            Ok(request) => request,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            match create_invoice(&request).await {
                Ok(id) => {
                    log::info!("Invoice {} created", id);
                    set_saving.set(false);
                    navigate.with_value(|nav| nav(&invoice_route(&id), Default::default()));
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_saving.set(false);
                }
            }
        });
    };

    let line_indexes = move || form.with(|f| (0..f.items.len()).collect::<Vec<usize>>());
    let amount = move |read: fn(&InvoiceForm) -> f64| form.with(|f| format_amount(read(f)));

    view! {
        <PageFrame page_id=format!("{}--create", EntityKind::Invoice.full_name()) category=PAGE_CAT_CREATE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"New Invoice"</h1>
                </div>
                <div class="page__header-right">
                    <a class="button button--subtle" href=move || dc_route(dc_id.get())>"✕ Cancel"</a>
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
                    if let Some(err) = load_error.get() {
                        return view! { <ErrorBanner message=err /> }.into_any();
                    }
                    if !ready.get() {
                        return ().into_any();
                    }
                    view! {
                        <form class="form" on:submit=on_submit>
                            {move || error.get().map(|message| view! { <ErrorBanner message=message /> })}

                            <div class="form__grid">
                                {text_field("Invoice Number", form, |f| f.invoice_number.clone(), |f, v| f.invoice_number = v)}
                                {date_field("Invoice Date", form, |f| f.invoice_date.clone(), |f, v| f.invoice_date = v)}
                                <label class="form__field">
                                    <span class="form__label">"Delivery Challan"</span>
                                    <input class="form__input" type="text" readonly prop:value=move || form.with(|f| f.dc_number.clone()) />
                                </label>
                                {text_field("Buyer", form, |f| f.buyer_name.clone(), |f, v| f.buyer_name = v)}
                                {text_field("Buyer GSTIN", form, |f| f.buyer_gstin.clone(), |f, v| f.buyer_gstin = v)}
                                {text_field("Buyer Address", form, |f| f.buyer_address.clone(), |f, v| f.buyer_address = v)}
                                {text_field("Place of Supply", form, |f| f.place_of_supply.clone(), |f, v| f.place_of_supply = v)}
                                {text_field("Payment Terms", form, |f| f.payment_terms.clone(), |f, v| f.payment_terms = v)}
                            </div>

                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Description"</th>
                                        <th>"HSN"</th>
                                        <th>"Qty"</th>
                                        <th>"Rate"</th>
                                        <th class="table__cell--right">"Taxable"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=line_indexes
                                        key=|index| *index
                                        children=move |index: usize| {
                                            let line = move |read: fn(&InvoiceItemForm) -> String| {
                                                form.with(|f| f.items.get(index).map(read).unwrap_or_default())
                                            };
                                            view! {
                                                <tr>
                                                    <td>{move || line(|item| item.description.clone())}</td>
                                                    <td>
                                                        <input
                                                            class="form__input"
                                                            type="text"
                                                            prop:value=move || line(|item| item.hsn_code.clone())
                                                            on:input=move |ev| {
                                                                let value = event_target_value(&ev);
                                                                update_line(form, index, |item| item.hsn_code = value);
                                                            }
                                                        />
                                                    </td>
                                                    <td>
                                                        <NumberInput
                                                            value=Signal::derive(move || {
                                                                form.with(|f| f.items.get(index).and_then(|item| item.quantity))
                                                            })
                                                            on_change=Callback::new(move |value: Option<f64>| {
                                                                update_line(form, index, |item| item.quantity = value);
                                                            })
                                                            min=0.0
                                                        />
                                                    </td>
                                                    <td>
                                                        <NumberInput
                                                            value=Signal::derive(move || {
                                                                form.with(|f| f.items.get(index).and_then(|item| item.rate))
                                                            })
                                                            on_change=Callback::new(move |value: Option<f64>| {
                                                                update_line(form, index, |item| item.rate = value);
                                                            })
                                                            min=0.0
                                                            placeholder="Rate"
                                                        />
                                                    </td>
                                                    <td class="table__cell--right">
                                                        {move || line(|item| format_amount(item.taxable_value))}
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                                <tfoot>
                                    <tr>
                                        <td colspan="4">"Taxable value"</td>
                                        <td class="table__cell--right">{move || amount(|f| f.taxable_value)}</td>
                                    </tr>
                                    <tr>
                                        <td colspan="4">{format!("CGST {}%", DEFAULT_CGST_RATE)}</td>
                                        <td class="table__cell--right">{move || amount(|f| f.cgst)}</td>
                                    </tr>
                                    <tr>
                                        <td colspan="4">{format!("SGST {}%", DEFAULT_SGST_RATE)}</td>
                                        <td class="table__cell--right">{move || amount(|f| f.sgst)}</td>
                                    </tr>
                                    <tr>
                                        <td colspan="4"><strong>"Invoice total"</strong></td>
                                        <td class="table__cell--right">
                                            <strong>{move || amount(|f| f.total_invoice_value)}</strong>
                                        </td>
                                    </tr>
                                </tfoot>
                            </table>

                            <label class="form__field">
                                <span class="form__label">"Remarks"</span>
                                <Textarea
                                    value=Signal::derive(move || form.with(|f| f.remarks.clone()))
                                    on_change=Callback::new(move |text: String| form.update(|f| f.remarks = text))
                                    max_length=500
                                />
                            </label>

                            <div class="form__actions">
                                <button type="submit" class="button button--primary" disabled=move || saving.get()>
                                    {move || if saving.get() { "Saving..." } else { "Create Invoice" }}
                                </button>
                            </div>
                        </form>
                    }
                    .into_any()
                }}
            </div>
        </PageFrame>
    }
}
