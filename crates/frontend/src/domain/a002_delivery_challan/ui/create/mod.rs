use crate::domain::a001_purchase_order::api::fetch_purchase_order;
use crate::domain::a002_delivery_challan::adapter::to_api_request;
use crate::domain::a002_delivery_challan::api::create_delivery_challan;
use crate::domain::a002_delivery_challan::model::{DeliveryChallanForm, DeliveryChallanItemForm};
use crate::routes::paths::{dc_route, normalize_id, po_route, RouteParam};
use crate::shared::components::form_field::{date_field, text_field};
use crate::shared::components::number_input::NumberInput;
use crate::shared::components::status::{ErrorBanner, Loading, NotFound};
use crate::shared::components::textarea::Textarea;
use crate::shared::format::format_quantity;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CREATE;
use contracts::domain::common::EntityKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

#[component]
pub fn DeliveryChallanCreate() -> impl IntoView {
    let query = use_query_map();
    let po_id = Memo::new(move |_| {
        query.with(|q| normalize_id(q.get("po").map(RouteParam::from).as_ref()))
    });

    let form = RwSignal::new(DeliveryChallanForm::default());
    let (ready, set_ready) = signal(false);
    let (loading, set_loading) = signal(false);
    let (load_error, set_load_error) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);
    let navigate = StoredValue::new_local(use_navigate());

    Effect::new(move |_| {
        let id = po_id.get();
        set_ready.set(false);
        set_load_error.set(None);
        if id.is_empty() {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            let result = fetch_purchase_order(&id).await;
            if po_id.get_untracked() != id {
                return;
            }
            match result {
                Ok(po) => {
                    form.set(DeliveryChallanForm::draft_from_po_today(&po));
                    set_ready.set(true);
                }
                Err(e) => {
                    log::error!("Failed to load purchase order {}: {}", id, e);
                    set_load_error.set(Some(e));
                }
            }
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
            match create_delivery_challan(&request).await {
                Ok(id) => {
                    log::info!("Delivery challan {} created", id);
                    set_saving.set(false);
                    navigate.with_value(|nav| nav(&dc_route(&id), Default::default()));
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_saving.set(false);
                }
            }
        });
    };

    let line_indexes = move || form.with(|f| (0..f.items.len()).collect::<Vec<usize>>());

    view! {
        <PageFrame page_id=format!("{}--create", EntityKind::DeliveryChallan.full_name()) category=PAGE_CAT_CREATE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"New Delivery Challan"</h1>
                </div>
                <div class="page__header-right">
                    <a class="button button--subtle" href=move || po_route(po_id.get())>"✕ Cancel"</a>
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
                                {text_field("DC Number", form, |f| f.dc_number.clone(), |f, v| f.dc_number = v)}
                                {date_field("DC Date", form, |f| f.dc_date.clone(), |f, v| f.dc_date = v)}
                                <label class="form__field">
                                    <span class="form__label">"Purchase Order"</span>
                                    <input class="form__input" type="text" readonly prop:value=move || form.with(|f| f.po_number.clone()) />
                                </label>
                                {text_field("Consignee", form, |f| f.consignee_name.clone(), |f, v| f.consignee_name = v)}
                                {text_field("Consignee GSTIN", form, |f| f.consignee_gstin.clone(), |f, v| f.consignee_gstin = v)}
                                {text_field("Consignee Address", form, |f| f.consignee_address.clone(), |f, v| f.consignee_address = v)}
                                {text_field("Vehicle No", form, |f| f.vehicle_no.clone(), |f, v| f.vehicle_no = v)}
                                {text_field("LR No", form, |f| f.lr_no.clone(), |f, v| f.lr_no = v)}
                                {text_field("Transporter", form, |f| f.transporter.clone(), |f, v| f.transporter = v)}
                                {text_field("E-way Bill No", form, |f| f.eway_bill_no.clone(), |f, v| f.eway_bill_no = v)}
                            </div>

                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Lot"</th>
                                        <th>"Description"</th>
                                        <th class="table__cell--right">"Ordered"</th>
                                        <th>"Dispatch"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=line_indexes
                                        key=|index| *index
                                        children=move |index: usize| {
                                            let line = move |read: fn(&DeliveryChallanItemForm) -> String| {
                                                form.with(|f| f.items.get(index).map(read).unwrap_or_default())
                                            };
                                            view! {
                                                <tr>
                                                    <td>{move || line(|item| item.lot_no.map(|l| l.to_string()).unwrap_or_default())}</td>
                                                    <td>{move || line(|item| item.description.clone())}</td>
                                                    <td class="table__cell--right">
                                                        {move || line(|item| format_quantity(item.ordered_quantity))}
                                                    </td>
                                                    <td>
                                                        <NumberInput
                                                            value=Signal::derive(move || {
                                                                form.with(|f| f.items.get(index).and_then(|item| item.dispatch_quantity))
                                                            })
                                                            on_change=Callback::new(move |value: Option<f64>| {
                                                                form.update(|f| {
                                                                    if let Some(item) = f.items.get_mut(index) {
                                                                        item.dispatch_quantity = value;
                                                                    }
                                                                });
                                                            })
                                                            min=0.0
                                                        />
                                                    </td>
                                                    <td>
                                                        <button
                                                            type="button"
                                                            class="button button--subtle"
                                                            on:click=move |_| {
                                                                form.update(|f| {
                                                                    if index < f.items.len() {
                                                                        f.items.remove(index);
                                                                    }
                                                                });
                                                            }
                                                        >
                                                            "Remove"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                                <tfoot>
                                    <tr>
                                        <td colspan="3">"Total dispatch"</td>
                                        <td>{move || form.with(|f| format_quantity(f.total_dispatch_quantity()))}</td>
                                        <td></td>
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
                                    {move || if saving.get() { "Saving..." } else { "Create DC" }}
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
