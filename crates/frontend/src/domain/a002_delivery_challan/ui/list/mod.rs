use crate::domain::a002_delivery_challan::api::fetch_delivery_challans;
use crate::routes::paths::{create_invoice_route, dc_route, po_route};
use crate::shared::components::status::{ErrorBanner, Loading};
use crate::shared::config;
use crate::shared::date_utils::format_date;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_delivery_challan::aggregate::DeliveryChallanHeader;
use contracts::domain::common::EntityKind;
use leptos::prelude::*;
use leptos::task::spawn_local;

impl Searchable for DeliveryChallanHeader {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.dc_number.as_str(),
            self.po_number.as_str(),
            self.consignee_name.as_str(),
        ]
    }
}

#[component]
pub fn DeliveryChallanList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<DeliveryChallanHeader>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (query, set_query) = signal(String::new());
    let min_chars = config::current().ui.search_min_chars;

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_delivery_challans().await {
                Ok(data) => set_items.set(data),
                Err(e) => {
                    log::error!("Failed to load delivery challans: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let visible = move || items.with(|all| filter_list(all, &query.get(), min_chars));

    view! {
        <PageFrame page_id=format!("{}--list", EntityKind::DeliveryChallan.full_name()) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{EntityKind::DeliveryChallan.list_name()}</h1>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        placeholder="DC, PO or consignee"
                        on_search=Callback::new(move |q: String| set_query.set(q))
                    />
                </div>
            </div>

            <div class="page__content">
                {move || {
                    if loading.get() {
                        return view! { <Loading /> }.into_any();
                    }
                    if let Some(err) = error.get() {
                        return view! { <ErrorBanner message=err /> }.into_any();
                    }
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"DC Number"</th>
                                    <th>"Date"</th>
                                    <th>"PO"</th>
                                    <th>"Consignee"</th>
                                    <th>"Vehicle"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=visible
                                    key=|dc| dc.dc_number.clone()
                                    children=move |dc: DeliveryChallanHeader| {
                                        view! {
                                            <tr>
                                                <td><a href=dc_route(&dc.dc_number)>{dc.dc_number.clone()}</a></td>
                                                <td>{format_date(&dc.dc_date)}</td>
                                                <td><a href=po_route(&dc.po_number)>{dc.po_number.clone()}</a></td>
                                                <td>{dc.consignee_name.clone()}</td>
                                                <td>{dc.vehicle_no.clone().unwrap_or_default()}</td>
                                                <td>
                                                    <a class="button button--subtle" href=create_invoice_route(&dc.dc_number)>
                                                        "New invoice"
                                                    </a>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    }
                    .into_any()
                }}
            </div>
        </PageFrame>
    }
}
