use crate::domain::a001_purchase_order::api::fetch_purchase_orders;
use crate::routes::paths::{create_dc_route, po_route};
use crate::shared::components::status::{ErrorBanner, Loading};
use crate::shared::config;
use crate::shared::date_utils::format_date;
use crate::shared::format::format_amount;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_purchase_order::aggregate::PurchaseOrderHeader;
use contracts::domain::common::EntityKind;
use leptos::prelude::*;
use leptos::task::spawn_local;

impl Searchable for PurchaseOrderHeader {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.po_number.as_str(), self.supplier_name.as_str()]
    }
}

#[component]
pub fn PurchaseOrderList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<PurchaseOrderHeader>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (query, set_query) = signal(String::new());
    let min_chars = config::current().ui.search_min_chars;

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_purchase_orders().await {
                Ok(data) => set_items.set(data),
                Err(e) => {
                    log::error!("Failed to load purchase orders: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let visible = move || items.with(|all| filter_list(all, &query.get(), min_chars));

    view! {
        <PageFrame page_id=format!("{}--list", EntityKind::PurchaseOrder.full_name()) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{EntityKind::PurchaseOrder.list_name()}</h1>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        placeholder="PO number or supplier"
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
                                    <th>"PO Number"</th>
                                    <th>"Date"</th>
                                    <th>"Supplier"</th>
                                    <th class="table__cell--right">"Value"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=visible
                                    key=|po| po.po_number.clone()
                                    children=move |po: PurchaseOrderHeader| {
                                        view! {
                                            <tr>
                                                <td><a href=po_route(&po.po_number)>{po.po_number.clone()}</a></td>
                                                <td>{format_date(&po.po_date)}</td>
                                                <td>{po.supplier_name.clone()}</td>
                                                <td class="table__cell--right">{format_amount(po.po_value)}</td>
                                                <td>
                                                    <a class="button button--subtle" href=create_dc_route(&po.po_number)>
                                                        "New DC"
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
