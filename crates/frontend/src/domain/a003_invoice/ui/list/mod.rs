use crate::domain::a003_invoice::api::fetch_invoices;
use crate::routes::paths::{dc_route, invoice_route};
use crate::shared::components::status::{ErrorBanner, Loading};
use crate::shared::config;
use crate::shared::date_utils::format_date;
use crate::shared::format::format_amount;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_invoice::aggregate::InvoiceHeader;
use contracts::domain::common::EntityKind;
use leptos::prelude::*;
use leptos::task::spawn_local;

impl Searchable for InvoiceHeader {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.invoice_number.as_str(),
            self.dc_number.as_str(),
            self.buyer_name.as_str(),
        ]
    }
}

#[component]
pub fn InvoiceList() -> impl IntoView {
    let (items, set_items) = signal(Vec::<InvoiceHeader>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (query, set_query) = signal(String::new());
    let min_chars = config::current().ui.search_min_chars;

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_invoices().await {
                Ok(data) => set_items.set(data),
                Err(e) => {
                    log::error!("Failed to load invoices: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let visible = move || items.with(|all| filter_list(all, &query.get(), min_chars));
    let grand_total = move || {
        items.with(|all| all.iter().map(|inv| inv.total_invoice_value).sum::<f64>())
    };

    view! {
        <PageFrame page_id=format!("{}--list", EntityKind::Invoice.full_name()) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{EntityKind::Invoice.list_name()}</h1>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        placeholder="Invoice, DC or buyer"
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
                                    <th>"Invoice"</th>
                                    <th>"Date"</th>
                                    <th>"DC"</th>
                                    <th>"Buyer"</th>
                                    <th class="table__cell--right">"Taxable"</th>
                                    <th class="table__cell--right">"Total"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=visible
                                    key=|inv| inv.invoice_number.clone()
                                    children=move |inv: InvoiceHeader| {
                                        view! {
                                            <tr>
                                                <td><a href=invoice_route(&inv.invoice_number)>{inv.invoice_number.clone()}</a></td>
                                                <td>{format_date(&inv.invoice_date)}</td>
                                                <td><a href=dc_route(&inv.dc_number)>{inv.dc_number.clone()}</a></td>
                                                <td>{inv.buyer_name.clone()}</td>
                                                <td class="table__cell--right">{format_amount(inv.taxable_value)}</td>
                                                <td class="table__cell--right">{format_amount(inv.total_invoice_value)}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                            <tfoot>
                                <tr>
                                    <td colspan="5">"Total invoiced"</td>
                                    <td class="table__cell--right">{move || format_amount(grand_total())}</td>
                                </tr>
                            </tfoot>
                        </table>
                    }
                    .into_any()
                }}
            </div>
        </PageFrame>
    }
}
