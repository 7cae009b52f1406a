use crate::domain::a004_srv::api::{load_page_props, SrvPageProps};
use crate::routes::paths::{invoice_route, po_route};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status::Loading;
use crate::shared::config;
use crate::shared::date_utils::format_date;
use crate::shared::format::format_quantity;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::domain::a004_srv::aggregate::{Srv, SrvStats};
use contracts::domain::common::EntityKind;
use leptos::prelude::*;
use leptos::task::spawn_local;

impl Searchable for Srv {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.srv_number.as_str(), self.po_number.as_str()];
        if let Some(invoice) = &self.invoice_number {
            fields.push(invoice.as_str());
        }
        fields
    }
}

/// SRV register with summary cards. Fetch failures degrade to an empty page.
#[component]
pub fn SrvList() -> impl IntoView {
    let (props, set_props) = signal(None::<SrvPageProps>);
    let (query, set_query) = signal(String::new());
    let min_chars = config::current().ui.search_min_chars;

    Effect::new(move |_| {
        spawn_local(async move {
            set_props.set(Some(load_page_props().await));
        });
    });

    let stat = move |read: fn(&SrvStats) -> String| {
        Signal::derive(move || {
            props.with(|p| p.as_ref().and_then(|p| p.stats.as_ref()).map(read))
        })
    };

    let visible = move || {
        props.with(|p| match p {
            Some(p) => filter_list(&p.srvs, &query.get(), min_chars),
            None => Vec::new(),
        })
    };

    view! {
        <PageFrame page_id=format!("{}--dashboard", EntityKind::Srv.full_name()) category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{EntityKind::Srv.list_name()}</h1>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        placeholder="SRV, PO or invoice"
                        on_search=Callback::new(move |q: String| set_query.set(q))
                    />
                </div>
            </div>

            <div class="stat-grid">
                <StatCard label="SRVs" icon_name="srv" value=stat(|s| s.total_srvs.to_string()) />
                <StatCard label="Received" icon_name="po" value=stat(|s| format_quantity(s.total_received_qty)) />
                <StatCard label="Rejected" icon_name="alert" value=stat(|s| format_quantity(s.total_rejected_qty)) />
                <StatCard
                    label="Rejection rate"
                    icon_name="alert"
                    value=stat(|s| format!("{:.2}%", s.rejection_rate))
                />
            </div>

            <div class="page__content">
                {move || {
                    if props.with(|p| p.is_none()) {
                        return view! { <Loading /> }.into_any();
                    }
                    if props.with(|p| p.as_ref().is_some_and(|p| p.srvs.is_empty())) {
                        return view! { <p class="page__empty">"No SRVs recorded."</p> }.into_any();
                    }
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"SRV"</th>
                                    <th>"Date"</th>
                                    <th>"PO"</th>
                                    <th>"Invoice"</th>
                                    <th class="table__cell--right">"Received"</th>
                                    <th class="table__cell--right">"Rejected"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=visible
                                    key=|srv| srv.srv_number.clone()
                                    children=move |srv: Srv| {
                                        view! {
                                            <tr>
                                                <td>{srv.srv_number.clone()}</td>
                                                <td>{format_date(&srv.srv_date)}</td>
                                                <td><a href=po_route(&srv.po_number)>{srv.po_number.clone()}</a></td>
                                                <td>
                                                    {srv.invoice_number.clone().map(|number| {
                                                        view! { <a href=invoice_route(&number)>{number.clone()}</a> }
                                                    })}
                                                </td>
                                                <td class="table__cell--right">{format_quantity(srv.received_qty)}</td>
                                                <td class="table__cell--right">{format_quantity(srv.rejected_qty)}</td>
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
