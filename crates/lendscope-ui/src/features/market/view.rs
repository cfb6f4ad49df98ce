//! Paginated lending market table.
//!
//! # Design
//! - The pager emits raw page requests; `apply_page_action` clamps them.
//! - Rows come from `select_market_page`, never from slicing in the view.

use crate::components::pagination::Pagination;
use crate::components::table::Table;
use crate::core::logic::{MARKET_HEADERS, loan_offer_cells, range_label};
use crate::core::pagination::PageAction;
use crate::core::store::{AppStore, apply_page_action, select_market_page};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(MarketPanel)]
pub(crate) fn market_panel() -> Html {
    let page = use_selector(|store: &AppStore| select_market_page(&store.market));
    let dispatch = Dispatch::<AppStore>::new();

    let on_change = Callback::from(move |requested: usize| {
        dispatch.reduce_mut(|store| {
            apply_page_action(&mut store.market, PageAction::Set(requested));
        });
    });

    let headers: Vec<AttrValue> = MARKET_HEADERS.iter().copied().map(AttrValue::from).collect();
    let rows: Vec<Vec<AttrValue>> = page
        .rows
        .iter()
        .map(|offer| loan_offer_cells(offer).into_iter().map(AttrValue::from).collect())
        .collect();

    html! {
        <section class="w-full">
            <div class="mb-3 rounded-xl bg-[#FFFFFF0D] p-4 pb-6">
                <Table headers={headers} rows={rows} empty_label={AttrValue::from("No offers")} />
            </div>
            <div class="flex items-center justify-end gap-4">
                <span class="text-sm opacity-70">{range_label(page.range, page.total_items)}</span>
                <Pagination
                    current={page.current_page}
                    total={page.total_pages}
                    on_change={on_change}
                />
            </div>
        </section>
    }
}
