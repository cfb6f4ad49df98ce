//! Asset overview cards and the health gauge.

use crate::components::health_gauge::HealthGauge;
use crate::components::info_card::InfoCard;
use crate::core::logic::overview_entries;
use crate::core::store::{AppStore, select_gauge};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(PortfolioSection)]
pub(crate) fn portfolio_section() -> Html {
    let entries = use_selector(|store: &AppStore| overview_entries(&store.portfolio.snapshot.overview));
    let gauge = use_selector(|store: &AppStore| select_gauge(&store.portfolio));

    html! {
        <section class="flex items-center justify-between gap-4">
            <div class="my-8 flex h-72 w-5/6 flex-row items-center justify-center rounded-3xl border border-neutral-700 bg-[#ffffff0e]">
                <div class="grid h-fit grid-cols-2 place-items-start gap-16 xl:grid-cols-4">
                    {for entries.iter().map(|entry| html! {
                        <InfoCard
                            title={entry.label.clone()}
                            value={entry.value.clone()}
                            info={entry.info.clone().map(AttrValue::from)}
                        />
                    })}
                </div>
            </div>
            <HealthGauge gauge={(*gauge).clone()} />
        </section>
    }
}
