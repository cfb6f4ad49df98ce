use crate::core::store::{AppStore, configure_market, set_offers, set_portfolio};
use crate::features::market::MarketPanel;
use crate::features::portfolio::PortfolioSection;
use crate::models::{demo_offers, demo_portfolio};
use gloo::console;
use preferences::load_dashboard_config;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

mod preferences;

#[function_component(LendscopeApp)]
pub(crate) fn lendscope_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();

    use_effect_with_deps(
        move |_| {
            let config = load_dashboard_config();
            dispatch.reduce_mut(|store| {
                set_portfolio(&mut store.portfolio, demo_portfolio());
                set_offers(&mut store.market, demo_offers());
                if let Err(err) = configure_market(&mut store.market, &config) {
                    console::error!("market configuration rejected", err.to_string());
                }
            });
            || ()
        },
        (),
    );

    html! {
        <main class="mx-auto flex max-w-7xl flex-col gap-6 p-6">
            <PortfolioSection />
            <MarketPanel />
        </main>
    }
}

/// Mount the dashboard into `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<LendscopeApp>::with_root(root).render();
    } else {
        yew::Renderer::<LendscopeApp>::new().render();
    }
}
